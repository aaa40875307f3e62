use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use degap_core::*;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "degap")]
#[command(about = "degap - remove gapped columns from FASTA alignments")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove gapped columns from a single alignment
    Strip {
        /// Input FASTA file (.fa/.fasta, optionally gzipped)
        #[arg(short, long)]
        input: PathBuf,

        /// Output FASTA file
        #[arg(short, long)]
        output: PathBuf,

        /// Gap symbol
        #[arg(short, long, default_value = "-")]
        gap: char,

        /// Line width for FASTA bodies
        #[arg(short, long, default_value = "60")]
        width: usize,
    },

    /// Remove gapped columns from every FASTA file in a directory
    Batch {
        /// Input directory containing FASTA files
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory (created if missing)
        #[arg(short, long, default_value = "processed")]
        output: PathBuf,

        /// Gap symbol
        #[arg(short, long, default_value = "-")]
        gap: char,

        /// Line width for FASTA bodies
        #[arg(short, long, default_value = "60")]
        width: usize,
    },

    /// Show summary information about an alignment
    Info {
        /// Input FASTA file
        #[arg(short, long)]
        input: PathBuf,

        /// Gap symbol
        #[arg(short, long, default_value = "-")]
        gap: char,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Strip {
            input,
            output,
            gap,
            width,
        } => cmd_strip(input, output, gap_byte(gap)?, width),
        Commands::Batch {
            input,
            output,
            gap,
            width,
        } => cmd_batch(input, output, gap_byte(gap)?, width),
        Commands::Info { input, gap, json } => cmd_info(input, gap_byte(gap)?, json),
    }
}

fn gap_byte(gap: char) -> Result<u8> {
    if gap.is_ascii() {
        Ok(gap as u8)
    } else {
        Err(anyhow!("gap symbol must be a single ASCII character: {gap:?}"))
    }
}

fn cmd_strip(input: PathBuf, output: PathBuf, gap: u8, width: usize) -> Result<()> {
    log::info!("Stripping gapped columns from {}", input.display());

    let alignment = FastaReader::read_file(&input)
        .with_context(|| format!("reading {}", input.display()))?;
    let filtered = remove_gap_columns(&alignment, gap);

    log::info!(
        "Removed {} of {} columns ({} sequences)",
        alignment.sequence_length() - filtered.sequence_length(),
        alignment.sequence_length(),
        alignment.sequence_count()
    );

    write_alignment(&output, &filtered, width)
        .with_context(|| format!("writing {}", output.display()))?;
    log::info!("Output: {}", output.display());

    Ok(())
}

fn cmd_batch(input: PathBuf, output: PathBuf, gap: u8, width: usize) -> Result<()> {
    log::info!("Processing directory {}", input.display());

    let alignments = read_directory(&input)?;
    if alignments.is_empty() {
        log::warn!("No FASTA files found in {}", input.display());
        return Ok(());
    }

    std::fs::create_dir_all(&output)
        .with_context(|| format!("creating {}", output.display()))?;

    let input_paths: Vec<&PathBuf> = alignments.iter().map(|(path, _)| path).collect();
    let out_paths = batch_output_paths(&input_paths, &output)?;

    // Alignments are independent, so files are filtered in parallel.
    alignments
        .par_iter()
        .zip(&out_paths)
        .try_for_each(|((path, alignment), out_path)| -> Result<()> {
            let filtered = remove_gap_columns(alignment, gap);

            write_alignment(out_path, &filtered, width)
                .with_context(|| format!("writing {}", out_path.display()))?;

            log::info!(
                "{}: {} -> {} columns",
                path.display(),
                alignment.sequence_length(),
                filtered.sequence_length()
            );
            Ok(())
        })?;

    log::info!("Processed {} alignments", alignments.len());
    Ok(())
}

/// Map each input file to its output path, keeping the full filename
/// (minus any `.gz`, since outputs are written uncompressed) so inputs
/// like `a.fa` and `a.fasta` stay distinct. Colliding names are an error
/// rather than a silent overwrite.
fn batch_output_paths<P: AsRef<Path>>(inputs: &[P], output: &Path) -> Result<Vec<PathBuf>> {
    let mut seen: HashMap<String, PathBuf> = HashMap::with_capacity(inputs.len());
    let mut out_paths = Vec::with_capacity(inputs.len());

    for input in inputs {
        let input = input.as_ref();
        let name = input
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| anyhow!("no usable file name in {}", input.display()))?;
        let name = name.strip_suffix(".gz").unwrap_or(name);

        if let Some(previous) = seen.insert(name.to_string(), input.to_path_buf()) {
            return Err(anyhow!(
                "output name collision: {} and {} both map to {}",
                previous.display(),
                input.display(),
                name
            ));
        }
        out_paths.push(output.join(name));
    }

    Ok(out_paths)
}

#[derive(Debug, Serialize)]
struct AlignmentSummary {
    path: PathBuf,
    sequences: usize,
    length: usize,
    gapped_columns: usize,
}

fn cmd_info(input: PathBuf, gap: u8, json: bool) -> Result<()> {
    let alignment = FastaReader::read_file(&input)
        .with_context(|| format!("reading {}", input.display()))?;

    let gapped = gap_columns(&alignment, gap)
        .iter()
        .filter(|&&dirty| dirty)
        .count();

    let summary = AlignmentSummary {
        path: input,
        sequences: alignment.sequence_count(),
        length: alignment.sequence_length(),
        gapped_columns: gapped,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Alignment: {}", summary.path.display());
        println!("Sequences: {}", summary.sequences);
        println!("Length: {}", summary.length);
        println!("Gapped columns: {}", summary.gapped_columns);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_output_names_keep_extensions() {
        let inputs = [
            PathBuf::from("data/a.fa"),
            PathBuf::from("data/a.fasta"),
            PathBuf::from("data/b.fasta.gz"),
        ];
        let out_paths = batch_output_paths(&inputs, Path::new("out")).unwrap();

        assert_eq!(
            out_paths,
            vec![
                PathBuf::from("out/a.fa"),
                PathBuf::from("out/a.fasta"),
                PathBuf::from("out/b.fasta"),
            ]
        );
    }

    #[test]
    fn test_batch_output_name_collision_is_an_error() {
        let inputs = [PathBuf::from("data/a.fa"), PathBuf::from("data/a.fa.gz")];
        let result = batch_output_paths(&inputs, Path::new("out"));

        let message = result.unwrap_err().to_string();
        assert!(message.contains("collision"));
    }

    #[test]
    fn test_gap_byte_rejects_non_ascii() {
        assert_eq!(gap_byte('-').unwrap(), b'-');
        assert_eq!(gap_byte('.').unwrap(), b'.');
        assert!(gap_byte('λ').is_err());
    }
}
