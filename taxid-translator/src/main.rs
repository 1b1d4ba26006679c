use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use taxid_translator::translate::{MissingIdColumn, translate_files};
use utils::init_logging;

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging();

    let policy = if args.strict {
        MissingIdColumn::Fail
    } else {
        MissingIdColumn::Passthrough
    };

    translate_files(&args.tsv_file, &args.taxonomy_file, &args.output_file, policy)
        .context("Failed to translate tax_id headers")?;

    println!("Output written to {}", args.output_file.display());

    Ok(())
}

/// Translate tax_id columns to taxonomic names
#[derive(Parser, Debug)]
#[clap(name = "translate-taxids", version)]
struct Cli {
    /// Input TSV file with tax_id headers
    tsv_file: PathBuf,

    /// Taxonomy file with tax_id and taxonomic ranks
    taxonomy_file: PathBuf,

    /// Output TSV file with translated headers
    output_file: PathBuf,

    /// Fail instead of copying the input when the taxonomy file has no tax_id column
    #[clap(long)]
    strict: bool,
}
