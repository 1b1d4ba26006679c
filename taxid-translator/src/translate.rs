use std::io::Write;
use std::path::Path;

use anyhow::{Context, Error, Result};
use log::{info, warn};

use crate::sample_table::{HeaderStats, SampleTable};
use crate::taxonomy_table::TaxonomyTable;
use crate::translation_map::TranslationMap;
use utils::open_write;

/// What to do when the taxonomy table has no identifier column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingIdColumn {
    /// Warn and write the sample table unchanged
    #[default]
    Passthrough,
    /// Fail without writing any output
    Fail,
}

/// Result of a translation run
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Translated(HeaderStats),
    /// No identifier column was found, the sample table was copied as is
    Passthrough,
}

/// Produce the output header for `sample`, or None if the table has to be passed through.
/// Everything that can fail is decided here, before any output is written.
pub fn translate_header(
    sample: &SampleTable,
    taxonomy: &TaxonomyTable,
    policy: MissingIdColumn,
) -> Result<Option<(String, HeaderStats)>> {
    let map = match TranslationMap::build(taxonomy) {
        Some(map) => map,
        None => {
            let columns = taxonomy.headers().join(", ");
            if policy == MissingIdColumn::Fail {
                return Err(Error::msg(format!(
                    "Could not find a tax_id column in taxonomy file. Columns: [{}]",
                    columns
                )));
            }

            warn!(
                "Could not find a tax_id column in taxonomy file (columns: [{}]), leaving headers unchanged",
                columns
            );
            return Ok(None);
        }
    };

    if taxonomy.is_empty() {
        warn!("Taxonomy file has no rows, no header will be translated");
    } else if map.is_empty() {
        warn!("No taxonomy row has an identifier, no header will be translated");
    } else {
        info!(
            "Resolved {} labels from {} taxonomy rows (identifier column \"{}\")",
            map.len(),
            taxonomy.len(),
            taxonomy.id_column().unwrap_or_default()
        );
    }

    let (header, stats) = sample.translated_header(&map)?;

    if !stats.unmapped.is_empty() {
        warn!(
            "{} numeric headers have no taxonomy entry and were left unchanged: {}",
            stats.unmapped.len(),
            stats.unmapped.join(", ")
        );
    }

    Ok(Some((header, stats)))
}

/// Translate the taxon identifier headers of the TSV at `sample_pb` and write the result
/// to `output_pb`
pub fn translate_files(
    sample_pb: &Path,
    taxonomy_pb: &Path,
    output_pb: &Path,
    policy: MissingIdColumn,
) -> Result<Outcome> {
    info!("Reading sample table {}", sample_pb.display());
    let sample = SampleTable::from_file(sample_pb)?;

    info!("Reading taxonomy {}", taxonomy_pb.display());
    let taxonomy = TaxonomyTable::from_file(taxonomy_pb)?;

    let translation = translate_header(&sample, &taxonomy, policy)?;

    let mut writer = open_write(output_pb).context("Unable to open output file")?;
    let outcome = match translation {
        Some((header, stats)) => {
            sample.write(&mut writer, Some(&header))?;
            info!(
                "Translated {} of {} header columns",
                stats.translated, stats.columns
            );
            Outcome::Translated(stats)
        }
        None => {
            sample.write(&mut writer, None)?;
            Outcome::Passthrough
        }
    };
    writer.flush().context("Error flushing output file")?;

    Ok(outcome)
}
