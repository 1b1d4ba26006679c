use std::io::Write;
use std::path::Path;

use anyhow::{Context, Error, Result};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::translation_map::{TranslationMap, is_taxon_id};
use utils::{BOM, read_to_string};

/// A tab-separated sample table, kept as its original text.
/// Only the header line is ever rewritten, everything around it is written back untouched.
#[derive(Debug)]
pub struct SampleTable {
    content: String,
    header_start: usize,
    header_end: usize,
    tokens: Vec<String>,
}

/// Counts of what happened to the header while translating it
#[derive(Debug, Default, PartialEq, Eq)]
pub struct HeaderStats {
    pub columns: usize,
    pub translated: usize,
    pub unmapped: Vec<String>,
}

impl SampleTable {
    /// Check that `content` is a usable table: a non-empty header record and no row with
    /// more fields than the header. Quoted fields are unquoted the usual CSV way.
    pub fn parse(content: String) -> Result<Self> {
        let bom = if content.starts_with(BOM) { BOM.len_utf8() } else { 0 };

        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(content[bom..].as_bytes());

        let mut record = StringRecord::new();
        let has_header = reader
            .read_record(&mut record)
            .context("Unable to read the header of the sample table")?;
        if !has_header || record.iter().all(|t| t.trim().is_empty()) {
            return Err(Error::msg("Sample table has no header line"));
        }

        // The record starts before any blank lines the reader skipped, and may end after
        // the line terminator, so both ends are narrowed down to the header text itself
        let start = bom + record.position().map(|p| p.byte() as usize).unwrap_or(0);
        let end = bom + reader.position().byte() as usize;
        let raw = &content[start..end];
        let header_start = start + (raw.len() - raw.trim_start_matches(['\r', '\n']).len());
        let header_end = start + raw.trim_end_matches(['\r', '\n']).len();

        let tokens: Vec<String> = record.iter().map(String::from).collect();

        while reader
            .read_record(&mut record)
            .context("Error reading a row of the sample table")?
        {
            if record.len() > tokens.len() {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                return Err(Error::msg(format!(
                    "Line {} of the sample table has {} fields, but the header only has {}",
                    line,
                    record.len(),
                    tokens.len()
                )));
            }
        }
        drop(reader);

        Ok(SampleTable {
            content,
            header_start,
            header_end,
            tokens,
        })
    }

    pub fn from_file(pb: &Path) -> Result<Self> {
        let content = read_to_string(pb).context("Unable to read sample table")?;
        Self::parse(content)
            .with_context(|| format!("Unable to parse sample table \"{}\"", pb.display()))
    }

    /// The header line as it appears in the file, without its line ending
    pub fn header(&self) -> &str {
        &self.content[self.header_start..self.header_end]
    }

    /// The unquoted header fields
    pub fn header_tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// The header with every known taxon identifier replaced by its label.
    /// Tokens that are not identifiers, or identifiers without a label, keep their value.
    /// A header without any translation is returned exactly as it was read.
    pub fn translated_header(&self, map: &TranslationMap) -> Result<(String, HeaderStats)> {
        let mut stats = HeaderStats::default();

        let tokens: Vec<&str> = self
            .header_tokens()
            .map(|token| {
                stats.columns += 1;

                match map.translate(token) {
                    Some(label) => {
                        stats.translated += 1;
                        label
                    }
                    None => {
                        if is_taxon_id(token) {
                            stats.unmapped.push(token.trim().to_string());
                        }
                        token
                    }
                }
            })
            .collect();

        if stats.translated == 0 {
            return Ok((self.header().to_string(), stats));
        }

        Ok((encode_header(&tokens)?, stats))
    }

    /// Write the table, optionally with a replacement header line
    pub fn write<W: Write>(&self, writer: &mut W, header: Option<&str>) -> Result<()> {
        let header = header.unwrap_or_else(|| self.header());

        writer
            .write_all(self.content[..self.header_start].as_bytes())
            .context("Error writing to output file")?;
        writer
            .write_all(header.as_bytes())
            .context("Error writing header to output file")?;
        writer
            .write_all(self.content[self.header_end..].as_bytes())
            .context("Error writing rows to output file")?;

        Ok(())
    }
}

/// Serialize header fields as one TSV line, without terminator.
/// Fields holding a tab, a quote or a line break get quoted.
fn encode_header(tokens: &[&str]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(Terminator::Any(b'\n'))
        .from_writer(vec![]);

    writer
        .write_record(tokens)
        .context("Unable to encode translated header")?;
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::msg(e.to_string()))
        .context("Unable to encode translated header")?;

    let mut line = String::from_utf8(bytes).context("Translated header is not valid UTF-8")?;
    line.pop();
    Ok(line)
}
