use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::column_index::{ColumnIndex, TaxonomyRow, normalize};
use utils::{BOM, open_read};

/// Accepted spellings of the identifier column, compared after normalization
const ID_COLUMN_NAMES: [&str; 4] = ["tax_id", "taxid", "tax id", "tax-id"];

/// Position of the column holding the taxon identifiers.
///
/// Exact spellings are preferred; otherwise the first column whose name contains both
/// "tax" and "id" is used. None if neither rule matches.
pub fn find_id_column<S: AsRef<str>>(headers: &[S]) -> Option<usize> {
    let names: Vec<String> = headers.iter().map(|h| normalize(h.as_ref())).collect();

    names
        .iter()
        .position(|n| ID_COLUMN_NAMES.contains(&n.as_str()))
        .or_else(|| {
            names
                .iter()
                .position(|n| n.contains("tax") && n.contains("id"))
        })
}

/// A taxonomy lookup table, loaded wholly into memory
pub struct TaxonomyTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    id_column: Option<usize>,
    index: ColumnIndex,
}

impl TaxonomyTable {
    /// Parse a tab-separated taxonomy table with a header line
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .context("Unable to read the header of the taxonomy table")?
            .iter()
            .map(|h| h.trim_matches(|c: char| c.is_whitespace() || c == BOM).to_string())
            .collect();

        let mut rows = Vec::new();
        for (i, record) in reader.records().enumerate() {
            // +2: one for the header line, one because lines are numbered from 1
            let record = record
                .with_context(|| format!("Error reading line {} of the taxonomy table", i + 2))?;
            rows.push(record.iter().map(String::from).collect());
        }

        Ok(Self::new(headers, rows))
    }

    pub fn from_file(pb: &Path) -> Result<Self> {
        let reader = open_read(pb).context("Unable to open taxonomy file")?;
        Self::from_reader(reader)
            .with_context(|| format!("Unable to parse taxonomy file \"{}\"", pb.display()))
    }

    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let id_column = find_id_column(&headers);
        let index = match id_column {
            Some(id) => ColumnIndex::without(&headers, id),
            None => ColumnIndex::new(&headers),
        };

        TaxonomyTable {
            headers,
            rows,
            id_column,
            index,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Name of the detected identifier column
    pub fn id_column(&self) -> Option<&str> {
        self.id_column.map(|i| self.headers[i].as_str())
    }

    /// The raw identifier and the remaining columns of every row, in table order.
    /// None when the table has no identifier column.
    pub fn entries(&self) -> Option<impl Iterator<Item = (&str, TaxonomyRow<'_>)> + '_> {
        let id = self.id_column?;

        Some(self.rows.iter().map(move |values| {
            let key = values.get(id).map(String::as_str).unwrap_or_default();
            (key, TaxonomyRow::new(&self.index, values))
        }))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_id_column_exact() {
        assert_eq!(find_id_column(&["species", "tax_id"]), Some(1));
        assert_eq!(find_id_column(&["TaxID", "species"]), Some(0));
        assert_eq!(find_id_column(&["species", " Tax Id "]), Some(1));
        assert_eq!(find_id_column(&["tax-id"]), Some(0));
    }

    #[test]
    fn test_find_id_column_prefers_exact_spelling() {
        assert_eq!(find_id_column(&["parent_tax_id", "tax_id"]), Some(1));
    }

    #[test]
    fn test_find_id_column_heuristic() {
        assert_eq!(find_id_column(&["species", "ncbi_taxon_id"]), Some(1));
        assert_eq!(find_id_column(&["Taxonomy ID", "other_taxid"]), Some(0));
    }

    #[test]
    fn test_find_id_column_missing() {
        assert_eq!(find_id_column(&["id", "species", "genus"]), None);
        assert_eq!(find_id_column::<&str>(&[]), None);
    }

    #[test]
    fn test_from_reader() {
        let data = "tax_id\t Species \tgenus\n561530\tEscherichia coli\tEscherichia\n562\t\t\n";
        let table = TaxonomyTable::from_reader(data.as_bytes()).unwrap();

        assert_eq!(table.headers(), &["tax_id", "Species", "genus"]);
        assert_eq!(table.id_column(), Some("tax_id"));
        assert_eq!(table.len(), 2);

        let entries: Vec<_> = table.entries().unwrap().collect();
        assert_eq!(entries[0].0, "561530");
        assert_eq!(entries[0].1.resolve("species"), Some("Escherichia coli"));
        assert_eq!(entries[0].1.resolve("tax_id"), None);
        assert_eq!(entries[1].0, "562");
        assert_eq!(entries[1].1.resolve("genus"), Some(""));
    }

    #[test]
    fn test_byte_order_mark_before_id_column() {
        let data = "\u{feff}tax_id\tspecies\n562\tEscherichia coli\n";
        let table = TaxonomyTable::from_reader(data.as_bytes()).unwrap();

        assert_eq!(table.headers(), &["tax_id", "species"]);
        assert_eq!(table.id_column(), Some("tax_id"));
        assert_eq!(find_id_column(&["\u{feff}tax_id", "parent_tax_id"]), Some(0));
    }

    #[test]
    fn test_short_rows_are_accepted() {
        let data = "taxid\tspecies\tgenus\n9606\tHomo sapiens\n";
        let table = TaxonomyTable::from_reader(data.as_bytes()).unwrap();
        let (key, row) = table.entries().unwrap().next().unwrap();

        assert_eq!(key, "9606");
        assert_eq!(row.resolve("genus"), None);
    }

    #[test]
    fn test_no_id_column() {
        let data = "identifier\tspecies\n1\tfoo\n";
        let table = TaxonomyTable::from_reader(data.as_bytes()).unwrap();

        assert_eq!(table.id_column(), None);
        assert!(table.entries().is_none());
    }
}
