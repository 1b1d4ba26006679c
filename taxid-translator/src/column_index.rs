use std::collections::HashMap;

use utils::BOM;

/// Normalized form used to compare column names: trimmed (byte order marks included) and
/// lower-cased
pub fn normalize(name: &str) -> String {
    name.trim_matches(|c: char| c.is_whitespace() || c == BOM)
        .to_lowercase()
}

/// Case- and whitespace-insensitive lookup from a column name to its position in a row.
///
/// TSV tables share one header between all rows, so the index is built once per table and
/// shared by every `TaxonomyRow` view. When several columns normalize to the same name,
/// the first one in column order wins.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Self {
        Self::build(columns, None)
    }

    /// Same as `new`, but the column at position `skip` can not be looked up.
    /// Used to hide the identifier column from the rank lookups.
    pub fn without<S: AsRef<str>>(columns: &[S], skip: usize) -> Self {
        Self::build(columns, Some(skip))
    }

    fn build<S: AsRef<str>>(columns: &[S], skip: Option<usize>) -> Self {
        let mut positions = HashMap::with_capacity(columns.len());

        for (i, column) in columns.iter().enumerate() {
            if Some(i) == skip {
                continue;
            }

            positions.entry(normalize(column.as_ref())).or_insert(i);
        }

        ColumnIndex { positions }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(&normalize(name)).copied()
    }
}

/// One record of the taxonomy table, seen through the column index of its table
#[derive(Debug, Clone, Copy)]
pub struct TaxonomyRow<'a> {
    index: &'a ColumnIndex,
    values: &'a [String],
}

impl<'a> TaxonomyRow<'a> {
    pub fn new(index: &'a ColumnIndex, values: &'a [String]) -> Self {
        TaxonomyRow { index, values }
    }

    /// Raw value of the column called `name`, or None when the row has no such column.
    /// An existing but empty cell gives `Some("")`, which is not the same as a missing column.
    pub fn resolve(&self, name: &str) -> Option<&'a str> {
        let position = self.index.position(name)?;

        // Rows shorter than the header miss their trailing cells
        self.values.get(position).map(String::as_str)
    }
}
