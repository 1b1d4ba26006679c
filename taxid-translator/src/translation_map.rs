use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::column_index::TaxonomyRow;
use crate::label::{best_label, is_missing};
use crate::taxonomy_table::TaxonomyTable;

lazy_static! {
    static ref TAXON_ID: Regex = Regex::new(r"^[0-9]+$").expect("Failed to initialize regex");
}

/// Whether a header token looks like a taxon identifier (a non-negative integer literal)
pub fn is_taxon_id(token: &str) -> bool {
    TAXON_ID.is_match(token.trim())
}

/// Maps taxon identifiers to the label they should be replaced with
#[derive(Debug, Default)]
pub struct TranslationMap {
    labels: HashMap<String, String>,
}

impl TranslationMap {
    /// Build the map for a taxonomy table, or None if the table has no identifier column
    pub fn build(table: &TaxonomyTable) -> Option<Self> {
        table.entries().map(Self::from_entries)
    }

    /// Resolve one label per identifier.
    /// Rows without an identifier are skipped. If an identifier occurs more than once, the
    /// last row wins.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, TaxonomyRow<'a>)>,
    {
        let mut labels = HashMap::new();
        let mut skipped = 0;
        let mut overwritten = 0;

        for (id, row) in entries {
            let id = id.trim();
            if is_missing(id) {
                skipped += 1;
                continue;
            }

            if labels.insert(id.to_string(), best_label(&row)).is_some() {
                overwritten += 1;
            }
        }

        if skipped > 0 {
            debug!("Skipped {} taxonomy rows without identifier", skipped);
        }
        if overwritten > 0 {
            debug!("{} identifiers occurred more than once, kept their last row", overwritten);
        }

        TranslationMap { labels }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.labels.get(id.trim()).map(String::as_str)
    }

    /// The replacement for a header token, if it is a known taxon identifier
    pub fn translate(&self, token: &str) -> Option<&str> {
        if is_taxon_id(token) {
            self.get(token)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
