use ncbi::Rank;
use strum::IntoEnumIterator;

use crate::column_index::TaxonomyRow;

/// Label given to taxa for which none of the ranks has a usable name
pub const UNKNOWN: &str = "Unknown";

/// Cell contents that mean "no value" in tabular dumps, next to the empty string.
/// `\N` is the null marker of database table dumps.
const MISSING_MARKERS: [&str; 19] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null", "\\N",
];

/// Whether a cell holds no usable value, after trimming
pub fn is_missing(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || MISSING_MARKERS.contains(&value)
}

/// The most specific name available for a taxon.
///
/// Ranks are tried from subspecies up to domain and, within a rank, its column aliases in
/// their declared order. The first present, non-missing value is returned trimmed, so when
/// two aliases of the same rank disagree the earlier alias wins. Returns `UNKNOWN` when
/// nothing qualifies.
pub fn best_label(row: &TaxonomyRow) -> String {
    for rank in Rank::iter() {
        for alias in rank.aliases() {
            if let Some(value) = row.resolve(alias) {
                if !is_missing(value) {
                    return value.trim().to_string();
                }
            }
        }
    }

    UNKNOWN.to_string()
}
