pub mod column_index;
pub mod label;
pub mod sample_table;
pub mod taxonomy_table;
pub mod translate;
pub mod translation_map;
