use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One row of the `Full_List` sheet, ready for bulk renaming.
///
/// `duplicate_index` is `None` as loaded; `dedup::assign_duplicate_indices`
/// fills it in for rows that share an SPL line name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameRecord {
    pub file_path: PathBuf,
    pub vessel: String,
    pub sensor_type: String,
    pub line_name: String,
    pub sensor_start: NaiveDateTime,
    pub duplicate_index: Option<u32>,
}

/// One row of the `Rename_LN` sheet: the new stem is taken verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineNameRecord {
    pub file_path: PathBuf,
    pub new_line_name: String,
}
