use crate::record::RenameRecord;
use std::collections::HashMap;

/// Assign duplicate indices to records that share an SPL line name.
///
/// Every record whose line name occurs more than once in the sequence gets
/// `Some(k)`, numbered 1..=k in row order within its group. Records with a
/// unique line name are left at `None`.
pub fn assign_duplicate_indices(records: &mut [RenameRecord]) {
    let mut totals: HashMap<String, u32> = HashMap::new();
    for record in records.iter() {
        *totals.entry(record.line_name.clone()).or_insert(0) += 1;
    }

    let mut seen: HashMap<String, u32> = HashMap::new();
    for record in records.iter_mut() {
        if totals[&record.line_name] > 1 {
            let count = seen.entry(record.line_name.clone()).or_insert(0);
            *count += 1;
            record.duplicate_index = Some(*count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn record(line_name: &str) -> RenameRecord {
        RenameRecord {
            file_path: PathBuf::from(format!("/data/{line_name}.sgy")),
            vessel: "Vessel1".to_string(),
            sensor_type: "MBES".to_string(),
            line_name: line_name.to_string(),
            sensor_start: NaiveDate::from_ymd_opt(2020, 12, 24)
                .unwrap()
                .and_hms_opt(15, 24, 32)
                .unwrap(),
            duplicate_index: None,
        }
    }

    #[test]
    fn unique_line_names_get_no_index() {
        let mut records = vec![record("Line01"), record("Line02"), record("Line03")];
        assign_duplicate_indices(&mut records);
        assert!(records.iter().all(|r| r.duplicate_index.is_none()));
    }

    #[test]
    fn duplicates_numbered_in_row_order() {
        let mut records = vec![
            record("Line01"),
            record("Line02"),
            record("Line01"),
            record("Line01"),
        ];
        assign_duplicate_indices(&mut records);
        assert_eq!(records[0].duplicate_index, Some(1));
        assert_eq!(records[1].duplicate_index, None);
        assert_eq!(records[2].duplicate_index, Some(2));
        assert_eq!(records[3].duplicate_index, Some(3));
    }

    #[test]
    fn independent_numbering_per_group() {
        let mut records = vec![
            record("Line01"),
            record("Line02"),
            record("Line02"),
            record("Line01"),
        ];
        assign_duplicate_indices(&mut records);
        assert_eq!(records[0].duplicate_index, Some(1));
        assert_eq!(records[1].duplicate_index, Some(1));
        assert_eq!(records[2].duplicate_index, Some(2));
        assert_eq!(records[3].duplicate_index, Some(2));
    }

    #[test]
    fn empty_sequence_is_fine() {
        let mut records: Vec<RenameRecord> = Vec::new();
        assign_duplicate_indices(&mut records);
        assert!(records.is_empty());
    }
}
