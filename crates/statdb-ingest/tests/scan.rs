use std::fs;

use tempfile::TempDir;

use statdb_ingest::{ScanOptions, ScanOutcome, TableKey, list_csv_files, scan_file};

#[test]
fn scans_a_scraped_export_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("2007_03_batting_leaders.csv");
    fs::write(
        &path,
        "MLB Batting Leaders\n\
         \n\
         Statistic,Name,#\n\
         Home Runs,Alex Rodriguez,54\n\
         bad,row\n\
         Hits,Ichiro Suzuki,238\n",
    )
    .unwrap();

    let files = list_csv_files(dir.path()).unwrap();
    assert_eq!(files, vec![path.clone()]);

    let key = TableKey::decode(path.file_name().unwrap().to_str().unwrap());
    assert_eq!(key.table_name(), "table_2007_3");

    let outcome = scan_file(&path, &ScanOptions::default()).unwrap();
    let ScanOutcome::Table(table) = outcome else {
        panic!("expected a table");
    };
    assert_eq!(table.headers, vec!["Statistic", "Name", "_"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.dropped, 1);
}

#[test]
fn file_without_header_row_is_skipped_not_failed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("2007_01_notes.csv");
    fs::write(&path, "A page of notes\nwith,no,header,row\n").unwrap();

    let outcome = scan_file(&path, &ScanOptions::default()).unwrap();
    assert!(matches!(outcome, ScanOutcome::NoHeader));
}

#[test]
fn missing_file_is_an_open_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");
    assert!(scan_file(&path, &ScanOptions::default()).is_err());
}
