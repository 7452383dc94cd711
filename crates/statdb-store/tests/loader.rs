use statdb_model::{StorageKind, TableSchema};
use statdb_store::{Store, StoreError};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test]
fn loads_a_table_with_inferred_types_and_year() {
    let mut store = Store::open_in_memory().unwrap();

    let headers = strings(&["Statistic", "Name", "_"]);
    let rows = vec![
        strings(&["Home Runs", "Alex Rodriguez", "54"]),
        strings(&["Hits", "Ichiro Suzuki", "238"]),
    ];
    let schema = TableSchema::build(&headers, &rows).unwrap();
    assert_eq!(schema.len(), 4);
    assert_eq!(schema.columns()[2].kind, StorageKind::Integer);

    let count = store
        .replace_table("table_2007_3", &schema, &rows, Some(2007))
        .unwrap();
    assert_eq!(count, 2);

    let conn = store.connection();
    let years: Vec<i64> = conn
        .prepare("SELECT \"year\" FROM \"table_2007_3\"")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(years, vec![2007, 2007]);

    let hr: i64 = conn
        .query_row(
            "SELECT \"_\" FROM \"table_2007_3\" WHERE \"Name\" = 'Alex Rodriguez'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(hr, 54);
}

#[test]
fn reloading_fully_replaces_prior_content() {
    let mut store = Store::open_in_memory().unwrap();
    let headers = strings(&["Statistic", "Name"]);

    let first = vec![strings(&["Wins", "Old Pitcher"])];
    let schema = TableSchema::build(&headers, &first).unwrap();
    store
        .replace_table("table_2008_1", &schema, &first, Some(2008))
        .unwrap();

    let second = vec![
        strings(&["Wins", "New Pitcher"]),
        strings(&["Saves", "Another Pitcher"]),
    ];
    let schema = TableSchema::build(&headers, &second).unwrap();
    store
        .replace_table("table_2008_1", &schema, &second, Some(2008))
        .unwrap();

    let names: Vec<String> = store
        .connection()
        .prepare("SELECT \"Name\" FROM \"table_2008_1\" ORDER BY \"Name\"")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(names, vec!["Another Pitcher", "New Pitcher"]);
}

#[test]
fn absent_year_is_stored_as_null() {
    let mut store = Store::open_in_memory().unwrap();
    let headers = strings(&["Statistic"]);
    let rows = vec![strings(&["ERA"])];
    let schema = TableSchema::build(&headers, &rows).unwrap();
    store
        .replace_table("table_none_0", &schema, &rows, None)
        .unwrap();

    let year: Option<i64> = store
        .connection()
        .query_row("SELECT \"year\" FROM \"table_none_0\"", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(year, None);
}

#[test]
fn mismatched_row_width_fails_the_load() {
    let mut store = Store::open_in_memory().unwrap();
    let headers = strings(&["A", "B"]);
    let schema = TableSchema::build(&headers, &[]).unwrap();

    let rows = vec![strings(&["only one field"])];
    let err = store
        .replace_table("table_2009_1", &schema, &rows, Some(2009))
        .unwrap_err();
    assert!(matches!(err, StoreError::ColumnCount { expected: 3, actual: 2, .. }));
}

#[test]
fn special_characters_in_identifiers_survive_quoting() {
    let mut store = Store::open_in_memory().unwrap();
    // "select" is a reserved word; "_" is what "#" sanitizes to.
    let headers = strings(&["select", "_"]);
    let rows = vec![strings(&["x", "1"])];
    let schema = TableSchema::build(&headers, &rows).unwrap();
    store
        .replace_table("table_2010_2", &schema, &rows, Some(2010))
        .unwrap();

    let tables = store.ingested_tables().unwrap();
    assert_eq!(tables, vec![("table_2010_2".to_string(), 1)]);
}
