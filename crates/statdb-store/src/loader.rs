//! Table creation and bulk insertion.
//!
//! Identifiers discovered at runtime are always delimiter-quoted in
//! generated DDL/DML; row values are only ever bound as statement
//! parameters. Each table load runs in its own transaction, committed
//! once per file.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, ToSql, params_from_iter};
use tracing::{debug, info};

use statdb_model::{TableSchema, quote_identifier};

use crate::error::{Result, StoreError};

/// A handle to the destination database, opened once per run.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Opens (or creates) the database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| StoreError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self { conn })
    }

    /// Opens an in-memory database, for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Open {
            path: PathBuf::from(":memory:"),
            source: e,
        })?;
        Ok(Self { conn })
    }

    /// Replaces `name` with a freshly created table holding `rows`.
    ///
    /// Drops any existing table of that name, creates the new one from
    /// `schema`, and inserts every row with `year` bound as the final
    /// column (`NULL` when absent). The whole load is one transaction.
    /// Returns the number of rows inserted.
    pub fn replace_table(
        &mut self,
        name: &str,
        schema: &TableSchema,
        rows: &[Vec<String>],
        year: Option<i64>,
    ) -> Result<usize> {
        let quoted = quote_identifier(name);
        let tx = self.conn.transaction()?;

        tx.execute_batch(&format!("DROP TABLE IF EXISTS {quoted}"))?;

        let column_list = schema
            .columns()
            .iter()
            .map(|c| format!("{} {}", quote_identifier(&c.name), c.kind.sql_type()))
            .collect::<Vec<_>>()
            .join(", ");
        tx.execute_batch(&format!("CREATE TABLE {quoted} ({column_list})"))?;
        debug!(table = name, columns = schema.len(), "created table");

        let placeholders = vec!["?"; schema.len()].join(", ");
        let mut insert = tx.prepare(&format!("INSERT INTO {quoted} VALUES ({placeholders})"))?;

        for row in rows {
            // Row width plus the appended year column must match the
            // schema exactly; anything else would silently misalign.
            if row.len() + 1 != schema.len() {
                return Err(StoreError::ColumnCount {
                    table: name.to_string(),
                    expected: schema.len(),
                    actual: row.len() + 1,
                });
            }
            let mut params: Vec<&dyn ToSql> = row.iter().map(|v| v as &dyn ToSql).collect();
            params.push(&year);
            insert.execute(params_from_iter(params))?;
        }
        drop(insert);

        tx.commit()?;
        info!(table = name, rows = rows.len(), "table loaded");
        Ok(rows.len())
    }

    /// Lists tables created by the ingestion pipeline, with row counts.
    pub fn ingested_tables(&self) -> Result<Vec<(String, usize)>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name LIKE 'table_%' ORDER BY name",
        )?;
        let names: Vec<String> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<_, _>>()?;

        let mut tables = Vec::with_capacity(names.len());
        for name in names {
            let count: usize = self.conn.query_row(
                &format!("SELECT COUNT(*) FROM {}", quote_identifier(&name)),
                [],
                |row| row.get(0),
            )?;
            tables.push((name, count));
        }
        Ok(tables)
    }

    /// Direct access to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
