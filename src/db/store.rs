//! The store collaborator seam.
//!
//! All query and mutation execution is delegated through the [`Store`]
//! trait. The production implementation wraps an embedded SQLite
//! connection; the dispatcher never touches the engine directly.

use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter, Connection, Params};
use thiserror::Error;

use super::query;
use super::value::{Row, Value};

/// Errors surfaced from the store collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store rejected the database path when opening.
    #[error("unable to open database: {0}")]
    Connection(#[source] rusqlite::Error),
    /// A query or mutation failed; the engine's own message is carried
    /// verbatim (missing tables, bad definitions, parameter-count
    /// mismatches, constraint violations).
    #[error(transparent)]
    Query(#[from] rusqlite::Error),
}

/// Capability set the dispatcher depends on.
///
/// One logical operation per call; ordering of returned tables, columns,
/// and rows is whatever the engine produces.
pub trait Store {
    fn list_tables(&self) -> Result<Vec<String>, StoreError>;
    fn count_rows(&self, table: &str) -> Result<u64, StoreError>;
    fn column_names(&self, table: &str) -> Result<Vec<String>, StoreError>;
    fn read_column(&self, table: &str, column: &str) -> Result<Vec<Value>, StoreError>;
    fn read_all(&self, table: &str) -> Result<Vec<Row>, StoreError>;
    fn filter_eq(&self, table: &str, column: &str, value: &str) -> Result<Vec<Row>, StoreError>;
    fn ensure_index(&self, table: &str, column: &str) -> Result<(), StoreError>;
    fn create_table(&self, table: &str, definitions: &[String]) -> Result<(), StoreError>;
    fn insert(&self, table: &str, columns: &[String], values: &[String]) -> Result<(), StoreError>;
}

impl From<SqlValue> for Value {
    fn from(value: SqlValue) -> Self {
        match value {
            SqlValue::Null => Value::Null,
            SqlValue::Integer(n) => Value::Integer(n),
            SqlValue::Real(r) => Value::Real(r),
            SqlValue::Text(text) => Value::Text(text),
            SqlValue::Blob(bytes) => Value::Blob(bytes),
        }
    }
}

/// Production store backed by an embedded SQLite connection.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the store at `path`. SQLite creates the file if it does not
    /// exist, so callers never pre-check existence.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(StoreError::Connection)?;
        Ok(Self { conn })
    }

    /// Run a select and collect every row, all columns, in engine order.
    fn collect_rows<P: Params>(&self, sql: &str, params: P) -> Result<Vec<Row>, StoreError> {
        let mut stmt = self.conn.prepare(sql)?;
        let column_count = stmt.column_count();
        let rows = stmt.query_map(params, |row| {
            let mut cells = Vec::with_capacity(column_count);
            for i in 0..column_count {
                cells.push(Value::from(row.get::<_, SqlValue>(i)?));
            }
            Ok(Row(cells))
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

impl Store for SqliteStore {
    fn list_tables(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare(query::list_tables())?;
        let names = stmt.query_map([], |row| row.get(0))?;
        Ok(names.collect::<Result<Vec<_>, _>>()?)
    }

    fn count_rows(&self, table: &str) -> Result<u64, StoreError> {
        let count: i64 = self
            .conn
            .query_row(&query::count_rows(table), [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn column_names(&self, table: &str) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare(&query::table_info(table))?;
        // table_info columns: cid, name, type, notnull, dflt_value, pk
        let names = stmt.query_map([], |row| row.get(1))?;
        Ok(names.collect::<Result<Vec<_>, _>>()?)
    }

    fn read_column(&self, table: &str, column: &str) -> Result<Vec<Value>, StoreError> {
        let mut stmt = self.conn.prepare(&query::select_column(table, column))?;
        let values = stmt.query_map([], |row| row.get::<_, SqlValue>(0).map(Value::from))?;
        Ok(values.collect::<Result<Vec<_>, _>>()?)
    }

    fn read_all(&self, table: &str) -> Result<Vec<Row>, StoreError> {
        self.collect_rows(&query::select_all(table), [])
    }

    fn filter_eq(&self, table: &str, column: &str, value: &str) -> Result<Vec<Row>, StoreError> {
        self.collect_rows(&query::select_where_eq(table, column), params![value])
    }

    fn ensure_index(&self, table: &str, column: &str) -> Result<(), StoreError> {
        self.conn.execute(&query::create_index(table, column), [])?;
        Ok(())
    }

    fn create_table(&self, table: &str, definitions: &[String]) -> Result<(), StoreError> {
        self.conn.execute(&query::create_table(table, definitions), [])?;
        Ok(())
    }

    fn insert(&self, table: &str, columns: &[String], values: &[String]) -> Result<(), StoreError> {
        // Placeholder count follows the value list; a mismatch with the
        // column list is the engine's error to raise.
        self.conn.execute(
            &query::insert(table, columns, values.len()),
            params_from_iter(values.iter()),
        )?;
        Ok(())
    }
}
