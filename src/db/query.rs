//! SQL text builders.
//!
//! Every query string the store executes is assembled here, so the binding
//! rule holds in one place: caller-supplied predicate and insert values are
//! never concatenated into query text, only bound as `?` parameters.
//! Identifiers and column definitions are opaque caller strings interpolated
//! verbatim; the store is the authority on their validity.

pub fn list_tables() -> &'static str {
    "SELECT name FROM sqlite_master WHERE type = 'table'"
}

pub fn count_rows(table: &str) -> String {
    format!("SELECT COUNT(*) FROM {table}")
}

pub fn table_info(table: &str) -> String {
    format!("PRAGMA table_info({table})")
}

pub fn select_column(table: &str, column: &str) -> String {
    format!("SELECT {column} FROM {table}")
}

pub fn select_all(table: &str) -> String {
    format!("SELECT * FROM {table}")
}

/// Equality filter with the value left as a bound parameter.
pub fn select_where_eq(table: &str, column: &str) -> String {
    format!("SELECT * FROM {table} WHERE {column} = ?1")
}

/// Deterministic name for the secondary index on `table.column`.
pub fn index_name(table: &str, column: &str) -> String {
    format!("{table}_{column}_idx")
}

pub fn create_index(table: &str, column: &str) -> String {
    format!(
        "CREATE INDEX IF NOT EXISTS {} ON {table} ({column})",
        index_name(table, column)
    )
}

pub fn create_table(table: &str, definitions: &[String]) -> String {
    format!("CREATE TABLE IF NOT EXISTS {table} ({})", definitions.join(", "))
}

/// Positional insert with one placeholder per value. A value count that
/// disagrees with the column list is left for the store to reject.
pub fn insert(table: &str, columns: &[String], value_count: usize) -> String {
    let placeholders = vec!["?"; value_count].join(", ");
    format!(
        "INSERT INTO {table} ({}) VALUES ({placeholders})",
        columns.join(",")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_value_stays_a_parameter() {
        let sql = select_where_eq("users", "name");
        assert_eq!(sql, "SELECT * FROM users WHERE name = ?1");
    }

    #[test]
    fn index_name_is_deterministic() {
        assert_eq!(index_name("users", "name"), "users_name_idx");
        assert_eq!(
            create_index("users", "name"),
            "CREATE INDEX IF NOT EXISTS users_name_idx ON users (name)"
        );
    }

    #[test]
    fn create_table_joins_definitions() {
        let defs = vec!["id INTEGER".to_string(), "name TEXT".to_string()];
        assert_eq!(
            create_table("users", &defs),
            "CREATE TABLE IF NOT EXISTS users (id INTEGER, name TEXT)"
        );
    }

    #[test]
    fn insert_uses_one_placeholder_per_value() {
        let columns = vec!["id".to_string(), "name".to_string()];
        assert_eq!(
            insert("users", &columns, 2),
            "INSERT INTO users (id,name) VALUES (?, ?)"
        );
    }
}
