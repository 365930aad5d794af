//! Cell values returned by the store and their textual renderings.

use std::fmt;

/// A single cell value from a store result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Render the value as a SQL-style literal for use inside a row tuple.
    /// Text is single-quoted with embedded quotes doubled; everything else
    /// renders as its raw form.
    pub fn sql_repr(&self) -> String {
        match self {
            Value::Text(text) => format!("'{}'", text.replace('\'', "''")),
            other => other.to_string(),
        }
    }
}

/// Raw rendering, used when a single column is dumped one value per line.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Text(text) => write!(f, "{text}"),
            Value::Blob(bytes) => {
                write!(f, "X'")?;
                for byte in bytes {
                    write!(f, "{byte:02X}")?;
                }
                write!(f, "'")
            }
        }
    }
}

/// One result row, in store-returned column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row(pub Vec<Value>);

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.0.iter().map(Value::sql_repr).collect();
        write!(f, "({})", cells.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_repr_is_single_quoted() {
        assert_eq!(Value::Text("Alice".into()).sql_repr(), "'Alice'");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(Value::Text("O'Brien".into()).sql_repr(), "'O''Brien'");
    }

    #[test]
    fn raw_text_is_unquoted() {
        assert_eq!(Value::Text("Alice".into()).to_string(), "Alice");
    }

    #[test]
    fn blob_renders_as_hex_literal() {
        assert_eq!(Value::Blob(vec![0xDE, 0xAD]).to_string(), "X'DEAD'");
    }

    #[test]
    fn row_renders_as_tuple() {
        let row = Row(vec![Value::Integer(1), Value::Text("Alice".into()), Value::Null]);
        assert_eq!(row.to_string(), "(1, 'Alice', NULL)");
    }
}
