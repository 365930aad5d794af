//! Command parsing and the dispatch lifecycle.
//!
//! Every invocation follows the same linear sequence: parse the command
//! name and arguments, acquire a handle (raw file for `.dbinfo`, a store
//! connection for everything else), execute exactly one logical operation,
//! report, release. All errors are caught here and reduced to a single
//! diagnostic line; nothing propagates past [`dispatch`].

use thiserror::Error;

use crate::db::header::{self, FileError};
use crate::db::store::{SqliteStore, Store, StoreError};
use crate::db::value::Row;

/// One of the eleven supported operations, with its parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    DbInfo,
    Tables,
    CountRows { table: String },
    ReadColumns { table: String },
    ReadColumn { table: String, column: String },
    Filter { table: String, column: String, value: String },
    ReadAll { table: String },
    Index { table: String, column: String, value: String },
    CreateTable { table: String, columns: Vec<String> },
    InsertData { table: String, columns: Vec<String>, values: Vec<String> },
    CreateDatabase,
}

/// Errors from matching a command name against the command table.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid command: {0}")]
    UnknownCommand(String),
    #[error("Missing arguments for {command}: expected at least {expected}, got {got}")]
    Arity {
        command: &'static str,
        expected: usize,
        got: usize,
    },
}

fn require(command: &'static str, args: &[String], expected: usize) -> Result<(), CommandError> {
    if args.len() < expected {
        return Err(CommandError::Arity {
            command,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

impl Command {
    /// Match a command name and its positional arguments against the fixed
    /// command table. Unknown names and short argument lists are errors,
    /// never silent no-ops.
    pub fn parse(name: &str, args: &[String]) -> Result<Self, CommandError> {
        match name {
            ".dbinfo" => Ok(Command::DbInfo),
            ".tables" => Ok(Command::Tables),
            ".countrows" => {
                require(".countrows", args, 1)?;
                Ok(Command::CountRows { table: args[0].clone() })
            }
            ".readcolumns" => {
                require(".readcolumns", args, 1)?;
                Ok(Command::ReadColumns { table: args[0].clone() })
            }
            ".readcolumn" => {
                require(".readcolumn", args, 2)?;
                Ok(Command::ReadColumn {
                    table: args[0].clone(),
                    column: args[1].clone(),
                })
            }
            ".filter" => {
                require(".filter", args, 3)?;
                Ok(Command::Filter {
                    table: args[0].clone(),
                    column: args[1].clone(),
                    value: args[2].clone(),
                })
            }
            ".readall" => {
                require(".readall", args, 1)?;
                Ok(Command::ReadAll { table: args[0].clone() })
            }
            ".index" => {
                require(".index", args, 3)?;
                Ok(Command::Index {
                    table: args[0].clone(),
                    column: args[1].clone(),
                    value: args[2].clone(),
                })
            }
            ".createTable" => {
                require(".createTable", args, 1)?;
                Ok(Command::CreateTable {
                    table: args[0].clone(),
                    columns: args[1..].to_vec(),
                })
            }
            ".insert_data" => {
                require(".insert_data", args, 2)?;
                Ok(Command::InsertData {
                    table: args[0].clone(),
                    // Column names arrive as one comma-separated argument.
                    columns: args[1].split(',').map(String::from).collect(),
                    values: args[2..].to_vec(),
                })
            }
            ".createDatabase" => Ok(Command::CreateDatabase),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// Outcome of one dispatched command. Failure is communicated through the
/// printed diagnostic line; the process still exits normally either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionReport {
    Success,
    Failure,
}

/// Run one command against the database at `path`.
pub fn dispatch(path: &str, name: &str, args: &[String]) -> ExecutionReport {
    let command = match Command::parse(name, args) {
        Ok(command) => command,
        Err(e) => {
            println!("{e}");
            return ExecutionReport::Failure;
        }
    };

    // `.dbinfo` only touches the raw file; no store is acquired.
    if let Command::DbInfo = command {
        return dbinfo(path);
    }

    // Advisory note prints before the open attempt.
    if let Command::CreateDatabase = command {
        println!("Note : this will only create the DB if it don't exist.");
    }

    let store = match SqliteStore::open(path) {
        Ok(store) => store,
        Err(e) => {
            println!("SQLite error occured : {e}");
            return ExecutionReport::Failure;
        }
    };

    // Connection dropped on scope exit, success and failure alike.
    match execute(&store, &command, path) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExecutionReport::Success
        }
        Err(e) => {
            println!("SQLite error occured : {e}");
            ExecutionReport::Failure
        }
    }
}

fn dbinfo(path: &str) -> ExecutionReport {
    match header::read_page_size(path) {
        Ok(page_size) => {
            println!("Database page size: {page_size}");
            ExecutionReport::Success
        }
        Err(FileError::NotFound(path)) => {
            println!("File not found: {path}");
            ExecutionReport::Failure
        }
        Err(e) => {
            println!("An error occurred: {e}");
            ExecutionReport::Failure
        }
    }
}

/// Execute one parsed command against the store and collect its output
/// lines. Separated from the printing so the shapes are testable.
pub fn execute(store: &dyn Store, command: &Command, path: &str) -> Result<Vec<String>, StoreError> {
    let lines = match command {
        // Handled by the header reader before a store is acquired.
        Command::DbInfo => Vec::new(),
        Command::Tables => {
            let tables = store.list_tables()?;
            let mut lines = vec![
                format!("Number of tables : {}", tables.len()),
                "Names of the tables :".to_string(),
            ];
            lines.extend(tables.into_iter().map(|name| format!("Table : {name}")));
            lines
        }
        Command::CountRows { table } => {
            let count = store.count_rows(table)?;
            vec![format!("Table {table} have {count} rows.")]
        }
        Command::ReadColumns { table } => store
            .column_names(table)?
            .into_iter()
            .map(|column| format!("-- {column}"))
            .collect(),
        Command::ReadColumn { table, column } => {
            let values = store.read_column(table, column)?;
            let mut lines = vec![format!("Data from Column '{column}' in table : '{table}';")];
            lines.extend(values.into_iter().map(|value| value.to_string()));
            lines
        }
        Command::Filter { table, column, value } => {
            render_matches(store.filter_eq(table, column, value)?)
        }
        Command::ReadAll { table } => {
            let rows = store.read_all(table)?;
            if rows.is_empty() {
                vec!["Table is empty".to_string()]
            } else {
                rows.into_iter().map(|row| row.to_string()).collect()
            }
        }
        Command::Index { table, column, value } => {
            // Create-if-absent is a prerequisite step, not a separate command.
            store.ensure_index(table, column)?;
            render_matches(store.filter_eq(table, column, value)?)
        }
        Command::CreateTable { table, columns } => {
            store.create_table(table, columns)?;
            vec![format!(
                "Table created with Name : {table} with columns {}",
                columns.join(", ")
            )]
        }
        Command::InsertData { table, columns, values } => {
            store.insert(table, columns, values)?;
            vec![format!(
                "Data inserted successfully in table {table} : {}",
                render_value_list(values)
            )]
        }
        Command::CreateDatabase => {
            // Opening the store already created the file if it was absent.
            vec![format!("New empty DB is created as {path}")]
        }
    };
    Ok(lines)
}

fn render_matches(rows: Vec<Row>) -> Vec<String> {
    if rows.is_empty() {
        vec!["No matches found for the given criteria".to_string()]
    } else {
        rows.into_iter().map(|row| row.to_string()).collect()
    }
}

fn render_value_list(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("'{v}'")).collect();
    format!("[{}]", quoted.join(", "))
}
