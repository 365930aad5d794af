//! Command-line inspector for SQLite-format database files.
//!
//! The binary entry point hands argv to [`commands::dispatch`], which runs
//! exactly one operation per invocation: parse the command, acquire a store
//! handle, execute, report, release.

pub mod commands;
pub mod db;
