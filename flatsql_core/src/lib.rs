use std::path::{Path, PathBuf};

pub mod engine;
pub mod error;
pub mod parser;
pub mod storage;
pub mod types;

use engine::Outcome;
use error::Error;
use storage::TableStore;

/// A flat-file database rooted at one data directory. Each statement runs
/// a full load–mutate–store cycle; no table image survives between calls.
#[derive(Debug)]
pub struct Database {
    store: TableStore,
}

impl Database {
    /// Opens the data directory, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, Error> {
        Ok(Self {
            store: TableStore::open(root)?,
        })
    }

    /// Parses and executes one complete statement.
    pub fn execute(&mut self, input: &str) -> Result<Outcome, Error> {
        let cmd = parser::parser::parse(input)?;
        engine::execute_command(cmd, &self.store)
    }

    /// Runs the truncation half of a confirmed unconditional DELETE.
    pub fn confirm_delete_all(&mut self, table: &str) -> Result<Outcome, Error> {
        engine::delete_all_rows(table, &self.store)
    }

    pub fn root(&self) -> &Path {
        self.store.root()
    }
}
