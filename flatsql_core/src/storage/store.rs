use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;
use crate::storage::codec;
use crate::types::Row;

/// Fixed suffix for table files under the data root.
const TABLE_SUFFIX: &str = "csv";

/// File-backed table store. One delimited-text file per table; every
/// operation is a whole-file read or a whole-file rewrite.
#[derive(Debug)]
pub struct TableStore {
    root: PathBuf,
}

impl TableStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, Error> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(Error::io("create data directory", &root))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a table name to its file location. Names are restricted to
    /// ASCII letters, digits, and underscores so a name can never escape
    /// the data root.
    fn table_path(&self, table: &str) -> Result<PathBuf, Error> {
        if table.is_empty()
            || !table
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(Error::InvalidTableName(table.to_string()));
        }
        Ok(self.root.join(format!("{table}.{TABLE_SUFFIX}")))
    }

    pub fn exists(&self, table: &str) -> Result<bool, Error> {
        Ok(self.table_path(table)?.exists())
    }

    /// Loads the full table image. A missing or unreadable file loads as an
    /// empty image; stored rows are not validated against the header.
    pub fn load(&self, table: &str) -> Result<Vec<Row>, Error> {
        let path = self.table_path(table)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return Ok(Vec::new()),
        };
        let rows = codec::decode(&content);
        debug!(table, rows = rows.len(), path = %path.display(), "loaded table");
        Ok(rows)
    }

    /// Replaces the stored image with `rows`. The new image is written to a
    /// temporary file and renamed over the target, so a reader never
    /// observes a partial write.
    pub fn save(&self, table: &str, rows: &[Row]) -> Result<(), Error> {
        let path = self.table_path(table)?;
        let tmp = path.with_extension("csv.tmp");
        fs::write(&tmp, codec::encode(rows)).map_err(Error::io("write table file", &tmp))?;
        fs::rename(&tmp, &path).map_err(Error::io("replace table file", &path))?;
        debug!(table, rows = rows.len(), path = %path.display(), "saved table");
        Ok(())
    }

    /// Removes the table's storage location.
    pub fn remove(&self, table: &str) -> Result<(), Error> {
        let path = self.table_path(table)?;
        fs::remove_file(&path).map_err(Error::io("remove table file", &path))?;
        debug!(table, path = %path.display(), "removed table");
        Ok(())
    }
}
