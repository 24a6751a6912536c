use std::path::PathBuf;

/// Everything a statement can fail with. All variants are recoverable: the
/// shell reports the message and keeps accepting statements.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Syntax(String),

    #[error("Unknown column \"{column}\" in {clause}")]
    UnknownColumn {
        column: String,
        clause: &'static str,
    },

    #[error("Column count mismatch: expected {expected} values, got {got}")]
    ColumnCount { expected: usize, got: usize },

    #[error("Table \"{0}\" already exists")]
    TableExists(String),

    #[error("Table \"{0}\" not found or empty")]
    TableNotFound(String),

    #[error("Column \"{0}\" already exists")]
    ColumnExists(String),

    #[error("Invalid table name \"{0}\". Use letters, digits, and underscores only")]
    InvalidTableName(String),

    #[error("Failed to {} {}: {}", .action, .path.display(), .source)]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn syntax(msg: impl Into<String>) -> Self {
        Error::Syntax(msg.into())
    }

    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io {
            action,
            path,
            source,
        }
    }
}
