/// Single-equality condition: a row matches when the cell at `column`
/// equals `value` exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub column: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlterAction {
    Add(String),
    Drop(String),
}

/// A fully parsed statement. Clauses are rebuilt from scratch for every
/// statement and never cached.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create {
        table: String,
        columns: Vec<String>,
    },

    Insert {
        table: String,
        values: Vec<String>,
    },

    Update {
        table: String,
        assignments: Vec<Assignment>,
        filter: Option<WhereClause>,
    },

    Delete {
        table: String,
        filter: Option<WhereClause>,
    },

    Alter {
        table: String,
        action: AlterAction,
    },

    DropTable {
        table: String,
    },

    Select {
        table: String,
        /// `None` selects every column (`*`).
        columns: Option<Vec<String>>,
        filter: Option<WhereClause>,
    },

    ShowTable {
        table: String,
    },

    ShowPath,
}
