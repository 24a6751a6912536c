use tracing::debug;

use crate::error::Error;
use crate::parser::command::{AlterAction, Assignment, Command, WhereClause};
use crate::storage::TableStore;
use crate::types::Row;

/// The result of a successfully handled statement. The core never formats
/// tables for display; SELECT and SHOW hand the row set to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Human-readable result of a mutation or informational statement.
    Message(String),
    /// A header plus data rows, for the presentation layer to render.
    Table { header: Row, rows: Vec<Row> },
    /// An unconditional DELETE awaiting explicit confirmation. Nothing has
    /// been written; the caller decides whether to run `delete_all_rows`.
    NeedsConfirmation { table: String },
}

/// Executes a parsed command against the table store. Handlers validate
/// first, mutate the in-memory image, and persist with exactly one save.
pub fn execute_command(cmd: Command, store: &TableStore) -> Result<Outcome, Error> {
    debug!(?cmd, "executing command");
    match cmd {
        Command::Create { table, columns } => handle_create(table, columns, store),
        Command::Insert { table, values } => handle_insert(table, values, store),
        Command::Update {
            table,
            assignments,
            filter,
        } => handle_update(table, assignments, filter, store),
        Command::Delete { table, filter } => handle_delete(table, filter, store),
        Command::Alter { table, action } => handle_alter(table, action, store),
        Command::DropTable { table } => handle_drop(table, store),
        Command::Select {
            table,
            columns,
            filter,
        } => handle_select(table, columns, filter, store),
        Command::ShowTable { table } => handle_show(table, store),
        Command::ShowPath => handle_show_path(store),
    }
}

/// Confirmed unconditional DELETE: truncates the table to its header. Kept
/// separate from `execute_command` so the confirmation prompt stays outside
/// the engine.
pub fn delete_all_rows(table: &str, store: &TableStore) -> Result<Outcome, Error> {
    let rows = load_existing(table, store)?;
    store.save(table, &rows[..1])?;
    Ok(Outcome::Message(format!(
        "All records deleted from \"{table}\"."
    )))
}

fn handle_create(table: String, columns: Vec<String>, store: &TableStore) -> Result<Outcome, Error> {
    if store.exists(&table)? {
        return Err(Error::TableExists(table));
    }
    let count = columns.len();
    store.save(&table, &[columns])?;
    Ok(Outcome::Message(format!(
        "Created table \"{table}\" with {count} column(s)."
    )))
}

fn handle_insert(table: String, values: Vec<String>, store: &TableStore) -> Result<Outcome, Error> {
    let mut rows = load_existing(&table, store)?;
    let width = rows[0].len();
    if values.len() != width {
        return Err(Error::ColumnCount {
            expected: width,
            got: values.len(),
        });
    }
    rows.push(values);
    store.save(&table, &rows)?;
    Ok(Outcome::Message(format!("Inserted 1 row into \"{table}\".")))
}

fn handle_update(
    table: String,
    assignments: Vec<Assignment>,
    filter: Option<WhereClause>,
    store: &TableStore,
) -> Result<Outcome, Error> {
    let mut rows = load_existing(&table, store)?;
    let header = rows[0].clone();

    let mut compiled: Vec<(usize, String)> = Vec::new();
    for a in assignments {
        let idx = resolve_column(&header, &a.column, "SET")?;
        compiled.push((idx, a.value));
    }
    let filter = match filter {
        Some(w) => Some((resolve_column(&header, &w.column, "WHERE")?, w.value)),
        None => None,
    };

    let mut updated = 0usize;
    for row in rows.iter_mut().skip(1) {
        let matched = match &filter {
            Some((idx, value)) => row.get(*idx) == Some(value),
            None => true,
        };
        if matched {
            for (idx, value) in &compiled {
                if let Some(cell) = row.get_mut(*idx) {
                    *cell = value.clone();
                }
            }
            updated += 1;
        }
    }

    store.save(&table, &rows)?;
    Ok(Outcome::Message(format!(
        "Updated {updated} row(s) in \"{table}\"."
    )))
}

fn handle_delete(
    table: String,
    filter: Option<WhereClause>,
    store: &TableStore,
) -> Result<Outcome, Error> {
    let rows = load_existing(&table, store)?;

    let Some(filter) = filter else {
        // Nothing is written until the caller confirms.
        return Ok(Outcome::NeedsConfirmation { table });
    };

    let idx = resolve_column(&rows[0], &filter.column, "WHERE")?;

    let mut kept: Vec<Row> = Vec::with_capacity(rows.len());
    kept.push(rows[0].clone());
    let mut deleted = 0usize;
    for row in &rows[1..] {
        if row.get(idx) == Some(&filter.value) {
            deleted += 1;
        } else {
            kept.push(row.clone());
        }
    }

    store.save(&table, &kept)?;
    Ok(Outcome::Message(format!(
        "Deleted {deleted} row(s) from \"{table}\"."
    )))
}

fn handle_alter(table: String, action: AlterAction, store: &TableStore) -> Result<Outcome, Error> {
    let mut rows = load_existing(&table, store)?;
    match action {
        AlterAction::Add(column) => {
            if rows[0].iter().any(|c| c == &column) {
                return Err(Error::ColumnExists(column));
            }
            rows[0].push(column.clone());
            for row in rows.iter_mut().skip(1) {
                row.push(String::new());
            }
            store.save(&table, &rows)?;
            Ok(Outcome::Message(format!(
                "Added column \"{column}\" to table \"{table}\"."
            )))
        }
        AlterAction::Drop(column) => {
            let idx = resolve_column(&rows[0], &column, "ALTER DROP")?;
            for row in rows.iter_mut() {
                if idx < row.len() {
                    row.remove(idx);
                }
            }
            store.save(&table, &rows)?;
            Ok(Outcome::Message(format!(
                "Dropped column \"{column}\" from table \"{table}\"."
            )))
        }
    }
}

fn handle_drop(table: String, store: &TableStore) -> Result<Outcome, Error> {
    if !store.exists(&table)? {
        return Err(Error::TableNotFound(table));
    }
    store.remove(&table)?;
    Ok(Outcome::Message(format!("Dropped table \"{table}\".")))
}

fn handle_select(
    table: String,
    columns: Option<Vec<String>>,
    filter: Option<WhereClause>,
    store: &TableStore,
) -> Result<Outcome, Error> {
    let rows = load_existing(&table, store)?;
    let header = &rows[0];

    let selected: Vec<(usize, String)> = match columns {
        None => header.iter().cloned().enumerate().collect(),
        Some(names) => {
            let mut out = Vec::with_capacity(names.len());
            for name in names {
                let idx = resolve_column(header, &name, "SELECT list")?;
                out.push((idx, name));
            }
            out
        }
    };
    let filter = match filter {
        Some(w) => Some((resolve_column(header, &w.column, "WHERE")?, w.value)),
        None => None,
    };

    let mut out_rows: Vec<Row> = Vec::new();
    for row in &rows[1..] {
        if row.len() != header.len() {
            // Tolerate ragged rows left behind by hand-edited files.
            continue;
        }
        if let Some((idx, value)) = &filter {
            if row.get(*idx) != Some(value) {
                continue;
            }
        }
        out_rows.push(selected.iter().map(|(idx, _)| row[*idx].clone()).collect());
    }

    let out_header: Row = selected.into_iter().map(|(_, name)| name).collect();
    Ok(Outcome::Table {
        header: out_header,
        rows: out_rows,
    })
}

fn handle_show(table: String, store: &TableStore) -> Result<Outcome, Error> {
    let mut rows = load_existing(&table, store)?;
    let header = rows.remove(0);
    Ok(Outcome::Table { header, rows })
}

fn handle_show_path(store: &TableStore) -> Result<Outcome, Error> {
    let cwd = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "<unknown>".to_string());
    Ok(Outcome::Message(format!(
        "Current working directory: {cwd}\nData directory:            {}",
        store.root().display()
    )))
}

/// Loads a table image and rejects the statement when the table is missing
/// or its file holds no rows at all.
fn load_existing(table: &str, store: &TableStore) -> Result<Vec<Row>, Error> {
    let rows = store.load(table)?;
    if rows.is_empty() {
        return Err(Error::TableNotFound(table.to_string()));
    }
    Ok(rows)
}

/// Resolves a column name against the header once; all later access is by
/// the returned index.
fn resolve_column(header: &[String], name: &str, clause: &'static str) -> Result<usize, Error> {
    header
        .iter()
        .position(|c| c == name)
        .ok_or_else(|| Error::UnknownColumn {
            column: name.to_string(),
            clause,
        })
}
