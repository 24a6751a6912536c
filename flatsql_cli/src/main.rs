use std::io::{self, Write};

use anyhow::Context;
use flatsql_core::Database;
use flatsql_core::engine::Outcome;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
mod render;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let root = config::resolve_data_root()?;
    let mut db = Database::open(&root)
        .with_context(|| format!("failed to open data directory {}", root.display()))?;

    println!("[flatsql] Using data directory: {}", db.root().display());
    if let Ok(cwd) = std::env::current_dir() {
        println!("[flatsql] Current working directory: {}", cwd.display());
    }
    println!("Welcome to flatsql!");
    println!(
        "Commands end with ';'. Supported: CREATE, INSERT, UPDATE, DELETE, ALTER, DROP, SELECT, SHOW TABLE, SHOW PATH, EXIT\n"
    );

    let mut accum = String::new();
    'repl: loop {
        print!("sql> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("Failed to read input: {err}");
                continue;
            }
        }
        accum.push_str(&line);

        // Drain every complete statement buffered so far; a partial one
        // stays in the buffer until its terminator arrives.
        while let Some(semi) = accum.find(';') {
            let statement = accum[..=semi].trim().to_string();
            accum = accum[semi + 1..].trim_start().to_string();
            if statement == ";" {
                continue;
            }
            debug!(statement = %statement, "dispatching statement");
            if is_exit(&statement) {
                break 'repl;
            }
            match db.execute(&statement) {
                Ok(outcome) => print_outcome(&mut db, outcome),
                Err(err) => println!("{err}"),
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn is_exit(statement: &str) -> bool {
    statement
        .trim_end_matches(';')
        .trim()
        .eq_ignore_ascii_case("exit")
}

fn print_outcome(db: &mut Database, outcome: Outcome) {
    match outcome {
        Outcome::Message(msg) => println!("{msg}"),
        Outcome::Table { header, rows } => print!("{}", render::render_table(&header, &rows)),
        Outcome::NeedsConfirmation { table } => confirm_delete_all(db, &table),
    }
}

fn confirm_delete_all(db: &mut Database, table: &str) {
    println!("WARNING: This will delete ALL records from table \"{table}\"!");
    print!("Are you sure you want to continue? (Y/N): ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        println!("Operation cancelled.");
        return;
    }
    if answer.trim().to_lowercase().starts_with('y') {
        match db.confirm_delete_all(table) {
            Ok(Outcome::Message(msg)) => println!("{msg}"),
            Ok(_) => {}
            Err(err) => println!("{err}"),
        }
    } else {
        println!("Operation cancelled.");
    }
}
