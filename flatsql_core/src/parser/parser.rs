use crate::error::Error;
use crate::parser::command::{AlterAction, Assignment, Command, WhereClause};

mod tokenizer;

use tokenizer::{Token, tokenize};

const CREATE_USAGE: &str = "Usage: create table <table> (<col>, ...)";
const INSERT_USAGE: &str = "Usage: insert into <table> values (<v1>, <v2>, ...)";
const UPDATE_USAGE: &str =
    "Usage: update <table> set <col> = <value> [, <col> = <value> ...] [where <column> = <value>]";
const DELETE_USAGE: &str = "Usage: delete from <table> [where <column> = <value>]";
const ALTER_USAGE: &str = "Usage: alter table <table> add <column> | drop <column>";
const DROP_USAGE: &str = "Usage: drop table <table>";
const SELECT_USAGE: &str = "Usage: select <col1, col2 | *> from <table> [where <column> = <value>]";
const SHOW_USAGE: &str = "Usage: show table <table> | show path";

/// Parses one complete statement, with or without its trailing `;`.
pub fn parse(input: &str) -> Result<Command, Error> {
    let mut tokens = tokenize(input)?;
    if tokens.last().is_some_and(|t| t.is_punct(';')) {
        tokens.pop();
    }
    if tokens.is_empty() {
        return Err(Error::syntax("Empty command"));
    }

    let head = &tokens[0];
    if head.quoted {
        return Err(Error::syntax(format!("Unknown command '{}'", head.text)));
    }
    match head.text.to_lowercase().as_str() {
        "create" => parse_create(&tokens),
        "insert" => parse_insert(&tokens),
        "update" => parse_update(&tokens),
        "delete" => parse_delete(&tokens),
        "alter" => parse_alter(&tokens),
        "drop" => parse_drop(&tokens),
        "select" => parse_select(&tokens),
        "show" => parse_show(&tokens),
        _ => Err(Error::syntax(format!("Unknown command '{}'", head.text))),
    }
}

fn parse_create(tokens: &[Token]) -> Result<Command, Error> {
    // create table <table> ( <col> [, <col> ...] )
    if tokens.len() < 5 || !tokens[1].is_kw("table") {
        return Err(Error::syntax(CREATE_USAGE));
    }
    if !tokens[3].is_punct('(') || !tokens[tokens.len() - 1].is_punct(')') {
        return Err(Error::syntax("CREATE requires a parenthesized column list"));
    }
    let table = name_token(&tokens[2], CREATE_USAGE)?;
    let columns = parse_comma_list(&tokens[4..tokens.len() - 1], "CREATE column list")?;
    if columns.is_empty() {
        return Err(Error::syntax("CREATE requires at least one column"));
    }
    Ok(Command::Create { table, columns })
}

fn parse_insert(tokens: &[Token]) -> Result<Command, Error> {
    // insert into <table> values ( <v1> [, <v2> ...] )
    if tokens.len() < 6
        || !tokens[1].is_kw("into")
        || !tokens[3].is_kw("values")
        || !tokens[4].is_punct('(')
        || !tokens[tokens.len() - 1].is_punct(')')
    {
        return Err(Error::syntax(INSERT_USAGE));
    }
    let table = name_token(&tokens[2], INSERT_USAGE)?;
    let values = parse_comma_list(&tokens[5..tokens.len() - 1], "INSERT values")?;
    if values.is_empty() {
        return Err(Error::syntax("INSERT requires at least one value"));
    }
    Ok(Command::Insert { table, values })
}

fn parse_update(tokens: &[Token]) -> Result<Command, Error> {
    // update <table> set <col> = <value> [, ...] [where <column> = <value>]
    if tokens.len() < 3 || !tokens[2].is_kw("set") {
        return Err(Error::syntax(UPDATE_USAGE));
    }
    let table = name_token(&tokens[1], UPDATE_USAGE)?;

    let where_idx = tokens.iter().position(|t| t.is_kw("where"));
    if where_idx.is_some_and(|idx| idx < 3) {
        return Err(Error::syntax(UPDATE_USAGE));
    }
    let set_end = where_idx.unwrap_or(tokens.len());
    let assignments = parse_assignments(&tokens[3..set_end])?;

    let filter = match where_idx {
        Some(idx) => Some(parse_where(&tokens[idx + 1..])?),
        None => None,
    };

    Ok(Command::Update {
        table,
        assignments,
        filter,
    })
}

fn parse_delete(tokens: &[Token]) -> Result<Command, Error> {
    // delete from <table> [where <column> = <value>]
    if tokens.len() < 3 || !tokens[1].is_kw("from") {
        return Err(Error::syntax(DELETE_USAGE));
    }
    let table = name_token(&tokens[2], DELETE_USAGE)?;
    let filter = if tokens.len() == 3 {
        None
    } else {
        if !tokens[3].is_kw("where") {
            return Err(Error::syntax(DELETE_USAGE));
        }
        Some(parse_where(&tokens[4..])?)
    };
    Ok(Command::Delete { table, filter })
}

fn parse_alter(tokens: &[Token]) -> Result<Command, Error> {
    // alter table <table> add <column> | drop <column>
    if tokens.len() != 5 || !tokens[1].is_kw("table") {
        return Err(Error::syntax(ALTER_USAGE));
    }
    let table = name_token(&tokens[2], ALTER_USAGE)?;

    let is_add = tokens[3].is_kw("add");
    let is_drop = tokens[3].is_kw("drop");
    if !is_add && !is_drop {
        return Err(Error::syntax("ALTER expects ADD or DROP after the table name"));
    }
    let column = name_token(&tokens[4], ALTER_USAGE)?;
    let action = if is_add {
        AlterAction::Add(column)
    } else {
        AlterAction::Drop(column)
    };
    Ok(Command::Alter { table, action })
}

fn parse_drop(tokens: &[Token]) -> Result<Command, Error> {
    // drop table <table>
    if tokens.len() != 3 || !tokens[1].is_kw("table") {
        return Err(Error::syntax(DROP_USAGE));
    }
    let table = name_token(&tokens[2], DROP_USAGE)?;
    Ok(Command::DropTable { table })
}

fn parse_select(tokens: &[Token]) -> Result<Command, Error> {
    // select <col1, col2 | *> from <table> [where <column> = <value>]
    let from_idx = tokens
        .iter()
        .position(|t| t.is_kw("from"))
        .ok_or_else(|| Error::syntax(SELECT_USAGE))?;
    if from_idx < 2 || from_idx + 1 >= tokens.len() {
        return Err(Error::syntax(SELECT_USAGE));
    }

    let columns = if from_idx == 2 && !tokens[1].quoted && tokens[1].text == "*" {
        None
    } else {
        let cols = parse_comma_list(&tokens[1..from_idx], "SELECT column list")?;
        if cols.is_empty() {
            return Err(Error::syntax(
                "SELECT column list cannot be empty. Use '*' or column names",
            ));
        }
        Some(cols)
    };

    let table = name_token(&tokens[from_idx + 1], SELECT_USAGE)?;
    let filter = if from_idx + 2 == tokens.len() {
        None
    } else {
        if !tokens[from_idx + 2].is_kw("where") {
            return Err(Error::syntax(SELECT_USAGE));
        }
        Some(parse_where(&tokens[from_idx + 3..])?)
    };

    Ok(Command::Select {
        table,
        columns,
        filter,
    })
}

fn parse_show(tokens: &[Token]) -> Result<Command, Error> {
    // show table <table> | show path
    if tokens.len() == 2 && tokens[1].is_kw("path") {
        return Ok(Command::ShowPath);
    }
    if tokens.len() == 3 && tokens[1].is_kw("table") {
        let table = name_token(&tokens[2], SHOW_USAGE)?;
        return Ok(Command::ShowTable { table });
    }
    Err(Error::syntax(SHOW_USAGE))
}

/// A table or column name: a single bare token, never quoted, never
/// punctuation.
fn name_token(tok: &Token, usage: &'static str) -> Result<String, Error> {
    if tok.quoted || tok.is_any_punct() {
        return Err(Error::syntax(usage));
    }
    Ok(tok.text.clone())
}

fn parse_comma_list(tokens: &[Token], what: &str) -> Result<Vec<String>, Error> {
    let mut items: Vec<String> = Vec::new();
    let mut expect_item = true;
    for tok in tokens {
        if expect_item {
            if tok.is_any_punct() {
                return Err(Error::syntax(format!(
                    "Bad {what}. Items must be comma-separated."
                )));
            }
            items.push(tok.text.clone());
            expect_item = false;
        } else if tok.is_punct(',') {
            expect_item = true;
        } else {
            return Err(Error::syntax(format!(
                "Bad {what}. Items must be comma-separated."
            )));
        }
    }
    if expect_item && !items.is_empty() {
        return Err(Error::syntax(format!("Bad {what}. Trailing comma.")));
    }
    Ok(items)
}

fn parse_assignments(tokens: &[Token]) -> Result<Vec<Assignment>, Error> {
    if tokens.is_empty() {
        return Err(Error::syntax("UPDATE requires at least one assignment after SET"));
    }
    let mut assignments: Vec<Assignment> = Vec::new();
    let mut i = 0usize;
    while i < tokens.len() {
        if i + 3 > tokens.len()
            || !tokens[i + 1].is_punct('=')
            || tokens[i].is_any_punct()
            || tokens[i + 2].is_any_punct()
        {
            return Err(Error::syntax(
                "Bad UPDATE assignments. Use: col = value, col = value",
            ));
        }
        assignments.push(Assignment {
            column: tokens[i].text.clone(),
            value: tokens[i + 2].text.clone(),
        });
        i += 3;
        if i < tokens.len() {
            if !tokens[i].is_punct(',') {
                return Err(Error::syntax(
                    "Bad UPDATE assignments. Use a comma between assignments.",
                ));
            }
            i += 1;
            if i == tokens.len() {
                return Err(Error::syntax("Bad UPDATE assignments. Trailing comma."));
            }
        }
    }
    Ok(assignments)
}

fn parse_where(tokens: &[Token]) -> Result<WhereClause, Error> {
    // <column> = <value>
    if tokens.len() != 3
        || !tokens[1].is_punct('=')
        || tokens[0].is_any_punct()
        || tokens[2].is_any_punct()
    {
        return Err(Error::syntax("Bad WHERE clause. Use: where <column> = <value>"));
    }
    Ok(WhereClause {
        column: tokens[0].text.clone(),
        value: tokens[2].text.clone(),
    })
}
