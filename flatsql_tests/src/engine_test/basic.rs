use super::*;

#[test]
fn create_then_show_yields_header_only() {
    let (_dir, mut db) = open_db();

    let outcome = db.execute("create table users (id, name);").unwrap();
    assert_eq!(
        outcome,
        Outcome::Message("Created table \"users\" with 2 column(s).".to_string())
    );

    let (header, data) = rows(db.execute("show table users;").unwrap());
    assert_eq!(header, row(&["id", "name"]));
    assert!(data.is_empty());
}

#[test]
fn create_existing_table_is_rejected() {
    let (_dir, mut db) = open_db();
    db.execute("create table users (id);").unwrap();

    let err = err_text(&mut db, "create table users (id);");
    assert!(err.contains("already exists"));
}

#[test]
fn insert_appends_one_row() {
    let (_dir, mut db) = open_db();
    db.execute("create table users (id, name);").unwrap();

    let outcome = db.execute(r#"insert into users values (1, "Ann");"#).unwrap();
    assert_eq!(
        outcome,
        Outcome::Message("Inserted 1 row into \"users\".".to_string())
    );

    let (_, data) = rows(db.execute("show table users;").unwrap());
    assert_eq!(data, vec![row(&["1", "Ann"])]);
}

#[test]
fn insert_arity_mismatch_leaves_table_unchanged() {
    let (_dir, mut db) = open_db();
    db.execute("create table users (id, name);").unwrap();

    let err = err_text(&mut db, "insert into users values (1);");
    assert!(err.contains("column count mismatch"));

    let (_, data) = rows(db.execute("show table users;").unwrap());
    assert!(data.is_empty());
}

#[test]
fn insert_into_missing_table_is_rejected() {
    let (_dir, mut db) = open_db();
    let err = err_text(&mut db, "insert into ghost values (1);");
    assert!(err.contains("not found"));
}

#[test]
fn show_missing_table_is_rejected() {
    let (_dir, mut db) = open_db();
    let err = err_text(&mut db, "show table ghost;");
    assert!(err.contains("not found"));
}

#[test]
fn path_like_table_name_is_rejected() {
    let (_dir, mut db) = open_db();
    let err = err_text(&mut db, "create table ../evil (id);");
    assert!(err.contains("invalid table name"));
}

#[test]
fn drop_table_removes_storage() {
    let (_dir, mut db) = open_db();
    db.execute("create table users (id);").unwrap();

    let outcome = db.execute("drop table users;").unwrap();
    assert_eq!(
        outcome,
        Outcome::Message("Dropped table \"users\".".to_string())
    );

    let err = err_text(&mut db, "show table users;");
    assert!(err.contains("not found"));

    // The name is free again.
    db.execute("create table users (id);").unwrap();
}

#[test]
fn drop_missing_table_is_rejected() {
    let (_dir, mut db) = open_db();
    let err = err_text(&mut db, "drop table ghost;");
    assert!(err.contains("not found"));
}

#[test]
fn show_path_reports_the_data_directory() {
    let (dir, mut db) = open_db();

    match db.execute("show path;").unwrap() {
        Outcome::Message(msg) => {
            assert!(msg.contains(&dir.path().display().to_string()));
        }
        other => panic!("Expected a message outcome, got {other:?}"),
    }
}

#[test]
fn tables_persist_across_reopen() {
    let (dir, mut db) = open_db();
    db.execute("create table users (id, name);").unwrap();
    db.execute(r#"insert into users values (1, "Ann");"#).unwrap();
    drop(db);

    let mut db = Database::open(dir.path()).unwrap();
    let (header, data) = rows(db.execute("show table users;").unwrap());
    assert_eq!(header, row(&["id", "name"]));
    assert_eq!(data, vec![row(&["1", "Ann"])]);
}
