use super::*;

#[test]
fn select_star_returns_all_columns() {
    let (_dir, mut db) = seeded_db();

    let (header, data) = rows(db.execute("select * from t;").unwrap());
    assert_eq!(header, row(&["id", "name"]));
    assert_eq!(data, vec![row(&["1", "Ann"]), row(&["2", "Bo"])]);
}

#[test]
fn select_projects_columns_in_request_order() {
    let (_dir, mut db) = seeded_db();

    let (header, data) = rows(db.execute("select name, id from t;").unwrap());
    assert_eq!(header, row(&["name", "id"]));
    assert_eq!(data, vec![row(&["Ann", "1"]), row(&["Bo", "2"])]);
}

#[test]
fn select_with_where_filters_rows() {
    let (_dir, mut db) = seeded_db();

    let (_, data) = rows(db.execute("select * from t where id = 2;").unwrap());
    assert_eq!(data, vec![row(&["2", "Bo"])]);
}

#[test]
fn select_where_without_matches_yields_empty_result() {
    let (_dir, mut db) = seeded_db();

    let (header, data) = rows(db.execute("select * from t where id = 99;").unwrap());
    assert_eq!(header, row(&["id", "name"]));
    assert!(data.is_empty());
}

#[test]
fn select_unknown_column_is_rejected() {
    let (_dir, mut db) = seeded_db();

    let err = err_text(&mut db, "select ghost from t;");
    assert!(err.contains("unknown column"));
}

#[test]
fn select_unknown_where_column_is_rejected() {
    let (_dir, mut db) = seeded_db();

    let err = err_text(&mut db, "select * from t where ghost = 1;");
    assert!(err.contains("unknown column"));
}

#[test]
fn select_missing_table_is_rejected() {
    let (_dir, mut db) = open_db();
    let err = err_text(&mut db, "select * from ghost;");
    assert!(err.contains("not found"));
}

#[test]
fn select_does_not_mutate_storage() {
    let (_dir, mut db) = seeded_db();

    rows(db.execute("select * from t where id = 1;").unwrap());

    let (_, data) = rows(db.execute("select * from t;").unwrap());
    assert_eq!(data.len(), 2);
}

#[test]
fn quoted_value_with_separator_survives_the_full_cycle() {
    let (_dir, mut db) = seeded_db();

    db.execute(r#"insert into t values (3, "a, b");"#).unwrap();

    let (_, data) = rows(db.execute("select * from t where id = 3;").unwrap());
    assert_eq!(data, vec![row(&["3", "a, b"])]);
}

#[test]
fn full_scenario_matches_the_manual() {
    let (_dir, mut db) = open_db();

    db.execute("CREATE TABLE t (id, name);").unwrap();
    db.execute(r#"INSERT INTO t VALUES (1, "Ann");"#).unwrap();
    db.execute(r#"INSERT INTO t VALUES (2, "Bo");"#).unwrap();
    db.execute(r#"UPDATE t SET name="Bob" WHERE id=2;"#).unwrap();

    let (_, data) = rows(db.execute("SELECT * FROM t;").unwrap());
    assert_eq!(data, vec![row(&["1", "Ann"]), row(&["2", "Bob"])]);

    db.execute("DELETE FROM t WHERE id=1;").unwrap();
    let (_, data) = rows(db.execute("SELECT * FROM t;").unwrap());
    assert_eq!(data, vec![row(&["2", "Bob"])]);
}
