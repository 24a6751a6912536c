use super::*;

#[test]
fn alter_add_extends_header_and_every_row() {
    let (_dir, mut db) = seeded_db();

    let outcome = db.execute("alter table t add city;").unwrap();
    assert_eq!(
        outcome,
        Outcome::Message("Added column \"city\" to table \"t\".".to_string())
    );

    let (header, data) = rows(db.execute("show table t;").unwrap());
    assert_eq!(header, row(&["id", "name", "city"]));
    assert_eq!(data, vec![row(&["1", "Ann", ""]), row(&["2", "Bo", ""])]);
}

#[test]
fn alter_add_duplicate_column_is_rejected() {
    let (_dir, mut db) = seeded_db();

    let err = err_text(&mut db, "alter table t add name;");
    assert!(err.contains("already exists"));
}

#[test]
fn alter_drop_removes_the_column_everywhere() {
    let (_dir, mut db) = seeded_db();

    let outcome = db.execute("alter table t drop name;").unwrap();
    assert_eq!(
        outcome,
        Outcome::Message("Dropped column \"name\" from table \"t\".".to_string())
    );

    let (header, data) = rows(db.execute("show table t;").unwrap());
    assert_eq!(header, row(&["id"]));
    assert_eq!(data, vec![row(&["1"]), row(&["2"])]);
}

#[test]
fn alter_drop_unknown_column_is_rejected() {
    let (_dir, mut db) = seeded_db();

    let err = err_text(&mut db, "alter table t drop ghost;");
    assert!(err.contains("unknown column"));
}

#[test]
fn alter_add_then_drop_restores_the_image() {
    let (_dir, mut db) = seeded_db();

    let (before_header, before_data) = rows(db.execute("show table t;").unwrap());
    db.execute("alter table t add city;").unwrap();
    db.execute("alter table t drop city;").unwrap();

    let (header, data) = rows(db.execute("show table t;").unwrap());
    assert_eq!(header, before_header);
    assert_eq!(data, before_data);
}

#[test]
fn alter_missing_table_is_rejected() {
    let (_dir, mut db) = open_db();
    let err = err_text(&mut db, "alter table ghost add a;");
    assert!(err.contains("not found"));
}
