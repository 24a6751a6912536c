use super::*;

#[test]
fn parse_alter_add() {
    let cmd = parse("alter table users add age;").unwrap();

    match cmd {
        Command::Alter { table, action } => {
            assert_eq!(table, "users");
            assert_eq!(action, AlterAction::Add("age".to_string()));
        }
        _ => panic!("Expected Alter command"),
    }
}

#[test]
fn parse_alter_drop() {
    let cmd = parse("ALTER TABLE users DROP age").unwrap();

    match cmd {
        Command::Alter { table, action } => {
            assert_eq!(table, "users");
            assert_eq!(action, AlterAction::Drop("age".to_string()));
        }
        _ => panic!("Expected Alter command"),
    }
}

#[test]
fn alter_requires_add_or_drop() {
    let err = err_text(parse("alter table users rename age"));
    assert!(err.contains("add or drop"));
}

#[test]
fn alter_rejects_both_actions_in_one_statement() {
    let err = err_text(parse("alter table users add a drop b"));
    assert!(err.contains("usage: alter"));
}

#[test]
fn alter_requires_a_column_name() {
    let err = err_text(parse("alter table users add"));
    assert!(err.contains("usage: alter"));
}
