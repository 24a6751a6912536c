pub mod execute;

pub use execute::{Outcome, delete_all_rows, execute_command};
