//! CLI command implementations.

mod check;
mod load;
mod term;
mod validate;

pub use check::{run_check, CheckArgs};
pub use term::{run_term, TermArgs};
pub use validate::{run_validate, ValidateArgs};
