//! Crate implementing the CLI commands.

mod cli;
mod report;
mod run;

pub use self::cli::CliOpts;
pub use self::report::{render_json, render_text};
pub use self::run::evaluate_run;
