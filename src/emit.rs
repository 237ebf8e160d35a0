//! Shell script output of a rename plan.

mod script;

pub use script::{render_script, script_file_name, shell_quote, timestamp, write_script};
