//! REPL command grammar.
//!
//! ## Module Structure
//!
//! - **command.rs**: Command definitions and conversion to AppEvent
//! - **parser.rs**: Manual string parsing for `@` and `:` prefixes
//!
//! Any line that is not a `:` command or an `@` load is treated as raw text
//! for the pipeline, so pasting a paragraph at the prompt just works.

pub mod command;
pub mod parser;

pub use command::{command_to_app_event, ReplCommand};
pub use parser::parse_repl_input;
