//! Utility functions

pub mod casing;
pub mod shell;
pub mod text;

pub use casing::to_camel_case;
pub use shell::quote_arg;
pub use text::{comment_continuation, normalize_cell_text};
