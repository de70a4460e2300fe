//! CLI command handlers, one per file.

mod handle;
mod link;
mod parse;
mod register;

pub use handle::run_handle;
pub use link::run_link;
pub use parse::run_parse;
pub use register::run_register;
