//! Reusable pieces of the sqlgen CLI: logging setup, the renames-file
//! loader, code emission, and terminal summaries.

pub mod emit;
pub mod logging;
pub mod renames;
pub mod summary;
