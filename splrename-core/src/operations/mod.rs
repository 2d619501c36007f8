//! High-level operations that correspond to CLI commands
//!
//! These modules contain the run logic for each splrename mode, separated
//! from CLI concerns like argument parsing and output formatting. Each
//! operation validates its configuration before touching the filesystem.

pub mod line_name;
pub mod rename;
pub mod reverse;

pub use line_name::line_name_operation;
pub use rename::rename_operation;
pub use reverse::reverse_operation;
