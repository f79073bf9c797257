//! Command-line argument parsing and handling.

pub mod check;
pub mod content;
pub mod contributions;
pub mod definition;
pub mod output;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, process_args};
pub use utils::{determine_log_level, determine_log_target};
