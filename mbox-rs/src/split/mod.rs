//! Split module
//!
//! Plans which archives go where, then writes one file per message.

pub mod manager;
pub mod plan;
pub mod types;

pub use manager::{ensure_directory, output_file_name, SplitManager};
pub use plan::plan_jobs;
pub use types::*;
