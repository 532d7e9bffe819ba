//! Workflow module
//!
//! This module drives the per-file loop: resolve, scan, rename.

mod context;
mod engine;

pub use context::{PlannedRename, WorkflowContext, WorkflowStats};
pub use engine::{ProcessingOptions, collect_files, process_files};
