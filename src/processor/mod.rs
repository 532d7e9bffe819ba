//! File processing module
//!
//! This module contains the renamer that prepends a customer token to an
//! invoice filename, split into the processor itself, path handling and
//! the filesystem operation.

mod core;
mod file_operations;
mod path_handling;

pub use self::core::{Processor, ProcessorBuilder, RenameOutcome};
pub use path_handling::split_filename;
