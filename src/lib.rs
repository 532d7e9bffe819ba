//! Prepends the customer account found inside invoice files to their names
//!
//! The pipeline runs in three steps: a lone wildcard argument is expanded
//! ([`discovery::resolve_wildcard`]), each invoice header is scanned for the
//! customer account ([`discovery::find_customer_token`]) and the file is
//! renamed to `<token>_<old name>` unless its name already holds the token
//! ([`processor::Processor`]). [`workflow::process_files`] ties them together.

pub mod cli;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod processor;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{Invocation, build_command, get_matches, get_verbosity};
    pub use crate::errors::{
        decoding_error, file_operation_error, glob_pattern_error, invalid_filename_error,
        invalid_token_error, no_arguments_error, path_operation_error, path_unavailable_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::workflow::{ProcessingOptions, WorkflowContext, process_files};
}
