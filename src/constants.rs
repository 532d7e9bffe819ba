/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Wildcard character that triggers internal path resolution
///
/// A single command-line argument containing this character is expanded by
/// the resolver instead of being taken literally.
pub const WILDCARD: char = '*';

/// Text on the line that carries the customer account value
pub const CUSTOMER_ACCOUNT_MARKER: &str = "Customer Acct Number";

/// Closing tag of the reference-number block
///
/// Scanning stops at the first line containing this text.
pub const END_OF_REFERENCES_MARKER: &str = "</ReferenceNumbers>";

/// Character placed between the customer token and the original filename
pub const TOKEN_SEPARATOR: char = '_';

/// Exit status when no files are given (-1 as seen by the shell)
pub const NO_ARGUMENTS_EXIT_CODE: u8 = 255;

/// Help text for the positional file arguments
pub const FILES_HELP: &str = "Invoice files to parse and rename (a single quoted wildcard is expanded)";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Report the new names without renaming any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log records to this file";
