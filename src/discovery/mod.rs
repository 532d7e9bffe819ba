//! File discovery module
//!
//! This module contains the wildcard resolver and the invoice content scanner.

mod resolver;
mod scanner;

pub use resolver::{is_wildcard, resolve_wildcard};
pub use scanner::{ScanOutcome, extract_token, find_customer_token, scan_for_token};
