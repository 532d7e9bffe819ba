//! Wildcard resolution
//!
//! This module expands a single wildcard argument into the matching entries
//! of one directory. Only the final path component may contain wildcards.

use std::fs::read_dir;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use log::debug;
use shellexpand::tilde;

use crate::constants::WILDCARD;
use crate::errors::{Result, file_operation_error, glob_pattern_error, path_unavailable_error};

/// Returns true if the argument should be expanded by [`resolve_wildcard`]
pub fn is_wildcard(argument: &str) -> bool {
    argument.contains(WILDCARD)
}

fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}

/// Splits an argument into its directory prefix, separator included, and
/// the final component
fn split_pattern(argument: &str) -> (&str, &str) {
    match argument.rfind(is_separator) {
        Some(index) => argument.split_at(index + 1),
        None => ("", argument),
    }
}

fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: !cfg!(windows),
        require_literal_separator: false,
        require_literal_leading_dot: false,
    }
}

/// Expands a wildcard argument into the existing files it names
///
/// The final component of `argument` is matched shell-style (`*`, `?`,
/// `[...]`) against the immediate children of the directory part, which
/// defaults to the current directory. A leading `~` is expanded first, since
/// a quoted wildcard never reaches the shell's own expansion. Every match is
/// returned as the directory prefix exactly as written followed by the
/// entry name, in directory enumeration order. Subdirectories and names
/// that are not valid Unicode are left out.
///
/// # Errors
/// * `PathUnavailable` if the directory part does not exist or is not a directory
/// * `GlobPattern` if the final component is not a valid pattern
/// * `FileOperation` if the directory cannot be listed
pub fn resolve_wildcard(argument: &str) -> Result<Vec<PathBuf>> {
    let expanded = tilde(argument);
    let (prefix, pattern) = split_pattern(&expanded);
    let directory = if prefix.is_empty() { "." } else { prefix };

    debug!("Searching {directory}");

    if !Path::new(directory).is_dir() {
        return Err(path_unavailable_error(PathBuf::from(directory)));
    }

    let matcher = Pattern::new(pattern).map_err(|e| glob_pattern_error(e, pattern))?;
    let options = match_options();

    let entries = read_dir(directory)
        .map_err(|e| file_operation_error(e, PathBuf::from(directory), "list"))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| file_operation_error(e, PathBuf::from(directory), "list"))?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                debug!("Ignoring entry with non-unicode name: {}", raw.to_string_lossy());
                continue;
            }
        };

        if !matcher.matches_with(&name, options) || entry.path().is_dir() {
            continue;
        }

        debug!("Appending {name} to list to process");
        files.push(PathBuf::from(format!("{prefix}{name}")));
    }

    Ok(files)
}
