//! Workflow engine
//!
//! This module contains the engine that runs every file through the
//! scanner and the renamer.

use std::collections::HashSet;
use std::path::PathBuf;

use log::{debug, error, info, warn};

use crate::cli::Invocation;
use crate::discovery::{find_customer_token, is_wildcard, resolve_wildcard};
use crate::errors::{Error, Result, no_arguments_error};
use crate::processor::{Processor, RenameOutcome};

use super::context::{PlannedRename, WorkflowContext};

/// Options for processing files
#[derive(Debug, Clone)]
pub struct ProcessingOptions {
    /// Paths from the command line, in order
    pub files: Vec<String>,
    /// Whether to only report renames instead of performing them
    pub dry_run: bool,
}

impl From<&Invocation> for ProcessingOptions {
    fn from(invocation: &Invocation) -> Self {
        ProcessingOptions {
            files: invocation.files.clone(),
            dry_run: invocation.dry_run,
        }
    }
}

/// Turns the command-line paths into the list of files to process
///
/// A lone argument containing a wildcard is expanded; any other list is
/// taken literally, the shell having expanded it already. A wildcard whose
/// directory is unavailable is reported and expands to nothing. Repeated
/// paths are kept once, at their first position.
pub fn collect_files(arguments: &[String]) -> Vec<PathBuf> {
    let candidates: Vec<PathBuf> = match arguments {
        [single] if is_wildcard(single) => match resolve_wildcard(single) {
            Ok(files) => files,
            Err(e) => {
                error!("{e}");
                Vec::new()
            }
        },
        _ => arguments.iter().map(PathBuf::from).collect(),
    };

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|path| seen.insert(path.clone()))
        .collect()
}

/// Processes the invoices named on the command line
///
/// This function orchestrates the workflow steps:
/// 1. Refuse an empty argument list
/// 2. Expand a lone wildcard argument
/// 3. Scan each file for its customer token, skipping files without one
/// 4. Prepend the token to the filename unless it is already there
///
/// A failure on one file is logged and never stops the batch.
///
/// # Returns
/// * `Result<WorkflowContext>` - The workflow context with statistics
///
/// # Errors
/// * Returns `NoArguments` if no files were given
pub fn process_files(options: &ProcessingOptions) -> Result<WorkflowContext> {
    if options.files.is_empty() {
        return Err(no_arguments_error());
    }

    let files = collect_files(&options.files);

    debug!("Files to be parsed:");
    for file in &files {
        debug!("\t{}", file.display());
    }

    let mut context = WorkflowContext::new(options.dry_run);

    for path in &files {
        context.increment_files_processed();

        let Some(token) = find_customer_token(path) else {
            debug!("No customer information read from file {}", path.display());
            context.increment_files_without_token();
            continue;
        };

        let processor = Processor::builder(path, &token)
            .dry_run(options.dry_run)
            .build();

        match processor.apply() {
            Ok(RenameOutcome::AlreadyTagged) => context.increment_files_already_tagged(),
            Ok(RenameOutcome::Renamed { .. }) => context.increment_files_renamed(),
            Ok(RenameOutcome::Planned { target }) => {
                context.increment_files_renamed();
                context.add_planned_rename(PlannedRename {
                    source: path.clone(),
                    destination: target,
                    token,
                });
            }
            Err(e @ Error::InvalidToken { .. }) => {
                warn!("Skipping {}: {e}", path.display());
                context.increment_files_without_token();
            }
            Err(e) => {
                error!("{e}");
                context.increment_errors();
            }
        }
    }

    debug!(
        "Processed {} files: {} renamed, {} already named, {} without customer, {} errors",
        context.stats.files_processed,
        context.stats.files_renamed,
        context.stats.files_already_tagged,
        context.stats.files_without_token,
        context.stats.errors
    );

    if options.dry_run && !context.planned_renames.is_empty() {
        info!(
            "{} files would be renamed. Run without --dry to rename them.",
            context.planned_renames.len()
        );
    }

    debug!("Completed, Exiting");

    Ok(context)
}
