//! Workflow context
//!
//! This module defines the state collected while files are processed.

use std::path::PathBuf;

/// A rename reported in dry-run mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    /// The invoice as it is named now
    pub source: PathBuf,
    /// The name it would get
    pub destination: PathBuf,
    /// The customer token that would be prepended
    pub token: String,
}

/// Statistics about the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of files scanned
    pub files_processed: usize,
    /// Number of files renamed (or planned for renaming in a dry run)
    pub files_renamed: usize,
    /// Number of files whose name already held the token
    pub files_already_tagged: usize,
    /// Number of files without a usable customer token
    pub files_without_token: usize,
    /// Number of files that failed to rename
    pub errors: usize,
}

/// Context for the workflow
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// Whether renames are only reported
    pub dry_run: bool,
    /// Statistics about the processing
    pub stats: WorkflowStats,
    /// Renames reported in dry-run mode
    pub planned_renames: Vec<PlannedRename>,
}

impl WorkflowContext {
    /// Creates a new workflow context
    pub fn new(dry_run: bool) -> Self {
        WorkflowContext {
            dry_run,
            stats: WorkflowStats::default(),
            planned_renames: Vec::new(),
        }
    }

    /// Adds a planned rename to the context
    pub fn add_planned_rename(&mut self, rename: PlannedRename) {
        self.planned_renames.push(rename);
    }

    pub fn increment_files_processed(&mut self) {
        self.stats.files_processed += 1;
    }

    pub fn increment_files_renamed(&mut self) {
        self.stats.files_renamed += 1;
    }

    pub fn increment_files_already_tagged(&mut self) {
        self.stats.files_already_tagged += 1;
    }

    pub fn increment_files_without_token(&mut self) {
        self.stats.files_without_token += 1;
    }

    pub fn increment_errors(&mut self) {
        self.stats.errors += 1;
    }
}
