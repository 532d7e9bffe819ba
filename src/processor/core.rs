//! Core processor functionality
//!
//! This module contains the core Processor struct and its basic methods.

use std::path::{Path, PathBuf};

/// Renames one invoice by prepending its customer token
///
/// The Processor holds the source path of the invoice and the token found
/// inside it. Path handling and the rename itself live in sibling modules.
#[derive(Debug, Clone)]
pub struct Processor {
    /// The path of the invoice being processed
    pub(crate) source: PathBuf,
    /// The customer token to prepend
    pub(crate) token: String,
    /// Compute the new name without touching the filesystem
    pub(crate) dry_run: bool,
}

/// What [`Processor::apply`] did with a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The filename already contains the token, nothing was done
    AlreadyTagged,
    /// The file now lives at `target`
    Renamed { target: PathBuf },
    /// Dry run: the file would have been renamed to `target`
    Planned { target: PathBuf },
}

impl Processor {
    /// Creates a new ProcessorBuilder for building a Processor instance
    ///
    /// # Arguments
    /// * `file` - The invoice to rename
    /// * `token` - The customer token found in the invoice
    pub fn builder(file: &Path, token: &str) -> ProcessorBuilder {
        ProcessorBuilder::new(file, token)
    }

    /// Gets a reference to the source path
    pub fn source(&self) -> &PathBuf {
        &self.source
    }

    /// Gets the customer token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether the processor only reports the rename
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Builder for creating Processor instances
#[derive(Debug, Clone)]
pub struct ProcessorBuilder {
    source: PathBuf,
    token: String,
    dry_run: bool,
}

impl ProcessorBuilder {
    /// Creates a new ProcessorBuilder for the given file and token
    pub fn new(file: &Path, token: &str) -> ProcessorBuilder {
        ProcessorBuilder {
            source: file.to_path_buf(),
            token: token.to_string(),
            dry_run: false,
        }
    }

    /// Sets whether the rename is only reported
    ///
    /// # Returns
    /// * `ProcessorBuilder` - The builder instance for method chaining
    pub fn dry_run(mut self, dry_run: bool) -> ProcessorBuilder {
        self.dry_run = dry_run;
        self
    }

    /// Builds the Processor instance
    pub fn build(self) -> Processor {
        Processor {
            source: self.source,
            token: self.token,
            dry_run: self.dry_run,
        }
    }
}
