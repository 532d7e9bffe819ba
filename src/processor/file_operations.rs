//! File operation functionality
//!
//! This module contains the rename that applies a processor to the disk.

use crate::errors::{Result, file_operation_error};
use crate::logging::format_message;
use colored::Colorize;
use log::{debug, info};
use std::fs::rename;
use std::path::Path;

use super::core::{Processor, RenameOutcome};

impl Processor {
    /// Prepends the token to the file's name unless it already carries it
    ///
    /// The directory and extension are kept. An existing file at the
    /// destination is handled by the platform's rename semantics.
    ///
    /// # Returns
    /// * `Result<RenameOutcome>` - What happened to the file
    ///
    /// # Errors
    /// * Returns `InvalidToken` if the token cannot be used in a filename
    /// * Returns `FileOperation` if the rename fails
    pub fn apply(&self) -> Result<RenameOutcome> {
        self.validate_token()?;

        if self.is_already_tagged()? {
            debug!(
                "Customer name already in filename, skipping {}",
                self.source.display()
            );
            return Ok(RenameOutcome::AlreadyTagged);
        }

        let target = self.target_path()?;
        let target_filename = self.target_filename()?;

        if self.dry_run {
            let message = format!("would rename {} to {}", self.source.display(), target_filename);
            let colored_message = format!(
                "would rename {} to {}",
                self.source.display(),
                target_filename.as_str().yellow()
            );
            info!("{}", format_message(&message, &colored_message));
            return Ok(RenameOutcome::Planned { target });
        }

        self.perform_rename(&target)?;

        let message = format!("new file name = {target_filename}");
        let colored_message = format!("new file name = {}", target_filename.as_str().green());
        debug!("{}", format_message(&message, &colored_message));

        Ok(RenameOutcome::Renamed { target })
    }

    /// Performs the filesystem rename from the source to `target`
    pub(crate) fn perform_rename(&self, target: &Path) -> Result<()> {
        rename(&self.source, target)
            .map_err(|e| file_operation_error(e, self.source.clone(), "rename"))
    }
}
