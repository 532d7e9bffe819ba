//! Path handling functionality
//!
//! This module contains methods for handling invoice paths, including
//! extracting filenames, validating tokens and building the new name.

use crate::constants::TOKEN_SEPARATOR;
use crate::errors::{Result, invalid_filename_error, invalid_token_error, path_operation_error};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;

use super::core::Processor;

/// Splits a filename into stem and extension, the extension keeping its dot
///
/// A name whose only dot is the leading one has no extension.
///
/// # Examples
/// ```
/// use invoice_rename::processor::split_filename;
///
/// assert_eq!(split_filename("CustomerInv-13606328543.xml"), ("CustomerInv-13606328543", ".xml"));
/// assert_eq!(split_filename("archive.tar.gz"), ("archive.tar", ".gz"));
/// assert_eq!(split_filename(".profile"), (".profile", ""));
/// assert_eq!(split_filename("README"), ("README", ""));
/// ```
pub fn split_filename(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        None | Some(0) => (filename, ""),
        Some(index) => filename.split_at(index),
    }
}

impl Processor {
    /// Gets the source filename as a string
    ///
    /// # Returns
    /// * `Result<&str>` - The filename, or an error if the path has none or it is not valid Unicode
    pub(crate) fn source_filename(&self) -> Result<&str> {
        self.source
            .file_name()
            .ok_or_else(|| path_operation_error(self.source.clone(), "get filename of"))
            .and_then(|os_str| {
                os_str
                    .to_str()
                    .ok_or_else(|| invalid_filename_error(self.source.clone()))
            })
    }

    /// Checks that the token can be placed in a filename unchanged
    ///
    /// # Errors
    /// Returns `InvalidToken` if the token is empty, contains the join
    /// character, a path separator, a character reserved in Windows
    /// filenames or a control character.
    pub(crate) fn validate_token(&self) -> Result<()> {
        static RESERVED_CHARACTERS: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r#"[/\\<>:"|?*\x00-\x1F]"#)
                .expect("Failed to compile regex pattern for RESERVED_CHARACTERS")
        });

        if self.token.is_empty() {
            return Err(invalid_token_error(&self.token, "token is empty"));
        }
        if self.token.contains(TOKEN_SEPARATOR) {
            return Err(invalid_token_error(
                &self.token,
                &format!("contains the '{TOKEN_SEPARATOR}' separator"),
            ));
        }
        if RESERVED_CHARACTERS.is_match(&self.token) {
            return Err(invalid_token_error(
                &self.token,
                "contains a character not allowed in filenames",
            ));
        }
        Ok(())
    }

    /// Checks if the filename already carries the token anywhere
    pub(crate) fn is_already_tagged(&self) -> Result<bool> {
        Ok(self.source_filename()?.contains(&self.token))
    }

    /// Builds the new filename: token, separator, then the old stem and extension
    pub(crate) fn target_filename(&self) -> Result<String> {
        let (stem, extension) = split_filename(self.source_filename()?);
        Ok(format!("{}{}{}{}", self.token, TOKEN_SEPARATOR, stem, extension))
    }

    /// Builds the destination path in the same directory as the source
    pub(crate) fn target_path(&self) -> Result<PathBuf> {
        Ok(self.source.with_file_name(self.target_filename()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::path::Path;

    fn processor(path: &str, token: &str) -> Processor {
        Processor::builder(Path::new(path), token).build()
    }

    #[test]
    fn test_target_path_keeps_directory_and_extension() {
        let target = processor("invoices/cust/CustomerInv-13606328543.xml", "ACME")
            .target_path()
            .unwrap();
        assert_eq!(
            target,
            PathBuf::from("invoices/cust/ACME_CustomerInv-13606328543.xml")
        );
    }

    #[test]
    fn test_target_path_without_directory() {
        let target = processor("inv.xml", "ACME").target_path().unwrap();
        assert_eq!(target, PathBuf::from("ACME_inv.xml"));
    }

    #[test]
    fn test_target_filename_multiple_dots() {
        let name = processor("inv.2022.04.xml", "ACME").target_filename().unwrap();
        assert_eq!(name, "ACME_inv.2022.04.xml");
    }

    #[test]
    fn test_is_already_tagged_substring_anywhere() {
        assert!(processor("dir/ACME_inv.xml", "ACME").is_already_tagged().unwrap());
        assert!(processor("dir/inv-ACME-2.xml", "ACME").is_already_tagged().unwrap());
        assert!(!processor("dir/inv.xml", "ACME").is_already_tagged().unwrap());
    }

    #[test]
    fn test_is_already_tagged_ignores_directory() {
        assert!(!processor("ACME/inv.xml", "ACME").is_already_tagged().unwrap());
    }

    #[test]
    fn test_validate_token_accepts_plain_names() {
        assert!(processor("inv.xml", "ACME").validate_token().is_ok());
        assert!(processor("inv.xml", "Schmieding Foods-2").validate_token().is_ok());
    }

    #[test]
    fn test_validate_token_rejects_unusable_tokens() {
        for token in ["", "AC_ME", "AC/ME", "AC\\ME", "AC:ME", "AC*ME", "AC\tME"] {
            let result = processor("inv.xml", token).validate_token();
            assert!(
                matches!(result, Err(Error::InvalidToken { .. })),
                "token {token:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_source_filename_missing() {
        let binding = processor("..", "ACME");
        let result = binding.source_filename();
        assert!(matches!(result, Err(Error::PathOperation { .. })));
    }
}
