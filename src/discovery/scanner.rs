//! Invoice content scanning
//!
//! This module reads the header of an invoice line by line looking for the
//! customer account value. Scanning never continues past the end of the
//! reference-number block.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use encoding_rs::{DecoderResult, Encoding, UTF_8};
use log::{debug, trace};

use crate::constants::{CUSTOMER_ACCOUNT_MARKER, END_OF_REFERENCES_MARKER};
use crate::errors::{Result, decoding_error, file_operation_error};

const DECODE_CHUNK_SIZE: usize = 4096;

/// How a scan of one invoice ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The account line was found; holds the text between its first tags,
    /// which is empty when the tags are adjacent or malformed
    Found(String),
    /// The end of the reference-number block came before any account line
    StopMarkerReached,
    /// Neither marker occurs in the file
    EndOfFile,
}

/// Returns the text between the first `>` and the next `<` of a line
///
/// # Examples
/// ```
/// use invoice_rename::discovery::extract_token;
///
/// let line = r#"<ReferenceNumber Type="Customer Acct Number">ACME</ReferenceNumber>"#;
/// assert_eq!(extract_token(line), Some("ACME"));
/// assert_eq!(extract_token("no tags here"), None);
/// ```
pub fn extract_token(line: &str) -> Option<&str> {
    let start = line.find('>')? + 1;
    let length = line[start..].find('<')?;
    Some(&line[start..start + length])
}

/// Decides whether a line ends the scan
///
/// The stop marker is checked first, so a line carrying both markers ends
/// the scan without a token.
fn inspect_line(line: &str) -> Option<ScanOutcome> {
    if line.contains(END_OF_REFERENCES_MARKER) {
        return Some(ScanOutcome::StopMarkerReached);
    }
    if line.contains(CUSTOMER_ACCOUNT_MARKER) {
        let token = extract_token(line).unwrap_or_default();
        return Some(ScanOutcome::Found(token.to_string()));
    }
    None
}

/// Scans an invoice for the customer account value
///
/// The file is read one line at a time and closed as soon as the scan
/// ends, so nothing past the line that ends the scan is inspected. UTF-8
/// files are read directly, with or without a byte-order mark. Files
/// starting with a UTF-16 byte-order mark are decoded incrementally with
/// `encoding_rs` and the same line rules apply.
///
/// # Errors
/// * `FileOperation` if the file cannot be opened or read, including
///   content that is not valid UTF-8
/// * `Decoding` if malformed UTF-16 data comes before the line that ends the scan
pub fn scan_for_token(path: &Path) -> Result<ScanOutcome> {
    let file = File::open(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "open"))?;
    let mut reader = BufReader::new(file);

    let head = reader
        .fill_buf()
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;

    match Encoding::for_bom(head) {
        Some((encoding, bom_length)) if encoding != UTF_8 => {
            reader.consume(bom_length);
            scan_decoded_lines(reader, encoding, path)
        }
        _ => scan_lines(reader, path),
    }
}

/// Decodes `reader` chunk by chunk and inspects every completed line
fn scan_decoded_lines<R: Read>(
    mut reader: R,
    encoding: &'static Encoding,
    path: &Path,
) -> Result<ScanOutcome> {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut chunk = [0u8; DECODE_CHUNK_SIZE];
    let mut pending = String::new();
    let mut line_number = 0usize;

    loop {
        let read = reader
            .read(&mut chunk)
            .map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;
        let last = read == 0;
        let mut input = &chunk[..read];

        loop {
            let needed = decoder
                .max_utf8_buffer_length_without_replacement(input.len())
                .unwrap_or(input.len() * 3 + 16);
            pending.reserve(needed);

            let (result, consumed) =
                decoder.decode_to_string_without_replacement(input, &mut pending, last);
            input = &input[consumed..];

            while let Some(end) = pending.find('\n') {
                let line: String = pending.drain(..=end).collect();
                line_number += 1;
                trace!("{}:{}: {}", path.display(), line_number, line.trim_end());

                if let Some(outcome) = inspect_line(&line) {
                    return Ok(outcome);
                }
            }

            match result {
                DecoderResult::InputEmpty => break,
                DecoderResult::OutputFull => continue,
                DecoderResult::Malformed(_, _) => {
                    return Err(decoding_error(path.to_path_buf(), encoding.name()));
                }
            }
        }

        if last {
            return Ok(inspect_line(&pending).unwrap_or(ScanOutcome::EndOfFile));
        }
    }
}

fn scan_lines<R: BufRead>(mut reader: R, path: &Path) -> Result<ScanOutcome> {
    let mut line = String::new();
    let mut line_number = 0usize;

    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;
        if read == 0 {
            return Ok(ScanOutcome::EndOfFile);
        }

        line_number += 1;
        trace!("{}:{}: {}", path.display(), line_number, line.trim_end());

        if let Some(outcome) = inspect_line(&line) {
            return Ok(outcome);
        }
    }
}

/// Returns the customer token of an invoice, or `None` when there is none
///
/// Every failure is absorbed here: unreadable files, a header that ends
/// before the account line and an empty value all yield `None`.
pub fn find_customer_token(path: &Path) -> Option<String> {
    let token = match scan_for_token(path) {
        Ok(ScanOutcome::Found(token)) => token,
        Ok(ScanOutcome::StopMarkerReached) => {
            debug!("reached {END_OF_REFERENCES_MARKER} without finding customer name");
            String::new()
        }
        Ok(ScanOutcome::EndOfFile) => String::new(),
        Err(e) => {
            debug!("bad filename {}, skipping", path.display());
            trace!("{e}");
            String::new()
        }
    };

    debug!("Customer Name Found: {token}");

    if token.is_empty() { None } else { Some(token) }
}
