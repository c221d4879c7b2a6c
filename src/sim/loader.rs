//! Machine-code image loading.
//!
//! An image is a text file with one decimal-encoded 32-bit instruction word
//! per line. The loaded image seeds both memories: it is copied into
//! instruction memory and mirrored into data memory at the same word
//! indices.

use crate::common::error::ImageError;
use std::fs;
use std::process;

/// Parses a machine-code image: one decimal word per line.
///
/// # Arguments
///
/// * `text` - The full contents of an image file.
///
/// # Returns
///
/// The encoded words in order, or the 1-based line number of the first line
/// that is not a decimal-encoded word.
pub fn parse_image(text: &str) -> Result<Vec<i32>, ImageError> {
    let mut words = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let word = line
            .trim()
            .parse::<i32>()
            .map_err(|_| ImageError::BadWord(idx + 1))?;
        words.push(word);
    }
    Ok(words)
}

/// Reads and parses an image file, exiting the process on failure.
pub fn load_image(path: &str) -> Vec<i32> {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error: can't read image file '{}': {}", path, e);
        process::exit(1);
    });
    parse_image(&text).unwrap_or_else(|e| {
        eprintln!("error: {} in '{}'", e, path);
        process::exit(1);
    })
}
