//! Row and column header labels
//!
//! Column headers are derived from the zero-based column index rather than
//! stored. Every block of 26 columns reuses the letters `A`-`Z` and appends the
//! block number: indices 0..=25 are `A1`..`Z1`, index 26 is `A2`, and so on.
//! This is not the Excel `AA` scheme.

use crate::error::{Error, Result};

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Header label for a zero-based column index
///
/// # Examples
/// ```
/// use gridsheet_core::column_header;
///
/// assert_eq!(column_header(0), "A1");
/// assert_eq!(column_header(25), "Z1");
/// assert_eq!(column_header(26), "A2");
/// ```
pub fn column_header(index: usize) -> String {
    let letter = LETTERS[index % 26] as char;
    format!("{}{}", letter, index / 26 + 1)
}

/// Inverse of [`column_header`]: parse a label such as `"B3"` into its column index
///
/// Lowercase letters are accepted.
pub fn parse_column_header(label: &str) -> Result<usize> {
    let label = label.trim();
    let invalid = || Error::InvalidColumnHeader(label.to_string());

    let mut chars = label.chars();
    let letter = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return Err(invalid());
    }

    let block: usize = chars.as_str().parse().map_err(|_| invalid())?;
    if block == 0 {
        return Err(invalid());
    }

    let offset = (letter as u8 - b'A') as usize;
    (block - 1)
        .checked_mul(26)
        .and_then(|base| base.checked_add(offset))
        .ok_or_else(invalid)
}

/// Header label for a zero-based row index (rows are numbered from 1)
pub fn row_header(index: usize) -> String {
    (index + 1).to_string()
}
