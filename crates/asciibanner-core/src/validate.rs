//! Input validation against the printable ASCII range.

use crate::error::{CoreError, Result};
use crate::font::{FIRST_CHAR, LAST_CHAR};

/// Whether `ch` can be rendered: printable ASCII or a newline
pub fn is_supported(ch: char) -> bool {
    ch == '\n' || (FIRST_CHAR..=LAST_CHAR).contains(&ch)
}

/// Check that every character of `input` is supported.
///
/// All offending characters are collected in input order. One offender yields
/// [`CoreError::UnsupportedCharacter`], several yield
/// [`CoreError::UnsupportedCharacters`].
pub fn validate_input(input: &str) -> Result<()> {
    let mut unsupported: Vec<char> = input.chars().filter(|&ch| !is_supported(ch)).collect();

    match unsupported.len() {
        0 => Ok(()),
        1 => Err(CoreError::UnsupportedCharacter(unsupported.remove(0))),
        _ => Err(CoreError::UnsupportedCharacters(unsupported)),
    }
}
