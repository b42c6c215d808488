//! Error types for asciibanner core

use thiserror::Error;

/// Result type for asciibanner core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// Font file ran out of lines before every glyph block was read
    #[error("invalid banner file: not enough lines for char {missing:?}")]
    MalformedFontFile { missing: char },

    /// Input contains one character outside the printable range
    #[error("unsupported character: {0:?}")]
    UnsupportedCharacter(char),

    /// Input contains several characters outside the printable range
    #[error("unsupported characters: {}", quote_all(.0))]
    UnsupportedCharacters(Vec<char>),

    /// Banner name with no known font file
    #[error("unknown banner: {0}")]
    UnknownBanner(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 encoding error
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

fn quote_all(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| format!("{:?}", c))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_character_message() {
        let err = CoreError::UnsupportedCharacter('é');
        assert_eq!(err.to_string(), "unsupported character: 'é'");
    }

    #[test]
    fn test_multiple_characters_message() {
        let err = CoreError::UnsupportedCharacters(vec!['Γ', 'ε', '🙂']);
        assert_eq!(
            err.to_string(),
            "unsupported characters: 'Γ', 'ε', '🙂'"
        );
    }

    #[test]
    fn test_malformed_font_message() {
        let err = CoreError::MalformedFontFile { missing: '~' };
        assert_eq!(
            err.to_string(),
            "invalid banner file: not enough lines for char '~'"
        );
    }
}
