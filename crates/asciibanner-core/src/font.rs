//! # Banner fonts
//!
//! A banner font is a flat text file holding one fixed-height glyph for every
//! printable ASCII character, space (32) through tilde (126), in ascending order.
//!
//! Each character occupies a 9-line block: one separator line that is ignored,
//! followed by the 8 rows of the glyph.
//!
//! ```text
//!                      <- separator (space)
//!                      <- row 0
//!  _
//! | |
//! | |
//! |_|
//! (_)
//!                      <- row 6
//!                      <- row 7
//!                      <- separator (!)
//! ```

use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::path::Path;

/// Number of rows in every glyph
pub const GLYPH_HEIGHT: usize = 8;

/// First character stored in a font file (space)
pub const FIRST_CHAR: char = ' ';

/// Last character stored in a font file (tilde)
pub const LAST_CHAR: char = '~';

/// Shape of a font file: glyph height and the character range it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontLayout {
    /// Rows per glyph
    pub height: usize,
    /// First character, stored in the first block
    pub first: char,
    /// Last character, stored in the final block
    pub last: char,
}

impl FontLayout {
    /// Lines per block: one separator plus the glyph rows
    pub fn block_size(&self) -> usize {
        self.height + 1
    }

    /// Number of characters covered by this layout
    pub fn char_count(&self) -> usize {
        (self.first..=self.last).count()
    }
}

impl Default for FontLayout {
    fn default() -> Self {
        Self {
            height: GLYPH_HEIGHT,
            first: FIRST_CHAR,
            last: LAST_CHAR,
        }
    }
}

/// The ASCII-art rows for a single character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    rows: Vec<String>,
}

impl Glyph {
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    /// Row at `index`, if the glyph has one
    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// A loaded banner font: one glyph per supported character
#[derive(Debug, Clone)]
pub struct Font {
    glyphs: HashMap<char, Glyph>,
    height: usize,
}

impl Font {
    /// Build a font directly from glyphs
    pub fn from_glyphs(height: usize, glyphs: HashMap<char, Glyph>) -> Self {
        Self { glyphs, height }
    }

    /// Parse font file content using the standard layout
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_with(content, FontLayout::default())
    }

    /// Parse font file content laid out as `layout` describes.
    ///
    /// Fails with [`CoreError::MalformedFontFile`] naming the first character
    /// whose block runs past the end of the content. No partial font is returned.
    /// Row text is kept verbatim, whatever its width.
    pub fn parse_with(content: &str, layout: FontLayout) -> Result<Self> {
        let lines: Vec<&str> = content.split('\n').collect();
        let block_size = layout.block_size();
        let mut glyphs = HashMap::with_capacity(layout.char_count());

        for (index, ch) in (layout.first..=layout.last).enumerate() {
            let start = index * block_size + 1;
            let end = start + layout.height;
            let rows = lines
                .get(start..end)
                .ok_or(CoreError::MalformedFontFile { missing: ch })?;

            glyphs.insert(
                ch,
                Glyph::new(rows.iter().map(|row| row.to_string()).collect()),
            );
        }

        tracing::debug!(
            "Parsed font with {} glyphs from {} lines",
            glyphs.len(),
            lines.len()
        );

        Ok(Self {
            glyphs,
            height: layout.height,
        })
    }

    /// Parse raw font file bytes, which must be valid UTF-8
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let content = String::from_utf8(bytes.to_vec())?;
        Self::parse(&content)
    }

    /// Read and parse a font file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading font from {}", path.display());
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    /// Rows per glyph
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Build font file text where every glyph row is `"<char><row>"`.
#[cfg(test)]
pub(crate) fn sample_font_text() -> String {
    let layout = FontLayout::default();
    let mut out = String::new();
    for ch in layout.first..=layout.last {
        out.push('\n');
        for row in 0..layout.height {
            out.push_str(&format!("{}{}\n", ch, row));
        }
    }
    out
}
