//! # Text rendering
//!
//! Turns user text into stacked banner blocks.
//!
//! The literal two-character sequence `\n` typed by the user starts a new
//! logical line. Each non-empty logical line becomes one block of glyph rows;
//! empty lines between blocks become a single blank line.

use crate::font::Font;

/// Replace every literal backslash + `n` pair with a real newline.
///
/// Scans left to right; each matched pair is consumed whole. No other escapes
/// are interpreted.
pub fn decode_escaped_newlines(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' && chars.peek() == Some(&'n') {
            chars.next();
            out.push('\n');
        } else {
            out.push(ch);
        }
    }

    out
}

/// Render one logical line (no real newlines) as `font.height()` rows.
///
/// Every row ends with a newline. Characters missing from the font contribute
/// nothing to any row.
pub fn render_line(line: &str, font: &Font) -> String {
    let mut out = String::new();

    for row in 0..font.height() {
        for ch in line.chars() {
            if let Some(text) = font.glyph(ch).and_then(|glyph| glyph.row(row)) {
                out.push_str(text);
            }
        }
        out.push('\n');
    }

    out
}

/// Render full user input, honoring `\n` escapes.
pub fn render_input(input: &str, font: &Font) -> String {
    let decoded = decode_escaped_newlines(input);

    if decoded.is_empty() {
        return String::new();
    }

    if !decoded.contains('\n') {
        return render_line(&decoded, font);
    }

    let parts: Vec<&str> = decoded.split('\n').collect();
    let last = parts.len() - 1;
    let mut out = String::new();
    let mut had_text = false;

    for (i, part) in parts.iter().enumerate() {
        if !part.is_empty() {
            out.push_str(&render_line(part, font));
            had_text = true;
        } else if i != last || had_text {
            // Interior gaps always print; the trailing split artifact only after content
            out.push('\n');
        }
    }

    tracing::trace!(
        "Rendered {} logical lines into {} bytes",
        parts.len(),
        out.len()
    );

    out
}
