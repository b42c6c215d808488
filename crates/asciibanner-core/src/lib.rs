//! # asciibanner Core
//!
//! Renders plain text as block-letter ASCII art from fixed-height banner fonts.
//!
//! This crate provides:
//! - Banner font file parsing
//! - Input validation against the printable ASCII range
//! - `\n` escape decoding
//! - Row-wise glyph composition into stacked banner blocks
//!
//! ```text
//!  _              _
//! | |__    __ _  | |__
//! | '_ \  / _` | | '_ \
//! | |_) || (_| | | | | |
//! |_.__/  \__,_| |_| |_|
//! ```

pub mod banner;
pub mod error;
pub mod font;
pub mod render;
pub mod validate;

pub use banner::{load_banner, BannerStyle};
pub use error::{CoreError, Result};
pub use font::{Font, FontLayout, Glyph, FIRST_CHAR, GLYPH_HEIGHT, LAST_CHAR};
pub use render::{decode_escaped_newlines, render_input, render_line};
pub use validate::{is_supported, validate_input};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
