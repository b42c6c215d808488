//! Named banner styles and where their font files live.

use crate::error::{CoreError, Result};
use crate::font::Font;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The banner fonts shipped as `<name>.txt` files in a banner directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BannerStyle {
    #[default]
    Standard,
    Shadow,
    Thinkertoy,
}

impl BannerStyle {
    /// Get all available banner styles
    pub fn all() -> &'static [BannerStyle] {
        &[
            BannerStyle::Standard,
            BannerStyle::Shadow,
            BannerStyle::Thinkertoy,
        ]
    }

    /// Name used on the command line and in config
    pub fn name(&self) -> &'static str {
        match self {
            BannerStyle::Standard => "standard",
            BannerStyle::Shadow => "shadow",
            BannerStyle::Thinkertoy => "thinkertoy",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            BannerStyle::Standard => "standard.txt",
            BannerStyle::Shadow => "shadow.txt",
            BannerStyle::Thinkertoy => "thinkertoy.txt",
        }
    }

    /// Path of this banner's font file inside `dir`
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }

    /// Look up `name`, falling back to [`BannerStyle::Standard`].
    ///
    /// The flag is `true` when the name was not recognized.
    pub fn resolve(name: &str) -> (BannerStyle, bool) {
        match name.parse() {
            Ok(style) => (style, false),
            Err(_) => {
                tracing::debug!("Unknown banner {:?}, falling back to standard", name);
                (BannerStyle::Standard, true)
            }
        }
    }
}

impl FromStr for BannerStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        BannerStyle::all()
            .iter()
            .copied()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownBanner(s.to_string()))
    }
}

impl std::fmt::Display for BannerStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Load the font for `style` from `dir`
pub fn load_banner(dir: &Path, style: BannerStyle) -> Result<Font> {
    let path = style.path_in(dir);
    tracing::info!("Loading {} banner from {}", style, path.display());
    Font::load(path)
}
