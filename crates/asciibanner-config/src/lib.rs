//! # asciibanner Configuration
//!
//! Configuration sources (in priority order):
//! 1. CLI arguments (applied by the binary)
//! 2. Environment variables (`ASCIIBANNER_BANNERS__DIRECTORY=...`)
//! 3. Config file (`--config`, else ~/.config/asciibanner/config.toml)
//! 4. Built-in defaults

use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "ASCIIBANNER_";

/// Get the configuration directory
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("dev", "asciibanner", "asciibanner")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config/asciibanner"))
}

/// Default config file location
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Banner font lookup
    pub banners: BannersConfig,
    /// Rendering behavior
    pub render: RenderConfig,
}

/// Where banner fonts live and which one is used by default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannersConfig {
    /// Directory holding `<banner>.txt` font files
    pub directory: PathBuf,
    /// Banner used when none is named
    pub default_banner: String,
}

impl Default for BannersConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("banners"),
            default_banner: "standard".to_string(),
        }
    }
}

/// Rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Refuse input with characters outside printable ASCII
    pub reject_unsupported: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            reject_unsupported: true,
        }
    }
}

impl Config {
    /// Load configuration from defaults, a TOML file, and the environment.
    ///
    /// An explicit `path` must exist. Without one, the default config file is
    /// read only if present.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("config file not found: {}", path.display());
                }
                Some(path.to_path_buf())
            }
            None => Some(default_config_path()).filter(|p| p.exists()),
        };

        let config = Self::figment(file.as_deref()).extract()?;
        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Layered provider stack behind [`Config::load`]
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(file) = file {
            tracing::debug!("Reading config file {}", file.display());
            figment = figment.merge(Toml::file(file));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Serialize as pretty TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.banners.directory, PathBuf::from("banners"));
        assert_eq!(config.banners.default_banner, "standard");
        assert!(config.render.reject_unsupported);
    }

    #[test]
    fn test_config_serialization() {
        let toml = Config::default().to_toml().unwrap();
        assert!(toml.contains("[banners]"));
        assert!(toml.contains("[render]"));
        assert!(toml.contains("default_banner = \"standard\""));
    }

    #[test]
    fn test_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [banners]
                directory = "/usr/share/banners"

                [render]
                reject_unsupported = false
                "#,
            )?;

            let config: Config = Config::figment(Some(Path::new("config.toml"))).extract()?;
            assert_eq!(
                config.banners.directory,
                PathBuf::from("/usr/share/banners")
            );
            assert_eq!(config.banners.default_banner, "standard");
            assert!(!config.render.reject_unsupported);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[banners]\ndefault_banner = \"shadow\"\n")?;
            jail.set_env("ASCIIBANNER_BANNERS__DEFAULT_BANNER", "thinkertoy");

            let config: Config = Config::figment(Some(Path::new("config.toml"))).extract()?;
            assert_eq!(config.banners.default_banner, "thinkertoy");
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[banners]\ndefault_banner = \"shadow\"\n")?;

            let config = Config::load(Some(Path::new("config.toml"))).expect("config loads");
            assert_eq!(config.banners.default_banner, "shadow");
            Ok(())
        });
    }
}
