//! asciibanner - render text as block-letter ASCII art
//!
//! ```text
//! $ asciibanner 'Hi\nthere' shadow
//! ```

use anyhow::Context;
use asciibanner_config::Config;
use asciibanner_core::{load_banner, render_input, validate_input, BannerStyle};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// asciibanner - Block-letter ASCII art from text
#[derive(Parser, Debug)]
#[command(name = "asciibanner")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to render; a literal \n starts a new line
    text: Option<String>,

    /// Banner font: standard, shadow or thinkertoy
    banner: Option<String>,

    /// Directory holding the banner font files
    #[arg(short = 'd', long)]
    banner_dir: Option<PathBuf>,

    /// Config file path
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Render even if the text has characters outside printable ASCII
    #[arg(long)]
    allow_unsupported: bool,

    /// List available banners and exit
    #[arg(long)]
    list_banners: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the art
    let log_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                format!(
                    "asciibanner={0},asciibanner_core={0},asciibanner_config={0}",
                    log_level
                )
            }),
        ))
        .init();

    tracing::debug!("Starting asciibanner v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load(args.config.as_deref())?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if args.list_banners {
        for style in BannerStyle::all() {
            println!("{}", style);
        }
        return Ok(());
    }

    let Some(text) = args.text.as_deref().filter(|t| !t.is_empty()) else {
        return Ok(());
    };

    let style = select_banner(args.banner.as_deref(), &config.banners.default_banner);

    if !args.allow_unsupported && config.render.reject_unsupported {
        validate_input(text)?;
    }

    let dir = args.banner_dir.unwrap_or(config.banners.directory);
    let font = load_banner(&dir, style)
        .with_context(|| format!("failed to load {} banner from {}", style, dir.display()))?;

    print!("{}", render_input(text, &font));
    Ok(())
}

/// Pick the banner named on the command line, else the configured default.
///
/// Unknown names warn and fall back to standard.
fn select_banner(requested: Option<&str>, default: &str) -> BannerStyle {
    let name = requested.unwrap_or(default);
    let (style, fell_back) = BannerStyle::resolve(name);
    if fell_back {
        eprintln!("Unknown banner, using standard.");
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_parsing() {
        let args = Args::try_parse_from(["asciibanner"]).unwrap();
        assert!(args.text.is_none());
        assert!(args.banner.is_none());
        assert!(!args.allow_unsupported);
    }

    #[test]
    fn test_arg_parsing_with_options() {
        let args = Args::try_parse_from([
            "asciibanner",
            "Hello\\nWorld",
            "shadow",
            "-d",
            "/tmp/banners",
            "--allow-unsupported",
        ])
        .unwrap();
        assert_eq!(args.text.as_deref(), Some("Hello\\nWorld"));
        assert_eq!(args.banner.as_deref(), Some("shadow"));
        assert_eq!(args.banner_dir, Some(PathBuf::from("/tmp/banners")));
        assert!(args.allow_unsupported);
    }

    #[test]
    fn test_select_banner() {
        assert_eq!(select_banner(Some("thinkertoy"), "standard"), BannerStyle::Thinkertoy);
        assert_eq!(select_banner(None, "shadow"), BannerStyle::Shadow);
        assert_eq!(select_banner(Some("nope"), "shadow"), BannerStyle::Standard);
    }
}
