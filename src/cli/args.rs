//! CLI argument parsing using clap.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Simple-interest calculator
///
/// Run without a command to enter three of interest (i), principal (p),
/// rate (r) and time (t); the fourth is solved and printed in large digits.
#[derive(Parser, Debug)]
#[command(
    name = "funky-finance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Simple-interest calculator with ASCII-art results",
    next_line_help = true,
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON glyph table to render the result with (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub glyphs: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create .funky/settings.toml with default settings
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Display active settings
    Config,
}
