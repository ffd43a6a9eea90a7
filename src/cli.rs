//! Command-line interface.
//!
//! There are no operational commands; the only surface is presentation
//! configuration.

use crate::styles::ThemeType;
use clap::Parser;

/// A tiny TUI that shows the current local time at launch
#[derive(Parser, Debug)]
#[command(
    name = "timeview",
    version,
    about = "A tiny TUI that shows the current local time at launch",
    long_about = None
)]
pub struct Cli {
    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_colors: bool,
}

impl Cli {
    /// Resolve the theme to use, honoring `--no-colors` and `NO_COLOR`.
    pub fn theme_type(&self) -> ThemeType {
        if self.no_colors || std::env::var_os("NO_COLOR").is_some() {
            ThemeType::NoColor
        } else {
            ThemeType::Dark
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_colors_flag_parses() {
        let cli = Cli::parse_from(["timeview", "--no-colors"]);
        assert!(cli.no_colors);
        assert_eq!(cli.theme_type(), ThemeType::NoColor);
    }

    #[test]
    fn defaults_to_no_flags() {
        let cli = Cli::parse_from(["timeview"]);
        assert!(!cli.no_colors);
    }
}
