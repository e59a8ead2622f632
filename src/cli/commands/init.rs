//! Init and Config commands.

use console::style;

use crate::config::Settings;
use crate::error::ExitCode;

/// Write `.funky/settings.toml` with default settings.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn run_init(force: bool) -> ExitCode {
    match Settings::init_config_file(force) {
        Ok(path) => {
            println!("Created configuration file at: {}", path.display());
            println!("Edit this file to customize your settings.");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold().for_stderr());
            ExitCode::ConfigError
        }
    }
}

/// Print the effective settings as TOML.
pub fn run_config(config: &Settings) -> ExitCode {
    match toml::to_string_pretty(config) {
        Ok(toml_str) => {
            println!("# Effective settings (defaults, settings file, FF_ environment)");
            println!("{toml_str}");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("{} cannot display settings: {e}", style("Error:").red().bold().for_stderr());
            ExitCode::GeneralError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_config_succeeds_for_defaults() {
        assert_eq!(run_config(&Settings::default()), ExitCode::Success);
    }
}
