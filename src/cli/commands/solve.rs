//! The interactive calculator run.

use console::style;

use crate::config::Settings;
use crate::error::{ExitCode, FinanceError};
use crate::glyph::GlyphTable;
use crate::session::run_session;

/// Load the configured glyph table, or the bundled one when none is set.
pub fn load_glyphs(settings: &Settings) -> Result<GlyphTable, FinanceError> {
    let table = match &settings.glyphs.path {
        Some(path) => {
            crate::debug_event!("glyph", "loading", "{}", path.display());
            GlyphTable::load(path)?
        }
        None => GlyphTable::bundled()?,
    };
    Ok(table)
}

fn report(e: &FinanceError) {
    let label = if e.is_computation() {
        "Computation error:"
    } else {
        "Error:"
    };
    eprintln!("{} {e}", style(label).red().bold().for_stderr());
}

/// Run the calculator on stdin/stdout and exit with the matching code.
pub fn run(settings: &Settings) -> ExitCode {
    let glyphs = match load_glyphs(settings) {
        Ok(table) => table,
        Err(e) => {
            report(&e);
            return e.exit_code();
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match run_session(&glyphs, stdin.lock(), stdout.lock()) {
        Ok(_) => ExitCode::Success,
        Err(e) => {
            report(&e);
            e.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlyphError;
    use std::path::PathBuf;

    #[test]
    fn test_default_settings_use_bundled_table() {
        let table = load_glyphs(&Settings::default()).unwrap();
        assert_eq!(table.height(), 5);
    }

    #[test]
    fn test_missing_glyph_file_is_config_error() {
        let mut settings = Settings::default();
        settings.glyphs.path = Some(PathBuf::from("/nonexistent/funky/glyph.json"));
        let err = load_glyphs(&settings).unwrap_err();
        assert!(matches!(err, FinanceError::Glyph(GlyphError::Read { .. })));
        assert_eq!(err.exit_code(), ExitCode::ConfigError);
    }
}
