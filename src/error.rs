//! Error types for solving, input collection and glyph rendering.

use std::path::PathBuf;
use thiserror::Error;

use crate::variable::Variable;

/// Process exit codes reported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    ComputationError = 2,
    ConfigError = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

#[derive(Error, Debug)]
pub enum FinanceError {
    #[error("division by zero while solving for {target}: {divisor} must not be zero")]
    DivisionByZero {
        target: Variable,
        divisor: &'static str,
    },

    #[error("expected three distinct variables out of i, p, r and t, got {given:?}")]
    InvalidVariableSet { given: Vec<Variable> },

    #[error("variable {0} was already supplied")]
    DuplicateVariable(Variable),

    #[error("no value supplied for variable {0}")]
    MissingValue(Variable),

    #[error("input closed before all three variables were supplied")]
    InputClosed,

    #[error(transparent)]
    Glyph(#[from] GlyphError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FinanceError {
    /// True for errors raised by the solving arithmetic itself.
    pub fn is_computation(&self) -> bool {
        matches!(self, FinanceError::DivisionByZero { .. })
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            FinanceError::DivisionByZero { .. } => ExitCode::ComputationError,
            FinanceError::Glyph(_) => ExitCode::ConfigError,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Errors from loading or using a glyph table.
#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("cannot read glyph table {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed glyph table: {reason}")]
    Malformed { reason: String },

    #[error("glyph key {key:?} must be exactly one character")]
    InvalidKey { key: String },

    #[error("no glyph for character {0:?}")]
    MissingGlyph(char),

    #[error("glyph {ch:?} has {found} rows, expected {expected}")]
    HeightMismatch {
        ch: char,
        expected: usize,
        found: usize,
    },
}

impl From<serde_json::Error> for GlyphError {
    fn from(e: serde_json::Error) -> Self {
        GlyphError::Malformed {
            reason: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = FinanceError::DivisionByZero {
            target: Variable::P,
            divisor: "rate",
        };
        assert!(err.is_computation());
        assert_eq!(i32::from(err.exit_code()), 2);

        let err = FinanceError::from(GlyphError::MissingGlyph('x'));
        assert!(!err.is_computation());
        assert_eq!(err.exit_code(), ExitCode::ConfigError);

        assert_eq!(FinanceError::InputClosed.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn test_messages() {
        let err = FinanceError::DivisionByZero {
            target: Variable::T,
            divisor: "principal",
        };
        assert_eq!(
            err.to_string(),
            "division by zero while solving for t: principal must not be zero"
        );
        assert_eq!(
            GlyphError::HeightMismatch {
                ch: '7',
                expected: 5,
                found: 4
            }
            .to_string(),
            "glyph '7' has 4 rows, expected 5"
        );
    }
}
