//! Simple-interest calculator: collect three of `i`, `p`, `r`, `t`, solve for
//! the fourth and render the answer as ASCII-art glyphs.

pub mod amount;
pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod glyph;
pub mod logging;
pub mod session;
pub mod solver;
pub mod variable;

pub use amount::{Amount, NumericParse, NumericRejection, is_valid_numeric, parse_numeric};
pub use collector::{Collector, is_valid_character};
pub use config::Settings;
pub use error::{ExitCode, FinanceError, GlyphError, Result};
pub use glyph::{GlyphTable, print_result};
pub use session::{Solution, run_session};
pub use solver::{
    Solve, missing_variable, solve_equation, solve_for_i, solve_for_p, solve_for_r, solve_for_t,
};
pub use variable::{Knowns, Variable};
