//! One calculator run: collect, solve, render.

use std::io::{BufRead, Write};

use crate::amount::Amount;
use crate::collector::Collector;
use crate::error::Result;
use crate::glyph::{GlyphTable, print_result};
use crate::solver::solve_equation;
use crate::variable::Variable;

/// The solved variable and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub variable: Variable,
    pub value: Amount,
}

/// Run the interactive flow against `input` and `output`.
///
/// The result is rendered before anything is printed, so a glyph error
/// leaves no partial output.
pub fn run_session<R: BufRead, W: Write>(
    glyphs: &GlyphTable,
    input: R,
    mut output: W,
) -> Result<Solution> {
    let knowns = Collector::new(input, &mut output).collect()?;
    let solve = solve_equation(&knowns.variables())?;
    let value = solve.apply(&knowns)?;
    let variable = solve.target();

    let text = value.to_string();
    glyphs.render(&text)?;
    crate::log_event!("session", "solved", "{variable} = {text}");

    writeln!(output)?;
    writeln!(output, "The value of {} is {text}", variable.name())?;
    writeln!(output)?;
    print_result(glyphs, &text, &mut output)?;
    output.flush()?;

    Ok(Solution { variable, value })
}
