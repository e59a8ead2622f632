//! Interactive collection of the three known variables.

use std::io::{BufRead, Write};

use crate::amount::{Amount, NumericParse, parse_numeric};
use crate::error::{FinanceError, Result};
use crate::variable::{Knowns, Variable};

pub const INCORRECT_VARIABLE: &str = "Incorrect variable provided, please try again.";
pub const INCORRECT_NUMBER: &str =
    "Please select a correct number with no more than 2 decimal places.";

const ORDINALS: [&str; Knowns::CAPACITY] = ["first", "second", "third"];

/// True when `input` names one of `i`, `p`, `r` or `t`.
pub fn is_valid_character(input: &str) -> bool {
    Variable::from_tag(input).is_some()
}

/// Prompts on `output` and reads answers from `input` until three distinct
/// variables with valid values have been supplied.
pub struct Collector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn collect(&mut self) -> Result<Knowns> {
        let mut knowns = Knowns::new();
        for ordinal in ORDINALS {
            let variable = self.ask_variable(ordinal, &knowns)?;
            let amount = self.ask_value(ordinal)?;
            crate::debug_event!("collector", "accepted", "{variable} = {amount}");
            knowns.insert(variable, amount)?;
        }
        Ok(knowns)
    }

    fn ask_variable(&mut self, ordinal: &str, knowns: &Knowns) -> Result<Variable> {
        loop {
            let answer = self.prompt(&format!(
                "What is the {ordinal} variable? (Please enter i, p, r or t): "
            ))?;
            match Variable::from_tag(&answer) {
                Some(variable) if !knowns.contains(variable) => return Ok(variable),
                _ => writeln!(self.output, "{INCORRECT_VARIABLE}")?,
            }
        }
    }

    fn ask_value(&mut self, ordinal: &str) -> Result<Amount> {
        loop {
            let answer = self.prompt(&format!("Please now enter the {ordinal} variable: "))?;
            match parse_numeric(&answer) {
                NumericParse::Valid(amount) => return Ok(amount),
                NumericParse::Invalid(reason) => {
                    crate::debug_event!("collector", "rejected", "{answer:?}: {reason}");
                    writeln!(self.output, "{INCORRECT_NUMBER}")?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        // Raw bytes so a non-UTF-8 line is rejected by validation, not fatal
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(FinanceError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }
}
