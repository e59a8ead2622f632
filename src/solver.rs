//! Equation dispatch for `I = P * (r / 100) * t`.
//!
//! Three known variables determine the fourth. [`solve_equation`] picks the
//! [`Solve`] operation for the missing one, and [`Solve::apply`] runs it
//! against the collected values.

use crate::amount::Amount;
use crate::error::{FinanceError, Result};
use crate::variable::{Knowns, Variable};

/// One of the four rearrangements of the simple-interest equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solve {
    ForI,
    ForP,
    ForR,
    ForT,
}

impl Solve {
    /// The variable this operation computes.
    pub fn target(self) -> Variable {
        match self {
            Solve::ForI => Variable::I,
            Solve::ForP => Variable::P,
            Solve::ForR => Variable::R,
            Solve::ForT => Variable::T,
        }
    }

    fn for_target(target: Variable) -> Self {
        match target {
            Variable::I => Solve::ForI,
            Variable::P => Solve::ForP,
            Variable::R => Solve::ForR,
            Variable::T => Solve::ForT,
        }
    }

    /// Compute the target from the other three values in `knowns`.
    pub fn apply(self, knowns: &Knowns) -> Result<Amount> {
        match self {
            Solve::ForI => solve_for_i(
                knowns.get(Variable::P)?,
                knowns.get(Variable::R)?,
                knowns.get(Variable::T)?,
            ),
            Solve::ForP => solve_for_p(
                knowns.get(Variable::I)?,
                knowns.get(Variable::R)?,
                knowns.get(Variable::T)?,
            ),
            Solve::ForR => solve_for_r(
                knowns.get(Variable::P)?,
                knowns.get(Variable::I)?,
                knowns.get(Variable::T)?,
            ),
            Solve::ForT => solve_for_t(
                knowns.get(Variable::P)?,
                knowns.get(Variable::R)?,
                knowns.get(Variable::I)?,
            ),
        }
    }
}

/// The one variable not in `known`.
///
/// `known` must hold exactly three distinct variables.
pub fn missing_variable(known: &[Variable]) -> Result<Variable> {
    let invalid = || FinanceError::InvalidVariableSet {
        given: known.to_vec(),
    };

    if known.len() != Knowns::CAPACITY {
        return Err(invalid());
    }
    let mut missing = Variable::ALL
        .iter()
        .copied()
        .filter(|v| !known.contains(v));
    match (missing.next(), missing.next()) {
        (Some(variable), None) => Ok(variable),
        _ => Err(invalid()),
    }
}

/// Select the operation that solves for the variable missing from `known`.
pub fn solve_equation(known: &[Variable]) -> Result<Solve> {
    let solve = Solve::for_target(missing_variable(known)?);
    crate::debug_event!("solver", "dispatch", "{solve:?}");
    Ok(solve)
}

fn divide(
    numerator: &Amount,
    divisor: &Amount,
    target: Variable,
    name: &'static str,
) -> Result<Amount> {
    numerator
        .checked_div(divisor)
        .ok_or(FinanceError::DivisionByZero {
            target,
            divisor: name,
        })
}

/// `i = p * (r / 100) * t`
pub fn solve_for_i(p: &Amount, r: &Amount, t: &Amount) -> Result<Amount> {
    Ok(p * &r.percent() * t)
}

/// `p = i / ((r / 100) * t)`
pub fn solve_for_p(i: &Amount, r: &Amount, t: &Amount) -> Result<Amount> {
    divide(i, &(r.percent() * t), Variable::P, "rate * time")
}

/// `r = (i / (p * t)) * 100`
pub fn solve_for_r(p: &Amount, i: &Amount, t: &Amount) -> Result<Amount> {
    let ratio = divide(i, &(p * t), Variable::R, "principal * time")?;
    Ok(ratio * &Amount::from_integer(100))
}

/// `t = i / ((r / 100) * p)`
pub fn solve_for_t(p: &Amount, r: &Amount, i: &Amount) -> Result<Amount> {
    divide(i, &(r.percent() * p), Variable::T, "rate * principal")
}
