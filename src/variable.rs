//! The four quantities of the simple-interest equation and the set of known values.

use std::collections::BTreeMap;
use std::fmt;

use crate::amount::Amount;
use crate::error::{FinanceError, Result};

/// A named quantity in `I = P * (r / 100) * t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variable {
    /// Interest earned
    I,
    /// Principal
    P,
    /// Rate, in percent
    R,
    /// Time
    T,
}

impl Variable {
    pub const ALL: [Variable; 4] = [Variable::I, Variable::P, Variable::R, Variable::T];

    /// Parse a one-character tag (`i`, `p`, `r` or `t`). Surrounding whitespace is ignored.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "i" => Some(Variable::I),
            "p" => Some(Variable::P),
            "r" => Some(Variable::R),
            "t" => Some(Variable::T),
            _ => None,
        }
    }

    pub fn tag(self) -> char {
        match self {
            Variable::I => 'i',
            Variable::P => 'p',
            Variable::R => 'r',
            Variable::T => 't',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variable::I => "interest",
            Variable::P => "principal",
            Variable::R => "rate",
            Variable::T => "time",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Values supplied by the user, at most three, keyed by variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knowns {
    values: BTreeMap<Variable, Amount>,
}

impl Knowns {
    pub const CAPACITY: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value. Rejects a variable that is already present or a fourth value.
    pub fn insert(&mut self, variable: Variable, amount: Amount) -> Result<()> {
        if self.values.contains_key(&variable) {
            return Err(FinanceError::DuplicateVariable(variable));
        }
        if self.values.len() >= Self::CAPACITY {
            let mut given = self.variables();
            given.push(variable);
            return Err(FinanceError::InvalidVariableSet { given });
        }
        self.values.insert(variable, amount);
        Ok(())
    }

    pub fn get(&self, variable: Variable) -> Result<&Amount> {
        self.values
            .get(&variable)
            .ok_or(FinanceError::MissingValue(variable))
    }

    pub fn contains(&self, variable: Variable) -> bool {
        self.values.contains_key(&variable)
    }

    pub fn variables(&self) -> Vec<Variable> {
        self.values.keys().copied().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.values.len() == Self::CAPACITY
    }
}
