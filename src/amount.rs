//! Exact decimal amounts and validated parsing of user input.
//!
//! Amounts are arbitrary-precision rationals, so `1233.56 * 1.87 / 100 * 4`
//! is computed exactly and only rounded when displayed.
//!
//! # Display
//!
//! - whole numbers have no decimal point: `200`
//! - anything else is rounded half-to-even to two places: `92.27`, `0.50`

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Mul;

/// Most digits accepted after the decimal point.
pub const MAX_FRACTION_DIGITS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(BigRational);

impl Amount {
    pub fn from_integer(n: i64) -> Self {
        Amount(BigRational::from_integer(BigInt::from(n)))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// `self / 100`, turning a percentage into a fraction.
    pub fn percent(&self) -> Amount {
        Amount(&self.0 / BigRational::from_integer(BigInt::from(100)))
    }

    /// Exact division. `None` when `divisor` is zero.
    pub fn checked_div(&self, divisor: &Amount) -> Option<Amount> {
        if divisor.is_zero() {
            None
        } else {
            Some(Amount(&self.0 / &divisor.0))
        }
    }

    /// Value scaled to hundredths and rounded half-to-even.
    fn hundredths(&self) -> BigInt {
        let scaled = &self.0 * BigRational::from_integer(BigInt::from(100));
        round_half_even(&scaled)
    }
}

fn round_half_even(value: &BigRational) -> BigInt {
    let floor = value.floor().to_integer();
    let remainder = value - BigRational::from_integer(floor.clone());
    let half = BigRational::new(BigInt::from(1), BigInt::from(2));
    match remainder.cmp(&half) {
        Ordering::Less => floor,
        Ordering::Greater => floor + 1,
        Ordering::Equal if floor.is_even() => floor,
        Ordering::Equal => floor + 1,
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            return write!(f, "{}", self.0.to_integer());
        }
        let hundredths = self.hundredths();
        let sign = if hundredths.is_negative() { "-" } else { "" };
        let (whole, fraction) = hundredths.abs().div_rem(&BigInt::from(100));
        write!(f, "{sign}{whole}.{:0>2}", fraction.to_string())
    }
}

impl Mul<&Amount> for &Amount {
    type Output = Amount;

    fn mul(self, rhs: &Amount) -> Amount {
        Amount(&self.0 * &rhs.0)
    }
}

impl Mul<&Amount> for Amount {
    type Output = Amount;

    fn mul(self, rhs: &Amount) -> Amount {
        Amount(self.0 * &rhs.0)
    }
}

/// Why a numeric input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericRejection {
    Empty,
    NotANumber,
    TooManyDecimals { found: usize },
}

impl fmt::Display for NumericRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericRejection::Empty => write!(f, "no value entered"),
            NumericRejection::NotANumber => write!(f, "not a decimal number"),
            NumericRejection::TooManyDecimals { found } => write!(
                f,
                "{found} decimal places given, at most {MAX_FRACTION_DIGITS} allowed"
            ),
        }
    }
}

/// Outcome of validating a numeric input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericParse {
    Valid(Amount),
    Invalid(NumericRejection),
}

impl NumericParse {
    pub fn is_valid(&self) -> bool {
        matches!(self, NumericParse::Valid(_))
    }

    pub fn into_result(self) -> Result<Amount, NumericRejection> {
        match self {
            NumericParse::Valid(amount) => Ok(amount),
            NumericParse::Invalid(reason) => Err(reason),
        }
    }
}

/// Parse a plain decimal such as `2000`, `-3.5` or `1233.56`.
///
/// Accepts an optional sign, digits, and at most two digits after a single
/// `.`. Exponents, separators and non-ASCII digits are rejected.
pub fn parse_numeric(input: &str) -> NumericParse {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return NumericParse::Invalid(NumericRejection::Empty);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.len() + fraction.len() == 0 || !all_digits(whole) || !all_digits(fraction) {
        return NumericParse::Invalid(NumericRejection::NotANumber);
    }
    if unsigned.ends_with('.') {
        return NumericParse::Invalid(NumericRejection::NotANumber);
    }
    if fraction.len() > MAX_FRACTION_DIGITS {
        return NumericParse::Invalid(NumericRejection::TooManyDecimals {
            found: fraction.len(),
        });
    }

    let digits = format!("{whole}{fraction}");
    let Some(mut numer) = BigInt::parse_bytes(digits.as_bytes(), 10) else {
        return NumericParse::Invalid(NumericRejection::NotANumber);
    };
    if negative {
        numer = -numer;
    }
    let denom = num_traits::pow(BigInt::from(10), fraction.len());
    NumericParse::Valid(Amount(BigRational::new(numer, denom)))
}

/// True when `input` is a decimal with at most two fractional digits.
pub fn is_valid_numeric(input: &str) -> bool {
    parse_numeric(input).is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        parse_numeric(s).into_result().unwrap()
    }

    #[test]
    fn test_is_valid_numeric() {
        assert!(is_valid_numeric("123"));
        assert!(is_valid_numeric("123.32"));
        assert!(is_valid_numeric("-4.5"));
        assert!(is_valid_numeric(" 0.07\n"));
        assert!(is_valid_numeric(".5"));
        assert!(!is_valid_numeric("asdad"));
        assert!(!is_valid_numeric("12.325"));
        assert!(!is_valid_numeric(""));
        assert!(!is_valid_numeric("1e3"));
        assert!(!is_valid_numeric("1.2.3"));
        assert!(!is_valid_numeric("12."));
        assert!(!is_valid_numeric("-"));
        assert!(!is_valid_numeric("."));
    }

    #[test]
    fn test_rejection_reasons() {
        assert_eq!(
            parse_numeric("12.325"),
            NumericParse::Invalid(NumericRejection::TooManyDecimals { found: 3 })
        );
        assert_eq!(
            parse_numeric("  "),
            NumericParse::Invalid(NumericRejection::Empty)
        );
        assert_eq!(
            parse_numeric("ten"),
            NumericParse::Invalid(NumericRejection::NotANumber)
        );
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(
            amount("1233.56").0,
            BigRational::new(BigInt::from(123356), BigInt::from(100))
        );
        assert_eq!(
            amount("-2.5"),
            Amount(BigRational::new(BigInt::from(-5), BigInt::from(2)))
        );
        assert_eq!(amount("2000.00"), Amount::from_integer(2000));
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::from_integer(200).to_string(), "200");
        assert_eq!(Amount::from_integer(-7).to_string(), "-7");
        assert_eq!(amount("0.5").to_string(), "0.50");
        assert_eq!(amount("12.34").to_string(), "12.34");
        assert_eq!(amount("-3.05").to_string(), "-3.05");

        let third = Amount::from_integer(1)
            .checked_div(&Amount::from_integer(3))
            .unwrap();
        assert_eq!(third.to_string(), "0.33");
        let two_thirds = Amount::from_integer(-2)
            .checked_div(&Amount::from_integer(3))
            .unwrap();
        assert_eq!(two_thirds.to_string(), "-0.67");
    }

    #[test]
    fn test_display_rounds_half_to_even() {
        let eighth = Amount::from_integer(1)
            .checked_div(&Amount::from_integer(8))
            .unwrap();
        // 0.125 -> 0.12, 0.375 -> 0.38
        assert_eq!(eighth.to_string(), "0.12");
        assert_eq!((&eighth * &Amount::from_integer(3)).to_string(), "0.38");
    }

    #[test]
    fn test_display_is_idempotent_for_integers() {
        let value = amount("2000");
        let first = value.to_string();
        let again = amount(&first).to_string();
        assert_eq!(first, "2000");
        assert_eq!(first, again);
    }

    #[test]
    fn test_checked_div_by_zero() {
        assert!(Amount::from_integer(5).checked_div(&amount("0.00")).is_none());
        assert_eq!(amount("250").percent(), amount("2.5"));
    }
}
