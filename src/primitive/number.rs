//! Representation of numbers.
//!
//! Every number is an arbitrary-precision decimal. Equality and ordering are
//! by numeric value, so 2, 2.0 and 2.00 are the same number.

use std::{fmt, ops, str};

use bigdecimal::{BigDecimal, One, Zero};

use crate::sexp::Sexp;


#[derive(Clone, PartialEq, PartialOrd)]
pub struct Number(BigDecimal);

#[derive(Debug)]
pub struct ParseNumberError(String);


impl Number {
    pub fn new(value: BigDecimal) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    pub fn one() -> Self {
        Self(BigDecimal::one())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// None if other is zero.
    pub fn checked_div(&self, other: &Number) -> Option<Number> {
        if other.is_zero() {
            return None;
        }
        Some(Number(self.0.clone() / other.0.clone()))
    }

    /// Remainder truncated toward zero (sign follows self). None if other is
    /// zero.
    pub fn checked_rem(&self, other: &Number) -> Option<Number> {
        if other.is_zero() {
            return None;
        }
        Some(Number(self.0.clone() % other.0.clone()))
    }

    pub fn recip(&self) -> Option<Number> {
        Number::one().checked_div(self)
    }
}


impl str::FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<BigDecimal>() {
            Ok(dec) => Ok(Number(dec)),
            Err(_) => Err(ParseNumberError(s.to_string())),
        }
    }
}

// Always plain positional notation; never an exponent.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (int, scale) = self.0.as_bigint_and_exponent();
        let text = int.to_string();
        let (sign, digits) = match text.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", text.as_str()),
        };

        if scale <= 0 {
            if digits == "0" {
                return write!(f, "0");
            }
            return write!(f, "{}{}{}", sign, digits, "0".repeat(scale.unsigned_abs() as usize));
        }

        let scale = scale as usize;
        let padded = if digits.len() <= scale {
            format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
        } else {
            digits.to_string()
        };
        let point = padded.len() - scale;
        write!(f, "{}{}.{}", sign, &padded[..point], &padded[point..])
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.0)
    }
}

impl fmt::Display for ParseNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a decimal number: \"{}\"", self.0)
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::zero()
    }
}

impl ops::AddAssign for Number {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl ops::SubAssign for Number {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl ops::MulAssign for Number {
    fn mul_assign(&mut self, other: Self) {
        self.0 *= other.0;
    }
}

impl ops::Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        Number(-self.0)
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number(BigDecimal::from(i))
    }
}

impl From<i32> for Number {
    fn from(i: i32) -> Self {
        Number(BigDecimal::from(i))
    }
}

impl From<BigDecimal> for Number {
    fn from(dec: BigDecimal) -> Self {
        Number(dec)
    }
}

impl From<i64> for Sexp {
    fn from(i: i64) -> Self {
        Sexp::Number(i.into())
    }
}

impl From<i32> for Sexp {
    fn from(i: i32) -> Self {
        Sexp::Number(i.into())
    }
}

impl_try_from!(Number => Number);


#[cfg(test)]
#[path = "./number_test.rs"]
mod number_test;
