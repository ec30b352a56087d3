//! Stock quantity value object.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Largest magnitude at which every integer is exactly representable in `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

const NOT_A_NUMBER: &str = "Quantity must be a number";

/// A signed, possibly fractional stock quantity.
///
/// Always finite: NaN and the infinities are rejected at construction, which
/// is how "not a number" surfaces once quantities are statically typed.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(try_from = "f64")]
pub struct Quantity(f64);

impl ValueObject for Quantity {}

impl Quantity {
    pub const ZERO: Quantity = Quantity(0.0);

    pub fn new(value: f64) -> DomainResult<Self> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(DomainError::invalid_argument(NOT_A_NUMBER))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    /// Sum of two quantities; fails if the result leaves the finite range.
    pub fn checked_add(self, other: Quantity) -> DomainResult<Quantity> {
        Self::new(self.0 + other.0)
            .map_err(|_| DomainError::invalid_argument("quantity overflow"))
    }

    /// Difference of two quantities; fails if the result leaves the finite range.
    pub fn checked_sub(self, other: Quantity) -> DomainResult<Quantity> {
        Self::new(self.0 - other.0)
            .map_err(|_| DomainError::invalid_argument("quantity overflow"))
    }

    // Negative zero has no integer spelling; it stays a float so it survives a
    // JSON round trip.
    fn as_exact_integer(self) -> Option<i64> {
        let negative_zero = self.0 == 0.0 && self.0.is_sign_negative();
        if !negative_zero && self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INTEGER {
            Some(self.0 as i64)
        } else {
            None
        }
    }
}

impl TryFrom<f64> for Quantity {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<Quantity> for f64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl FromStr for Quantity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid_argument(NOT_A_NUMBER))?;
        Self::new(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_exact_integer() {
            Some(n) => fmt::Display::fmt(&n, f),
            None => fmt::Display::fmt(&self.0, f),
        }
    }
}

// Integral quantities are written as JSON integers (`10`, not `10.0`).
impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_exact_integer() {
            Some(n) => serializer.serialize_i64(n),
            None => serializer.serialize_f64(self.0),
        }
    }
}
