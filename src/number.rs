//! Functionality relating to the number payload of a [`Value`](crate::Value)
#![allow(clippy::float_cmp)]

use std::cmp::Ordering;
use std::convert::{TryFrom, TryInto};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

#[derive(Copy, Clone)]
enum Repr {
    I64(i64),
    // Only holds values above `i64::MAX`
    U64(u64),
    F64(f64),
}

fn can_represent_as_f64(x: u64) -> bool {
    x.leading_zeros() + x.trailing_zeros() >= 11
}

fn cmp_i64_to_f64(a: i64, b: f64) -> Ordering {
    if a < 0 {
        cmp_u64_to_f64(a.wrapping_neg() as u64, -b).reverse()
    } else {
        cmp_u64_to_f64(a as u64, b)
    }
}
fn cmp_u64_to_f64(a: u64, b: f64) -> Ordering {
    if can_represent_as_f64(a) {
        // Both sides are finite, so the comparison is total
        (a as f64).partial_cmp(&b).unwrap_or(Ordering::Equal)
    } else if b <= (0x0020_0000_0000_0000_u64 as f64) {
        // Every non-representable integer is above 2^53
        Ordering::Greater
    } else if b >= u64::MAX as f64 {
        Ordering::Less
    } else {
        // The remaining floating point values can be losslessly converted to u64.
        a.cmp(&(b as u64))
    }
}

/// The `Number` type is the numeric payload of a [`Value`](crate::Value).
///
/// Integers and floats are stored separately but compare as mathematical
/// values, so `2` and `2.0` are equal. Use [`Number::has_decimal_point`] to
/// tell them apart.
///
/// Special floating point values (eg. NaN, Infinity, etc.) cannot be stored
/// within a `Number`, which is what makes `Number` totally ordered.
#[derive(Copy, Clone)]
pub struct Number(Repr);

impl Number {
    /// Returns the number zero (without a decimal point).
    #[must_use]
    pub fn zero() -> Self {
        Number(Repr::I64(0))
    }

    fn new_u64(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => Number(Repr::I64(v)),
            Err(_) => Number(Repr::U64(value)),
        }
    }

    /// Converts this number to an i64 if it can be represented exactly.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        match self.0 {
            Repr::I64(v) => Some(v),
            Repr::U64(_) => None,
            Repr::F64(v) => {
                if v.fract() == 0.0 && i64::MIN as f64 <= v && v < i64::MAX as f64 {
                    Some(v as i64)
                } else {
                    None
                }
            }
        }
    }
    /// Converts this number to a u64 if it can be represented exactly.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        match self.0 {
            Repr::I64(v) => u64::try_from(v).ok(),
            Repr::U64(v) => Some(v),
            Repr::F64(v) => {
                if v.fract() == 0.0 && 0.0 <= v && v < u64::MAX as f64 {
                    Some(v as u64)
                } else {
                    None
                }
            }
        }
    }
    /// Converts this number to an i32 if it can be represented exactly.
    #[must_use]
    pub fn to_i32(&self) -> Option<i32> {
        self.to_i64().and_then(|x| x.try_into().ok())
    }
    /// Converts this number to an f64 if it can be represented exactly.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self.0 {
            Repr::I64(v) => {
                if can_represent_as_f64(v.unsigned_abs()) {
                    Some(v as f64)
                } else {
                    None
                }
            }
            Repr::U64(v) => {
                if can_represent_as_f64(v) {
                    Some(v as f64)
                } else {
                    None
                }
            }
            Repr::F64(v) => Some(v),
        }
    }
    /// Converts this number to an f64, potentially losing precision in the process.
    #[must_use]
    pub fn to_f64_lossy(&self) -> f64 {
        match self.0 {
            Repr::I64(v) => v as f64,
            Repr::U64(v) => v as f64,
            Repr::F64(v) => v,
        }
    }
    /// This allows distinguishing between `1.0` and `1`.
    /// Numeric operations will otherwise treat these two values as equivalent.
    #[must_use]
    pub fn has_decimal_point(&self) -> bool {
        matches!(self.0, Repr::F64(_))
    }

    fn cmp_impl(&self, other: &Self) -> Ordering {
        use Repr::*;
        match (self.0, other.0) {
            (I64(a), I64(b)) => a.cmp(&b),
            (U64(a), U64(b)) => a.cmp(&b),
            (F64(a), F64(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),

            // all u64 values are in the range (i64::MAX, u64::MAX]
            (I64(_), U64(_)) => Ordering::Less,
            (U64(_), I64(_)) => Ordering::Greater,

            (I64(a), F64(b)) => cmp_i64_to_f64(a, b),
            (F64(a), I64(b)) => cmp_i64_to_f64(b, a).reverse(),
            (U64(a), F64(b)) => cmp_u64_to_f64(a, b),
            (F64(a), U64(b)) => cmp_u64_to_f64(b, a).reverse(),
        }
    }
}

impl Hash for Number {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        if let Some(v) = self.to_i64() {
            v.hash(state);
        } else if let Some(v) = self.to_u64() {
            v.hash(state);
        } else {
            let v = self.to_f64_lossy();
            let bits = if v == 0.0 {
                0 // this accounts for +0.0 and -0.0
            } else {
                v.to_bits()
            };
            bits.hash(state);
        }
    }
}

macro_rules! from_signed_impl {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Number {
            fn from(v: $ty) -> Self {
                Number(Repr::I64(v as i64))
            }
        })*
    };
}

macro_rules! from_unsigned_impl {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Number {
            fn from(v: $ty) -> Self {
                Self::new_u64(v as u64)
            }
        })*
    };
}

from_signed_impl!(i8, i16, i32, i64, isize);
from_unsigned_impl!(u8, u16, u32, u64, usize);

impl TryFrom<f64> for Number {
    type Error = ();
    fn try_from(v: f64) -> Result<Self, ()> {
        if v.is_finite() {
            Ok(Number(Repr::F64(v)))
        } else {
            Err(())
        }
    }
}
impl TryFrom<f32> for Number {
    type Error = ();
    fn try_from(v: f32) -> Result<Self, ()> {
        Self::try_from(f64::from(v))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Number {}
impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_impl(other)
    }
}
impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Debug for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::I64(v) => Debug::fmt(&v, f),
            Repr::U64(v) => Debug::fmt(&v, f),
            Repr::F64(v) => Debug::fmt(&v, f),
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::I64(v) => Display::fmt(&v, f),
            Repr::U64(v) => Display::fmt(&v, f),
            Repr::F64(v) => Display::fmt(&v, f),
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::zero()
    }
}
