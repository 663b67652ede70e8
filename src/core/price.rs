//! Exact fractional prices
//!
//! A price is a numerator/denominator pair of positive i32 components.
//! No floating point anywhere: comparison cross-multiplies in i64, which
//! cannot overflow for any pair of i32 values, and equal ratios compare
//! equal without normalizing the fraction.

use std::cmp::Ordering;
use std::fmt;

/// Price of one unit of the selling asset, in units of the buying asset
#[derive(Debug, Clone, Copy)]
pub struct Price {
    numerator: i32,
    denominator: i32,
}

impl Price {
    /// Create a price. Both components must be strictly positive.
    #[inline]
    pub const fn new(numerator: i32, denominator: i32) -> Option<Self> {
        if numerator <= 0 || denominator <= 0 {
            return None;
        }
        Some(Self {
            numerator,
            denominator,
        })
    }

    #[inline(always)]
    pub const fn numerator(&self) -> i32 {
        self.numerator
    }

    #[inline(always)]
    pub const fn denominator(&self) -> i32 {
        self.denominator
    }
}

impl PartialEq for Price {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Price {}

impl PartialOrd for Price {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // a/b against c/d compares as a*d against c*b
        let lhs = self.numerator as i64 * other.denominator as i64;
        let rhs = other.numerator as i64 * self.denominator as i64;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
