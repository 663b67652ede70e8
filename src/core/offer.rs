//! Resting offers
//!
//! An offer sells some amount of one asset at an exact fractional price.
//! Amounts are validated non-negative at construction; which assets the
//! offer trades between is recorded by the graph, not the offer itself.

use crate::core::price::Price;

/// One resting offer: an amount of the selling asset and its price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offer {
    amount: i64,
    price: Price,
}

impl Offer {
    /// Create an offer. The amount must be non-negative.
    #[inline]
    pub const fn new(amount: i64, price: Price) -> Option<Self> {
        if amount < 0 {
            return None;
        }
        Some(Self { amount, price })
    }

    /// Remaining amount of the selling asset
    #[inline(always)]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    #[inline(always)]
    pub const fn price(&self) -> Price {
        self.price
    }
}
