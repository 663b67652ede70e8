//! Order book snapshot loading
//!
//! The loader consumes plain offer rows from whatever produced the
//! snapshot (a database dump, a capture file, a fixture) and builds the
//! graph. Validation happens here: the first bad row aborts the load.

use crate::core::{Asset, Offer, Price};
use crate::graph::exchange::Exchange;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One offer row at the loader boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferRow {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price_numerator: i32,
    pub price_denominator: i32,
}

/// Errors raised while building the graph from rows
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("offer row {row}: invalid price {numerator}/{denominator}")]
    InvalidPrice {
        row: usize,
        numerator: i32,
        denominator: i32,
    },

    #[error("offer row {row}: negative amount {amount}")]
    NegativeAmount { row: usize, amount: i64 },
}

/// Counters for one completed load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadStats {
    pub rows: usize,
    pub nodes: usize,
    pub markets: usize,
    pub offers: usize,
}

impl Exchange {
    /// Load a snapshot of offer rows into the graph.
    ///
    /// Rows may arrive in any order; every market ends up sorted by
    /// price regardless.
    ///
    /// # Errors
    /// Fails on the first row with a non-positive price component or a
    /// negative amount, naming the row index.
    pub fn load_offers<I>(&mut self, rows: I) -> Result<LoadStats, GraphError>
    where
        I: IntoIterator<Item = OfferRow>,
    {
        let mut count = 0usize;
        for (row, r) in rows.into_iter().enumerate() {
            let price =
                Price::new(r.price_numerator, r.price_denominator).ok_or(GraphError::InvalidPrice {
                    row,
                    numerator: r.price_numerator,
                    denominator: r.price_denominator,
                })?;
            let offer = Offer::new(r.amount, price).ok_or(GraphError::NegativeAmount {
                row,
                amount: r.amount,
            })?;
            self.add_offer(&r.selling, &r.buying, offer);
            count += 1;
        }

        let stats = self.stats();
        tracing::info!(
            "Loaded {} offer rows: {} assets, {} markets, {} offers",
            count,
            stats.nodes,
            stats.markets,
            stats.offers
        );
        Ok(LoadStats {
            rows: count,
            nodes: stats.nodes,
            markets: stats.markets,
            offers: stats.offers,
        })
    }
}
