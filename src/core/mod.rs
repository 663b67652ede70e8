//! Core value types
//!
//! This module contains the fundamental types used throughout the system:
//! - Asset: native asset or issued credit
//! - Price: exact fraction, no floating point
//! - Offer: resting amount plus price

pub mod asset;
pub mod offer;
pub mod price;

pub use asset::Asset;
pub use offer::Offer;
pub use price::Price;
