//! Line item expansion

pub mod expander;

pub use expander::{expand, PRICE_DELTA_MAX, PRICE_DELTA_MIN};
