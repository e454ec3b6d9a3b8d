//! `tiendaops-pricing` — simulated price-feed rules.
//!
//! Stand-in for a real external price source: the caller draws a variation
//! factor, this crate decides deterministically what (if anything) to write.
//! Keeping the draw out of this crate is what makes the threshold and
//! rounding behavior testable.

pub mod simulate;

pub use simulate::{simulate, PriceUpdate, UPDATE_THRESHOLD, VARIATION_MAX, VARIATION_MIN};
