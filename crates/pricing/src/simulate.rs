use serde::Serialize;

/// Lower bound of the simulated variation factor (-2 %).
pub const VARIATION_MIN: f64 = -0.02;

/// Upper bound of the simulated variation factor (+5 %).
pub const VARIATION_MAX: f64 = 0.05;

/// Minimum absolute price movement that triggers a write.
pub const UPDATE_THRESHOLD: f64 = 0.01;

/// A price movement that cleared the update threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceUpdate {
    pub old_price: f64,
    pub new_price: f64,
    /// Percent change relative to the old price, rounded to two decimals.
    pub change_pct: f64,
}

/// Apply `factor` to `current_price` and decide whether anything changed.
///
/// The candidate price is rounded to the nearest multiple of 10 (retail
/// prices on the shelf are kept round). Returns `None` when the rounded
/// price moved by no more than [`UPDATE_THRESHOLD`] — the caller must then
/// write neither the product patch nor the history row. Non-positive prices
/// are never updated.
pub fn simulate(current_price: f64, factor: f64) -> Option<PriceUpdate> {
    if current_price <= 0.0 {
        return None;
    }

    let new_price = round_to_ten(current_price * (1.0 + factor));
    if (new_price - current_price).abs() <= UPDATE_THRESHOLD {
        return None;
    }

    let change_pct = (new_price - current_price) / current_price * 100.0;
    Some(PriceUpdate {
        old_price: current_price,
        new_price,
        change_pct: round_to_cents(change_pct),
    })
}

fn round_to_ten(value: f64) -> f64 {
    (value / 10.0).round() * 10.0
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
