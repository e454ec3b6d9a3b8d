use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use tiendaops_core::{DomainError, DomainResult, ProductId};

/// Name used when a product or supplier lookup fails or is missing.
pub const UNASSIGNED: &str = "unassigned";

/// Assignee label for tasks opened by the alert evaluator.
pub const RESTOCK_ASSIGNEE: &str = "almacen";

/// Creator label for tasks opened by the alert evaluator.
pub const RESTOCK_CREATOR: &str = "sistema-alertas";

/// Alert severity derived from current vs. minimum quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Urgent,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Urgent => "urgent",
            Severity::Low => "low",
        }
    }
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (current, minimum) quantity pair for one stock row.
///
/// The minimum is a non-negative threshold owned by the hosted database; a
/// negative value means the row is corrupt and must not be classified.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StockLevel {
    current: i64,
    minimum: i64,
}

impl StockLevel {
    pub fn new(current: i64, minimum: i64) -> DomainResult<Self> {
        if minimum < 0 {
            return Err(DomainError::validation(format!(
                "minimum quantity cannot be negative (got {minimum})"
            )));
        }
        if current < 0 {
            return Err(DomainError::validation(format!(
                "current quantity cannot be negative (got {current})"
            )));
        }
        Ok(Self { current, minimum })
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn minimum(&self) -> i64 {
        self.minimum
    }

    /// Classify this level, or `None` when stock sits above the threshold.
    ///
    /// Bands: `critical` at zero, `urgent` strictly below half the minimum,
    /// `low` for the rest of the at-or-under-minimum range. The half-minimum
    /// comparison is done as `2 * current < minimum` so odd minimums don't
    /// lose the boundary to integer division.
    pub fn classify(&self) -> Option<Severity> {
        if self.current > self.minimum {
            return None;
        }
        if self.current == 0 {
            return Some(Severity::Critical);
        }
        if 2 * self.current < self.minimum {
            Some(Severity::Urgent)
        } else {
            Some(Severity::Low)
        }
    }

    /// Whether this level counts as low stock (at or under the minimum).
    pub fn is_low(&self) -> bool {
        self.current <= self.minimum
    }

    /// Whether this level is a stock-out.
    pub fn is_out(&self) -> bool {
        self.current == 0
    }
}

/// One evaluated alert, ready to surface to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockAlert {
    pub product_id: ProductId,
    pub product_name: String,
    pub supplier_name: String,
    pub location: Option<String>,
    pub current_quantity: i64,
    pub min_quantity: i64,
    pub severity: Severity,
}

/// Batch output of one evaluator run: the alerts plus how many distinct
/// products they touch (one product can alert from several locations).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertSummary {
    pub alerts: Vec<StockAlert>,
    pub affected_products: usize,
}

impl AlertSummary {
    pub fn from_alerts(alerts: Vec<StockAlert>) -> Self {
        let affected_products = alerts
            .iter()
            .map(|a| a.product_id)
            .collect::<HashSet<_>>()
            .len();
        Self {
            alerts,
            affected_products,
        }
    }
}

/// Payload for the follow-up task opened on a `critical` alert.
///
/// The evaluator does not deduplicate against earlier runs: a product that
/// stays at zero gets a fresh task every invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestockTask {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
}

impl RestockTask {
    /// Compose the restock task for a critical alert, due 24 hours from `now`.
    pub fn for_alert(alert: &StockAlert, now: DateTime<Utc>) -> Self {
        let location = alert.location.as_deref().unwrap_or("almacén");
        Self {
            title: format!("Reponer stock: {}", alert.product_name),
            description: format!(
                "Stock agotado en {location} (mínimo {}). Proveedor: {}.",
                alert.min_quantity, alert.supplier_name
            ),
            due_date: now + Duration::hours(24),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(current: i64, minimum: i64) -> StockLevel {
        StockLevel::new(current, minimum).unwrap()
    }

    fn alert(product_id: ProductId, current: i64, minimum: i64, severity: Severity) -> StockAlert {
        StockAlert {
            product_id,
            product_name: "Café molido 500g".to_string(),
            supplier_name: "Distribuidora Norte".to_string(),
            location: Some("A-3".to_string()),
            current_quantity: current,
            min_quantity: minimum,
            severity,
        }
    }

    #[test]
    fn zero_stock_is_critical() {
        assert_eq!(level(0, 10).classify(), Some(Severity::Critical));
        // A zero threshold still flags a stock-out.
        assert_eq!(level(0, 0).classify(), Some(Severity::Critical));
    }

    #[test]
    fn below_half_minimum_is_urgent() {
        assert_eq!(level(4, 10).classify(), Some(Severity::Urgent));
        assert_eq!(level(1, 3).classify(), Some(Severity::Urgent));
    }

    #[test]
    fn half_minimum_up_to_minimum_is_low() {
        assert_eq!(level(5, 10).classify(), Some(Severity::Low));
        assert_eq!(level(10, 10).classify(), Some(Severity::Low));
        // Odd minimum: 2*2 >= 3, so this is low, not urgent.
        assert_eq!(level(2, 3).classify(), Some(Severity::Low));
    }

    #[test]
    fn above_minimum_is_not_flagged() {
        assert_eq!(level(11, 10).classify(), None);
        assert_eq!(level(1, 0).classify(), None);
    }

    #[test]
    fn negative_quantities_are_rejected() {
        assert!(StockLevel::new(5, -1).is_err());
        assert!(StockLevel::new(-1, 5).is_err());
    }

    #[test]
    fn summary_counts_distinct_products() {
        let shared = ProductId::new();
        let alerts = vec![
            alert(shared, 0, 10, Severity::Critical),
            alert(shared, 3, 10, Severity::Urgent),
            alert(ProductId::new(), 5, 10, Severity::Low),
        ];
        let summary = AlertSummary::from_alerts(alerts);
        assert_eq!(summary.alerts.len(), 3);
        assert_eq!(summary.affected_products, 2);
    }

    #[test]
    fn restock_task_is_due_in_24_hours() {
        let now = Utc::now();
        let a = alert(ProductId::new(), 0, 10, Severity::Critical);
        let task = RestockTask::for_alert(&a, now);
        assert_eq!(task.due_date, now + Duration::hours(24));
        assert!(task.title.contains("Café molido 500g"));
        assert!(task.description.contains("Distribuidora Norte"));
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(Severity::Urgent.as_str(), "urgent");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn at_or_under_minimum_always_classifies(current in 0i64..1000, minimum in 0i64..1000) {
                let lvl = StockLevel::new(current, minimum).unwrap();
                prop_assert_eq!(lvl.classify().is_some(), current <= minimum);
            }

            #[test]
            fn critical_exactly_when_zero(current in 0i64..1000, minimum in 0i64..1000) {
                let lvl = StockLevel::new(current, minimum).unwrap();
                if let Some(sev) = lvl.classify() {
                    prop_assert_eq!(sev == Severity::Critical, current == 0);
                }
            }

            #[test]
            fn urgent_implies_below_half_minimum(current in 1i64..1000, minimum in 0i64..1000) {
                let lvl = StockLevel::new(current, minimum).unwrap();
                if lvl.classify() == Some(Severity::Urgent) {
                    prop_assert!(2 * current < minimum);
                }
            }
        }
    }
}
