//! Transaction models

use serde::{Deserialize, Serialize};

/// A single ledger transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub currency: i64,
    pub amount: i64,
    pub timestamp: i64,
}

/// Filtering criteria for transactions.
/// Every field is optional - `None` means no constraint on that field,
/// which keeps "unset" distinct from legitimate values such as 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionFilter {
    pub id: Option<i64>,
    pub min_time: Option<i64>,
    pub max_time: Option<i64>,
    pub user_id: Option<i64>,
    pub currency: Option<i64>,
    pub min_amount: Option<i64>,
    pub max_amount: Option<i64>,
}

impl TransactionFilter {
    /// Check whether a transaction satisfies every set criterion.
    ///
    /// Criteria are AND-combined: the first failing one rejects the
    /// transaction. Time and amount bounds are inclusive; id, user and
    /// currency are exact matches.
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(id) = self.id {
            if tx.id != id {
                return false;
            }
        }
        if let Some(min_time) = self.min_time {
            if tx.timestamp < min_time {
                return false;
            }
        }
        if let Some(max_time) = self.max_time {
            if tx.timestamp > max_time {
                return false;
            }
        }
        if let Some(user_id) = self.user_id {
            if tx.user_id != user_id {
                return false;
            }
        }
        if let Some(currency) = self.currency {
            if tx.currency != currency {
                return false;
            }
        }
        if let Some(min_amount) = self.min_amount {
            if tx.amount < min_amount {
                return false;
            }
        }
        if let Some(max_amount) = self.max_amount {
            if tx.amount > max_amount {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tx() -> Transaction {
        Transaction {
            id: 7,
            user_id: 3,
            currency: 2,
            amount: -40,
            timestamp: 22,
        }
    }

    #[test]
    fn test_unset_filter_matches_everything() {
        let filter = TransactionFilter::default();
        assert!(filter.matches(&sample_tx()));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let filter = TransactionFilter {
            min_time: Some(22),
            max_time: Some(22),
            min_amount: Some(-40),
            max_amount: Some(-40),
            ..TransactionFilter::default()
        };
        assert!(filter.matches(&sample_tx()));
    }

    #[test]
    fn test_any_failing_criterion_rejects() {
        let filter = TransactionFilter {
            user_id: Some(3),
            currency: Some(1),
            ..TransactionFilter::default()
        };
        assert!(!filter.matches(&sample_tx()));
    }

    #[test]
    fn test_zero_is_a_real_constraint() {
        let filter = TransactionFilter {
            user_id: Some(0),
            ..TransactionFilter::default()
        };
        assert!(!filter.matches(&sample_tx()));
    }

    #[test]
    fn test_filter_deserializes_missing_fields_as_unset() {
        let filter: TransactionFilter = serde_json::from_str("{}").unwrap();
        assert!(filter.id.is_none());
        assert!(filter.min_time.is_none());
        assert!(filter.max_time.is_none());
        assert!(filter.user_id.is_none());
        assert!(filter.currency.is_none());
        assert!(filter.min_amount.is_none());
        assert!(filter.max_amount.is_none());
    }

    #[test]
    fn test_filter_deserializes_partial_json() {
        let filter: TransactionFilter =
            serde_json::from_str(r#"{"user_id": 1, "min_time": 10}"#).unwrap();
        assert_eq!(filter.user_id, Some(1));
        assert_eq!(filter.min_time, Some(10));
        assert!(filter.max_time.is_none());
    }
}
