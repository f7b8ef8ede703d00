use tracing::debug;

use crate::models::{Transaction, TransactionFilter};

/// Apply filter criteria to a slice of transactions and return the matches
/// sorted by transaction id in ascending order.
///
/// Unset criteria impose no constraint, so the default filter returns every
/// transaction. The input is never mutated; matches are cloned into a fresh
/// vector. Contradictory bounds (e.g. min_time above max_time) simply match
/// nothing - there is no error path.
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
) -> Vec<Transaction> {
    let mut filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| filter.matches(tx))
        .cloned()
        .collect();

    // sort_by_key is stable, so transactions sharing an id keep input order
    filtered.sort_by_key(|tx| tx.id);

    debug!(
        "Matched {} of {} transactions",
        filtered.len(),
        transactions.len()
    );

    filtered
}
