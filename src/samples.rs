use crate::models::Transaction;

/// Canned transaction set for demos and test seeding.
///
/// Records are deliberately listed out of id order so that sorted output is
/// observable. The set covers negative amounts, a four-digit currency code,
/// and exactly two records for user 1 inside the timestamp window [10, 35]
/// (ids 2 and 20).
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction { id: 3, user_id: 2, currency: 1, amount: 150, timestamp: 3 },
        Transaction { id: 1, user_id: 1, currency: 1, amount: 100, timestamp: 1 },
        Transaction { id: 2, user_id: 1, currency: 2, amount: 200, timestamp: 12 },
        Transaction { id: 5, user_id: 2, currency: 2, amount: 250, timestamp: 15 },
        Transaction { id: 4, user_id: 1, currency: 1, amount: 300, timestamp: 4 },
        Transaction { id: 6, user_id: 3, currency: 1, amount: -50, timestamp: 18 },
        Transaction { id: 7, user_id: 2, currency: 3, amount: 75, timestamp: 22 },
        Transaction { id: 9, user_id: 3, currency: 2, amount: 125, timestamp: 8 },
        Transaction { id: 8, user_id: 1, currency: 2, amount: 500, timestamp: 40 },
        Transaction { id: 10, user_id: 4, currency: 1, amount: 900, timestamp: 25 },
        Transaction { id: 20, user_id: 1, currency: 1, amount: 60, timestamp: 30 },
        Transaction { id: 12, user_id: 4, currency: 2120, amount: 40, timestamp: 33 },
        Transaction { id: 13, user_id: 2, currency: 1, amount: -200, timestamp: 36 },
        Transaction { id: 14, user_id: 5, currency: 3, amount: 820, timestamp: 44 },
        Transaction { id: 15, user_id: 1, currency: 2, amount: 10, timestamp: 50 },
    ]
}
