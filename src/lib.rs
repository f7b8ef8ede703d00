//! Anti-diagonal grid traversal and transaction filtering utilities.
//!
//! Two independent, stateless components: [`diagonal_order`] flattens a
//! rectangular grid by anti-diagonal groups, and [`filter_transactions`]
//! selects transaction records by optional criteria and sorts them by id.
//! Both are pure, synchronous functions that never mutate their inputs.

pub mod models;
pub mod samples;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use models::{Transaction, TransactionFilter};
pub use services::matrix_service::{diagonal_order, GridError};
pub use services::transaction_service::filter_transactions;
