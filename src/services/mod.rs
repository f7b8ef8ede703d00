pub mod matrix_service;
pub mod transaction_service;

pub use matrix_service::{diagonal_order, GridError};
pub use transaction_service::filter_transactions;
