use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use txgrid::models::TransactionFilter;
use txgrid::samples::sample_transactions;
use txgrid::services::{diagonal_order, filter_transactions};
use txgrid::utils::TransactionTable;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("txgrid=debug".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("Starting txgrid demo...");

    let grid = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
    match diagonal_order(&grid) {
        Ok(order) => info!("Anti-diagonal order of the 3x3 demo grid: {:?}", order),
        Err(e) => {
            error!("Failed to traverse demo grid: {}", e);
            return;
        }
    }

    let transactions = sample_transactions();
    let filter = TransactionFilter {
        user_id: Some(1),
        min_time: Some(10),
        max_time: Some(35),
        ..TransactionFilter::default()
    };
    match serde_json::to_string(&filter) {
        Ok(json) => info!("Applying filter: {}", json),
        Err(e) => error!("Failed to serialize filter: {}", e),
    }

    let matched = filter_transactions(&transactions, &filter);
    info!(
        "Matched {} of {} sample transactions",
        matched.len(),
        transactions.len()
    );
    info!("\n{}", TransactionTable::new(&matched).render());
}
