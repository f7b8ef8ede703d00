use crate::models::Transaction;

/// A simple text-based table generator for transaction listings
pub struct TransactionTable {
    rows: Vec<[String; 5]>,
    col_widths: [usize; 5],
}

impl TransactionTable {
    const HEADERS: [&'static str; 5] = ["ID", "User", "Currency", "Amount", "Timestamp"];

    /// Build a table from a transaction listing
    pub fn new(transactions: &[Transaction]) -> Self {
        let mut col_widths = [0usize; 5];
        for (i, header) in Self::HEADERS.iter().enumerate() {
            col_widths[i] = header.len();
        }

        let rows: Vec<[String; 5]> = transactions
            .iter()
            .map(|tx| {
                [
                    tx.id.to_string(),
                    tx.user_id.to_string(),
                    tx.currency.to_string(),
                    tx.amount.to_string(),
                    tx.timestamp.to_string(),
                ]
            })
            .collect();

        for row in &rows {
            for (i, col) in row.iter().enumerate() {
                col_widths[i] = col_widths[i].max(col.len());
            }
        }

        TransactionTable { rows, col_widths }
    }

    /// Render the table as a formatted string
    pub fn render(&self) -> String {
        let mut output = String::new();

        let header: Vec<String> = Self::HEADERS
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:<width$}", h, width = self.col_widths[i]))
            .collect();
        output.push_str(header.join(" | ").trim_end());
        output.push('\n');
        output.push_str(&self.render_separator());

        for row in &self.rows {
            output.push('\n');
            output.push_str(&self.render_row(row));
        }

        output
    }

    /// Render a single row; values are numeric, so right-align them
    fn render_row(&self, row: &[String; 5]) -> String {
        let cols: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{:>width$}", col, width = self.col_widths[i]))
            .collect();
        cols.join(" | ")
    }

    fn render_separator(&self) -> String {
        let segments: Vec<String> = self
            .col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect();
        segments.join("-+-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let transactions = vec![
            Transaction {
                id: 1,
                user_id: 1,
                currency: 1,
                amount: 100,
                timestamp: 1,
            },
            Transaction {
                id: 20,
                user_id: 1,
                currency: 1,
                amount: 60,
                timestamp: 30,
            },
        ];

        let rendered = TransactionTable::new(&transactions).render();
        assert!(rendered.contains("ID"));
        assert!(rendered.contains("Timestamp"));
        assert!(rendered.contains("100"));
        assert!(rendered.contains("20"));
    }

    #[test]
    fn test_columns_widen_to_fit_values() {
        let transactions = vec![Transaction {
            id: 1234567890,
            user_id: 1,
            currency: 1,
            amount: 0,
            timestamp: 0,
        }];

        let table = TransactionTable::new(&transactions);
        assert_eq!(table.col_widths[0], 10);
    }

    #[test]
    fn test_empty_listing_renders_header_only() {
        let rendered = TransactionTable::new(&[]).render();
        assert_eq!(rendered.lines().count(), 2);
    }
}
