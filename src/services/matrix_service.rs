use thiserror::Error;
use tracing::debug;

/// Grid validation errors
#[derive(Debug, Error)]
pub enum GridError {
    #[error("Empty grid: {0}")]
    EmptyGrid(String),
    #[error("Ragged grid: {0}")]
    RaggedGrid(String),
}

/// Traverse a rectangular grid in anti-diagonal order.
///
/// Cells sharing the same value of `col - row` form one anti-diagonal.
/// Diagonals are emitted from the bottom-left (`1 - rows`, at the last row's
/// first cell) to the top-right (`cols - 1`, at the first row's last cell);
/// within a diagonal, cells appear in increasing row order.
///
/// Returns an error for grids with zero rows, zero columns, or rows of
/// differing length.
///
/// Example:
///
/// Input:  `[[1,2,3], [4,5,6], [7,8,9]]`
/// Output: `[7,4,8,1,5,9,2,6,3]`
pub fn diagonal_order(grid: &[Vec<i64>]) -> Result<Vec<i64>, GridError> {
    let rows = grid.len();
    if rows == 0 {
        return Err(GridError::EmptyGrid(
            "grid must have at least one row".to_string(),
        ));
    }

    let cols = grid[0].len();
    if cols == 0 {
        return Err(GridError::EmptyGrid(
            "grid must have at least one column".to_string(),
        ));
    }

    for (r, row) in grid.iter().enumerate() {
        if row.len() != cols {
            return Err(GridError::RaggedGrid(format!(
                "row {} has {} columns, expected {}",
                r,
                row.len(),
                cols
            )));
        }
    }

    // One bucket per anti-diagonal. The index col - row spans
    // [1 - rows, cols - 1]; shifting by rows - 1 maps it onto
    // [0, rows + cols - 2], so a pre-sized Vec replaces a map.
    let mut diagonals: Vec<Vec<i64>> = vec![Vec::new(); rows + cols - 1];
    for (r, row) in grid.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            // Row-major scan order keeps each bucket sorted by row already
            diagonals[c + (rows - 1) - r].push(cell);
        }
    }

    debug!(
        "Traversed {}x{} grid across {} anti-diagonals",
        rows,
        cols,
        diagonals.len()
    );

    let mut result = Vec::with_capacity(rows * cols);
    for diagonal in diagonals {
        result.extend(diagonal);
    }

    Ok(result)
}
