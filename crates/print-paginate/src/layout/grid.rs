//! Grid enumeration and sizing for tile-based composition
//!
//! The N-Up composer consumes [`tile_order`] to decide which cell receives
//! the next source page; the poster composer uses [`poster_grid`] to find
//! the grid whose shape best matches the page's aspect ratio.

use crate::constants::{MAX_TILE_SPACING, TILE_PADDING};
use crate::geometry::Size;
use crate::types::NupOrder;

/// Position within a tile grid (row, column), row 0 at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Deterministic enumeration of every grid cell in the given reading order.
///
/// Always yields exactly `rows * cols` positions.
pub fn tile_order(order: NupOrder, rows: usize, cols: usize) -> Vec<GridPosition> {
    let mut positions = Vec::with_capacity(rows * cols);
    match order {
        NupOrder::LeftToRightTopToBottom => {
            for row in 0..rows {
                for col in 0..cols {
                    positions.push(GridPosition::new(row, col));
                }
            }
        }
        NupOrder::TopToBottomLeftToRight => {
            for col in 0..cols {
                for row in 0..rows {
                    positions.push(GridPosition::new(row, col));
                }
            }
        }
        NupOrder::RightToLeftTopToBottom => {
            for row in 0..rows {
                for col in (0..cols).rev() {
                    positions.push(GridPosition::new(row, col));
                }
            }
        }
        NupOrder::TopToBottomRightToLeft => {
            for col in (0..cols).rev() {
                for row in 0..rows {
                    positions.push(GridPosition::new(row, col));
                }
            }
        }
    }
    positions
}

/// Pick the `(rows, cols)` grid for `tile_count` tiles whose column/row
/// ratio is closest to the target aspect. First minimum wins on ties, so
/// the search is deterministic.
pub fn poster_grid(tile_count: usize, aspect: f32) -> (usize, usize) {
    let count = tile_count.max(1);
    let target = if aspect > 0.0 && aspect.is_finite() {
        aspect
    } else {
        1.0
    };

    let mut best = (1, count);
    let mut best_score = f32::INFINITY;

    for rows in 1..=count {
        let cols = count.div_ceil(rows);
        if rows * cols < count {
            continue;
        }
        let score = (cols as f32 / rows as f32 - target).abs();
        if score < best_score {
            best_score = score;
            best = (rows, cols);
        }
    }

    best
}

/// Gap between tiles on one axis: a fixed cap, shrunk proportionally so
/// spacing stays small relative to the sheet on fine grids.
pub fn tile_spacing(sheet_dimension: f32, count: usize) -> f32 {
    MAX_TILE_SPACING.min(sheet_dimension / (count.max(1) as f32 * 6.0))
}

/// Uniform scale fitting a source page into a tile, with a small inner
/// padding. Falls back to 1.0 when either geometry is degenerate.
pub fn tile_scale(source: Size, tile: Size) -> f32 {
    let inner = Size::new(tile.width - TILE_PADDING, tile.height - TILE_PADDING);
    if !source.is_positive() || !inner.is_positive() {
        return 1.0;
    }
    (inner.width / source.width).min(inner.height / source.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(order: NupOrder, rows: usize, cols: usize) -> Vec<(usize, usize)> {
        tile_order(order, rows, cols)
            .into_iter()
            .map(|p| (p.row, p.col))
            .collect()
    }

    #[test]
    fn test_row_major_order() {
        assert_eq!(
            flat(NupOrder::LeftToRightTopToBottom, 2, 2),
            vec![(0, 0), (0, 1), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn test_column_major_order() {
        assert_eq!(
            flat(NupOrder::TopToBottomLeftToRight, 2, 2),
            vec![(0, 0), (1, 0), (0, 1), (1, 1)]
        );
    }

    #[test]
    fn test_right_to_left_orders() {
        assert_eq!(
            flat(NupOrder::RightToLeftTopToBottom, 2, 2),
            vec![(0, 1), (0, 0), (1, 1), (1, 0)]
        );
        assert_eq!(
            flat(NupOrder::TopToBottomRightToLeft, 2, 2),
            vec![(0, 1), (1, 1), (0, 0), (1, 0)]
        );
    }

    #[test]
    fn test_order_length_always_full_grid() {
        for order in [
            NupOrder::LeftToRightTopToBottom,
            NupOrder::TopToBottomLeftToRight,
            NupOrder::RightToLeftTopToBottom,
            NupOrder::TopToBottomRightToLeft,
        ] {
            assert_eq!(tile_order(order, 3, 4).len(), 12);
        }
    }

    #[test]
    fn test_poster_grid_covers_tile_count() {
        for count in 1..=24 {
            let (rows, cols) = poster_grid(count, 0.7727);
            assert!(rows * cols >= count, "grid {}x{} < {}", rows, cols, count);
        }
    }

    #[test]
    fn test_poster_grid_square_aspect() {
        assert_eq!(poster_grid(4, 1.0), (2, 2));
        assert_eq!(poster_grid(9, 1.0), (3, 3));
    }

    #[test]
    fn test_poster_grid_wide_aspect_prefers_columns() {
        let (rows, cols) = poster_grid(4, 4.0);
        assert_eq!((rows, cols), (1, 4));
    }

    #[test]
    fn test_poster_grid_degenerate_aspect() {
        // Non-finite or non-positive aspect falls back to 1.0
        assert_eq!(poster_grid(4, f32::NAN), (2, 2));
        assert_eq!(poster_grid(4, 0.0), (2, 2));
    }

    #[test]
    fn test_tile_spacing_capped() {
        assert_eq!(tile_spacing(1200.0, 2), 10.0);
        // Fine grid: proportional spacing wins
        let spacing = tile_spacing(120.0, 4);
        assert!((spacing - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_tile_scale_fit() {
        let scale = tile_scale(Size::new(100.0, 200.0), Size::new(52.0, 102.0));
        assert!((scale - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_tile_scale_degenerate_falls_back() {
        assert_eq!(tile_scale(Size::ZERO, Size::new(100.0, 100.0)), 1.0);
        assert_eq!(tile_scale(Size::new(100.0, 100.0), Size::new(1.0, 1.0)), 1.0);
    }
}
