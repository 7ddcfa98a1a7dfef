//! Tile geometry shared by the imposition composers

mod grid;

pub use grid::{GridPosition, poster_grid, tile_order, tile_scale, tile_spacing};
