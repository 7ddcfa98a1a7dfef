//! Pre-flight pagination statistics
//!
//! Counts derived from the source page count and layout options alone,
//! without running a pass. Overflow expansion depends on content geometry,
//! so these figures assume each logical page fits one sheet; hosts use them
//! for dialog summaries, not for allocation.

use crate::layout::poster_grid;
use crate::options::LayoutOptions;
use crate::setup::oriented_page_size;
use crate::types::{LayoutKind, PaginateError, Result};

/// Summary of what a pagination pass will produce
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Expected number of output sheets
    pub output_sheets: usize,
    /// Blank pages added for booklet padding
    pub blank_pages_added: usize,
    /// Tiles packed per sheet (N-Up and booklet)
    pub tiles_per_sheet: usize,
    /// Resolved poster grid, when the poster layout is selected
    pub poster_grid: Option<(usize, usize)>,
}

/// Calculate statistics for a pagination pass over `source_pages` pages.
pub fn calculate_statistics(
    source_pages: usize,
    options: &LayoutOptions,
) -> Result<PaginationStatistics> {
    options.validate()?;
    if source_pages == 0 {
        return Err(PaginateError::NoPages);
    }

    match options.layout_kind {
        LayoutKind::Standard => Ok(PaginationStatistics {
            source_pages,
            output_sheets: source_pages,
            blank_pages_added: 0,
            tiles_per_sheet: 1,
            poster_grid: None,
        }),
        LayoutKind::NUp => {
            let tiles = options.nup_rows * options.nup_columns;
            let output_sheets = if tiles <= 1 {
                source_pages
            } else {
                source_pages.div_ceil(tiles)
            };
            Ok(PaginationStatistics {
                source_pages,
                output_sheets,
                blank_pages_added: 0,
                tiles_per_sheet: tiles.max(1),
                poster_grid: None,
            })
        }
        LayoutKind::Booklet => {
            let blank_pages_added = (4 - source_pages % 4) % 4;
            let padded = source_pages + blank_pages_added;
            Ok(PaginationStatistics {
                source_pages,
                output_sheets: padded / 2,
                blank_pages_added,
                tiles_per_sheet: 2,
                poster_grid: None,
            })
        }
        LayoutKind::Poster => {
            let sheet = oriented_page_size(options);
            let (rows, cols) = poster_grid(options.poster_tile_count, sheet.aspect_ratio());
            let tiles_per_page = options.poster_tile_count.min(rows * cols);
            Ok(PaginationStatistics {
                source_pages,
                output_sheets: source_pages * tiles_per_page,
                blank_pages_added: 0,
                tiles_per_sheet: 1,
                poster_grid: Some((rows, cols)),
            })
        }
    }
}
