//! Poster composition: one source page enlarged across a grid of sheets
//!
//! Each tile scales the entire source content by the grid dimensions and
//! translates it so only the tile's own cell fraction is visible, producing
//! a seamless multi-sheet enlargement once assembled.

use std::sync::Arc;

use log::debug;

use super::{PageIter, SheetIter};
use crate::content::{CompositeContent, LogicalPage, TileSlot};
use crate::geometry::Point;
use crate::layout::poster_grid;
use crate::metrics::PageMetrics;
use crate::options::LayoutOptions;

pub(crate) fn apply_poster<'a>(
    pages: PageIter<'a>,
    options: &LayoutOptions,
    dpi: f32,
) -> SheetIter<'a> {
    Box::new(PosterTiles {
        pages: pages.peekable(),
        tile_count: options.poster_tile_count,
        dpi,
        current: None,
    })
}

/// Tiling state for the page currently being split
struct CurrentPage {
    page: LogicalPage,
    rows: usize,
    cols: usize,
    effective_tiles: usize,
    next_tile: usize,
}

struct PosterTiles<'a> {
    pages: std::iter::Peekable<PageIter<'a>>,
    tile_count: usize,
    dpi: f32,
    current: Option<CurrentPage>,
}

impl Iterator for PosterTiles<'_> {
    type Item = LogicalPage;

    fn next(&mut self) -> Option<LogicalPage> {
        loop {
            if let Some(current) = &mut self.current {
                if current.next_tile < current.effective_tiles {
                    let tile_index = current.next_tile;
                    current.next_tile += 1;

                    let is_last_tile = current.next_tile == current.effective_tiles;
                    let is_last_page = self.pages.peek().is_none();
                    let sheet = compose_tile(
                        &current.page,
                        current.rows,
                        current.cols,
                        tile_index,
                        is_last_tile && is_last_page,
                        self.dpi,
                    );
                    if is_last_tile {
                        self.current = None;
                    }
                    return Some(sheet);
                }
                self.current = None;
            }

            let page = self.pages.next()?;
            let Some(metrics) = page.metrics.clone() else {
                return Some(page);
            };
            if !metrics.content_rect.is_positive() {
                // Degenerate geometry: emit the page unchanged
                return Some(page);
            }

            let (rows, cols) = poster_grid(self.tile_count, metrics.page_size.aspect_ratio());
            let effective_tiles = self.tile_count.min(rows * cols);
            debug!(
                "poster: {} tiles on a {}x{} grid ({} emitted)",
                self.tile_count, rows, cols, effective_tiles
            );
            self.current = Some(CurrentPage {
                page,
                rows,
                cols,
                effective_tiles,
                next_tile: 0,
            });
        }
    }
}

/// Build the sheet for one poster cell, row-major `tile_index`
fn compose_tile(
    page: &LogicalPage,
    rows: usize,
    cols: usize,
    tile_index: usize,
    break_after: bool,
    dpi: f32,
) -> LogicalPage {
    let metrics = page
        .metrics
        .clone()
        .unwrap_or_else(|| PageMetrics::compute(page.content.as_ref(), &page.settings, dpi));
    let cell = metrics.content_rect;
    let row = tile_index / cols;
    let col = tile_index % cols;

    let tile = TileSlot {
        source: page.content.clone(),
        source_metrics: metrics.clone(),
        frame: cell,
        clip: cell,
        scale_x: cols as f32,
        scale_y: rows as f32,
        offset: Point::new(-(col as f32) * cell.width, -(row as f32) * cell.height),
    };

    let composite = Arc::new(CompositeContent::new(metrics.page_size, vec![tile]));
    let sheet_metrics = PageMetrics::compute(composite.as_ref(), &page.settings, dpi);

    LogicalPage {
        content: composite,
        settings: page.settings.clone(),
        is_page_break_after: break_after && page.is_page_break_after,
        metrics: Some(sheet_metrics),
    }
}
