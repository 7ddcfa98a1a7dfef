//! N-Up composition: several source pages per sheet in a grid

use std::sync::Arc;

use log::{debug, warn};

use super::{PageIter, SheetIter};
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::content::{CompositeContent, LogicalPage, TileSlot};
use crate::geometry::{Point, Rect, Size, Thickness};
use crate::layout::{GridPosition, tile_order, tile_scale, tile_spacing};
use crate::metrics::PageMetrics;
use crate::options::{LayoutOptions, PageSettings};
use crate::setup::oriented_page_size;

/// Precomputed sheet geometry shared by every emitted N-Up sheet
struct NupGeometry {
    sheet_size: Size,
    tile_size: Size,
    spacing: Size,
    positions: Vec<GridPosition>,
}

/// Compose pages into N-Up sheets.
///
/// Grids of one tile or less, and grids too fine for the sheet, pass the
/// input through unchanged.
pub(crate) fn apply_nup<'a>(pages: PageIter<'a>, options: &LayoutOptions, dpi: f32) -> SheetIter<'a> {
    let rows = options.nup_rows;
    let cols = options.nup_columns;
    if rows * cols <= 1 {
        return pages;
    }

    let sheet_size = oriented_page_size(options);
    let spacing = Size::new(
        tile_spacing(sheet_size.width, cols),
        tile_spacing(sheet_size.height, rows),
    );
    let tile_size = Size::new(
        (sheet_size.width - (cols - 1) as f32 * spacing.width) / cols as f32,
        (sheet_size.height - (rows - 1) as f32 * spacing.height) / rows as f32,
    );
    if tile_size.width <= 0.0 || tile_size.height <= 0.0 {
        warn!(
            "n-up grid {}x{} too fine for sheet {:.1}x{:.1}; passing pages through",
            rows, cols, sheet_size.width, sheet_size.height
        );
        return pages;
    }

    debug!(
        "n-up: {}x{} grid, tile {:.1}x{:.1}, spacing {:.1}/{:.1}",
        rows, cols, tile_size.width, tile_size.height, spacing.width, spacing.height
    );

    Box::new(NupSheets {
        pages,
        geometry: NupGeometry {
            sheet_size,
            tile_size,
            spacing,
            positions: tile_order(options.nup_order, rows, cols),
        },
        dpi,
        done: false,
    })
}

struct NupSheets<'a> {
    pages: PageIter<'a>,
    geometry: NupGeometry,
    dpi: f32,
    done: bool,
}

impl Iterator for NupSheets<'_> {
    type Item = LogicalPage;

    fn next(&mut self) -> Option<LogicalPage> {
        if self.done {
            return None;
        }

        let quota = self.geometry.positions.len();
        let mut group = Vec::with_capacity(quota);
        while group.len() < quota {
            match self.pages.next() {
                Some(page) => group.push(page),
                None => {
                    self.done = true;
                    break;
                }
            }
        }

        if group.is_empty() {
            return None;
        }
        Some(compose_sheet(&group, &self.geometry, self.dpi))
    }
}

/// Build one physical sheet from up to `tiles_per_sheet` source pages
fn compose_sheet(group: &[LogicalPage], geometry: &NupGeometry, dpi: f32) -> LogicalPage {
    let tile_size = geometry.tile_size;
    let tiles: Vec<TileSlot> = group
        .iter()
        .zip(geometry.positions.iter())
        .map(|(page, pos)| {
            let frame = Rect::new(
                pos.col as f32 * (tile_size.width + geometry.spacing.width),
                pos.row as f32 * (tile_size.height + geometry.spacing.height),
                tile_size.width,
                tile_size.height,
            );

            let source_metrics = page.metrics.clone().unwrap_or_else(|| {
                PageMetrics::compute(page.content.as_ref(), &page.settings, dpi)
            });
            let natural = if source_metrics.page_size.is_positive() {
                source_metrics.page_size
            } else {
                DEFAULT_PAGE_SIZE
            };
            let scale = tile_scale(natural, tile_size);

            // Center the scaled source inside its tile
            let offset = Point::new(
                ((tile_size.width - natural.width * scale) / 2.0).max(0.0),
                ((tile_size.height - natural.height * scale) / 2.0).max(0.0),
            );

            TileSlot {
                source: page.content.clone(),
                source_metrics,
                frame,
                clip: frame,
                scale_x: scale,
                scale_y: scale,
                offset,
            }
        })
        .collect();

    let break_after = group.iter().any(|p| p.is_page_break_after);
    let composite = Arc::new(CompositeContent::new(geometry.sheet_size, tiles));
    let settings = PageSettings {
        target_size: Some(geometry.sheet_size),
        margins: Some(Thickness::ZERO),
        scale: 1.0,
        selection_bounds: None,
    };
    let metrics = PageMetrics::compute(composite.as_ref(), &settings, dpi);

    LogicalPage {
        content: composite,
        settings,
        is_page_break_after: break_after,
        metrics: Some(metrics),
    }
}
