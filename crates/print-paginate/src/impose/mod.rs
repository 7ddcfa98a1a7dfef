//! Layout composition - arranging logical pages onto physical sheets
//!
//! Three strategies share the tile geometry in [`crate::layout`]:
//! N-Up packs pages into a grid, booklet reorders into printer spreads and
//! delegates to a 1x2 N-Up, poster splits one page across a tile grid.
//! All strategies are total over well-formed input; degenerate geometry
//! falls back to passing pages through unchanged.

mod booklet;
mod nup;
mod poster;

pub use booklet::booklet_order;

use crate::content::{LogicalPage, PhysicalSheet};
use crate::options::LayoutOptions;
use crate::types::LayoutKind;

pub(crate) type PageIter<'a> = Box<dyn Iterator<Item = LogicalPage> + 'a>;
pub(crate) type SheetIter<'a> = Box<dyn Iterator<Item = PhysicalSheet> + 'a>;

/// Compose expanded logical pages into physical sheets per the layout kind.
pub(crate) fn apply_layout<'a>(
    pages: PageIter<'a>,
    options: &LayoutOptions,
    dpi: f32,
) -> SheetIter<'a> {
    match options.layout_kind {
        LayoutKind::Standard => pages,
        LayoutKind::NUp => nup::apply_nup(pages, options, dpi),
        LayoutKind::Booklet => booklet::apply_booklet(pages, options, dpi),
        LayoutKind::Poster => poster::apply_poster(pages, options, dpi),
    }
}
