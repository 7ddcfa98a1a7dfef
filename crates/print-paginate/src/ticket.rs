//! Ticket metadata export
//!
//! Layout decisions are published as a flat string-keyed map for downstream
//! device negotiation. This map is the sole layout contract between the
//! engine and platform adapters; adapters must not infer layout from sheet
//! geometry.

use std::collections::BTreeMap;

use crate::layout::poster_grid;
use crate::options::LayoutOptions;
use crate::setup::oriented_page_size;

pub const KEY_LAYOUT_KIND: &str = "layout.kind";
pub const KEY_NUP_ROWS: &str = "layout.nup.rows";
pub const KEY_NUP_COLUMNS: &str = "layout.nup.columns";
pub const KEY_NUP_ORDER: &str = "layout.nup.order";
pub const KEY_BOOKLET_BIND_LONG_EDGE: &str = "layout.booklet.bindLongEdge";
pub const KEY_POSTER_TILE_COUNT: &str = "layout.poster.tileCount";
pub const KEY_POSTER_ROWS: &str = "layout.poster.rows";
pub const KEY_POSTER_COLUMNS: &str = "layout.poster.columns";

/// Export the layout decisions of a pagination pass as ticket entries.
///
/// The poster grid is resolved against the oriented sheet aspect so
/// adapters see the same grid the composer will use.
pub fn ticket_entries(options: &LayoutOptions) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();
    entries.insert(
        KEY_LAYOUT_KIND.to_string(),
        options.layout_kind.as_str().to_string(),
    );
    entries.insert(KEY_NUP_ROWS.to_string(), options.nup_rows.to_string());
    entries.insert(
        KEY_NUP_COLUMNS.to_string(),
        options.nup_columns.to_string(),
    );
    entries.insert(
        KEY_NUP_ORDER.to_string(),
        options.nup_order.as_str().to_string(),
    );
    entries.insert(
        KEY_BOOKLET_BIND_LONG_EDGE.to_string(),
        if options.booklet_bind_long_edge { "1" } else { "0" }.to_string(),
    );
    entries.insert(
        KEY_POSTER_TILE_COUNT.to_string(),
        options.poster_tile_count.to_string(),
    );

    let sheet = oriented_page_size(options);
    let (rows, cols) = poster_grid(options.poster_tile_count, sheet.aspect_ratio());
    entries.insert(KEY_POSTER_ROWS.to_string(), rows.to_string());
    entries.insert(KEY_POSTER_COLUMNS.to_string(), cols.to_string());

    entries
}
