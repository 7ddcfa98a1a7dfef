//! Pagination and layout-composition engine for print preparation
//!
//! Turns an ordered sequence of logical content pages into an ordered
//! sequence of physical sheets: page-setup normalization, overflow slicing,
//! selection trimming, and three imposition strategies (N-Up, booklet,
//! poster). The engine reads host content through the [`Renderable`] trait
//! and emits sheet descriptors; it never renders pixels itself.

pub mod constants;
mod content;
mod geometry;
pub mod impose;
pub mod layout;
mod metrics;
mod options;
mod overflow;
mod paginate;
mod selection;
mod setup;
mod stats;
pub mod ticket;
mod types;

pub use content::{
    BlankContent, CompositeContent, ContentRef, LogicalPage, PhysicalSheet, Renderable, TileSlot,
};
pub use geometry::{Point, Rect, Size, Thickness};
pub use metrics::PageMetrics;
pub use options::{LayoutOptions, PageRange, PageSettings};
pub use overflow::{ExpandedSlices, expand_page};
pub use paginate::{CancelToken, PageSequence, Paginator};
pub use selection::{selection_of, trim_to_selection};
pub use setup::{apply_page_setup, oriented_page_size};
pub use stats::{PaginationStatistics, calculate_statistics};
pub use ticket::ticket_entries;
pub use types::*;
