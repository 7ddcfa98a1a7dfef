//! Content abstraction consumed by the pagination engine
//!
//! The engine never inspects concrete widget or document types. The host
//! supplies its visual tree behind the [`Renderable`] trait and receives
//! sheets whose content is either the original node or a synthetic
//! [`CompositeContent`] describing tile placements for a renderer to draw.

use std::sync::Arc;

use crate::geometry::{Point, Rect, Size};
use crate::metrics::PageMetrics;
use crate::options::PageSettings;

/// A measurable, renderable content node owned by the host application.
///
/// The engine only reads geometry from this trait; it never mutates the
/// node and never renders pixels itself.
pub trait Renderable: Send + Sync {
    /// Desired size of the content given the available area
    fn measure(&self, available: Size) -> Size;

    /// The content's visual bounds in its own coordinate space
    fn bounds(&self) -> Rect;

    /// Child nodes, used for selection-hint traversal
    fn children(&self) -> Vec<ContentRef> {
        Vec::new()
    }

    /// An optional rectangle marking this node as part of a user selection
    fn selection_hint(&self) -> Option<Rect> {
        None
    }

    /// Tile composition behind this node, for renderers drawing imposed
    /// sheets. Host nodes keep the default.
    fn composition(&self) -> Option<&CompositeContent> {
        None
    }
}

/// Shared handle to a host content node
pub type ContentRef = Arc<dyn Renderable>;

/// An empty content node used for booklet padding pages
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankContent;

impl Renderable for BlankContent {
    fn measure(&self, _available: Size) -> Size {
        Size::ZERO
    }

    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Placement of one source page's content within a region of a sheet.
///
/// The renderer draws `source` scaled by `(scale_x, scale_y)`, translated by
/// `offset` within `frame`, and clipped to `clip`. N-Up tiles use a uniform
/// scale; poster tiles use the grid dimensions as per-axis factors.
#[derive(Clone)]
pub struct TileSlot {
    /// The source page's content node
    pub source: ContentRef,
    /// Metrics of the source page, for renderers that need its layout
    pub source_metrics: PageMetrics,
    /// Region of the sheet this tile occupies
    pub frame: Rect,
    /// Clip rectangle in sheet coordinates
    pub clip: Rect,
    /// Horizontal scale applied to the source content
    pub scale_x: f32,
    /// Vertical scale applied to the source content
    pub scale_y: f32,
    /// Translation applied after scaling, relative to the frame origin
    pub offset: Point,
}

impl std::fmt::Debug for TileSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileSlot")
            .field("frame", &self.frame)
            .field("clip", &self.clip)
            .field("scale_x", &self.scale_x)
            .field("scale_y", &self.scale_y)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

/// A synthetic content node composing one or more source pages onto a sheet
pub struct CompositeContent {
    sheet_size: Size,
    tiles: Vec<TileSlot>,
}

impl CompositeContent {
    pub fn new(sheet_size: Size, tiles: Vec<TileSlot>) -> Self {
        Self { sheet_size, tiles }
    }

    /// Per-tile placement descriptors, in render order
    pub fn tiles(&self) -> &[TileSlot] {
        &self.tiles
    }
}

impl Renderable for CompositeContent {
    fn measure(&self, _available: Size) -> Size {
        self.sheet_size
    }

    fn bounds(&self) -> Rect {
        Rect::from_size(self.sheet_size)
    }

    fn children(&self) -> Vec<ContentRef> {
        self.tiles.iter().map(|t| t.source.clone()).collect()
    }

    fn composition(&self) -> Option<&CompositeContent> {
        Some(self)
    }
}

/// One logical content page flowing through the pipeline.
///
/// Stages never mutate a page in place; each stage re-wraps the content with
/// fresh settings and metrics. A physical sheet is a `LogicalPage` whose
/// content is either an original node or a [`CompositeContent`].
#[derive(Clone)]
pub struct LogicalPage {
    pub content: ContentRef,
    pub settings: PageSettings,
    pub is_page_break_after: bool,
    pub metrics: Option<PageMetrics>,
}

impl LogicalPage {
    pub fn new(content: ContentRef, settings: PageSettings) -> Self {
        Self {
            content,
            settings,
            is_page_break_after: false,
            metrics: None,
        }
    }

    /// Copy of this page with different metrics
    pub fn with_metrics(&self, metrics: PageMetrics) -> Self {
        Self {
            content: self.content.clone(),
            settings: self.settings.clone(),
            is_page_break_after: self.is_page_break_after,
            metrics: Some(metrics),
        }
    }

    /// Copy of this page with the break flag replaced
    pub fn with_page_break_after(&self, flag: bool) -> Self {
        Self {
            content: self.content.clone(),
            settings: self.settings.clone(),
            is_page_break_after: flag,
            metrics: self.metrics.clone(),
        }
    }
}

impl std::fmt::Debug for LogicalPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogicalPage")
            .field("settings", &self.settings)
            .field("is_page_break_after", &self.is_page_break_after)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

/// Final output unit: one physical side of paper handed to the renderer
pub type PhysicalSheet = LogicalPage;
