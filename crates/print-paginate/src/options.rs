use crate::geometry::{Rect, Size, Thickness};
use crate::types::*;

/// Per-page settings supplied by the upstream document source.
///
/// `target_size` and `margins` are in device units; `margins` carries the
/// device's printable-area insets when the host knows them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSettings {
    /// Requested page size; falls back to US Letter when unset or non-positive
    pub target_size: Option<Size>,
    /// Printable-area margins reported by the device, if known
    pub margins: Option<Thickness>,
    /// Content scale factor; values <= 0 are treated as 1
    pub scale: f32,
    /// Explicit selection region, overriding content selection hints
    pub selection_bounds: Option<Rect>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            target_size: None,
            margins: None,
            scale: 1.0,
            selection_bounds: None,
        }
    }
}

impl PageSettings {
    /// Copy of these settings with a different target size
    pub fn with_target_size(&self, size: Size) -> Self {
        Self {
            target_size: Some(size),
            ..self.clone()
        }
    }

    /// Copy of these settings scoped to a selection rectangle
    pub fn with_selection(&self, bounds: Rect) -> Self {
        Self {
            selection_bounds: Some(bounds),
            ..self.clone()
        }
    }
}

/// 1-based inclusive range over the final sheet sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

impl PageRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// True if the 1-based ordinal falls inside the range
    pub fn contains(&self, ordinal: usize) -> bool {
        ordinal >= self.start && ordinal <= self.end
    }
}

/// Comprehensive pagination and layout configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutOptions {
    // Sheet geometry
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    /// Requested margins in inches, used when the printable area is not
    pub margins_in: Thickness,
    /// Prefer device-reported printable-area margins over `margins_in`
    pub use_printable_area: bool,

    // Centering of undersized content
    pub center_horizontally: bool,
    pub center_vertically: bool,

    // Imposition
    pub layout_kind: LayoutKind,
    pub nup_rows: usize,
    pub nup_columns: usize,
    pub nup_order: NupOrder,
    pub booklet_bind_long_edge: bool,
    pub poster_tile_count: usize,

    // Scoping
    pub selection_only: bool,
    pub page_range: Option<PageRange>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::Letter,
            orientation: Orientation::Portrait,
            margins_in: Thickness::ZERO,
            use_printable_area: false,
            center_horizontally: false,
            center_vertically: false,
            layout_kind: LayoutKind::Standard,
            nup_rows: 1,
            nup_columns: 1,
            nup_order: NupOrder::LeftToRightTopToBottom,
            booklet_bind_long_edge: true,
            poster_tile_count: 1,
            selection_only: false,
            page_range: None,
        }
    }
}

impl LayoutOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| PaginateError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PaginateError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let (w, h) = self.paper_size.dimensions_in();
        if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()) {
            return Err(PaginateError::Config(
                "Paper size must be positive and finite".to_string(),
            ));
        }

        if self.nup_rows < 1 || self.nup_columns < 1 {
            return Err(PaginateError::Config(
                "N-Up grid requires at least one row and one column".to_string(),
            ));
        }

        if self.poster_tile_count < 1 {
            return Err(PaginateError::Config(
                "Poster layout requires at least one tile".to_string(),
            ));
        }

        if let Some(range) = self.page_range {
            if range.start < 1 || range.end < range.start {
                return Err(PaginateError::Config(format!(
                    "Invalid page range {}..={}; expected 1 <= start <= end",
                    range.start, range.end
                )));
            }
        }

        Ok(())
    }
}
