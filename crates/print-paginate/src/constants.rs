//! Shared constants for pagination and imposition
//!
//! This module centralizes magic numbers and constants used throughout
//! the layout pipeline.

use crate::geometry::Size;

// =============================================================================
// Unit Conversion
// =============================================================================

/// Device-independent units per inch
pub const DIPS_PER_INCH: f32 = 96.0;

/// Convert inches to device-independent units
#[inline]
pub fn in_to_dip(inches: f32) -> f32 {
    inches * DIPS_PER_INCH
}

/// Convert device-independent units to inches
#[inline]
pub fn dip_to_in(dip: f32) -> f32 {
    dip / DIPS_PER_INCH
}

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in device units (US Letter: 8.5" x 11")
pub const DEFAULT_PAGE_WIDTH: f32 = 8.5 * DIPS_PER_INCH;

/// Default page height in device units (US Letter)
pub const DEFAULT_PAGE_HEIGHT: f32 = 11.0 * DIPS_PER_INCH;

/// Default page size used when settings carry no usable target size
pub const DEFAULT_PAGE_SIZE: Size = Size {
    width: DEFAULT_PAGE_WIDTH,
    height: DEFAULT_PAGE_HEIGHT,
};

/// Default rendering resolution in dots per inch
pub const DEFAULT_DPI: f32 = 96.0;

// =============================================================================
// Geometry Tolerances
// =============================================================================

/// Minimum page dimension after page setup; avoids degenerate geometry
pub const MIN_PAGE_DIMENSION: f32 = 0.1;

/// Tolerance for "content fits the available area" comparisons
pub const SIZE_TOLERANCE: f32 = 0.1;

/// Slack allowed before a page is considered to overflow its sheet
pub const OVERFLOW_TOLERANCE: f32 = 0.5;

/// Floor for content scale factors in overflow arithmetic
pub const SCALE_EPSILON: f32 = 1e-5;

// =============================================================================
// Imposition
// =============================================================================

/// Upper bound on the gap between N-Up tiles, per axis
pub const MAX_TILE_SPACING: f32 = 10.0;

/// Inner padding applied when scaling a source page into a tile
pub const TILE_PADDING: f32 = 2.0;
