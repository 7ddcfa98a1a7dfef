//! Page-setup normalization
//!
//! Resolves layout options into concrete device-unit page geometry and
//! produces fresh [`PageMetrics`] for each incoming page. Centering adds
//! symmetric margin padding when content is smaller than the printable
//! area; oversized content is never shrunk to fit here.

use log::debug;

use crate::constants::{MIN_PAGE_DIMENSION, SIZE_TOLERANCE, in_to_dip};
use crate::content::LogicalPage;
use crate::geometry::{Size, Thickness};
use crate::metrics::PageMetrics;
use crate::options::{LayoutOptions, PageSettings};
use crate::types::Orientation;

/// Resolved sheet size in device units, orientation applied.
///
/// Each dimension is clamped to a small positive minimum so downstream
/// division never sees degenerate geometry.
pub fn oriented_page_size(options: &LayoutOptions) -> Size {
    let (w_in, h_in) = options.paper_size.dimensions_in();
    let size = Size::new(in_to_dip(w_in), in_to_dip(h_in));
    let oriented = match options.orientation {
        Orientation::Portrait => size,
        Orientation::Landscape => size.transposed(),
    };
    Size::new(
        oriented.width.max(MIN_PAGE_DIMENSION),
        oriented.height.max(MIN_PAGE_DIMENSION),
    )
}

/// Resolved sheet margins in device units.
///
/// Device-reported printable-area margins win when requested and present;
/// otherwise the option margins are converted from inches. Either source is
/// sanitized so negative or non-finite components become zero.
fn resolve_margins(settings: &PageSettings, options: &LayoutOptions) -> Thickness {
    match settings.margins {
        Some(printable) if options.use_printable_area => printable.sanitized(),
        _ => options.margins_in.scaled(in_to_dip(1.0)).sanitized(),
    }
}

/// Apply page setup to one logical page, producing a normalized copy with
/// fresh metrics at the given resolution.
pub fn apply_page_setup(page: &LogicalPage, options: &LayoutOptions, dpi: f32) -> LogicalPage {
    let page_size = oriented_page_size(options);
    let mut margins = resolve_margins(&page.settings, options);

    if options.center_horizontally || options.center_vertically {
        let available = Size::new(
            (page_size.width - margins.horizontal()).max(0.0),
            (page_size.height - margins.vertical()).max(0.0),
        );
        let desired = page.content.measure(available);
        margins = centered_margins(margins, desired, available, options);
    }

    let settings = PageSettings {
        target_size: Some(page_size),
        margins: Some(margins),
        ..page.settings.clone()
    };

    let metrics = PageMetrics::compute(page.content.as_ref(), &settings, dpi);
    debug!(
        "page setup: size {:.1}x{:.1}, content rect {:.1}x{:.1}",
        page_size.width, page_size.height, metrics.content_rect.width, metrics.content_rect.height
    );

    LogicalPage {
        content: page.content.clone(),
        settings,
        is_page_break_after: page.is_page_break_after,
        metrics: Some(metrics),
    }
}

/// Add symmetric padding on each enabled axis where the un-scaled content
/// is smaller than the available area (within tolerance). Content at least
/// as large as the area is left unmodified.
fn centered_margins(
    margins: Thickness,
    desired: Size,
    available: Size,
    options: &LayoutOptions,
) -> Thickness {
    let mut result = margins;

    if options.center_horizontally && available.width - desired.width > SIZE_TOLERANCE {
        let pad = (available.width - desired.width) / 2.0;
        result.left += pad;
        result.right += pad;
    }

    if options.center_vertically && available.height - desired.height > SIZE_TOLERANCE {
        let pad = (available.height - desired.height) / 2.0;
        result.top += pad;
        result.bottom += pad;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaperSize;

    #[test]
    fn test_oriented_size_swaps_for_landscape() {
        let options = LayoutOptions {
            paper_size: PaperSize::Letter,
            orientation: Orientation::Landscape,
            ..LayoutOptions::default()
        };
        let size = oriented_page_size(&options);
        assert!((size.width - 1056.0).abs() < 0.01);
        assert!((size.height - 816.0).abs() < 0.01);
    }

    #[test]
    fn test_degenerate_paper_clamped() {
        let options = LayoutOptions {
            paper_size: PaperSize::Custom {
                width_in: 0.0,
                height_in: -1.0,
            },
            ..LayoutOptions::default()
        };
        let size = oriented_page_size(&options);
        assert_eq!(size.width, MIN_PAGE_DIMENSION);
        assert_eq!(size.height, MIN_PAGE_DIMENSION);
    }

    #[test]
    fn test_printable_area_margins_win_when_requested() {
        let settings = PageSettings {
            margins: Some(Thickness::uniform(12.0)),
            ..PageSettings::default()
        };
        let options = LayoutOptions {
            use_printable_area: true,
            margins_in: Thickness::uniform(1.0),
            ..LayoutOptions::default()
        };
        assert_eq!(resolve_margins(&settings, &options), Thickness::uniform(12.0));

        let options = LayoutOptions {
            use_printable_area: false,
            margins_in: Thickness::uniform(1.0),
            ..LayoutOptions::default()
        };
        assert_eq!(resolve_margins(&settings, &options), Thickness::uniform(96.0));
    }

    #[test]
    fn test_centering_pads_both_margins_equally() {
        let margins = Thickness::uniform(10.0);
        let options = LayoutOptions {
            center_horizontally: true,
            center_vertically: false,
            ..LayoutOptions::default()
        };
        let padded = centered_margins(
            margins,
            Size::new(100.0, 500.0),
            Size::new(300.0, 400.0),
            &options,
        );
        assert_eq!(padded.left, 110.0);
        assert_eq!(padded.right, 110.0);
        // Vertical axis untouched even though content overflows it
        assert_eq!(padded.top, 10.0);
        assert_eq!(padded.bottom, 10.0);
    }

    #[test]
    fn test_centering_skips_oversized_content() {
        let margins = Thickness::uniform(10.0);
        let options = LayoutOptions {
            center_horizontally: true,
            center_vertically: true,
            ..LayoutOptions::default()
        };
        let padded = centered_margins(
            margins,
            Size::new(500.0, 400.05),
            Size::new(300.0, 400.0),
            &options,
        );
        assert_eq!(padded, margins);
    }
}
