//! Page metric computation
//!
//! A [`PageMetrics`] is an immutable snapshot derived from a content node,
//! page settings, and a target resolution. It is never mutated in place;
//! derived snapshots come from [`PageMetrics::with_content_offset`] and
//! [`PageMetrics::with_selection`].

use crate::constants::{DEFAULT_PAGE_SIZE, DIPS_PER_INCH};
use crate::content::Renderable;
use crate::geometry::{Point, Rect, Size, Thickness};
use crate::options::PageSettings;

/// Derived layout geometry for one page at one resolution
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageMetrics {
    /// Full page size in device units
    pub page_size: Size,
    /// Sanitized margins in device units
    pub margins: Thickness,
    /// Margin-adjusted drawable area of the page
    pub content_rect: Rect,
    /// Uniform content scale factor (> 0)
    pub content_scale: f32,
    /// Scroll offset into the content, in content-local units
    pub content_offset: Point,
    /// Target resolution in dots per inch
    pub dpi: f32,
    /// Page size projected into pixels at `dpi`
    pub page_pixel_size: Size,
    /// Content rectangle projected into pixels at `dpi`
    pub content_pixel_rect: Rect,
    /// The region of the content this page shows, in content-local units
    pub visual_bounds: Rect,
}

impl PageMetrics {
    /// Compute metrics for a content node. Pure function of its inputs.
    pub fn compute(content: &dyn Renderable, settings: &PageSettings, dpi: f32) -> Self {
        let page_size = match settings.target_size {
            Some(size) if size.is_positive() => size,
            _ => DEFAULT_PAGE_SIZE,
        };

        let margins = settings.margins.unwrap_or(Thickness::ZERO).sanitized();
        let content_rect = Rect::from_size(page_size).deflate(margins);

        let content_scale = if settings.scale > 0.0 {
            settings.scale
        } else {
            1.0
        };

        let visual_bounds = match settings.selection_bounds {
            Some(bounds) => bounds,
            None => content.bounds(),
        };
        let content_offset = settings
            .selection_bounds
            .map(|b| b.origin())
            .unwrap_or(Point::ZERO);

        let to_px = dpi / DIPS_PER_INCH;
        Self {
            page_size,
            margins,
            content_rect,
            content_scale,
            content_offset,
            dpi,
            page_pixel_size: Size::new(page_size.width * to_px, page_size.height * to_px),
            content_pixel_rect: Rect::new(
                content_rect.x * to_px,
                content_rect.y * to_px,
                content_rect.width * to_px,
                content_rect.height * to_px,
            ),
            visual_bounds,
        }
    }

    /// New metrics with a different scroll offset into the content.
    ///
    /// Used by the overflow expander; unrelated fields are carried over.
    pub fn with_content_offset(&self, offset: Point) -> Self {
        Self {
            content_offset: offset,
            ..self.clone()
        }
    }

    /// New metrics scoped to a selection rectangle.
    ///
    /// The visible region and offset are replaced; page geometry is kept.
    pub fn with_selection(&self, selection: Rect) -> Self {
        Self {
            content_offset: selection.origin(),
            visual_bounds: selection,
            ..self.clone()
        }
    }

    /// Content area in content-local units (content rect divided by scale)
    pub fn available_content_size(&self) -> Size {
        Size::new(
            self.content_rect.width / self.content_scale,
            self.content_rect.height / self.content_scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::BlankContent;
    use crate::geometry::Thickness;

    #[test]
    fn test_default_page_size_when_unset() {
        let metrics = PageMetrics::compute(&BlankContent, &PageSettings::default(), 96.0);
        assert_eq!(metrics.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(metrics.content_rect, Rect::from_size(DEFAULT_PAGE_SIZE));
        assert_eq!(metrics.content_scale, 1.0);
    }

    #[test]
    fn test_default_page_size_when_non_positive() {
        let settings = PageSettings {
            target_size: Some(Size::new(-5.0, 100.0)),
            ..PageSettings::default()
        };
        let metrics = PageMetrics::compute(&BlankContent, &settings, 96.0);
        assert_eq!(metrics.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_margins_shrink_content_rect() {
        let settings = PageSettings {
            target_size: Some(Size::new(800.0, 600.0)),
            margins: Some(Thickness::new(10.0, 20.0, 30.0, 40.0)),
            ..PageSettings::default()
        };
        let metrics = PageMetrics::compute(&BlankContent, &settings, 96.0);
        assert_eq!(metrics.content_rect, Rect::new(10.0, 20.0, 760.0, 540.0));
    }

    #[test]
    fn test_negative_margins_sanitized() {
        let settings = PageSettings {
            target_size: Some(Size::new(800.0, 600.0)),
            margins: Some(Thickness::new(-10.0, f32::NAN, 0.0, 0.0)),
            ..PageSettings::default()
        };
        let metrics = PageMetrics::compute(&BlankContent, &settings, 96.0);
        assert_eq!(metrics.margins, Thickness::ZERO);
        assert_eq!(metrics.content_rect.width, 800.0);
    }

    #[test]
    fn test_pixel_projection() {
        let settings = PageSettings {
            target_size: Some(Size::new(96.0, 192.0)),
            ..PageSettings::default()
        };
        let metrics = PageMetrics::compute(&BlankContent, &settings, 300.0);
        assert!((metrics.page_pixel_size.width - 300.0).abs() < 0.01);
        assert!((metrics.page_pixel_size.height - 600.0).abs() < 0.01);
    }

    #[test]
    fn test_non_positive_scale_defaults_to_one() {
        let settings = PageSettings {
            scale: 0.0,
            ..PageSettings::default()
        };
        let metrics = PageMetrics::compute(&BlankContent, &settings, 96.0);
        assert_eq!(metrics.content_scale, 1.0);
    }

    #[test]
    fn test_with_content_offset_keeps_other_fields() {
        let metrics = PageMetrics::compute(&BlankContent, &PageSettings::default(), 96.0);
        let shifted = metrics.with_content_offset(Point::new(0.0, 42.0));
        assert_eq!(shifted.content_offset, Point::new(0.0, 42.0));
        assert_eq!(shifted.page_size, metrics.page_size);
        assert_eq!(shifted.content_rect, metrics.content_rect);
        assert_eq!(shifted.visual_bounds, metrics.visual_bounds);
    }

    #[test]
    fn test_with_selection_rescopes_visible_region() {
        let metrics = PageMetrics::compute(&BlankContent, &PageSettings::default(), 96.0);
        let selection = Rect::new(5.0, 7.0, 100.0, 50.0);
        let scoped = metrics.with_selection(selection);
        assert_eq!(scoped.visual_bounds, selection);
        assert_eq!(scoped.content_offset, Point::new(5.0, 7.0));
        assert_eq!(scoped.page_size, metrics.page_size);
    }
}
