//! Overflow expansion
//!
//! Slices a logical page whose content is taller than one sheet's content
//! area into a run of physical pages. Slices are contiguous and
//! non-overlapping along the content's vertical axis; the final slice is
//! clamped so it never reads past the end of the content, and only it
//! inherits the source page's break flag.

use log::debug;

use crate::constants::{OVERFLOW_TOLERANCE, SCALE_EPSILON};
use crate::content::LogicalPage;
use crate::geometry::Point;

/// Lazily yields the slices of one expanded page.
///
/// Finite and forward-only; call [`expand_page`] again for a fresh pass.
pub struct ExpandedSlices {
    page: LogicalPage,
    plan: SlicePlan,
    index: usize,
}

#[derive(Clone, Copy)]
enum SlicePlan {
    /// Emit the page unchanged (fits, or geometry too degenerate to slice)
    Single,
    Split {
        base_offset: Point,
        available_height: f32,
        /// Bottom edge of the visible content region
        content_end: f32,
        page_count: usize,
    },
}

/// Expand one page into as many slices as its content height requires.
pub fn expand_page(page: &LogicalPage) -> ExpandedSlices {
    let plan = match &page.metrics {
        Some(metrics) => {
            let scale = metrics.content_scale.max(SCALE_EPSILON);
            let available_width = metrics.content_rect.width / scale;
            let available_height = metrics.content_rect.height / scale;

            if available_width <= 0.0 || available_height <= 0.0 {
                SlicePlan::Single
            } else {
                let content_end = metrics.visual_bounds.bottom();
                let base_offset = metrics.content_offset;
                let remaining = (content_end - base_offset.y).max(0.0);

                if remaining <= available_height + OVERFLOW_TOLERANCE {
                    SlicePlan::Single
                } else {
                    let page_count = (remaining / available_height).ceil() as usize;
                    debug!(
                        "overflow: {:.1} units across {} slices of {:.1}",
                        remaining, page_count, available_height
                    );
                    SlicePlan::Split {
                        base_offset,
                        available_height,
                        content_end,
                        page_count,
                    }
                }
            }
        }
        None => SlicePlan::Single,
    };

    ExpandedSlices {
        page: page.clone(),
        plan,
        index: 0,
    }
}

impl Iterator for ExpandedSlices {
    type Item = LogicalPage;

    fn next(&mut self) -> Option<LogicalPage> {
        match self.plan {
            SlicePlan::Single => {
                if self.index > 0 {
                    return None;
                }
                self.index = 1;
                Some(self.page.clone())
            }
            SlicePlan::Split {
                base_offset,
                available_height,
                content_end,
                page_count,
            } => {
                if self.index >= page_count {
                    return None;
                }
                let i = self.index;
                self.index += 1;

                // Clamp so the last slice ends exactly at the content end
                let offset_y = (base_offset.y + i as f32 * available_height)
                    .min(content_end - available_height);
                let offset = Point::new(base_offset.x, offset_y);

                let metrics = self
                    .page
                    .metrics
                    .as_ref()
                    .map(|m| m.with_content_offset(offset));

                let is_last = i + 1 == page_count;
                Some(LogicalPage {
                    content: self.page.content.clone(),
                    settings: self.page.settings.clone(),
                    is_page_break_after: is_last && self.page.is_page_break_after,
                    metrics,
                })
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = match self.plan {
            SlicePlan::Single => 1,
            SlicePlan::Split { page_count, .. } => page_count,
        };
        let left = total.saturating_sub(self.index);
        (left, Some(left))
    }
}
