//! Selection trimming
//!
//! Restricts a page to a user-designated selection region. Pages with no
//! usable selection rectangle are dropped, which selection-only printing
//! treats as a valid (empty) outcome rather than an error.

use log::debug;

use crate::content::{ContentRef, LogicalPage, Renderable};
use crate::geometry::Rect;

/// Restrict a page to its selection region, or drop it when none exists.
///
/// An explicit `selection_bounds` on the page settings wins; otherwise the
/// union of every positive-area selection hint on the content node and its
/// descendants is used.
pub fn trim_to_selection(page: &LogicalPage) -> Option<LogicalPage> {
    let selection = page
        .settings
        .selection_bounds
        .or_else(|| collect_selection_bounds(page.content.as_ref()))?;

    debug!(
        "selection: {:.1}x{:.1} at ({:.1}, {:.1})",
        selection.width, selection.height, selection.x, selection.y
    );

    let settings = page.settings.with_selection(selection);
    let metrics = page.metrics.as_ref().map(|m| m.with_selection(selection));
    Some(LogicalPage {
        content: page.content.clone(),
        settings,
        is_page_break_after: page.is_page_break_after,
        metrics,
    })
}

/// Union of all positive-area selection hints in the content tree
fn collect_selection_bounds(content: &dyn Renderable) -> Option<Rect> {
    let mut result: Option<Rect> = None;
    accumulate_hints(content, &mut result);
    result
}

fn accumulate_hints(node: &dyn Renderable, acc: &mut Option<Rect>) {
    if let Some(hint) = node.selection_hint() {
        if hint.is_positive() {
            *acc = Some(match acc {
                Some(current) => current.union(&hint),
                None => hint,
            });
        }
    }
    for child in node.children() {
        accumulate_hints(child.as_ref(), acc);
    }
}

/// Convenience for hosts: resolve the effective selection of a content tree
/// without building a page.
pub fn selection_of(content: &ContentRef) -> Option<Rect> {
    collect_selection_bounds(content.as_ref())
}
