//! Booklet composition: printer-spread ordering for saddle-stitch folding
//!
//! Pages are padded with blanks to a multiple of four, reordered so the
//! folded stack reads sequentially, then run through a 1x2 N-Up. The
//! binding edge never changes the in-engine geometry; it only surfaces in
//! the ticket metadata as a duplex hint.

use std::sync::Arc;

use log::debug;

use super::{PageIter, SheetIter, nup};
use crate::content::{BlankContent, LogicalPage};
use crate::options::{LayoutOptions, PageSettings};
use crate::types::NupOrder;

/// Compose pages into booklet sheets.
///
/// Buffers the input: printer-spread ordering needs the page count before
/// the first sheet can be emitted.
pub(crate) fn apply_booklet<'a>(
    pages: PageIter<'a>,
    options: &LayoutOptions,
    dpi: f32,
) -> SheetIter<'a> {
    let mut padded: Vec<LogicalPage> = pages.collect();
    let blanks = (4 - padded.len() % 4) % 4;
    if !padded.is_empty() && blanks > 0 {
        let template = padded
            .last()
            .map(|p| p.settings.clone())
            .unwrap_or_default();
        for _ in 0..blanks {
            padded.push(blank_page(&template));
        }
    }
    debug!(
        "booklet: {} pages after padding ({} blanks)",
        padded.len(),
        blanks
    );

    let spreads_options = LayoutOptions {
        nup_rows: 1,
        nup_columns: 2,
        nup_order: NupOrder::LeftToRightTopToBottom,
        ..options.clone()
    };

    // Fewer than 4 padded pages can only mean empty input, but falling
    // through to a plain 1x2 keeps the composer total either way.
    let ordered = if padded.len() < 4 {
        padded
    } else {
        booklet_order(padded)
    };

    nup::apply_nup(Box::new(ordered.into_iter()), &spreads_options, dpi)
}

/// Reorder pages into printer-spread order.
///
/// Alternates a front spread (last, first) with a back spread (next-first,
/// next-last) walking two cursors toward the middle, so that the folded
/// and stapled stack reads 1, 2, 3, ... Inputs padded to a multiple of 4
/// pair up exactly; an odd count emits its middle page last.
pub fn booklet_order<T>(pages: Vec<T>) -> Vec<T> {
    let count = pages.len();
    if count == 0 {
        return pages;
    }
    let mut slots: Vec<Option<T>> = pages.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(count);

    let mut take = |idx: usize, ordered: &mut Vec<T>| {
        if let Some(page) = slots[idx].take() {
            ordered.push(page);
        }
    };

    let mut left = count - 1;
    let mut right = 0;
    while right < left {
        // Front of the sheet: outermost remaining pair
        take(left, &mut ordered);
        left -= 1;
        take(right, &mut ordered);
        right += 1;

        // Back of the sheet: innermost pair of the same fold
        if right <= left {
            take(right, &mut ordered);
            right += 1;
            take(left, &mut ordered);
            left = left.saturating_sub(1);
        }
    }
    if right == left {
        take(right, &mut ordered);
    }

    ordered
}

fn blank_page(template: &PageSettings) -> LogicalPage {
    LogicalPage::new(Arc::new(BlankContent), template.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_page_spread_order() {
        let pages: Vec<usize> = (1..=8).collect();
        assert_eq!(booklet_order(pages), vec![8, 1, 2, 7, 6, 3, 4, 5]);
    }

    #[test]
    fn test_four_page_spread_order() {
        let pages: Vec<usize> = (1..=4).collect();
        assert_eq!(booklet_order(pages), vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_odd_page_count_keeps_every_page() {
        assert_eq!(booklet_order(vec![1, 2, 3]), vec![3, 1, 2]);
        assert_eq!(booklet_order(vec![1, 2, 3, 4, 5]), vec![5, 1, 2, 4, 3]);
        assert!(booklet_order(Vec::<usize>::new()).is_empty());
    }

    #[test]
    fn test_order_preserves_page_count() {
        for n in [1usize, 3, 4, 5, 8, 12, 16, 32] {
            let ordered = booklet_order((0..n).collect::<Vec<_>>());
            assert_eq!(ordered.len(), n);
            let mut sorted = ordered.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..n).collect::<Vec<_>>());
        }
    }
}
