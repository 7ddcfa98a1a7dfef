//! The pagination pipeline
//!
//! Raw logical pages flow one way: page setup -> metrics -> optional
//! selection trim -> overflow expansion -> imposition -> optional page-range
//! filter. Each pass over a [`Paginator`] is independent; the engine holds
//! no state between calls, so hosts share one paginator value freely.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;

use crate::content::{LogicalPage, PhysicalSheet};
use crate::impose::apply_layout;
use crate::options::LayoutOptions;
use crate::overflow::expand_page;
use crate::selection::trim_to_selection;
use crate::setup::apply_page_setup;
use crate::types::Result;

/// Cooperative cancellation signal, checked once per produced sheet.
///
/// After cancellation the sequence ends immediately; a partially observed
/// composition must be discarded by the caller.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Stateless pagination entry point.
///
/// Pagination is a pure, synchronous, CPU-bound transformation; hosts that
/// want parallelism may run independent passes on independent inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Paginator;

impl Paginator {
    pub fn new() -> Self {
        Self
    }

    /// Run one pagination pass over a page source.
    ///
    /// The source is consumed exactly once; the returned sequence is lazy,
    /// finite, and forward-only. Re-iterate by calling `paginate` again.
    /// Fails fast on invalid options before touching any page.
    pub fn paginate<'a, I>(
        &self,
        pages: I,
        options: &LayoutOptions,
        dpi: f32,
        cancel: &CancelToken,
    ) -> Result<PageSequence<'a>>
    where
        I: IntoIterator<Item = LogicalPage>,
        I::IntoIter: 'a,
    {
        options.validate()?;
        debug!("pagination pass: {:?} at {} dpi", options.layout_kind, dpi);

        let setup_options = options.clone();
        let normalized = pages
            .into_iter()
            .map(move |page| apply_page_setup(&page, &setup_options, dpi));

        let trimmed: Box<dyn Iterator<Item = LogicalPage> + 'a> = if options.selection_only {
            Box::new(normalized.filter_map(|page| trim_to_selection(&page)))
        } else {
            Box::new(normalized)
        };

        let expanded = Box::new(trimmed.flat_map(|page| expand_page(&page)));
        let composed = apply_layout(expanded, options, dpi);

        let ranged: Box<dyn Iterator<Item = PhysicalSheet> + 'a> = match options.page_range {
            Some(range) => Box::new(
                composed
                    .enumerate()
                    .filter(move |(i, _)| range.contains(i + 1))
                    .map(|(_, sheet)| sheet),
            ),
            None => composed,
        };

        Ok(PageSequence {
            sheets: ranged,
            cancel: cancel.clone(),
        })
    }
}

/// Lazy, finite, forward-only sequence of physical sheets.
///
/// One pass per `paginate` call; the cancellation token is checked before
/// each sheet is produced.
pub struct PageSequence<'a> {
    sheets: Box<dyn Iterator<Item = PhysicalSheet> + 'a>,
    cancel: CancelToken,
}

impl Iterator for PageSequence<'_> {
    type Item = PhysicalSheet;

    fn next(&mut self) -> Option<PhysicalSheet> {
        if self.cancel.is_cancelled() {
            return None;
        }
        self.sheets.next()
    }
}
