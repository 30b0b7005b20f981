//! Byte spans into the owned raw URI text.

use std::ops::Range;

/// A half-open byte range into the raw buffer of a [`crate::Uri`].
///
/// Spans only ever start and end at ASCII delimiter positions or at the
/// string ends, so slicing the raw text with one is always on a UTF-8
/// boundary. The default span is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub(crate) const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub(crate) const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Materializes the view into `raw`.
    pub(crate) fn slice<'a>(&self, raw: &'a str) -> &'a str {
        &raw[self.range()]
    }

    /// The view, or `None` when the span is empty.
    pub(crate) fn get<'a>(&self, raw: &'a str) -> Option<&'a str> {
        if self.is_empty() {
            None
        } else {
            Some(self.slice(raw))
        }
    }
}
