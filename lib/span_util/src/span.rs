use std::ops::Range;

/// Half open byte range into the source text.
///
/// Spans are semantic here, they decide what gets deleted from the
/// output, so equality compares the offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Span {
        Span { start, end }
    }

    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn extend(&self, span: Span) -> Span {
        Span {
            start: self.start,
            end: span.end,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(r: Range<usize>) -> Self {
        Self {
            start: r.start,
            end: r.end,
        }
    }
}

impl From<Span> for Range<usize> {
    fn from(s: Span) -> Self {
        Range {
            start: s.start,
            end: s.end,
        }
    }
}
