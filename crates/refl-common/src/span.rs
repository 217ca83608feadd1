//! Source location tracking (byte offsets).

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` into a source file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start position (byte offset)
    pub start: usize,
    /// End position (byte offset, exclusive)
    pub end: usize,
}

impl Span {
    /// Create a span from explicit start and end offsets.
    pub fn from_start_and_end(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_length_saturates_on_inverted_range() {
        assert_eq!(Span::from_start_and_end(3, 10).len(), 7);
        assert_eq!(Span::from_start_and_end(10, 3).len(), 0);
        assert!(Span::from_start_and_end(4, 4).is_empty());
    }
}
