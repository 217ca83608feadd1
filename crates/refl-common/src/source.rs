//! Contract with the external source-code parser.
//!
//! The reflection engine does not own a parser. Symbol construction only
//! needs a node's span and the text backing it, so the whole contract is the
//! [`SourceNode`] trait plus the [`Token`] value type for narrow sub-spans
//! (an identifier inside a larger declaration node).

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// A syntax node as seen by the reflection engine.
pub trait SourceNode {
    /// Full span of the node in the backing source.
    fn span(&self) -> Span;

    /// The complete source text the node was parsed from.
    fn source(&self) -> &str;

    /// The node's own text, sliced from the backing source.
    fn text(&self) -> &str {
        let span = self.span();
        &self.source()[span.start..span.end]
    }
}

/// A token within a node, addressed by absolute offset and length.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Start position in the backing source (byte offset)
    pub start: usize,
    /// Length in bytes
    pub length: usize,
}

impl Token {
    pub fn new(start: usize, length: usize) -> Self {
        Token { start, length }
    }

    /// Span covered by this token: `[start, start + length)`.
    pub fn span(&self) -> Span {
        Span::from_start_and_end(self.start, self.start + self.length)
    }

    /// The token's text, sliced from the file contents.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.start + self.length]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Node<'a> {
        source: &'a str,
        span: Span,
    }

    impl SourceNode for Node<'_> {
        fn span(&self) -> Span {
            self.span
        }

        fn source(&self) -> &str {
            self.source
        }
    }

    #[test]
    fn token_slices_text_from_file_contents() {
        let source = "$widget = new Widget();";
        let token = Token::new(0, 7);
        assert_eq!(token.text(source), "$widget");
        assert_eq!(token.span(), Span::from_start_and_end(0, 7));
    }

    #[test]
    fn node_text_covers_full_span() {
        let node = Node {
            source: "$widget = new Widget();",
            span: Span::from_start_and_end(10, 22),
        };
        assert_eq!(node.text(), "new Widget()");
    }
}
