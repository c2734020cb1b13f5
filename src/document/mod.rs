//! # Document Model
//!
//! A [`Document`] is an ordered list of elements plus a [`Framing`] policy.
//! Encoding it produces the complete byte stream for one print job.
//!
//! ```
//! use posprint::document::Document;
//! use posprint::elements::TextBuilder;
//! use posprint::protocol::text::{Alignment, PrintStyle};
//!
//! let mut doc = Document::new();
//! doc.push(
//!     TextBuilder::new("Hello")
//!         .alignment(Alignment::Center)
//!         .style(PrintStyle::BOLD)
//!         .build(),
//! );
//! doc.line_feeds(3);
//!
//! let bytes = doc.encode()?;
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! // Encoding does not consume the document
//! assert_eq!(bytes, doc.encode()?);
//! # Ok::<(), posprint::error::EncodeError>(())
//! ```

mod framing;

pub use framing::{DEFAULT_LEADER, Framing};

use crate::elements::{Element, LineFeed};
use crate::error::EncodeError;

/// An ordered sequence of printable elements.
///
/// Insertion order is print order. Elements are owned by value, so one
/// element cannot appear in two documents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    elements: Vec<Element>,
    framing: Framing,
}

impl Document {
    /// An empty document with plain framing.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty document with the given framing policy.
    pub fn with_framing(framing: Framing) -> Self {
        Self {
            elements: Vec::new(),
            framing,
        }
    }

    /// Append an element at the end.
    pub fn push(&mut self, element: impl Into<Element>) -> &mut Self {
        self.elements.push(element.into());
        self
    }

    /// Append `count` blank lines.
    pub fn line_feeds(&mut self, count: u16) -> &mut Self {
        self.push(LineFeed::new(count))
    }

    /// Replace the framing policy.
    pub fn set_framing(&mut self, framing: Framing) {
        self.framing = framing;
    }

    pub fn framing(&self) -> &Framing {
        &self.framing
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Encode the whole document.
    ///
    /// Output is the framing prologue, each element's bytes in order with
    /// nothing in between, then the framing epilogue. The document is not
    /// modified; encoding the same document twice gives the same bytes.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut out = self.framing.prologue();
        for (i, element) in self.elements.iter().enumerate() {
            let bytes = element.encode().inspect_err(|e| {
                log::debug!("document: element {} ({}) failed: {}", i, element.kind(), e);
            })?;
            out.extend(bytes);
        }
        out.extend(self.framing.epilogue());

        log::debug!(
            "document: encoded {} element(s) into {} bytes",
            self.elements.len(),
            out.len()
        );
        Ok(out)
    }
}

impl<E: Into<Element>> Extend<E> for Document {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().map(Into::into));
    }
}

impl<E: Into<Element>> FromIterator<E> for Document {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut doc = Document::new();
        doc.extend(iter);
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{BarcodeBuilder, QrCodeBuilder, TextBuilder};
    use crate::protocol::text::PrintStyle;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.encode().unwrap(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_push_preserves_order() {
        let mut doc = Document::new();
        doc.push(TextBuilder::new("a").build());
        doc.line_feeds(1);
        doc.push(TextBuilder::new("b").build());

        let kinds: Vec<_> = doc.elements().iter().map(Element::kind).collect();
        assert_eq!(kinds, vec!["text", "line_feed", "text"]);
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn test_line_feeds_only() {
        let mut doc = Document::new();
        doc.line_feeds(3);
        assert_eq!(doc.encode().unwrap(), vec![0x1B, 0x40, 0x0A, 0x0A, 0x0A]);
    }

    #[test]
    fn test_concatenation_has_no_separators() {
        let text = TextBuilder::new("x").style(PrintStyle::UNDERLINE).build();
        let barcode = BarcodeBuilder::new("12").build().unwrap();
        let qr = QrCodeBuilder::new("q").build().unwrap();

        let mut expected = vec![0x1B, 0x40];
        expected.extend(text.encode());
        expected.extend(barcode.encode().unwrap());
        expected.extend(qr.encode().unwrap());

        let mut doc = Document::new();
        doc.push(text).push(barcode).push(qr);
        assert_eq!(doc.encode().unwrap(), expected);
    }

    #[test]
    fn test_encode_is_idempotent() {
        let mut doc = Document::with_framing(Framing::extended());
        doc.push(TextBuilder::new("{euro} 3.50").build());
        doc.line_feeds(2);

        let first = doc.encode().unwrap();
        let second = doc.encode().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extended_framing_wraps_elements() {
        let mut doc = Document::with_framing(Framing::extended());
        doc.line_feeds(1);
        let bytes = doc.encode().unwrap();

        let mut expected = Framing::extended().prologue();
        expected.push(0x0A);
        expected.extend(Framing::extended().epilogue());
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_from_iterator() {
        let doc: Document = [LineFeed::new(1), LineFeed::new(2)].into_iter().collect();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.encode().unwrap(), vec![0x1B, 0x40, 0x0A, 0x0A, 0x0A]);
    }
}
