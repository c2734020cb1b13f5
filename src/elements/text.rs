//! # Text Element
//!
//! One line of text with alignment and print-mode styles.

use crate::protocol::text::{self, Alignment, PrintStyle};

/// An immutable text line.
///
/// Encodes as alignment, styles, content, LF and a style reset. See
/// [`text::encode_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
    styles: Vec<PrintStyle>,
    alignment: Alignment,
}

impl Text {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn styles(&self) -> &[PrintStyle] {
        &self.styles
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Encode to ESC/POS bytes.
    pub fn encode(&self) -> Vec<u8> {
        text::encode_text(&self.content, &self.styles, self.alignment)
    }
}

/// Builder for [`Text`].
///
/// ## Example
///
/// ```
/// use posprint::elements::TextBuilder;
/// use posprint::protocol::text::{Alignment, PrintStyle};
///
/// // Plain, left aligned
/// let plain = TextBuilder::new("Espresso").build();
///
/// // Styled, styles applied in the order given
/// let title = TextBuilder::new("TOTAL {euro}12.50")
///     .alignment(Alignment::Right)
///     .style(PrintStyle::BOLD)
///     .style(PrintStyle::DOUBLE_WIDTH)
///     .build();
/// assert_eq!(title.styles().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextBuilder {
    content: String,
    styles: Vec<PrintStyle>,
    alignment: Alignment,
}

impl TextBuilder {
    /// Start a text line with left alignment and no styles.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            styles: Vec::new(),
            alignment: Alignment::Left,
        }
    }

    /// Append one style.
    pub fn style(mut self, style: PrintStyle) -> Self {
        self.styles.push(style);
        self
    }

    /// Replace the style list.
    pub fn styles(mut self, styles: impl IntoIterator<Item = PrintStyle>) -> Self {
        self.styles = styles.into_iter().collect();
        self
    }

    /// Set the alignment.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Center the text.
    pub fn center(self) -> Self {
        self.alignment(Alignment::Center)
    }

    /// Right-align the text.
    pub fn right(self) -> Self {
        self.alignment(Alignment::Right)
    }

    /// Finish the text line.
    pub fn build(self) -> Text {
        Text {
            content: self.content,
            styles: self.styles,
            alignment: self.alignment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let text = TextBuilder::new("x").build();
        assert_eq!(text.alignment(), Alignment::Left);
        assert!(text.styles().is_empty());
        assert_eq!(text.content(), "x");
    }

    #[test]
    fn test_styles_replace() {
        let text = TextBuilder::new("x")
            .style(PrintStyle::BOLD)
            .styles([PrintStyle::UNDERLINE, PrintStyle::FONT_B])
            .build();
        assert_eq!(text.styles(), &[PrintStyle::UNDERLINE, PrintStyle::FONT_B]);
    }

    #[test]
    fn test_encode_hello_center_bold() {
        let text = TextBuilder::new("Hello")
            .center()
            .style(PrintStyle::BOLD)
            .build();
        assert_eq!(
            text.encode(),
            vec![
                0x1B, 0x61, 0x01, 0x1B, 0x21, 0x08, b'H', b'e', b'l', b'l', b'o', 0x0A, 0x1B,
                0x21, 0x00,
            ]
        );
    }

    #[test]
    fn test_encode_placeholder() {
        let text = TextBuilder::new("{euro}").build();
        assert_eq!(
            text.encode(),
            vec![0x1B, 0x61, 0x00, 0xD5, 0x0A, 0x1B, 0x21, 0x00]
        );
    }

    #[test]
    fn test_encode_right() {
        let text = TextBuilder::new("").right().build();
        assert_eq!(&text.encode()[..3], &[0x1B, 0x61, 0x02]);
    }
}
