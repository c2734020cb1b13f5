//! # Receipt Builder
//!
//! A fluent helper for the usual receipt layout: a centered title, item
//! lines with right-aligned prices, an underlined footer.
//!
//! ```
//! use posprint::receipt::ReceiptBuilder;
//! use posprint::protocol::text::PrintStyle;
//!
//! let doc = ReceiptBuilder::new()
//!     .title("CHURRA MART")
//!     .item("Espresso", 2.5)
//!     .item_styled("TOTAL", 2.5, [PrintStyle::BOLD])
//!     .footer("Thank you!")
//!     .build();
//!
//! let bytes = doc.encode()?;
//! # Ok::<(), posprint::error::EncodeError>(())
//! ```

use crate::document::{Document, Framing};
use crate::elements::{Element, TextBuilder};
use crate::protocol::text::{Alignment, PrintStyle};

/// Width of the item name column.
pub const NAME_WIDTH: usize = 20;

/// Width of the price column.
pub const PRICE_WIDTH: usize = 6;

/// Feeds appended after the footer.
const FOOTER_FEEDS: u16 = 2;

/// Feeds appended by [`ReceiptBuilder::build`] so the last line clears the
/// tear bar.
const TRAILING_FEEDS: u16 = 3;

/// Format an item line: name padded to 20 columns, price with two decimals
/// right-aligned in 6.
///
/// Names longer than the column are not truncated.
///
/// ```
/// use posprint::receipt::format_item_line;
///
/// assert_eq!(format_item_line("Coffee", 3.5), "Coffee                3.50");
/// ```
pub fn format_item_line(name: &str, price: f64) -> String {
    format!(
        "{name:<nw$}{price:>pw$.2}",
        nw = NAME_WIDTH,
        pw = PRICE_WIDTH
    )
}

/// Fluent builder producing a receipt [`Document`].
#[derive(Debug, Default)]
pub struct ReceiptBuilder {
    document: Document,
}

impl ReceiptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific framing policy for the receipt.
    pub fn framing(mut self, framing: Framing) -> Self {
        self.document.set_framing(framing);
        self
    }

    /// Centered, bold, double-height title.
    pub fn title(self, title: impl Into<String>) -> Self {
        self.styled_text(
            title,
            Alignment::Center,
            [PrintStyle::BOLD, PrintStyle::DOUBLE_HEIGHT],
        )
    }

    /// Plain item line.
    pub fn item(self, name: &str, price: f64) -> Self {
        self.styled_text(format_item_line(name, price), Alignment::Left, [])
    }

    /// Item line with styles.
    pub fn item_styled(
        self,
        name: &str,
        price: f64,
        styles: impl IntoIterator<Item = PrintStyle>,
    ) -> Self {
        self.styled_text(format_item_line(name, price), Alignment::Left, styles)
    }

    /// Centered, underlined footer followed by two blank lines.
    pub fn footer(self, footer: impl Into<String>) -> Self {
        self.styled_text(footer, Alignment::Center, [PrintStyle::UNDERLINE])
            .feed(FOOTER_FEEDS)
    }

    /// Any other element.
    pub fn element(mut self, element: impl Into<Element>) -> Self {
        self.document.push(element);
        self
    }

    /// Blank lines.
    pub fn feed(mut self, count: u16) -> Self {
        self.document.line_feeds(count);
        self
    }

    /// Finish the receipt, adding three trailing blank lines.
    pub fn build(self) -> Document {
        self.feed(TRAILING_FEEDS).document
    }

    fn styled_text(
        mut self,
        content: impl Into<String>,
        alignment: Alignment,
        styles: impl IntoIterator<Item = PrintStyle>,
    ) -> Self {
        let text = TextBuilder::new(content)
            .alignment(alignment)
            .styles(styles)
            .build();
        self.document.push(text);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Element, LineFeed, QrCodeBuilder};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_item_line() {
        assert_eq!(format_item_line("Tea", 2.0), "Tea                   2.00");
        assert_eq!(format_item_line("Tea", 123.456), "Tea                 123.46");
        assert_eq!(format_item_line("", 0.0), format!("{}  0.00", " ".repeat(20)));
    }

    #[test]
    fn test_format_item_line_long_values() {
        let name = "An exceptionally long item name";
        let line = format_item_line(name, 1234.5);
        assert_eq!(line, format!("{}1234.50", name));
    }

    #[test]
    fn test_empty_receipt_has_trailing_feeds() {
        let doc = ReceiptBuilder::new().build();
        assert_eq!(doc.elements(), &[Element::LineFeed(LineFeed::new(3))]);
    }

    #[test]
    fn test_title() {
        let doc = ReceiptBuilder::new().title("SHOP").build();
        let Element::Text(text) = &doc.elements()[0] else {
            panic!("expected text element");
        };
        assert_eq!(text.alignment(), Alignment::Center);
        assert_eq!(text.styles(), &[PrintStyle::BOLD, PrintStyle::DOUBLE_HEIGHT]);
    }

    #[test]
    fn test_item_is_plain_left() {
        let doc = ReceiptBuilder::new().item("Bun", 1.25).build();
        let Element::Text(text) = &doc.elements()[0] else {
            panic!("expected text element");
        };
        assert_eq!(text.alignment(), Alignment::Left);
        assert!(text.styles().is_empty());
        assert_eq!(text.content(), "Bun                   1.25");
    }

    #[test]
    fn test_footer_adds_two_feeds() {
        let doc = ReceiptBuilder::new().footer("bye").build();
        let elements = doc.elements();
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[1], Element::LineFeed(LineFeed::new(2)));
        assert_eq!(elements[2], Element::LineFeed(LineFeed::new(3)));
    }

    #[test]
    fn test_custom_element_and_framing() {
        let qr = QrCodeBuilder::new("https://example.com").build().unwrap();
        let doc = ReceiptBuilder::new()
            .framing(Framing::extended())
            .element(qr.clone())
            .build();
        assert_eq!(doc.framing(), &Framing::extended());
        assert_eq!(doc.elements()[0], Element::QrCode(qr));
    }
}
