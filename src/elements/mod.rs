//! # Printable Elements
//!
//! The four kinds of printable unit a document is made of.
//!
//! ## Design
//!
//! Elements are configured through builders and are immutable once built.
//! Validation happens in `build()`, so an element that exists can always be
//! encoded:
//!
//! ```
//! use posprint::elements::*;
//! use posprint::protocol::text::{Alignment, PrintStyle};
//!
//! let title = TextBuilder::new("CHURRA MART")
//!     .alignment(Alignment::Center)
//!     .style(PrintStyle::BOLD)
//!     .build();
//!
//! let barcode = BarcodeBuilder::new("A-0042")
//!     .kind(BarcodeType::Code39)
//!     .build()?;
//!
//! let elements: Vec<Element> = vec![title.into(), LineFeed::new(1).into(), barcode.into()];
//! for element in &elements {
//!     assert!(!element.encode()?.is_empty());
//! }
//! # Ok::<(), posprint::error::EncodeError>(())
//! ```

mod barcode;
mod line_feed;
mod qr;
mod text;

pub use barcode::*;
pub use line_feed::*;
pub use qr::*;
pub use text::*;

use crate::error::EncodeError;

/// A printable element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Text(Text),
    LineFeed(LineFeed),
    Barcode(Barcode),
    QrCode(QrCode),
}

impl Element {
    /// Encode this element to ESC/POS bytes.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        match self {
            Element::Text(text) => Ok(text.encode()),
            Element::LineFeed(feed) => Ok(feed.encode()),
            Element::Barcode(barcode) => barcode.encode(),
            Element::QrCode(qr) => qr.encode(),
        }
    }

    /// Short name of the element kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Text(_) => "text",
            Element::LineFeed(_) => "line_feed",
            Element::Barcode(_) => "barcode",
            Element::QrCode(_) => "qr_code",
        }
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Element::Text(text)
    }
}

impl From<LineFeed> for Element {
    fn from(feed: LineFeed) -> Self {
        Element::LineFeed(feed)
    }
}

impl From<Barcode> for Element {
    fn from(barcode: Barcode) -> Self {
        Element::Barcode(barcode)
    }
}

impl From<QrCode> for Element {
    fn from(qr: QrCode) -> Self {
        Element::QrCode(qr)
    }
}
