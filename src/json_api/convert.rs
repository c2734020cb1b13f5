//! Conversion from JSON schema types to posprint elements.

use crate::document::{Document, Framing};
use crate::elements::{BarcodeBuilder, Element, LineFeed, QrCodeBuilder, TextBuilder};
use crate::error::EncodeError;
use crate::protocol::text::PrintStyle;

use super::schema::*;

impl JsonDocument {
    /// Convert this JSON document to a [`Document`].
    ///
    /// Elements go through their builders, so invalid barcode or QR data is
    /// rejected here with the same errors as the Rust API.
    pub fn to_document(&self) -> Result<Document, EncodeError> {
        let mut document = Document::with_framing(self.framing.into());
        for element in &self.elements {
            document.push(element.to_element()?);
        }
        Ok(document)
    }
}

impl From<JsonFraming> for Framing {
    fn from(framing: JsonFraming) -> Self {
        match framing {
            JsonFraming::Plain => Framing::plain(),
            JsonFraming::Extended => Framing::extended(),
        }
    }
}

impl JsonElement {
    fn to_element(&self) -> Result<Element, EncodeError> {
        let element: Element = match self {
            JsonElement::Text(t) => TextBuilder::new(t.content.clone())
                .alignment(t.align.into())
                .styles(t.styles.iter().copied().map(PrintStyle::from))
                .build()
                .into(),
            JsonElement::LineFeed(f) => LineFeed::new(f.count).into(),
            JsonElement::Barcode(b) => BarcodeBuilder::new(b.data.clone())
                .kind(b.kind.into())
                .width(b.width.into())
                .build()?
                .into(),
            JsonElement::QrCode(q) => QrCodeBuilder::new(q.data.clone())
                .size(q.size.into())
                .error_correction(q.error_correction.into())
                .build()?
                .into(),
        };
        Ok(element)
    }
}
