//! # Barcode Element
//!
//! 1D barcodes printed with `GS k`.

use crate::error::EncodeError;
use crate::protocol::barcode::barcode1d::{self, MAX_DATA_LEN};

pub use crate::protocol::barcode::barcode1d::{BarcodeType, BarcodeWidth};

/// An immutable, validated 1D barcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    data: String,
    kind: BarcodeType,
    width: BarcodeWidth,
}

impl Barcode {
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn kind(&self) -> BarcodeType {
        self.kind
    }

    pub fn width(&self) -> BarcodeWidth {
        self.width
    }

    /// Encode to ESC/POS bytes: width, print command, LF.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        barcode1d::print(self.kind, self.width, self.data.as_bytes())
    }
}

/// Builder for [`Barcode`].
///
/// Defaults to Code128 at the default module width.
///
/// ## Example
///
/// ```
/// use posprint::elements::{BarcodeBuilder, BarcodeType, BarcodeWidth};
///
/// let barcode = BarcodeBuilder::new("012345678905")
///     .kind(BarcodeType::UpcA)
///     .width(BarcodeWidth::Thin)
///     .build()?;
/// # Ok::<(), posprint::error::EncodeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BarcodeBuilder {
    data: String,
    kind: BarcodeType,
    width: BarcodeWidth,
}

impl BarcodeBuilder {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            kind: BarcodeType::default(),
            width: BarcodeWidth::default(),
        }
    }

    /// Set the symbology.
    pub fn kind(mut self, kind: BarcodeType) -> Self {
        self.kind = kind;
        self
    }

    /// Set the module width.
    pub fn width(mut self, width: BarcodeWidth) -> Self {
        self.width = width;
        self
    }

    /// Validate and finish the barcode.
    ///
    /// Data must be 1 to 255 bytes of printable ASCII (0x20..=0x7E).
    pub fn build(self) -> Result<Barcode, EncodeError> {
        if self.data.is_empty() {
            return Err(EncodeError::EmptyData("barcode"));
        }
        if let Some((position, &byte)) = self
            .data
            .as_bytes()
            .iter()
            .enumerate()
            .find(|&(_, b)| !(0x20..=0x7E).contains(b))
        {
            return Err(EncodeError::NonAsciiBarcode { position, byte });
        }
        if self.data.len() > MAX_DATA_LEN {
            return Err(EncodeError::LengthOverflow {
                field: "barcode",
                len: self.data.len(),
                max: MAX_DATA_LEN,
            });
        }

        Ok(Barcode {
            data: self.data,
            kind: self.kind,
            width: self.width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let barcode = BarcodeBuilder::new("ABC").build().unwrap();
        assert_eq!(barcode.kind(), BarcodeType::Code128);
        assert_eq!(barcode.width(), BarcodeWidth::Default);
    }

    #[test]
    fn test_encode() {
        let barcode = BarcodeBuilder::new("AB")
            .kind(BarcodeType::Code93)
            .width(BarcodeWidth::Thick)
            .build()
            .unwrap();
        assert_eq!(
            barcode.encode().unwrap(),
            vec![0x1D, 0x77, 5, 0x1D, 0x6B, 0x48, 2, b'A', b'B', 0x0A]
        );
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            BarcodeBuilder::new("").build(),
            Err(EncodeError::EmptyData("barcode"))
        ));
    }

    #[test]
    fn test_non_ascii_rejected() {
        let err = BarcodeBuilder::new("AB\u{e9}").build().unwrap_err();
        assert!(matches!(
            err,
            EncodeError::NonAsciiBarcode {
                position: 2,
                byte: 0xC3
            }
        ));

        let err = BarcodeBuilder::new("A\nB").build().unwrap_err();
        assert!(matches!(err, EncodeError::NonAsciiBarcode { position: 1, .. }));
    }

    #[test]
    fn test_length_limit() {
        assert!(BarcodeBuilder::new("9".repeat(255)).build().is_ok());
        assert!(matches!(
            BarcodeBuilder::new("9".repeat(256)).build(),
            Err(EncodeError::LengthOverflow { len: 256, .. })
        ));
    }
}
