//! # QR Code Element

use crate::error::EncodeError;
use crate::protocol::barcode::qr::{self, MAX_DATA_LEN};

pub use crate::protocol::barcode::qr::{QrErrorCorrection, QrSize};

/// An immutable, validated QR code.
///
/// Data is stored in the symbol as its UTF-8 bytes. Unlike [`Text`], which
/// sends one byte per character, a non-ASCII character here takes two to
/// four bytes, and the length limit counts bytes rather than characters.
///
/// [`Text`]: crate::elements::Text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    data: String,
    size: QrSize,
    error_correction: QrErrorCorrection,
}

impl QrCode {
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn size(&self) -> QrSize {
        self.size
    }

    pub fn error_correction(&self) -> QrErrorCorrection {
        self.error_correction
    }

    /// Encode to ESC/POS bytes. See [`qr::print`].
    ///
    /// The store command's `pL pH` field is the UTF-8 byte length of the
    /// data plus 3.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        qr::print(self.data.as_bytes(), self.size, self.error_correction)
    }
}

/// Builder for [`QrCode`].
///
/// ## Example
///
/// ```
/// use posprint::elements::{QrCodeBuilder, QrErrorCorrection, QrSize};
///
/// let qr = QrCodeBuilder::new("https://example.com/r/1042")
///     .size(QrSize::Large)
///     .error_correction(QrErrorCorrection::High)
///     .build()?;
/// # Ok::<(), posprint::error::EncodeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct QrCodeBuilder {
    data: String,
    size: QrSize,
    error_correction: QrErrorCorrection,
}

impl QrCodeBuilder {
    /// Start a QR code with medium size and medium error correction.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            size: QrSize::default(),
            error_correction: QrErrorCorrection::default(),
        }
    }

    pub fn size(mut self, size: QrSize) -> Self {
        self.size = size;
        self
    }

    pub fn error_correction(mut self, level: QrErrorCorrection) -> Self {
        self.error_correction = level;
        self
    }

    /// Validate and finish the QR code.
    pub fn build(self) -> Result<QrCode, EncodeError> {
        if self.data.is_empty() {
            return Err(EncodeError::EmptyData("qr_code"));
        }
        if self.data.len() > MAX_DATA_LEN {
            return Err(EncodeError::LengthOverflow {
                field: "qr_code",
                len: self.data.len(),
                max: MAX_DATA_LEN,
            });
        }

        Ok(QrCode {
            data: self.data,
            size: self.size,
            error_correction: self.error_correction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let qr = QrCodeBuilder::new("x").build().unwrap();
        assert_eq!(qr.size(), QrSize::Medium);
        assert_eq!(qr.error_correction(), QrErrorCorrection::Medium);
    }

    #[test]
    fn test_encode_uses_settings() {
        let qr = QrCodeBuilder::new("x")
            .size(QrSize::ExtraLarge)
            .error_correction(QrErrorCorrection::Low)
            .build()
            .unwrap();
        let bytes = qr.encode().unwrap();
        assert_eq!(bytes[16], 5); // size
        assert_eq!(bytes[24], 48); // error correction
        assert_eq!(&bytes[28..30], &[4, 0]); // 1 + 3
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            QrCodeBuilder::new("").build(),
            Err(EncodeError::EmptyData("qr_code"))
        ));
    }

    #[test]
    fn test_oversize_rejected() {
        let data = "a".repeat(MAX_DATA_LEN + 1);
        assert!(matches!(
            QrCodeBuilder::new(data).build(),
            Err(EncodeError::LengthOverflow { .. })
        ));
    }

    #[test]
    fn test_non_ascii_length_counts_utf8_bytes() {
        let qr = QrCodeBuilder::new("é€").build().unwrap();
        let bytes = qr.encode().unwrap();
        assert_eq!(&bytes[28..30], &[8, 0]); // 5 UTF-8 bytes + 3
        assert_eq!(&bytes[33..38], &[0xC3, 0xA9, 0xE2, 0x82, 0xAC]);
    }

    #[test]
    fn test_limit_counts_bytes_not_chars() {
        // 32767 two-byte chars exceed the limit in bytes only
        let data = "é".repeat(MAX_DATA_LEN / 2 + 1);
        assert!(data.chars().count() <= MAX_DATA_LEN);
        assert!(matches!(
            QrCodeBuilder::new(data).build(),
            Err(EncodeError::LengthOverflow { .. })
        ));
    }
}
