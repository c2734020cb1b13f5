//! # ESC/POS Barcode Commands
//!
//! This module implements 1D barcode and QR code commands.
//!
//! ## 1D Barcode Usage
//!
//! ```
//! use posprint::protocol::barcode::barcode1d::{self, BarcodeType, BarcodeWidth};
//!
//! let cmd = barcode1d::print(BarcodeType::Code128, BarcodeWidth::Default, b"ABC-123")?;
//! assert_eq!(&cmd[..3], &[0x1D, 0x77, 4]);
//! # Ok::<(), posprint::error::EncodeError>(())
//! ```
//!
//! ## QR Code Usage
//!
//! QR codes are sent as a series of `GS ( k` function commands:
//!
//! 1. Select model 2
//! 2. Set module size
//! 3. Set error correction level
//! 4. Store the data
//! 5. Print the stored symbol
//!
//! ```
//! use posprint::protocol::barcode::qr::{self, QrErrorCorrection, QrSize};
//!
//! let cmd = qr::print(b"https://example.com", QrSize::Medium, QrErrorCorrection::Medium)?;
//! assert_eq!(*cmd.last().unwrap(), 0x0A);
//! # Ok::<(), posprint::error::EncodeError>(())
//! ```

use super::commands::{GS, LF};
use crate::error::EncodeError;

// ============================================================================
// 1D BARCODE COMMANDS (GS k)
// ============================================================================

/// 1D barcode command builders
pub mod barcode1d {
    use super::{EncodeError, GS, LF};
    use crate::protocol::commands::{BARCODE_PRINT, SET_BAR_WIDTH};

    /// Longest data the one-byte length field can describe.
    pub const MAX_DATA_LEN: usize = u8::MAX as usize;

    /// Barcode symbology, as the `m` byte of `GS k m n data` (function B).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[repr(u8)]
    pub enum BarcodeType {
        /// UPC-A (11-12 digits)
        UpcA = 0x41,
        /// UPC-E (6-8 digits)
        UpcE = 0x42,
        /// EAN-13 / JAN-13 (12-13 digits)
        Ean13 = 0x43,
        /// EAN-8 / JAN-8 (7-8 digits)
        Ean8 = 0x44,
        /// Code39 (A-Z, 0-9, space, -.$/%+)
        Code39 = 0x45,
        /// ITF (Interleaved 2 of 5, numeric pairs)
        Itf = 0x46,
        /// Codabar / NW-7
        Codabar = 0x47,
        /// Code93 (full ASCII)
        Code93 = 0x48,
        /// Code128 (full ASCII, code set prefix in data)
        #[default]
        Code128 = 0x49,
        /// GS1-128 (UCC/EAN-128)
        Gs1_128 = 0x4A,
        /// GS1 DataBar Omnidirectional
        Gs1DataBarOmnidirectional = 0x4B,
        /// GS1 DataBar Truncated
        Gs1DataBarTruncated = 0x4C,
        /// GS1 DataBar Limited
        Gs1DataBarLimited = 0x4D,
        /// GS1 DataBar Expanded
        Gs1DataBarExpanded = 0x4E,
    }

    /// Barcode module width in dots (`GS w n`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[repr(u8)]
    pub enum BarcodeWidth {
        Thinnest = 2,
        Thin = 3,
        #[default]
        Default = 4,
        Thick = 5,
        Thickest = 6,
    }

    /// # Set Barcode Width (GS w n)
    ///
    /// | Format  | Bytes |
    /// |---------|-------|
    /// | ASCII   | GS w n |
    /// | Hex     | 1D 77 n |
    pub fn set_width(width: BarcodeWidth) -> Vec<u8> {
        vec![GS, SET_BAR_WIDTH, width as u8]
    }

    /// # Print Barcode (GS k m n data)
    ///
    /// | Format  | Bytes |
    /// |---------|-------|
    /// | ASCII   | GS k m n data... |
    /// | Hex     | 1D 6B m n data... |
    ///
    /// `n` is the data length in a single byte, so data is limited to
    /// [`MAX_DATA_LEN`] bytes. Longer data is an error, never truncated.
    ///
    /// Symbology-specific syntax (digit counts, check digits, code set
    /// prefixes) is left to the printer.
    pub fn barcode(barcode_type: BarcodeType, data: &[u8]) -> Result<Vec<u8>, EncodeError> {
        let n = u8::try_from(data.len()).map_err(|_| EncodeError::LengthOverflow {
            field: "barcode",
            len: data.len(),
            max: MAX_DATA_LEN,
        })?;

        let mut cmd = Vec::with_capacity(4 + data.len());
        cmd.push(GS);
        cmd.push(BARCODE_PRINT);
        cmd.push(barcode_type as u8);
        cmd.push(n);
        cmd.extend_from_slice(data);
        Ok(cmd)
    }

    /// Complete barcode sequence: width, print, line feed.
    pub fn print(
        barcode_type: BarcodeType,
        width: BarcodeWidth,
        data: &[u8],
    ) -> Result<Vec<u8>, EncodeError> {
        let mut cmd = set_width(width);
        cmd.extend(barcode(barcode_type, data)?);
        cmd.push(LF);
        Ok(cmd)
    }
}

// ============================================================================
// QR CODE COMMANDS (GS ( k)
// ============================================================================

/// QR Code command builders
///
/// Every QR command is `GS ( k pL pH cn fn params...` where `pL pH` count
/// the bytes from `cn` onward and `cn = 49` selects QR Code.
pub mod qr {
    use super::{EncodeError, GS, LF};
    use crate::protocol::commands::{
        QR_CODE_TYPE, QR_FN_ERROR_CORRECTION, QR_FN_MODEL, QR_FN_PRINT, QR_FN_SIZE,
        QR_FN_STORE, QR_FUNCTION, QR_FUNCTION_K, u16_le,
    };

    /// Bytes between `pH` and the data in the store command (`cn fn m`).
    pub const STORE_HEADER_LEN: usize = 3;

    /// Longest data whose store length still fits in `pL pH`.
    pub const MAX_DATA_LEN: usize = u16::MAX as usize - STORE_HEADER_LEN;

    /// Module size in dots.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[repr(u8)]
    pub enum QrSize {
        Small = 2,
        #[default]
        Medium = 3,
        Large = 4,
        ExtraLarge = 5,
    }

    /// QR Code error correction level
    ///
    /// | Level | Recovery | Byte |
    /// |-------|----------|------|
    /// | L | ~7% | 48 |
    /// | M | ~15% | 49 |
    /// | Q | ~25% | 50 |
    /// | H | ~30% | 51 |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[repr(u8)]
    pub enum QrErrorCorrection {
        Low = 48,
        #[default]
        Medium = 49,
        Quartile = 50,
        High = 51,
    }

    fn function(p_l: u8, p_h: u8, func: u8) -> Vec<u8> {
        vec![GS, QR_FUNCTION, QR_FUNCTION_K, p_l, p_h, QR_CODE_TYPE, func]
    }

    /// # Select QR Model 2 (GS ( k 4 0 49 65 50 0)
    pub fn set_model2() -> Vec<u8> {
        let mut cmd = function(4, 0, QR_FN_MODEL);
        cmd.extend([50, 0]);
        cmd
    }

    /// # Set Module Size (GS ( k 3 0 49 67 n)
    pub fn set_size(size: QrSize) -> Vec<u8> {
        let mut cmd = function(3, 0, QR_FN_SIZE);
        cmd.push(size as u8);
        cmd
    }

    /// # Set Error Correction (GS ( k 3 0 49 69 n)
    pub fn set_error_correction(level: QrErrorCorrection) -> Vec<u8> {
        let mut cmd = function(3, 0, QR_FN_ERROR_CORRECTION);
        cmd.push(level as u8);
        cmd
    }

    /// # Store Data (GS ( k pL pH 49 80 48 data)
    ///
    /// `pL + pH * 256 = data.len() + 3`, the three being `cn fn m`. Both
    /// length bytes are always sent.
    ///
    /// ```
    /// use posprint::protocol::barcode::qr;
    ///
    /// let cmd = qr::store_data(&[b'x'; 253])?;
    /// assert_eq!(&cmd[3..5], &[0, 1]); // 256 = 0x0100
    /// # Ok::<(), posprint::error::EncodeError>(())
    /// ```
    pub fn store_data(data: &[u8]) -> Result<Vec<u8>, EncodeError> {
        let total = data.len() + STORE_HEADER_LEN;
        let total = u16::try_from(total).map_err(|_| EncodeError::LengthOverflow {
            field: "qr_code",
            len: data.len(),
            max: MAX_DATA_LEN,
        })?;
        let [p_l, p_h] = u16_le(total);

        let mut cmd = function(p_l, p_h, QR_FN_STORE);
        cmd.reserve(1 + data.len());
        cmd.push(48);
        cmd.extend_from_slice(data);
        Ok(cmd)
    }

    /// # Print Stored Symbol (GS ( k 3 0 49 81 48)
    pub fn print_stored() -> Vec<u8> {
        let mut cmd = function(3, 0, QR_FN_PRINT);
        cmd.push(48);
        cmd
    }

    /// Complete QR sequence: model, size, error correction, data, print,
    /// line feed.
    pub fn print(
        data: &[u8],
        size: QrSize,
        error_correction: QrErrorCorrection,
    ) -> Result<Vec<u8>, EncodeError> {
        let mut cmd = set_model2();
        cmd.extend(set_size(size));
        cmd.extend(set_error_correction(error_correction));
        cmd.extend(store_data(data)?);
        cmd.extend(print_stored());
        cmd.push(LF);
        Ok(cmd)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    mod barcode1d_tests {
        use super::super::barcode1d::*;
        use crate::error::EncodeError;

        #[test]
        fn test_type_codes() {
            assert_eq!(BarcodeType::UpcA as u8, 0x41);
            assert_eq!(BarcodeType::Code128 as u8, 0x49);
            assert_eq!(BarcodeType::Gs1DataBarExpanded as u8, 0x4E);
            assert_eq!(BarcodeType::default(), BarcodeType::Code128);
        }

        #[test]
        fn test_set_width() {
            assert_eq!(set_width(BarcodeWidth::Thinnest), vec![0x1D, 0x77, 2]);
            assert_eq!(set_width(BarcodeWidth::Thickest), vec![0x1D, 0x77, 6]);
        }

        #[test]
        fn test_barcode_header() {
            let cmd = barcode(BarcodeType::Code39, b"TEST").unwrap();
            assert_eq!(cmd[0], 0x1D); // GS
            assert_eq!(cmd[1], b'k'); // k
            assert_eq!(cmd[2], 0x45); // Code39
            assert_eq!(cmd[3], 4); // length
            assert_eq!(&cmd[4..], b"TEST");
        }

        #[test]
        fn test_print_full_sequence() {
            let cmd = print(BarcodeType::Ean13, BarcodeWidth::Thin, b"590123412345").unwrap();
            let mut expected = vec![0x1D, 0x77, 3, 0x1D, 0x6B, 0x43, 12];
            expected.extend_from_slice(b"590123412345");
            expected.push(0x0A);
            assert_eq!(cmd, expected);
        }

        #[test]
        fn test_length_field_matches() {
            for n in [1usize, 17, 128, 254, 255] {
                let data = vec![b'7'; n];
                let cmd = barcode(BarcodeType::Code128, &data).unwrap();
                assert_eq!(cmd[3] as usize, n);
                assert_eq!(cmd.len(), 4 + n);
            }
        }

        #[test]
        fn test_length_overflow() {
            let data = vec![b'7'; 256];
            let err = barcode(BarcodeType::Code128, &data).unwrap_err();
            assert!(matches!(
                err,
                EncodeError::LengthOverflow {
                    len: 256,
                    max: 255,
                    ..
                }
            ));
        }
    }

    mod qr_tests {
        use super::super::qr::*;
        use crate::error::EncodeError;

        #[test]
        fn test_set_model2() {
            assert_eq!(
                set_model2(),
                vec![0x1D, 0x28, 0x6B, 4, 0, 49, 65, 50, 0]
            );
        }

        #[test]
        fn test_set_size() {
            assert_eq!(
                set_size(QrSize::Large),
                vec![0x1D, 0x28, 0x6B, 3, 0, 49, 67, 4]
            );
        }

        #[test]
        fn test_set_error_correction() {
            assert_eq!(
                set_error_correction(QrErrorCorrection::Low),
                vec![0x1D, 0x28, 0x6B, 3, 0, 49, 69, 48]
            );
            assert_eq!(
                set_error_correction(QrErrorCorrection::High),
                vec![0x1D, 0x28, 0x6B, 3, 0, 49, 69, 51]
            );
        }

        #[test]
        fn test_store_data_small() {
            let cmd = store_data(b"ABC").unwrap();
            assert_eq!(cmd, vec![0x1D, 0x28, 0x6B, 6, 0, 49, 80, 48, b'A', b'B', b'C']);
        }

        #[test]
        fn test_store_length_decodes_to_len_plus_3() {
            for n in [0usize, 1, 100, 252, 253, 254, 509, 1000] {
                let data = vec![b'q'; n];
                let cmd = store_data(&data).unwrap();
                let decoded = cmd[3] as usize + 256 * cmd[4] as usize;
                assert_eq!(decoded, n + 3, "n = {}", n);
            }
        }

        #[test]
        fn test_store_length_boundary_253() {
            let cmd = store_data(&[b'q'; 253]).unwrap();
            assert_eq!(cmd[3], 0); // pL
            assert_eq!(cmd[4], 1); // pH
        }

        #[test]
        fn test_store_length_boundary_252() {
            let cmd = store_data(&[b'q'; 252]).unwrap();
            assert_eq!(cmd[3], 255);
            assert_eq!(cmd[4], 0);
        }

        #[test]
        fn test_store_max_and_overflow() {
            let data = vec![b'q'; MAX_DATA_LEN];
            let cmd = store_data(&data).unwrap();
            assert_eq!(&cmd[3..5], &[0xFF, 0xFF]);

            let data = vec![b'q'; MAX_DATA_LEN + 1];
            assert!(matches!(
                store_data(&data),
                Err(EncodeError::LengthOverflow { .. })
            ));
        }

        #[test]
        fn test_print_stored() {
            assert_eq!(print_stored(), vec![0x1D, 0x28, 0x6B, 3, 0, 49, 81, 48]);
        }

        #[test]
        fn test_print_sequence() {
            let cmd = print(b"hi", QrSize::Small, QrErrorCorrection::Quartile).unwrap();
            let expected = vec![
                0x1D, 0x28, 0x6B, 4, 0, 49, 65, 50, 0, // model 2
                0x1D, 0x28, 0x6B, 3, 0, 49, 67, 2, // size
                0x1D, 0x28, 0x6B, 3, 0, 49, 69, 50, // ec
                0x1D, 0x28, 0x6B, 5, 0, 49, 80, 48, b'h', b'i', // store
                0x1D, 0x28, 0x6B, 3, 0, 49, 81, 48, // print
                0x0A,
            ];
            assert_eq!(cmd, expected);
        }
    }
}
