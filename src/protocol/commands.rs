//! # ESC/POS Command Registry
//!
//! Prefix bytes, opcodes and small command builders shared by every encoder.
//! Nothing outside this module should spell out a protocol byte by value.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`, `FF`
//! - Prefix + opcode: `ESC @`, `ESC L`
//! - Prefix + opcode + parameters: `ESC ! n`, `GS k m n data...`
//! - Function commands: `GS ( k pL pH cn fn params...`
//!
//! ## Byte Order
//!
//! Two-byte length fields are **little-endian** (`pL`, then `pH`):
//! - a total of 0x0103 is sent as bytes `[0x03, 0x01]`

// ============================================================================
// PREFIX BYTES
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for barcodes, QR codes, status requests and the cutter.
pub const GS: u8 = 0x1D;

/// FS (File Separator) - Kanji / NV command prefix
pub const FS: u8 = 0x1C;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

/// FF (Form Feed) - In page mode, print the composed page and return to
/// standard mode
pub const FF: u8 = 0x0C;

// ============================================================================
// OPCODES
// ============================================================================

/// `ESC @` - initialize printer
pub const INITIALIZE: u8 = 0x40;

/// `ESC B` - printer reset
pub const PRINTER_RESET: u8 = 0x42;

/// `ESC ! n` - select print mode (style bits)
pub const STYLE_MODE: u8 = 0x21;

/// `ESC a n` - select justification
pub const ALIGNMENT: u8 = 0x61;

/// `GS w n` - set barcode module width
pub const SET_BAR_WIDTH: u8 = 0x77;

/// `GS k m n data` - print barcode
pub const BARCODE_PRINT: u8 = 0x6B;

/// `GS (` - function command introducer
pub const QR_FUNCTION: u8 = 0x28;

/// `GS ( k` - 2D symbol function selector
pub const QR_FUNCTION_K: u8 = 0x6B;

/// `cn` parameter selecting the QR Code symbol
pub const QR_CODE_TYPE: u8 = 49;

/// `fn` 65 - select QR model
pub const QR_FN_MODEL: u8 = 65;

/// `fn` 67 - set module size
pub const QR_FN_SIZE: u8 = 67;

/// `fn` 69 - select error correction level
pub const QR_FN_ERROR_CORRECTION: u8 = 69;

/// `fn` 80 - store data in the symbol storage area
pub const QR_FN_STORE: u8 = 80;

/// `fn` 81 - print the stored symbol
pub const QR_FN_PRINT: u8 = 81;

/// `ESC L` - select page mode
pub const PAGE_MODE: u8 = 0x4C;

/// `GS r n` - transmit status
pub const STATUS_REQUEST: u8 = 0x72;

/// `ESC U n` - unidirectional print mode on/off
pub const UNIDIRECTIONAL_MODE: u8 = 0x55;

/// `GS V m` - cut paper
pub const CUT: u8 = 0x56;

// ============================================================================
// PRINTER CONTROL
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and returns every mode to its power-on default.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
///
/// ```
/// use posprint::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, INITIALIZE]
}

/// # Printer Reset (ESC B)
#[inline]
pub fn printer_reset() -> Vec<u8> {
    vec![ESC, PRINTER_RESET]
}

/// # Select Page Mode (ESC L)
///
/// Subsequent data is composed into the page buffer and only printed on
/// [`print_page`].
#[inline]
pub fn page_mode() -> Vec<u8> {
    vec![ESC, PAGE_MODE]
}

/// # Print Page (FF)
///
/// Prints the page-mode buffer and returns to standard mode.
#[inline]
pub fn print_page() -> Vec<u8> {
    vec![FF]
}

/// # Unidirectional Print Mode (ESC U n)
///
/// | n | Mode |
/// |---|------|
/// | 0 | bidirectional (default) |
/// | 1 | unidirectional |
#[inline]
pub fn unidirectional(enabled: bool) -> Vec<u8> {
    vec![ESC, UNIDIRECTIONAL_MODE, enabled as u8]
}

/// # Transmit Status (GS r n)
///
/// `n = 1` requests paper sensor status, `n = 2` drawer kick-out status.
/// The response is not read by this crate.
#[inline]
pub fn status_request(n: u8) -> Vec<u8> {
    vec![GS, STATUS_REQUEST, n]
}

/// # Full Cut (GS V 0)
#[inline]
pub fn cut_full() -> Vec<u8> {
    vec![GS, CUT, 0]
}

/// # Partial Cut (GS V 1)
#[inline]
pub fn cut_partial() -> Vec<u8> {
    vec![GS, CUT, 1]
}

/// `count` raw line feeds.
///
/// ```
/// use posprint::protocol::commands;
///
/// assert_eq!(commands::line_feeds(3), vec![0x0A, 0x0A, 0x0A]);
/// assert!(commands::line_feeds(0).is_empty());
/// ```
#[inline]
pub fn line_feeds(count: u16) -> Vec<u8> {
    vec![LF; count as usize]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ```
/// use posprint::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(256), [0x00, 0x01]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [(value % 256) as u8, (value / 256) as u8]
}

// ============================================================================
// TESTS
// ============================================================================
