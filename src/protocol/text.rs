//! # ESC/POS Text Commands
//!
//! Alignment, print-mode styles and content encoding for text lines.
//!
//! ## Print Mode Bits (ESC ! n)
//!
//! | Style | Bit value |
//! |-------|-----------|
//! | Font B | 1 |
//! | Bold (emphasized) | 8 |
//! | Double height | 16 |
//! | Double width | 32 |
//! | Underline | 128 |
//!
//! `ESC ! 0` returns to normal print.
//!
//! ## Text Line Layout
//!
//! ```text
//! ESC a n | ESC ! s1 | ESC ! s2 | ... | content | LF | ESC ! 0
//! ```
//!
//! Each style is sent as its own `ESC ! s` command in the order given. Since
//! `ESC !` replaces the whole print mode, combine bits with `|` to get more
//! than one effect at once.

use std::ops::BitOr;

use super::commands::{ALIGNMENT, ESC, LF, STYLE_MODE};
use super::special_chars;

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Select Justification (ESC a n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
///
/// ```
/// use posprint::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, ALIGNMENT, alignment as u8]
}

// ============================================================================
// PRINT MODE
// ============================================================================

/// A print-mode value for `ESC ! n`.
///
/// Values are bit flags and can be combined:
///
/// ```
/// use posprint::protocol::text::PrintStyle;
///
/// let heading = PrintStyle::BOLD | PrintStyle::DOUBLE_HEIGHT;
/// assert_eq!(heading.bits(), 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PrintStyle(u8);

impl PrintStyle {
    /// Normal print, clears every other bit.
    pub const NONE: Self = Self(0);
    pub const FONT_B: Self = Self(1);
    pub const BOLD: Self = Self(8);
    pub const DOUBLE_HEIGHT: Self = Self(16);
    pub const DOUBLE_WIDTH: Self = Self(32);
    pub const UNDERLINE: Self = Self(128);

    /// Build a style from raw mode bits.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw mode bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for PrintStyle {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// # Select Print Mode (ESC ! n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC ! n |
/// | Hex     | 1B 21 n |
pub fn style(style: PrintStyle) -> Vec<u8> {
    vec![ESC, STYLE_MODE, style.bits()]
}

/// Return to normal print (`ESC ! 0`).
#[inline]
pub fn style_reset() -> Vec<u8> {
    style(PrintStyle::NONE)
}

// ============================================================================
// CONTENT
// ============================================================================

/// Encode text content, substituting `{name}` placeholders.
///
/// The content is scanned left to right. A `{` with a `}` somewhere after it
/// is tried as a placeholder: if the enclosed name is in the special
/// character table its bytes are emitted and scanning resumes after the `}`.
/// Otherwise the `{` is emitted as-is and scanning resumes at the very next
/// character, so the name itself is printed literally.
///
/// Characters are emitted as the low byte of their code point.
///
/// ```
/// use posprint::protocol::text::encode_content;
///
/// assert_eq!(encode_content("5{euro}"), vec![b'5', 0xD5]);
/// assert_eq!(encode_content("{x}"), b"{x}".to_vec());
/// ```
pub fn encode_content(content: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len());
    let mut rest = content;

    while let Some(ch) = rest.chars().next() {
        if ch == '{' {
            if let Some(end) = rest.find('}') {
                if let Some(bytes) = special_chars::lookup(&rest[1..end]) {
                    out.extend_from_slice(bytes);
                    rest = &rest[end + 1..];
                    continue;
                }
            }
        }

        out.push(char_byte(ch));
        rest = &rest[ch.len_utf8()..];
    }

    out
}

/// Single-byte code for a character.
fn char_byte(ch: char) -> u8 {
    let code = ch as u32;
    if code > 0xFF {
        log::warn!(
            "text: character '{}' (U+{:04X}) has no single-byte code, sending low byte 0x{:02X}",
            ch,
            code,
            code & 0xFF
        );
    }
    (code & 0xFF) as u8
}

/// Encode a complete text line.
///
/// Emits alignment, each style in order, the content, a line feed, and
/// finally `ESC ! 0` so the next line starts from normal print.
pub fn encode_text(content: &str, styles: &[PrintStyle], alignment: Alignment) -> Vec<u8> {
    let mut out = Vec::with_capacity(3 + styles.len() * 3 + content.len() + 4);
    out.extend(align(alignment));
    for s in styles {
        out.extend(style(*s));
    }
    out.extend(encode_content(content));
    out.push(LF);
    out.extend(style_reset());
    out
}

// ============================================================================
// TESTS
// ============================================================================
