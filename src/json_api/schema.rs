//! JSON schema types for the document API.

use serde::Deserialize;

use crate::elements::{BarcodeType, BarcodeWidth, QrErrorCorrection, QrSize};
use crate::protocol::text::{Alignment, PrintStyle};

fn default_feed_count() -> u16 {
    1
}

/// Top-level JSON document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonDocument {
    /// Framing policy: "plain" (default) or "extended".
    #[serde(default)]
    pub framing: JsonFraming,
    /// Elements in print order.
    pub elements: Vec<JsonElement>,
}

/// Named framing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonFraming {
    #[default]
    Plain,
    Extended,
}

/// A single element in the document.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JsonElement {
    Text(JsonText),
    LineFeed(JsonLineFeed),
    Barcode(JsonBarcode),
    QrCode(JsonQrCode),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonText {
    pub content: String,
    #[serde(default)]
    pub align: JsonAlign,
    /// Applied in order, each as its own print-mode command.
    #[serde(default)]
    pub styles: Vec<JsonStyle>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonLineFeed {
    #[serde(default = "default_feed_count")]
    pub count: u16,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonBarcode {
    pub data: String,
    #[serde(default)]
    pub kind: JsonBarcodeKind,
    #[serde(default)]
    pub width: JsonBarcodeWidth,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonQrCode {
    pub data: String,
    #[serde(default)]
    pub size: JsonQrSize,
    #[serde(default)]
    pub error_correction: JsonQrErrorCorrection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonStyle {
    None,
    FontB,
    Bold,
    DoubleHeight,
    DoubleWidth,
    Underline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonBarcodeKind {
    UpcA,
    UpcE,
    Ean13,
    Ean8,
    Code39,
    Itf,
    Codabar,
    Code93,
    #[default]
    Code128,
    Gs1_128,
    Gs1DatabarOmnidirectional,
    Gs1DatabarTruncated,
    Gs1DatabarLimited,
    Gs1DatabarExpanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonBarcodeWidth {
    Thinnest,
    Thin,
    #[default]
    Default,
    Thick,
    Thickest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonQrSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonQrErrorCorrection {
    Low,
    #[default]
    Medium,
    Quartile,
    High,
}

// ============================================================================
// SCHEMA → PROTOCOL TYPES
// ============================================================================

impl From<JsonAlign> for Alignment {
    fn from(align: JsonAlign) -> Self {
        match align {
            JsonAlign::Left => Alignment::Left,
            JsonAlign::Center => Alignment::Center,
            JsonAlign::Right => Alignment::Right,
        }
    }
}

impl From<JsonStyle> for PrintStyle {
    fn from(style: JsonStyle) -> Self {
        match style {
            JsonStyle::None => PrintStyle::NONE,
            JsonStyle::FontB => PrintStyle::FONT_B,
            JsonStyle::Bold => PrintStyle::BOLD,
            JsonStyle::DoubleHeight => PrintStyle::DOUBLE_HEIGHT,
            JsonStyle::DoubleWidth => PrintStyle::DOUBLE_WIDTH,
            JsonStyle::Underline => PrintStyle::UNDERLINE,
        }
    }
}

impl From<JsonBarcodeKind> for BarcodeType {
    fn from(kind: JsonBarcodeKind) -> Self {
        match kind {
            JsonBarcodeKind::UpcA => BarcodeType::UpcA,
            JsonBarcodeKind::UpcE => BarcodeType::UpcE,
            JsonBarcodeKind::Ean13 => BarcodeType::Ean13,
            JsonBarcodeKind::Ean8 => BarcodeType::Ean8,
            JsonBarcodeKind::Code39 => BarcodeType::Code39,
            JsonBarcodeKind::Itf => BarcodeType::Itf,
            JsonBarcodeKind::Codabar => BarcodeType::Codabar,
            JsonBarcodeKind::Code93 => BarcodeType::Code93,
            JsonBarcodeKind::Code128 => BarcodeType::Code128,
            JsonBarcodeKind::Gs1_128 => BarcodeType::Gs1_128,
            JsonBarcodeKind::Gs1DatabarOmnidirectional => BarcodeType::Gs1DataBarOmnidirectional,
            JsonBarcodeKind::Gs1DatabarTruncated => BarcodeType::Gs1DataBarTruncated,
            JsonBarcodeKind::Gs1DatabarLimited => BarcodeType::Gs1DataBarLimited,
            JsonBarcodeKind::Gs1DatabarExpanded => BarcodeType::Gs1DataBarExpanded,
        }
    }
}

impl From<JsonBarcodeWidth> for BarcodeWidth {
    fn from(width: JsonBarcodeWidth) -> Self {
        match width {
            JsonBarcodeWidth::Thinnest => BarcodeWidth::Thinnest,
            JsonBarcodeWidth::Thin => BarcodeWidth::Thin,
            JsonBarcodeWidth::Default => BarcodeWidth::Default,
            JsonBarcodeWidth::Thick => BarcodeWidth::Thick,
            JsonBarcodeWidth::Thickest => BarcodeWidth::Thickest,
        }
    }
}

impl From<JsonQrSize> for QrSize {
    fn from(size: JsonQrSize) -> Self {
        match size {
            JsonQrSize::Small => QrSize::Small,
            JsonQrSize::Medium => QrSize::Medium,
            JsonQrSize::Large => QrSize::Large,
            JsonQrSize::ExtraLarge => QrSize::ExtraLarge,
        }
    }
}

impl From<JsonQrErrorCorrection> for QrErrorCorrection {
    fn from(level: JsonQrErrorCorrection) -> Self {
        match level {
            JsonQrErrorCorrection::Low => QrErrorCorrection::Low,
            JsonQrErrorCorrection::Medium => QrErrorCorrection::Medium,
            JsonQrErrorCorrection::Quartile => QrErrorCorrection::Quartile,
            JsonQrErrorCorrection::High => QrErrorCorrection::High,
        }
    }
}
