//! # ESC/POS Protocol Implementation
//!
//! Low-level command builders for ESC/POS thermal receipt printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Prefix bytes, opcodes and printer control (init, reset, page mode)
//! - [`special_chars`]: `{name}` placeholder substitution table
//! - [`text`]: Alignment, print-mode styles and text content
//! - [`barcode`]: 1D barcodes and QR codes
//!
//! ## Usage Example
//!
//! ```
//! use posprint::protocol::{commands, text};
//! use posprint::protocol::text::{Alignment, PrintStyle};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::encode_text("RECEIPT", &[PrintStyle::BOLD], Alignment::Center));
//! data.extend(commands::line_feeds(3));
//!
//! // Hand `data` to a transport...
//! ```

pub mod barcode;
pub mod commands;
pub mod special_chars;
pub mod text;
