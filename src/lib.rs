//! # posprint - ESC/POS Receipt Documents
//!
//! posprint composes receipts from text, line feeds, 1D barcodes and QR
//! codes, and encodes them into the byte stream an ESC/POS thermal printer
//! consumes. It provides:
//!
//! - **Protocol implementation**: ESC/POS command builders
//! - **Elements**: validated, immutable printable units
//! - **Documents**: ordered element lists with a framing policy
//! - **Transport**: OS spooler hand-off and an in-memory capture
//!
//! ## Quick Start
//!
//! ```
//! use posprint::{
//!     config::DispatchConfig,
//!     elements::{BarcodeBuilder, BarcodeType},
//!     receipt::ReceiptBuilder,
//!     transport::{CaptureTransport, Dispatched, dispatch},
//! };
//!
//! let barcode = BarcodeBuilder::new("4006381333931")
//!     .kind(BarcodeType::Ean13)
//!     .build()?;
//!
//! let doc = ReceiptBuilder::new()
//!     .title("CHURRA MART")
//!     .item("Espresso", 2.5)
//!     .item("Croissant {euro}", 1.8)
//!     .element(barcode)
//!     .footer("Thank you!")
//!     .build();
//!
//! let mut printer = CaptureTransport::new();
//! let outcome = dispatch(&doc, &mut printer, &DispatchConfig::default())?;
//! assert!(matches!(outcome, Dispatched::Sent { .. }));
//! # Ok::<(), posprint::PosError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`elements`] | Text, line feed, barcode and QR elements |
//! | [`document`] | Element aggregation and framing |
//! | [`receipt`] | Fluent receipt layout helper |
//! | [`json_api`] | JSON document format |
//! | [`transport`] | Delivery backends and dispatch |
//! | [`config`] | Dispatch settings |
//! | [`error`] | Error types |

pub mod config;
pub mod document;
pub mod elements;
pub mod error;
pub mod json_api;
pub mod protocol;
pub mod receipt;
pub mod transport;

// Re-exports for convenience
pub use config::DispatchConfig;
pub use document::{Document, Framing};
pub use elements::Element;
pub use error::{DispatchError, EncodeError, PosError};
pub use receipt::ReceiptBuilder;
pub use transport::{CaptureTransport, SpoolTransport, Transport, dispatch};
