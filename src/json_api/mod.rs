//! # JSON API
//!
//! Deserialize JSON documents into posprint documents.
//!
//! This lets tools that cannot link against the crate (shell scripts, other
//! languages) describe a receipt and hand it to the `posprint` CLI.
//!
//! ## Example
//!
//! ```
//! use posprint::json_api::JsonDocument;
//!
//! let json = r#"{
//!     "elements": [
//!         {"type": "text", "content": "HELLO", "align": "center", "styles": ["bold"]},
//!         {"type": "line_feed", "count": 2},
//!         {"type": "qr_code", "data": "https://example.com"}
//!     ]
//! }"#;
//!
//! let doc: JsonDocument = serde_json::from_str(json).unwrap();
//! let bytes = doc.to_document()?.encode()?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), posprint::error::EncodeError>(())
//! ```

mod convert;
mod schema;

pub use schema::*;
