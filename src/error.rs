//! # Error Types
//!
//! Encoding failures and dispatch failures are separate types. An
//! [`EncodeError`] means the document itself is malformed; a
//! [`DispatchError`] means the environment could not deliver valid bytes.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors raised while building or encoding elements.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Data does not fit the length field of its command.
    #[error("{field} length {len} exceeds maximum of {max}")]
    LengthOverflow {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// Required data was empty.
    #[error("{0} data must not be empty")]
    EmptyData(&'static str),

    /// Barcode data contained a byte outside printable ASCII.
    #[error("barcode data has non-printable-ASCII byte 0x{byte:02X} at position {position}")]
    NonAsciiBarcode { position: usize, byte: u8 },
}

/// Errors raised while handing finished bytes to the printer.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No spooler command is known for this operating system.
    #[error("platform '{0}' is not supported")]
    UnsupportedPlatform(String),

    /// The spool file could not be written.
    #[error("failed to write spool file: {0}")]
    Spool(#[source] io::Error),

    /// The spooler process could not be started.
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The spooler process ran but reported failure.
    #[error("'{program}' exited with {status}: {stderr}")]
    Command {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Top-level error type for posprint operations.
#[derive(Debug, Error)]
pub enum PosError {
    /// The document could not be encoded.
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    /// The encoded document could not be delivered.
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// A JSON document could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
