//! # Printer Transport Layer
//!
//! Backends that take a finished byte buffer and deliver it somewhere.
//!
//! ## Available Transports
//!
//! - [`spool`]: writes a spool file and hands it to the OS print spooler
//! - [`capture`]: records buffers in memory, for tests and previews
//!
//! [`dispatch`] ties a [`Document`], a transport and a [`DispatchConfig`]
//! together and keeps encode failures apart from delivery failures.

pub mod capture;
pub mod spool;

pub use capture::CaptureTransport;
pub use spool::{SpoolTransport, platform_command};

use crate::config::DispatchConfig;
use crate::document::Document;
use crate::error::{DispatchError, PosError};

/// Something that can receive an encoded print job.
pub trait Transport {
    /// Deliver one complete job.
    fn send(&mut self, data: &[u8]) -> Result<(), DispatchError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, data: &[u8]) -> Result<(), DispatchError> {
        (**self).send(data)
    }
}

/// Outcome of [`dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    /// Printing is disabled; nothing was encoded or sent.
    Suppressed,
    /// The job was encoded and handed to the transport.
    Sent { bytes: usize },
}

/// Encode `document` and send it through `transport`.
///
/// When `config.suppress_printing` is set the transport is never touched and
/// the document is not encoded.
pub fn dispatch(
    document: &Document,
    transport: &mut dyn Transport,
    config: &DispatchConfig,
) -> Result<Dispatched, PosError> {
    if config.suppress_printing {
        log::info!("dispatch: printing is disabled, skipping job");
        return Ok(Dispatched::Suppressed);
    }

    let data = document.encode()?;
    transport.send(&data)?;

    log::info!("dispatch: sent {} bytes", data.len());
    Ok(Dispatched::Sent { bytes: data.len() })
}
