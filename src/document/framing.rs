//! # Document Framing
//!
//! The bytes a document puts before and after its elements.
//!
//! Two named policies are provided:
//!
//! | Policy | Before elements | After elements |
//! |--------|-----------------|----------------|
//! | [`Framing::plain`] | `ESC @` | nothing |
//! | [`Framing::extended`] | `ESC @`, `ESC U 1`, `GS r 1`, `ESC L`, leader line | `FF`, `ESC U 0`, `ESC B` |
//!
//! Printers differ in whether they need the extended sequence, so the choice
//! is left to the caller. Every part of it can also be toggled on its own.

use crate::protocol::{commands, text};

/// Leader printed by [`Framing::extended`] before the first element.
pub const DEFAULT_LEADER: &str = " ";

/// Status request parameter: paper sensor status.
const STATUS_PAPER_SENSOR: u8 = 1;

/// Framing policy for a document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Framing {
    /// Switch to unidirectional printing for the job, back to
    /// bidirectional at the end.
    pub unidirectional: bool,
    /// Send a paper-sensor status request after initialization.
    pub status_request: bool,
    /// Compose the job in page mode and print it with `FF` at the end.
    pub page_mode: bool,
    /// Filler text printed as its own line before the first element.
    pub leader: Option<String>,
    /// Send a printer reset after everything else.
    pub reset: bool,
}

impl Framing {
    /// Initialize only.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Initialize plus every optional framing command.
    pub fn extended() -> Self {
        Self {
            unidirectional: true,
            status_request: true,
            page_mode: true,
            leader: Some(DEFAULT_LEADER.to_string()),
            reset: true,
        }
    }

    /// Whether this policy adds nothing beyond initialization.
    pub fn is_plain(&self) -> bool {
        *self == Self::plain()
    }

    /// Bytes sent before the first element.
    pub fn prologue(&self) -> Vec<u8> {
        let mut out = commands::init();
        if self.unidirectional {
            out.extend(commands::unidirectional(true));
        }
        if self.status_request {
            out.extend(commands::status_request(STATUS_PAPER_SENSOR));
        }
        if self.page_mode {
            out.extend(commands::page_mode());
        }
        if let Some(leader) = &self.leader {
            out.extend(text::encode_content(leader));
            out.push(commands::LF);
        }
        out
    }

    /// Bytes sent after the last element.
    pub fn epilogue(&self) -> Vec<u8> {
        let mut out = Vec::new();
        if self.page_mode {
            out.extend(commands::print_page());
        }
        if self.unidirectional {
            out.extend(commands::unidirectional(false));
        }
        if self.reset {
            out.extend(commands::printer_reset());
        }
        out
    }
}
