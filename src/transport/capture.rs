//! In-memory transport.

use super::Transport;
use crate::error::DispatchError;

/// Records every job it is sent instead of printing it.
///
/// ```
/// use posprint::transport::{CaptureTransport, Transport};
///
/// let mut capture = CaptureTransport::new();
/// capture.send(&[0x1B, 0x40])?;
/// assert_eq!(capture.printed(), &[vec![0x1B, 0x40]]);
/// # Ok::<(), posprint::error::DispatchError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CaptureTransport {
    printed: Vec<Vec<u8>>,
}

impl CaptureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jobs received so far, oldest first.
    pub fn printed(&self) -> &[Vec<u8>] {
        &self.printed
    }

    /// The most recent job, if any.
    pub fn last(&self) -> Option<&[u8]> {
        self.printed.last().map(Vec::as_slice)
    }

    pub fn clear(&mut self) {
        self.printed.clear();
    }
}

impl Transport for CaptureTransport {
    fn send(&mut self, data: &[u8]) -> Result<(), DispatchError> {
        self.printed.push(data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_records_in_order() {
        let mut capture = CaptureTransport::new();
        capture.send(b"one").unwrap();
        capture.send(b"two").unwrap();

        assert_eq!(capture.printed(), &[b"one".to_vec(), b"two".to_vec()]);
        assert_eq!(capture.last(), Some(&b"two"[..]));
    }

    #[test]
    fn test_clear() {
        let mut capture = CaptureTransport::new();
        capture.send(b"x").unwrap();
        capture.clear();
        assert!(capture.printed().is_empty());
        assert_eq!(capture.last(), None);
    }
}
