//! # Line Feed Element

use crate::protocol::commands;

/// Blank paper advance of `count` lines.
///
/// ```
/// use posprint::elements::LineFeed;
///
/// assert_eq!(LineFeed::new(3).encode(), vec![0x0A; 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFeed {
    count: u16,
}

impl Default for LineFeed {
    fn default() -> Self {
        Self::new(1)
    }
}

impl LineFeed {
    pub fn new(count: u16) -> Self {
        Self { count }
    }

    pub fn count(&self) -> u16 {
        self.count
    }

    pub fn encode(&self) -> Vec<u8> {
        commands::line_feeds(self.count)
    }
}
