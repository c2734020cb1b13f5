//! # Dispatch Configuration
//!
//! Settings that decide whether and where a finished job is spooled.
//! Nothing in the encoding path reads them; they are passed explicitly to
//! [`crate::transport::dispatch`].

use std::env;
use std::path::PathBuf;

/// Set to `1` or `true` to skip sending jobs to the printer.
pub const ENV_DISABLE_PRINTING: &str = "POSPRINT_DISABLE_PRINTING";

/// Directory for spool files. Defaults to the system temp directory.
pub const ENV_SPOOL_DIR: &str = "POSPRINT_SPOOL_DIR";

/// Dispatch settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Skip encoding and sending entirely.
    pub suppress_printing: bool,
    /// Where spool files are written by a transport built with
    /// [`SpoolTransport::from_config`](crate::transport::SpoolTransport::from_config).
    /// `None` means the temp directory.
    pub spool_dir: Option<PathBuf>,
}

impl DispatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let suppress_printing = lookup(ENV_DISABLE_PRINTING)
            .map(|v| is_truthy(&v))
            .unwrap_or(false);
        let spool_dir = lookup(ENV_SPOOL_DIR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            suppress_printing,
            spool_dir,
        }
    }

    pub fn suppress(mut self, suppress: bool) -> Self {
        self.suppress_printing = suppress;
        self
    }

    pub fn spool_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.spool_dir = Some(dir.into());
        self
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_prints() {
        let config = DispatchConfig::default();
        assert!(!config.suppress_printing);
        assert_eq!(config.spool_dir, None);
    }

    #[test]
    fn test_empty_environment() {
        assert_eq!(
            DispatchConfig::from_lookup(lookup_from(&[])),
            DispatchConfig::default()
        );
    }

    #[test]
    fn test_truthy_values() {
        for value in ["1", "true", "TRUE", " True "] {
            let config = DispatchConfig::from_lookup(lookup_from(&[(ENV_DISABLE_PRINTING, value)]));
            assert!(config.suppress_printing, "value {:?}", value);
        }
        for value in ["0", "false", "yes", ""] {
            let config = DispatchConfig::from_lookup(lookup_from(&[(ENV_DISABLE_PRINTING, value)]));
            assert!(!config.suppress_printing, "value {:?}", value);
        }
    }

    #[test]
    fn test_spool_dir() {
        let config = DispatchConfig::from_lookup(lookup_from(&[(ENV_SPOOL_DIR, "/var/spool/pos")]));
        assert_eq!(config.spool_dir, Some(PathBuf::from("/var/spool/pos")));

        let blank = DispatchConfig::from_lookup(lookup_from(&[(ENV_SPOOL_DIR, "  ")]));
        assert_eq!(blank.spool_dir, None);
    }

    #[test]
    fn test_builder_overrides() {
        let config = DispatchConfig::new().suppress(true).spool_dir("/tmp/x");
        assert!(config.suppress_printing);
        assert_eq!(config.spool_dir, Some(PathBuf::from("/tmp/x")));
        assert!(!config.suppress(false).suppress_printing);
    }
}
