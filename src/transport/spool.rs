//! # OS Spooler Transport
//!
//! Writes each job to a raw spool file and submits it with the platform's
//! print command:
//!
//! | OS | Command |
//! |----|---------|
//! | Linux, macOS | `lp -d NAME -o raw FILE` |
//! | Windows | `print /D:NAME FILE` |
//!
//! Spool files are named `escpos-<unix millis>-<random>.bin` and created
//! exclusively, so jobs sent within the same millisecond never share a file.
//! The file is left in place after submission; `print` on Windows reads it
//! asynchronously.

use std::env;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::Transport;
use crate::config::DispatchConfig;
use crate::error::DispatchError;

/// Prefix of spool file names.
const SPOOL_PREFIX: &str = "escpos-";

/// Spooler program and arguments for `os` (as in [`std::env::consts::OS`]).
///
/// Returns `None` for operating systems without a known spooler.
///
/// ```
/// use std::path::Path;
/// use posprint::transport::platform_command;
///
/// let (program, args) = platform_command("linux", "TM-T20", Path::new("/tmp/job.bin")).unwrap();
/// assert_eq!(program, "lp");
/// assert_eq!(args, ["-d", "TM-T20", "-o", "raw", "/tmp/job.bin"]);
/// assert!(platform_command("freebsd", "TM-T20", Path::new("/tmp/job.bin")).is_none());
/// ```
pub fn platform_command(
    os: &str,
    printer: &str,
    file: &Path,
) -> Option<(&'static str, Vec<OsString>)> {
    match os {
        "linux" | "macos" => Some((
            "lp",
            vec![
                "-d".into(),
                printer.into(),
                "-o".into(),
                "raw".into(),
                file.into(),
            ],
        )),
        "windows" => Some(("print", vec![format!("/D:{}", printer).into(), file.into()])),
        _ => None,
    }
}

fn is_supported(os: &str) -> bool {
    platform_command(os, "", Path::new("")).is_some()
}

/// Sends jobs to a named printer through the OS spooler.
///
/// ```no_run
/// use posprint::transport::{SpoolTransport, Transport};
///
/// let mut printer = SpoolTransport::new("TM-T20").spool_dir("/var/tmp");
/// printer.send(&[0x1B, 0x40, 0x0A])?;
/// # Ok::<(), posprint::error::DispatchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SpoolTransport {
    printer: String,
    spool_dir: Option<PathBuf>,
    os: &'static str,
}

impl SpoolTransport {
    pub fn new(printer: impl Into<String>) -> Self {
        Self {
            printer: printer.into(),
            spool_dir: None,
            os: env::consts::OS,
        }
    }

    /// Spool transport honoring the settings in `config`.
    ///
    /// ```
    /// use posprint::config::DispatchConfig;
    /// use posprint::transport::SpoolTransport;
    ///
    /// let config = DispatchConfig::new().spool_dir("/var/spool/pos");
    /// let printer = SpoolTransport::from_config("TM-T20", &config);
    /// assert_eq!(printer.spool_directory(), std::path::Path::new("/var/spool/pos"));
    /// ```
    pub fn from_config(printer: impl Into<String>, config: &DispatchConfig) -> Self {
        let transport = Self::new(printer);
        match &config.spool_dir {
            Some(dir) => transport.spool_dir(dir),
            None => transport,
        }
    }

    /// Directory for spool files. Defaults to [`std::env::temp_dir`].
    pub fn spool_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.spool_dir = Some(dir.into());
        self
    }

    /// Pretend to run on another operating system.
    pub fn target_os(mut self, os: &'static str) -> Self {
        self.os = os;
        self
    }

    pub fn printer(&self) -> &str {
        &self.printer
    }

    /// Directory spool files are written to.
    pub fn spool_directory(&self) -> PathBuf {
        self.spool_dir.clone().unwrap_or_else(env::temp_dir)
    }

    /// Write `data` to a fresh spool file and return its path.
    ///
    /// Every call creates a new file; an existing file is never overwritten.
    pub fn write_spool_file(&self, data: &[u8]) -> Result<PathBuf, DispatchError> {
        let millis = chrono::Utc::now().timestamp_millis();
        let mut file = tempfile::Builder::new()
            .prefix(&format!("{}{}-", SPOOL_PREFIX, millis))
            .suffix(".bin")
            .tempfile_in(self.spool_directory())
            .map_err(DispatchError::Spool)?;
        file.write_all(data).map_err(DispatchError::Spool)?;
        file.flush().map_err(DispatchError::Spool)?;

        let (_, path) = file.keep().map_err(|e| DispatchError::Spool(e.error))?;
        log::debug!("spool: wrote {} bytes to {}", data.len(), path.display());
        Ok(path)
    }
}

impl Transport for SpoolTransport {
    fn send(&mut self, data: &[u8]) -> Result<(), DispatchError> {
        // Checked before touching the filesystem.
        if !is_supported(self.os) {
            return Err(DispatchError::UnsupportedPlatform(self.os.to_string()));
        }
        let path = self.write_spool_file(data)?;
        let (program, args) = platform_command(self.os, &self.printer, &path)
            .ok_or_else(|| DispatchError::UnsupportedPlatform(self.os.to_string()))?;

        log::info!("spool: submitting {} to '{}' via {}", path.display(), self.printer, program);

        let output = Command::new(program)
            .args(&args)
            .output()
            .map_err(|source| DispatchError::Launch {
                program: program.to_string(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(DispatchError::Command {
                program: program.to_string(),
                status: output.status,
                stderr,
            });
        }
        if !stderr.is_empty() {
            log::warn!("spool: {} stderr: {}", program, stderr);
        }

        log::info!("spool: printed to '{}'", self.printer);
        Ok(())
    }
}
