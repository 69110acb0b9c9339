#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! Resident-memory sampling from `/proc/self/status`

use crate::error::{ProfileError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Status file for the calling process
const SELF_STATUS_PATH: &str = "/proc/self/status";

/// Sample the calling process's resident set size (RSS) in bytes.
///
/// Reads the `VmRSS:` field of `/proc/self/status`. The kernel reports the
/// value in kilobytes; it is converted to bytes here so callers deal in a
/// single unit.
///
/// # Errors
///
/// Returns error if:
/// - `/proc/self/status` cannot be opened or read
/// - The `VmRSS:` field is missing
/// - The field value is not a valid integer
pub fn resident_bytes() -> Result<u64> {
    read_status_file(SELF_STATUS_PATH)
}

/// Read the RSS value from a status file (testable against fixtures)
fn read_status_file(path: &str) -> Result<u64> {
    let file = File::open(path)
        .map_err(|e| ProfileError::MemoryReadFailed(format!("failed to open {path}: {e}")))?;

    let reader = BufReader::new(file);

    for line in reader.lines() {
        let line = line
            .map_err(|e| ProfileError::MemoryReadFailed(format!("failed to read line: {e}")))?;

        if let Some(rss_kb) = parse_vmrss_line(&line)? {
            return Ok(rss_kb * 1024);
        }
    }

    Err(ProfileError::MemoryReadFailed(format!(
        "VmRSS not found in {path}"
    )))
}

/// Parse a single status line into an RSS value in kilobytes.
/// Format: "VmRSS:\t   12345 kB"
///
/// Returns None if the line is not the `VmRSS` field
/// Returns error if the field value cannot be parsed
fn parse_vmrss_line(line: &str) -> Result<Option<u64>> {
    if !line.starts_with("VmRSS:") {
        return Ok(None);
    }

    let value = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| ProfileError::MemoryParseFailed(format!("missing value in line: {line}")))?
        .parse::<u64>()
        .map_err(|e| {
            ProfileError::MemoryParseFailed(format!("failed to parse value in '{line}': {e}"))
        })?;

    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_vmrss_line() {
        let parsed = parse_vmrss_line("VmRSS:\t    4096 kB");
        assert!(matches!(parsed, Ok(Some(4096))));
    }

    #[test]
    fn test_parse_ignores_other_fields() {
        assert!(matches!(parse_vmrss_line("VmSize:\t  8192 kB"), Ok(None)));
        assert!(matches!(parse_vmrss_line("Name:\tcallprof"), Ok(None)));
    }

    #[test]
    fn test_parse_malformed_value() {
        let parsed = parse_vmrss_line("VmRSS:\tgarbage kB");
        assert!(matches!(parsed, Err(ProfileError::MemoryParseFailed(_))));
    }

    #[test]
    fn test_parse_missing_value() {
        let parsed = parse_vmrss_line("VmRSS:");
        assert!(matches!(parsed, Err(ProfileError::MemoryParseFailed(_))));
    }

    #[test]
    fn test_read_status_file_converts_to_bytes() {
        let mut temp_file = NamedTempFile::new().ok().filter(|_| true);
        if let Some(ref mut file) = temp_file {
            let content = "Name:\ttest\nVmPeak:\t  9000 kB\nVmRSS:\t   2048 kB\n";
            let _ = write!(file, "{content}");
            let _ = file.flush();

            let path = file.path().to_str().filter(|s| !s.is_empty());
            if let Some(p) = path {
                let rss = read_status_file(p);
                assert!(matches!(rss, Ok(2_097_152)));
            }
        }
    }

    #[test]
    fn test_read_status_file_without_vmrss() {
        let mut temp_file = NamedTempFile::new().ok().filter(|_| true);
        if let Some(ref mut file) = temp_file {
            let _ = write!(file, "Name:\ttest\nVmSize:\t  8192 kB\n");
            let _ = file.flush();

            let path = file.path().to_str().filter(|s| !s.is_empty());
            if let Some(p) = path {
                let rss = read_status_file(p);
                assert!(matches!(rss, Err(ProfileError::MemoryReadFailed(_))));
            }
        }
    }

    #[test]
    fn test_read_status_file_missing() {
        let rss = read_status_file("/nonexistent/status");
        assert!(matches!(rss, Err(ProfileError::MemoryReadFailed(_))));
    }

    #[test]
    fn test_resident_bytes_on_live_process() {
        // /proc is always present on the platforms this crate targets
        let rss = resident_bytes();
        assert!(matches!(rss, Ok(bytes) if bytes > 0));
    }
}
