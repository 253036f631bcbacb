//! Error types for `putil_core`.
//!
//! All Rust-side failures are funnelled through [`PlatformUtilError`], which
//! uses `thiserror` for `Display` and `Error` derives.  Note that most
//! failures never cross the channel: the dispatcher in [`crate::plugin`]
//! logs them and answers the masked response the host expects.

use thiserror::Error;

/// Top-level error type for the `putil_core` library.
///
/// Each variant corresponds to a distinct subsystem.
#[derive(Debug, Error)]
pub enum PlatformUtilError {
    /// Method-call payload could not be decoded or encoded.
    #[error("CodecError: {0}")]
    CodecError(String),

    /// Window-system (Win32) call failure.
    #[error("WindowError: {0}")]
    WindowError(String),
}

impl From<serde_json::Error> for PlatformUtilError {
    fn from(err: serde_json::Error) -> Self {
        PlatformUtilError::CodecError(err.to_string())
    }
}

/// Convert a `windows::core::Error` (Win32 failure) into a
/// `PlatformUtilError::WindowError`.
#[cfg(windows)]
impl From<windows::core::Error> for PlatformUtilError {
    fn from(err: windows::core::Error) -> Self {
        PlatformUtilError::WindowError(format!("Win32 error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_error_from_serde() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json");
        let err = PlatformUtilError::from(bad.unwrap_err());
        assert!(err.to_string().starts_with("CodecError:"));
    }

    #[test]
    fn test_window_error_display() {
        let err = PlatformUtilError::WindowError("GetWindowRect failed".into());
        assert_eq!(err.to_string(), "WindowError: GetWindowRect failed");
    }
}
