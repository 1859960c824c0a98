//! Error types for PIPS.

use std::io;

/// Errors produced by the PIPS crates.
#[derive(Debug, thiserror::Error)]
pub enum PipsError {
    /// A widget or configuration could not be built (bad geometry, bad
    /// option list).
    #[error("construction error: {0}")]
    Construction(String),

    /// A selector value could not be read as an integer.
    #[error("parse error: {0}")]
    Parse(String),

    /// A value outside the range a component accepts.
    #[error("value out of range: {0}")]
    OutOfRange(String),

    #[error("SDI error: {0}")]
    Sdi(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PipsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_error_display() {
        let e = PipsError::Construction("width must be positive".into());
        assert_eq!(format!("{e}"), "construction error: width must be positive");
    }

    #[test]
    fn parse_error_display() {
        let e = PipsError::Parse("'six' is not an integer".into());
        assert_eq!(format!("{e}"), "parse error: 'six' is not an integer");
    }

    #[test]
    fn out_of_range_display() {
        let e = PipsError::OutOfRange("die value 0".into());
        assert_eq!(format!("{e}"), "value out of range: die value 0");
    }

    #[test]
    fn sdi_error_display() {
        let e = PipsError::Sdi("object not found".into());
        assert_eq!(format!("{e}"), "SDI error: object not found");
    }

    #[test]
    fn backend_error_display() {
        let e = PipsError::Backend("init failed".into());
        assert_eq!(format!("{e}"), "backend error: init failed");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: PipsError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn error_is_debug() {
        let e = PipsError::Sdi("test".into());
        let dbg = format!("{e:?}");
        assert!(dbg.contains("Sdi"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(PipsError::Parse("oops".into()));
        assert!(r.is_err());
    }
}
