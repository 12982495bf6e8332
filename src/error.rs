//! Error types for OBJ and EMAP conversion
//!
//! Every error carries a code so callers (and users reading the message
//! channel) can tell the failure classes apart at a glance.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O and path errors
//! - **E2xxx**: Document structure errors
//! - **E3xxx**: Value parsing errors
//! - **E4xxx**: Unsupported input
//!
//! ## Error Codes
//!
//! - `E1001`: I/O error reading or writing a file
//! - `E1003`: Missing input or output path
//! - `E2003`: Invalid mesh structure (face arity, point/uv mismatch)
//! - `E2004`: Invalid EMAP document (signature, sections, line endings)
//! - `E3002`: Numeric parse error
//! - `E4001`: Unsupported file format

use std::io;
use thiserror::Error;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The caller asked for something that cannot be done (missing path, unknown extension)
    Usage,
    /// The source data is structurally invalid
    Format,
    /// The filesystem failed underneath us
    Io,
}

/// Errors that can occur while reading or writing OBJ and EMAP files
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading or writing a file
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - File not found
    /// - Insufficient permissions
    /// - Destination directory does not exist
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// No input or output path was given
    ///
    /// **Error Code**: E1003
    #[error("[E1003] Missing path: {0}")]
    MissingPath(String),

    /// Mesh data that parses but does not describe valid geometry
    ///
    /// **Error Code**: E2003
    ///
    /// **Common Causes**:
    /// - Face with fewer than three vertices
    /// - Face vertex with more than three `/`-separated indices
    /// - EMAP face whose `points=` and `uvs=` counts differ
    /// - EMAP brush without a point list or without faces
    #[error("[E2003] Invalid structure: {0}")]
    InvalidStructure(String),

    /// Invalid EMAP document layout
    ///
    /// **Error Code**: E2004
    ///
    /// **Common Causes**:
    /// - Missing `Version_1` signature
    /// - Missing `Brushes{` or `Nodes{` section
    /// - Sections out of their fixed order
    /// - Line endings that are neither `\n` nor `\r\n`
    ///
    /// **Suggestions**:
    /// - Only files saved by the map editor itself can be updated in place
    #[error("[E2004] Invalid EMAP format: {0}")]
    InvalidFormat(String),

    /// Parse error for numeric values
    ///
    /// **Error Code**: E3002
    ///
    /// **Common Causes**:
    /// - Invalid number format
    /// - Locale-specific decimal separators (e.g. "1,5" in a space separated list)
    /// - Too many components for a vector
    #[error("[E3002] Parse error: {0}")]
    ParseError(String),

    /// Unsupported file format
    ///
    /// **Error Code**: E4001
    ///
    /// Only `.obj` and `.emap` files can be read or written.
    #[error("[E4001] Unsupported format: {0}")]
    Unsupported(String),
}

impl Error {
    /// Classify this error as a usage, format or I/O failure
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Io(_) => ErrorCategory::Io,
            Error::MissingPath(_) | Error::Unsupported(_) => ErrorCategory::Usage,
            Error::InvalidStructure(_) | Error::InvalidFormat(_) | Error::ParseError(_) => {
                ErrorCategory::Format
            }
        }
    }

    /// Create an InvalidFormat error with context about which part of the document is invalid
    ///
    /// # Arguments
    /// * `context` - What part of the document is invalid (e.g., "Brushes section")
    /// * `message` - Description of the error
    pub fn invalid_format_context(context: &str, message: &str) -> Self {
        Error::InvalidFormat(format!("{}: {}", context, message))
    }

    /// Create a ParseError with context about what was being parsed
    ///
    /// # Arguments
    /// * `field_name` - The name of the field being parsed (e.g., "face vertex index")
    /// * `value` - The value that failed to parse
    /// * `expected_type` - The expected type (e.g., "integer")
    pub fn parse_error_with_context(field_name: &str, value: &str, expected_type: &str) -> Self {
        Error::ParseError(format!(
            "Failed to parse '{}': expected {}, got '{}'",
            field_name, expected_type, value
        ))
    }

    /// Prefix a format error with the 1-based source line it came from
    ///
    /// I/O and usage errors are returned unchanged.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Error::InvalidStructure(msg) => Error::InvalidStructure(format!("line {}: {}", line, msg)),
            Error::InvalidFormat(msg) => Error::InvalidFormat(format!("line {}: {}", line, msg)),
            Error::ParseError(msg) => Error::ParseError(format!("line {}: {}", line, msg)),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_in_messages() {
        let io_err = Error::Io(io::Error::new(io::ErrorKind::NotFound, "test"));
        assert!(io_err.to_string().contains("[E1001]"));

        let missing = Error::MissingPath("output".to_string());
        assert!(missing.to_string().contains("[E1003]"));

        let structure = Error::InvalidStructure("test".to_string());
        assert!(structure.to_string().contains("[E2003]"));

        let format = Error::InvalidFormat("test".to_string());
        assert!(format.to_string().contains("[E2004]"));

        let parse_err = Error::ParseError("test".to_string());
        assert!(parse_err.to_string().contains("[E3002]"));

        let unsupported = Error::Unsupported(".stl".to_string());
        assert!(unsupported.to_string().contains("[E4001]"));
    }

    #[test]
    fn test_categories() {
        let io_err = Error::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(io_err.category(), ErrorCategory::Io);
        assert_eq!(
            Error::Unsupported(".stl".into()).category(),
            ErrorCategory::Usage
        );
        assert_eq!(
            Error::MissingPath("input".into()).category(),
            ErrorCategory::Usage
        );
        assert_eq!(
            Error::InvalidFormat("x".into()).category(),
            ErrorCategory::Format
        );
        assert_eq!(
            Error::ParseError("x".into()).category(),
            ErrorCategory::Format
        );
    }

    #[test]
    fn test_parse_error_with_context_helper() {
        let err = Error::parse_error_with_context("face vertex index", "abc", "integer");
        assert!(err.to_string().contains("face vertex index"));
        assert!(err.to_string().contains("integer"));
        assert!(err.to_string().contains("'abc'"));
        assert!(err.to_string().contains("[E3002]"));
    }

    #[test]
    fn test_invalid_format_context_helper() {
        let err = Error::invalid_format_context("Brushes section", "missing Nodes{");
        assert!(err.to_string().contains("Brushes section"));
        assert!(err.to_string().contains("missing Nodes{"));
        assert!(err.to_string().contains("[E2004]"));
    }

    #[test]
    fn test_at_line_prefixes_format_errors_only() {
        let err = Error::ParseError("bad".into()).at_line(7);
        assert!(err.to_string().contains("line 7: bad"));

        let err = Error::Unsupported(".stl".into()).at_line(7);
        assert!(!err.to_string().contains("line 7"));
    }
}
