//! File format dispatch and line-ending conventions

use std::path::Path;

use crate::error::{Error, Result};

/// Supported file formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Wavefront OBJ
    Obj,
    /// EMAP map document
    Emap,
}

impl FileFormat {
    /// Pick the format from `path`'s extension (case-insensitive)
    ///
    /// Never touches the filesystem.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

        match extension.as_deref() {
            Some("obj") => Ok(FileFormat::Obj),
            Some("emap") => Ok(FileFormat::Emap),
            Some(other) => Err(Error::Unsupported(format!(
                "'.{}' files are not supported (expected .obj or .emap): {}",
                other,
                path.display()
            ))),
            None => Err(Error::Unsupported(format!(
                "file has no extension (expected .obj or .emap): {}",
                path.display()
            ))),
        }
    }

    /// Canonical extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Obj => "obj",
            FileFormat::Emap => "emap",
        }
    }
}

/// Line terminator of a text document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    #[default]
    CrLf,
}

impl LineEnding {
    /// Detect the convention used by `text`
    ///
    /// Any `\r\n` means CRLF, otherwise any `\n` means LF. Text with neither
    /// is rejected.
    pub fn detect(text: &str) -> Result<Self> {
        if text.contains("\r\n") {
            Ok(LineEnding::CrLf)
        } else if text.contains('\n') {
            Ok(LineEnding::Lf)
        } else {
            Err(Error::invalid_format_context(
                "Line endings",
                "unconventional line endings (neither \\r\\n nor \\n found)",
            ))
        }
    }

    /// The terminator itself
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Width of the terminator in bytes
    pub fn width(&self) -> usize {
        self.as_str().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            FileFormat::from_path(Path::new("level.emap")).unwrap(),
            FileFormat::Emap
        );
        assert_eq!(
            FileFormat::from_path(Path::new("dir/Mesh.OBJ")).unwrap(),
            FileFormat::Obj
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let err = FileFormat::from_path(Path::new("part.stl")).unwrap_err();
        assert!(err.to_string().contains("[E4001]"));
        assert!(err.to_string().contains(".stl"));

        assert!(FileFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_detect_line_endings() {
        assert_eq!(LineEnding::detect("a\r\nb\n").unwrap(), LineEnding::CrLf);
        assert_eq!(LineEnding::detect("a\nb").unwrap(), LineEnding::Lf);
        assert!(LineEnding::detect("Version_1").is_err());
        assert_eq!(LineEnding::CrLf.width(), 2);
        assert_eq!(LineEnding::Lf.width(), 1);
    }
}
