//! Serializing models to OBJ and EMAP text

pub mod emap;
pub mod obj;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::config::ConverterConfig;
use crate::error::{Error, Result};
use crate::format::FileFormat;
use crate::model::{Model, SerializeMode};

/// Build the full output text for `model`
///
/// `existing` is the current content of the target file, if there is one.
/// Overwriting an OBJ ignores it; overwriting an EMAP still needs it so
/// the non-brush sections survive.
pub fn write_model(
    model: &Model,
    format: FileFormat,
    existing: Option<&str>,
    mode: SerializeMode,
    config: &ConverterConfig,
) -> Result<String> {
    match (format, existing) {
        (FileFormat::Obj, Some(existing)) if mode == SerializeMode::Append => {
            Ok(obj::write_obj(model, Some(existing)))
        }
        (FileFormat::Obj, _) => Ok(obj::write_obj(model, None)),
        (FileFormat::Emap, Some(existing)) => emap::splice_brushes(existing, model, mode),
        (FileFormat::Emap, None) => Ok(emap::write_document(model, config)),
    }
}

/// Replace `path` with `contents` in one step
///
/// The text goes to a temporary file in the destination directory which is
/// then renamed over the target, so a failed write leaves the old file intact.
/// A replaced file keeps its permissions. A new file gets the permissions a
/// plain create would give it.
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    let mut file = create_temp_file(dir)?;
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    if let Some(permissions) = existing {
        file.as_file().set_permissions(permissions)?;
    }
    file.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

/// Temporary file whose mode follows the process umask instead of 0600
#[cfg(unix)]
fn create_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn create_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}
