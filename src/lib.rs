//! # emapconv
//!
//! Converts brush geometry between Wavefront OBJ and EMAP map documents.
//!
//! Both formats are read into the same [`Model`]: an ordered list of
//! [`ModelObject`]s, each with its own vertex, texture coordinate and normal
//! pools plus faces and derived edges. Writing an EMAP file that already
//! exists only touches its brush section, leaving every other block
//! byte-identical.
//!
//! ## Features
//!
//! - OBJ `o`/`v`/`vt`/`vn`/`f` subset with per-object index re-basing
//! - EMAP brush import with texture coordinate interning
//! - EMAP export into new documents, or spliced into existing ones
//!   (append or overwrite)
//! - OBJ export, appending to existing files with continued numbering
//! - Atomic file replacement
//!
//! ## Example
//!
//! ```no_run
//! use emapconv::{Model, SerializeMode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let model = Model::from_path("crate.obj")?;
//! println!("Model contains {} objects", model.objects.len());
//!
//! model.write_to_path("level.emap", SerializeMode::Append)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod converter;
pub mod error;
pub mod format;
pub mod message;
pub mod model;
pub mod parser;
pub mod writer;

pub use config::{ConverterConfig, MapProperties};
pub use converter::Converter;
pub use error::{Error, ErrorCategory, Result};
pub use format::{FileFormat, LineEnding};
pub use message::{LogSink, MessageLog, MessageSink, NullSink, Severity};
pub use model::{
    Edge, Face, FaceVertex, IndexOffsets, Model, ModelObject, SerializeMode, Vector, Vector2f,
    Vector3f, Vector4f,
};

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Reject empty paths and unknown extensions before touching the filesystem
fn check_path(path: &Path, role: &str) -> Result<FileFormat> {
    if path.as_os_str().is_empty() {
        return Err(Error::MissingPath(format!("no {} file path given", role)));
    }
    FileFormat::from_path(path)
}

impl Model {
    /// Read a model from an `.obj` or `.emap` file
    ///
    /// The format is chosen by extension. The model's name is the file's
    /// base name.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use emapconv::Model;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let model = Model::from_path("level.emap")?;
    /// for object in model.objects() {
    ///     println!("{}: {} faces", object.name(), object.faces.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_with_config(path, &ConverterConfig::default())
    }

    /// Read a model with custom configuration
    pub fn from_path_with_config<P: AsRef<Path>>(
        path: P,
        config: &ConverterConfig,
    ) -> Result<Self> {
        let path = path.as_ref();
        let format = check_path(path, "input")?;

        let objects = match format {
            FileFormat::Obj => {
                let file = File::open(path)?;
                parser::parse_obj(BufReader::new(file), config)?
            }
            FileFormat::Emap => {
                let text = std::fs::read_to_string(path)?;
                parser::parse_emap(&text)?
            }
        };

        if objects.iter().all(ModelObject::is_empty) {
            config.message_sink().message(
                Severity::Warning,
                &format!("{} contains no geometry", path.display()),
            );
        }

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(name, path, objects))
    }

    /// Parse in-memory text; `name` doubles as the original path
    pub fn parse(name: &str, text: &str, format: FileFormat) -> Result<Self> {
        let objects = parser::parse_str(text, format, &ConverterConfig::default())?;
        Ok(Self::new(name, name, objects))
    }

    /// Write the model to an `.obj` or `.emap` file
    ///
    /// A missing target is created from scratch. An existing one is
    /// appended to or overwritten according to `mode`; for EMAP only the
    /// brush section changes.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P, mode: SerializeMode) -> Result<()> {
        self.write_to_path_with_config(path, mode, &ConverterConfig::default())
    }

    /// Write the model with custom configuration
    pub fn write_to_path_with_config<P: AsRef<Path>>(
        &self,
        path: P,
        mode: SerializeMode,
        config: &ConverterConfig,
    ) -> Result<()> {
        let path = path.as_ref();
        let format = check_path(path, "output")?;

        let needs_existing = format == FileFormat::Emap || mode == SerializeMode::Append;
        let existing = if needs_existing {
            match std::fs::read_to_string(path) {
                Ok(text) => Some(text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => None,
                Err(e) => return Err(e.into()),
            }
        } else {
            None
        };

        let contents = writer::write_model(self, format, existing.as_deref(), mode, config)?;
        writer::write_atomically(path, &contents)
    }
}
