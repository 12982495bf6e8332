//! The converted model and its write modes

use std::path::{Path, PathBuf};

use super::object::ModelObject;

/// How [`Model::write_to_path`](crate::Model::write_to_path) treats an existing target file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SerializeMode {
    /// Keep existing geometry and add the model after it
    #[default]
    Append,
    /// Replace existing geometry (EMAP: only the brush section)
    Overwrite,
}

/// An ordered set of objects read from one source file
///
/// A model is produced once by a read and then inspected or written; object
/// order is declaration order in the source and brush order in EMAP output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    /// Display name, the source file's base name
    pub name: String,
    /// Path the model was read from, cited in converted output
    pub original_file_path: PathBuf,
    /// Objects in declaration order
    pub objects: Vec<ModelObject>,
}

impl Model {
    /// Create a model from already built objects
    pub fn new(
        name: impl Into<String>,
        original_file_path: impl Into<PathBuf>,
        objects: Vec<ModelObject>,
    ) -> Self {
        Self {
            name: name.into(),
            original_file_path: original_file_path.into(),
            objects,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source path
    pub fn original_file_path(&self) -> &Path {
        &self.original_file_path
    }

    /// Objects in declaration order
    pub fn objects(&self) -> &[ModelObject] {
        &self.objects
    }

    /// Total faces across all objects
    pub fn face_count(&self) -> usize {
        self.objects.iter().map(|object| object.faces.len()).sum()
    }
}
