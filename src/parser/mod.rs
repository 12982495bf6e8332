//! Reading OBJ and EMAP text into model objects

pub mod emap;
pub mod obj;

use std::io::Cursor;

use crate::config::ConverterConfig;
use crate::error::Result;
use crate::format::FileFormat;
use crate::model::ModelObject;

// Re-export the entry points so callers don't need the submodule paths
pub use emap::parse_emap;
pub use obj::parse_obj;

/// Parse in-memory text of the given format
pub fn parse_str(
    text: &str,
    format: FileFormat,
    config: &ConverterConfig,
) -> Result<Vec<ModelObject>> {
    match format {
        FileFormat::Obj => parse_obj(Cursor::new(text), config),
        FileFormat::Emap => parse_emap(text),
    }
}
