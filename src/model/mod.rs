//! Data structures shared by the OBJ and EMAP codecs

// Declare all submodules
mod core;
mod edge;
mod face;
mod object;
mod vector;

pub use core::{Model, SerializeMode};
pub use edge::Edge;
pub use face::{Face, FaceVertex};
pub use object::{IndexOffsets, ModelObject};
pub use vector::{Vector, Vector2f, Vector3f, Vector4f};
