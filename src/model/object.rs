//! Mesh islands ("brushes" in EMAP terms)

use std::collections::HashSet;

use super::edge::Edge;
use super::face::Face;
use super::vector::{Vector3f, Vector4f};

/// One mesh island with its own 0-based element pools
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelObject {
    /// Object name (`o` line in OBJ; generated for EMAP brushes)
    pub name: String,
    /// Vertex positions
    pub vertices: Vec<Vector4f>,
    /// Texture coordinates
    pub texture_coordinates: Vec<Vector3f>,
    /// Normals
    pub normals: Vec<Vector3f>,
    /// Faces referencing the pools above
    pub faces: Vec<Face>,
    /// Unique face edges, derived by [`ModelObject::calculate_edges`]
    pub edges: Vec<Edge>,
    /// Brush origin, only known when read from EMAP
    pub position: Option<Vector3f>,
}

impl ModelObject {
    /// Create an empty object
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Object name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of texture coordinates
    pub fn texture_coordinate_count(&self) -> usize {
        self.texture_coordinates.len()
    }

    /// Number of normals
    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    /// True when every pool and both face and edge lists are empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
            && self.texture_coordinates.is_empty()
            && self.normals.is_empty()
            && self.faces.is_empty()
            && self.edges.is_empty()
    }

    /// Union every face's boundary edges into [`ModelObject::edges`].
    ///
    /// First-seen order is kept and `(a,b)`/`(b,a)` count once. Calling this
    /// again adds nothing new.
    pub fn calculate_edges(&mut self) {
        let mut seen: HashSet<Edge> = self.edges.iter().copied().collect();
        for face in &self.faces {
            for edge in face.calculate_edges() {
                if seen.insert(edge) {
                    self.edges.push(edge);
                }
            }
        }
    }

    /// Index of `value` in the texture coordinate pool, appending it on a miss
    pub fn get_or_add_texture_coordinate(&mut self, value: Vector3f) -> usize {
        match self.texture_coordinates.iter().position(|tc| *tc == value) {
            Some(index) => index,
            None => {
                self.texture_coordinates.push(value);
                self.texture_coordinates.len() - 1
            }
        }
    }

    /// Vertex translated by the brush origin, stored data left untouched
    pub fn world_vertex(&self, index: usize) -> Option<Vector4f> {
        let vertex = *self.vertices.get(index)?;
        Some(match self.position {
            Some(position) => vertex + position.resized(),
            None => vertex,
        })
    }
}

/// Running totals used to re-base OBJ's file-global indices per object
///
/// OBJ numbers vertices, texture coordinates and normals across the whole
/// file; each object's pools are local, so every object is read and written
/// with the sizes of all objects before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexOffsets {
    /// Vertices preceding the current object
    pub vertices: usize,
    /// Texture coordinates preceding the current object
    pub texture_coordinates: usize,
    /// Normals preceding the current object
    pub normals: usize,
}

impl IndexOffsets {
    /// Create offsets from explicit counts
    pub fn new(vertices: usize, texture_coordinates: usize, normals: usize) -> Self {
        Self {
            vertices,
            texture_coordinates,
            normals,
        }
    }

    /// Offsets for the object following `object`
    pub fn advance(self, object: &ModelObject) -> Self {
        Self {
            vertices: self.vertices + object.vertex_count(),
            texture_coordinates: self.texture_coordinates + object.texture_coordinate_count(),
            normals: self.normals + object.normal_count(),
        }
    }
}
