//! Polygon faces and their vertex references

use super::edge::Edge;

/// One corner of a face: indices into the owning object's pools
///
/// Indices are 0-based and local to the object. The vertex index is signed
/// because an OBJ reference into an earlier object re-bases to a negative
/// value; such a corner is written out as an error marker instead of failing
/// the whole export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceVertex {
    /// Index into the object's vertices
    pub vertex_index: i64,
    /// Index into the object's texture coordinates
    pub texture_coordinate_index: Option<i64>,
    /// Index into the object's normals
    pub normal_index: Option<i64>,
}

impl FaceVertex {
    /// Corner with a vertex only
    pub fn new(vertex_index: i64) -> Self {
        Self {
            vertex_index,
            texture_coordinate_index: None,
            normal_index: None,
        }
    }

    /// Corner with every index given
    pub fn with_indices(
        vertex_index: i64,
        texture_coordinate_index: Option<i64>,
        normal_index: Option<i64>,
    ) -> Self {
        Self {
            vertex_index,
            texture_coordinate_index,
            normal_index,
        }
    }

    /// Texture coordinate index, if present and non-negative
    pub fn texture_coordinate(&self) -> Option<usize> {
        self.texture_coordinate_index
            .and_then(|index| usize::try_from(index).ok())
    }

    /// Normal index, if present and non-negative
    pub fn normal(&self) -> Option<usize> {
        self.normal_index.and_then(|index| usize::try_from(index).ok())
    }
}

/// A polygon, winding order kept exactly as read
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Face {
    /// Corners in winding order
    pub vertices: Vec<FaceVertex>,
}

impl Face {
    /// Create an empty face
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a face from its corners
    pub fn from_vertices(vertices: Vec<FaceVertex>) -> Self {
        Self { vertices }
    }

    /// Number of corners
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when the face has no corners
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Boundary edges `(v0,v1), (v1,v2) ... (vN-1,v0)`, one per corner
    pub fn calculate_edges(&self) -> Vec<Edge> {
        let count = self.vertices.len();
        (0..count)
            .map(|i| {
                Edge::new(
                    self.vertices[i].vertex_index,
                    self.vertices[(i + 1) % count].vertex_index,
                )
            })
            .collect()
    }
}
