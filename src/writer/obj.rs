//! Wavefront OBJ writing

use crate::model::{Face, FaceVertex, IndexOffsets, Model, ModelObject};

/// Written in place of a corner whose vertex index is negative
pub const INVALID_FACE_VERTEX: &str = "invalid FaceVertex";

/// Format one corner as `v`, `v/vt`, `v//vn` or `v/vt/vn` (1-based, file-global)
pub fn format_face_vertex(corner: &FaceVertex, offsets: IndexOffsets) -> String {
    if corner.vertex_index < 0 {
        return INVALID_FACE_VERTEX.to_string();
    }

    let vertex = corner
        .vertex_index
        .saturating_add(offsets.vertices as i64)
        .saturating_add(1);
    let texture_coordinate = corner
        .texture_coordinate()
        .map(|index| index.saturating_add(offsets.texture_coordinates + 1));
    let normal = corner
        .normal()
        .map(|index| index.saturating_add(offsets.normals + 1));

    match (texture_coordinate, normal) {
        (None, None) => vertex.to_string(),
        (Some(vt), None) => format!("{}/{}", vertex, vt),
        (None, Some(vn)) => format!("{}//{}", vertex, vn),
        (Some(vt), Some(vn)) => format!("{}/{}/{}", vertex, vt, vn),
    }
}

/// Format an `f` line
pub fn write_face(face: &Face, offsets: IndexOffsets) -> String {
    let mut line = String::from("f");
    for corner in &face.vertices {
        line.push(' ');
        line.push_str(&format_face_vertex(corner, offsets));
    }
    line
}

/// Write one object; vertices are moved by the object's position if it has one
pub fn write_object(object: &ModelObject, offsets: IndexOffsets) -> String {
    let mut out = String::new();

    out.push_str("o ");
    out.push_str(&object.name);
    out.push('\n');

    for index in 0..object.vertex_count() {
        if let Some(vertex) = object.world_vertex(index) {
            out.push_str("v ");
            out.push_str(&vertex.serialize(' '));
            out.push('\n');
        }
    }

    for texture_coordinate in &object.texture_coordinates {
        out.push_str("vt ");
        out.push_str(&texture_coordinate.serialize(' '));
        out.push('\n');
    }

    for normal in &object.normals {
        out.push_str("vn ");
        out.push_str(&normal.serialize(' '));
        out.push('\n');
    }

    for face in &object.faces {
        out.push_str(&write_face(face, offsets));
        out.push('\n');
    }

    out
}

/// Write every object, numbering indices on from `start`
pub fn write_objects(model: &Model, start: IndexOffsets) -> String {
    let mut out = String::new();
    let mut offsets = start;
    for object in &model.objects {
        out.push_str(&write_object(object, offsets));
        out.push('\n');
        offsets = offsets.advance(object);
    }
    out
}

/// Count the `v`, `vt` and `vn` lines already present in an OBJ document
pub fn count_existing_elements(text: &str) -> IndexOffsets {
    let mut offsets = IndexOffsets::default();
    for line in text.lines() {
        if line.starts_with("v ") {
            offsets.vertices += 1;
        } else if line.starts_with("vt ") {
            offsets.texture_coordinates += 1;
        } else if line.starts_with("vn ") {
            offsets.normals += 1;
        }
    }
    offsets
}

/// Write a complete OBJ document, optionally appended to `existing`
///
/// When `existing` is given its text is kept verbatim and the model's
/// indices continue after the elements it already defines.
pub fn write_obj(model: &Model, existing: Option<&str>) -> String {
    let header = format!(
        "# Converted from {}\n",
        model.original_file_path.display()
    );

    match existing {
        None => {
            let mut out = header;
            out.push_str(&write_objects(model, IndexOffsets::default()));
            out
        }
        Some(existing) => {
            let mut out = String::with_capacity(existing.len() + 1024);
            out.push_str(existing);
            if !existing.is_empty() && !existing.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&header);
            out.push_str(&write_objects(model, count_existing_elements(existing)));
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Vector3f, Vector4f};

    fn triangle(name: &str) -> ModelObject {
        let mut object = ModelObject::new(name);
        object.vertices = vec![
            Vector4f::parse("0 0 0", ' ').unwrap(),
            Vector4f::parse("1 0 0", ' ').unwrap(),
            Vector4f::parse("1 1 0", ' ').unwrap(),
        ];
        object.faces.push(Face::from_vertices(vec![
            FaceVertex::new(0),
            FaceVertex::new(1),
            FaceVertex::new(2),
        ]));
        object
    }

    #[test]
    fn test_face_vertex_forms() {
        let offsets = IndexOffsets::default();
        assert_eq!(format_face_vertex(&FaceVertex::new(0), offsets), "1");
        assert_eq!(
            format_face_vertex(&FaceVertex::with_indices(0, Some(1), None), offsets),
            "1/2"
        );
        assert_eq!(
            format_face_vertex(&FaceVertex::with_indices(0, None, Some(2)), offsets),
            "1//3"
        );
        assert_eq!(
            format_face_vertex(&FaceVertex::with_indices(0, Some(1), Some(2)), offsets),
            "1/2/3"
        );
    }

    #[test]
    fn test_face_vertex_offsets_and_invalid() {
        let offsets = IndexOffsets::new(10, 5, 0);
        assert_eq!(
            format_face_vertex(&FaceVertex::with_indices(0, Some(0), None), offsets),
            "11/6"
        );
        assert_eq!(
            format_face_vertex(&FaceVertex::new(-1), offsets),
            INVALID_FACE_VERTEX
        );
    }

    #[test]
    fn test_write_object_applies_position() {
        let mut object = triangle("Brush 1");
        object.position = Some(Vector3f::from([0.0, 0.0, 2.0]));
        let text = write_object(&object, IndexOffsets::default());
        assert!(text.starts_with("o Brush 1\n"));
        assert!(text.contains("v 1 1 2\n"));
        assert!(text.ends_with("f 1 2 3\n"));
    }

    #[test]
    fn test_objects_continue_numbering() {
        let model = Model::new("pair", "pair.obj", vec![triangle("A"), triangle("B")]);
        let text = write_obj(&model, None);
        assert!(text.starts_with("# Converted from pair.obj\n"));
        assert!(text.contains("f 1 2 3\n"));
        assert!(text.contains("f 4 5 6\n"));
    }

    #[test]
    fn test_append_counts_existing_elements() {
        let existing = "o Old\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nf 1/1 2/1 3/1";
        assert_eq!(count_existing_elements(existing), IndexOffsets::new(3, 1, 0));

        let model = Model::new("new", "new.obj", vec![triangle("New")]);
        let text = write_obj(&model, Some(existing));
        assert!(text.starts_with(existing));
        assert!(text.contains("f 1/1 2/1 3/1\n# Converted from new.obj\n"));
        assert!(text.contains("f 4 5 6\n"));
    }
}
