//! Wavefront OBJ reading
//!
//! Only the geometry subset is read: `o`, `v`, `vt`, `vn` and `f`. Every
//! other directive (comments, groups, materials, smoothing) is skipped.

use std::io::BufRead;

use crate::config::ConverterConfig;
use crate::error::{Error, Result};
use crate::message::{MessageSink, Severity};
use crate::model::{Face, FaceVertex, IndexOffsets, ModelObject, Vector3f, Vector4f};

/// Convert a 1-based file-global OBJ index into an object-local 0-based one
fn rebase(index: i64, offset: usize) -> i64 {
    index.saturating_sub(1).saturating_sub(offset as i64)
}

/// Parse an optional index; failure only means "absent" and is reported to `sink`
fn parse_optional_index(
    token: &str,
    what: &str,
    face_vertex: &str,
    sink: &dyn MessageSink,
) -> Option<i64> {
    if token.is_empty() {
        return None;
    }
    match token.parse::<i64>() {
        Ok(index) => Some(index),
        Err(_) => {
            sink.message(
                Severity::Warning,
                &format!(
                    "Ignoring invalid {} index '{}' in face vertex '{}'",
                    what, token, face_vertex
                ),
            );
            None
        }
    }
}

/// Parse one `v`, `v/vt`, `v//vn` or `v/vt/vn` token
///
/// An unreadable texture coordinate or normal index leaves that index absent
/// and is reported to `sink` as a warning.
pub fn parse_face_vertex(
    token: &str,
    offsets: IndexOffsets,
    sink: &dyn MessageSink,
) -> Result<FaceVertex> {
    let parts: Vec<&str> = token.split('/').collect();

    if parts.is_empty() || parts.len() > 3 {
        return Err(Error::InvalidStructure(format!(
            "Trying to parse invalid face vertex '{}' (substring count is {})",
            token,
            parts.len()
        )));
    }

    let vertex = parts[0]
        .parse::<i64>()
        .map_err(|_| Error::parse_error_with_context("face vertex index", parts[0], "integer"))?;

    let texture_coordinate = parts
        .get(1)
        .and_then(|part| parse_optional_index(part, "texture coordinate", token, sink))
        .map(|index| rebase(index, offsets.texture_coordinates));

    let normal = parts
        .get(2)
        .and_then(|part| parse_optional_index(part, "normal", token, sink))
        .map(|index| rebase(index, offsets.normals));

    Ok(FaceVertex::with_indices(
        rebase(vertex, offsets.vertices),
        texture_coordinate,
        normal,
    ))
}

/// Parse an `f` line with at least three corners
pub fn parse_face(line: &str, offsets: IndexOffsets, sink: &dyn MessageSink) -> Result<Face> {
    if !line.starts_with('f') {
        return Err(Error::InvalidStructure(
            "Trying to parse invalid face (data doesn't start with f)".to_string(),
        ));
    }

    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() < 4 {
        return Err(Error::InvalidStructure(format!(
            "Trying to parse invalid face (vertex count is less than 3 ({}))",
            tokens.len() - 1
        )));
    }

    let vertices = tokens[1..]
        .iter()
        .map(|token| parse_face_vertex(token, offsets, sink))
        .collect::<Result<Vec<_>>>()?;

    Ok(Face::from_vertices(vertices))
}

/// Apply one OBJ line to `object`
///
/// Lines that are not `v`, `vt`, `vn` or `f` are accepted and ignored.
pub fn parse_object_line(
    object: &mut ModelObject,
    line: &str,
    offsets: IndexOffsets,
    sink: &dyn MessageSink,
) -> Result<()> {
    if let Some(data) = line.strip_prefix("v ") {
        object.vertices.push(Vector4f::parse(data, ' ')?);
    } else if let Some(data) = line.strip_prefix("vt ") {
        object.texture_coordinates.push(Vector3f::parse(data, ' ')?);
    } else if let Some(data) = line.strip_prefix("vn ") {
        object.normals.push(Vector3f::parse(data, ' ')?);
    } else if line.starts_with("f ") {
        object.faces.push(parse_face(line, offsets, sink)?);
    }
    Ok(())
}

/// Push a finished object; returns the offsets for the next one
///
/// An empty object is only dropped when another `o` line follows it
/// (`last == false`). The object that ends the stream is always kept.
fn finish_object(
    objects: &mut Vec<ModelObject>,
    mut object: ModelObject,
    offsets: IndexOffsets,
    last: bool,
) -> IndexOffsets {
    if object.is_empty() && !last {
        log::debug!("Skipping empty object '{}'", object.name);
        return offsets;
    }

    object.calculate_edges();
    log::debug!(
        "Read object '{}': {} vertices, {} faces, {} edges",
        object.name,
        object.vertex_count(),
        object.faces.len(),
        object.edges.len()
    );

    let next = offsets.advance(&object);
    objects.push(object);
    next
}

/// Read every object from an OBJ stream
///
/// An `o <name>` line starts a new object. Geometry before the first `o`
/// line goes into an object named after `config.default_object_name`.
/// Ignored optional indices are reported to `config.message_sink()`.
pub fn parse_obj<R: BufRead>(reader: R, config: &ConverterConfig) -> Result<Vec<ModelObject>> {
    let sink = config.message_sink();
    let mut objects = Vec::new();
    let mut current: Option<ModelObject> = None;
    let mut offsets = IndexOffsets::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();

        if let Some(name) = line.strip_prefix("o ") {
            if let Some(finished) = current.take() {
                offsets = finish_object(&mut objects, finished, offsets, false);
            }
            current = Some(ModelObject::new(name.trim()));
            continue;
        }

        let object = current
            .get_or_insert_with(|| ModelObject::new(config.default_object_name.clone()));
        parse_object_line(object, line, offsets, sink).map_err(|e| e.at_line(line_no + 1))?;
    }

    if let Some(finished) = current.take() {
        finish_object(&mut objects, finished, offsets, true);
    }

    Ok(objects)
}
