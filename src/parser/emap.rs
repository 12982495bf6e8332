//! EMAP brush reading
//!
//! An EMAP document is a `Version_1` line followed by brace-delimited
//! top-level blocks in a fixed order: `MapProperties{`, `Layers{`,
//! `Colors{`, `Materials{`, `Brushes{`, `Nodes{`. Only the brush section is
//! read; it is located by its markers rather than by parsing the whole
//! document.

use crate::error::{Error, Result};
use crate::format::LineEnding;
use crate::model::{Face, FaceVertex, ModelObject, Vector3f, Vector4f};

/// First line of every EMAP document
pub const SIGNATURE: &str = "Version_1";
/// Opens the brush section
pub const BRUSHES_HEADER: &str = "Brushes{";
/// Opens the node section, which always follows the brushes
pub const NODES_HEADER: &str = "Nodes{";
/// Opens one brush
pub const BRUSH_HEADER: &str = "Brush{";
/// Opens one face inside a brush
pub const FACE_HEADER: &str = "Face{";

/// Byte range of the brush section inside a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushSection {
    /// Offset just past `Brushes{`
    pub header_end: usize,
    /// Offset of the `}` closing the section
    pub end: usize,
}

/// Reject documents not starting with [`SIGNATURE`]
pub fn validate_signature(text: &str) -> Result<()> {
    if text.starts_with(SIGNATURE) {
        Ok(())
    } else {
        Err(Error::invalid_format_context(
            "Signature",
            "document does not start with Version_1, it was most likely not saved by the map editor",
        ))
    }
}

/// Locate the brush section.
///
/// The section ends at the `}` that sits one line ending before `Nodes{`.
pub fn locate_brush_section(text: &str, line_ending: LineEnding) -> Result<BrushSection> {
    let nodes = text.find(NODES_HEADER).ok_or_else(|| {
        Error::invalid_format_context("Nodes section", "no Nodes{ block found")
    })?;
    let brushes = text.find(BRUSHES_HEADER).ok_or_else(|| {
        Error::invalid_format_context("Brushes section", "no Brushes{ block found")
    })?;
    let header_end = brushes + BRUSHES_HEADER.len();

    let bytes = text.as_bytes();
    let end = nodes
        .checked_sub(line_ending.width() + 1)
        .filter(|&end| end >= header_end)
        .filter(|&end| bytes[end] == b'}')
        .filter(|&end| &bytes[end + 1..nodes] == line_ending.as_str().as_bytes())
        .ok_or_else(|| {
            Error::invalid_format_context(
                "Brushes section",
                "Brushes{ must be closed on the line right before Nodes{",
            )
        })?;

    Ok(BrushSection { header_end, end })
}

/// Split `text` into blocks each starting at `header` and running up to the next one
pub fn split_blocks<'a>(text: &'a str, header: &str) -> Vec<&'a str> {
    let starts: Vec<usize> = text.match_indices(header).map(|(i, _)| i).collect();
    starts
        .iter()
        .enumerate()
        .map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(text.len());
            &text[start..end]
        })
        .collect()
}

/// Value of the first `key=` line in `text`, up to the end of that line
fn find_value<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    text.lines()
        .find_map(|line| line.trim_start().strip_prefix(key))
        .map(str::trim_end)
}

/// Parse a `Face{` block, interning its uvs into `object`'s texture coordinates
///
/// `points=` indexes the brush's own point list directly. `uvs=` holds raw
/// coordinate pairs, one per point.
pub fn parse_face(object: &mut ModelObject, block: &str) -> Result<Face> {
    let points = find_value(block, "points=").ok_or_else(|| {
        Error::InvalidStructure("Trying to parse invalid face (no points= list)".to_string())
    })?;
    let uvs = find_value(block, "uvs=").ok_or_else(|| {
        Error::InvalidStructure("Trying to parse invalid face (no uvs= list)".to_string())
    })?;

    let indices = points
        .split(';')
        .map(|token| {
            token
                .trim()
                .parse::<i64>()
                .map_err(|_| Error::parse_error_with_context("face point index", token, "integer"))
        })
        .collect::<Result<Vec<_>>>()?;

    let coordinates = uvs
        .split(';')
        .map(|token| Vector3f::parse(token, ','))
        .collect::<Result<Vec<_>>>()?;

    if indices.len() != coordinates.len() {
        return Err(Error::InvalidStructure(format!(
            "Face has different amount of points ({}) & uvs ({})",
            indices.len(),
            coordinates.len()
        )));
    }

    let vertices = indices
        .into_iter()
        .zip(coordinates)
        .map(|(index, uv)| {
            let uv_index = object.get_or_add_texture_coordinate(uv) as i64;
            FaceVertex::with_indices(index, Some(uv_index), None)
        })
        .collect();

    Ok(Face::from_vertices(vertices))
}

/// Parse one `Brush{` block
pub fn parse_brush(block: &str, name: impl Into<String>) -> Result<ModelObject> {
    let mut object = ModelObject::new(name);

    let first_face = block.find(FACE_HEADER);
    let header = &block[..first_face.unwrap_or(block.len())];

    if let Some(pos) = find_value(header, "pos=") {
        object.position = Some(Vector3f::parse(pos, ',')?);
    }

    let (Some(points), Some(first_face)) = (find_value(header, "points="), first_face) else {
        return Err(Error::InvalidStructure(format!(
            "Brush '{}': no vertices or no faces found",
            object.name
        )));
    };

    object.vertices = points
        .split(';')
        .map(|token| Vector4f::parse(token, ','))
        .collect::<Result<Vec<_>>>()?;

    for face_block in split_blocks(&block[first_face..], FACE_HEADER) {
        let face = parse_face(&mut object, face_block)?;
        object.faces.push(face);
    }

    object.calculate_edges();
    Ok(object)
}

/// Read every brush from an EMAP document
///
/// Brushes carry no name in the file; they are named `Brush 1`, `Brush 2`, ...
/// in declaration order.
pub fn parse_emap(text: &str) -> Result<Vec<ModelObject>> {
    validate_signature(text)?;
    let line_ending = LineEnding::detect(text)?;
    let section = locate_brush_section(text, line_ending)?;

    split_blocks(&text[section.header_end..section.end], BRUSH_HEADER)
        .into_iter()
        .enumerate()
        .map(|(i, block)| {
            let object = parse_brush(block, format!("Brush {}", i + 1))?;
            log::debug!(
                "Read brush '{}': {} points, {} faces, {} uvs",
                object.name,
                object.vertex_count(),
                object.faces.len(),
                object.texture_coordinate_count()
            );
            Ok(object)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACE: &str = "Face{\nsurf={\nlocalMapping=False\nseed=0\n}\npoints=0;1;2\nuvs=0,0;1,0;1,1\n}\n";

    fn document(brushes: &str) -> String {
        format!(
            "Version_1\nMapProperties{{\nmapTitle=Test\n}}\nLayers{{\n}}\nColors{{\nDefault=1,1,1,1\n}}\nMaterials{{\nBlockout\n}}\nBrushes{{\n{}}}\nNodes{{\n}}\n",
            brushes
        )
    }

    #[test]
    fn test_signature() {
        assert!(validate_signature("Version_1\n").is_ok());
        let err = validate_signature("Version_2\n").unwrap_err();
        assert!(err.to_string().contains("[E2004]"));
    }

    #[test]
    fn test_locate_brush_section() {
        let text = document("");
        let section = locate_brush_section(&text, LineEnding::Lf).unwrap();
        assert_eq!(&text[section.header_end..section.end], "\n");
        assert!(text[section.end..].starts_with("}\nNodes{"));
    }

    #[test]
    fn test_locate_requires_nodes() {
        let text = "Version_1\nBrushes{\n}\n";
        let err = locate_brush_section(text, LineEnding::Lf).unwrap_err();
        assert!(err.to_string().contains("Nodes{"));
    }

    #[test]
    fn test_locate_rejects_nodes_before_brushes() {
        let text = "Version_1\nNodes{\n}\nBrushes{\n}\n";
        assert!(locate_brush_section(text, LineEnding::Lf).is_err());
    }

    #[test]
    fn test_split_blocks() {
        let blocks = split_blocks("Face{a}\nFace{b}\n}", "Face{");
        assert_eq!(blocks, vec!["Face{a}\n", "Face{b}\n}"]);
        assert!(split_blocks("nothing", "Face{").is_empty());
    }

    #[test]
    fn test_parse_face_interns_uvs() {
        let mut object = ModelObject::new("Brush 1");
        let first = parse_face(&mut object, FACE).unwrap();
        let second = parse_face(
            &mut object,
            "Face{\npoints=2;3;0\nuvs=1,1;0.5,0.5;0,0\n}\n",
        )
        .unwrap();

        let uv = |face: &Face| -> Vec<Option<i64>> {
            face.vertices
                .iter()
                .map(|fv| fv.texture_coordinate_index)
                .collect()
        };
        assert_eq!(uv(&first), vec![Some(0), Some(1), Some(2)]);
        assert_eq!(uv(&second), vec![Some(2), Some(3), Some(0)]);
        assert_eq!(object.texture_coordinate_count(), 4);
    }

    #[test]
    fn test_parse_face_count_mismatch() {
        let mut object = ModelObject::new("Brush 1");
        let err = parse_face(&mut object, "Face{\npoints=0;1;2\nuvs=0,0;1,0\n}\n").unwrap_err();
        assert!(err.to_string().contains("different amount"));
    }

    #[test]
    fn test_parse_brush() {
        let block = format!(
            "Brush{{\nparent=-1\nlayer=-1\npos=1,2,3\npoints=0,0,0;1,0,0;1,1,0\nedges=0,1;1,2;2,0\n{}}}\n",
            FACE
        );
        let object = parse_brush(&block, "Brush 1").unwrap();
        assert_eq!(object.position, Some(Vector3f::from([1.0, 2.0, 3.0])));
        assert_eq!(object.vertex_count(), 3);
        assert_eq!(object.faces.len(), 1);
        assert_eq!(object.edges.len(), 3);
    }

    #[test]
    fn test_parse_brush_without_faces() {
        let err = parse_brush("Brush{\npos=0,0,0\npoints=0,0,0\n}\n", "Brush 1").unwrap_err();
        assert!(err.to_string().contains("no vertices or no faces"));
    }

    #[test]
    fn test_parse_emap_document() {
        let brush = format!(
            "Brush{{\nparent=-1\nlayer=-1\npos=0,0,0\npoints=0,0,0;1,0,0;1,1,0\nedges=0,1;1,2;2,0\n{}}}\n",
            FACE
        );
        let text = document(&format!("{}{}", brush, brush));
        let objects = parse_emap(&text).unwrap();
        assert_eq!(objects.len(), 2);
        assert_eq!(objects[0].name, "Brush 1");
        assert_eq!(objects[1].name, "Brush 2");
    }

    #[test]
    fn test_parse_emap_crlf() {
        let brush = format!(
            "Brush{{\nparent=-1\nlayer=-1\npos=0,0,0\npoints=0,0,0;1,0,0;1,1,0\nedges=0,1;1,2;2,0\n{}}}\n",
            FACE
        );
        let text = document(&brush).replace('\n', "\r\n");
        let objects = parse_emap(&text).unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].faces[0].len(), 3);
    }
}
