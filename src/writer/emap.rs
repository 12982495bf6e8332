//! EMAP writing and in-place brush section updates
//!
//! A new file gets a complete default document. An existing file keeps
//! every byte outside the brush section; only the brushes between
//! `Brushes{` and its closing brace are replaced or extended.

use crate::config::{ConverterConfig, MapProperties};
use crate::error::Result;
use crate::format::LineEnding;
use crate::model::{Face, Model, ModelObject, SerializeMode, Vector3f};
use crate::parser::emap::{BRUSHES_HEADER, NODES_HEADER, SIGNATURE};
use crate::parser::emap::{locate_brush_section, validate_signature};

/// Line-oriented text builder with a fixed terminator
struct Lines {
    out: String,
    line_ending: LineEnding,
}

impl Lines {
    fn new(line_ending: LineEnding) -> Self {
        Self {
            out: String::new(),
            line_ending,
        }
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push_str(self.line_ending.as_str());
    }

    fn key(&mut self, key: &str, value: impl std::fmt::Display) {
        self.line(&format!("{}={}", key, value));
    }

    fn raw(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn finish(self) -> String {
        self.out
    }
}

fn emap_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Write one `Face{` block and advance `seed`
///
/// Corners without a texture coordinate (or a model without any) get `0,0`.
pub fn write_face(
    face: &Face,
    seed: &mut u32,
    texture_coordinates: &[Vector3f],
    line_ending: LineEnding,
) -> String {
    let mut lines = Lines::new(line_ending);

    lines.line("Face{");
    lines.line("surf={");
    lines.key("localMapping", emap_bool(false));
    lines.key("mappingType", 5);
    lines.key("material", 0);
    lines.key("color", 0);
    lines.key("colorEmissive", 0);
    lines.key("seed", *seed);
    lines.key("halfRes", emap_bool(false));
    lines.key("uvScaleBias", "1,1,0,0");
    lines.key("uvScroll", "0,0");
    lines.key("localOffset", "0,0,0");
    lines.key("worldOffset", "0,0,0");
    lines.line("}");

    let points: Vec<String> = face
        .vertices
        .iter()
        .map(|corner| corner.vertex_index.to_string())
        .collect();
    lines.key("points", points.join(";"));

    let uvs: Vec<String> = face
        .vertices
        .iter()
        .map(|corner| {
            corner
                .texture_coordinate()
                .and_then(|index| texture_coordinates.get(index))
                .map(|uv| uv.serialize(','))
                .unwrap_or_else(|| "0,0".to_string())
        })
        .collect();
    lines.key("uvs", uvs.join(";"));

    lines.line("}");

    *seed += 1;
    lines.finish()
}

/// Write one `Brush{` block; `seed` carries on across faces
pub fn write_brush(object: &ModelObject, seed: &mut u32, line_ending: LineEnding) -> String {
    let mut lines = Lines::new(line_ending);

    lines.line("Brush{");
    lines.key("parent", -1);
    lines.key("layer", -1);
    let position = object
        .position
        .unwrap_or_else(|| Vector3f::from([0.0, 0.0, 0.0]));
    lines.key("pos", position.serialize(','));

    let points: Vec<String> = object
        .vertices
        .iter()
        .map(|vertex| vertex.serialize(','))
        .collect();
    lines.key("points", points.join(";"));

    let edges: Vec<String> = object.edges.iter().map(|edge| edge.serialize_emap()).collect();
    lines.key("edges", edges.join(";"));

    for face in &object.faces {
        lines.raw(&write_face(face, seed, &object.texture_coordinates, line_ending));
    }

    lines.line("}");
    lines.finish()
}

/// Write every object as a brush, one seed shared across all faces
pub fn write_brushes(model: &Model, line_ending: LineEnding) -> String {
    let mut seed = 0;
    model
        .objects
        .iter()
        .map(|object| write_brush(object, &mut seed, line_ending))
        .collect()
}

fn write_map_properties(lines: &mut Lines, model: &Model, props: &MapProperties) {
    lines.line("MapProperties{");
    lines.key("mapID", "");
    lines.key("mapTitle", &model.name);
    lines.key(
        "mapDescription",
        format!("Converted from {}", model.original_file_path.display()),
    );
    lines.key("mapTags", "");
    lines.key("isCampaign", emap_bool(props.is_campaign));
    lines.key("mapRunes", "");
    lines.key("mapWeapons", "");
    lines.key("mapEnemyCount", 0);
    lines.key("music", &props.music);
    lines.key("lavaColor", props.lava_color.serialize(','));
    lines.key("lavaEmissiveColor", props.lava_emissive_color.serialize(','));
    lines.key("waterColor", props.water_color.serialize(','));
    lines.key("waterEmissiveColor", props.water_emissive_color.serialize(','));
    lines.key("wasteColor", props.waste_color.serialize(','));
    lines.key("wasteEmissiveColor", props.waste_emissive_color.serialize(','));
    lines.line("}");
}

/// Write a complete new EMAP document around the model's brushes
pub fn write_document(model: &Model, config: &ConverterConfig) -> String {
    let line_ending = config.line_ending;
    let mut lines = Lines::new(line_ending);

    lines.line(SIGNATURE);
    write_map_properties(&mut lines, model, &config.map_properties);

    lines.line("Layers{");
    lines.line("}");

    lines.line("Colors{");
    lines.line("Default=1,1,1,1");
    lines.line("}");

    lines.line("Materials{");
    lines.line("Blockout");
    lines.line("}");

    lines.line(BRUSHES_HEADER);
    lines.raw(&write_brushes(model, line_ending));
    lines.line("}");

    lines.line(NODES_HEADER);
    lines.line("}");

    lines.finish()
}

/// Rewrite the brush section of an existing document
///
/// `Overwrite` replaces the existing brushes, `Append` keeps them and adds
/// the model's brushes after the last one. Everything outside the section
/// is copied byte for byte, and the new brushes use the document's own
/// line ending.
pub fn splice_brushes(existing: &str, model: &Model, mode: SerializeMode) -> Result<String> {
    validate_signature(existing)?;
    let line_ending = LineEnding::detect(existing)?;
    let section = locate_brush_section(existing, line_ending)?;

    let brushes = write_brushes(model, line_ending);
    let suffix = &existing[section.end..];

    let mut out = String::with_capacity(existing.len() + brushes.len() + line_ending.width());
    match mode {
        SerializeMode::Overwrite => {
            out.push_str(&existing[..section.header_end]);
            out.push_str(line_ending.as_str());
        }
        SerializeMode::Append => out.push_str(&existing[..section.end]),
    }
    out.push_str(&brushes);
    out.push_str(suffix);

    Ok(out)
}
