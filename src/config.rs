//! Conversion settings

use std::fmt;
use std::sync::Arc;

use crate::format::LineEnding;
use crate::message::{LogSink, MessageSink};
use crate::model::Vector4f;

/// Name given to geometry that appears before any `o` line
pub const DEFAULT_OBJECT_NAME: &str = "Default Object";

/// Defaults written into the `MapProperties{}` block of a new EMAP document
///
/// Title and description are not configurable here; they always come from
/// the model's name and source path.
#[derive(Debug, Clone, PartialEq)]
pub struct MapProperties {
    /// Whether the map is flagged as a campaign map
    pub is_campaign: bool,
    /// Background music track
    pub music: String,
    /// Lava surface colour (RGBA)
    pub lava_color: Vector4f,
    /// Lava emissive colour (RGBA)
    pub lava_emissive_color: Vector4f,
    /// Water surface colour (RGBA)
    pub water_color: Vector4f,
    /// Water emissive colour (RGBA)
    pub water_emissive_color: Vector4f,
    /// Waste surface colour (RGBA)
    pub waste_color: Vector4f,
    /// Waste emissive colour (RGBA)
    pub waste_emissive_color: Vector4f,
}

impl Default for MapProperties {
    fn default() -> Self {
        Self {
            is_campaign: false,
            music: "Hotspot".to_string(),
            lava_color: Vector4f::from([0.15, 0.1, 0.05, 1.0]),
            lava_emissive_color: Vector4f::from([1.0, 0.35, 0.15, 1.0]),
            water_color: Vector4f::from([0.0, 0.05, 0.15, 1.0]),
            water_emissive_color: Vector4f::from([0.0, 0.0, 0.0, 1.0]),
            waste_color: Vector4f::from([0.05, 0.1, 0.03, 1.0]),
            waste_emissive_color: Vector4f::from([0.2, 1.0, 0.1, 1.0]),
        }
    }
}

/// Configuration for reading and writing models
///
/// # Example
///
/// ```
/// use emapconv::{ConverterConfig, LineEnding};
///
/// let config = ConverterConfig::new()
///     .with_line_ending(LineEnding::Lf)
///     .with_default_object_name("Loose Geometry");
/// assert_eq!(config.line_ending, LineEnding::Lf);
/// ```
#[derive(Clone)]
pub struct ConverterConfig {
    /// Line ending for newly created EMAP documents
    ///
    /// Existing EMAP files keep the line ending they already use.
    pub line_ending: LineEnding,
    /// Name for OBJ geometry that precedes any `o` line
    pub default_object_name: String,
    /// Defaults for a new document's `MapProperties{}` block
    pub map_properties: MapProperties,
    /// Receiver for recoverable conditions found while reading
    ///
    /// `None` forwards them to the `log` facade.
    message_sink: Option<Arc<dyn MessageSink>>,
}

impl fmt::Debug for ConverterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterConfig")
            .field("line_ending", &self.line_ending)
            .field("default_object_name", &self.default_object_name)
            .field("map_properties", &self.map_properties)
            .field("message_sink", &self.message_sink.is_some())
            .finish()
    }
}

impl ConverterConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self {
            line_ending: LineEnding::CrLf,
            default_object_name: DEFAULT_OBJECT_NAME.to_string(),
            map_properties: MapProperties::default(),
            message_sink: None,
        }
    }

    /// Set the line ending for new EMAP documents
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Set the name for geometry outside any `o` group
    pub fn with_default_object_name(mut self, name: impl Into<String>) -> Self {
        self.default_object_name = name.into();
        self
    }

    /// Set the new-document map properties
    pub fn with_map_properties(mut self, map_properties: MapProperties) -> Self {
        self.map_properties = map_properties;
        self
    }

    /// Report warnings to `sink` instead of the `log` facade
    pub fn with_message_sink(mut self, sink: Arc<dyn MessageSink>) -> Self {
        self.message_sink = Some(sink);
        self
    }

    /// Sink for warnings raised while reading
    pub fn message_sink(&self) -> &dyn MessageSink {
        match &self.message_sink {
            Some(sink) => sink.as_ref(),
            None => &LogSink,
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new()
    }
}
