//! Tests for the message-reporting conversion front end

mod common;

use std::sync::{Arc, Mutex};

use common::{BOX_OBJ, TWO_OBJECTS_OBJ, editor_document, write_file};
use emapconv::{Converter, ConverterConfig, LineEnding, MessageLog, SerializeMode, Severity};

/// OBJ to EMAP to OBJ keeps the geometry
#[test]
fn test_convert_both_directions() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "pair.obj", TWO_OBJECTS_OBJ);
    let emap = dir.path().join("pair.emap");
    let back = dir.path().join("back.obj");

    let log = Arc::new(MessageLog::new());
    let converter = Converter::new(log.clone());

    assert!(converter.convert(&input, &emap, SerializeMode::Append));
    assert!(converter.convert(&emap, &back, SerializeMode::Overwrite));
    assert!(!log.has_errors());

    let original = converter.deserialize(&input).unwrap();
    let converted = converter.deserialize(&back).unwrap();
    assert_eq!(converted.objects.len(), 2);
    assert_eq!(converted.objects[0].name(), "Brush 1");
    for (a, b) in original.objects.iter().zip(&converted.objects) {
        assert_eq!(a.vertices, b.vertices);
        let a_points: Vec<Vec<i64>> = a
            .faces
            .iter()
            .map(|f| f.vertices.iter().map(|v| v.vertex_index).collect())
            .collect();
        let b_points: Vec<Vec<i64>> = b
            .faces
            .iter()
            .map(|f| f.vertices.iter().map(|v| v.vertex_index).collect())
            .collect();
        assert_eq!(a_points, b_points);
    }
}

/// Any closure works as a sink
#[test]
fn test_closure_sink_sees_progress() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "box.obj", BOX_OBJ);
    let output = write_file(dir.path(), "foundry.emap", &editor_document("\r\n"));

    let seen: Arc<Mutex<Vec<String>>> = Arc::default();
    let sink = {
        let seen = Arc::clone(&seen);
        move |severity: Severity, message: &str| {
            seen.lock().unwrap().push(format!("{}: {}", severity, message));
        }
    };
    let converter = Converter::new(Arc::new(sink));

    assert!(converter.convert(&input, &output, SerializeMode::Overwrite));
    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            "info: Reading input file...",
            "info: Writing to output file...",
            "info: Conversion success!",
        ]
    );
}

/// Configuration reaches both reading and writing
#[test]
fn test_converter_config() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "loose.obj", "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
    let output = dir.path().join("loose.emap");

    let config = ConverterConfig::new()
        .with_line_ending(LineEnding::Lf)
        .with_default_object_name("Loose");
    let converter = Converter::with_config(config, Arc::new(emapconv::NullSink));

    let model = converter.deserialize(&input).unwrap();
    assert_eq!(model.objects[0].name(), "Loose");

    assert!(converter.serialize(&model, &output, SerializeMode::Append));
    assert!(!std::fs::read_to_string(&output).unwrap().contains('\r'));
}

/// A failed write leaves the previous output in place
#[test]
fn test_failed_conversion_keeps_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "bad.emap", "Version_1\nBrushes{\n}\n");
    let output = write_file(dir.path(), "out.obj", BOX_OBJ);

    let log = Arc::new(MessageLog::new());
    let converter = Converter::new(log.clone());

    assert!(!converter.convert(&input, &output, SerializeMode::Overwrite));
    assert_eq!(
        log.messages(Severity::Error).last().map(String::as_str),
        Some("Error parsing input file")
    );
    assert_eq!(std::fs::read_to_string(&output).unwrap(), BOX_OBJ);
}
