//! End-to-end conversion with user-facing reporting
//!
//! [`Converter`] wraps the `Result`-based API in the success/failure shape a
//! front end wants: every outcome is reported through the injected
//! [`MessageSink`] and the call itself only says whether it worked.

use std::path::Path;
use std::sync::Arc;

use crate::config::ConverterConfig;
use crate::error::{Error, ErrorCategory};
use crate::message::{MessageSink, Severity};
use crate::model::{Model, SerializeMode};

/// Reported after an existing EMAP target turned out not to be editable
const FOREIGN_EMAP_NOTE: &str =
    "Couldn't write to existing output file, it was most likely not saved by the map editor itself.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Input,
    Output,
}

/// Reads and writes models, reporting through a [`MessageSink`]
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use emapconv::{Converter, LogSink, SerializeMode};
///
/// let converter = Converter::new(Arc::new(LogSink));
/// if !converter.convert("crate.obj", "level.emap", SerializeMode::Append) {
///     std::process::exit(1);
/// }
/// ```
#[derive(Clone)]
pub struct Converter {
    config: ConverterConfig,
    sink: Arc<dyn MessageSink>,
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Converter {
    /// Create a converter with the default configuration
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self::with_config(ConverterConfig::default(), sink)
    }

    /// Create a converter with a custom configuration
    ///
    /// Warnings raised while reading go to `sink` as well, replacing any
    /// sink already set on `config`.
    pub fn with_config(config: ConverterConfig, sink: Arc<dyn MessageSink>) -> Self {
        Self {
            config: config.with_message_sink(sink.clone()),
            sink,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    fn report(&self, severity: Severity, message: &str) {
        self.sink.message(severity, message);
    }

    fn report_failure(&self, err: &Error, stage: Stage) {
        if err.category() == ErrorCategory::Io {
            let message = match stage {
                Stage::Input => format!("Unhandled input error: {}", err),
                Stage::Output => format!("Unhandled output error: {}", err),
            };
            self.report(Severity::Error, &message);
            return;
        }

        self.report(Severity::Error, &err.to_string());
        match stage {
            Stage::Input => self.report(Severity::Error, "Error parsing input file"),
            Stage::Output => {
                if matches!(err, Error::InvalidFormat(_)) {
                    self.report(Severity::Error, FOREIGN_EMAP_NOTE);
                }
                self.report(Severity::Error, "Error writing output file");
            }
        }
    }

    /// Read a model; `None` after reporting why if it could not be read
    pub fn deserialize<P: AsRef<Path>>(&self, path: P) -> Option<Model> {
        match Model::from_path_with_config(path, &self.config) {
            Ok(model) => Some(model),
            Err(err) => {
                self.report_failure(&err, Stage::Input);
                None
            }
        }
    }

    /// Write a model; `false` after reporting why if it could not be written
    pub fn serialize<P: AsRef<Path>>(&self, model: &Model, path: P, mode: SerializeMode) -> bool {
        match model.write_to_path_with_config(path, mode, &self.config) {
            Ok(()) => true,
            Err(err) => {
                self.report_failure(&err, Stage::Output);
                false
            }
        }
    }

    /// Convert `input` into `output`
    ///
    /// A missing input file or an empty output path is reported as a
    /// warning and nothing is read or written.
    pub fn convert<P, Q>(&self, input: P, output: Q, mode: SerializeMode) -> bool
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let input = input.as_ref();
        let output = output.as_ref();

        if !input.is_file() {
            self.report(Severity::Warning, "Input filepath doesn't exist!");
            return false;
        }

        if output.as_os_str().is_empty() {
            self.report(Severity::Warning, "No output filepath selected!");
            return false;
        }

        self.report(Severity::Info, "Reading input file...");
        let Some(model) = self.deserialize(input) else {
            return false;
        };
        log::debug!(
            "read {} objects ({} faces) from {}",
            model.objects.len(),
            model.face_count(),
            input.display()
        );

        self.report(Severity::Info, "Writing to output file...");
        if !self.serialize(&model, output, mode) {
            return false;
        }

        self.report(Severity::Info, "Conversion success!");
        true
    }
}
