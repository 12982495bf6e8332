//! OBJ / EMAP converter
//!
//! Converts brush geometry between Wavefront OBJ files and EMAP map
//! documents using the emapconv library. Writing into an existing EMAP
//! only replaces (or extends) its brush section.
//!
//! Progress and failures are reported through `log`; set `RUST_LOG` to
//! change verbosity (default `info`).

#![forbid(unsafe_code)]

use clap::{Parser, ValueEnum};
use emapconv::{Converter, ConverterConfig, LineEnding, LogSink, Model, SerializeMode};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Line ending choices for new EMAP documents
#[derive(ValueEnum, Clone, Copy, Debug)]
enum LineEndingArg {
    Lf,
    Crlf,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Crlf => LineEnding::CrLf,
        }
    }
}

/// Command-line arguments for the converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to read (.obj or .emap)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// File to write (.obj or .emap)
    #[arg(value_name = "OUTPUT", required_unless_present = "info")]
    output: Option<PathBuf>,

    /// Replace existing geometry instead of appending to it
    #[arg(long)]
    overwrite: bool,

    /// Line ending for newly created EMAP files
    #[arg(long, value_enum, default_value_t = LineEndingArg::Crlf)]
    line_ending: LineEndingArg,

    /// Print a summary of the input and exit
    #[arg(long)]
    info: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = ConverterConfig::new().with_line_ending(args.line_ending.into());
    let converter = Converter::with_config(config, Arc::new(LogSink));

    if args.info {
        return match converter.deserialize(&args.input) {
            Some(model) => {
                display_summary(&model);
                ExitCode::SUCCESS
            }
            None => ExitCode::FAILURE,
        };
    }

    let Some(output) = args.output else {
        log::error!("No output filepath selected!");
        return ExitCode::FAILURE;
    };

    let mode = if args.overwrite {
        SerializeMode::Overwrite
    } else {
        SerializeMode::Append
    };

    if converter.convert(&args.input, &output, mode) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Print per-object counts
fn display_summary(model: &Model) {
    println!("┌─ {} ", model.name());
    println!("│ Source:   {}", model.original_file_path().display());
    println!("│ Objects:  {}", model.objects().len());
    println!("│ Faces:    {}", model.face_count());
    println!("├────────────────────────────────────────────────────────");
    println!(
        "│ {:<24} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "Name", "Verts", "UVs", "Normals", "Faces", "Edges"
    );
    for object in model.objects() {
        println!(
            "│ {:<24} {:>8} {:>8} {:>8} {:>8} {:>8}",
            object.name(),
            object.vertex_count(),
            object.texture_coordinate_count(),
            object.normal_count(),
            object.faces.len(),
            object.edges.len()
        );
    }
    println!("└────────────────────────────────────────────────────────");
}
