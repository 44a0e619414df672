//! The testable core of the command-line driver. `main` stays a thin shell
//! that maps these results onto stdout/stderr and exit codes.

use crate::data::ResumeData;
use crate::error::PipelineError;
use crate::pipeline::Pipeline;
use crate::render::RenderEngine;
use crate::template;
use std::fs;
use std::path::{Path, PathBuf};

pub const USAGE: &str = "Usage: vitae <path/to/resume.json>";

/// Expects exactly one argument after the program name: the input path.
pub fn parse_args<I>(args: I) -> Result<PathBuf, PipelineError>
where
    I: IntoIterator<Item = String>,
{
    let mut inputs = args.into_iter().skip(1);
    match (inputs.next(), inputs.next()) {
        (Some(path), None) => Ok(PathBuf::from(path)),
        _ => Err(PipelineError::Usage(USAGE.to_string())),
    }
}

/// Reads and parses the input file, renders it with the given engine, and
/// returns the confirmation message for stdout.
///
/// The output path is the data's `pdfFilename`, used verbatim: a relative
/// path lands in the current working directory. Font and icon assets, by
/// contrast, are resolved against `asset_root`.
pub fn run_with_engine<E: RenderEngine>(
    input: &Path,
    engine: E,
    asset_root: &Path,
) -> Result<String, PipelineError> {
    let json = fs::read_to_string(input)?;
    let data = ResumeData::from_json_str(&json)?;

    let mut pipeline = Pipeline::new(engine, template::engine_config(asset_root))?;
    let output = PathBuf::from(&data.pdf_filename);
    pipeline.render_to_file(&data, &output)?;

    Ok(format!("Content rendered to {}", data.pdf_filename))
}
