//! The top-level error type for the whole render pipeline.

use crate::render::RenderError;
use crate::template::TemplateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{0}")]
    Usage(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("building the document failed: {0}")]
    Template(#[from] TemplateError),

    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
