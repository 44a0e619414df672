//! `vitae` renders a single structured resume, supplied as a JSON data
//! file, into a print-ready PDF.
//!
//! The system has two halves: a pure layout builder ([`template`]) that
//! maps the [`data::ResumeData`] record onto a fixed visual document tree
//! ([`dom`]), and a render seam ([`render`]) whose production engine lays
//! the tree out ([`layout`]) and writes the PDF. [`pipeline::Pipeline`]
//! wires an explicitly configured engine to the builder; [`cli`] is the
//! driver the binary runs.

pub mod cli;
pub mod data;
pub mod dom;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod render;
pub mod stylesheet;
pub mod template;

pub use data::ResumeData;
pub use error::PipelineError;
pub use pipeline::Pipeline;
pub use render::{EngineConfig, RenderEngine};
