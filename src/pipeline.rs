//! Ties the pieces together: one configured engine, any number of
//! data-to-file renders (in practice exactly one per process).

use crate::data::ResumeData;
use crate::error::PipelineError;
use crate::render::{EngineConfig, RenderEngine};
use crate::template;
use log::{debug, info};
use std::path::Path;

pub struct Pipeline<E: RenderEngine> {
    engine: E,
}

impl<E: RenderEngine> Pipeline<E> {
    /// Applies the engine configuration (fonts, hyphenation policy) as an
    /// explicit, one-time initialization step and returns the ready
    /// pipeline.
    pub fn new(mut engine: E, config: EngineConfig) -> Result<Self, PipelineError> {
        config.apply(&mut engine)?;
        Ok(Pipeline { engine })
    }

    /// Builds the document tree for `data` and renders it to `output`.
    pub fn render_to_file(
        &mut self,
        data: &ResumeData,
        output: &Path,
    ) -> Result<(), PipelineError> {
        info!("building document for '{}'", data.title);
        let document = template::build_document(data)?;
        debug!("document tree has {} top-level nodes", document.children.len());
        self.engine.render_to_file(&document, output)?;
        info!("rendered to {}", output.display());
        Ok(())
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }
}
