//! The render engine seam.
//!
//! A render engine takes registered fonts, a hyphenation policy, and a
//! visual document tree, and materializes an output file. The production
//! implementation is [`pdf::PdfEngine`]; [`recording::RecordingEngine`]
//! implements the same contract for tests, so the rest of the system never
//! needs a real PDF backend to be exercised.

pub mod pdf;
pub mod recording;

use crate::dom::Document;
use crate::layout::{HyphenationCallback, LayoutError, no_hyphenation};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse font '{family}' from {path}")]
    FontParse { family: String, path: String },
    #[error("font family '{0}' is not registered with the engine")]
    FontNotRegistered(String),
    #[error("layout failed: {0}")]
    Layout(#[from] LayoutError),
    #[error("image '{src}' could not be decoded: {reason}")]
    ImageDecode { src: String, reason: String },
}

/// The contract a document renderer exposes to the rest of the system.
pub trait RenderEngine {
    /// Registers a font family backed by a font file. Must be called for
    /// every family the document references, before rendering.
    fn register_font(&mut self, family: &str, source: &Path) -> Result<(), RenderError>;

    /// Installs the word-breaking policy used during line layout.
    fn register_hyphenation_callback(&mut self, callback: HyphenationCallback);

    /// Renders a document tree to a file at `output`.
    fn render_to_file(&mut self, document: &Document, output: &Path) -> Result<(), RenderError>;
}

/// A font family and the asset file backing it.
#[derive(Debug, Clone)]
pub struct FontSpec {
    pub family: String,
    pub source: PathBuf,
}

/// Everything an engine needs before its first render: fonts and the
/// hyphenation policy. Applied exactly once, explicitly, so no engine
/// state is configured behind the caller's back.
pub struct EngineConfig {
    pub fonts: Vec<FontSpec>,
    pub hyphenation: HyphenationCallback,
}

impl EngineConfig {
    pub fn new(fonts: Vec<FontSpec>) -> Self {
        EngineConfig {
            fonts,
            hyphenation: no_hyphenation(),
        }
    }

    pub fn with_hyphenation(mut self, callback: HyphenationCallback) -> Self {
        self.hyphenation = callback;
        self
    }

    pub fn apply<E: RenderEngine>(self, engine: &mut E) -> Result<(), RenderError> {
        for font in &self.fonts {
            engine.register_font(&font.family, &font.source)?;
        }
        engine.register_hyphenation_callback(self.hyphenation);
        Ok(())
    }
}
