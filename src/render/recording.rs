//! A render engine double that records everything it is asked to do,
//! without touching the filesystem or producing any output bytes.

use super::{RenderEngine, RenderError};
use crate::dom::Document;
use crate::layout::HyphenationCallback;
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct RecordingEngine {
    fonts: Vec<(String, PathBuf)>,
    hyphenation: Option<HyphenationCallback>,
    rendered: Vec<(Document, PathBuf)>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        RecordingEngine::default()
    }

    /// Font registrations, in the order they happened.
    pub fn registered_fonts(&self) -> &[(String, PathBuf)] {
        &self.fonts
    }

    /// Applies the configured hyphenation callback to a word. Before any
    /// callback is installed, words are returned whole.
    pub fn hyphenate(&self, word: &str) -> Vec<String> {
        match &self.hyphenation {
            Some(callback) => callback(word),
            None => vec![word.to_string()],
        }
    }

    pub fn rendered(&self) -> &[(Document, PathBuf)] {
        &self.rendered
    }

    pub fn last_rendered(&self) -> Option<&Document> {
        self.rendered.last().map(|(document, _)| document)
    }
}

impl RenderEngine for RecordingEngine {
    fn register_font(&mut self, family: &str, source: &Path) -> Result<(), RenderError> {
        self.fonts.push((family.to_string(), source.to_path_buf()));
        Ok(())
    }

    fn register_hyphenation_callback(&mut self, callback: HyphenationCallback) {
        self.hyphenation = Some(callback);
    }

    fn render_to_file(&mut self, document: &Document, output: &Path) -> Result<(), RenderError> {
        self.rendered.push((document.clone(), output.to_path_buf()));
        Ok(())
    }
}
