//! The layout engine and the positioning pass entry point.

use super::LayoutError;
use super::block;
use super::elements::PositionedElement;
use super::flex;
use super::style::{ComputedStyle, compute_style, default_style};
use super::text;
use crate::dom::{Document, Node};
use crate::stylesheet::Dimension;
use log::warn;

/// Maps a word to the sequence of fragments it may be broken into at line
/// ends. Returning the word as a one-element sequence disables breaking
/// for that word entirely.
pub type HyphenationCallback = Box<dyn Fn(&str) -> Vec<String> + Send + Sync>;

/// The callback that disables hyphenation: every word stays whole.
pub fn no_hyphenation() -> HyphenationCallback {
    Box::new(|word| vec![word.to_string()])
}

/// A single laid-out page of positioned elements.
pub struct Page {
    pub width: f32,
    pub height: f32,
    pub elements: Vec<PositionedElement>,
}

/// Centralizes text measurement, hyphenation policy, and the positioning
/// pass over a document tree.
pub struct LayoutEngine {
    hyphenation: HyphenationCallback,
}

impl LayoutEngine {
    pub fn new() -> Self {
        LayoutEngine {
            hyphenation: no_hyphenation(),
        }
    }

    pub fn set_hyphenation_callback(&mut self, callback: HyphenationCallback) {
        self.hyphenation = callback;
    }

    /// Applies the configured hyphenation policy to a single word.
    pub fn hyphenate(&self, word: &str) -> Vec<String> {
        let fragments = (self.hyphenation)(word);
        if fragments.is_empty() {
            vec![word.to_string()]
        } else {
            fragments
        }
    }

    /// Measures the width of a text string based on its style.
    /// This is an average-advance approximation; a shaping library would
    /// be needed for exact metrics.
    pub fn measure_text_width(&self, text: &str, style: &ComputedStyle) -> f32 {
        let char_width = style.font_size * 0.6;
        text.chars().count() as f32 * char_width
    }

    /// Positions the whole document onto a single page.
    ///
    /// There is no pagination: content taller than the page is still laid
    /// out and a warning is logged.
    pub fn layout_document(&self, document: &Document) -> Result<Page, LayoutError> {
        let (page_width, page_height) = document.page.size.dimensions_pt();
        let margins = &document.page.margins;
        let content_width = page_width - margins.left - margins.right;

        let root_style = default_style();
        let mut elements = Vec::new();
        let mut current_y = margins.top;

        for child in &document.children {
            let (mut child_elements, child_height) =
                layout_node(self, child, &root_style, content_width)?;
            for el in &mut child_elements {
                el.x += margins.left;
                el.y += current_y;
            }
            elements.extend(child_elements);
            current_y += child_height;
        }

        if current_y > page_height - margins.bottom {
            warn!(
                "content height {:.1}pt exceeds the single page ({:.1}pt of room)",
                current_y - margins.top,
                page_height - margins.top - margins.bottom
            );
        }

        Ok(Page {
            width: page_width,
            height: page_height,
            elements,
        })
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        LayoutEngine::new()
    }
}

/// Lays out one node into elements positioned relative to the node's
/// margin-box origin. Returns the elements and the total height consumed,
/// including the node's own vertical margins.
pub(super) fn layout_node(
    engine: &LayoutEngine,
    node: &Node,
    parent_style: &ComputedStyle,
    available_width: f32,
) -> Result<(Vec<PositionedElement>, f32), LayoutError> {
    let style = compute_style(node.style(), parent_style);
    match node {
        Node::Block { children, .. } => {
            block::layout_block(engine, node.style(), children, &style, available_width)
        }
        Node::Flex { children, .. } => {
            flex::layout_flex(engine, node.style(), children, &style, available_width)
        }
        Node::Paragraph { content, .. } => Ok(text::layout_paragraph(
            engine,
            content,
            node.style(),
            &style,
            available_width,
        )),
        Node::Image { src, .. } => block::layout_image(src, node.style(), &style),
        Node::Rule { .. } => Ok(block::layout_rule(node.style(), &style, available_width)),
    }
}

/// Resolves an optional dimension against the available extent.
pub(super) fn resolve_dimension(dimension: Option<&Dimension>, available: f32) -> f32 {
    match dimension {
        Some(Dimension::Pt(value)) => *value,
        Some(Dimension::Percent(percent)) => available * (percent / 100.0),
        Some(Dimension::Auto) | None => available,
    }
}
