//! The visual document tree: the in-memory, renderer-independent
//! description of the page that the layout builder produces and the
//! layout engine consumes.

use crate::stylesheet::{ElementStyle, PageLayout};

/// A string type for document content.
pub type TextStr = String;

/// The root of a renderable document: one page of block-level nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Used for PDF metadata.
    pub title: TextStr,
    pub page: PageLayout,
    pub children: Vec<Node>,
}

/// A block-level element in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A vertical stack of children.
    Block {
        style: ElementStyle,
        children: Vec<Node>,
    },
    /// A container laying children out along a main axis.
    Flex {
        style: ElementStyle,
        children: Vec<Node>,
    },
    /// A run of wrappable text.
    Paragraph {
        style: ElementStyle,
        content: TextStr,
    },
    /// An image referenced by asset path. Requires explicit extent.
    Image { style: ElementStyle, src: TextStr },
    /// A filled typographic rule or banner.
    Rule { style: ElementStyle },
}

impl Node {
    pub fn style(&self) -> &ElementStyle {
        match self {
            Node::Block { style, .. } => style,
            Node::Flex { style, .. } => style,
            Node::Paragraph { style, .. } => style,
            Node::Image { style, .. } => style,
            Node::Rule { style } => style,
        }
    }

    /// A string identifier for the node type, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Block { .. } => "block",
            Node::Flex { .. } => "flex",
            Node::Paragraph { .. } => "paragraph",
            Node::Image { .. } => "image",
            Node::Rule { .. } => "rule",
        }
    }
}
