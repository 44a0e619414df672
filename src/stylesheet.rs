//! Style primitives for the resume document: page geometry, colors, fonts,
//! and the per-node style overrides consumed by the layout engine.
//!
//! All styles in this crate are fixed constants built in code by the
//! template module; nothing here is parsed from user input.

/// Physical page description for a document.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub size: PageSize,
    pub margins: Margins,
}

impl Default for PageLayout {
    fn default() -> Self {
        PageLayout {
            size: PageSize::A4,
            margins: Margins::all(10.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom {
        width: f32,
        height: f32,
    },
}

impl PageSize {
    /// Page dimensions in PDF points (1/72 inch).
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Horizontal-only margins.
    pub fn x(value: f32) -> Self {
        Margins {
            top: 0.0,
            right: value,
            bottom: 0.0,
            left: value,
        }
    }

    /// Vertical-only margins.
    pub fn y(value: f32) -> Self {
        Margins {
            top: value,
            right: 0.0,
            bottom: value,
            left: 0.0,
        }
    }
}

/// A horizontal or vertical extent.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dimension {
    Pt(f32),
    Percent(f32),
    #[default]
    Auto,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 1.0,
    };

    pub fn gray(value: u8) -> Self {
        Color {
            r: value,
            g: value,
            b: value,
            a: 1.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
}

/// Cross-axis alignment of flex children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
}

/// Style overrides attached to a single node in the document tree.
///
/// Unset fields fall back to the inherited computed style (for text
/// properties) or to zero/auto (for box properties).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub line_height: Option<f32>,
    pub text_align: Option<TextAlign>,
    pub color: Option<Color>,
    pub background_color: Option<Color>,
    pub margin: Option<Margins>,
    pub padding: Option<Margins>,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub flex_direction: Option<FlexDirection>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub flex_grow: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_dimensions_are_us_letter_points() {
        let (w, h) = PageSize::Letter.dimensions_pt();
        assert_eq!(w, 612.0);
        assert_eq!(h, 792.0);
    }

    #[test]
    fn margins_shorthands() {
        assert_eq!(Margins::all(4.0).left, 4.0);
        assert_eq!(Margins::x(4.0).top, 0.0);
        assert_eq!(Margins::x(4.0).right, 4.0);
        assert_eq!(Margins::y(2.0).bottom, 2.0);
        assert_eq!(Margins::y(2.0).left, 0.0);
    }

    #[test]
    fn default_color_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
    }
}
