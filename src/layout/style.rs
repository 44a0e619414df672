//! Style computation: resolving a node's `ElementStyle` overrides against
//! the style inherited from its parent.

use crate::stylesheet::{Color, ElementStyle, FontWeight, TextAlign};

/// A fully resolved style with no optional values, ready for layout and
/// drawing. Only text properties inherit; `background_color` is taken
/// from the node's own overrides and never from the parent.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    pub font_family: String,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub line_height: f32,
    pub text_align: TextAlign,
    pub color: Color,
    pub background_color: Option<Color>,
}

/// Returns the default style for the document root.
pub fn default_style() -> ComputedStyle {
    ComputedStyle {
        font_family: "Helvetica".to_string(),
        font_size: 12.0,
        font_weight: FontWeight::Regular,
        line_height: 14.4, // 12.0 * 1.2
        text_align: TextAlign::Left,
        color: Color::BLACK,
        background_color: None,
    }
}

/// Computes the style for a node by inheriting from its parent and
/// applying the node's own overrides.
pub fn compute_style(overrides: &ElementStyle, parent: &ComputedStyle) -> ComputedStyle {
    let mut computed = parent.clone();
    computed.background_color = overrides.background_color.clone();

    if let Some(ff) = &overrides.font_family {
        computed.font_family = ff.clone();
    }
    if let Some(fs) = overrides.font_size {
        computed.font_size = fs;
        if overrides.line_height.is_none() {
            computed.line_height = fs * 1.2;
        }
    }
    if let Some(fw) = &overrides.font_weight {
        computed.font_weight = fw.clone();
    }
    if let Some(lh) = overrides.line_height {
        computed.line_height = lh;
    }
    if let Some(ta) = &overrides.text_align {
        computed.text_align = ta.clone();
    }
    if let Some(c) = &overrides.color {
        computed.color = c.clone();
    }
    computed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_values() {
        let style = default_style();
        assert_eq!(style.font_size, 12.0);
        assert_eq!(style.line_height, 14.4);
        assert_eq!(style.text_align, TextAlign::Left);
    }

    #[test]
    fn overrides_apply_and_derive_line_height() {
        let overrides = ElementStyle {
            font_size: Some(20.0),
            color: Some(Color::gray(128)),
            ..Default::default()
        };
        let computed = compute_style(&overrides, &default_style());
        assert_eq!(computed.font_size, 20.0);
        assert_eq!(computed.line_height, 24.0); // 20.0 * 1.2
        assert_eq!(computed.color.r, 128);
        assert_eq!(computed.font_family, "Helvetica"); // inherited
    }

    #[test]
    fn explicit_line_height_wins() {
        let overrides = ElementStyle {
            font_size: Some(10.0),
            line_height: Some(11.0),
            ..Default::default()
        };
        let computed = compute_style(&overrides, &default_style());
        assert_eq!(computed.line_height, 11.0);
    }

    #[test]
    fn background_is_not_inherited() {
        let parent_overrides = ElementStyle {
            background_color: Some(Color::BLACK),
            ..Default::default()
        };
        let parent = compute_style(&parent_overrides, &default_style());
        assert!(parent.background_color.is_some());

        let child = compute_style(&ElementStyle::default(), &parent);
        assert!(child.background_color.is_none());
    }
}
