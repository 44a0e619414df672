//! Layout logic for block-level leaves and containers: vertical stacks,
//! rules, and image boxes.

use super::LayoutError;
use super::elements::{ImageElement, LayoutElement, PositionedElement, RectElement};
use super::engine::{LayoutEngine, layout_node, resolve_dimension};
use super::style::ComputedStyle;
use crate::dom::Node;
use crate::stylesheet::{Dimension, ElementStyle};

/// Stacks children vertically inside the block's content box.
pub(super) fn layout_block(
    engine: &LayoutEngine,
    overrides: &ElementStyle,
    children: &[Node],
    style: &ComputedStyle,
    available_width: f32,
) -> Result<(Vec<PositionedElement>, f32), LayoutError> {
    let margin = overrides.margin.clone().unwrap_or_default();
    let padding = overrides.padding.clone().unwrap_or_default();

    // The parent has already allocated this node's slot (flex sizing
    // resolves explicit widths); a block fills what it was given.
    let width = (available_width - margin.left - margin.right).max(0.0);
    let content_width = (width - padding.left - padding.right).max(0.0);

    let mut elements = Vec::new();
    let mut content_height = 0.0;
    for child in children {
        let (mut child_elements, child_height) =
            layout_node(engine, child, style, content_width)?;
        for el in &mut child_elements {
            el.x += margin.left + padding.left;
            el.y += margin.top + padding.top + content_height;
        }
        elements.extend(child_elements);
        content_height += child_height;
    }

    let box_height = match overrides.height {
        Some(Dimension::Pt(h)) => h,
        _ => padding.top + content_height + padding.bottom,
    };

    if style.background_color.is_some() {
        elements.insert(
            0,
            PositionedElement {
                x: margin.left,
                y: margin.top,
                width,
                height: box_height,
                element: LayoutElement::Rectangle(RectElement),
                style: style.clone(),
            },
        );
    }

    Ok((elements, margin.top + box_height + margin.bottom))
}

/// A filled horizontal rule or banner. Defaults to a 1pt line when no
/// explicit height is set.
pub(super) fn layout_rule(
    overrides: &ElementStyle,
    style: &ComputedStyle,
    available_width: f32,
) -> (Vec<PositionedElement>, f32) {
    let margin = overrides.margin.clone().unwrap_or_default();

    let slot_width = (available_width - margin.left - margin.right).max(0.0);
    let width = resolve_dimension(overrides.width.as_ref(), slot_width);
    let height = match overrides.height {
        Some(Dimension::Pt(h)) => h,
        _ => 1.0,
    };

    let element = PositionedElement {
        x: margin.left,
        y: margin.top,
        width,
        height,
        element: LayoutElement::Rectangle(RectElement),
        style: style.clone(),
    };
    (vec![element], margin.top + height + margin.bottom)
}

/// An image box. The extent must be explicit; images are opaque to the
/// layout pass and cannot be measured.
pub(super) fn layout_image(
    src: &str,
    overrides: &ElementStyle,
    style: &ComputedStyle,
) -> Result<(Vec<PositionedElement>, f32), LayoutError> {
    let margin = overrides.margin.clone().unwrap_or_default();

    let (Some(Dimension::Pt(width)), Some(Dimension::Pt(height))) =
        (overrides.width.as_ref(), overrides.height.as_ref())
    else {
        return Err(LayoutError::ImageExtent(src.to_string()));
    };

    let element = PositionedElement {
        x: margin.left,
        y: margin.top,
        width: *width,
        height: *height,
        element: LayoutElement::Image(ImageElement {
            src: src.to_string(),
        }),
        style: style.clone(),
    };
    Ok((vec![element], margin.top + height + margin.bottom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::style::default_style;
    use crate::stylesheet::{Color, Margins};

    #[test]
    fn block_stacks_children_and_reports_total_height() {
        let engine = LayoutEngine::new();
        let style = default_style();
        let children = vec![
            Node::Paragraph {
                style: ElementStyle::default(),
                content: "one".into(),
            },
            Node::Paragraph {
                style: ElementStyle::default(),
                content: "two".into(),
            },
        ];
        let (elements, height) =
            layout_block(&engine, &ElementStyle::default(), &children, &style, 400.0).unwrap();
        assert_eq!(elements.len(), 2);
        assert!((elements[1].y - style.line_height).abs() < 0.01);
        assert!((height - 2.0 * style.line_height).abs() < 0.01);
    }

    #[test]
    fn block_background_covers_the_box() {
        let engine = LayoutEngine::new();
        let overrides = ElementStyle {
            background_color: Some(Color::BLACK),
            padding: Some(Margins::all(2.0)),
            ..Default::default()
        };
        let style = crate::layout::compute_style(&overrides, &default_style());
        let children = vec![Node::Paragraph {
            style: ElementStyle::default(),
            content: "text".into(),
        }];
        let (elements, _) = layout_block(&engine, &overrides, &children, &style, 400.0).unwrap();
        assert!(matches!(
            elements[0].element,
            LayoutElement::Rectangle(RectElement)
        ));
        assert_eq!(elements[0].width, 400.0);
    }

    #[test]
    fn rule_defaults_to_one_point() {
        let style = default_style();
        let (elements, height) = layout_rule(&ElementStyle::default(), &style, 100.0);
        assert_eq!(elements[0].height, 1.0);
        assert_eq!(height, 1.0);
    }

    #[test]
    fn image_without_extent_is_an_error() {
        let style = default_style();
        let result = layout_image("icon.png", &ElementStyle::default(), &style);
        assert!(matches!(result, Err(LayoutError::ImageExtent(_))));
    }
}
