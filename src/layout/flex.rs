//! Layout logic for flex containers.
//!
//! A simplified flexbox: no wrapping, no shrink. Children with a fixed
//! width (pt or percent) get it; children with `flex_grow` share the
//! remaining width proportionally; the rest take their intrinsic width.

use super::LayoutError;
use super::elements::{LayoutElement, PositionedElement, RectElement};
use super::engine::{LayoutEngine, layout_node};
use super::style::{ComputedStyle, compute_style};
use crate::dom::Node;
use crate::stylesheet::{AlignItems, Dimension, ElementStyle, FlexDirection, JustifyContent};

pub(super) fn layout_flex(
    engine: &LayoutEngine,
    overrides: &ElementStyle,
    children: &[Node],
    style: &ComputedStyle,
    available_width: f32,
) -> Result<(Vec<PositionedElement>, f32), LayoutError> {
    match overrides.flex_direction.clone().unwrap_or_default() {
        FlexDirection::Row => layout_row(engine, overrides, children, style, available_width),
        FlexDirection::Column => layout_column(engine, overrides, children, style, available_width),
    }
}

fn layout_row(
    engine: &LayoutEngine,
    overrides: &ElementStyle,
    children: &[Node],
    style: &ComputedStyle,
    available_width: f32,
) -> Result<(Vec<PositionedElement>, f32), LayoutError> {
    let margin = overrides.margin.clone().unwrap_or_default();
    let padding = overrides.padding.clone().unwrap_or_default();

    let width = (available_width - margin.left - margin.right).max(0.0);
    let content_width = (width - padding.left - padding.right).max(0.0);

    let widths = resolve_child_widths(engine, children, style, content_width);

    // Lay every child out at its resolved width to learn the row height.
    let mut laid_out = Vec::with_capacity(children.len());
    let mut row_height = 0.0f32;
    for (child, child_width) in children.iter().zip(&widths) {
        let (child_elements, child_height) = layout_node(engine, child, style, *child_width)?;
        row_height = row_height.max(child_height);
        laid_out.push((child_elements, child_height));
    }

    let total_width: f32 = widths.iter().sum();
    let free = (content_width - total_width).max(0.0);
    let justify = overrides.justify_content.clone().unwrap_or_default();
    let (mut cursor_x, gap) = match justify {
        JustifyContent::FlexStart => (0.0, 0.0),
        JustifyContent::FlexEnd => (free, 0.0),
        JustifyContent::Center => (free / 2.0, 0.0),
        JustifyContent::SpaceBetween => {
            let gaps = children.len().saturating_sub(1);
            (0.0, if gaps > 0 { free / gaps as f32 } else { 0.0 })
        }
    };

    let align = overrides.align_items.clone().unwrap_or_default();
    let mut elements = Vec::new();
    for ((mut child_elements, child_height), child_width) in laid_out.into_iter().zip(&widths) {
        let cross_offset = match align {
            AlignItems::Center => (row_height - child_height) / 2.0,
            AlignItems::FlexEnd => row_height - child_height,
            AlignItems::Stretch | AlignItems::FlexStart => 0.0,
        };
        for el in &mut child_elements {
            el.x += margin.left + padding.left + cursor_x;
            el.y += margin.top + padding.top + cross_offset;
        }
        elements.extend(child_elements);
        cursor_x += child_width + gap;
    }

    let box_height = padding.top + row_height + padding.bottom;
    add_background(&mut elements, style, &margin, width, box_height);
    Ok((elements, margin.top + box_height + margin.bottom))
}

fn layout_column(
    engine: &LayoutEngine,
    overrides: &ElementStyle,
    children: &[Node],
    style: &ComputedStyle,
    available_width: f32,
) -> Result<(Vec<PositionedElement>, f32), LayoutError> {
    let margin = overrides.margin.clone().unwrap_or_default();
    let padding = overrides.padding.clone().unwrap_or_default();

    let width = (available_width - margin.left - margin.right).max(0.0);
    let content_width = (width - padding.left - padding.right).max(0.0);

    let align = overrides.align_items.clone().unwrap_or_default();
    let mut elements = Vec::new();
    let mut content_height = 0.0;
    for child in children {
        // Cross-axis alignment needs the child's natural width; otherwise
        // the child fills the column.
        let child_extent = match align {
            AlignItems::FlexEnd | AlignItems::Center => {
                intrinsic_width(engine, child, style).min(content_width)
            }
            AlignItems::Stretch | AlignItems::FlexStart => content_width,
        };
        let cross_offset = match align {
            AlignItems::FlexEnd => content_width - child_extent,
            AlignItems::Center => (content_width - child_extent) / 2.0,
            AlignItems::Stretch | AlignItems::FlexStart => 0.0,
        };

        let (mut child_elements, child_height) = layout_node(engine, child, style, child_extent)?;
        for el in &mut child_elements {
            el.x += margin.left + padding.left + cross_offset;
            el.y += margin.top + padding.top + content_height;
        }
        elements.extend(child_elements);
        content_height += child_height;
    }

    let box_height = padding.top + content_height + padding.bottom;
    add_background(&mut elements, style, &margin, width, box_height);
    Ok((elements, margin.top + box_height + margin.bottom))
}

fn add_background(
    elements: &mut Vec<PositionedElement>,
    style: &ComputedStyle,
    margin: &crate::stylesheet::Margins,
    width: f32,
    height: f32,
) {
    if style.background_color.is_some() {
        elements.insert(
            0,
            PositionedElement {
                x: margin.left,
                y: margin.top,
                width,
                height,
                element: LayoutElement::Rectangle(RectElement),
                style: style.clone(),
            },
        );
    }
}

/// Resolves the main-axis slot of each of a row's children. A slot covers
/// the child's margins; explicit widths are resolved here, once, and the
/// child fills whatever it is handed.
fn resolve_child_widths(
    engine: &LayoutEngine,
    children: &[Node],
    parent_style: &ComputedStyle,
    content_width: f32,
) -> Vec<f32> {
    let mut widths = vec![0.0f32; children.len()];
    let mut grow_children = Vec::new();
    let mut grow_total = 0.0f32;
    let mut used = 0.0f32;

    for (i, child) in children.iter().enumerate() {
        let margin = child.style().margin.clone().unwrap_or_default();
        let horizontal_margin = margin.left + margin.right;
        match child.style().width {
            Some(Dimension::Pt(w)) => {
                widths[i] = w + horizontal_margin;
                used += widths[i];
            }
            Some(Dimension::Percent(p)) => {
                widths[i] = content_width * (p / 100.0) + horizontal_margin;
                used += widths[i];
            }
            Some(Dimension::Auto) | None => {
                if let Some(grow) = child.style().flex_grow {
                    grow_children.push((i, grow));
                    grow_total += grow;
                } else {
                    widths[i] = intrinsic_width(engine, child, parent_style).min(content_width);
                    used += widths[i];
                }
            }
        }
    }

    if grow_total > 0.0 {
        let leftover = (content_width - used).max(0.0);
        for (i, grow) in grow_children {
            widths[i] = leftover * grow / grow_total;
        }
    }
    widths
}

/// The natural (shrink-to-fit) outer width of a node, margins included.
/// Paragraphs measure as a single unwrapped line.
fn intrinsic_width(engine: &LayoutEngine, node: &Node, parent_style: &ComputedStyle) -> f32 {
    let style = compute_style(node.style(), parent_style);
    let overrides = node.style();
    let margin = overrides.margin.clone().unwrap_or_default();
    let padding = overrides.padding.clone().unwrap_or_default();

    if let Some(Dimension::Pt(w)) = overrides.width {
        return margin.left + w + margin.right;
    }

    let content = match node {
        Node::Paragraph { content, .. } => engine.measure_text_width(content, &style),
        Node::Block { children, .. } => children
            .iter()
            .map(|c| intrinsic_width(engine, c, &style))
            .fold(0.0, f32::max),
        Node::Flex { children, .. } => {
            match overrides.flex_direction.clone().unwrap_or_default() {
                FlexDirection::Row => children
                    .iter()
                    .map(|c| intrinsic_width(engine, c, &style))
                    .sum(),
                FlexDirection::Column => children
                    .iter()
                    .map(|c| intrinsic_width(engine, c, &style))
                    .fold(0.0, f32::max),
            }
        }
        Node::Image { .. } | Node::Rule { .. } => 0.0,
    };
    margin.left + padding.left + content + padding.right + margin.right
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::style::default_style;
    use crate::stylesheet::Margins;

    fn paragraph(content: &str) -> Node {
        Node::Paragraph {
            style: ElementStyle::default(),
            content: content.to_string(),
        }
    }

    fn paragraph_styled(content: &str, style: ElementStyle) -> Node {
        Node::Paragraph {
            style,
            content: content.to_string(),
        }
    }

    fn block_with(width: Dimension, children: Vec<Node>) -> Node {
        Node::Block {
            style: ElementStyle {
                width: Some(width),
                ..Default::default()
            },
            children,
        }
    }

    #[test]
    fn percent_widths_split_the_row() {
        let engine = LayoutEngine::new();
        let style = default_style();
        let children = vec![
            block_with(Dimension::Percent(70.0), vec![paragraph("left")]),
            block_with(Dimension::Percent(30.0), vec![paragraph("right")]),
        ];
        let (elements, _) = layout_flex(
            &engine,
            &ElementStyle::default(),
            &children,
            &style,
            500.0,
        )
        .unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].x, 0.0);
        assert!((elements[1].x - 350.0).abs() < 0.01);
    }

    #[test]
    fn grow_factors_share_leftover_width() {
        let engine = LayoutEngine::new();
        let style = default_style();
        let children = vec![
            Node::Block {
                style: ElementStyle {
                    flex_grow: Some(2.0),
                    ..Default::default()
                },
                children: vec![paragraph("a")],
            },
            Node::Block {
                style: ElementStyle {
                    flex_grow: Some(1.0),
                    ..Default::default()
                },
                children: vec![paragraph("b")],
            },
        ];
        let (elements, _) = layout_flex(
            &engine,
            &ElementStyle::default(),
            &children,
            &style,
            300.0,
        )
        .unwrap();
        // First child takes 200pt, second starts after it.
        assert!((elements[1].x - 200.0).abs() < 0.01);
    }

    #[test]
    fn space_between_pins_last_child_to_the_end() {
        let engine = LayoutEngine::new();
        let style = default_style();
        let children = vec![paragraph("left"), paragraph("end")];
        let overrides = ElementStyle {
            justify_content: Some(JustifyContent::SpaceBetween),
            ..Default::default()
        };
        let (elements, _) = layout_flex(&engine, &overrides, &children, &style, 400.0).unwrap();
        let end_width = engine.measure_text_width("end", &style);
        assert!((elements[1].x - (400.0 - end_width)).abs() < 0.01);
    }

    #[test]
    fn column_flex_end_right_aligns_children() {
        let engine = LayoutEngine::new();
        let style = default_style();
        let children = vec![paragraph("short")];
        let overrides = ElementStyle {
            flex_direction: Some(FlexDirection::Column),
            align_items: Some(AlignItems::FlexEnd),
            ..Default::default()
        };
        let (elements, _) = layout_flex(&engine, &overrides, &children, &style, 400.0).unwrap();
        let text_width = engine.measure_text_width("short", &style);
        assert!((elements[0].x - (400.0 - text_width)).abs() < 0.01);
    }

    #[test]
    fn row_centers_children_on_the_cross_axis() {
        let engine = LayoutEngine::new();
        let style = default_style();
        // A two-line child next to a one-line child.
        let children = vec![
            Node::Block {
                style: ElementStyle {
                    width: Some(Dimension::Pt(50.0)),
                    ..Default::default()
                },
                children: vec![paragraph("one"), paragraph("two")],
            },
            paragraph("mid"),
        ];
        let overrides = ElementStyle {
            align_items: Some(AlignItems::Center),
            ..Default::default()
        };
        let (elements, _) = layout_flex(&engine, &overrides, &children, &style, 400.0).unwrap();
        let single = elements.last().unwrap();
        // One line centered against two lines: offset by half a line height.
        assert!((single.y - style.line_height / 2.0).abs() < 0.01);
    }

    #[test]
    fn intrinsic_width_includes_margins() {
        let engine = LayoutEngine::new();
        let style = default_style();
        let node = paragraph_styled(
            "ab",
            ElementStyle {
                margin: Some(Margins::x(4.0)),
                ..Default::default()
            },
        );
        let expected = engine.measure_text_width("ab", &style) + 8.0;
        assert!((intrinsic_width(&engine, &node, &style) - expected).abs() < 0.01);
    }
}
