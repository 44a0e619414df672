//! Text measurement, line breaking, and paragraph layout.
//!
//! Line breaking is greedy over whitespace-separated words. Each word is
//! first passed through the engine's hyphenation callback; the returned
//! fragments are the only units a word may be broken at. With hyphenation
//! disabled the callback returns the whole word, so an over-long word is
//! placed on its own line and overflows instead of being split mid-word.

use super::elements::{LayoutElement, PositionedElement, TextElement};
use super::engine::LayoutEngine;
use super::style::ComputedStyle;
use crate::stylesheet::{ElementStyle, TextAlign};

/// Breaks `text` into lines no wider than `max_width` where possible.
pub fn wrap_text(
    engine: &LayoutEngine,
    text: &str,
    style: &ComputedStyle,
    max_width: f32,
) -> Vec<String> {
    if max_width <= 0.0 {
        return text.lines().map(|s| s.to_string()).collect();
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current_line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current_line, word)
            };
            if engine.measure_text_width(&candidate, style) <= max_width {
                current_line = candidate;
                continue;
            }

            if !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }

            if engine.measure_text_width(word, style) <= max_width {
                current_line = word.to_string();
            } else {
                // The word alone is too wide; break it at the fragment
                // boundaries the hyphenation callback allows, or not at all.
                current_line = place_fragments(engine, word, style, max_width, &mut lines);
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }
    lines
}

/// Fills lines with hyphenation fragments of a single over-long word and
/// returns the still-open last line.
fn place_fragments(
    engine: &LayoutEngine,
    word: &str,
    style: &ComputedStyle,
    max_width: f32,
    lines: &mut Vec<String>,
) -> String {
    let fragments = engine.hyphenate(word);
    if fragments.len() <= 1 {
        // Unbreakable: let it overflow rather than split inside the word.
        return word.to_string();
    }

    let mut current = String::new();
    for fragment in fragments {
        let candidate = format!("{}{}", current, fragment);
        if current.is_empty() || engine.measure_text_width(&candidate, style) <= max_width {
            current = candidate;
        } else {
            lines.push(current);
            current = fragment;
        }
    }
    current
}

/// Lays out a paragraph node: one positioned text element per line.
pub(super) fn layout_paragraph(
    engine: &LayoutEngine,
    content: &str,
    overrides: &ElementStyle,
    style: &ComputedStyle,
    available_width: f32,
) -> (Vec<PositionedElement>, f32) {
    let margin = overrides.margin.clone().unwrap_or_default();
    let padding = overrides.padding.clone().unwrap_or_default();

    let width = (available_width - margin.left - margin.right).max(0.0);
    let content_width = (width - padding.left - padding.right).max(0.0);

    let lines = wrap_text(engine, content, style, content_width);

    let mut elements = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        let line_width = engine.measure_text_width(line, style);
        let element_width = line_width.min(content_width);
        let start_x = match style.text_align {
            TextAlign::Left => 0.0,
            TextAlign::Center => (content_width - element_width) / 2.0,
            TextAlign::Right => content_width - element_width,
        };
        elements.push(PositionedElement {
            x: margin.left + padding.left + start_x,
            y: margin.top + padding.top + index as f32 * style.line_height,
            width: element_width,
            height: style.line_height,
            element: LayoutElement::Text(TextElement {
                content: line.clone(),
            }),
            style: style.clone(),
        });
    }

    let content_height = lines.len() as f32 * style.line_height;
    let height = margin.top + padding.top + content_height + padding.bottom + margin.bottom;
    (elements, height)
}
