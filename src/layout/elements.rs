use crate::layout::style::ComputedStyle;

/// An absolutely positioned element on a page. Coordinates are top-left
/// based, in points; `y` grows downwards.
#[derive(Clone, Debug)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
    pub style: ComputedStyle,
}

#[derive(Clone, Debug)]
pub enum LayoutElement {
    Text(TextElement),
    Rectangle(RectElement),
    Image(ImageElement),
}

/// A single laid-out line of text.
#[derive(Clone, Debug)]
pub struct TextElement {
    pub content: String,
}

/// A filled box; the fill color comes from the element's style.
#[derive(Clone, Debug)]
pub struct RectElement;

#[derive(Clone, Debug)]
pub struct ImageElement {
    pub src: String,
}
