//! The production render engine, backed by `printpdf`.

use super::{RenderEngine, RenderError};
use crate::dom::Document;
use crate::layout::{
    HyphenationCallback, ImageElement, LayoutElement, LayoutEngine, PositionedElement,
    TextElement,
};
use crate::stylesheet::{Color, PageSize};
use log::info;
use printpdf::font::ParsedFont;
use printpdf::graphics::{LinePoint, PaintMode, Point, Polygon, PolygonRing, WindingOrder};
use printpdf::matrix::TextMatrix;
use printpdf::ops::Op;
use printpdf::text::TextItem;
use printpdf::xobject::{XObject, XObjectTransform};
use printpdf::{
    FontId, Layer, Mm, PdfConformance, PdfDocument, PdfPage, PdfSaveOptions, Pt, Rgb, XObjectId,
};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Renders a document tree into a PDF file.
///
/// Fonts are embedded from the registered asset files; image sources are
/// resolved against the configured asset root.
pub struct PdfEngine {
    asset_root: PathBuf,
    fonts: Vec<(String, Vec<u8>)>,
    layout: LayoutEngine,
}

impl PdfEngine {
    pub fn new() -> Self {
        Self::with_asset_root(".")
    }

    pub fn with_asset_root(root: impl Into<PathBuf>) -> Self {
        PdfEngine {
            asset_root: root.into(),
            fonts: Vec::new(),
            layout: LayoutEngine::new(),
        }
    }

    fn parse_font(family: &str, source: &str, data: &[u8]) -> Result<ParsedFont, RenderError> {
        let mut warnings = Vec::new();
        ParsedFont::from_bytes(data, 0, &mut warnings).ok_or_else(|| RenderError::FontParse {
            family: family.to_string(),
            path: source.to_string(),
        })
    }

    fn page_dimensions_mm(size: &PageSize) -> (Mm, Mm) {
        match size {
            PageSize::A4 => (Mm(210.0), Mm(297.0)),
            PageSize::Letter => (Mm(215.9), Mm(279.4)),
            PageSize::Legal => (Mm(215.9), Mm(355.6)),
            PageSize::Custom { width, height } => (Pt(*width).into(), Pt(*height).into()),
        }
    }
}

impl Default for PdfEngine {
    fn default() -> Self {
        PdfEngine::new()
    }
}

impl RenderEngine for PdfEngine {
    fn register_font(&mut self, family: &str, source: &Path) -> Result<(), RenderError> {
        let data = fs::read(source)?;
        // Validate now so a broken asset fails at initialization, not at
        // render time.
        Self::parse_font(family, &source.display().to_string(), &data)?;
        info!(
            "registered font family '{}' from {}",
            family,
            source.display()
        );
        self.fonts.push((family.to_string(), data));
        Ok(())
    }

    fn register_hyphenation_callback(&mut self, callback: HyphenationCallback) {
        self.layout.set_hyphenation_callback(callback);
    }

    fn render_to_file(&mut self, document: &Document, output: &Path) -> Result<(), RenderError> {
        let page = self.layout.layout_document(document)?;

        let mut pdf = PdfDocument::new(&document.title);
        pdf.metadata.info.conformance = PdfConformance::X3_2002_PDF_1_3;

        let mut font_ids = HashMap::new();
        for (family, data) in &self.fonts {
            let font = Self::parse_font(family, "<registered data>", data)?;
            font_ids.insert(family.clone(), pdf.add_font(&font));
        }

        let ops = {
            let mut renderer =
                PageOpsRenderer::new(&mut pdf, &font_ids, &self.asset_root, page.height);
            for element in &page.elements {
                renderer.render_element(element)?;
            }
            renderer.into_ops()
        };

        let layer = Layer::new("Page 1 Layer 1");
        let layer_id = pdf.add_layer(&layer);
        let mut final_ops = vec![Op::BeginLayer { layer_id }];
        final_ops.extend(ops);

        let (width_mm, height_mm) = Self::page_dimensions_mm(&document.page.size);
        pdf.pages.push(PdfPage::new(width_mm, height_mm, final_ops));

        let mut warnings = Vec::new();
        let bytes = pdf.save(&PdfSaveOptions::default(), &mut warnings);
        fs::write(output, bytes)?;
        info!(
            "rendered {} elements to {}",
            page.elements.len(),
            output.display()
        );
        Ok(())
    }
}

/// Accumulates the PDF operations for a single page, tracking text-section
/// and font/color state so redundant operators are not emitted.
struct PageOpsRenderer<'a> {
    document: &'a mut PdfDocument,
    font_ids: &'a HashMap<String, FontId>,
    asset_root: &'a Path,
    page_height: f32,
    ops: Vec<Op>,
    image_cache: HashMap<String, (XObjectId, (u32, u32))>,
    is_text_section_open: bool,
    current_font: Option<(FontId, f32)>,
    current_fill: Option<printpdf::color::Color>,
}

impl<'a> PageOpsRenderer<'a> {
    fn new(
        document: &'a mut PdfDocument,
        font_ids: &'a HashMap<String, FontId>,
        asset_root: &'a Path,
        page_height: f32,
    ) -> Self {
        PageOpsRenderer {
            document,
            font_ids,
            asset_root,
            page_height,
            ops: Vec::new(),
            image_cache: HashMap::new(),
            is_text_section_open: false,
            current_font: None,
            current_fill: None,
        }
    }

    fn into_ops(mut self) -> Vec<Op> {
        self.close_text_section_if_open();
        self.ops
    }

    fn close_text_section_if_open(&mut self) {
        if self.is_text_section_open {
            self.ops.push(Op::EndTextSection);
            self.is_text_section_open = false;
        }
    }

    fn to_pdf_color(color: &Color) -> printpdf::color::Color {
        printpdf::color::Color::Rgb(Rgb::new(
            color.r as f32 / 255.0,
            color.g as f32 / 255.0,
            color.b as f32 / 255.0,
            None,
        ))
    }

    fn get_font(&self, family: &str) -> Result<FontId, RenderError> {
        self.font_ids
            .get(family)
            .cloned()
            .ok_or_else(|| RenderError::FontNotRegistered(family.to_string()))
    }

    fn render_element(&mut self, element: &PositionedElement) -> Result<(), RenderError> {
        match &element.element {
            LayoutElement::Text(text) => self.render_text(text, element),
            LayoutElement::Rectangle(_) => {
                self.render_rectangle(element);
                Ok(())
            }
            LayoutElement::Image(image) => self.render_image(image, element),
        }
    }

    fn render_text(
        &mut self,
        text: &TextElement,
        positioned: &PositionedElement,
    ) -> Result<(), RenderError> {
        if text.content.is_empty() {
            return Ok(());
        }
        let style = &positioned.style;
        let font_id = self.get_font(&style.font_family)?;
        let fill = Self::to_pdf_color(&style.color);

        if !self.is_text_section_open {
            self.ops.push(Op::StartTextSection);
            self.is_text_section_open = true;
        }
        if self.current_fill.as_ref() != Some(&fill) {
            self.ops.push(Op::SetFillColor { col: fill.clone() });
            self.current_fill = Some(fill);
        }
        let font_state = (font_id.clone(), style.font_size);
        if self.current_font.as_ref() != Some(&font_state) {
            self.ops.push(Op::SetFontSize {
                size: Pt(style.font_size),
                font: font_id.clone(),
            });
            self.current_font = Some(font_state);
        }

        // The layout pass provides positioned lines; the baseline sits
        // slightly below the line's top edge.
        let baseline_y = positioned.y + style.font_size * 0.8;
        let pdf_y = self.page_height - baseline_y;
        self.ops.push(Op::SetTextMatrix {
            matrix: TextMatrix::Translate(Pt(positioned.x), Pt(pdf_y)),
        });
        self.ops.push(Op::WriteText {
            items: vec![TextItem::Text(text.content.clone())],
            font: font_id,
        });
        Ok(())
    }

    fn render_rectangle(&mut self, positioned: &PositionedElement) {
        let Some(fill) = &positioned.style.background_color else {
            return;
        };
        self.close_text_section_if_open();

        let y = self.page_height - (positioned.y + positioned.height);
        let polygon = Polygon {
            rings: vec![PolygonRing {
                points: vec![
                    LinePoint {
                        p: Point {
                            x: Pt(positioned.x),
                            y: Pt(y),
                        },
                        bezier: false,
                    },
                    LinePoint {
                        p: Point {
                            x: Pt(positioned.x + positioned.width),
                            y: Pt(y),
                        },
                        bezier: false,
                    },
                    LinePoint {
                        p: Point {
                            x: Pt(positioned.x + positioned.width),
                            y: Pt(y + positioned.height),
                        },
                        bezier: false,
                    },
                    LinePoint {
                        p: Point {
                            x: Pt(positioned.x),
                            y: Pt(y + positioned.height),
                        },
                        bezier: false,
                    },
                ],
            }],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::EvenOdd,
        };
        self.ops.push(Op::SetFillColor {
            col: Self::to_pdf_color(fill),
        });
        self.current_fill = None;
        self.ops.push(Op::DrawPolygon { polygon });
    }

    fn render_image(
        &mut self,
        image: &ImageElement,
        positioned: &PositionedElement,
    ) -> Result<(), RenderError> {
        self.close_text_section_if_open();

        let (xobject_id, (image_width, image_height)) =
            if let Some(cached) = self.image_cache.get(&image.src) {
                (cached.0.clone(), cached.1)
            } else {
                let path = if Path::new(&image.src).is_absolute() {
                    PathBuf::from(&image.src)
                } else {
                    self.asset_root.join(&image.src)
                };
                let bytes = fs::read(&path)?;
                let mut warnings = Vec::new();
                let raw_image = printpdf::image::RawImage::decode_from_bytes(&bytes, &mut warnings)
                    .map_err(|e| RenderError::ImageDecode {
                        src: image.src.clone(),
                        reason: e.to_string(),
                    })?;
                let dimensions = (raw_image.width as u32, raw_image.height as u32);
                let xobject_id = XObjectId::new();
                self.document
                    .resources
                    .xobjects
                    .map
                    .insert(xobject_id.clone(), XObject::Image(raw_image));
                self.image_cache
                    .insert(image.src.clone(), (xobject_id.clone(), dimensions));
                (xobject_id, dimensions)
            };

        let y = self.page_height - (positioned.y + positioned.height);
        let transform = XObjectTransform {
            translate_x: Some(Pt(positioned.x)),
            translate_y: Some(Pt(y)),
            scale_x: Some(positioned.width / image_width as f32),
            scale_y: Some(positioned.height / image_height as f32),
            rotate: None,
            dpi: Some(72.0),
        };
        self.ops.push(Op::UseXobject {
            id: xobject_id,
            transform,
        });
        Ok(())
    }
}
