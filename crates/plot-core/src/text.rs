// File: crates/plot-core/src/text.rs
// Summary: Simple text shaper/renderer using Skia textlayout with sensible defaults.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        p.longest_line()
    }

    /// Draw `text` with its top edge at `top`, horizontally centred on `center_x`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, center_x: f32, top: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        p.paint(canvas, (center_x - w * 0.5, top));
    }

    /// Draw `text` vertically centred on `(x, center_y)`, anchored on the right edge.
    pub fn draw_right_middle(&self, canvas: &skia::Canvas, text: &str, x: f32, center_y: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        let (w, h) = (p.longest_line(), p.height());
        p.paint(canvas, (x - w, center_y - h * 0.5));
    }

    /// Draw `text` rotated 90 degrees counter-clockwise (reading bottom to top),
    /// centred on `center_y` with the glyph tops facing `left`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, left: f32, center_y: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        canvas.save();
        canvas.translate((left, center_y));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (-w * 0.5, 0.0));
        canvas.restore();
    }

    /// Line height for a single line at `size`.
    pub fn line_height(&self, size: f32) -> f32 {
        self.layout("Ag", size, skia::Color::from_argb(0, 0, 0, 0)).height()
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
