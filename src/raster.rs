//! Raster canvas backed by a tiny-skia pixmap
//!
//! Paths are accumulated with `move_to`/`line_to` and rasterized on
//! `stroke`/`fill`, after which the path is cleared. Text is drawn by
//! filling ttf-parser glyph outlines.

use std::mem;
use std::path::Path as FsPath;

use image::{ImageFormat, RgbaImage};
use log::{debug, warn};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};
use ttf_parser::{GlyphId, OutlineBuilder};

use crate::canvas::Canvas;
use crate::color::{resolve, Rgba};
use crate::config::ContextConfig;
use crate::error::{PasteError, PasteResult};
use crate::font_registry::FontFace;
use crate::text_layout::{place_lines, LineBreaker, PlacedLine, TextAlign};

pub struct RasterCanvas {
    pixmap: Pixmap,
    color: Rgba,
    line_width: f64,
    font: Option<FontFace>,
    path: PathBuilder,
    has_current_point: bool,
    anti_alias: bool,
}

impl RasterCanvas {
    /// Transparent canvas of the given size
    pub fn new(width: u32, height: u32) -> PasteResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            PasteError::Image(format!("invalid canvas size {}x{}", width, height))
        })?;
        Ok(Self {
            pixmap,
            color: Rgba::BLACK,
            line_width: 1.0,
            font: None,
            path: PathBuilder::new(),
            has_current_point: false,
            anti_alias: true,
        })
    }

    /// Canvas with anti-aliasing and background taken from `config`
    ///
    /// Style fields such as `line_width` belong to the drawing context and
    /// are applied by [`DrawingContext::with_config`].
    ///
    /// [`DrawingContext::with_config`]: crate::context::DrawingContext::with_config
    pub fn from_config(width: u32, height: u32, config: &ContextConfig) -> PasteResult<Self> {
        let mut canvas = Self::new(width, height)?;
        canvas.anti_alias = config.anti_alias;
        if let Some(background) = &config.background {
            canvas.clear(resolve(background));
        }
        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Fill the whole canvas with `color`, ignoring the current path
    pub fn clear(&mut self, color: Rgba) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    /// Unpremultiplied color at `(x, y)`, `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        // tiny-skia only checks the end of the buffer, so x past the right
        // edge would land on the next row
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgba::new(c.red(), c.green(), c.blue(), c.alpha()))
    }

    pub fn to_rgba_image(&self) -> PasteResult<RgbaImage> {
        let data: Vec<u8> = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        RgbaImage::from_raw(self.width(), self.height(), data)
            .ok_or_else(|| PasteError::Image("pixel buffer size mismatch".to_string()))
    }

    pub fn save_png(&self, path: &FsPath) -> PasteResult<()> {
        self.to_rgba_image()?
            .save_with_format(path, ImageFormat::Png)?;
        debug!("Saved {}x{} canvas to {}", self.width(), self.height(), path.display());
        Ok(())
    }

    fn paint(&self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(self.color.r, self.color.g, self.color.b, self.color.a);
        paint.anti_alias = self.anti_alias;
        paint
    }

    fn take_path(&mut self) -> Option<Path> {
        self.has_current_point = false;
        mem::replace(&mut self.path, PathBuilder::new()).finish()
    }

    fn draw_line_glyphs(&mut self, font: &FontFace, line: &PlacedLine) {
        let Some(face) = font.face() else {
            return;
        };
        let scale = font.scale() as f32;
        let mut builder = PathBuilder::new();
        let mut pen_x = line.x as f32;

        for ch in line.text.chars() {
            let glyph = face.glyph_index(ch).unwrap_or(GlyphId(0));
            let mut outline = GlyphOutline {
                builder: &mut builder,
                x: pen_x,
                y: line.y as f32,
                scale,
            };
            face.outline_glyph(glyph, &mut outline);
            pen_x += face.glyph_hor_advance(glyph).unwrap_or(0) as f32 * scale;
        }

        if let Some(path) = builder.finish() {
            let paint = self.paint();
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }
}

impl Canvas for RasterCanvas {
    fn set_rgba(&mut self, color: Rgba) {
        self.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_font(&mut self, font: Option<&FontFace>) {
        self.font = font.cloned();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to(x as f32, y as f32);
        self.has_current_point = true;
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if !self.has_current_point {
            self.move_to(x, y);
            return;
        }
        self.path.line_to(x as f32, y as f32);
    }

    fn stroke(&mut self) {
        let Some(path) = self.take_path() else {
            return;
        };
        let paint = self.paint();
        let stroke = Stroke {
            width: self.line_width as f32,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn fill(&mut self) {
        let Some(path) = self.take_path() else {
            return;
        };
        let paint = self.paint();
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn draw_string_wrapped(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        width: f64,
        line_spacing: f64,
        align: TextAlign,
    ) {
        let Some(font) = self.font.clone() else {
            warn!("draw_string_wrapped() called without a font, skipping");
            return;
        };
        let lines = LineBreaker::new(width).break_text(text, |s| font.measure(s));
        let placed = place_lines(&lines, x, y, width, line_spacing, align, &font.metrics());
        for line in &placed {
            self.draw_line_glyphs(&font, line);
        }
    }
}

/// Feeds glyph outlines (font units, y up) into a canvas path (pixels, y down)
struct GlyphOutline<'a> {
    builder: &'a mut PathBuilder,
    x: f32,
    y: f32,
    scale: f32,
}

impl GlyphOutline<'_> {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x + x * self.scale, self.y - y * self.scale)
    }
}

impl OutlineBuilder for GlyphOutline<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
