//! Canvas capability consumed by the drawing context
//!
//! The drawing context never touches pixels itself. Any surface that can
//! take colors, build and commit paths, and lay out wrapped text can sit
//! behind it; [`crate::raster::RasterCanvas`] is the bundled one.

use crate::color::Rgba;
use crate::font_registry::FontFace;
use crate::text_layout::TextAlign;

pub trait Canvas {
    /// Solid color for subsequent strokes, fills and text
    fn set_rgba(&mut self, color: Rgba);

    /// Native hex color setter; input is passed through unvalidated
    fn set_hex_color(&mut self, hex: &str) {
        self.set_rgba(Rgba::from_hex(hex));
    }

    fn set_line_width(&mut self, width: f64);

    /// Font for subsequent text; `None` clears it
    fn set_font(&mut self, font: Option<&FontFace>);

    /// Start a new subpath
    fn move_to(&mut self, x: f64, y: f64);

    /// Extend the current subpath, starting one if there is none
    fn line_to(&mut self, x: f64, y: f64);

    /// Stroke the queued path and clear it
    fn stroke(&mut self);

    /// Fill the queued path and clear it
    fn fill(&mut self);

    /// Lay out `text` wrapped at `width` with its box's top-left at `(x, y)`
    fn draw_string_wrapped(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        width: f64,
        line_spacing: f64,
        align: TextAlign,
    );
}
