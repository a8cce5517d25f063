//! Shared helpers for unit tests

use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::font_registry::FontFace;
use crate::text_layout::TextAlign;

/// A call made on [`RecordingCanvas`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetRgba(Rgba),
    SetHex(String),
    SetLineWidth(f64),
    SetFont(Option<f64>),
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    Fill,
    DrawText {
        text: String,
        x: f64,
        y: f64,
        width: f64,
        line_spacing: f64,
        align: TextAlign,
        color: Rgba,
        font_size: Option<f64>,
    },
}

/// Canvas that records calls and tracks the style it was given
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<Call>,
    pub color: Rgba,
    pub line_width: f64,
    pub font_size: Option<f64>,
}

impl Canvas for RecordingCanvas {
    fn set_rgba(&mut self, color: Rgba) {
        self.color = color;
        self.calls.push(Call::SetRgba(color));
    }

    fn set_hex_color(&mut self, hex: &str) {
        self.color = Rgba::from_hex(hex);
        self.calls.push(Call::SetHex(hex.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
        self.calls.push(Call::SetLineWidth(width));
    }

    fn set_font(&mut self, font: Option<&FontFace>) {
        self.font_size = font.map(FontFace::size);
        self.calls.push(Call::SetFont(self.font_size));
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::LineTo(x, y));
    }

    fn stroke(&mut self) {
        self.calls.push(Call::Stroke);
    }

    fn fill(&mut self) {
        self.calls.push(Call::Fill);
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
        self.calls.push(Call::DrawText {
            text: text.to_string(),
            x,
            y,
            width,
            line_spacing,
            align,
            color: self.color,
            font_size: self.font_size,
        });
    }
}

/// First TrueType font found in the usual system locations, if any
pub fn find_system_font() -> Option<PathBuf> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .map(Path::new)
    .find(|path| path.exists())
    .map(Path::to_path_buf)
}
