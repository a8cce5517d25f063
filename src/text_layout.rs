//! Text layout and line breaking
//!
//! This module provides:
//! - Line breaking (greedy word wrapping against a measured width)
//! - Font metrics for line height and baseline placement
//! - Placement of wrapped lines for left, center and right alignment

use ttf_parser::Face;

/// Horizontal alignment of wrapped lines inside the wrap width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A wrapped line with its measured width
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub width: f64,
}

/// A line positioned on the canvas; `y` is the baseline
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Line breaker for wrapping text
pub struct LineBreaker {
    max_width: f64,
}

impl LineBreaker {
    pub fn new(max_width: f64) -> Self {
        Self { max_width }
    }

    /// Break text into lines.
    ///
    /// Explicit newlines always break. Within a paragraph, words are added
    /// while the measured line fits; a word wider than the limit gets a line
    /// of its own.
    pub fn break_text<F>(&self, text: &str, measure: F) -> Vec<TextLine>
    where
        F: Fn(&str) -> f64,
    {
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let mut current = String::new();

            for word in paragraph.split_whitespace() {
                if current.is_empty() {
                    current.push_str(word);
                    continue;
                }
                let candidate = format!("{} {}", current, word);
                if measure(&candidate) <= self.max_width {
                    current = candidate;
                } else {
                    let width = measure(&current);
                    lines.push(TextLine {
                        text: std::mem::replace(&mut current, word.to_string()),
                        width,
                    });
                }
            }

            let width = measure(&current);
            lines.push(TextLine {
                text: current,
                width,
            });
        }

        lines
    }
}

/// Font metrics scaled to a point size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub ascent: f64,
    pub descent: f64,
    pub line_gap: f64,
}

impl FontMetrics {
    /// Distance between consecutive baselines at line spacing 1.0
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.line_gap
    }

    /// Approximate metrics when no face is available
    pub fn default(font_size: f64) -> Self {
        Self {
            ascent: font_size * 0.8,
            descent: font_size * 0.2,
            line_gap: 0.0,
        }
    }

    /// Extract metrics from a parsed face, scaled to `font_size`
    pub fn from_face(face: &Face<'_>, font_size: f64) -> Self {
        let scale = font_size / face.units_per_em() as f64;
        Self {
            ascent: face.ascender() as f64 * scale,
            // descender is usually negative
            descent: (face.descender() as f64).abs() * scale,
            line_gap: face.line_gap() as f64 * scale,
        }
    }
}

/// Position wrapped lines inside a box whose top-left corner is `(x, y)`.
///
/// The first baseline sits one ascent below `y`; each following baseline
/// advances by `line_height * line_spacing`.
pub fn place_lines(
    lines: &[TextLine],
    x: f64,
    y: f64,
    width: f64,
    line_spacing: f64,
    align: TextAlign,
    metrics: &FontMetrics,
) -> Vec<PlacedLine> {
    let advance = metrics.line_height() * line_spacing;
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let line_x = match align {
                TextAlign::Left => x,
                TextAlign::Center => x + (width - line.width) / 2.0,
                TextAlign::Right => x + width - line.width,
            };
            PlacedLine {
                text: line.text.clone(),
                x: line_x,
                y: y + metrics.ascent + i as f64 * advance,
            }
        })
        .collect()
}
