//! Drawing context - scoped style state over a canvas
//!
//! The context mirrors every style change onto the canvas and keeps its
//! own copy, so a saved state can be pushed back onto the canvas verbatim.
//! Compound operations (`paste_line`, `paste_string_default`) run inside a
//! [`StyleScope`] and leave the caller's style untouched on every exit path.

use std::mem;
use std::ops::{Deref, DerefMut};
use std::path::Path;

use log::{debug, warn};

use crate::canvas::Canvas;
use crate::color::{parse_color_spec, Rgba};
use crate::config::ContextConfig;
use crate::error::PasteResult;
use crate::font_registry::{FontFace, FontRegistry};
use crate::geometry::star_points;
use crate::style::{StyleStack, StyleState};
use crate::text_layout::TextAlign;

pub struct DrawingContext<C: Canvas> {
    canvas: C,
    style: StyleState,
    stack: StyleStack,
    fonts: FontRegistry,
    config: ContextConfig,
}

impl<C: Canvas> DrawingContext<C> {
    pub fn new(canvas: C) -> Self {
        Self::with_config(canvas, ContextConfig::default())
    }

    pub fn with_config(mut canvas: C, config: ContextConfig) -> Self {
        let style = StyleState {
            line_width: config.line_width,
            ..StyleState::default()
        };
        style.apply_to(&mut canvas);
        Self {
            canvas,
            style,
            stack: StyleStack::new(),
            fonts: FontRegistry::new(),
            config,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// End the session and hand the canvas back
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Number of saved states
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    // ===== State Management =====

    pub fn push(&mut self) {
        self.stack.push(self.style.clone());
    }

    /// Restore the most recently pushed state. Unbalanced pops are ignored.
    pub fn pop(&mut self) {
        match self.stack.pop() {
            Some(state) => self.restore(state),
            None => warn!("pop() without a matching push(), ignoring"),
        }
    }

    /// Push now and pop when the returned guard is dropped
    pub fn scope(&mut self) -> StyleScope<'_, C> {
        let depth = self.stack.len();
        let entry = self.style.clone();
        self.push();
        StyleScope {
            ctx: self,
            depth,
            entry,
        }
    }

    fn restore(&mut self, state: StyleState) {
        self.style = state;
        self.style.apply_to(&mut self.canvas);
    }

    fn unwind_to(&mut self, depth: usize, entry: StyleState) {
        self.stack.truncate(depth);
        self.restore(entry);
    }

    // ===== Colors =====

    pub fn set_rgba(&mut self, color: Rgba) {
        self.style.color = color;
        self.canvas.set_rgba(color);
    }

    pub fn set_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.set_rgba(Rgba::rgb(r, g, b));
    }

    pub fn set_hex_color(&mut self, hex: &str) {
        self.style.color = Rgba::from_hex(hex);
        self.canvas.set_hex_color(hex);
    }

    /// Set the color from a palette key, hex string or `rgb(a)` form.
    /// Unrecognized specs give opaque white.
    pub fn set_color_auto(&mut self, spec: &str) {
        let parsed = parse_color_spec(spec);
        match parsed.hex() {
            Some(hex) => self.set_hex_color(hex),
            None => self.set_rgba(parsed.to_rgba()),
        }
    }

    // ===== Line Styles =====

    pub fn set_line_width(&mut self, width: f64) {
        self.style.line_width = width;
        self.canvas.set_line_width(width);
    }

    // ===== Fonts =====

    pub fn set_font(&mut self, font: FontFace) {
        self.canvas.set_font(Some(&font));
        self.style.font = Some(font);
    }

    /// Load a font file at `size` and make it current. On error the style
    /// is left as it was.
    pub fn load_font(&mut self, path: &Path, size: f64) -> PasteResult<()> {
        let font = self.fonts.load(path, size)?;
        self.set_font(font);
        Ok(())
    }

    pub fn use_default_font(&mut self, size: f64) -> PasteResult<()> {
        let path = self.config.resolve_default_font_path();
        self.load_font(&path, size)
    }

    // ===== Paths =====

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.canvas.move_to(x, y);
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.canvas.line_to(x, y);
    }

    pub fn stroke(&mut self) {
        self.canvas.stroke();
    }

    pub fn fill(&mut self) {
        self.canvas.fill();
    }

    // ===== Compound Operations =====

    /// Draw `text` in the default font, solid black, wrapped at `width` and
    /// left-aligned, with its top-left corner at `(x, y)`.
    pub fn paste_string_default(
        &mut self,
        text: &str,
        font_size: f64,
        line_space: f64,
        x: f64,
        y: f64,
        width: f64,
    ) -> PasteResult<()> {
        let mut scope = self.scope();
        scope.use_default_font(font_size)?;
        scope.set_rgb(0, 0, 0);
        scope
            .canvas_mut()
            .draw_string_wrapped(text, x, y, width, line_space, TextAlign::Left);
        Ok(())
    }

    /// Stroke a segment from `(x1, y1)` to `(x2, y2)`
    pub fn paste_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        line_width: f64,
        color: &str,
    ) {
        let mut scope = self.scope();
        scope.set_color_auto(color);
        scope.move_to(x1, y1);
        scope.line_to(x2, y2);
        scope.set_line_width(line_width);
        scope.stroke();
    }

    /// Queue the chord path of an `n`-pointed star onto the current path.
    ///
    /// Nothing is stroked or filled and the style is not touched; commit
    /// the path with [`stroke`](Self::stroke) or [`fill`](Self::fill).
    pub fn draw_star(&mut self, n: usize, x: f64, y: f64, r: f64) -> PasteResult<()> {
        let points = star_points(n, x, y, r)?;
        debug!("Queueing {}-point star at ({}, {}) r={}", n, x, y, r);
        for p in points {
            self.canvas.line_to(p.x, p.y);
        }
        Ok(())
    }
}

/// Guard returned by [`DrawingContext::scope`].
///
/// Dropping it restores the style that was current when it was created and
/// discards any pushes made inside the scope that were never popped. The
/// entry style is held by the guard, so extra pops inside the scope cannot
/// lose it; saved states popped past the scope's own entry are not pushed
/// back, and the stack is left at most at its entry depth.
pub struct StyleScope<'a, C: Canvas> {
    ctx: &'a mut DrawingContext<C>,
    depth: usize,
    entry: StyleState,
}

impl<C: Canvas> Deref for StyleScope<'_, C> {
    type Target = DrawingContext<C>;

    fn deref(&self) -> &Self::Target {
        &*self.ctx
    }
}

impl<C: Canvas> DerefMut for StyleScope<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.ctx
    }
}

impl<C: Canvas> Drop for StyleScope<'_, C> {
    fn drop(&mut self) {
        let entry = mem::take(&mut self.entry);
        self.ctx.unwind_to(self.depth, entry);
    }
}
