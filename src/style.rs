//! Style state and the save/restore stack

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::font_registry::FontFace;

/// Style applied to subsequent drawing operations
#[derive(Debug, Clone, PartialEq)]
pub struct StyleState {
    pub color: Rgba,
    pub font: Option<FontFace>,
    pub line_width: f64,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            font: None,
            line_width: 1.0,
        }
    }
}

impl StyleState {
    /// Push every field of this state onto the canvas
    pub fn apply_to<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.set_rgba(self.color);
        canvas.set_line_width(self.line_width);
        canvas.set_font(self.font.as_ref());
    }
}

/// LIFO of saved style states
#[derive(Debug, Clone, Default)]
pub struct StyleStack {
    saved: Vec<StyleState>,
}

impl StyleStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }

    pub fn push(&mut self, state: StyleState) {
        self.saved.push(state);
    }

    pub fn pop(&mut self) -> Option<StyleState> {
        self.saved.pop()
    }

    /// Drop every entry at index `depth` and above
    pub fn truncate(&mut self, depth: usize) {
        self.saved.truncate(depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_width(line_width: f64) -> StyleState {
        StyleState {
            line_width,
            ..StyleState::default()
        }
    }

    #[test]
    fn test_lifo() {
        let mut stack = StyleStack::new();
        stack.push(with_width(1.0));
        stack.push(with_width(2.0));
        assert_eq!(stack.pop().map(|s| s.line_width), Some(2.0));
        assert_eq!(stack.pop().map(|s| s.line_width), Some(1.0));
        assert!(stack.pop().is_none());
    }

    #[test]
    fn test_truncate_keeps_older_entries() {
        let mut stack = StyleStack::new();
        for w in [1.0, 2.0, 3.0, 4.0] {
            stack.push(with_width(w));
        }
        stack.truncate(1);
        assert_eq!(stack.len(), 1);
        stack.truncate(3);
        assert_eq!(stack.pop().map(|s| s.line_width), Some(1.0));
    }
}
