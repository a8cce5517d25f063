//! Font loading and caching
//!
//! Font files are read once per path, validated with ttf-parser and shared
//! through `Arc` so saved style states can hold a font without copying it.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use ttf_parser::{Face, GlyphId};

use crate::error::{PasteError, PasteResult};
use crate::text_layout::FontMetrics;

/// Load TTF/OTF font bytes from file path
pub fn load_font_file(path: &Path) -> PasteResult<Vec<u8>> {
    if !path.exists() {
        return Err(PasteError::font_load(path, "font file not found"));
    }

    let font_data = fs::read(path).map_err(|e| PasteError::font_load(path, e))?;

    // Validate font using ttf-parser
    Face::parse(&font_data, 0).map_err(|e| PasteError::font_load(path, e))?;

    Ok(font_data)
}

/// A loaded font at a point size
#[derive(Clone)]
pub struct FontFace {
    key: Arc<str>,
    data: Arc<Vec<u8>>,
    size: f64,
}

impl FontFace {
    /// Wrap in-memory font bytes, validating them first
    pub fn from_bytes(key: &str, data: Arc<Vec<u8>>, size: f64) -> PasteResult<Self> {
        Face::parse(&data, 0).map_err(|e| PasteError::font_load(key, e))?;
        Ok(Self {
            key: Arc::from(key),
            data,
            size,
        })
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Parsed face. The bytes were validated on construction.
    pub fn face(&self) -> Option<Face<'_>> {
        Face::parse(&self.data, 0).ok()
    }

    /// Font units to pixels
    pub fn scale(&self) -> f64 {
        self.face()
            .map(|face| self.size / face.units_per_em() as f64)
            .unwrap_or(0.0)
    }

    pub fn metrics(&self) -> FontMetrics {
        match self.face() {
            Some(face) => FontMetrics::from_face(&face, self.size),
            None => FontMetrics::default(self.size),
        }
    }

    /// Horizontal advance of `text` in pixels
    pub fn measure(&self, text: &str) -> f64 {
        let Some(face) = self.face() else {
            return 0.0;
        };
        let scale = self.size / face.units_per_em() as f64;
        text.chars()
            .map(|ch| {
                let glyph = face.glyph_index(ch).unwrap_or(GlyphId(0));
                face.glyph_hor_advance(glyph).unwrap_or(0) as f64 * scale
            })
            .sum()
    }
}

impl PartialEq for FontFace {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && Arc::ptr_eq(&self.data, &other.data) && self.size == other.size
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace")
            .field("key", &self.key)
            .field("size", &self.size)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Cache of font bytes keyed by file path
#[derive(Default)]
pub struct FontRegistry {
    fonts: HashMap<PathBuf, Arc<Vec<u8>>>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.fonts.contains_key(path)
    }

    /// Get cached bytes or read and validate the file
    pub fn get_or_load(&mut self, path: &Path) -> PasteResult<Arc<Vec<u8>>> {
        if let Some(data) = self.fonts.get(path) {
            return Ok(Arc::clone(data));
        }
        let data = Arc::new(load_font_file(path)?);
        debug!("Loaded font {} ({} bytes)", path.display(), data.len());
        self.fonts.insert(path.to_path_buf(), Arc::clone(&data));
        Ok(data)
    }

    /// Load the font at `path` and size it
    pub fn load(&mut self, path: &Path, size: f64) -> PasteResult<FontFace> {
        let data = self.get_or_load(path)?;
        Ok(FontFace {
            key: Arc::from(path.to_string_lossy().as_ref()),
            data,
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_font_file() {
        let mut registry = FontRegistry::new();
        let path = Path::new("/nonexistent/fonts/missing.ttf");
        match registry.load(path, 12.0) {
            Err(PasteError::FontLoad { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected font load error, got {:?}", other),
        }
        assert!(!registry.contains(path));
    }

    #[test]
    fn test_invalid_font_bytes() {
        let data = Arc::new(b"not a font".to_vec());
        assert!(matches!(
            FontFace::from_bytes("junk", data, 12.0),
            Err(PasteError::FontLoad { .. })
        ));
    }

    #[test]
    fn test_invalid_font_file() {
        let path = std::env::temp_dir().join("paste_canvas_not_a_font.ttf");
        fs::write(&path, b"definitely not a font").unwrap();
        let result = load_font_file(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(PasteError::FontLoad { .. })));
    }
}
