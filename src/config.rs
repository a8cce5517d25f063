//! Context and canvas configuration
//!
//! Every field has a default so a partial JSON document (or none at all)
//! is enough.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PasteResult;

pub const DEFAULT_TTF_PATH: &str = "./ttf/zh-cn.ttf";
pub const DEFAULT_TTF_DIR: &str = "./ttf";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Font used by `paste_string_default`
    pub default_font_path: PathBuf,
    /// Directory searched by file name when `default_font_path` is missing
    pub font_dir: PathBuf,
    /// Initial stroke width
    pub line_width: f64,
    pub anti_alias: bool,
    /// Color spec the raster canvas is cleared to; transparent if unset
    pub background: Option<String>,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            default_font_path: PathBuf::from(DEFAULT_TTF_PATH),
            font_dir: PathBuf::from(DEFAULT_TTF_DIR),
            line_width: 1.0,
            anti_alias: true,
            background: None,
        }
    }
}

impl ContextConfig {
    pub fn from_json_str(json: &str) -> PasteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> PasteResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The default font path as configured, or its file name inside
    /// `font_dir` when the configured path does not exist. Falls back to
    /// the configured path so load errors name what the user asked for.
    pub fn resolve_default_font_path(&self) -> PathBuf {
        if self.default_font_path.exists() {
            return self.default_font_path.clone();
        }
        self.default_font_path
            .file_name()
            .map(|name| self.font_dir.join(name))
            .filter(|candidate| candidate.exists())
            .unwrap_or_else(|| self.default_font_path.clone())
    }
}
