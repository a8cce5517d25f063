//! Drawing context for raster canvases
//!
//! Layers scoped style state, textual color resolution, wrapped text and
//! star paths on top of any [`Canvas`]. A tiny-skia backed
//! [`RasterCanvas`] is included.
//!
//! ```no_run
//! use paste_canvas::{DrawingContext, RasterCanvas};
//!
//! let mut ctx = DrawingContext::new(RasterCanvas::new(320, 240)?);
//! ctx.paste_line(10.0, 10.0, 300.0, 10.0, 2.0, "rgba(52,152,219,0.8)");
//! ctx.paste_string_default("hello", 18.0, 1.2, 10.0, 30.0, 300.0)?;
//!
//! ctx.push();
//! ctx.set_color_auto("yellow");
//! ctx.draw_star(5, 160.0, 150.0, 60.0)?;
//! ctx.fill();
//! ctx.pop();
//!
//! ctx.into_canvas().save_png("out.png".as_ref())?;
//! # Ok::<(), paste_canvas::PasteError>(())
//! ```

pub mod canvas;
pub mod color;
mod color_parser;
pub mod config;
pub mod context;
mod error;
pub mod font_registry;
pub mod geometry;
pub mod raster;
pub mod style;
pub mod text_layout;

#[cfg(test)]
mod test_support;

pub use canvas::Canvas;
pub use color::{parse_color_spec, resolve, ColorSpec, Rgba};
pub use color_parser::{Alpha, FunctionalColor};
pub use config::ContextConfig;
pub use context::{DrawingContext, StyleScope};
pub use error::{PasteError, PasteResult};
pub use font_registry::{FontFace, FontRegistry};
pub use geometry::{star_points, Point, StarSpec};
pub use raster::RasterCanvas;
pub use style::{StyleStack, StyleState};
pub use text_layout::TextAlign;
