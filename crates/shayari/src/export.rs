//! Export of composed scenes.
//!
//! This module provides the [`Exporter`] trait that turns a [`Scene`] into
//! encoded bytes. It is the final stage of the rendering pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! CardData + RenderMode
//!     ↓ layout
//! TextLayout
//!     ↓ compose
//! Scene
//!     ↓ export (this module)
//! PNG / SVG bytes
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - scene markup via [`svg::SvgExporter`]
//! - [`raster`] - pixels via [`raster::Rasterizer`] and PNG via
//!   [`raster::PngExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. It converts into the matching
//! [`ShayariError`] variant at the crate boundary. A failed export never
//! yields partial output.
//!
//! [`ShayariError`]: crate::ShayariError

/// Raster and PNG export backend.
pub mod raster;
/// SVG export backend.
pub mod svg;

use std::fmt;

use shayari_core::draw::Scene;

/// Abstraction for scene export backends.
pub trait Exporter {
    /// File extension of the produced format, without the dot.
    fn extension(&self) -> &'static str;

    /// Encodes `scene` into the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SurfaceUnavailable`] if no drawing surface of the
    /// scene's size can be allocated, [`Error::Svg`] if the scene markup is
    /// rejected, or [`Error::Encode`] if the final encoding step fails.
    fn export(&self, scene: &Scene) -> Result<Vec<u8>, Error>;
}

/// Errors that can occur while exporting a scene.
#[derive(Debug)]
pub enum Error {
    /// A pixel surface of the given size could not be allocated.
    SurfaceUnavailable { width: u32, height: u32 },
    /// The scene markup could not be parsed for rasterisation.
    Svg(String),
    /// The raster could not be encoded.
    Encode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceUnavailable { width, height } => {
                write!(f, "cannot allocate a {width}x{height} drawing surface")
            }
            Self::Svg(msg) => write!(f, "invalid scene markup: {msg}"),
            Self::Encode(msg) => write!(f, "encoding failed: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
