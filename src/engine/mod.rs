//! Document engine seam
//!
//! The viewer never parses documents itself. An engine opens a file and hands
//! back a [`PageSource`] that knows page sizes and can rasterize a page under
//! an arbitrary transform.

pub mod pdfium;

use std::path::Path;

use thiserror::Error;

use crate::geometry::{IRect, Matrix, Rect};

pub use self::pdfium::PdfiumEngine;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to initialise document engine: {0}")]
    Init(String),
    #[error("cannot open {path}: {reason}")]
    Open { path: String, reason: String },
    #[error("page index {index} out of range (document has {count} pages)")]
    PageOutOfRange { index: usize, count: usize },
    #[error("failed to load page {index}: {reason}")]
    PageLoad { index: usize, reason: String },
    #[error("failed to rasterize page {index}: {reason}")]
    Rasterize { index: usize, reason: String },
}

/// Pixel buffer produced by an engine, 4 bytes per pixel in R,G,B,A order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    pub width: u32,
    pub height: u32,
    pub samples: Vec<u8>,
}

impl Pixmap {
    /// Opaque white pixmap of the given size
    pub fn white(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            samples: vec![0xFF; width as usize * height as usize * 4],
        }
    }

    /// Bytes in one row
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride();
        &self.samples[start..start + self.stride()]
    }
}

/// A rasterized page plus the number of non-fatal problems the engine hit
#[derive(Debug, Clone)]
pub struct RasterOutput {
    pub pixmap: Pixmap,
    pub warnings: u32,
}

/// An opened document. Page indices are 0-based at this seam.
pub trait PageSource {
    fn page_count(&self) -> usize;

    /// Native page bounds in page units (1/72 inch)
    fn page_bounds(&self, index: usize) -> Result<Rect, EngineError>;

    /// Draw the page through `matrix` into a white pixmap covering `bbox`
    fn rasterize(&self, index: usize, matrix: &Matrix, bbox: IRect)
        -> Result<RasterOutput, EngineError>;
}

/// Opens documents
pub trait DocumentEngine {
    fn open(&self, path: &Path) -> Result<Box<dyn PageSource>, EngineError>;
}
