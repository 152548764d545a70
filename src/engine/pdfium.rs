//! PDFium-backed engine via `pdfium-render`

use std::path::{Path, PathBuf};

use pdfium_render::prelude::*;

use super::{DocumentEngine, EngineError, PageSource, Pixmap, RasterOutput};
use crate::geometry::{IRect, Matrix, Rect};

pub struct PdfiumEngine {
    pdfium: &'static Pdfium,
}

impl PdfiumEngine {
    /// Bind to the PDFium shared library.
    ///
    /// Looks in `library_dir` first when given, then next to the executable's
    /// working directory, then falls back to the system library path.
    pub fn new(library_dir: Option<&Path>) -> Result<Self, EngineError> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Some(dir) = library_dir {
            candidates.push(dir.to_path_buf());
        }
        candidates.push(PathBuf::from("./"));

        let mut last_error = None;
        for dir in &candidates {
            match Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir)) {
                Ok(bindings) => {
                    tracing::info!("Bound PDFium from {}", dir.display());
                    return Ok(Self::from_bindings(bindings));
                }
                Err(e) => {
                    tracing::debug!("No PDFium library in {}: {}", dir.display(), e);
                    last_error = Some(e.to_string());
                }
            }
        }

        match Pdfium::bind_to_system_library() {
            Ok(bindings) => {
                tracing::info!("Bound system PDFium library");
                Ok(Self::from_bindings(bindings))
            }
            Err(e) => Err(EngineError::Init(format!(
                "{} (last local attempt: {})",
                e,
                last_error.unwrap_or_else(|| "none".to_string())
            ))),
        }
    }

    fn from_bindings(bindings: Box<dyn PdfiumLibraryBindings>) -> Self {
        // The library stays bound for the life of the process
        let pdfium: &'static Pdfium = Box::leak(Box::new(Pdfium::new(bindings)));
        Self { pdfium }
    }
}

impl DocumentEngine for PdfiumEngine {
    fn open(&self, path: &Path) -> Result<Box<dyn PageSource>, EngineError> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| EngineError::Open {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(Box::new(PdfiumDocument { document }))
    }
}

struct PdfiumDocument {
    document: PdfDocument<'static>,
}

impl PdfiumDocument {
    fn page(&self, index: usize) -> Result<PdfPage<'_>, EngineError> {
        let count = self.page_count();
        if index >= count {
            return Err(EngineError::PageOutOfRange { index, count });
        }
        self.document
            .pages()
            .get(index as PdfPageIndex)
            .map_err(|e| EngineError::PageLoad {
                index,
                reason: e.to_string(),
            })
    }
}

/// Exact bitmap size and rotation requested from PDFium for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RenderTarget {
    /// Size of the unrotated page image; each axis is scaled on its own
    width: u32,
    height: u32,
    quarter_turns: u8,
}

impl RenderTarget {
    /// PDFium only rotates in quarter turns, and sizes refer to the page
    /// before rotation, so odd turns swap the bbox axes.
    fn for_bbox(matrix: &Matrix, bbox: IRect) -> Self {
        let width = bbox.width().max(0) as u32;
        let height = bbox.height().max(0) as u32;
        let quarter_turns = matrix.quarter_turns();
        let (width, height) = if quarter_turns % 2 == 1 {
            (height, width)
        } else {
            (width, height)
        };
        Self {
            width,
            height,
            quarter_turns,
        }
    }

    fn config(&self) -> PdfRenderConfig {
        // Both axes fixed so stretch-fit is honoured
        PdfRenderConfig::new()
            .set_target_size(self.width as i32, self.height as i32)
            .rotate(render_rotation(self.quarter_turns), false)
    }
}

fn render_rotation(quarter_turns: u8) -> PdfPageRenderRotation {
    match quarter_turns {
        1 => PdfPageRenderRotation::Degrees90,
        2 => PdfPageRenderRotation::Degrees180,
        3 => PdfPageRenderRotation::Degrees270,
        _ => PdfPageRenderRotation::None,
    }
}

impl PageSource for PdfiumDocument {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn page_bounds(&self, index: usize) -> Result<Rect, EngineError> {
        let page = self.page(index)?;
        Ok(Rect::from_size(page.width().value, page.height().value))
    }

    fn rasterize(
        &self,
        index: usize,
        matrix: &Matrix,
        bbox: IRect,
    ) -> Result<RasterOutput, EngineError> {
        let page = self.page(index)?;
        let width = bbox.width().max(0) as u32;
        let height = bbox.height().max(0) as u32;
        let mut pixmap = Pixmap::white(width, height);
        if width == 0 || height == 0 {
            return Ok(RasterOutput { pixmap, warnings: 0 });
        }

        let config = RenderTarget::for_bbox(matrix, bbox).config();
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| EngineError::Rasterize {
                index,
                reason: e.to_string(),
            })?;

        let src_w = bitmap.width().max(0) as usize;
        let src_h = bitmap.height().max(0) as usize;
        let rgba = bitmap.as_rgba_bytes();

        // Copy the overlap; rounding can leave the bitmap a pixel off the bbox
        let copy_w = src_w.min(width as usize) * 4;
        let stride = pixmap.stride();
        for y in 0..src_h.min(height as usize) {
            let src = &rgba[y * src_w * 4..y * src_w * 4 + copy_w];
            pixmap.samples[y * stride..y * stride + copy_w].copy_from_slice(src);
        }

        Ok(RasterOutput { pixmap, warnings: 0 })
    }
}
