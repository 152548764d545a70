//! Raster pipeline: rasterize a page, fix channel order, blit into a frame

use thiserror::Error;

use crate::engine::{EngineError, PageSource, Pixmap};
use crate::geometry::IRect;
use crate::transform::{compute_view_transform, TransformError, ViewParams, ViewTransform};
use crate::view::Frame;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot load page {page}: {reason}")]
    PageLoad { page: usize, reason: String },
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Where a page lands in the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Drawable area size the page is centred in
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Top-left corner of the drawable area (chrome insets)
    pub inset_left: i32,
    pub inset_top: i32,
}

impl Placement {
    pub fn new(viewport_width: u32, viewport_height: u32, inset_left: i32, inset_top: i32) -> Self {
        Self {
            viewport_width,
            viewport_height,
            inset_left,
            inset_top,
        }
    }

    /// The drawable area in frame coordinates
    pub fn content_rect(&self) -> IRect {
        IRect::from_xywh(
            self.inset_left,
            self.inset_top,
            self.viewport_width as i32,
            self.viewport_height as i32,
        )
    }

    /// Top-left of a `width x height` box centred in the viewport.
    ///
    /// Signed: a page larger than the viewport gets a negative offset and is
    /// clipped on both sides.
    pub fn offset_for(&self, width: i32, height: i32) -> (i32, i32) {
        (
            (self.viewport_width as i32 - width) / 2 + self.inset_left,
            (self.viewport_height as i32 - height) / 2 + self.inset_top,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    /// Non-fatal engine problems; any value above zero marks the run as errored
    pub warnings: u32,
    /// Final destination box of the page, in device pixels
    pub bbox: IRect,
    /// Frame position of the box's top-left pixel
    pub origin: (i32, i32),
}

/// Swap the first and third byte of every 4-byte pixel.
///
/// Engines hand back `R,G,B,A`; the surface wants `B,G,R,A` bytes so each
/// pixel reads as `0xAARRGGBB` once taken as a little-endian word.
pub fn reorder_channels(samples: &mut [u8]) {
    for px in samples.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
}

/// Check a 1-based page number against the document
fn check_page(doc: &dyn PageSource, page: usize) -> Result<usize, RenderError> {
    let count = doc.page_count();
    if page == 0 || page > count {
        return Err(RenderError::PageLoad {
            page,
            reason: format!("document has {} pages", count),
        });
    }
    Ok(page - 1)
}

fn page_load_error(page: usize, err: EngineError) -> RenderError {
    match err {
        EngineError::PageLoad { reason, .. } => RenderError::PageLoad { page, reason },
        EngineError::PageOutOfRange { count, .. } => RenderError::PageLoad {
            page,
            reason: format!("document has {} pages", count),
        },
        other => RenderError::Engine(other),
    }
}

/// Copy a channel-reordered pixmap into the frame with its top-left at `origin`
pub fn blit_pixmap(frame: &mut Frame, pixmap: &Pixmap, origin: (i32, i32)) {
    for row in 0..pixmap.height {
        frame.write_row_bytes(origin.0, origin.1 + row as i32, pixmap.row(row));
    }
}

/// Rasterize `page` (1-based) through a precomputed transform and blit it
pub fn render_page(
    doc: &dyn PageSource,
    page: usize,
    transform: &ViewTransform,
    frame: &mut Frame,
    placement: Placement,
) -> Result<RenderReport, RenderError> {
    let index = check_page(doc, page)?;
    let bbox = transform.bbox;

    let mut output = doc
        .rasterize(index, &transform.matrix, bbox)
        .map_err(|e| page_load_error(page, e))?;
    reorder_channels(&mut output.pixmap.samples);

    let origin = placement.offset_for(bbox.width(), bbox.height());
    frame.set_clip(placement.content_rect());
    blit_pixmap(frame, &output.pixmap, origin);
    frame.clear_clip();

    if output.warnings > 0 {
        tracing::warn!(page, warnings = output.warnings, "engine reported problems");
    }

    Ok(RenderReport {
        warnings: output.warnings,
        bbox,
        origin,
    })
}

/// Fit `page` (1-based) into the placement's viewport and render it
pub fn render_fitted(
    doc: &dyn PageSource,
    page: usize,
    params: &ViewParams,
    frame: &mut Frame,
    placement: Placement,
) -> Result<RenderReport, RenderError> {
    let index = check_page(doc, page)?;
    let bounds = doc
        .page_bounds(index)
        .map_err(|e| page_load_error(page, e))?;
    let transform = compute_view_transform(
        bounds,
        params,
        placement.viewport_width,
        placement.viewport_height,
    )?;

    tracing::debug!(
        page,
        bbox_w = transform.bbox.width(),
        bbox_h = transform.bbox.height(),
        scale_x = transform.scale_x,
        scale_y = transform.scale_y,
        "rendering page"
    );

    render_page(doc, page, &transform, frame, placement)
}
