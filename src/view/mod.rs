//! View layer - draws the whole window into a [`Frame`]
//!
//! The same drawing path serves the softbuffer surface and headless
//! offscreen buffers.

pub mod chrome;
pub mod font;
pub mod frame;

pub use frame::{Frame, TextPainter};

use std::collections::HashMap;

use fontdue::Metrics;

use crate::model::{AppModel, NavState};
use crate::raster::{render_fitted, Placement, RenderReport};

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Chrome text size in pixels
pub const CHROME_FONT_SIZE: f32 = 14.0;

/// Hint shown in an empty viewer
pub const NO_DOCUMENT_HINT: &str = "No document open. Press Ctrl+O to open one.";

/// Placement of the page area for the current layout
pub fn placement_for(model: &AppModel) -> Placement {
    let viewport = model.layout.viewport();
    let insets = model.layout.insets();
    Placement::new(
        viewport.width,
        viewport.height,
        insets.left as i32,
        insets.top as i32,
    )
}

/// Redraw the full window.
///
/// Page failures do not propagate: they become status text and the empty
/// view. Returns the render report when a page was drawn.
pub fn render_window(
    model: &mut AppModel,
    frame: &mut Frame,
    mut painter: Option<&mut TextPainter>,
) -> Option<RenderReport> {
    frame.clear(model.theme.background.to_argb_u32());

    if model.layout.chrome_visible {
        let title = model.window_title();
        chrome::draw_chrome(frame, model, &title, painter.as_deref_mut());
    }

    let placement = placement_for(model);
    let content = placement.content_rect();
    frame.fill_rect(content, model.theme.background.to_argb_u32());

    let mut report = None;
    if let (Some(doc), NavState::Viewing { page, .. }) =
        (model.session.document(), model.nav.state())
    {
        match render_fitted(doc.handle.as_ref(), page, &model.params, frame, placement) {
            Ok(r) => {
                if r.warnings > 0 {
                    model.had_errors = true;
                }
                report = Some(r);
            }
            Err(e) => {
                tracing::error!("Failed to render page {}: {}", page, e);
                model.ui.set_status(e.to_string());
            }
        }
    }

    if report.is_none() {
        frame.fill_rect(content, model.theme.empty_fill.to_argb_u32());
        let status = model.ui.status.as_deref().unwrap_or(NO_DOCUMENT_HINT);
        if let Some(p) = painter.as_deref_mut() {
            frame.set_clip(content);
            let y = content.y0 + (content.height() - p.line_height() as i32) / 2;
            p.draw(
                frame,
                content.x0 + 12,
                y,
                status,
                model.theme.status_text.to_argb_u32(),
            );
            frame.clear_clip();
        }
    }

    chrome::draw_dropdown(frame, model, painter.as_deref_mut());
    chrome::draw_overlay(frame, model, painter.as_deref_mut());

    report
}
