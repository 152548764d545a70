//! View transform calculation
//!
//! Maps a page's native bounds plus the view parameters (zoom, rotation,
//! fit mode) and an available target size onto a single affine transform
//! and the integer destination box the rendered page occupies.

use thiserror::Error;

use crate::geometry::{IRect, Matrix, Rect};

/// Resolution (DPI) at which one page unit maps to one pixel
pub const BASE_RESOLUTION: f32 = 72.0;

/// How a page is scaled into the target size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Both axes share the tighter scale so the whole page is visible
    #[default]
    Preserve,
    /// Each constrained axis scales independently; aspect ratio is not kept
    Stretch,
}

/// Process-wide view configuration, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    /// Zoom factor, `resolution / BASE_RESOLUTION`
    pub zoom: f32,
    /// Rotation in degrees
    pub rotation: f32,
    pub fit_mode: FitMode,
    /// An explicit resolution was requested; target sizes only shrink the page
    pub resolution_specified: bool,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            rotation: 0.0,
            fit_mode: FitMode::Preserve,
            resolution_specified: false,
        }
    }
}

impl ViewParams {
    /// Build parameters from an optional DPI value
    pub fn from_resolution(resolution: Option<f32>, rotation: f32, fit_mode: FitMode) -> Self {
        Self {
            zoom: resolution.unwrap_or(BASE_RESOLUTION) / BASE_RESOLUTION,
            rotation,
            fit_mode,
            resolution_specified: resolution.is_some(),
        }
    }
}

/// Result of a transform calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Page space to device space
    pub matrix: Matrix,
    /// Integer destination box in device pixels
    pub bbox: IRect,
    /// Fit scale applied on top of zoom/rotation along x
    pub scale_x: f32,
    /// Fit scale applied on top of zoom/rotation along y
    pub scale_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TransformError {
    #[error("page has degenerate bounds ({width} x {height})")]
    DegeneratePage { width: f32, height: f32 },
    #[error("zoom must be a positive finite number, got {0}")]
    InvalidZoom(f32),
}

/// Compute the page transform for a target size.
///
/// A zero target dimension leaves that axis unconstrained. Degenerate page
/// bounds are rejected before any division happens.
pub fn compute_view_transform(
    page_bounds: Rect,
    params: &ViewParams,
    target_width: u32,
    target_height: u32,
) -> Result<ViewTransform, TransformError> {
    if !params.zoom.is_finite() || params.zoom <= 0.0 {
        return Err(TransformError::InvalidZoom(params.zoom));
    }
    if page_bounds.width() <= 0.0 || page_bounds.height() <= 0.0 {
        return Err(TransformError::DegeneratePage {
            width: page_bounds.width(),
            height: page_bounds.height(),
        });
    }

    let mut ctm = Matrix::scale(params.zoom, params.zoom).concat(&Matrix::rotate(params.rotation));
    let mut bounds = page_bounds.transform(&ctm);
    let bbox = bounds.round();

    let mut w = target_width;
    let mut h = target_height;

    // An explicit resolution wins unless the page overflows the target
    if params.resolution_specified {
        if w != 0 && bbox.width() as i64 <= w as i64 {
            w = 0;
        }
        if h != 0 && bbox.height() as i64 <= h as i64 {
            h = 0;
        }
    }

    let mut scale_x = 1.0_f32;
    let mut scale_y = 1.0_f32;

    if w != 0 || h != 0 {
        let width = bounds.width();
        let height = bounds.height();
        if width <= 0.0 || height <= 0.0 {
            return Err(TransformError::DegeneratePage { width, height });
        }

        scale_x = w as f32 / width;
        scale_y = h as f32 / height;

        match params.fit_mode {
            FitMode::Stretch => {
                if w == 0 {
                    scale_x = 1.0;
                }
                if h == 0 {
                    scale_y = 1.0;
                }
            }
            FitMode::Preserve => {
                if w == 0 {
                    scale_x = scale_y;
                }
                if h == 0 {
                    scale_y = scale_x;
                }
                // Always the tighter of the two, even after inheritance
                let tight = scale_x.min(scale_y);
                scale_x = tight;
                scale_y = tight;
            }
        }

        ctm = ctm.concat(&Matrix::scale(scale_x, scale_y));
        bounds = page_bounds.transform(&ctm);
    }

    Ok(ViewTransform {
        matrix: ctm,
        bbox: bounds.round(),
        scale_x,
        scale_y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTER: Rect = Rect {
        x0: 0.0,
        y0: 0.0,
        x1: 612.0,
        y1: 792.0,
    };

    #[test]
    fn test_no_target_keeps_native_size() {
        let t = compute_view_transform(LETTER, &ViewParams::default(), 0, 0).unwrap();
        assert_eq!(t.bbox, IRect::new(0, 0, 612, 792));
        assert_eq!(t.scale_x, 1.0);
        assert_eq!(t.scale_y, 1.0);
    }

    #[test]
    fn test_zoom_from_resolution() {
        let params = ViewParams::from_resolution(Some(144.0), 0.0, FitMode::Preserve);
        assert_eq!(params.zoom, 2.0);
        assert!(params.resolution_specified);
        let t = compute_view_transform(LETTER, &params, 0, 0).unwrap();
        assert_eq!(t.bbox, IRect::new(0, 0, 1224, 1584));
    }

    #[test]
    fn test_preserve_fit_uses_tighter_axis() {
        let t = compute_view_transform(LETTER, &ViewParams::default(), 512, 512).unwrap();
        assert_eq!(t.scale_x, t.scale_y);
        assert!((t.scale_y - 512.0 / 792.0).abs() < 1e-6);
        assert!(t.bbox.width() <= 512);
        assert_eq!(t.bbox.height(), 512);
    }

    #[test]
    fn test_stretch_fit_scales_axes_independently() {
        let params = ViewParams {
            fit_mode: FitMode::Stretch,
            ..ViewParams::default()
        };
        let t = compute_view_transform(LETTER, &params, 300, 400).unwrap();
        assert_eq!(t.bbox.width(), 300);
        assert_eq!(t.bbox.height(), 400);
    }

    #[test]
    fn test_resolution_specified_skips_fit_when_page_fits() {
        let params = ViewParams::from_resolution(Some(36.0), 0.0, FitMode::Preserve);
        let t = compute_view_transform(LETTER, &params, 512, 512).unwrap();
        assert_eq!(t.scale_x, 1.0);
        assert_eq!(t.bbox, IRect::new(0, 0, 306, 396));
    }

    #[test]
    fn test_resolution_specified_still_shrinks_overflow() {
        let params = ViewParams::from_resolution(Some(72.0), 0.0, FitMode::Preserve);
        // Width fits (612 <= 700) but height overflows (792 > 500)
        let t = compute_view_transform(LETTER, &params, 700, 500).unwrap();
        assert!((t.scale_y - 500.0 / 792.0).abs() < 1e-6);
        assert_eq!(t.scale_x, t.scale_y);
        assert_eq!(t.bbox.height(), 500);
    }

    #[test]
    fn test_rotation_swaps_box() {
        let params = ViewParams {
            rotation: 90.0,
            ..ViewParams::default()
        };
        let t = compute_view_transform(LETTER, &params, 0, 0).unwrap();
        assert_eq!(t.bbox.width(), 792);
        assert_eq!(t.bbox.height(), 612);
    }

    #[test]
    fn test_stretch_single_axis_leaves_other_at_one() {
        let params = ViewParams {
            fit_mode: FitMode::Stretch,
            ..ViewParams::default()
        };

        let t = compute_view_transform(LETTER, &params, 300, 0).unwrap();
        assert_eq!(t.scale_x, 300.0 / 612.0);
        assert_eq!(t.scale_y, 1.0);
        assert_eq!((t.bbox.width(), t.bbox.height()), (300, 792));

        let t = compute_view_transform(LETTER, &params, 0, 396).unwrap();
        assert_eq!(t.scale_x, 1.0);
        assert_eq!(t.scale_y, 396.0 / 792.0);
        assert_eq!((t.bbox.width(), t.bbox.height()), (612, 396));
    }

    #[test]
    fn test_preserve_single_axis_inherits_scale() {
        let t = compute_view_transform(LETTER, &ViewParams::default(), 300, 0).unwrap();
        assert_eq!(t.scale_x, 300.0 / 612.0);
        assert_eq!(t.scale_y, t.scale_x);
        assert_eq!((t.bbox.width(), t.bbox.height()), (300, 389));

        let t = compute_view_transform(LETTER, &ViewParams::default(), 0, 400).unwrap();
        assert_eq!(t.scale_y, 400.0 / 792.0);
        assert_eq!(t.scale_x, t.scale_y);
        assert_eq!((t.bbox.width(), t.bbox.height()), (310, 400));
    }

    const PAGES: [(f32, f32); 5] = [
        (612.0, 792.0),
        (792.0, 612.0),
        (100.0, 100.0),
        (595.0, 842.0),
        (2000.0, 300.0),
    ];

    const TARGETS: [(u32, u32); 7] = [
        (512, 512),
        (300, 200),
        (1, 1),
        (1920, 1080),
        (300, 0),
        (0, 300),
        (7, 4000),
    ];

    #[test]
    fn test_preserve_fit_always_square_and_inside_target() {
        for (pw, ph) in PAGES {
            for (w, h) in TARGETS {
                for rotation in [0.0, 90.0, 180.0, 270.0] {
                    let params = ViewParams {
                        rotation,
                        ..ViewParams::default()
                    };
                    let t = compute_view_transform(Rect::from_size(pw, ph), &params, w, h)
                        .unwrap();
                    let case = format!("page {}x{} target {}x{} rot {}", pw, ph, w, h, rotation);

                    assert_eq!(t.scale_x, t.scale_y, "{}", case);
                    if w != 0 {
                        assert!(t.bbox.width() <= w as i32, "{} bbox {:?}", case, t.bbox);
                    }
                    if h != 0 {
                        assert!(t.bbox.height() <= h as i32, "{} bbox {:?}", case, t.bbox);
                    }
                    // The tighter axis is filled
                    assert!(
                        t.bbox.width() == w as i32 || t.bbox.height() == h as i32,
                        "{} bbox {:?}",
                        case,
                        t.bbox
                    );
                }
            }
        }
    }

    #[test]
    fn test_stretch_constrained_axes_hit_target() {
        let params = ViewParams {
            fit_mode: FitMode::Stretch,
            ..ViewParams::default()
        };
        for (pw, ph) in PAGES {
            for (w, h) in TARGETS {
                let t = compute_view_transform(Rect::from_size(pw, ph), &params, w, h).unwrap();
                let case = format!("page {}x{} target {}x{}", pw, ph, w, h);

                if w == 0 {
                    assert_eq!(t.scale_x, 1.0, "{}", case);
                } else {
                    assert_eq!(t.scale_x, w as f32 / pw, "{}", case);
                    assert_eq!(t.bbox.width(), w as i32, "{}", case);
                }
                if h == 0 {
                    assert_eq!(t.scale_y, 1.0, "{}", case);
                } else {
                    assert_eq!(t.scale_y, h as f32 / ph, "{}", case);
                    assert_eq!(t.bbox.height(), h as i32, "{}", case);
                }
            }
        }
    }

    #[test]
    fn test_degenerate_page_is_rejected() {
        let err = compute_view_transform(Rect::from_size(0.0, 100.0), &ViewParams::default(), 10, 10)
            .unwrap_err();
        assert!(matches!(err, TransformError::DegeneratePage { .. }));
    }

    #[test]
    fn test_invalid_zoom_is_rejected() {
        let params = ViewParams {
            zoom: 0.0,
            ..ViewParams::default()
        };
        assert_eq!(
            compute_view_transform(LETTER, &params, 0, 0),
            Err(TransformError::InvalidZoom(0.0))
        );
    }
}
