//! Window layout: outer size, chrome insets and the page viewport

use serde::{Deserialize, Serialize};

use crate::geometry::IRect;

/// Drawable area excluding chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewportGeometry {
    pub width: u32,
    pub height: u32,
}

impl ViewportGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Sizes of the window decorations drawn around the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeMetrics {
    pub border_left: u32,
    pub border_right: u32,
    /// Title bar, part of the top border
    pub title_height: u32,
    pub border_bottom: u32,
    pub menu_bar_height: u32,
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self {
            border_left: 4,
            border_right: 4,
            title_height: 24,
            border_bottom: 4,
            menu_bar_height: 24,
        }
    }
}

/// Space taken by chrome on each side of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Insets {
    #[inline]
    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    #[inline]
    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowLayout {
    /// Outer window size in physical pixels
    pub outer: (u32, u32),
    pub chrome_visible: bool,
    pub metrics: ChromeMetrics,
    viewport: ViewportGeometry,
}

impl WindowLayout {
    /// Layout for a window whose viewport should be `viewport`.
    ///
    /// The outer size grows by the chrome insets so the page area keeps the
    /// requested size.
    pub fn new(viewport: ViewportGeometry, chrome_visible: bool, metrics: ChromeMetrics) -> Self {
        let mut layout = Self {
            outer: (0, 0),
            chrome_visible,
            metrics,
            viewport,
        };
        let insets = layout.insets();
        layout.outer = (
            viewport.width + insets.horizontal(),
            viewport.height + insets.vertical(),
        );
        layout
    }

    #[inline]
    pub fn viewport(&self) -> ViewportGeometry {
        self.viewport
    }

    /// Chrome insets, all zero while chrome is hidden
    pub fn insets(&self) -> Insets {
        if !self.chrome_visible {
            return Insets::default();
        }
        let m = &self.metrics;
        Insets {
            left: m.border_left,
            top: m.title_height + m.menu_bar_height,
            right: m.border_right,
            bottom: m.border_bottom,
        }
    }

    /// Store a new outer size and recompute the viewport
    pub fn resize(&mut self, outer_width: u32, outer_height: u32) {
        self.outer = (outer_width, outer_height);
        self.recompute();
    }

    pub fn toggle_chrome(&mut self) {
        self.chrome_visible = !self.chrome_visible;
        self.recompute();
    }

    fn recompute(&mut self) {
        let insets = self.insets();
        self.viewport = ViewportGeometry {
            width: self.outer.0.saturating_sub(insets.horizontal()),
            height: self.outer.1.saturating_sub(insets.vertical()),
        };
    }

    /// Viewport position and size inside the outer window
    pub fn content_rect(&self) -> IRect {
        let insets = self.insets();
        IRect::from_xywh(
            insets.left as i32,
            insets.top as i32,
            self.viewport.width as i32,
            self.viewport.height as i32,
        )
    }

    /// The whole window
    pub fn outer_rect(&self) -> IRect {
        IRect::from_xywh(0, 0, self.outer.0 as i32, self.outer.1 as i32)
    }
}
