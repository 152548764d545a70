//! Frame abstraction for drawing primitives
//!
//! Wraps a `0xAARRGGBB` pixel buffer (the softbuffer surface, or an offscreen
//! buffer in headless mode) with clipped drawing operations.

use fontdue::Font;

use super::GlyphCache;
use crate::geometry::IRect;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns an opaque color.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (r << 16) | (g << 8) | b
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels and may be negative; anything outside the
/// frame or the current clip rectangle is dropped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<IRect>,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced so
    /// no access can go out of bounds.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 && buffer.len() < width * height {
            buffer.len() / width
        } else {
            height
        };

        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Full frame as a rectangle
    #[inline]
    pub fn bounds(&self) -> IRect {
        IRect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Restrict all subsequent drawing to `rect`
    pub fn set_clip(&mut self, rect: IRect) {
        self.clip = Some(rect.intersect(&self.bounds()));
    }

    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    /// Current drawable area
    #[inline]
    fn drawable(&self) -> IRect {
        self.clip.unwrap_or_else(|| self.bounds())
    }

    /// Clear the entire buffer with a solid color, ignoring the clip
    #[inline]
    pub fn clear(&mut self, color: u32) {
        let len = self.width * self.height;
        self.buffer[..len].fill(color);
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: IRect, color: u32) {
        let r = rect.intersect(&self.drawable());
        if r.is_empty() {
            return;
        }
        for y in r.y0..r.y1 {
            let row_start = y as usize * self.width;
            self.buffer[row_start + r.x0 as usize..row_start + r.x1 as usize].fill(color);
        }
    }

    /// Fill a rectangle with alpha blending (color is ARGB format)
    pub fn blend_rect(&mut self, rect: IRect, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect(rect, color);
        }

        let r = rect.intersect(&self.drawable());
        if r.is_empty() {
            return;
        }
        for y in r.y0..r.y1 {
            let row_start = y as usize * self.width;
            for x in r.x0..r.x1 {
                let idx = row_start + x as usize;
                self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
            }
        }
    }

    /// Set a single pixel (bounds-checked, respects clip rect)
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if self.drawable().contains(x as f64, y as f64) {
            self.buffer[y as usize * self.width + x as usize] = color;
        }
    }

    /// Get a single pixel (returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend a pixel with alpha (ARGB format, alpha in high byte)
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: u32, alpha: f32) {
        if !self.drawable().contains(x as f64, y as f64) || alpha <= 0.0 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.buffer[idx] = if alpha >= 1.0 {
            color | 0xFF000000
        } else {
            blend_colors(self.buffer[idx], color, alpha)
        };
    }

    /// Copy one row of 4-byte little-endian pixels starting at `(x, y)`.
    ///
    /// Each 4-byte group is read as a little-endian `u32`, so a `B,G,R,A`
    /// byte sequence lands as `0xAARRGGBB`. Parts of the row outside the
    /// drawable area are skipped.
    pub fn write_row_bytes(&mut self, x: i32, y: i32, bytes: &[u8]) {
        let area = self.drawable();
        if y < area.y0 || y >= area.y1 {
            return;
        }

        let pixels = (bytes.len() / 4) as i32;
        let start = x.max(area.x0);
        let end = (x + pixels).min(area.x1);
        if start >= end {
            return;
        }

        let row_start = y as usize * self.width;
        for px in start..end {
            let src = ((px - x) * 4) as usize;
            let value = u32::from_le_bytes([
                bytes[src],
                bytes[src + 1],
                bytes[src + 2],
                bytes[src + 3],
            ]);
            self.buffer[row_start + px as usize] = value;
        }
    }

    /// Draw a rectangle with a 1px border
    pub fn draw_bordered_rect(&mut self, rect: IRect, fill_color: u32, border_color: u32) {
        if (fill_color >> 24) & 0xFF == 0xFF {
            self.fill_rect(rect, fill_color);
        } else {
            self.blend_rect(rect, fill_color);
        }

        let border = border_color | 0xFF000000;
        let IRect { x0, y0, x1, y1 } = rect;
        self.fill_rect(IRect::new(x0, y0, x1, y0 + 1), border);
        self.fill_rect(IRect::new(x0, y1 - 1, x1, y1), border);
        self.fill_rect(IRect::new(x0, y0, x0 + 1, y1), border);
        self.fill_rect(IRect::new(x1 - 1, y0, x1, y1), border);
    }
}

/// Text rendering context wrapping font and glyph cache.
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
    font_size: f32,
    ascent: f32,
    line_height: usize,
}

impl<'a> TextPainter<'a> {
    pub fn new(font: &'a Font, glyph_cache: &'a mut GlyphCache, font_size: f32) -> Self {
        let (ascent, line_height) = match font.horizontal_line_metrics(font_size) {
            Some(m) => (m.ascent, m.new_line_size.ceil() as usize),
            None => (font_size * 0.8, (font_size * 1.2).ceil() as usize),
        };

        Self {
            font,
            glyph_cache,
            font_size,
            ascent,
            line_height,
        }
    }

    /// Get the line height in pixels
    #[inline]
    pub fn line_height(&self) -> usize {
        self.line_height
    }

    /// Draw text with its top edge at `y`
    pub fn draw(&mut self, frame: &mut Frame, x: i32, y: i32, text: &str, color: u32) {
        let mut current_x = x as f32;
        let baseline = y as f32 + self.ascent;

        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let alpha = bitmap[bitmap_y * metrics.width + bitmap_x];
                    if alpha == 0 {
                        continue;
                    }
                    let px = current_x as i32 + bitmap_x as i32 + metrics.xmin;
                    let py = (glyph_top + bitmap_y as f32) as i32;
                    frame.blend_pixel(px, py, color, alpha as f32 / 255.0);
                }
            }

            current_x += metrics.advance_width;
        }
    }

    /// Measure text width in pixels
    pub fn measure_width(&mut self, text: &str) -> f32 {
        let mut width = 0.0;
        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, _) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));
            width += metrics.advance_width;
        }
        width
    }
}
