//! Softbuffer-backed window renderer

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use fontdue::Font;
use softbuffer::{Context, Surface};
use winit::window::Window;

use pageview::model::AppModel;
use pageview::view::{render_window, Frame, GlyphCache, TextPainter, CHROME_FONT_SIZE};

pub struct Renderer {
    window: Rc<Window>,
    surface: Surface<Rc<Window>, Rc<Window>>,
    font: Option<Font>,
    font_size: f32,
    glyph_cache: GlyphCache,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &Context<Rc<Window>>, font: Option<Font>) -> Result<Self> {
        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;

        // Chrome text scales with the display
        let font_size = CHROME_FONT_SIZE * window.scale_factor() as f32;

        Ok(Self {
            window,
            surface,
            font,
            font_size,
            glyph_cache: GlyphCache::new(),
        })
    }

    /// Draw the model into the surface and present it
    pub fn render(&mut self, model: &mut AppModel) -> Result<()> {
        let size = self.window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            // Minimized
            return Ok(());
        };

        if model.layout.outer != (size.width, size.height) {
            model.layout.resize(size.width, size.height);
        }

        self.surface
            .resize(width, height)
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;

        {
            let mut frame = Frame::new(&mut buffer, size.width as usize, size.height as usize);
            let mut painter = self
                .font
                .as_ref()
                .map(|font| TextPainter::new(font, &mut self.glyph_cache, self.font_size));

            #[cfg(feature = "profile-tracing")]
            let _span = tracing::info_span!("render_window").entered();

            render_window(model, &mut frame, painter.as_mut());
        }

        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))?;

        self.window.set_title(&model.window_title());
        Ok(())
    }
}
