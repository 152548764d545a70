use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{anyhow, Context as _, Result};
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::{CursorIcon, ResizeDirection, Window, WindowId};

use pageview::commands::{Cmd, ResizeEdge};
use pageview::config::ViewerConfig;
use pageview::input::handle_key;
use pageview::messages::{AppMsg, LayoutMsg, Msg, NavMsg, PointerMsg, SessionMsg};
use pageview::model::AppModel;
use pageview::picker;
use pageview::update::update;
use pageview::view::chrome::{hit_test, HitTarget};
use pageview::view::font::load_chrome_font;

use super::renderer::Renderer;

/// Pixel deltas (touchpads) per wheel line
const PIXELS_PER_LINE: f64 = 40.0;

pub struct App {
    model: AppModel,
    config: ViewerConfig,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    modifiers: ModifiersState,
    mouse_position: Option<(f64, f64)>,
    init_error: Option<anyhow::Error>,
}

impl App {
    pub fn new(model: AppModel, config: ViewerConfig, initial: Option<(PathBuf, usize)>) -> Self {
        let mut app = Self {
            model,
            config,
            renderer: None,
            window: None,
            context: None,
            modifiers: ModifiersState::empty(),
            mouse_position: None,
            init_error: None,
        };

        if let Some((path, page)) = initial {
            update(&mut app.model, Msg::Session(SessionMsg::Open(path)));
            if app.model.session.is_open() && page > 1 {
                update(&mut app.model, Msg::Nav(NavMsg::JumpTo(page)));
            }
        }

        app
    }

    /// Error that stopped the window from coming up, if any
    pub fn take_init_error(&mut self) -> Option<anyhow::Error> {
        self.init_error.take()
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.model.layout.outer;
        let attributes = Window::default_attributes()
            .with_title(self.model.window_title())
            .with_decorations(false)
            .with_inner_size(PhysicalSize::new(width, height));

        let window = Rc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create window")?,
        );
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create graphics context: {}", e))?;

        let font = load_chrome_font(self.config.font_path.as_deref());
        if font.is_none() {
            tracing::warn!("No chrome font found; menus and titles are drawn without text");
        }

        self.renderer = Some(Renderer::new(Rc::clone(&window), &context, font)?);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                handle_key(
                    &mut self.model,
                    &event.logical_key,
                    self.modifiers.control_key(),
                )
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                self.update_cursor_icon(position.x, position.y);
                None
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_position = None;
                None
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.mouse_position?;
                update(&mut self.model, Msg::Pointer(PointerMsg::Press { x, y }))
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let (x, y) = self.mouse_position?;
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, dy) => *dy,
                    MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_LINE) as f32,
                };
                update(&mut self.model, Msg::Pointer(PointerMsg::Wheel { x, y, lines }))
            }
            WindowEvent::Resized(size) => update(
                &mut self.model,
                Msg::Layout(LayoutMsg::Resize {
                    width: size.width,
                    height: size.height,
                }),
            ),
            WindowEvent::Focused(focused) => {
                update(&mut self.model, Msg::App(AppMsg::FocusChanged(*focused)))
            }
            _ => None,
        }
    }

    fn update_cursor_icon(&self, x: f64, y: f64) {
        let Some(window) = &self.window else {
            return;
        };
        let icon = match hit_test(&self.model, x, y) {
            HitTarget::Border(edge) => resize_cursor(edge),
            HitTarget::MenuEntry(_) | HitTarget::DropdownItem(_) | HitTarget::CloseButton => {
                CursorIcon::Pointer
            }
            _ => CursorIcon::Default,
        };
        window.set_cursor(icon);
    }

    /// Run a command and request at most one redraw for it
    fn dispatch(&mut self, event_loop: &ActiveEventLoop, cmd: Cmd) {
        let needs_redraw = cmd.needs_redraw();
        self.process_cmd(event_loop, cmd);
        if needs_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn process_cmd(&mut self, event_loop: &ActiveEventLoop, cmd: Cmd) {
        match cmd {
            // Redraws are requested by `dispatch`
            Cmd::None | Cmd::Redraw => {}
            Cmd::ShowOpenDialog => {
                let start_dir = self
                    .model
                    .session
                    .document()
                    .and_then(|doc| doc.path.parent().map(|p| p.to_path_buf()));
                let msg = match picker::pick_file(
                    self.config.picker_command.as_deref(),
                    start_dir.as_deref(),
                ) {
                    Some(path) => SessionMsg::Open(path),
                    None => SessionMsg::OpenCancelled,
                };
                if let Some(next) = update(&mut self.model, Msg::Session(msg)) {
                    self.dispatch(event_loop, next);
                }
            }
            Cmd::DragWindow => {
                if let Some(window) = &self.window {
                    if let Err(e) = window.drag_window() {
                        tracing::debug!("Window drag unavailable: {}", e);
                    }
                }
            }
            Cmd::DragResize(edge) => {
                if let Some(window) = &self.window {
                    if let Err(e) = window.drag_resize_window(resize_direction(edge)) {
                        tracing::debug!("Window resize drag unavailable: {}", e);
                    }
                }
            }
            Cmd::Quit => event_loop.exit(),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(event_loop, cmd);
                }
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&mut self.model)?;
        }
        Ok(())
    }
}

fn resize_direction(edge: ResizeEdge) -> ResizeDirection {
    match edge {
        ResizeEdge::North => ResizeDirection::North,
        ResizeEdge::South => ResizeDirection::South,
        ResizeEdge::East => ResizeDirection::East,
        ResizeEdge::West => ResizeDirection::West,
        ResizeEdge::NorthEast => ResizeDirection::NorthEast,
        ResizeEdge::NorthWest => ResizeDirection::NorthWest,
        ResizeEdge::SouthEast => ResizeDirection::SouthEast,
        ResizeEdge::SouthWest => ResizeDirection::SouthWest,
    }
}

fn resize_cursor(edge: ResizeEdge) -> CursorIcon {
    match edge {
        ResizeEdge::North | ResizeEdge::South => CursorIcon::NsResize,
        ResizeEdge::East | ResizeEdge::West => CursorIcon::EwResize,
        ResizeEdge::NorthEast | ResizeEdge::SouthWest => CursorIcon::NeswResize,
        ResizeEdge::NorthWest | ResizeEdge::SouthEast => CursorIcon::NwseResize,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            tracing::error!("Window initialization failed: {:#}", e);
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = &self.window else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render failed: {:#}", e);
                }
            }
            event => {
                if let Some(cmd) = self.handle_event(&event) {
                    self.dispatch(event_loop, cmd);
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}
