//! Application model - the complete state of the viewer
//!
//! Everything the event loop mutates lives in one [`AppModel`] passed by
//! `&mut` into `update`.

pub mod layout;
pub mod navigation;
pub mod session;
pub mod ui;

pub use layout::{ChromeMetrics, Insets, ViewportGeometry, WindowLayout};
pub use navigation::{NavState, Navigator};
pub use session::{display_name_for, DocumentSession, OpenDocument, SessionError};
pub use ui::{Overlay, UiState};

use crate::engine::DocumentEngine;
use crate::theme::ChromeTheme;
use crate::transform::ViewParams;

/// Title shown when nothing is open
pub const APP_TITLE: &str = "pageview";

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    pub session: DocumentSession,
    pub nav: Navigator,
    pub layout: WindowLayout,
    /// Fixed at startup
    pub params: ViewParams,
    pub ui: UiState,
    pub theme: ChromeTheme,
    /// Set when a render reported engine problems
    pub had_errors: bool,
}

impl AppModel {
    pub fn new(
        engine: Box<dyn DocumentEngine>,
        params: ViewParams,
        layout: WindowLayout,
        theme: ChromeTheme,
    ) -> Self {
        Self {
            session: DocumentSession::new(engine),
            nav: Navigator::new(),
            layout,
            params,
            ui: UiState::new(),
            theme,
            had_errors: false,
        }
    }

    /// `"name - Page N of M"`, or the bare application name with no document
    pub fn window_title(&self) -> String {
        match (self.session.display_name(), self.nav.state()) {
            (Some(name), NavState::Viewing { page, page_count }) => {
                format!("{} - Page {} of {}", name, page, page_count)
            }
            (Some(name), NavState::NoDocument) => name.to_string(),
            (None, _) => APP_TITLE.to_string(),
        }
    }
}
