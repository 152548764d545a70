//! UI state - open menu, overlays, focus and the status line

use crate::commands::MenuId;

/// Full-window panels drawn over the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Key bindings and usage
    Help,
    About,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Menu whose dropdown is showing
    pub menu_open: Option<MenuId>,
    pub overlay: Option<Overlay>,
    /// Window has keyboard focus; chrome is drawn dimmed otherwise
    pub focused: bool,
    /// Message shown in the content area when no page can be drawn
    pub status: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            menu_open: None,
            overlay: None,
            focused: true,
            status: None,
        }
    }

    /// A menu or overlay is capturing input
    pub fn has_popup(&self) -> bool {
        self.menu_open.is_some() || self.overlay.is_some()
    }

    /// Close any open menu and overlay; returns whether anything was open
    pub fn dismiss_popups(&mut self) -> bool {
        let had = self.has_popup();
        self.menu_open = None;
        self.overlay = None;
        had
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
