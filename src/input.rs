//! Keyboard input handling
//!
//! Maps winit keys to messages. An open menu or overlay swallows the next
//! key press and closes.

use winit::keyboard::{Key, NamedKey};

use crate::commands::{Cmd, MenuCommand};
use crate::messages::{AppMsg, LayoutMsg, Msg, NavMsg, SessionMsg, UiMsg};
use crate::model::{AppModel, Overlay};
use crate::update::{dispatch_menu_command, update};

/// Message bound to a key, ignoring popup state
pub fn key_to_msg(key: &Key, ctrl: bool) -> Option<Msg> {
    match key {
        Key::Named(NamedKey::Escape) => Some(Msg::App(AppMsg::Quit)),
        Key::Named(NamedKey::ArrowLeft) | Key::Named(NamedKey::PageUp) => {
            Some(Msg::Nav(NavMsg::Previous))
        }
        Key::Named(NamedKey::ArrowRight) | Key::Named(NamedKey::PageDown) => {
            Some(Msg::Nav(NavMsg::Next))
        }
        Key::Named(NamedKey::Home) => Some(Msg::Nav(NavMsg::First)),
        Key::Named(NamedKey::End) => Some(Msg::Nav(NavMsg::Last)),
        Key::Named(NamedKey::F12) => Some(Msg::Layout(LayoutMsg::ToggleChrome)),
        Key::Named(NamedKey::F1) => Some(Msg::Ui(UiMsg::ShowOverlay(Overlay::Help))),
        Key::Character(s) => match (s.to_lowercase().as_str(), ctrl) {
            ("q", false) => Some(Msg::App(AppMsg::Quit)),
            ("a", false) => Some(Msg::Nav(NavMsg::Previous)),
            ("s", false) => Some(Msg::Nav(NavMsg::Next)),
            ("r", false) => Some(Msg::Session(SessionMsg::Reload)),
            _ => None,
        },
        _ => None,
    }
}

/// True for Ctrl+O, which goes through the menu dispatch
fn is_open_shortcut(key: &Key, ctrl: bool) -> bool {
    ctrl && matches!(key, Key::Character(s) if s.eq_ignore_ascii_case("o"))
}

/// Handle a key press
pub fn handle_key(model: &mut AppModel, key: &Key, ctrl: bool) -> Option<Cmd> {
    // Modifier keys alone never count as "any key"
    if matches!(
        key,
        Key::Named(NamedKey::Control | NamedKey::Shift | NamedKey::Alt | NamedKey::Super)
    ) {
        return None;
    }

    if model.ui.dismiss_popups() {
        return Some(Cmd::Redraw);
    }

    if is_open_shortcut(key, ctrl) {
        return dispatch_menu_command(model, MenuCommand::Open);
    }

    key_to_msg(key, ctrl).and_then(|msg| update(model, msg))
}
