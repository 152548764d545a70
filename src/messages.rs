//! Message types for the Elm-style architecture
//!
//! Every input the viewer reacts to becomes a [`Msg`] handed to `update`.

use std::path::PathBuf;

use crate::commands::{MenuCommand, MenuId};
use crate::model::Overlay;

/// Page navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMsg {
    Next,
    Previous,
    First,
    Last,
    /// Jump to a 1-based page, clamped to the document
    JumpTo(usize),
}

/// Document lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMsg {
    Open(PathBuf),
    /// Picker returned nothing
    OpenCancelled,
    Close,
    Reload,
}

/// Window geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMsg {
    /// New outer window size in physical pixels
    Resize { width: u32, height: u32 },
    ToggleChrome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMsg {
    /// Click on a menu bar entry
    Toggle(MenuId),
    Invoke(MenuCommand),
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMsg {
    ShowOverlay(Overlay),
    DismissOverlay,
}

/// Mouse input in outer window coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMsg {
    Press { x: f64, y: f64 },
    /// Positive lines scroll up
    Wheel { x: f64, y: f64, lines: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMsg {
    FocusChanged(bool),
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Nav(NavMsg),
    Session(SessionMsg),
    Layout(LayoutMsg),
    Menu(MenuMsg),
    Ui(UiMsg),
    Pointer(PointerMsg),
    App(AppMsg),
}
