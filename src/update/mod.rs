//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

pub mod layout;
pub mod menu;
pub mod navigation;
pub mod pointer;
pub mod session;

use crate::commands::Cmd;
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::NavSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use layout::update_layout;
pub use menu::{dispatch_menu_command, update_menu, update_ui};
pub use navigation::update_nav;
pub use pointer::update_pointer;
pub use session::{open_document, update_session};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Nav(m) => navigation::update_nav(model, m),
        Msg::Session(m) => session::update_session(model, m),
        Msg::Layout(m) => layout::update_layout(model, m),
        Msg::Menu(m) => menu::update_menu(model, m),
        Msg::Ui(m) => menu::update_ui(model, m),
        Msg::Pointer(m) => pointer::update_pointer(model, m),
        Msg::App(m) => update_app(model, m),
    }
}

fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::FocusChanged(focused) => {
            model.ui.focused = focused;
            if !focused {
                model.ui.menu_open = None;
            }
            Some(Cmd::Redraw)
        }
        AppMsg::Quit => Some(Cmd::Quit),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Logs each message and the navigation/layout change it caused.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    // Wheel and focus events arrive in bursts
    let is_noisy = matches!(&msg, Msg::Pointer(_) | Msg::App(AppMsg::FocusChanged(_)));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = NavSnapshot::from_model(model);
    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    if let Some(diff) = before.diff(&NavSnapshot::from_model(model)) {
        debug!(target: "navigation", %diff, "state changed");
    }

    result
}

#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Nav(m) => format!("Nav::{:?}", m),
        Msg::Session(m) => format!("Session::{:?}", m),
        Msg::Layout(m) => format!("Layout::{:?}", m),
        Msg::Menu(m) => format!("Menu::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::Pointer(m) => format!("Pointer::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
