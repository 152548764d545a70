//! Menu bar and overlay handlers

use crate::commands::{Cmd, MenuCommand};
use crate::messages::{MenuMsg, UiMsg};
use crate::model::{AppModel, Overlay};

pub fn update_menu(model: &mut AppModel, msg: MenuMsg) -> Option<Cmd> {
    match msg {
        MenuMsg::Toggle(id) => {
            model.ui.overlay = None;
            model.ui.menu_open = if model.ui.menu_open == Some(id) {
                None
            } else {
                Some(id)
            };
            Some(Cmd::Redraw)
        }
        MenuMsg::Invoke(command) => {
            model.ui.menu_open = None;
            dispatch_menu_command(model, command)
        }
        MenuMsg::Close => {
            model.ui.menu_open = None;
            Some(Cmd::Redraw)
        }
    }
}

/// Single entry point for menu actions, shared by menus and key shortcuts
pub fn dispatch_menu_command(model: &mut AppModel, command: MenuCommand) -> Option<Cmd> {
    tracing::debug!(?command, "menu command");
    match command {
        MenuCommand::Open => Some(Cmd::Batch(vec![Cmd::Redraw, Cmd::ShowOpenDialog])),
        MenuCommand::Exit => Some(Cmd::Quit),
        MenuCommand::Help => {
            model.ui.overlay = Some(Overlay::Help);
            Some(Cmd::Redraw)
        }
        MenuCommand::About => {
            model.ui.overlay = Some(Overlay::About);
            Some(Cmd::Redraw)
        }
    }
}

pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::ShowOverlay(overlay) => {
            model.ui.menu_open = None;
            model.ui.overlay = Some(overlay);
        }
        UiMsg::DismissOverlay => model.ui.overlay = None,
    }
    Some(Cmd::Redraw)
}
