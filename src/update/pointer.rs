//! Mouse handlers: chrome hit-testing first, then the content area

use crate::commands::Cmd;
use crate::messages::{MenuMsg, NavMsg, PointerMsg, UiMsg};
use crate::model::AppModel;
use crate::view::chrome::{hit_test, HitTarget};

use super::{menu, navigation};

pub fn update_pointer(model: &mut AppModel, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::Press { x, y } => press(model, x, y),
        PointerMsg::Wheel { x, y, lines } => {
            // Scrolling over chrome or a popup never turns pages
            if hit_test(model, x, y) != HitTarget::Content {
                return None;
            }
            if lines > 0.0 {
                navigation::update_nav(model, NavMsg::Previous)
            } else if lines < 0.0 {
                navigation::update_nav(model, NavMsg::Next)
            } else {
                None
            }
        }
    }
}

fn press(model: &mut AppModel, x: f64, y: f64) -> Option<Cmd> {
    let target = hit_test(model, x, y);
    tracing::trace!(?target, x, y, "pointer press");

    match target {
        HitTarget::Overlay => menu::update_ui(model, UiMsg::DismissOverlay),
        HitTarget::DropdownItem(command) => menu::update_menu(model, MenuMsg::Invoke(command)),
        HitTarget::MenuEntry(id) => menu::update_menu(model, MenuMsg::Toggle(id)),
        // Clicking anywhere else only closes an open dropdown
        _ if model.ui.menu_open.is_some() => menu::update_menu(model, MenuMsg::Close),
        HitTarget::CloseButton => Some(Cmd::Quit),
        HitTarget::TitleBar => Some(Cmd::DragWindow),
        HitTarget::Border(edge) => Some(Cmd::DragResize(edge)),
        HitTarget::MenuBar | HitTarget::Content | HitTarget::Outside => None,
    }
}
