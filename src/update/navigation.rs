//! Page navigation handlers

use crate::commands::Cmd;
use crate::messages::NavMsg;
use crate::model::AppModel;

/// Every navigation message redraws, even when the page is clamped in place
pub fn update_nav(model: &mut AppModel, msg: NavMsg) -> Option<Cmd> {
    let nav = &mut model.nav;
    match msg {
        NavMsg::Next => nav.next(),
        NavMsg::Previous => nav.previous(),
        NavMsg::First => nav.first(),
        NavMsg::Last => nav.last(),
        NavMsg::JumpTo(page) => nav.jump_to(page),
    }
    tracing::debug!(state = ?model.nav.state(), "navigated");
    Some(Cmd::Redraw)
}
