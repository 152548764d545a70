//! Window resize and chrome toggle handlers

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::AppModel;

pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::Resize { width, height } => {
            model.layout.resize(width, height);
            tracing::info!(
                outer_w = width,
                outer_h = height,
                viewport_w = model.layout.viewport().width,
                viewport_h = model.layout.viewport().height,
                "window resized"
            );
            Some(Cmd::Redraw)
        }
        LayoutMsg::ToggleChrome => {
            model.layout.toggle_chrome();
            // Menus and overlays live in the chrome
            model.ui.menu_open = None;
            tracing::debug!(visible = model.layout.chrome_visible, "chrome toggled");
            Some(Cmd::Redraw)
        }
    }
}
