//! Document open/close/reload handlers

use std::path::Path;

use crate::commands::Cmd;
use crate::messages::SessionMsg;
use crate::model::AppModel;

pub fn update_session(model: &mut AppModel, msg: SessionMsg) -> Option<Cmd> {
    match msg {
        SessionMsg::Open(path) => {
            open_document(model, &path);
            Some(Cmd::Redraw)
        }
        SessionMsg::OpenCancelled => {
            tracing::debug!("Open dialog cancelled");
            None
        }
        SessionMsg::Close => {
            model.session.close();
            model.nav.document_closed();
            model.ui.clear_status();
            Some(Cmd::Redraw)
        }
        SessionMsg::Reload => {
            reload_document(model);
            Some(Cmd::Redraw)
        }
    }
}

/// Open `path`, replacing whatever was open.
///
/// Failure leaves the viewer empty with the error as status text.
pub fn open_document(model: &mut AppModel, path: &Path) {
    let opened = model
        .session
        .open(path)
        .map(|doc| (doc.page_count, doc.display_name.clone()));
    match opened {
        Ok((page_count, display_name)) => {
            model.nav.document_opened(page_count);
            if page_count == 0 {
                model.ui.set_status(format!("{} has no pages", display_name));
            } else {
                model.ui.clear_status();
            }
        }
        Err(e) => {
            tracing::warn!("{}", e);
            model.nav.document_closed();
            model.ui.set_status(e.to_string());
        }
    }
}

/// Re-read the current document and stay on the same page where possible
fn reload_document(model: &mut AppModel) {
    let page = model.nav.page();
    match model.session.reload().map(|doc| doc.page_count) {
        Ok(page_count) => {
            model.nav.document_opened(page_count);
            if let Some(page) = page {
                model.nav.jump_to(page);
            }
            model.ui.clear_status();
            tracing::info!("Reloaded document ({} pages)", page_count);
        }
        Err(e) => {
            tracing::warn!("Reload failed: {}", e);
            if !model.session.is_open() {
                model.nav.document_closed();
            }
            model.ui.set_status(e.to_string());
        }
    }
}
