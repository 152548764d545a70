//! Whole-window scenarios: messages in, pixels out

mod common;

use common::{test_model, window_buffer, FakeDoc, FakeEngine, PAGE_ARGB};
use pageview::commands::MenuId;
use pageview::input::handle_key;
use pageview::messages::{AppMsg, MenuMsg, Msg, SessionMsg};
use pageview::model::{AppModel, NavState};
use pageview::update::update;
use pageview::view::{render_window, Frame};
use winit::keyboard::{Key, NamedKey};

fn engine() -> FakeEngine {
    FakeEngine::new()
        .with_doc("/docs/three.pdf", FakeDoc::letter(3))
        .with_doc("/docs/broken.pdf", FakeDoc::letter(3).with_failing(1))
        .with_doc("/docs/noisy.pdf", FakeDoc::letter(1).with_warnings(3))
}

fn opened(path: &str) -> AppModel {
    let mut model = test_model(engine());
    update(&mut model, Msg::Session(SessionMsg::Open(path.into())));
    model
}

/// Render into a fresh buffer; returns it, the outer width and whether a page was drawn
fn draw(model: &mut AppModel) -> (Vec<u32>, usize, bool) {
    let mut buf = window_buffer(model);
    let (w, h) = model.layout.outer;
    let drew_page = {
        let mut frame = Frame::new(&mut buf, w as usize, h as usize);
        render_window(model, &mut frame, None).is_some()
    };
    (buf, w as usize, drew_page)
}

fn pixel(buf: &[u32], width: usize, x: usize, y: usize) -> u32 {
    buf[y * width + x]
}

#[test]
fn test_three_page_walkthrough() {
    let mut model = opened("/docs/three.pdf");
    assert_eq!(model.layout.outer, (520, 564));

    let (buf, w, drew_page) = draw(&mut model);
    assert!(drew_page);
    // Page occupies x 62..458, y 48..560
    assert_eq!(pixel(&buf, w, 62, 48), PAGE_ARGB);
    assert_eq!(pixel(&buf, w, 457, 559), PAGE_ARGB);
    assert_eq!(pixel(&buf, w, 30, 300), model.theme.background.to_argb_u32());
    assert_eq!(pixel(&buf, w, 1, 300), model.theme.border.to_argb_u32());
    assert_eq!(pixel(&buf, w, 100, 10), model.theme.title_bar.to_argb_u32());
    assert_eq!(model.window_title(), "three.pdf - Page 1 of 3");

    handle_key(&mut model, &Key::Named(NamedKey::ArrowRight), false);
    handle_key(&mut model, &Key::Named(NamedKey::ArrowRight), false);
    handle_key(&mut model, &Key::Named(NamedKey::ArrowRight), false);
    assert_eq!(model.window_title(), "three.pdf - Page 3 of 3");

    let (buf, w, drew_page) = draw(&mut model);
    assert!(drew_page);
    assert_eq!(pixel(&buf, w, 200, 300), PAGE_ARGB);
    assert!(!model.had_errors);
}

#[test]
fn test_empty_viewer_fills_content() {
    let mut model = test_model(engine());
    let (buf, w, drew_page) = draw(&mut model);

    assert!(!drew_page);
    assert_eq!(pixel(&buf, w, 200, 300), model.theme.empty_fill.to_argb_u32());
    assert_eq!(model.nav.state(), NavState::NoDocument);
}

#[test]
fn test_page_load_failure_becomes_status() {
    let mut model = opened("/docs/broken.pdf");
    handle_key(&mut model, &Key::Named(NamedKey::ArrowRight), false);

    let (buf, w, drew_page) = draw(&mut model);

    assert!(!drew_page);
    assert_eq!(model.ui.status.as_deref(), Some("cannot load page 2: corrupt page"));
    assert_eq!(pixel(&buf, w, 200, 300), model.theme.empty_fill.to_argb_u32());
    // Still viewing; the next page is fine
    assert_eq!(model.nav.page(), Some(2));
    handle_key(&mut model, &Key::Named(NamedKey::ArrowRight), false);
    let (_, _, drew_page) = draw(&mut model);
    assert!(drew_page);
}

#[test]
fn test_engine_warnings_mark_errors() {
    let mut model = opened("/docs/noisy.pdf");
    let (_, _, drew_page) = draw(&mut model);
    assert!(drew_page);
    assert!(model.had_errors);
}

#[test]
fn test_open_failure_draws_empty_view() {
    let mut model = opened("/docs/three.pdf");
    update(&mut model, Msg::Session(SessionMsg::Open("/docs/gone.pdf".into())));

    let (buf, w, drew_page) = draw(&mut model);
    assert!(!drew_page);
    assert_eq!(pixel(&buf, w, 200, 300), model.theme.empty_fill.to_argb_u32());
    assert_eq!(model.window_title(), "pageview");
}

#[test]
fn test_open_dropdown_covers_page() {
    let mut model = opened("/docs/three.pdf");
    update(&mut model, Msg::Menu(MenuMsg::Toggle(MenuId::File)));

    let (buf, w, _) = draw(&mut model);
    assert_ne!(pixel(&buf, w, 100, 70), PAGE_ARGB);
    assert_eq!(pixel(&buf, w, 300, 300), PAGE_ARGB);
}

#[test]
fn test_unfocused_window_dims_title_bar() {
    let mut model = opened("/docs/three.pdf");
    update(&mut model, Msg::App(AppMsg::FocusChanged(false)));

    let (buf, w, _) = draw(&mut model);
    assert_eq!(
        pixel(&buf, w, 100, 10),
        model.theme.title_bar_inactive.to_argb_u32()
    );
}
