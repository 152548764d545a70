//! Tests for window resizing and chrome toggling

mod common;

use common::{layout, test_model, window_buffer, FakeDoc, FakeEngine, PAGE_ARGB};
use pageview::messages::{LayoutMsg, Msg, SessionMsg};
use pageview::model::{AppModel, ViewportGeometry};
use pageview::update::update;
use pageview::view::{render_window, Frame};

fn opened() -> AppModel {
    let engine = FakeEngine::new().with_doc("/docs/a.pdf", FakeDoc::letter(2));
    let mut model = test_model(engine);
    update(&mut model, Msg::Session(SessionMsg::Open("/docs/a.pdf".into())));
    model
}

fn draw(model: &mut AppModel) -> Vec<u32> {
    let mut buf = window_buffer(model);
    let (w, h) = model.layout.outer;
    {
        let mut frame = Frame::new(&mut buf, w as usize, h as usize);
        render_window(model, &mut frame, None);
    }
    buf
}

#[test]
fn test_outer_size_includes_chrome() {
    let l = layout(512, 512, true);
    assert_eq!(l.outer, (520, 564));
    assert_eq!(l.viewport(), ViewportGeometry::new(512, 512));

    let bare = layout(512, 512, false);
    assert_eq!(bare.outer, (512, 512));
}

#[test]
fn test_resize_recomputes_viewport() {
    let mut model = opened();
    update(
        &mut model,
        Msg::Layout(LayoutMsg::Resize {
            width: 808,
            height: 652,
        }),
    );
    assert_eq!(model.layout.viewport(), ViewportGeometry::new(800, 600));
}

#[test]
fn test_resize_smaller_than_chrome_gives_empty_viewport() {
    let mut model = opened();
    update(
        &mut model,
        Msg::Layout(LayoutMsg::Resize {
            width: 6,
            height: 30,
        }),
    );
    assert_eq!(model.layout.viewport(), ViewportGeometry::new(0, 0));
}

#[test]
fn test_resize_to_same_size_is_idempotent() {
    let mut model = opened();
    let before = draw(&mut model);

    let (w, h) = model.layout.outer;
    update(
        &mut model,
        Msg::Layout(LayoutMsg::Resize {
            width: w,
            height: h,
        }),
    );
    let after = draw(&mut model);

    assert_eq!(before, after);
}

#[test]
fn test_toggle_chrome_keeps_outer_size() {
    let mut model = opened();
    update(&mut model, Msg::Layout(LayoutMsg::ToggleChrome));

    assert!(!model.layout.chrome_visible);
    assert_eq!(model.layout.outer, (520, 564));
    assert_eq!(model.layout.viewport(), ViewportGeometry::new(520, 564));

    // Letter page fit into 520x564 is 436x564, centred at x = 42
    let buf = draw(&mut model);
    let w = 520;
    assert_eq!(buf[w], model.theme.background.to_argb_u32());
    assert_eq!(buf[42], PAGE_ARGB);
    assert_eq!(buf[563 * w + 477], PAGE_ARGB);
    assert_eq!(buf[300 * w + 478], model.theme.background.to_argb_u32());

    update(&mut model, Msg::Layout(LayoutMsg::ToggleChrome));
    assert_eq!(model.layout.viewport(), ViewportGeometry::new(512, 512));
}
