//! Window chrome: title bar, borders, menu bar, dropdowns and overlays
//!
//! Layout functions are pure so hit-testing works without a font or a
//! surface. Drawing takes an optional [`TextPainter`]; without one only the
//! shapes are drawn.

use crate::commands::{menu, MenuCommand, MenuId, ResizeEdge, MENUS};
use crate::geometry::IRect;
use crate::model::{AppModel, Overlay, WindowLayout};

use super::{Frame, TextPainter};

/// Width of one menu bar entry
pub const MENU_ENTRY_WIDTH: i32 = 56;
/// Height of one dropdown row
pub const MENU_ITEM_HEIGHT: i32 = 22;
pub const DROPDOWN_WIDTH: i32 = 168;
/// Resize grip measured inward from the outer edge
pub const RESIZE_GRIP: i32 = 4;
/// Length of the corner zones along each edge
pub const CORNER_GRIP: i32 = 12;
const TEXT_PADDING: i32 = 8;

/// What a window-space point lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Overlay,
    DropdownItem(MenuCommand),
    MenuEntry(MenuId),
    MenuBar,
    CloseButton,
    TitleBar,
    Border(ResizeEdge),
    Content,
    Outside,
}

pub fn title_bar_rect(layout: &WindowLayout) -> IRect {
    IRect::new(0, 0, layout.outer.0 as i32, layout.metrics.title_height as i32)
}

pub fn close_button_rect(layout: &WindowLayout) -> IRect {
    let title = title_bar_rect(layout);
    let size = (title.height() - 8).max(0);
    let right = title.x1 - layout.metrics.border_right as i32 - 4;
    IRect::new(right - size, 4, right, 4 + size)
}

pub fn menu_bar_rect(layout: &WindowLayout) -> IRect {
    let m = &layout.metrics;
    let top = m.title_height as i32;
    IRect::new(
        m.border_left as i32,
        top,
        layout.outer.0 as i32 - m.border_right as i32,
        top + m.menu_bar_height as i32,
    )
}

pub fn menu_entry_rect(layout: &WindowLayout, index: usize) -> IRect {
    let bar = menu_bar_rect(layout);
    let x = bar.x0 + index as i32 * MENU_ENTRY_WIDTH;
    IRect::new(x, bar.y0, x + MENU_ENTRY_WIDTH, bar.y1)
}

fn menu_index(id: MenuId) -> usize {
    MENUS.iter().position(|m| m.id == id).unwrap_or(0)
}

/// Dropdown panel below a menu entry, including its 1px border
pub fn dropdown_rect(layout: &WindowLayout, id: MenuId) -> IRect {
    let entry = menu_entry_rect(layout, menu_index(id));
    let rows = menu(id).items.len() as i32;
    IRect::from_xywh(entry.x0, entry.y1, DROPDOWN_WIDTH, rows * MENU_ITEM_HEIGHT + 2)
}

pub fn dropdown_item_rect(layout: &WindowLayout, id: MenuId, index: usize) -> IRect {
    let panel = dropdown_rect(layout, id);
    let y = panel.y0 + 1 + index as i32 * MENU_ITEM_HEIGHT;
    IRect::new(panel.x0 + 1, y, panel.x1 - 1, y + MENU_ITEM_HEIGHT)
}

/// Resize edge under a point near the outer border
fn resize_edge(layout: &WindowLayout, x: i32, y: i32) -> Option<ResizeEdge> {
    let (w, h) = (layout.outer.0 as i32, layout.outer.1 as i32);
    let m = &layout.metrics;
    let left_grip = (m.border_left as i32).max(RESIZE_GRIP);
    let right_grip = (m.border_right as i32).max(RESIZE_GRIP);
    let bottom_grip = (m.border_bottom as i32).max(RESIZE_GRIP);

    let on_left = x < left_grip;
    let on_right = x >= w - right_grip;
    let on_top = y < RESIZE_GRIP;
    let on_bottom = y >= h - bottom_grip;

    let near_left = x < CORNER_GRIP;
    let near_right = x >= w - CORNER_GRIP;
    let near_top = y < CORNER_GRIP;
    let near_bottom = y >= h - CORNER_GRIP;

    if (on_top && near_left) || (on_left && near_top) {
        Some(ResizeEdge::NorthWest)
    } else if (on_top && near_right) || (on_right && near_top) {
        Some(ResizeEdge::NorthEast)
    } else if (on_bottom && near_left) || (on_left && near_bottom) {
        Some(ResizeEdge::SouthWest)
    } else if (on_bottom && near_right) || (on_right && near_bottom) {
        Some(ResizeEdge::SouthEast)
    } else if on_top {
        Some(ResizeEdge::North)
    } else if on_bottom {
        Some(ResizeEdge::South)
    } else if on_left {
        Some(ResizeEdge::West)
    } else if on_right {
        Some(ResizeEdge::East)
    } else {
        None
    }
}

/// Map a point in outer window coordinates to the element under it.
///
/// Popups come first, then chrome, then the page area.
pub fn hit_test(model: &AppModel, x: f64, y: f64) -> HitTarget {
    let layout = &model.layout;
    if !layout.outer_rect().contains(x, y) {
        return HitTarget::Outside;
    }
    if model.ui.overlay.is_some() {
        return HitTarget::Overlay;
    }

    if let Some(id) = model.ui.menu_open {
        for (i, item) in menu(id).items.iter().enumerate() {
            if dropdown_item_rect(layout, id, i).contains(x, y) {
                return HitTarget::DropdownItem(item.command);
            }
        }
    }

    if layout.chrome_visible {
        if let Some(edge) = resize_edge(layout, x as i32, y as i32) {
            return HitTarget::Border(edge);
        }
        if close_button_rect(layout).contains(x, y) {
            return HitTarget::CloseButton;
        }
        if title_bar_rect(layout).contains(x, y) {
            return HitTarget::TitleBar;
        }
        for (i, def) in MENUS.iter().enumerate() {
            if menu_entry_rect(layout, i).contains(x, y) {
                return HitTarget::MenuEntry(def.id);
            }
        }
        if menu_bar_rect(layout).contains(x, y) {
            return HitTarget::MenuBar;
        }
    }

    if layout.content_rect().contains(x, y) {
        HitTarget::Content
    } else {
        HitTarget::Outside
    }
}

/// Draw text vertically centred in `rect`, starting `TEXT_PADDING` from its left edge
fn draw_label(
    painter: &mut Option<&mut TextPainter>,
    frame: &mut Frame,
    rect: IRect,
    text: &str,
    color: u32,
) {
    if let Some(p) = painter.as_deref_mut() {
        let y = rect.y0 + (rect.height() - p.line_height() as i32) / 2;
        p.draw(frame, rect.x0 + TEXT_PADDING, y, text, color);
    }
}

/// Borders, title bar and menu bar
pub fn draw_chrome(
    frame: &mut Frame,
    model: &AppModel,
    title: &str,
    mut painter: Option<&mut TextPainter>,
) {
    let layout = &model.layout;
    let theme = &model.theme;

    // Borders: fill the whole frame, the content and bars are drawn over it
    frame.fill_rect(layout.outer_rect(), theme.border.to_argb_u32());

    let title_rect = title_bar_rect(layout);
    let title_color = if model.ui.focused {
        theme.title_bar
    } else {
        theme.title_bar_inactive
    };
    frame.fill_rect(title_rect, title_color.to_argb_u32());
    draw_label(
        &mut painter,
        frame,
        title_rect,
        title,
        theme.title_text.to_argb_u32(),
    );

    let close = close_button_rect(layout);
    frame.fill_rect(close, theme.close_button.to_argb_u32());
    // Simple "x" glyph made of two diagonals
    let size = close.width().min(close.height());
    for i in 3..size - 3 {
        let color = theme.title_text.to_argb_u32();
        frame.set_pixel(close.x0 + i, close.y0 + i, color);
        frame.set_pixel(close.x1 - 1 - i, close.y0 + i, color);
    }

    let bar = menu_bar_rect(layout);
    frame.fill_rect(bar, theme.menu_bar.to_argb_u32());
    for (i, def) in MENUS.iter().enumerate() {
        let entry = menu_entry_rect(layout, i);
        if model.ui.menu_open == Some(def.id) {
            frame.fill_rect(entry, theme.menu_highlight.to_argb_u32());
        }
        draw_label(
            &mut painter,
            frame,
            entry,
            def.label,
            theme.menu_text.to_argb_u32(),
        );
    }
}

/// Dropdown of the open menu, if any
pub fn draw_dropdown(frame: &mut Frame, model: &AppModel, mut painter: Option<&mut TextPainter>) {
    let Some(id) = model.ui.menu_open else {
        return;
    };
    let layout = &model.layout;
    let theme = &model.theme;

    frame.draw_bordered_rect(
        dropdown_rect(layout, id),
        theme.dropdown_background.to_argb_u32(),
        theme.dropdown_border.to_argb_u32(),
    );

    for (i, item) in menu(id).items.iter().enumerate() {
        let row = dropdown_item_rect(layout, id, i);
        draw_label(
            &mut painter,
            frame,
            row,
            item.label,
            theme.menu_text.to_argb_u32(),
        );
        if let (Some(keys), Some(p)) = (item.keybinding, painter.as_deref_mut()) {
            let width = p.measure_width(keys).ceil() as i32;
            let y = row.y0 + (row.height() - p.line_height() as i32) / 2;
            p.draw(
                frame,
                row.x1 - TEXT_PADDING - width,
                y,
                keys,
                theme.dropdown_border.to_argb_u32(),
            );
        }
    }
}

/// Lines shown by the help overlay
pub const HELP_LINES: &[&str] = &[
    "pageview - keys and mouse",
    "",
    "Right, s, PageDown      next page",
    "Left, a, PageUp         previous page",
    "Home / End              first / last page",
    "Mouse wheel             previous / next page",
    "Ctrl+O                  open a document",
    "r                       reload the document",
    "F12                     show / hide window chrome",
    "F1                      this help",
    "Esc, q                  quit",
    "",
    "Press any key or click to close.",
];

pub fn about_lines() -> Vec<String> {
    vec![
        format!("pageview {}", env!("CARGO_PKG_VERSION")),
        String::new(),
        "A minimal document page viewer.".to_string(),
        "Pages are rendered by PDFium.".to_string(),
        String::new(),
        "Press any key or click to close.".to_string(),
    ]
}

/// Full-window overlay for help or about text
pub fn draw_overlay(frame: &mut Frame, model: &AppModel, mut painter: Option<&mut TextPainter>) {
    let Some(overlay) = model.ui.overlay else {
        return;
    };
    let theme = &model.theme;
    frame.blend_rect(
        model.layout.outer_rect(),
        theme.overlay_background.to_argb_u32(),
    );

    let lines: Vec<String> = match overlay {
        Overlay::Help => HELP_LINES.iter().map(|l| l.to_string()).collect(),
        Overlay::About => about_lines(),
    };

    let Some(p) = painter.as_deref_mut() else {
        return;
    };
    let line_height = p.line_height() as i32;
    let block_height = line_height * lines.len() as i32;
    let outer = model.layout.outer_rect();
    let mut y = ((outer.height() - block_height) / 2).max(TEXT_PADDING);
    for line in &lines {
        p.draw(
            frame,
            TEXT_PADDING * 3,
            y,
            line,
            theme.overlay_text.to_argb_u32(),
        );
        y += line_height;
    }
}
