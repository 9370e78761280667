//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Every rectangle the renderer draws a clickable thing into is computed
//! here, so a click resolves against exactly what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::app::Model;
use crate::page::ClickTarget;
use crate::view::Overlay;

use super::viewport::GridViewport;

/// Rows taken by the nav bar, borders included.
pub const NAV_HEIGHT: u16 = 3;
/// Minimum card width in columns.
pub const CARD_WIDTH: u16 = 30;
/// Card height in rows, borders included.
pub const CARD_HEIGHT: u16 = 6;
/// Rows reserved above the carousel for the exhibition title and description.
const EXHIBITION_TEXT_ROWS: u16 = 6;
/// Width of a carousel prev/next control.
const CAROUSEL_CONTROL_WIDTH: u16 = 3;
/// Columns per position dot, gap included.
const DOT_STRIDE: u16 = 2;

/// The fixed regions of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub nav: Rect,
    pub content: Rect,
    pub toast: Option<Rect>,
    pub status: Rect,
}

pub fn screen_layout(area: Rect, toast_active: bool) -> ScreenLayout {
    let footer_rows = 1 + u16::from(toast_active);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(footer_rows),
        ])
        .split(area);
    let footer = chunks[2];
    let status = Rect {
        y: footer.y + footer.height.saturating_sub(1),
        height: footer.height.min(1),
        ..footer
    };
    let toast = toast_active.then_some(Rect {
        height: footer.height.min(1),
        ..footer
    });
    ScreenLayout {
        nav: chunks[0],
        content: chunks[1],
        toast,
        status,
    }
}

/// Text of a nav link, with its number key.
pub fn nav_label(index: usize, title: &str) -> String {
    format!(" {} {title} ", index + 1)
}

/// One rect per nav link, left to right inside the nav bar border.
///
/// Links that no longer fit are dropped.
pub fn nav_link_rects(nav: Rect, titles: &[&str]) -> Vec<Rect> {
    let y = nav.y + 1;
    let right = nav.right().saturating_sub(1);
    let mut x = nav.x + 1;
    let mut rects = Vec::with_capacity(titles.len());
    for (index, title) in titles.iter().enumerate() {
        let width = u16::try_from(nav_label(index, title).width()).unwrap_or(u16::MAX);
        if x.saturating_add(width) > right {
            break;
        }
        rects.push(Rect::new(x, y, width, 1));
        x += width + 1;
    }
    rects
}

/// Area inside a section's border.
pub const fn section_inner(content: Rect) -> Rect {
    Rect {
        x: content.x + 1,
        y: content.y + 1,
        width: content.width.saturating_sub(2),
        height: content.height.saturating_sub(2),
    }
}

/// Columns and rows of cards that fit in `area`.
pub fn grid_dimensions(area: Rect) -> (usize, usize) {
    let columns = (area.width / CARD_WIDTH).max(1);
    let rows = (area.height / CARD_HEIGHT).max(1);
    (usize::from(columns), usize::from(rows))
}

/// Card grid dimensions for a terminal of the given size.
pub fn grid_dimensions_for_terminal(width: u16, height: u16) -> (usize, usize) {
    let screen = screen_layout(Rect::new(0, 0, width, height), false);
    grid_dimensions(section_inner(screen.content))
}

/// Rects of the visible cards, paired with each card's index.
pub fn card_rects(area: Rect, viewport: &GridViewport) -> Vec<(usize, Rect)> {
    let columns = viewport.columns().max(1);
    #[allow(clippy::cast_possible_truncation)]
    let card_width = (area.width / columns as u16).max(1);
    let first = viewport.offset() * columns;
    viewport
        .visible_items()
        .filter_map(|index| {
            let slot = index - first;
            let col = u16::try_from(slot % columns).ok()?;
            let row = u16::try_from(slot / columns).ok()?;
            let rect = Rect::new(
                area.x + col * card_width,
                area.y + row * CARD_HEIGHT,
                card_width,
                CARD_HEIGHT,
            );
            (rect.bottom() <= area.bottom() && rect.right() <= area.right())
                .then_some((index, rect))
        })
        .collect()
}

pub fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}

/// Geometry of an open overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLayout {
    pub popup: Rect,
    pub close: Rect,
    pub image: Rect,
    pub text: Rect,
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    pub dots: Vec<Rect>,
}

pub fn overlay_layout(area: Rect, overlay: &Overlay) -> OverlayLayout {
    let popup = centered_popup_rect(
        (area.width.saturating_mul(4) / 5).max(40),
        (area.height.saturating_mul(4) / 5).max(14),
        area,
    );
    let close = Rect::new(popup.right().saturating_sub(5), popup.y, 3, 1).intersection(popup);
    let inner = Rect {
        x: popup.x + 2,
        y: popup.y + 1,
        width: popup.width.saturating_sub(4),
        height: popup.height.saturating_sub(2),
    };

    match overlay.carousel() {
        None => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(40),
                    Constraint::Length(2),
                    Constraint::Min(1),
                ])
                .split(inner);
            OverlayLayout {
                popup,
                close,
                image: chunks[0],
                text: chunks[2],
                prev: None,
                next: None,
                dots: Vec::new(),
            }
        }
        Some(carousel) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(EXHIBITION_TEXT_ROWS),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(inner);
            let strip = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CAROUSEL_CONTROL_WIDTH),
                    Constraint::Min(1),
                    Constraint::Length(CAROUSEL_CONTROL_WIDTH),
                ])
                .split(rows[1]);
            OverlayLayout {
                popup,
                close,
                image: strip[1],
                text: rows[0],
                prev: Some(strip[0]),
                next: Some(strip[2]),
                dots: dot_rects(rows[2], carousel.dots.len()),
            }
        }
    }
}

/// One single-cell rect per dot, centered in `row`; dots past the edge are dropped.
fn dot_rects(row: Rect, count: usize) -> Vec<Rect> {
    let fitting = usize::from(row.width / DOT_STRIDE).min(count);
    let Ok(fitting_u16) = u16::try_from(fitting) else {
        return Vec::new();
    };
    let start = row.x + (row.width.saturating_sub(fitting_u16 * DOT_STRIDE)) / 2;
    (0..fitting_u16)
        .map(|i| Rect::new(start + i * DOT_STRIDE, row.y, 1, 1))
        .collect()
}

/// What sits under the cell at (`column`, `row`) in the last drawn frame.
pub fn hit_test(model: &Model, column: u16, row: u16) -> ClickTarget {
    let area = Rect::new(0, 0, model.width, model.height);
    let point = Position::new(column, row);
    let page = model.portfolio.page();

    if let Some(overlay) = page.top_overlay() {
        let layout = overlay_layout(area, overlay);
        return overlay_hit(&layout, point);
    }

    let screen = screen_layout(area, model.active_toast().is_some());
    let titles: Vec<&str> = page.sections().iter().map(|s| s.title.as_str()).collect();
    if let Some(index) = nav_link_rects(screen.nav, &titles)
        .iter()
        .position(|rect| rect.contains(point))
    {
        return ClickTarget::NavLink(index);
    }

    if screen.content.contains(point)
        && let Some(kind) = page.active_grid_kind()
    {
        let inner = section_inner(screen.content);
        let hit = model.grid_viewport(kind).and_then(|viewport| {
            card_rects(inner, viewport)
                .into_iter()
                .find(|(_, rect)| rect.contains(point))
        });
        return match hit {
            Some((index, _)) => ClickTarget::Card { grid: kind, index },
            None => ClickTarget::GridBackground(kind),
        };
    }

    ClickTarget::Nothing
}

fn overlay_hit(layout: &OverlayLayout, point: Position) -> ClickTarget {
    if layout.close.contains(point) {
        return ClickTarget::Dismiss;
    }
    if layout.prev.is_some_and(|rect| rect.contains(point)) {
        return ClickTarget::CarouselPrev;
    }
    if layout.next.is_some_and(|rect| rect.contains(point)) {
        return ClickTarget::CarouselNext;
    }
    if let Some(index) = layout.dots.iter().position(|rect| rect.contains(point)) {
        return ClickTarget::CarouselDot(index);
    }
    if layout.popup.contains(point) {
        ClickTarget::Panel
    } else {
        ClickTarget::Backdrop
    }
}
