use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;
use crate::data::DataOrigin;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let page = model.portfolio.page();
    let store = model.portfolio.store();
    let section = page.active_section().map_or("", |s| s.title.as_str());

    let position = page
        .active_grid_kind()
        .and_then(|kind| model.grid_viewport(kind))
        .filter(|vp| vp.total_items() > 0)
        .map(|vp| format!("  [{}/{}]", vp.selected() + 1, vp.total_items()))
        .unwrap_or_default();

    let origin_indicator = match store.origin() {
        Some(DataOrigin::Fallback) => " [built-in]",
        _ => "",
    };
    let loading_indicator = if model.loading { " [loading]" } else { "" };
    let watch_indicator = if model.watch_enabled {
        " [watching]"
    } else {
        ""
    };

    let status = format!(
        " {}  {}{}  {} artists, {} exhibitions{}{}{}  ?:help",
        model.source.label(),
        section,
        position,
        store.artists().len(),
        store.exhibitions().len(),
        origin_indicator,
        loading_indicator,
        watch_indicator,
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        crate::app::ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        crate::app::ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        crate::app::ToastLevel::Error => {
            ("[error]", Style::default().bg(Color::Red).fg(Color::White))
        }
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
