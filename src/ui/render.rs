use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::app::Model;
use crate::page::{SectionContent, SectionSpec};
use crate::view::{Card, GridKind};

use super::layout::{self, ScreenLayout};
use super::{overlays, status, style};

/// Render the complete UI.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();
    let screen = layout::screen_layout(area, model.active_toast().is_some());

    render_nav(model, frame, &screen);
    if let Some(section) = model.portfolio.page().active_section() {
        render_section(model, frame, screen.content, section);
    }
    if let Some(toast_area) = screen.toast {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, screen.status);

    if model.portfolio.page().has_overlay() {
        overlays::render_modal(model, frame, area);
    }
    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_nav(model: &Model, frame: &mut Frame, screen: &ScreenLayout) {
    let page = model.portfolio.page();
    let titles: Vec<&str> = page.sections().iter().map(|s| s.title.as_str()).collect();
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style::section_border_style()),
        screen.nav,
    );
    for (index, rect) in layout::nav_link_rects(screen.nav, &titles).into_iter().enumerate() {
        let active = page.nav().active_index() == index;
        frame.render_widget(
            Paragraph::new(layout::nav_label(index, titles[index]))
                .style(style::nav_link_style(active)),
            rect,
        );
    }
}

fn render_section(model: &Model, frame: &mut Frame, area: Rect, section: &SectionSpec) {
    let block = Block::default()
        .title(format!(" {} ", section.title))
        .borders(Borders::ALL)
        .border_style(style::section_border_style());
    match &section.content {
        SectionContent::Text(body) => {
            let text = Paragraph::new(body.as_str())
                .wrap(Wrap { trim: true })
                .block(block.padding(Padding::horizontal(1)));
            frame.render_widget(text, area);
        }
        SectionContent::Grid(kind) => {
            frame.render_widget(block, area);
            render_grid(model, frame, layout::section_inner(area), *kind);
        }
    }
}

fn render_grid(model: &Model, frame: &mut Frame, area: Rect, kind: GridKind) {
    let Some(container) = model.portfolio.page().grid(kind) else {
        return;
    };
    let Some(viewport) = model.grid_viewport(kind) else {
        return;
    };
    if container.cards().is_empty() {
        let message = if model.loading {
            "Loading\u{2026}"
        } else {
            "Nothing to show yet."
        };
        frame.render_widget(
            Paragraph::new(message)
                .style(style::dim_style())
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    for (index, rect) in layout::card_rects(area, viewport) {
        if let Some(card) = container.cards().get(index) {
            render_card(frame, rect, card, viewport.selected() == index);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &Card, selected: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style::card_border_style(selected))
        .padding(Padding::horizontal(1));
    let width = usize::from(area.width.saturating_sub(4));

    let mut lines = vec![
        Line::styled(style::truncate_to_width(&card.title, width), style::card_title_style()),
        Line::styled(
            style::truncate_to_width(&card.subtitle, width),
            style::card_subtitle_style(),
        ),
    ];
    let mut footer = Vec::new();
    if let Some(badge) = &card.badge {
        footer.push(Span::styled(format!(" {badge} "), style::badge_style()));
        footer.push(Span::raw(" "));
    }
    let image_width = width.saturating_sub(footer.iter().map(Span::width).sum());
    footer.push(Span::styled(
        style::truncate_to_width(&card.image, image_width),
        style::dim_style(),
    ));
    lines.push(Line::from(footer));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
