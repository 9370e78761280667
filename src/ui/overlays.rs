use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::app::Model;
use crate::view::{ArtistPanel, ExhibitionPanel, Overlay};

use super::layout::{OverlayLayout, centered_popup_rect, overlay_layout};
use super::{images, style};

/// Draw the open record overlay: dimmed backdrop, panel, controls.
pub fn render_modal(model: &mut Model, frame: &mut Frame, area: Rect) {
    let Some(overlay) = model.portfolio.page().top_overlay().cloned() else {
        return;
    };
    let layout = overlay_layout(area, &overlay);

    frame
        .buffer_mut()
        .set_style(area, Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(Clear, layout.popup);

    let title = match &overlay {
        Overlay::Artist(panel) => panel.name.as_str(),
        Overlay::Exhibition(panel) => panel.title.as_str(),
    };
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .style(style::panel_style());
    frame.render_widget(block, layout.popup);
    frame.render_widget(
        Paragraph::new("[x]").style(style::control_style()),
        layout.close,
    );

    match &overlay {
        Overlay::Artist(panel) => render_artist_panel(model, frame, &layout, panel),
        Overlay::Exhibition(panel) => render_exhibition_panel(model, frame, &layout, panel),
    }
}

fn render_artist_panel(
    model: &mut Model,
    frame: &mut Frame,
    layout: &OverlayLayout,
    panel: &ArtistPanel,
) {
    images::render_image(model, frame, layout.image, &panel.portrait, &panel.name);
    let lines = vec![
        Line::styled(panel.name.clone(), style::panel_heading_style()),
        Line::raw(""),
        Line::raw(panel.bio.clone()),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        layout.text,
    );
}

fn render_exhibition_panel(
    model: &mut Model,
    frame: &mut Frame,
    layout: &OverlayLayout,
    panel: &ExhibitionPanel,
) {
    let lines = vec![
        Line::styled(panel.title.clone(), style::panel_heading_style()),
        Line::raw(""),
        Line::raw(panel.description.clone()),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        layout.text,
    );

    images::render_image(model, frame, layout.image, &panel.carousel.image, &panel.title);

    for (rect, glyph) in [(layout.prev, "\u{2039}"), (layout.next, "\u{203a}")] {
        let Some(rect) = rect else { continue };
        let middle = Rect {
            y: rect.y + rect.height / 2,
            height: rect.height.min(1),
            ..rect
        };
        frame.render_widget(
            Paragraph::new(glyph)
                .style(style::control_style())
                .alignment(Alignment::Center),
            middle,
        );
    }

    for (rect, dot) in layout.dots.iter().zip(&panel.carousel.dots) {
        frame.render_widget(
            Paragraph::new(style::dot_symbol(dot.active)).style(style::dot_style(dot.active)),
            *rect,
        );
    }
}

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section_style = style::panel_heading_style();

    let lines = vec![
        Line::styled("Sections", section_style),
        Line::raw("  1-9                 Jump to section"),
        Line::raw("  Tab / Shift-Tab     Next / previous section"),
        Line::raw(""),
        Line::styled("Grids", section_style),
        Line::raw("  h/j/k/l or arrows   Move selection"),
        Line::raw("  g / G               First / last card"),
        Line::raw("  Enter or click      Open card"),
        Line::raw(""),
        Line::styled("Overlay", section_style),
        Line::raw("  Esc, [x], backdrop  Close"),
        Line::raw("  click \u{2039} \u{203a} or dots    Browse images"),
        Line::raw(""),
        Line::styled("Other", section_style),
        Line::raw("  r                   Reload catalogue"),
        Line::raw("  w                   Toggle watch"),
        Line::raw("  q / Ctrl-c          Quit"),
        Line::raw("  ? / F1              Toggle help"),
        Line::raw(""),
        Line::styled("Config", section_style),
        Line::raw(format!("  Global: {global_cfg}")),
        Line::raw(format!("  Local override: {local_cfg}")),
    ];

    let block = Block::default()
        .title("Help")
        .title_bottom(Line::styled(" Esc closes ", style::dim_style()))
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(style::panel_style());

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
