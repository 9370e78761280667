use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui_image::protocol::StatefulProtocolType;
use ratatui_image::{Resize, StatefulImage};

use crate::app::Model;

use super::style;

/// Draw the decoded image for `reference` into `area`, or a text placeholder.
pub fn render_image(model: &mut Model, frame: &mut Frame, area: Rect, reference: &str, alt: &str) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let Some(protocol) = model.image_protocols.get_mut(reference) else {
        render_placeholder(frame, area, alt);
        return;
    };

    let halfblocks = matches!(protocol.protocol_type(), StatefulProtocolType::Halfblocks(_));
    let resize = if halfblocks {
        // Nearest-neighbor causes strong color aliasing artifacts in half-cell mode.
        Resize::Scale(Some(image::imageops::FilterType::CatmullRom))
    } else {
        Resize::Scale(None)
    };
    StatefulImage::default()
        .resize(resize)
        .render(area, frame.buffer_mut(), protocol);

    // Terminal.app and other non-truecolor terminals behave better with indexed colors
    // than repeated truecolor updates in halfblock mode.
    if halfblocks && !crate::image::supports_truecolor_terminal() {
        let buf = frame.buffer_mut();
        let area = area.intersection(buf.area);
        for row in area.top()..area.bottom() {
            for col in area.left()..area.right() {
                let cell = &mut buf[(col, row)];
                if let Color::Rgb(r, g, b) = cell.fg {
                    cell.fg = Color::Indexed(crate::image::rgb_to_xterm_256(r, g, b));
                }
                if let Color::Rgb(r, g, b) = cell.bg {
                    cell.bg = Color::Indexed(crate::image::rgb_to_xterm_256(r, g, b));
                }
            }
        }
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, alt: &str) {
    let y = area.y + area.height.saturating_sub(1) / 2;
    let line = Rect::new(area.x, y, area.width, area.height.min(2));
    let text = Paragraph::new(format!("[Image: {alt}]"))
        .style(style::dim_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, line);
}
