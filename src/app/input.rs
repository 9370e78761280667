use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;

use crate::app::{App, Message, Model};
use crate::ui::viewport::GridMove;

use super::event_loop::ResizeDebouncer;

impl App {
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => {
                tracing::trace!(width = w, height = h, "resize queued");
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return None;
        }
        let overlay_open = model.portfolio.page().has_overlay();
        match mouse.kind {
            MouseEventKind::Up(MouseButton::Left) => Some(Message::Click(crate::ui::hit_test(
                model,
                mouse.column,
                mouse.row,
            ))),
            MouseEventKind::ScrollDown if !overlay_open => {
                Some(Message::MoveSelection(GridMove::Down))
            }
            MouseEventKind::ScrollUp if !overlay_open => Some(Message::MoveSelection(GridMove::Up)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Message::Quit);
        }

        if model.help_visible {
            return match key.code {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::F(1) => Some(Message::HideHelp),
                KeyCode::Char('q') => Some(Message::Quit),
                _ => None,
            };
        }

        // Shared by page and overlay
        match key.code {
            KeyCode::Char('q') => return Some(Message::Quit),
            KeyCode::Char('?') | KeyCode::F(1) => return Some(Message::ToggleHelp),
            KeyCode::Char('r') => return Some(Message::Reload),
            KeyCode::Char('w') => return Some(Message::ToggleWatch),
            KeyCode::Esc => return Some(Message::CloseModal),
            _ => {}
        }

        // The backdrop covers the page while an overlay is open
        if model.portfolio.page().has_overlay() {
            return None;
        }

        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c.to_digit(10).map_or(0, |d| d as usize - 1);
                Some(Message::SelectSection(index))
            }
            KeyCode::Tab => Some(Message::NextSection),
            KeyCode::BackTab => Some(Message::PrevSection),

            KeyCode::Left | KeyCode::Char('h') => Some(Message::MoveSelection(GridMove::Left)),
            KeyCode::Right | KeyCode::Char('l') => Some(Message::MoveSelection(GridMove::Right)),
            KeyCode::Up | KeyCode::Char('k') => Some(Message::MoveSelection(GridMove::Up)),
            KeyCode::Down | KeyCode::Char('j') => Some(Message::MoveSelection(GridMove::Down)),
            KeyCode::Home | KeyCode::Char('g') => Some(Message::MoveSelection(GridMove::First)),
            KeyCode::End | KeyCode::Char('G') => Some(Message::MoveSelection(GridMove::Last)),
            KeyCode::Enter => Some(Message::ActivateSelection),

            _ => None,
        }
    }

    pub(super) fn view(model: &mut Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}
