use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tempfile::tempdir;

use crate::data::{Artist, DataOrigin, DataSource, Dataset, Exhibition, LoadError};
use crate::page::{ClickTarget, PageLayout};
use crate::ui::viewport::GridMove;
use crate::view::GridKind;

use super::event_loop::ResizeDebouncer;
use super::{App, Message, Model, ToastLevel, update};

fn artist(id: &str, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        bio: format!("{name} works in print. Long bio."),
        portrait: format!("{id}.jpg"),
    }
}

fn exhibition(id: &str, title: &str, images: usize) -> Exhibition {
    Exhibition {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        images: (0..images).map(|i| format!("{id}-{i}.jpg")).collect(),
        year: None,
    }
}

fn create_test_model() -> Model {
    let mut model = Model::new(DataSource::default(), PageLayout::default(), (100, 30));
    model.apply_load(Ok(Dataset::new(
        (0..7)
            .map(|i| artist(&format!("a{i}"), &format!("Artist Number {i}")))
            .collect(),
        vec![
            exhibition("e1", "Venice Biennale 2009", 3),
            exhibition("e2", "THE ACT 2010", 2),
        ],
    )));
    model
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click_at(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Up(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_select_section_by_index() {
    let model = update(create_test_model(), Message::SelectSection(2));
    assert_eq!(model.portfolio.page().nav().active_id(), Some("exhibitions"));
}

#[test]
fn test_select_section_out_of_range_is_ignored() {
    let model = update(create_test_model(), Message::SelectSection(8));
    assert_eq!(model.portfolio.page().nav().active_id(), Some("about"));
}

#[test]
fn test_next_and_prev_section_wrap() {
    let model = update(create_test_model(), Message::PrevSection);
    assert_eq!(model.portfolio.page().nav().active_id(), Some("contact"));
    let model = update(model, Message::NextSection);
    assert_eq!(model.portfolio.page().nav().active_id(), Some("about"));
}

#[test]
fn test_move_selection_applies_to_active_grid_only() {
    let model = update(create_test_model(), Message::SelectSection(1));
    let model = update(model, Message::MoveSelection(GridMove::Right));
    let model = update(model, Message::MoveSelection(GridMove::Down));
    let artists = model.grid_viewport(GridKind::Artists).unwrap();
    assert_eq!(artists.selected(), 1 + artists.columns());
    assert_eq!(model.grid_viewport(GridKind::Exhibitions).unwrap().selected(), 0);
}

#[test]
fn test_move_selection_on_text_section_is_noop() {
    let model = update(create_test_model(), Message::MoveSelection(GridMove::Right));
    assert_eq!(model.grid_viewport(GridKind::Artists).unwrap().selected(), 0);
}

#[test]
fn test_activate_selection_opens_selected_card() {
    let model = update(create_test_model(), Message::SelectSection(2));
    let model = update(model, Message::MoveSelection(GridMove::Right));
    let model = update(model, Message::ActivateSelection);
    let overlay = model.portfolio.page().top_overlay().expect("overlay");
    assert_eq!(overlay.record_id(), "e2");
    assert_eq!(model.portfolio.carousel().index(), 0);
}

#[test]
fn test_activate_selection_on_text_section_does_nothing() {
    let model = update(create_test_model(), Message::ActivateSelection);
    assert!(!model.portfolio.page().has_overlay());
}

#[test]
fn test_click_backdrop_closes_but_panel_does_not() {
    let model = update(create_test_model(), Message::SelectSection(1));
    let model = update(model, Message::ActivateSelection);
    let model = update(model, Message::Click(ClickTarget::Panel));
    assert!(model.portfolio.page().has_overlay());
    let model = update(model, Message::Click(ClickTarget::Backdrop));
    assert!(!model.portfolio.page().has_overlay());
}

#[test]
fn test_carousel_clicks_through_messages() {
    let model = update(create_test_model(), Message::SelectSection(2));
    let model = update(model, Message::ActivateSelection);
    let model = update(model, Message::Click(ClickTarget::CarouselPrev));
    assert_eq!(model.portfolio.carousel().index(), 2);
    let model = update(model, Message::Click(ClickTarget::CarouselDot(1)));
    assert_eq!(model.portfolio.carousel().index(), 1);
    let carousel = model.portfolio.page().top_overlay().unwrap().carousel().unwrap();
    assert_eq!(carousel.active_dot(), Some(1));
    assert_eq!(carousel.image, "e1-1.jpg");
}

#[test]
fn test_close_modal_message() {
    let model = update(create_test_model(), Message::SelectSection(1));
    let model = update(model, Message::ActivateSelection);
    let model = update(model, Message::CloseModal);
    assert!(model.portfolio.page().overlays().is_empty());
}

#[test]
fn test_data_loaded_failure_installs_fallback() {
    let mut model = create_test_model();
    model.loading = true;
    let model = update(model, Message::DataLoaded(Err(LoadError::Interrupted)));
    assert!(!model.loading);
    assert_eq!(model.portfolio.store().origin(), Some(DataOrigin::Fallback));
    assert_eq!(model.portfolio.store().artists().len(), 3);
    assert_eq!(model.grid_viewport(GridKind::Artists).unwrap().total_items(), 3);
    assert!(model.active_toast().is_none(), "fallback is silent");
}

#[test]
fn test_data_loaded_clamps_stale_selection() {
    let model = update(create_test_model(), Message::SelectSection(1));
    let model = update(model, Message::MoveSelection(GridMove::Last));
    let model = update(model, Message::DataLoaded(Err(LoadError::Interrupted)));
    assert_eq!(model.grid_viewport(GridKind::Artists).unwrap().selected(), 2);
}

#[test]
fn test_resize_recomputes_grid_columns() {
    let model = update(create_test_model(), Message::Resize(200, 40));
    let wide = model.grid_viewport(GridKind::Artists).unwrap().columns();
    let model = update(model, Message::Resize(40, 40));
    assert_eq!(model.width, 40);
    assert!(wide > model.grid_viewport(GridKind::Artists).unwrap().columns());
}

#[test]
fn test_toggle_help_and_quit() {
    let model = update(create_test_model(), Message::ToggleHelp);
    assert!(model.help_visible);
    let model = update(model, Message::HideHelp);
    assert!(!model.help_visible);
    let model = update(model, Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_toggle_watch_changes_state() {
    let model = update(create_test_model(), Message::ToggleWatch);
    assert!(model.watch_enabled);
    let model = update(model, Message::ToggleWatch);
    assert!(!model.watch_enabled);
}

#[test]
fn test_key_bindings_on_page() {
    let model = create_test_model();
    assert_eq!(
        App::handle_key(key(KeyCode::Char('2')), &model),
        Some(Message::SelectSection(1))
    );
    assert_eq!(App::handle_key(key(KeyCode::Tab), &model), Some(Message::NextSection));
    assert_eq!(App::handle_key(key(KeyCode::BackTab), &model), Some(Message::PrevSection));
    assert_eq!(
        App::handle_key(key(KeyCode::Char('j')), &model),
        Some(Message::MoveSelection(GridMove::Down))
    );
    assert_eq!(App::handle_key(key(KeyCode::Enter), &model), Some(Message::ActivateSelection));
    assert_eq!(App::handle_key(key(KeyCode::Char('r')), &model), Some(Message::Reload));
    assert_eq!(App::handle_key(key(KeyCode::Esc), &model), Some(Message::CloseModal));
}

#[test]
fn test_page_keys_are_blocked_while_overlay_open() {
    let model = update(create_test_model(), Message::SelectSection(1));
    let model = update(model, Message::ActivateSelection);
    assert_eq!(App::handle_key(key(KeyCode::Char('3')), &model), None);
    assert_eq!(App::handle_key(key(KeyCode::Enter), &model), None);
    assert_eq!(App::handle_key(key(KeyCode::Esc), &model), Some(Message::CloseModal));
    assert_eq!(App::handle_key(key(KeyCode::Char('q')), &model), Some(Message::Quit));
}

#[test]
fn test_help_swallows_keys() {
    let mut model = create_test_model();
    model.help_visible = true;
    assert_eq!(App::handle_key(key(KeyCode::Esc), &model), Some(Message::HideHelp));
    assert_eq!(App::handle_key(key(KeyCode::Char('2')), &model), None);
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(App::handle_key(ctrl_c, &model), Some(Message::Quit));
}

#[test]
fn test_mouse_click_on_nav_link() {
    let model = create_test_model();
    let nav = crate::ui::layout::screen_layout(Rect::new(0, 0, 100, 30), false).nav;
    let rects =
        crate::ui::layout::nav_link_rects(nav, &["About", "Artists", "Exhibitions", "Contact"]);
    let msg = App::handle_mouse(click_at(rects[3].x + 1, rects[3].y), &model);
    assert_eq!(msg, Some(Message::Click(ClickTarget::NavLink(3))));
}

#[test]
fn test_mouse_ignored_while_help_visible() {
    let mut model = create_test_model();
    model.help_visible = true;
    assert_eq!(App::handle_mouse(click_at(1, 1), &model), None);
}

#[test]
fn test_click_on_card_then_backdrop_round_trip() {
    let model = update(create_test_model(), Message::SelectSection(1));
    let Some(Message::Click(target)) = App::handle_mouse(click_at(3, 5), &model) else {
        panic!("expected a click");
    };
    assert_eq!(
        target,
        ClickTarget::Card {
            grid: GridKind::Artists,
            index: 0
        }
    );
    let model = update(model, Message::Click(target));
    assert_eq!(model.portfolio.page().top_overlay().unwrap().record_id(), "a0");

    let msg = App::handle_mouse(click_at(0, 0), &model);
    assert_eq!(msg, Some(Message::Click(ClickTarget::Backdrop)));
}

#[test]
fn test_toast_expires() {
    let mut model = create_test_model();
    model.show_toast(ToastLevel::Info, "hello");
    assert!(!model.expire_toast(Instant::now()));
    assert!(model.expire_toast(Instant::now() + Duration::from_secs(5)));
    assert!(model.active_toast().is_none());
}

#[test]
fn test_resize_debouncer_waits_for_delay() {
    let mut debouncer = ResizeDebouncer::new(100);
    debouncer.queue(120, 40, 1_000);
    assert!(debouncer.is_pending());
    assert_eq!(debouncer.take_ready(1_050), None);
    debouncer.queue(130, 41, 1_060);
    assert_eq!(debouncer.take_ready(1_160), Some((130, 41)));
    assert!(!debouncer.is_pending());
}

#[test]
fn test_reload_starts_one_background_load() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("artists.json"),
        r#"{"artists": [{"id": "a1", "name": "Ada Lovelace", "bio": "Pioneer.", "portrait": "p.jpg"}]}"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("exhibitions.json"),
        r#"{"exhibitions": [{"id": "e1", "title": "Venice Biennale 2009", "description": "", "images": ["i1.jpg"]}]}"#,
    )
    .unwrap();

    let mut model = Model::new(
        DataSource::Directory(dir.path().to_path_buf()),
        PageLayout::default(),
        (100, 30),
    );
    let mut loader = None;
    let mut watcher = None;

    App::handle_message_side_effects(&mut model, &mut loader, &mut watcher, &Message::Reload);
    assert!(model.loading);
    assert!(loader.is_some());

    // A second request while the first is pending changes nothing
    App::handle_message_side_effects(&mut model, &mut loader, &mut watcher, &Message::DataChanged);
    assert!(loader.is_some());

    let result = loader.take().unwrap().wait();
    let model = update(model, Message::DataLoaded(result));
    assert_eq!(model.portfolio.store().origin(), Some(DataOrigin::Source));
    assert_eq!(model.portfolio.store().artist("a1").unwrap().name, "Ada Lovelace");
    assert!(!model.loading);
}

#[test]
fn test_toggle_watch_on_remote_source_is_refused() {
    let mut model = Model::new(
        DataSource::parse("https://example.org/catalogue"),
        PageLayout::default(),
        (100, 30),
    );
    let mut loader = None;
    let mut watcher = None;
    model = update(model, Message::ToggleWatch);
    App::handle_message_side_effects(&mut model, &mut loader, &mut watcher, &Message::ToggleWatch);
    assert!(!model.watch_enabled);
    assert!(watcher.is_none());
    assert_eq!(model.active_toast().map(|(_, level)| level), Some(ToastLevel::Warning));
}

#[test]
fn test_image_protocols_are_capped_oldest_first() {
    use image::{DynamicImage, RgbImage};
    use ratatui_image::picker::Picker;

    use crate::image::IMAGE_CACHE_CAPACITY;

    let mut model = create_test_model();
    let picker = Picker::halfblocks();
    for i in 0..=IMAGE_CACHE_CAPACITY {
        let protocol = picker.new_resize_protocol(DynamicImage::ImageRgb8(RgbImage::new(4, 4)));
        model.insert_image_protocol(format!("img-{i}.jpg"), protocol);
    }

    assert_eq!(model.image_protocols.len(), IMAGE_CACHE_CAPACITY);
    assert!(!model.image_protocols.contains_key("img-0.jpg"), "oldest is evicted");
    assert!(model.image_protocols.contains_key(&format!("img-{IMAGE_CACHE_CAPACITY}.jpg")));

    model.apply_load(Err(LoadError::Interrupted));
    assert!(model.image_protocols.is_empty());
}
