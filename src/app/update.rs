use crate::app::Model;
use crate::data::LoadResult;
use crate::page::ClickTarget;
use crate::ui::viewport::GridMove;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation
    /// Activate the section at this index
    SelectSection(usize),
    /// Activate the next section (wraps)
    NextSection,
    /// Activate the previous section (wraps)
    PrevSection,
    /// Move the card selection in the active grid
    MoveSelection(GridMove),
    /// Click the selected card
    ActivateSelection,

    // Pointer
    /// A click resolved against the last drawn frame
    Click(ClickTarget),
    /// Press the overlay dismiss control
    CloseModal,

    // Data
    /// User asked for a reload
    Reload,
    /// A watched resource changed on disk
    DataChanged,
    /// The background loader finished
    DataLoaded(LoadResult),
    /// Toggle resource watching
    ToggleWatch,

    // UI
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,
    /// Terminal resized
    Resize(u16, u16),
    /// Quit the application
    Quit,
}

/// Pure state transition. Side effects (threads, watchers) live in `effects`.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::SelectSection(index) => {
            model.portfolio.click(ClickTarget::NavLink(index));
        }
        Message::NextSection => model.portfolio.next_section(),
        Message::PrevSection => model.portfolio.previous_section(),
        Message::MoveSelection(movement) => {
            if let Some(viewport) = model.active_viewport_mut() {
                viewport.move_selection(movement);
            }
        }
        Message::ActivateSelection => {
            if let Some(target) = model.selected_card_target() {
                model.portfolio.click(target);
            }
        }

        Message::Click(target) => model.portfolio.click(target),
        Message::CloseModal => model.portfolio.click(ClickTarget::Dismiss),

        Message::Reload | Message::DataChanged => {}
        Message::DataLoaded(result) => {
            model.apply_load(result);
        }
        Message::ToggleWatch => model.watch_enabled = !model.watch_enabled,

        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,
        Message::Resize(width, height) => {
            model.width = width;
            model.height = height;
            model.sync_grid_viewports();
        }
        Message::Quit => model.should_quit = true,
    }
    model
}
