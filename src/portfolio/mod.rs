//! The portfolio core: data store, page and carousel in one state object.
//!
//! [`Portfolio`] is created once at startup and owned by the app model. The
//! data store only changes through [`Portfolio::apply_load`]; the overlay
//! stack and carousel only change through the modal and carousel methods.

mod carousel;
mod grid;
mod modal;

pub use carousel::{Carousel, Step};

use crate::data::{DataOrigin, DataSource, DataStore, LoadResult};
use crate::page::{ClickTarget, Page, PageLayout};
use crate::view::GridKind;

#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    store: DataStore,
    page: Page,
    carousel: Carousel,
}

impl Portfolio {
    pub fn new(layout: PageLayout) -> Self {
        Self {
            store: DataStore::new(),
            page: Page::from_layout(layout),
            carousel: Carousel::default(),
        }
    }

    /// Replace the collections with a load outcome and populate the grids.
    pub fn apply_load(&mut self, result: LoadResult) -> DataOrigin {
        let origin = self.store.apply(result);
        self.populate_grids();
        origin
    }

    /// Load `source` on the calling thread and populate the grids.
    pub fn load(&mut self, source: &DataSource) -> DataOrigin {
        self.apply_load(crate::data::fetch_dataset(source))
    }

    pub const fn store(&self) -> &DataStore {
        &self.store
    }

    pub const fn page(&self) -> &Page {
        &self.page
    }

    pub const fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Switch to the section named `id`.
    pub fn select_section(&mut self, id: &str) -> bool {
        self.page.nav_mut().select(id)
    }

    pub fn next_section(&mut self) {
        self.page.nav_mut().next();
    }

    pub fn previous_section(&mut self) {
        self.page.nav_mut().previous();
    }

    /// Dispatch a click the way the page's handlers are layered.
    ///
    /// Overlay handlers run first (backdrop closes, panel swallows, carousel
    /// controls move), then nav links, then the grid's delegated listener,
    /// then the page-wide dismiss handler.
    pub fn click(&mut self, target: ClickTarget) {
        if self.page.has_overlay() {
            match target {
                ClickTarget::Backdrop => {
                    self.close_modal();
                    return;
                }
                ClickTarget::Panel => return,
                ClickTarget::CarouselPrev => {
                    self.step_carousel(Step::Previous);
                    return;
                }
                ClickTarget::CarouselNext => {
                    self.step_carousel(Step::Next);
                    return;
                }
                ClickTarget::CarouselDot(index) => {
                    self.go_to_slide(index);
                    return;
                }
                _ => {}
            }
        }

        match target {
            ClickTarget::NavLink(index) => {
                self.page.nav_mut().select_index(index);
            }
            ClickTarget::Card { grid, .. } => self.dispatch_grid_click(grid, target),
            ClickTarget::Dismiss => {
                self.close_modal();
            }
            _ => {}
        }
    }

    fn dispatch_grid_click(&mut self, kind: GridKind, target: ClickTarget) {
        let Some(container) = self.page.grid(kind) else {
            return;
        };
        let Some(listener) = container.listener() else {
            return;
        };
        let Some(id) = listener.resolve(target, container.cards()).map(str::to_string) else {
            return;
        };
        match kind {
            GridKind::Artists => self.open_artist_modal(&id),
            GridKind::Exhibitions => self.open_exhibition_modal(&id),
        };
    }
}
