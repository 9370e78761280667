//! Grid renderer: project collections into the page's grid containers.

use crate::view::{GridKind, artist_cards, exhibition_cards};

use super::Portfolio;

impl Portfolio {
    /// Populate both grids from the current collections.
    pub fn populate_grids(&mut self) {
        self.populate_artist_grid();
        self.populate_exhibition_grid();
    }

    /// Re-render the artist grid. Returns false if it was left untouched.
    pub fn populate_artist_grid(&mut self) -> bool {
        if !self.grid_ready(GridKind::Artists, self.store.artists().is_empty()) {
            return false;
        }
        let cards = artist_cards(self.store.artists());
        self.fill_grid(GridKind::Artists, cards)
    }

    /// Re-render the exhibition grid. Returns false if it was left untouched.
    pub fn populate_exhibition_grid(&mut self) -> bool {
        if !self.grid_ready(GridKind::Exhibitions, self.store.exhibitions().is_empty()) {
            return false;
        }
        let cards = exhibition_cards(self.store.exhibitions());
        self.fill_grid(GridKind::Exhibitions, cards)
    }

    fn grid_ready(&self, kind: GridKind, collection_empty: bool) -> bool {
        if self.page.grid(kind).is_none() {
            tracing::debug!(grid = kind.label(), "grid container absent; skipping");
            return false;
        }
        !collection_empty
    }

    fn fill_grid(&mut self, kind: GridKind, cards: Vec<crate::view::Card>) -> bool {
        let Some(grid) = self.page.grid_mut(kind) else {
            return false;
        };
        let count = cards.len();
        grid.replace_cards(cards);
        let attached = grid.attach_listener();
        tracing::debug!(grid = kind.label(), cards = count, attached, "grid populated");
        true
    }
}
