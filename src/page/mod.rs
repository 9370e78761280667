//! In-memory page the portfolio core renders into.
//!
//! The page owns the sections from a [`PageLayout`], one grid container per
//! grid section, and the overlay stack. It is deliberately dumb: deciding
//! *what* goes into a container is the job of [`crate::portfolio`].

mod layout;
mod nav;

pub use layout::{PageLayout, SectionContent, SectionSpec};
pub use nav::Navigation;

use crate::view::{Card, GridKind, Overlay};

/// Something the user can click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Nav bar link for the section at this index
    NavLink(usize),
    /// A card, by position in its grid
    Card { grid: GridKind, index: usize },
    /// Empty space inside a grid container
    GridBackground(GridKind),
    /// The dimmed area around an overlay panel
    Backdrop,
    /// Inside an overlay panel, away from any control
    Panel,
    /// The overlay close control
    Dismiss,
    CarouselPrev,
    CarouselNext,
    /// A carousel position dot
    CarouselDot(usize),
    /// Anywhere else
    Nothing,
}

/// The single delegated click handler of a grid container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridListener {
    kind: GridKind,
}

impl GridListener {
    /// Id of the record whose card was clicked, if the click hit a card of
    /// this grid.
    pub fn resolve<'a>(&self, target: ClickTarget, cards: &'a [Card]) -> Option<&'a str> {
        match target {
            ClickTarget::Card { grid, index } if grid == self.kind => {
                cards.get(index).map(|card| card.record_id.as_str())
            }
            _ => None,
        }
    }
}

/// A grid section's card container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridContainer {
    kind: GridKind,
    cards: Vec<Card>,
    listener: Option<GridListener>,
}

impl GridContainer {
    const fn new(kind: GridKind) -> Self {
        Self {
            kind,
            cards: Vec::new(),
            listener: None,
        }
    }

    pub const fn kind(&self) -> GridKind {
        self.kind
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Replace the whole card batch.
    pub fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Attach the delegated click listener unless one is already attached.
    ///
    /// Returns true if a listener was newly attached.
    pub fn attach_listener(&mut self) -> bool {
        if self.listener.is_some() {
            return false;
        }
        self.listener = Some(GridListener { kind: self.kind });
        true
    }

    pub const fn listener(&self) -> Option<GridListener> {
        self.listener
    }

    pub const fn listener_count(&self) -> usize {
        if self.listener.is_some() { 1 } else { 0 }
    }
}

/// Sections, grid containers, navigation and overlays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    sections: Vec<SectionSpec>,
    nav: Navigation,
    grids: Vec<GridContainer>,
    overlays: Vec<Overlay>,
}

impl Default for Page {
    fn default() -> Self {
        Self::from_layout(PageLayout::default())
    }
}

impl Page {
    /// Build the page; one empty container per grid section.
    pub fn from_layout(layout: PageLayout) -> Self {
        let grids = layout
            .sections
            .iter()
            .filter_map(|section| match section.content {
                SectionContent::Grid(kind) => Some(GridContainer::new(kind)),
                SectionContent::Text(_) => None,
            })
            .collect();
        let nav = Navigation::new(layout.sections.iter().map(|s| s.id.clone()).collect());
        Self {
            sections: layout.sections,
            nav,
            grids,
            overlays: Vec::new(),
        }
    }

    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    pub fn active_section(&self) -> Option<&SectionSpec> {
        self.sections.get(self.nav.active_index())
    }

    /// Grid kind shown by the active section, if it is a grid section.
    pub fn active_grid_kind(&self) -> Option<GridKind> {
        match self.active_section()?.content {
            SectionContent::Grid(kind) => Some(kind),
            SectionContent::Text(_) => None,
        }
    }

    pub const fn nav(&self) -> &Navigation {
        &self.nav
    }

    pub const fn nav_mut(&mut self) -> &mut Navigation {
        &mut self.nav
    }

    pub fn grid(&self, kind: GridKind) -> Option<&GridContainer> {
        self.grids.iter().find(|grid| grid.kind == kind)
    }

    pub fn grid_mut(&mut self, kind: GridKind) -> Option<&mut GridContainer> {
        self.grids.iter_mut().find(|grid| grid.kind == kind)
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    /// The most recently appended overlay.
    pub fn top_overlay(&self) -> Option<&Overlay> {
        self.overlays.last()
    }

    pub fn top_overlay_mut(&mut self) -> Option<&mut Overlay> {
        self.overlays.last_mut()
    }

    pub fn has_overlay(&self) -> bool {
        !self.overlays.is_empty()
    }

    /// Append an overlay above everything else.
    pub fn append_overlay(&mut self, overlay: Overlay) {
        self.overlays.push(overlay);
    }

    /// Remove every overlay, returning how many were removed.
    pub fn remove_overlays(&mut self) -> usize {
        let removed = self.overlays.len();
        self.overlays.clear();
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Artist;
    use crate::view::{Card, artist_card};

    fn card(id: &str) -> Card {
        artist_card(&Artist {
            id: id.to_string(),
            name: "A B".to_string(),
            bio: "c.".to_string(),
            portrait: "p".to_string(),
        })
    }

    #[test]
    fn test_page_has_container_per_grid_section() {
        let page = Page::default();
        assert!(page.grid(GridKind::Artists).is_some());
        assert!(page.grid(GridKind::Exhibitions).is_some());

        let page = Page::from_layout(PageLayout::default().without_grid(GridKind::Exhibitions));
        assert!(page.grid(GridKind::Exhibitions).is_none());
    }

    #[test]
    fn test_attach_listener_is_idempotent() {
        let mut page = Page::default();
        let grid = page.grid_mut(GridKind::Artists).unwrap();
        assert!(grid.attach_listener());
        assert!(!grid.attach_listener());
        assert_eq!(grid.listener_count(), 1);
    }

    #[test]
    fn test_listener_resolves_only_own_cards() {
        let mut grid = GridContainer::new(GridKind::Artists);
        grid.replace_cards(vec![card("x"), card("y")]);
        grid.attach_listener();
        let listener = grid.listener().unwrap();

        let hit = ClickTarget::Card {
            grid: GridKind::Artists,
            index: 1,
        };
        assert_eq!(listener.resolve(hit, grid.cards()), Some("y"));

        let other_grid = ClickTarget::Card {
            grid: GridKind::Exhibitions,
            index: 0,
        };
        assert_eq!(listener.resolve(other_grid, grid.cards()), None);
        assert_eq!(
            listener.resolve(ClickTarget::GridBackground(GridKind::Artists), grid.cards()),
            None
        );
    }

    #[test]
    fn test_active_grid_kind_follows_navigation() {
        let mut page = Page::default();
        assert_eq!(page.active_grid_kind(), None);
        page.nav_mut().select("exhibitions");
        assert_eq!(page.active_grid_kind(), Some(GridKind::Exhibitions));
    }
}
