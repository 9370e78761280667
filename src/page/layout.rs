//! Static page structure: which sections exist and what they hold.

use crate::view::GridKind;

/// What a section displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    /// Fixed prose
    Text(String),
    /// A grid container for one record kind
    Grid(GridKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpec {
    /// Anchor id used by the nav bar (e.g. `artists`)
    pub id: String,
    /// Nav link label
    pub title: String,
    pub content: SectionContent,
}

impl SectionSpec {
    pub fn text(id: &str, title: &str, body: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content: SectionContent::Text(body.to_string()),
        }
    }

    pub fn grid(id: &str, title: &str, kind: GridKind) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content: SectionContent::Grid(kind),
        }
    }
}

/// Ordered list of sections making up the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub sections: Vec<SectionSpec>,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            sections: vec![
                SectionSpec::text(
                    "about",
                    "About",
                    "An artists' collective working across performance, print and \
                     book design. Browse the members and the exhibitions they have \
                     shown in using the sections above.",
                ),
                SectionSpec::grid("artists", "Artists", GridKind::Artists),
                SectionSpec::grid("exhibitions", "Exhibitions", GridKind::Exhibitions),
                SectionSpec::text(
                    "contact",
                    "Contact",
                    "For catalogue requests and loans, write to the collective's \
                     secretary.",
                ),
            ],
        }
    }
}

impl PageLayout {
    /// Drop the section holding the `kind` grid, leaving that container absent.
    #[must_use]
    pub fn without_grid(mut self, kind: GridKind) -> Self {
        self.sections
            .retain(|section| section.content != SectionContent::Grid(kind));
        self
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }
}
