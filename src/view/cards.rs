//! Grid cards built from records.

use crate::data::{Artist, Collection, Exhibition};

use super::derive::{exhibition_year, short_bio, short_name, short_title};

/// Subtitle shown on every exhibition card.
pub const EXHIBITION_SUBTITLE: &str = "Exhibition";

/// Which record grid a card or container belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridKind {
    Artists,
    Exhibitions,
}

impl GridKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Artists => "Artists",
            Self::Exhibitions => "Exhibitions",
        }
    }
}

/// One display card in a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub kind: GridKind,
    /// Id of the record this card opens
    pub record_id: String,
    /// Thumbnail image reference
    pub image: String,
    /// Full record name, used as alt text
    pub image_alt: String,
    pub title: String,
    pub subtitle: String,
    /// Year badge (exhibitions only)
    pub badge: Option<String>,
}

pub fn artist_card(artist: &Artist) -> Card {
    Card {
        kind: GridKind::Artists,
        record_id: artist.id.clone(),
        image: artist.portrait.clone(),
        image_alt: artist.name.clone(),
        title: short_name(&artist.name),
        subtitle: short_bio(&artist.bio).to_string(),
        badge: None,
    }
}

pub fn exhibition_card(exhibition: &Exhibition) -> Card {
    Card {
        kind: GridKind::Exhibitions,
        record_id: exhibition.id.clone(),
        image: exhibition.images.first().cloned().unwrap_or_default(),
        image_alt: exhibition.title.clone(),
        title: short_title(&exhibition.title),
        subtitle: EXHIBITION_SUBTITLE.to_string(),
        badge: Some(exhibition_year(exhibition)),
    }
}

pub fn artist_cards(artists: &Collection<Artist>) -> Vec<Card> {
    artists.iter().map(artist_card).collect()
}

pub fn exhibition_cards(exhibitions: &Collection<Exhibition>) -> Vec<Card> {
    exhibitions.iter().map(exhibition_card).collect()
}
