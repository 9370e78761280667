//! Pure view construction.
//!
//! Every function here maps records to plain view structs. Nothing in this
//! module knows about the terminal; the [`crate::ui`] layer draws the
//! structs and [`crate::page`] holds them.

pub mod cards;
pub mod derive;
pub mod modal;

pub use cards::{Card, GridKind, artist_card, artist_cards, exhibition_card, exhibition_cards};
pub use modal::{
    ArtistPanel, CarouselView, Dot, ExhibitionPanel, Overlay, artist_overlay, carousel_dots,
    exhibition_overlay,
};
