//! Overlay panels for a single record.

use crate::data::{Artist, Exhibition};

/// A position indicator below the carousel image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    /// Image position this dot jumps to
    pub index: usize,
    pub active: bool,
}

/// The image-stepping region of an exhibition overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    /// Image reference currently displayed
    pub image: String,
    pub dots: Vec<Dot>,
}

impl CarouselView {
    /// Carousel showing `image` with `count` dots, `active` highlighted.
    pub fn new(image: impl Into<String>, count: usize, active: usize) -> Self {
        Self {
            image: image.into(),
            dots: carousel_dots(count, active),
        }
    }

    /// Index of the highlighted dot, if any.
    pub fn active_dot(&self) -> Option<usize> {
        self.dots.iter().find(|dot| dot.active).map(|dot| dot.index)
    }
}

/// One dot per image, in image order.
pub fn carousel_dots(count: usize, active: usize) -> Vec<Dot> {
    (0..count)
        .map(|index| Dot {
            index,
            active: index == active,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistPanel {
    pub record_id: String,
    pub portrait: String,
    pub name: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExhibitionPanel {
    pub record_id: String,
    pub title: String,
    pub description: String,
    pub carousel: CarouselView,
}

/// A modal overlay shown above the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Artist(ArtistPanel),
    Exhibition(ExhibitionPanel),
}

impl Overlay {
    pub fn record_id(&self) -> &str {
        match self {
            Self::Artist(panel) => &panel.record_id,
            Self::Exhibition(panel) => &panel.record_id,
        }
    }

    /// The image currently shown in the panel.
    pub fn image(&self) -> &str {
        match self {
            Self::Artist(panel) => &panel.portrait,
            Self::Exhibition(panel) => &panel.carousel.image,
        }
    }

    pub const fn carousel(&self) -> Option<&CarouselView> {
        match self {
            Self::Exhibition(panel) => Some(&panel.carousel),
            Self::Artist(_) => None,
        }
    }

    pub const fn carousel_mut(&mut self) -> Option<&mut CarouselView> {
        match self {
            Self::Exhibition(panel) => Some(&mut panel.carousel),
            Self::Artist(_) => None,
        }
    }
}

pub fn artist_overlay(artist: &Artist) -> Overlay {
    Overlay::Artist(ArtistPanel {
        record_id: artist.id.clone(),
        portrait: artist.portrait.clone(),
        name: artist.name.clone(),
        bio: artist.bio.clone(),
    })
}

/// Exhibition overlay with the carousel on the first image.
pub fn exhibition_overlay(exhibition: &Exhibition) -> Overlay {
    let first = exhibition.images.first().cloned().unwrap_or_default();
    Overlay::Exhibition(ExhibitionPanel {
        record_id: exhibition.id.clone(),
        title: exhibition.title.clone(),
        description: exhibition.description.clone(),
        carousel: CarouselView::new(first, exhibition.images.len(), 0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dots_mark_exactly_one_active() {
        let dots = carousel_dots(4, 2);
        assert_eq!(dots.len(), 4);
        assert_eq!(dots.iter().filter(|d| d.active).count(), 1);
        assert!(dots[2].active);
        assert_eq!(dots.iter().map(|d| d.index).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_exhibition_overlay_starts_on_first_image() {
        let overlay = exhibition_overlay(&Exhibition {
            id: "e1".to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
            images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
            year: None,
        });
        let carousel = overlay.carousel().unwrap();
        assert_eq!(carousel.image, "a.jpg");
        assert_eq!(carousel.active_dot(), Some(0));
        assert_eq!(overlay.image(), "a.jpg");
    }

    #[test]
    fn test_artist_overlay_has_no_carousel() {
        let overlay = artist_overlay(&Artist {
            id: "a".to_string(),
            name: "N".to_string(),
            bio: "B".to_string(),
            portrait: "p.jpg".to_string(),
        });
        assert!(overlay.carousel().is_none());
        assert_eq!(overlay.image(), "p.jpg");
        assert_eq!(overlay.record_id(), "a");
    }
}
