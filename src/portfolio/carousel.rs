//! Carousel controller: the open exhibition and its active image.

use crate::data::Exhibition;
use crate::view::{Overlay, carousel_dots};

use super::Portfolio;

/// Relative carousel movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

/// The `(exhibition, index)` pair behind the open exhibition overlay.
///
/// Closing the overlay does not clear it; opening an exhibition always
/// resets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    exhibition: Option<Exhibition>,
    index: usize,
}

impl Carousel {
    /// Make `exhibition` the active one, on its first image.
    pub fn start(&mut self, exhibition: Exhibition) {
        self.exhibition = Some(exhibition);
        self.index = 0;
    }

    /// Move one image with wraparound. Returns the new index.
    pub fn step(&mut self, step: Step) -> Option<usize> {
        let count = self.exhibition.as_ref()?.images.len();
        if count == 0 {
            return None;
        }
        self.index = match step {
            Step::Next => (self.index % count + 1) % count,
            Step::Previous => (self.index % count + count - 1) % count,
        };
        Some(self.index)
    }

    /// Jump to `index` without bounds checking against the image count.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        self.exhibition.as_ref()?;
        self.index = index;
        Some(self.index)
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn exhibition(&self) -> Option<&Exhibition> {
        self.exhibition.as_ref()
    }

    pub fn image_count(&self) -> usize {
        self.exhibition.as_ref().map_or(0, |ex| ex.images.len())
    }

    pub fn current_image(&self) -> Option<&str> {
        self.exhibition
            .as_ref()?
            .images
            .get(self.index)
            .map(String::as_str)
    }
}

impl Portfolio {
    /// Step the carousel of the open exhibition overlay.
    pub fn step_carousel(&mut self, step: Step) {
        if !self.exhibition_overlay_open() {
            return;
        }
        if self.carousel.step(step).is_some() {
            self.render_carousel();
        }
    }

    /// Jump the carousel of the open exhibition overlay to `index`.
    pub fn go_to_slide(&mut self, index: usize) {
        if !self.exhibition_overlay_open() {
            return;
        }
        if self.carousel.go_to(index).is_some() {
            self.render_carousel();
        }
    }

    fn exhibition_overlay_open(&self) -> bool {
        self.carousel.exhibition().is_some()
            && matches!(self.page.top_overlay(), Some(Overlay::Exhibition(_)))
    }

    /// Redraw the image and dots of the open overlay from carousel state.
    fn render_carousel(&mut self) {
        let count = self.carousel.image_count();
        let index = self.carousel.index();
        let image = self.carousel.current_image().map(str::to_string);
        let Some(view) = self.page.top_overlay_mut().and_then(Overlay::carousel_mut) else {
            return;
        };
        if let Some(image) = image {
            view.image = image;
        }
        view.dots = carousel_dots(count, index);
        tracing::trace!(index, count, "carousel rendered");
    }
}
