//! Modal builder: open and close record overlays.

use crate::view::{Overlay, artist_overlay, exhibition_overlay};

use super::Portfolio;

impl Portfolio {
    /// Show the artist overlay for `id`. Unknown ids do nothing.
    pub fn open_artist_modal(&mut self, id: &str) -> bool {
        let Some(artist) = self.store.artist(id) else {
            tracing::debug!(id, "no artist with this id");
            return false;
        };
        let overlay = artist_overlay(artist);
        self.show_overlay(overlay);
        true
    }

    /// Show the exhibition overlay for `id` and point the carousel at it.
    /// Unknown ids do nothing.
    pub fn open_exhibition_modal(&mut self, id: &str) -> bool {
        let Some(exhibition) = self.store.exhibition(id) else {
            tracing::debug!(id, "no exhibition with this id");
            return false;
        };
        let overlay = exhibition_overlay(exhibition);
        self.carousel.start(exhibition.clone());
        self.show_overlay(overlay);
        true
    }

    /// Remove every open overlay. Returns how many were removed.
    pub fn close_modal(&mut self) -> usize {
        let removed = self.page.remove_overlays();
        if removed > 0 {
            tracing::debug!(removed, "overlays closed");
        }
        removed
    }

    // At most one overlay: a new one replaces whatever is open.
    fn show_overlay(&mut self, overlay: Overlay) {
        self.page.remove_overlays();
        tracing::debug!(id = overlay.record_id(), "overlay opened");
        self.page.append_overlay(overlay);
    }
}
