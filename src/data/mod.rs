//! Catalogue data: records, keyed collections and loading.
//!
//! This module handles:
//! - The artist and exhibition record shapes
//! - Fetching the two JSON resources from a directory or base URL
//! - Falling back to a built-in dataset when anything goes wrong

mod collection;
mod fallback;
mod loader;
mod records;
mod source;

pub use collection::Collection;
pub use fallback::fallback_dataset;
pub use loader::{DataLoader, LoadResult};
pub use records::{Artist, ArtistsResource, Exhibition, ExhibitionsResource, Record};
pub use source::{
    ARTISTS_RESOURCE, DataSource, EXHIBITIONS_RESOURCE, LoadError, ResourceLocation,
    fetch_bytes, fetch_dataset,
};

/// Both collections from one successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub artists: Collection<Artist>,
    pub exhibitions: Collection<Exhibition>,
}

impl Dataset {
    /// Key both record lists by id.
    pub fn new(artists: Vec<Artist>, exhibitions: Vec<Exhibition>) -> Self {
        Self {
            artists: Collection::from_records(artists),
            exhibitions: Collection::from_records(exhibitions),
        }
    }

    /// Check the invariants the views rely on.
    ///
    /// # Errors
    /// Returns [`LoadError::EmptyImages`] for the first exhibition without images.
    pub fn validate(&self) -> Result<(), LoadError> {
        if let Some(ex) = self.exhibitions.iter().find(|ex| ex.images.is_empty()) {
            return Err(LoadError::EmptyImages { id: ex.id.clone() });
        }
        Ok(())
    }
}

/// Where the currently held collections came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// Loaded from the configured source
    Source,
    /// Built-in dataset substituted after a failed load
    Fallback,
}

/// Holds the current artist and exhibition collections.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    data: Dataset,
    origin: Option<DataOrigin>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both collections with the outcome of a load.
    ///
    /// Failures are logged and replaced by [`fallback_dataset`]; they never
    /// propagate further.
    pub fn apply(&mut self, result: LoadResult) -> DataOrigin {
        let (data, origin) = match result {
            Ok(data) => (data, DataOrigin::Source),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load catalogue; using built-in data");
                (fallback_dataset(), DataOrigin::Fallback)
            }
        };
        tracing::info!(
            artists = data.artists.len(),
            exhibitions = data.exhibitions.len(),
            ?origin,
            "catalogue replaced"
        );
        self.data = data;
        self.origin = Some(origin);
        origin
    }

    pub const fn artists(&self) -> &Collection<Artist> {
        &self.data.artists
    }

    pub const fn exhibitions(&self) -> &Collection<Exhibition> {
        &self.data.exhibitions
    }

    pub fn artist(&self, id: &str) -> Option<&Artist> {
        self.data.artists.get(id)
    }

    pub fn exhibition(&self, id: &str) -> Option<&Exhibition> {
        self.data.exhibitions.get(id)
    }

    /// `None` until the first load has been applied.
    pub const fn origin(&self) -> Option<DataOrigin> {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_error_substitutes_fallback() {
        let mut store = DataStore::new();
        let origin = store.apply(Err(LoadError::Interrupted));
        assert_eq!(origin, DataOrigin::Fallback);
        let fallback = fallback_dataset();
        assert_eq!(store.artists(), &fallback.artists);
        assert_eq!(store.exhibitions(), &fallback.exhibitions);
    }

    #[test]
    fn test_apply_replaces_wholesale() {
        let mut store = DataStore::new();
        store.apply(Ok(fallback_dataset()));
        let only = Dataset::new(
            vec![Artist {
                id: "solo".to_string(),
                name: "Solo Artist".to_string(),
                bio: "Alone.".to_string(),
                portrait: "s.jpg".to_string(),
            }],
            Vec::new(),
        );
        assert_eq!(store.apply(Ok(only)), DataOrigin::Source);
        assert_eq!(store.artists().len(), 1);
        assert!(store.artist("kozin").is_none());
        assert!(store.exhibitions().is_empty());
    }

    #[test]
    fn test_origin_is_unset_before_first_load() {
        assert_eq!(DataStore::new().origin(), None);
    }
}
