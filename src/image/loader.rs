//! Image loading and caching.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use image::DynamicImage;
use once_cell::sync::OnceCell;

use crate::data::{DataSource, ResourceLocation, fetch_bytes};

/// Timeout for a single remote image request.
const IMAGE_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of decoded images kept in memory.
pub const IMAGE_CACHE_CAPACITY: usize = 32;

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<ResourceLocation, DynamicImage>,
    order: VecDeque<ResourceLocation>,
}

/// Cache for loaded images.
#[derive(Debug, Default)]
pub struct ImageCache {
    inner: Arc<Mutex<CacheInner>>,
    max_size: usize,
}

impl ImageCache {
    /// Create a new image cache with the given maximum number of entries.
    pub fn new(max_size: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheInner::default())),
            max_size,
        }
    }

    /// Get an image from the cache.
    pub fn get(&self, location: &ResourceLocation) -> Option<DynamicImage> {
        let guard = self.inner.lock().ok()?;
        guard.entries.get(location).cloned()
    }

    /// Insert an image, evicting the oldest entries beyond capacity.
    pub fn insert(&self, location: ResourceLocation, image: DynamicImage) {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if guard.entries.contains_key(&location) {
            guard.entries.insert(location, image);
            return;
        }

        guard.order.push_back(location.clone());
        guard.entries.insert(location, image);

        while guard.entries.len() > self.max_size {
            if let Some(oldest) = guard.order.pop_front() {
                guard.entries.remove(&oldest);
            } else {
                break;
            }
        }
    }

    pub fn contains(&self, location: &ResourceLocation) -> bool {
        let guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.entries.contains_key(location)
    }

    pub fn clear(&self) {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.entries.clear();
        guard.order.clear();
    }

    pub fn len(&self) -> usize {
        let guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolves record image references against the catalogue source and
/// decodes them, with caching.
///
/// The HTTP client is built on first remote fetch.
#[derive(Debug)]
pub struct ImageLoader {
    cache: ImageCache,
    source: DataSource,
    client: OnceCell<Option<reqwest::blocking::Client>>,
}

impl ImageLoader {
    pub fn new(source: DataSource) -> Self {
        Self {
            cache: ImageCache::new(IMAGE_CACHE_CAPACITY),
            source,
            client: OnceCell::new(),
        }
    }

    /// Load an image reference, using the cache if available.
    pub fn load(&self, reference: &str) -> Option<DynamicImage> {
        let location = self.source.resolve(reference);
        if let Some(img) = self.cache.get(&location) {
            return Some(img);
        }

        let img = self.fetch(&location)?;
        self.cache.insert(location, img.clone());
        Some(img)
    }

    fn fetch(&self, location: &ResourceLocation) -> Option<DynamicImage> {
        let decoded = match location {
            ResourceLocation::File(path) => image::open(path).map_err(|err| err.to_string()),
            ResourceLocation::Url(_) => fetch_bytes(self.client(), location)
                .map_err(|err| err.to_string())
                .and_then(|bytes| {
                    image::load_from_memory(&bytes).map_err(|err| err.to_string())
                }),
        };
        decoded
            .inspect_err(|err| tracing::debug!(%location, error = %err, "image unavailable"))
            .ok()
    }

    fn client(&self) -> Option<&reqwest::blocking::Client> {
        self.client
            .get_or_init(|| {
                reqwest::blocking::Client::builder()
                    .timeout(IMAGE_FETCH_TIMEOUT)
                    .build()
                    .inspect_err(|err| {
                        tracing::warn!(error = %err, "image HTTP client unavailable");
                    })
                    .ok()
            })
            .as_ref()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_cache_evicts_oldest() {
        let cache = ImageCache::new(2);
        let img = DynamicImage::ImageRgb8(RgbImage::new(1, 1));
        let a = ResourceLocation::File(PathBuf::from("a.png"));
        let b = ResourceLocation::File(PathBuf::from("b.png"));
        let c = ResourceLocation::File(PathBuf::from("c.png"));
        cache.insert(a.clone(), img.clone());
        cache.insert(b.clone(), img.clone());
        cache.insert(c.clone(), img);
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&a));
        assert!(cache.contains(&b));
        assert!(cache.contains(&c));
    }

    #[test]
    fn test_loader_reads_relative_to_source_directory() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("images")).unwrap();
        RgbImage::from_pixel(2, 3, Rgb([10, 20, 30]))
            .save(dir.path().join("images/p.png"))
            .unwrap();

        let loader = ImageLoader::new(DataSource::Directory(dir.path().to_path_buf()));
        let img = loader.load("images/p.png").expect("image");
        assert_eq!((img.width(), img.height()), (2, 3));
        assert_eq!(loader.cache.len(), 1);
    }

    #[test]
    fn test_loader_missing_image_is_none() {
        let dir = tempdir().unwrap();
        let loader = ImageLoader::new(DataSource::Directory(dir.path().to_path_buf()));
        assert!(loader.load("missing.jpg").is_none());
        assert!(loader.cache.is_empty());
    }
}
