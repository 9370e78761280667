//! Where catalogue resources and images live, and how they are fetched.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::records::{ArtistsResource, ExhibitionsResource};
use super::Dataset;

/// File name of the artists resource under the source base.
pub const ARTISTS_RESOURCE: &str = "artists.json";
/// File name of the exhibitions resource under the source base.
pub const EXHIBITIONS_RESOURCE: &str = "exhibitions.json";

/// Anything that can go wrong while loading the catalogue.
///
/// All variants are handled identically by the data store (fall back to the
/// built-in dataset); the distinction only matters for the log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {location}: {message}")]
    Io { location: String, message: String },
    #[error("request for {location} failed: {message}")]
    Http { location: String, message: String },
    #[error("malformed JSON in {location}: {message}")]
    Json { location: String, message: String },
    #[error("exhibition `{id}` has no images")]
    EmptyImages { id: String },
    #[error("data loader stopped before delivering a result")]
    Interrupted,
}

/// Base location of a catalogue: a local directory or an HTTP base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Directory(PathBuf),
    Remote(String),
}

impl Default for DataSource {
    fn default() -> Self {
        Self::Directory(PathBuf::from("."))
    }
}

/// A single fetchable resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceLocation {
    File(PathBuf),
    Url(String),
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

impl DataSource {
    /// Interpret a command-line source argument.
    pub fn parse(s: &str) -> Self {
        if is_url(s) {
            Self::Remote(s.trim_end_matches('/').to_string())
        } else {
            Self::Directory(PathBuf::from(s))
        }
    }

    /// Location of a named resource under this base.
    pub fn resource(&self, name: &str) -> ResourceLocation {
        match self {
            Self::Directory(dir) => ResourceLocation::File(dir.join(name)),
            Self::Remote(base) => ResourceLocation::Url(format!("{base}/{name}")),
        }
    }

    /// Resolve an image reference from a record.
    ///
    /// Absolute URLs and absolute paths are used as-is; anything else is
    /// relative to this base.
    pub fn resolve(&self, reference: &str) -> ResourceLocation {
        if is_url(reference) {
            return ResourceLocation::Url(reference.to_string());
        }
        match self {
            Self::Directory(dir) => {
                let path = Path::new(reference);
                if path.is_absolute() {
                    ResourceLocation::File(path.to_path_buf())
                } else {
                    ResourceLocation::File(dir.join(path))
                }
            }
            Self::Remote(base) => {
                ResourceLocation::Url(format!("{base}/{}", reference.trim_start_matches('/')))
            }
        }
    }

    /// Local paths of both resources, for file watching.
    pub fn local_resource_paths(&self) -> Option<Vec<PathBuf>> {
        match self {
            Self::Directory(dir) => Some(vec![
                dir.join(ARTISTS_RESOURCE),
                dir.join(EXHIBITIONS_RESOURCE),
            ]),
            Self::Remote(_) => None,
        }
    }

    /// Short human-readable label for the status bar.
    pub fn label(&self) -> String {
        match self {
            Self::Directory(dir) => dir.display().to_string(),
            Self::Remote(base) => base.clone(),
        }
    }
}

/// Fetch both resources and assemble a validated dataset.
///
/// # Errors
///
/// Returns the first failure from either fetch, parse or validation step.
/// There is no partial success.
pub fn fetch_dataset(source: &DataSource) -> Result<Dataset, LoadError> {
    let client = record_client(source)?;
    let artists: ArtistsResource =
        fetch_json(client.as_ref(), &source.resource(ARTISTS_RESOURCE))?;
    let exhibitions: ExhibitionsResource =
        fetch_json(client.as_ref(), &source.resource(EXHIBITIONS_RESOURCE))?;

    let dataset = Dataset::new(artists.artists, exhibitions.exhibitions);
    dataset.validate()?;
    Ok(dataset)
}

fn record_client(source: &DataSource) -> Result<Option<reqwest::blocking::Client>, LoadError> {
    let DataSource::Remote(base) = source else {
        return Ok(None);
    };
    // Record fetches are never timed out; a hung server just delays the grids.
    reqwest::blocking::Client::builder()
        .timeout(None::<std::time::Duration>)
        .build()
        .map(Some)
        .map_err(|err| LoadError::Http {
            location: base.clone(),
            message: err.to_string(),
        })
}

fn fetch_json<T: DeserializeOwned>(
    client: Option<&reqwest::blocking::Client>,
    location: &ResourceLocation,
) -> Result<T, LoadError> {
    let bytes = fetch_bytes(client, location)?;
    serde_json::from_slice(&bytes).map_err(|err| LoadError::Json {
        location: location.to_string(),
        message: err.to_string(),
    })
}

/// Read a resource into memory.
///
/// File locations ignore `client`; URL locations without a client use a
/// default one.
///
/// # Errors
///
/// Returns [`LoadError::Io`] for file failures and [`LoadError::Http`] for
/// transport failures or non-success status codes.
pub fn fetch_bytes(
    client: Option<&reqwest::blocking::Client>,
    location: &ResourceLocation,
) -> Result<Vec<u8>, LoadError> {
    match location {
        ResourceLocation::File(path) => std::fs::read(path).map_err(|err| LoadError::Io {
            location: location.to_string(),
            message: err.to_string(),
        }),
        ResourceLocation::Url(url) => {
            let http_err = |err: reqwest::Error| LoadError::Http {
                location: url.clone(),
                message: err.to_string(),
            };
            let response = match client {
                Some(client) => client.get(url).send(),
                None => reqwest::blocking::get(url),
            }
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(http_err)?;
            response.bytes().map(|b| b.to_vec()).map_err(http_err)
        }
    }
}
