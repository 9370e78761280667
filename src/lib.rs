// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. data::DataSource)
    clippy::module_name_repetitions
)]

//! # Vernissage
//!
//! A terminal browser for an art collective's catalogue of artists and
//! exhibitions.
//!
//! Vernissage loads `artists.json` and `exhibitions.json` from a directory
//! or an HTTP base URL and shows:
//! - Tabbed sections with a nav bar
//! - Card grids for artists and exhibitions
//! - Record overlays with an image carousel
//! - A built-in catalogue when the source cannot be loaded
//!
//! ## Architecture
//!
//! The catalogue core ([`portfolio`]) is plain state with no terminal
//! dependency. The terminal front end uses The Elm Architecture (TEA):
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`data`]: Records, sources, loading and the fallback catalogue
//! - [`view`]: Display fields, cards and overlay panels derived from records
//! - [`page`]: Sections, navigation, grid containers and the overlay stack
//! - [`portfolio`]: Grid population, modals, carousel and click dispatch
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`image`]: Image loading and rendering
//! - [`watcher`]: Resource watching
//! - [`config`]: Persisted default flags

pub mod app;
pub mod config;
pub mod data;
pub mod image;
pub mod page;
pub mod portfolio;
pub mod ui;
pub mod view;
pub mod watcher;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::data::{DataSource, DataStore, Dataset};
    pub use crate::page::{ClickTarget, Page, PageLayout};
    pub use crate::portfolio::{Portfolio, Step};
    pub use crate::ui::viewport::GridViewport;
}
