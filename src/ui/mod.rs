//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`layout`]: Screen geometry and mouse hit-testing
//! - [`viewport`]: Grid selection and visible rows
//! - [`style`]: Theming and colors

pub mod layout;
pub mod style;
pub mod viewport;

mod images;
mod overlays;
mod render;
mod status;

pub use layout::{grid_dimensions_for_terminal, hit_test};
pub use render::render;
