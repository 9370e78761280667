use std::collections::{HashMap, HashSet, VecDeque};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui_image::picker::{Picker, ProtocolType};
use ratatui_image::protocol::StatefulProtocol;

use crate::data::{DataOrigin, DataSource, LoadResult};
use crate::image::{IMAGE_CACHE_CAPACITY, ImageLoader};
use crate::page::{ClickTarget, PageLayout};
use crate::portfolio::Portfolio;
use crate::ui::viewport::GridViewport;
use crate::view::GridKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// Catalogue, page and carousel
    pub portfolio: Portfolio,
    /// Where the catalogue is loaded from
    pub source: DataSource,
    /// Selection and scroll state per grid
    grid_viewports: HashMap<GridKind, GridViewport>,
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
    /// Whether a background load is in flight
    pub loading: bool,
    /// Whether resource watching is enabled
    pub watch_enabled: bool,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Whether inline images are enabled
    pub images_enabled: bool,
    /// Image protocols for rendering, keyed by image reference
    pub image_protocols: HashMap<String, StatefulProtocol>,
    /// Insertion order of `image_protocols`, oldest first
    image_protocol_order: VecDeque<String>,
    /// References that failed to load; rendered as placeholders
    failed_images: HashSet<String>,
    /// Image picker for terminal rendering
    pub picker: Option<Picker>,
    image_loader: ImageLoader,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("source", &self.source)
            .field("size", &(self.width, self.height))
            .field("loading", &self.loading)
            .field("watch_enabled", &self.watch_enabled)
            .field("overlays", &self.portfolio.page().overlays().len())
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a model with an empty catalogue.
    pub fn new(source: DataSource, layout: PageLayout, terminal_size: (u16, u16)) -> Self {
        let mut model = Self {
            portfolio: Portfolio::new(layout),
            image_loader: ImageLoader::new(source.clone()),
            source,
            width: terminal_size.0,
            height: terminal_size.1,
            ..Self::default()
        };
        model.sync_grid_viewports();
        model
    }

    /// Set the image picker.
    #[must_use]
    pub fn with_picker(mut self, picker: Option<Picker>) -> Self {
        self.picker = picker;
        self
    }

    /// Install a load outcome and reset everything derived from the old catalogue.
    pub fn apply_load(&mut self, result: LoadResult) -> DataOrigin {
        let origin = self.portfolio.apply_load(result);
        self.loading = false;
        self.image_protocols.clear();
        self.image_protocol_order.clear();
        self.failed_images.clear();
        self.image_loader.clear_cache();
        self.sync_grid_viewports();
        origin
    }

    /// Match every grid viewport to its card count and the terminal size.
    pub(super) fn sync_grid_viewports(&mut self) {
        let (columns, rows) = crate::ui::grid_dimensions_for_terminal(self.width, self.height);
        for kind in [GridKind::Artists, GridKind::Exhibitions] {
            let Some(container) = self.portfolio.page().grid(kind) else {
                self.grid_viewports.remove(&kind);
                continue;
            };
            let total = container.cards().len();
            let viewport = self
                .grid_viewports
                .entry(kind)
                .or_insert_with(|| GridViewport::new(columns, rows, total));
            viewport.resize(columns, rows);
            viewport.set_total_items(total);
        }
    }

    pub fn grid_viewport(&self, kind: GridKind) -> Option<&GridViewport> {
        self.grid_viewports.get(&kind)
    }

    pub(super) fn active_viewport_mut(&mut self) -> Option<&mut GridViewport> {
        let kind = self.portfolio.page().active_grid_kind()?;
        self.grid_viewports.get_mut(&kind)
    }

    /// Click target for the selected card of the active grid.
    pub fn selected_card_target(&self) -> Option<ClickTarget> {
        let kind = self.portfolio.page().active_grid_kind()?;
        let viewport = self.grid_viewports.get(&kind)?;
        let cards = self.portfolio.page().grid(kind)?.cards();
        (viewport.selected() < cards.len()).then_some(ClickTarget::Card {
            grid: kind,
            index: viewport.selected(),
        })
    }

    /// Decode the image shown by the open overlay, if it is not ready yet.
    pub fn load_overlay_image(&mut self) {
        if !self.images_enabled {
            return;
        }
        let Some(picker) = &self.picker else { return };
        let Some(reference) = self
            .portfolio
            .page()
            .top_overlay()
            .map(|overlay| overlay.image().to_string())
        else {
            return;
        };
        if self.image_protocols.contains_key(&reference) || self.failed_images.contains(&reference)
        {
            return;
        }

        let Some(mut img) = self.image_loader.load(&reference) else {
            self.failed_images.insert(reference);
            return;
        };
        let halfblocks = matches!(picker.protocol_type(), ProtocolType::Halfblocks);
        if halfblocks && !crate::image::supports_truecolor_terminal() {
            img = crate::image::quantize_to_ansi256(&img);
        }
        tracing::debug!(
            %reference,
            width = img.width(),
            height = img.height(),
            halfblocks,
            "overlay image ready"
        );
        let protocol = picker.new_resize_protocol(img);
        self.insert_image_protocol(reference, protocol);
    }

    /// Keep a protocol, dropping the oldest ones beyond the image cache capacity.
    pub(super) fn insert_image_protocol(&mut self, reference: String, protocol: StatefulProtocol) {
        if self.image_protocols.insert(reference.clone(), protocol).is_none() {
            self.image_protocol_order.push_back(reference);
        }
        while self.image_protocols.len() > IMAGE_CACHE_CAPACITY {
            let Some(oldest) = self.image_protocol_order.pop_front() else {
                break;
            };
            self.image_protocols.remove(&oldest);
        }
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        let source = DataSource::default();
        Self {
            portfolio: Portfolio::default(),
            image_loader: ImageLoader::new(source.clone()),
            source,
            grid_viewports: HashMap::new(),
            width: 80,
            height: 24,
            loading: false,
            watch_enabled: false,
            config_global_path: None,
            config_local_path: None,
            help_visible: false,
            toast: None,
            should_quit: false,
            images_enabled: true,
            image_protocols: HashMap::new(),
            image_protocol_order: VecDeque::new(),
            failed_images: HashSet::new(),
            picker: None,
        }
    }
}
