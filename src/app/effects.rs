use std::time::Duration;

use crate::app::{App, Message, Model, ToastLevel};
use crate::data::{DataLoader, DataSource, fetch_dataset};
use crate::watcher::DataWatcher;

impl App {
    pub(super) fn make_data_watcher(source: &DataSource) -> notify::Result<DataWatcher> {
        let paths = source
            .local_resource_paths()
            .ok_or_else(|| notify::Error::generic("remote catalogues cannot be watched"))?;
        DataWatcher::new(&paths, Duration::from_millis(200))
    }

    /// Start a background load unless one is already in flight.
    pub(super) fn start_load(model: &mut Model, loader: &mut Option<DataLoader>) {
        if loader.is_some() {
            tracing::debug!("load already in flight; request ignored");
            return;
        }
        match DataLoader::spawn(model.source.clone()) {
            Ok(spawned) => {
                *loader = Some(spawned);
                model.loading = true;
            }
            Err(err) => {
                tracing::warn!(error = %err, "data loader thread unavailable; loading inline");
                let result = fetch_dataset(&model.source);
                model.apply_load(result);
            }
        }
    }

    pub(super) fn handle_message_side_effects(
        model: &mut Model,
        loader: &mut Option<DataLoader>,
        data_watcher: &mut Option<DataWatcher>,
        msg: &Message,
    ) {
        match msg {
            Message::ToggleWatch => {
                if model.watch_enabled {
                    match Self::make_data_watcher(&model.source) {
                        Ok(watcher) => {
                            *data_watcher = Some(watcher);
                            model.show_toast(ToastLevel::Info, "Watching catalogue changes");
                        }
                        Err(err) => {
                            model.watch_enabled = false;
                            *data_watcher = None;
                            model.show_toast(
                                ToastLevel::Warning,
                                format!("Watch unavailable: {err}"),
                            );
                            tracing::warn!(
                                source = %model.source.label(),
                                error = %err,
                                "watch failed"
                            );
                        }
                    }
                } else {
                    *data_watcher = None;
                    model.show_toast(ToastLevel::Info, "Watch disabled");
                }
            }
            Message::Reload => {
                let already_loading = loader.is_some();
                Self::start_load(model, loader);
                if !already_loading {
                    model.show_toast(ToastLevel::Info, "Reloading catalogue");
                }
            }
            Message::DataChanged => Self::start_load(model, loader),
            _ => {}
        }
    }
}
