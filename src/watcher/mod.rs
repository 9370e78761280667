//! Resource watching for live reload.
//!
//! Uses notify crate for cross-platform file system events.
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

/// Watches the resource files of a local catalogue and emits debounced
/// change notifications.
pub struct DataWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    watch_roots: Vec<PathBuf>,
    targets: HashSet<PathBuf>,
    target_names: HashSet<OsString>,
    debounce: Duration,
    pending_since: Option<Instant>,
}

impl DataWatcher {
    /// Create a watcher for the given resource files.
    ///
    /// The parent directory of each file is watched, so files that do not
    /// exist yet are picked up once created.
    ///
    /// # Errors
    /// Returns an error if the watcher cannot be created or a directory cannot be watched.
    pub fn new(paths: &[PathBuf], debounce: Duration) -> notify::Result<Self> {
        let targets: HashSet<PathBuf> = paths.iter().map(|p| canonical_target(p)).collect();
        let target_names = targets
            .iter()
            .filter_map(|p| p.file_name().map(std::ffi::OsStr::to_os_string))
            .collect();
        let mut watch_roots: Vec<PathBuf> = targets.iter().map(|p| watch_root_for(p)).collect();
        watch_roots.sort();
        watch_roots.dedup();

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;
        for root in &watch_roots {
            watcher.watch(root, RecursiveMode::NonRecursive)?;
        }
        tracing::debug!(roots = ?watch_roots, "watching catalogue resources");

        Ok(Self {
            _watcher: watcher,
            rx,
            watch_roots,
            targets,
            target_names,
            debounce,
            pending_since: None,
        })
    }

    /// Returns true once a debounced resource change is ready.
    pub fn take_change_ready(&mut self) -> bool {
        let mut saw_relevant_event = false;
        let mut total_events = 0u32;
        while let Ok(event) = self.rx.try_recv() {
            total_events += 1;
            match event {
                Ok(ev) if self.is_relevant(&ev) => saw_relevant_event = true,
                Ok(ev) => tracing::trace!(kind = ?ev.kind, paths = ?ev.paths, "irrelevant event"),
                Err(err) => tracing::warn!(error = %err, "watcher error"),
            }
        }

        if total_events > 0 {
            tracing::trace!(total_events, relevant = saw_relevant_event, "watcher poll");
        }

        if saw_relevant_event {
            self.pending_since = Some(Instant::now());
        }

        let Some(pending_since) = self.pending_since else {
            return false;
        };
        if pending_since.elapsed() >= self.debounce {
            self.pending_since = None;
            return true;
        }
        false
    }

    fn is_relevant(&self, event: &Event) -> bool {
        event.paths.iter().any(|path| {
            self.targets.contains(path)
                || self.watch_roots.iter().any(|root| path == root)
                || path
                    .file_name()
                    .is_some_and(|name| self.target_names.contains(name))
        })
    }
}

// Event paths from the OS are canonical; a missing file is canonicalized
// through its parent.
fn canonical_target(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => parent
            .canonicalize()
            .map_or_else(|_| path.to_path_buf(), |p| p.join(name)),
        _ => path.to_path_buf(),
    }
}

fn watch_root_for(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
