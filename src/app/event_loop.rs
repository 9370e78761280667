use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, ToastLevel, update};
use crate::data::DataLoader;
use crate::watcher::DataWatcher;

pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Background work the loop polls between input events.
struct Background {
    loader: Option<DataLoader>,
    watcher: Option<DataWatcher>,
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        // Create image picker BEFORE initializing terminal (queries stdio)
        let picker = if self.images_enabled {
            crate::image::create_picker(self.force_half_cell)
        } else {
            None
        };

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; vernissage requires an interactive terminal")?;
        let size = terminal.size()?;
        tracing::info!(
            source = %self.source.label(),
            width = size.width,
            height = size.height,
            "starting"
        );

        let mut model = Model::new(
            self.source.clone(),
            self.layout.clone(),
            (size.width, size.height),
        )
        .with_picker(picker);
        model.watch_enabled = self.watch_enabled;
        model.images_enabled = self.images_enabled;
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);
        if let Some(section) = &self.initial_section
            && !model.portfolio.select_section(section)
        {
            model.show_toast(ToastLevel::Warning, format!("No section named '{section}'"));
        }

        let result = Self::event_loop(&mut terminal, &mut model);

        // Restore terminal
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let start = Instant::now();
        let mut resize_debouncer = ResizeDebouncer::new(100);
        let mut background = Background {
            loader: None,
            watcher: None,
        };
        if model.watch_enabled {
            match Self::make_data_watcher(&model.source) {
                Ok(watcher) => background.watcher = Some(watcher),
                Err(err) => {
                    model.watch_enabled = false;
                    model.show_toast(ToastLevel::Warning, format!("Watch unavailable: {err}"));
                    tracing::warn!(source = %model.source.label(), error = %err, "watch failed");
                }
            }
        }
        Self::start_load(model, &mut background.loader);

        execute!(stdout(), EnableMouseCapture)?;
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                *model = update(std::mem::take(model), Message::Resize(width, height));
                needs_render = true;
            }

            if let Some(result) = background.loader.as_ref().and_then(DataLoader::try_take) {
                background.loader = None;
                *model = update(std::mem::take(model), Message::DataLoaded(result));
                needs_render = true;
            }

            if model.watch_enabled
                && background
                    .watcher
                    .as_mut()
                    .is_some_and(DataWatcher::take_change_ready)
            {
                Self::dispatch(model, &mut background, Message::DataChanged);
                needs_render = true;
            }

            let poll_ms = if needs_render {
                0
            } else if resize_debouncer.is_pending() {
                10
            } else if background.loader.is_some() {
                50
            } else {
                250
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                // Coalesce key repeat bursts into a single render.
                loop {
                    let event_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                    let ev = event::read()?;
                    if let Some(msg) =
                        Self::handle_event(&ev, model, event_ms, &mut resize_debouncer)
                    {
                        tracing::trace!(frame = frame_idx, ?msg, "message");
                        Self::dispatch(model, &mut background, msg);
                        needs_render = true;
                    }
                    if !event::poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }

            if needs_render {
                frame_idx += 1;
                model.load_overlay_image();
                terminal.draw(|frame| Self::view(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        let _ = execute!(stdout(), DisableMouseCapture);
        tracing::info!(frames = frame_idx, "exiting");
        Ok(())
    }

    fn dispatch(model: &mut Model, background: &mut Background, msg: Message) {
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(
            model,
            &mut background.loader,
            &mut background.watcher,
            &side_msg,
        );
    }
}
