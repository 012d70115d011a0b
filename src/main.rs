//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the RozgarHub library and the Zellij plugin
//! system. It implements `ZellijPlugin`, registers the listings worker, and
//! translates Zellij events and library actions in both directions.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  ListingsWorker  │   │  ← Slot reads and writes
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState` with samples
//! 2. **Permissions**: On grant, ask the worker to load the stored listings
//! 3. **Update**: Map keys and worker responses to events, run actions
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Global: `Ctrl+n` / `Ctrl+p` move the selection.
//!
//! Normal mode:
//! - `1` home, `2` jobs, `3` admissions, `4`/`p` post form
//! - `j`/`Down`, `k`/`Up`: move selection
//! - `q`: hide the plugin
//! - Jobs screen only: `/` search, `f`/`F` cycle type filter, `c` clear
//!   filters, `d` delete selected job
//!
//! Search mode: characters edit the query, `Backspace` deletes,
//! `Enter`/`Esc` leave the search box.
//!
//! Post form: characters edit the focused field, `Tab`/`Down` next field,
//! `Shift+Tab`/`Up` previous field, `Left`/`Right` change an option field,
//! `Enter` publish, `Esc` cancel.
//!
//! Delete prompt: `y` deletes, `n`/`Esc` keeps the job.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use rozgarhub::worker::{ListingsWorker, WorkerMessage, WorkerResponse};
use rozgarhub::{handle_event, Action, Config, Event, InputMode, ViewMode};

register_plugin!(State);
register_worker!(ListingsWorker, rozgarhub_worker, ROZGARHUB_WORKER);

/// Plugin state wrapper.
struct State {
    app: rozgarhub::app::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Sandbox path handed to the worker on load.
    data_dir: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: rozgarhub::initialize(&default_config),
            worker_name: "rozgarhub".to_string(),
            data_dir: default_config.data_dir.to_string_lossy().to_string(),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds the initial state and requests the
    /// filesystem permission the worker needs for the data directory.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        rozgarhub::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(data_dir = %config.data_dir.display(), home_limit = config.home_limit, "parsed configuration");
        self.app = rozgarhub::initialize(&config);
        self.data_dir = config.data_dir.to_string_lossy().to_string();

        request_permission(&[PermissionType::FullHdAccess]);

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates the Zellij event, delegates to `handle_event` and executes
    /// the resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match self.map_permission_result(permissions) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        rozgarhub::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::ConfirmDelete { .. } => Self::map_confirm_key(key),
            InputMode::Search => Self::map_search_key(key),
            InputMode::Editing => Self::map_form_key(key),
            InputMode::Normal => self.map_normal_key(key),
        }
    }

    fn map_normal_key(&self, key: &KeyWithModifier) -> Option<Event> {
        let on_jobs = self.app.view_mode == ViewMode::Jobs;

        Some(match key.bare_key {
            BareKey::Char('1') => Event::ShowHome,
            BareKey::Char('2') => Event::ShowJobs,
            BareKey::Char('3') => Event::ShowAdmissions,
            BareKey::Char('4' | 'p') => Event::ShowPostForm,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('/') if on_jobs => Event::SearchMode,
            BareKey::Char('f') if on_jobs => Event::CycleFilter,
            BareKey::Char('F') if on_jobs => Event::CycleFilterBack,
            BareKey::Char('c') if on_jobs => Event::ClearFilters,
            BareKey::Char('d') if on_jobs => Event::RequestDelete,
            _ => return None,
        })
    }

    fn map_search_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Enter | BareKey::Esc => Event::ExitSearch,
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_form_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevField,
            BareKey::Tab | BareKey::Down => Event::NextField,
            BareKey::Up => Event::PrevField,
            BareKey::Left => Event::CycleOption { forward: false },
            BareKey::Right => Event::CycleOption { forward: true },
            BareKey::Enter => Event::Publish,
            BareKey::Esc => Event::CancelPost,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_confirm_key(key: &KeyWithModifier) -> Option<Event> {
        match key.bare_key {
            BareKey::Char('y' | 'Y') => Some(Event::ConfirmDelete),
            BareKey::Char('n' | 'N') | BareKey::Esc => Some(Event::CancelDelete),
            _ => None,
        }
    }

    /// Starts the listing load once the data directory is reachable.
    fn map_permission_result(&self, permissions: PermissionStatus) -> Option<Event> {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - loading stored listings");
                Some(Event::LoadListings {
                    data_dir: self.data_dir.clone(),
                })
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - listings stay in memory for this session");
                None
            }
        }
    }

    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    /// Serializes the message as JSON and posts it to the worker thread.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::PostToWorker(ref message) => self.post_worker_message(message),
        }
    }
}
