//! RozgarHub: a job and admissions listing board for Zellij.
//!
//! The board keeps two collections, jobs and university admissions, and
//! offers four screens:
//! - Home: latest jobs, top admissions and a contact block
//! - Jobs: type filter, free-text search and delete with confirmation
//! - Admissions: the admissions list
//! - Post: a form publishing either a job or an admission
//!
//! Both collections persist as JSON in the plugin's data directory and are
//! re-saved after every add or delete.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - View router and input modes                      │
//! │  - Event handling, post draft                       │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON slots  │   │ - Load/save   │
//! │ - Theming     │   │ - Fallbacks   │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Job / Admission records, filter, ids (domain/)   │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to an OTLP JSON file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/rozgarhub.wasm" {
//!         data_dir "~/.local/share/zellij/rozgarhub"
//!         theme "catppuccin-mocha"
//!         home_limit "5"
//!         contact_phone "0300-0000000"
//!         contact_email "board@example.com"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. The plugin parses its [`Config`], installs tracing and builds an
//!    [`AppState`] holding the sample listings.
//! 2. Once permissions are granted it posts `LoadListings` to the worker.
//! 3. The worker reads both slots (falling back to the samples) and answers
//!    `ListingsLoaded`. Adds and deletes made before that are replayed onto
//!    the stored collections; from then on each one posts a save of the
//!    affected collection.
//!
//! # Example
//!
//! ```rust
//! use rozgarhub::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::ShowJobs)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), rozgarhub::RozgarError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, ViewMode};
pub use domain::{Admission, Job, JobType, Result, RozgarError};
pub use ui::Theme;

use app::{ContactInfo, DEFAULT_HOME_LIMIT};
use domain::{sample_admissions, sample_jobs};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the listing slots and the trace file.
    ///
    /// `~` expands to the `/host` mount. Default:
    /// `/host/.local/share/zellij/rozgarhub`.
    pub data_dir: PathBuf,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Entries per home screen section. Default: 5.
    pub home_limit: usize,

    pub contact_phone: String,
    pub contact_email: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: infrastructure::get_data_dir(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            home_limit: DEFAULT_HOME_LIMIT,
            contact_phone: String::new(),
            contact_email: String::new(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored; values that fail to parse fall back to their
    /// defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::path::PathBuf;
    /// use rozgarhub::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("data_dir".to_string(), "~/boards/rozgar".to_string());
    /// map.insert("home_limit".to_string(), "3".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.data_dir, PathBuf::from("/host/boards/rozgar"));
    /// assert_eq!(config.home_limit, 3);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let data_dir = config
            .get("data_dir")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or(defaults.data_dir, |s| PathBuf::from(infrastructure::expand_tilde(s)));

        let home_limit = config
            .get("home_limit")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(defaults.home_limit);

        Self {
            data_dir,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").map(|f| infrastructure::expand_tilde(f)),
            trace_level: config.get("trace_level").cloned(),
            home_limit,
            contact_phone: config.get("contact_phone").cloned().unwrap_or_default(),
            contact_email: config.get("contact_email").cloned().unwrap_or_default(),
        }
    }

    /// Theme from `theme_file`, else `theme_name`, else the default.
    fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial application state.
///
/// The board starts on the home screen showing the sample listings; the
/// stored collections replace them when the worker answers `LoadListings`.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(data_dir = %config.data_dir.display(), "initializing rozgarhub plugin");

    let mut state = AppState::new(sample_jobs(), sample_admissions(), config.resolve_theme());
    state.home_limit = config.home_limit;
    state.contact = ContactInfo {
        phone: config.contact_phone.clone(),
        email: config.contact_email.clone(),
    };
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("home_limit", "many"),
            ("data_dir", "  "),
            ("unknown_key", "x"),
        ]));
        assert_eq!(config.home_limit, DEFAULT_HOME_LIMIT);
        assert_eq!(config.data_dir, infrastructure::get_data_dir());
    }

    #[test]
    fn test_initialize_applies_config() {
        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-latte"),
            ("home_limit", "2"),
            ("contact_phone", "0300-1234567"),
        ]));
        let state = initialize(&config);

        assert_eq!(state.theme.name, "catppuccin-latte");
        assert_eq!(state.home_limit, 2);
        assert_eq!(state.contact.phone, "0300-1234567");
        assert_eq!(state.jobs, sample_jobs());
        assert!(!state.store_ready);
    }

    #[test]
    fn test_missing_theme_file_falls_back_to_default() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme, Theme::default());
    }
}
