//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain, worker and UI
//! layers.
//!
//! # Architecture
//!
//! ```text
//! Key Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`draft`]: Post form draft and its field sequence
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: View router and input mode types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod draft;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use draft::{FormField, PostDraft, PostKind};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, ViewMode};
pub use state::{AppState, ContactInfo, UnsavedCollections, DEFAULT_HOME_LIMIT};
