//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order after the state has been updated, which
//! keeps `handle_event` free of Zellij host calls.
//!
//! # Example
//!
//! ```rust
//! use rozgarhub::app::Action;
//! use rozgarhub::worker::WorkerMessage;
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::save_jobs(vec![]))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane. The board keeps its state.
    CloseFocus,

    /// Posts a message to the background worker thread.
    ///
    /// Used for the initial load and for persisting a collection after every
    /// add or delete.
    PostToWorker(WorkerMessage),
}
