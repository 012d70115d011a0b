//! Input and view mode state types for the application.
//!
//! These enums decide which keybindings are active and which screen is drawn.
//!
//! # State Machine
//!
//! The view router holds exactly one [`ViewMode`] at a time. Within a screen
//! the [`InputMode`] decides how keys are interpreted:
//! - **Normal**: navigation and commands
//! - **Search**: typing into the jobs search box
//! - **Editing**: typing into the post form
//! - **`ConfirmDelete`**: a blocking yes/no prompt for one job
//!
//! # Example
//!
//! ```rust
//! use rozgarhub::app::modes::{InputMode, ViewMode};
//!
//! let view_mode = ViewMode::default();
//! assert_eq!(view_mode, ViewMode::Home);
//! ```

/// Screen selected by the view router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Latest jobs, top admissions and the contact block.
    #[default]
    Home,

    /// Filterable, searchable jobs list with delete.
    Jobs,

    /// Read-only admissions list.
    Admissions,

    /// Post form for a new job or admission.
    Post,
}

impl ViewMode {
    /// All screens in tab order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Jobs, Self::Admissions, Self::Post];

    /// Tab label shown in the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Jobs => "Jobs",
            Self::Admissions => "Admissions",
            Self::Post => "Post",
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    #[default]
    Normal,

    /// The jobs search box has focus; characters edit the query.
    Search,

    /// The post form has focus; characters edit the focused field.
    Editing,

    /// Waiting for the user to confirm deleting the job with this id.
    ConfirmDelete {
        /// Id of the job that will be removed on confirmation.
        job_id: i64,
    },
}
