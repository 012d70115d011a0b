//! Terminal user interface.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - `components`: Header, tabs, tables, form and footer renderers
//! - [`helpers`]: Cursor positioning, highlighting and truncation
//! - [`theme`]: Color schemes and ANSI escape sequences
//!
//! # Example
//!
//! ```rust
//! use rozgarhub::app::AppState;
//! use rozgarhub::ui::{render, Theme};
//!
//! let state = AppState::new(vec![], vec![], Theme::default());
//! render(&state, 24, 80); // Renders to stdout
//! ```

mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ConfirmPrompt, DisplayItem, EmptyState, FilterBarInfo, FooterInfo, FormFieldView, FormView,
    HeaderInfo, HomeEntry, HomeSections, ListingTable, ScreenBody, TabInfo, TableKind,
    UIViewModel,
};
