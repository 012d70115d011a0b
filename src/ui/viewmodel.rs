//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState::compute_viewmodel()` and consumed
//! by the renderer. They contain no business logic, only display-ready data:
//! truncated text, selection flags and highlight ranges.
//!
//! # Example
//!
//! ```rust
//! use rozgarhub::ui::viewmodel::{EmptyState, FooterInfo, HeaderInfo, ScreenBody, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " RozgarHub ".to_string(), tabs: vec![] },
//!     body: ScreenBody::Empty(EmptyState {
//!         message: "No jobs yet".to_string(),
//!         subtitle: "Press p to post one".to_string(),
//!     }),
//!     footer: FooterInfo { keybindings: "q: hide".to_string() },
//!     confirm: None,
//! };
//! assert!(vm.confirm.is_none());
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar and screen tabs.
    pub header: HeaderInfo,

    /// Screen-specific content.
    pub body: ScreenBody,

    /// Keybinding hints for the current mode.
    pub footer: FooterInfo,

    /// Blocking prompt drawn over the footer while a delete awaits an answer.
    pub confirm: Option<ConfirmPrompt>,
}

/// Content of the active screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenBody {
    Home(HomeSections),
    Listings(ListingTable),
    Post(FormView),
    Empty(EmptyState),
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,

    /// One tab per screen, in router order.
    pub tabs: Vec<TabInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    pub label: String,
    pub is_active: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "q: hide  /: search").
    pub keybindings: String,
}

/// Which collection a [`ListingTable`] shows. Decides the column headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Jobs,
    Admissions,
}

/// A windowed list of jobs or admissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingTable {
    pub kind: TableKind,

    /// Filter and search bar, present on the jobs screen only.
    pub filter_bar: Option<FilterBarInfo>,

    /// Rows inside the visible window.
    pub rows: Vec<DisplayItem>,

    /// Details text of the selected record, shown under the list.
    pub selected_details: Option<String>,

    /// Message shown instead of rows when nothing matches.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single listing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Job title or admission program.
    pub title: String,

    /// Organization and location, or university and campus.
    pub subtitle: String,

    /// Salary and posting date, or intake and last date.
    pub meta: String,

    /// Job type label, if any.
    pub badge: Option<String>,

    /// Whether this item is currently selected.
    pub is_selected: bool,

    /// Character ranges of `title` to highlight (search hits).
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// State of the jobs filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    /// Label of the active type filter ("All", "Government", ...).
    pub filter_label: String,

    /// Current search query text.
    pub query: String,

    /// Whether the search box has keyboard focus.
    pub is_focused: bool,
}

/// Home screen sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeSections {
    pub latest_jobs: Vec<HomeEntry>,
    pub top_admissions: Vec<HomeEntry>,
    pub contact: Vec<String>,
}

/// One line pair in a home section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeEntry {
    pub primary: String,
    pub secondary: String,
}

/// Post form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: String,
    pub fields: Vec<FormFieldView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldView {
    pub label: String,
    pub value: String,
    pub is_focused: bool,
    /// Changed with left/right rather than typed into.
    pub is_option: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No jobs match").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Delete confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub message: String,
}
