//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the session: both listing
//! collections, the view router, the jobs filter, the post draft and the
//! selection cursor. The filtered jobs list is derived state and is recomputed
//! by [`AppState::apply_filter`] after every change that can affect it.
//!
//! # Example
//!
//! ```rust
//! use rozgarhub::app::AppState;
//! use rozgarhub::domain::{sample_admissions, sample_jobs};
//! use rozgarhub::ui::theme::Theme;
//!
//! let mut state = AppState::new(sample_jobs(), sample_admissions(), Theme::default());
//! state.search_query = "remote".to_string();
//! state.apply_filter();
//! assert_eq!(state.filtered_jobs.len(), 1);
//! ```

use super::draft::{FormField, PostDraft, PostKind};
use super::modes::{InputMode, ViewMode};
use crate::domain::{self, Admission, IdGenerator, Job, TypeFilter};
use crate::ui::helpers::{truncate, ColumnWidths};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ConfirmPrompt, DisplayItem, EmptyState, FilterBarInfo, FooterInfo, FormFieldView, FormView,
    HeaderInfo, HomeEntry, HomeSections, ListingTable, ScreenBody, TabInfo, TableKind,
    UIViewModel,
};

/// Number of home screen entries per section when not configured.
pub const DEFAULT_HOME_LIMIT: usize = 5;

/// Contact block shown on the home screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
}

/// A mutation made before the stored collections arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LocalEdit {
    AddJob(Job),
    AddAdmission(Admission),
    DeleteJob(i64),
}

/// Collections that differ from storage after replaying local edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnsavedCollections {
    pub jobs: bool,
    pub admissions: bool,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Jobs collection, newest first.
    pub jobs: Vec<Job>,

    /// Admissions collection, newest first.
    pub admissions: Vec<Admission>,

    /// Jobs passing the type filter and search query, in collection order.
    pub filtered_jobs: Vec<Job>,

    /// Zero-based cursor within the list of the active screen.
    pub selected_index: usize,

    pub view_mode: ViewMode,
    pub input_mode: InputMode,

    pub type_filter: TypeFilter,
    pub search_query: String,

    pub draft: PostDraft,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Set once the stored collections have arrived from the worker.
    ///
    /// Until then mutations apply in memory only and are queued, so a save
    /// can never overwrite stored data that has not been read yet.
    pub store_ready: bool,

    pending_edits: Vec<LocalEdit>,

    pub ids: IdGenerator,

    /// Entries per home screen section.
    pub home_limit: usize,

    pub contact: ContactInfo,
}

impl AppState {
    /// Creates the state for a board showing `jobs` and `admissions` on the
    /// home screen.
    #[must_use]
    pub fn new(jobs: Vec<Job>, admissions: Vec<Admission>, theme: Theme) -> Self {
        let mut state = Self {
            jobs: vec![],
            admissions: vec![],
            filtered_jobs: vec![],
            selected_index: 0,
            view_mode: ViewMode::Home,
            input_mode: InputMode::Normal,
            type_filter: TypeFilter::All,
            search_query: String::new(),
            draft: PostDraft::default(),
            theme,
            store_ready: false,
            pending_edits: Vec::new(),
            ids: IdGenerator::new(),
            home_limit: DEFAULT_HOME_LIMIT,
            contact: ContactInfo::default(),
        };
        state.replace_collections(jobs, admissions);
        state
    }

    fn replace_collections(&mut self, jobs: Vec<Job>, admissions: Vec<Admission>) {
        for id in jobs.iter().map(|j| j.id).chain(admissions.iter().map(|a| a.id)) {
            self.ids.observe(id);
        }
        self.jobs = jobs;
        self.admissions = admissions;
        self.apply_filter();
    }

    /// Installs the collections read from storage and enables saving.
    ///
    /// Edits made while the board was still showing sample data are replayed
    /// in order on top of the stored collections. The returned flags name the
    /// collections those edits changed, which the caller must persist.
    pub fn load_listings(
        &mut self,
        mut jobs: Vec<Job>,
        mut admissions: Vec<Admission>,
    ) -> UnsavedCollections {
        let mut unsaved = UnsavedCollections::default();
        for edit in std::mem::take(&mut self.pending_edits) {
            match edit {
                LocalEdit::AddJob(job) => {
                    jobs.insert(0, job);
                    unsaved.jobs = true;
                }
                LocalEdit::AddAdmission(admission) => {
                    admissions.insert(0, admission);
                    unsaved.admissions = true;
                }
                LocalEdit::DeleteJob(id) => {
                    let before = jobs.len();
                    jobs.retain(|job| job.id != id);
                    unsaved.jobs |= jobs.len() != before;
                }
            }
        }

        self.replace_collections(jobs, admissions);
        self.store_ready = true;
        self.clamp_selection();
        unsaved
    }

    fn record_edit(&mut self, edit: LocalEdit) {
        if !self.store_ready {
            tracing::debug!(edit = ?edit, "queueing edit until stored listings arrive");
            self.pending_edits.push(edit);
        }
    }

    /// Switches the router to `view`, resetting the cursor and input mode.
    pub fn navigate(&mut self, view: ViewMode) {
        tracing::debug!(from = ?self.view_mode, to = ?view, "navigating");
        self.view_mode = view;
        self.selected_index = 0;
        self.input_mode = if view == ViewMode::Post {
            InputMode::Editing
        } else {
            InputMode::Normal
        };
    }

    /// Length of the list the cursor moves in on the active screen.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        match self.view_mode {
            ViewMode::Jobs => self.filtered_jobs.len(),
            ViewMode::Admissions => self.admissions.len(),
            ViewMode::Home | ViewMode::Post => 0,
        }
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    pub fn move_selection_down(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    pub fn move_selection_up(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        self.selected_index = if len == 0 {
            0
        } else {
            self.selected_index.min(len - 1)
        };
    }

    /// Job under the cursor on the jobs screen.
    #[must_use]
    pub fn selected_job(&self) -> Option<&Job> {
        if self.view_mode != ViewMode::Jobs {
            return None;
        }
        self.filtered_jobs.get(self.selected_index)
    }

    #[must_use]
    pub fn selected_admission(&self) -> Option<&Admission> {
        if self.view_mode != ViewMode::Admissions {
            return None;
        }
        self.admissions.get(self.selected_index)
    }

    /// Recomputes `filtered_jobs` from the type filter and search query.
    pub fn apply_filter(&mut self) {
        let _span = tracing::debug_span!("apply_filter",
            total_jobs = self.jobs.len(),
            query_len = self.search_query.len(),
            filter = %self.type_filter
        ).entered();

        self.filtered_jobs = domain::filtered_jobs(&self.jobs, &self.type_filter, &self.search_query)
            .into_iter()
            .cloned()
            .collect();
        self.clamp_selection();

        tracing::debug!(filtered_count = self.filtered_jobs.len(), "job filter applied");
    }

    /// Resets the type filter and search query.
    pub fn clear_filters(&mut self) {
        self.type_filter = TypeFilter::All;
        self.search_query.clear();
        self.apply_filter();
    }

    /// Prepends a job to the collection.
    pub fn add_job(&mut self, job: Job) {
        self.record_edit(LocalEdit::AddJob(job.clone()));
        self.jobs.insert(0, job);
        self.apply_filter();
    }

    /// Prepends an admission to the collection.
    pub fn add_admission(&mut self, admission: Admission) {
        self.record_edit(LocalEdit::AddAdmission(admission.clone()));
        self.admissions.insert(0, admission);
        self.clamp_selection();
    }

    /// Removes the job with `id`. Returns whether a job was removed.
    pub fn delete_job(&mut self, id: i64) -> bool {
        let before = self.jobs.len();
        self.jobs.retain(|job| job.id != id);
        let removed = self.jobs.len() != before;
        if removed {
            self.record_edit(LocalEdit::DeleteJob(id));
            self.apply_filter();
        }
        removed
    }

    /// Computes a renderable UI view model for a `rows` x `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match self.view_mode {
            ViewMode::Home => ScreenBody::Home(self.compute_home(cols)),
            ViewMode::Jobs => ScreenBody::Listings(self.compute_jobs_table(rows, cols)),
            ViewMode::Admissions => {
                if self.admissions.is_empty() {
                    ScreenBody::Empty(EmptyState {
                        message: "No admissions yet".to_string(),
                        subtitle: "Press p to post one".to_string(),
                    })
                } else {
                    ScreenBody::Listings(self.compute_admissions_table(rows, cols))
                }
            }
            ViewMode::Post => ScreenBody::Post(self.compute_form()),
        };

        UIViewModel {
            header: self.compute_header(),
            body,
            footer: self.compute_footer(),
            confirm: self.compute_confirm(),
        }
    }

    /// Start and end of the visible window around the cursor.
    ///
    /// Keeps the cursor centred when possible and fills the window when the
    /// cursor is near either end of the list.
    fn visible_window(&self, len: usize, available_rows: usize) -> (usize, usize) {
        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(len);

        if visible_end - visible_start < available_rows && len >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }
        (visible_start, visible_end)
    }

    /// Rows left for list items once header, tabs, borders, column headers,
    /// the details line and the footer are drawn.
    const fn calculate_available_rows(total_rows: usize, has_filter_bar: bool) -> usize {
        let chrome = if has_filter_bar { 12 } else { 9 };
        total_rows.saturating_sub(chrome)
    }

    fn compute_jobs_table(&self, rows: usize, cols: usize) -> ListingTable {
        let filter_bar = Some(FilterBarInfo {
            filter_label: self.type_filter.to_string(),
            query: self.search_query.clone(),
            is_focused: self.input_mode == InputMode::Search,
        });

        if self.filtered_jobs.is_empty() {
            let empty_state = if self.jobs.is_empty() {
                EmptyState {
                    message: "No jobs posted yet".to_string(),
                    subtitle: "Press p to post one".to_string(),
                }
            } else {
                EmptyState {
                    message: "No jobs match".to_string(),
                    subtitle: "Press c to clear the filter and search".to_string(),
                }
            };
            return ListingTable {
                kind: TableKind::Jobs,
                filter_bar,
                rows: vec![],
                selected_details: None,
                empty_state: Some(empty_state),
            };
        }

        let available_rows = Self::calculate_available_rows(rows, true).max(1);
        let (start, end) = self.visible_window(self.filtered_jobs.len(), available_rows);
        let widths = ColumnWidths::for_cols(cols);

        let items = self.filtered_jobs[start..end]
            .iter()
            .enumerate()
            .map(|(relative_idx, job)| {
                let highlight_ranges = domain::match_range(&job.title, &self.search_query)
                    .filter(|&(_, end)| end <= widths.title)
                    .into_iter()
                    .collect();
                DisplayItem {
                    title: truncate(&job.title, widths.title),
                    subtitle: truncate(&join_non_empty(&[&job.organization, &job.location]), widths.subtitle),
                    meta: truncate(&join_non_empty(&[&job.salary, &job.date_posted]), widths.meta),
                    badge: job.job_type.as_ref().map(ToString::to_string),
                    is_selected: start + relative_idx == self.selected_index,
                    highlight_ranges,
                }
            })
            .collect();

        ListingTable {
            kind: TableKind::Jobs,
            filter_bar,
            rows: items,
            selected_details: self.selected_job().map(|job| job.details.clone()),
            empty_state: None,
        }
    }

    fn compute_admissions_table(&self, rows: usize, cols: usize) -> ListingTable {
        let available_rows = Self::calculate_available_rows(rows, false).max(1);
        let (start, end) = self.visible_window(self.admissions.len(), available_rows);
        let widths = ColumnWidths::for_cols(cols);

        let items = self.admissions[start..end]
            .iter()
            .enumerate()
            .map(|(relative_idx, admission)| DisplayItem {
                title: truncate(&admission.program, widths.title),
                subtitle: truncate(
                    &join_non_empty(&[&admission.university, &admission.campus]),
                    widths.subtitle,
                ),
                meta: truncate(
                    &format!("Intake: {}  Last date: {}", admission.intake, admission.last_date),
                    widths.meta,
                ),
                badge: None,
                is_selected: start + relative_idx == self.selected_index,
                highlight_ranges: vec![],
            })
            .collect();

        ListingTable {
            kind: TableKind::Admissions,
            filter_bar: None,
            rows: items,
            selected_details: self.selected_admission().map(|a| a.details.clone()),
            empty_state: None,
        }
    }

    fn compute_home(&self, cols: usize) -> HomeSections {
        let width = cols.saturating_sub(4);

        let latest_jobs = self
            .jobs
            .iter()
            .take(self.home_limit)
            .map(|job| HomeEntry {
                primary: truncate(&join_non_empty(&[&job.title, &job.organization]), width),
                secondary: truncate(
                    &format!(
                        "{} • Posted: {}",
                        join_non_empty(&[&job.location, job.type_label()]),
                        job.date_posted
                    ),
                    width,
                ),
            })
            .collect();

        let top_admissions = self
            .admissions
            .iter()
            .take(self.home_limit)
            .map(|a| HomeEntry {
                primary: truncate(&join_non_empty(&[&a.program, &a.university]), width),
                secondary: truncate(
                    &format!("Intake: {} • Last date: {}", a.intake, a.last_date),
                    width,
                ),
            })
            .collect();

        let mut contact = vec![];
        if !self.contact.phone.is_empty() {
            contact.push(format!("Phone: {}", self.contact.phone));
        }
        if !self.contact.email.is_empty() {
            contact.push(format!("Email: {}", self.contact.email));
        }

        HomeSections {
            latest_jobs,
            top_admissions,
            contact,
        }
    }

    fn compute_form(&self) -> FormView {
        let kind = self.draft.kind;
        let focused = self.draft.focused();
        let title = match kind {
            PostKind::Job => "Post a Job",
            PostKind::Admission => "Post an Admission",
        };

        let fields = FormField::sequence(kind)
            .iter()
            .map(|&field| FormFieldView {
                label: field.label(kind).to_string(),
                value: self.draft.value(field),
                is_focused: field == focused,
                is_option: field.is_option(),
            })
            .collect();

        FormView {
            title: title.to_string(),
            fields,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let tabs = ViewMode::ALL
            .iter()
            .enumerate()
            .map(|(idx, &view)| {
                let label = match view {
                    ViewMode::Jobs => format!("{} {} ({})", idx + 1, view.label(), self.jobs.len()),
                    ViewMode::Admissions => {
                        format!("{} {} ({})", idx + 1, view.label(), self.admissions.len())
                    }
                    ViewMode::Home | ViewMode::Post => format!("{} {}", idx + 1, view.label()),
                };
                TabInfo {
                    label,
                    is_active: view == self.view_mode,
                }
            })
            .collect();

        HeaderInfo {
            title: " RozgarHub Pakistan ".to_string(),
            tabs,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.view_mode) {
            (InputMode::ConfirmDelete { .. }, _) => "y: delete  n/Esc: keep",
            (InputMode::Search, _) => "Type to search  Enter/Esc: done  Ctrl+n/p: navigate",
            (InputMode::Editing, _) | (InputMode::Normal, ViewMode::Post) => {
                "Tab/Shift+Tab: field  ←/→: change option  Enter: publish  Esc: cancel"
            }
            (InputMode::Normal, ViewMode::Jobs) => {
                "j/k: navigate  /: search  f/F: filter  c: clear  d: delete  p: post  q: hide"
            }
            (InputMode::Normal, ViewMode::Admissions) => {
                "j/k: navigate  1-4: screens  p: post  q: hide"
            }
            (InputMode::Normal, ViewMode::Home) => "1-4: screens  p: post  q: hide",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_confirm(&self) -> Option<ConfirmPrompt> {
        let InputMode::ConfirmDelete { job_id } = self.input_mode else {
            return None;
        };
        let title = self
            .jobs
            .iter()
            .find(|job| job.id == job_id)
            .map_or("this job", |job| job.title.as_str());
        Some(ConfirmPrompt {
            message: format!("Delete \"{title}\"? y: yes  n: no"),
        })
    }
}

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" • ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{sample_admissions, sample_jobs, JobType};

    fn state() -> AppState {
        AppState::new(sample_jobs(), sample_admissions(), Theme::default())
    }

    fn numbered_jobs(count: i64) -> Vec<Job> {
        (1..=count)
            .map(|id| Job {
                id,
                job_type: None,
                title: format!("Job {id}"),
                organization: String::new(),
                location: String::new(),
                salary: String::new(),
                date_posted: String::new(),
                details: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_new_state_starts_on_home_unloaded() {
        let state = state();
        assert_eq!(state.view_mode, ViewMode::Home);
        assert!(!state.store_ready);
        assert_eq!(state.filtered_jobs, state.jobs);
    }

    #[test]
    fn test_filter_and_query_combine() {
        let mut state = state();
        state.type_filter = TypeFilter::Only(JobType::Private);
        state.apply_filter();
        assert_eq!(state.filtered_jobs.len(), 1);

        state.search_query = "ppsc".to_string();
        state.apply_filter();
        assert!(state.filtered_jobs.is_empty());

        state.clear_filters();
        assert_eq!(state.filtered_jobs.len(), 2);
    }

    #[test]
    fn test_selection_wraps_within_active_list() {
        let mut state = state();
        state.navigate(ViewMode::Jobs);
        state.move_selection_up();
        assert_eq!(state.selected_index, 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);

        state.navigate(ViewMode::Home);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_delete_clamps_selection() {
        let mut state = state();
        state.navigate(ViewMode::Jobs);
        state.move_selection_down();
        let id = state.selected_job().map(|j| j.id).unwrap();

        assert!(state.delete_job(id));
        assert_eq!(state.selected_index, 0);
        assert!(!state.delete_job(id));
    }

    #[test]
    fn test_loaded_ids_seed_the_generator() {
        let mut state = state();
        let mut jobs = numbered_jobs(1);
        jobs[0].id = i64::MAX - 1;
        state.load_listings(jobs, vec![]);
        assert_eq!(state.ids.next_id(), i64::MAX);
        assert!(state.store_ready);
    }

    #[test]
    fn test_edits_before_load_are_replayed_onto_stored_listings() {
        let mut state = state();
        let mut posted = numbered_jobs(1);
        posted[0].id = 500;
        posted[0].title = "Posted early".to_string();
        state.add_job(posted[0].clone());
        assert!(state.delete_job(2));
        assert_eq!(state.jobs.len(), 2);

        let stored = numbered_jobs(3);
        let unsaved = state.load_listings(stored, sample_admissions());

        assert_eq!(
            unsaved,
            UnsavedCollections {
                jobs: true,
                admissions: false
            }
        );
        let ids: Vec<i64> = state.jobs.iter().map(|j| j.id).collect();
        assert_eq!(ids, [500, 1, 3]);
        assert_eq!(state.admissions, sample_admissions());
    }

    #[test]
    fn test_edits_after_load_are_not_queued() {
        let mut state = state();
        state.load_listings(sample_jobs(), sample_admissions());
        state.delete_job(1);

        let unsaved = state.load_listings(sample_jobs(), sample_admissions());
        assert_eq!(unsaved, UnsavedCollections::default());
        assert_eq!(state.jobs, sample_jobs());
    }

    #[test]
    fn test_window_keeps_cursor_visible() {
        let mut state = AppState::new(numbered_jobs(50), vec![], Theme::default());
        state.navigate(ViewMode::Jobs);
        for _ in 0..40 {
            state.move_selection_down();
        }

        let vm = state.compute_viewmodel(24, 100);
        let ScreenBody::Listings(table) = vm.body else {
            panic!("expected listings");
        };
        assert_eq!(table.rows.len(), 12);
        assert_eq!(table.rows.iter().filter(|r| r.is_selected).count(), 1);
        assert!(table.rows.iter().any(|r| r.is_selected && r.title == "Job 41"));
    }

    #[test]
    fn test_search_hit_is_highlighted_in_title() {
        let mut state = state();
        state.navigate(ViewMode::Jobs);
        state.search_query = "developer".to_string();
        state.apply_filter();

        let ScreenBody::Listings(table) = state.compute_viewmodel(30, 120).body else {
            panic!("expected listings");
        };
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].highlight_ranges, vec![(9, 18)]);
    }

    #[test]
    fn test_home_respects_limit_and_contact() {
        let mut state = AppState::new(numbered_jobs(8), sample_admissions(), Theme::default());
        state.home_limit = 3;
        state.contact.email = "board@example.com".to_string();

        let ScreenBody::Home(home) = state.compute_viewmodel(30, 80).body else {
            panic!("expected home");
        };
        assert_eq!(home.latest_jobs.len(), 3);
        assert_eq!(home.latest_jobs[0].primary, "Job 1");
        assert_eq!(home.top_admissions.len(), 1);
        assert_eq!(home.contact, vec!["Email: board@example.com".to_string()]);
    }

    #[test]
    fn test_confirm_prompt_names_the_job() {
        let mut state = state();
        let job = state.jobs[0].clone();
        state.input_mode = InputMode::ConfirmDelete { job_id: job.id };

        let confirm = state.compute_viewmodel(24, 80).confirm.unwrap();
        assert!(confirm.message.contains(&job.title));
    }
}
