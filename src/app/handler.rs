//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place the board's state changes. It returns
//! whether the UI needs a redraw plus the side effects the plugin shim must
//! run, most importantly persisting a collection after every add or delete.
//!
//! # Event Types
//!
//! - **Navigation**: `ShowHome`, `ShowJobs`, `ShowAdmissions`, `ShowPostForm`, `KeyDown`, `KeyUp`
//! - **Filter/Search**: `SearchMode`, `ExitSearch`, `Char`, `Backspace`, `CycleFilter`, `ClearFilters`
//! - **Delete**: `RequestDelete`, `ConfirmDelete`, `CancelDelete`
//! - **Post form**: `NextField`, `PrevField`, `CycleOption`, `Publish`, `CancelPost`
//! - **Worker**: `LoadListings`, `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use rozgarhub::app::{handle_event, AppState, Event, ViewMode};
//! use rozgarhub::ui::theme::Theme;
//!
//! let mut state = AppState::new(vec![], vec![], Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::ShowJobs)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! assert_eq!(state.view_mode, ViewMode::Jobs);
//! # Ok::<(), rozgarhub::RozgarError>(())
//! ```

use super::modes::{InputMode, ViewMode};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Listing;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ShowHome,
    ShowJobs,
    ShowAdmissions,
    ShowPostForm,

    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Gives the jobs search box keyboard focus.
    SearchMode,
    /// Leaves the search box, keeping the query.
    ExitSearch,
    /// Text input for the search box or the focused form field.
    Char(char),
    Backspace,
    /// Advances the job type filter.
    CycleFilter,
    /// Steps the job type filter back.
    CycleFilterBack,
    /// Resets the type filter and the search query.
    ClearFilters,

    /// Asks for confirmation before deleting the selected job.
    RequestDelete,
    ConfirmDelete,
    CancelDelete,

    NextField,
    PrevField,
    /// Changes the focused option field of the post form.
    CycleOption {
        forward: bool,
    },
    Publish,
    CancelPost,

    /// Asks the worker to open the store in `data_dir` and read both
    /// collections.
    LoadListings {
        data_dir: String,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

fn navigate(state: &mut AppState, view: ViewMode) -> (bool, Vec<Action>) {
    if state.view_mode == view && state.input_mode == InputMode::Normal {
        return (false, vec![]);
    }
    state.navigate(view);
    (true, vec![])
}

/// Save of the jobs collection, once stored listings have been read.
fn save_jobs(state: &AppState) -> Vec<Action> {
    if state.store_ready {
        vec![Action::PostToWorker(WorkerMessage::save_jobs(state.jobs.clone()))]
    } else {
        vec![]
    }
}

fn save_admissions(state: &AppState) -> Vec<Action> {
    if state.store_ready {
        vec![Action::PostToWorker(WorkerMessage::save_admissions(
            state.admissions.clone(),
        ))]
    } else {
        vec![]
    }
}

fn publish(state: &mut AppState) -> (bool, Vec<Action>) {
    let id = state.ids.next_id();
    let listing = state.draft.build(id, &today());
    state.draft.clear();

    match listing {
        Listing::Job(job) => {
            tracing::info!(id = job.id, title = %job.title, "job published");
            state.add_job(job);
            state.navigate(ViewMode::Jobs);
            (true, save_jobs(state))
        }
        Listing::Admission(admission) => {
            tracing::info!(id = admission.id, program = %admission.program, "admission published");
            state.add_admission(admission);
            state.navigate(ViewMode::Admissions);
            (true, save_admissions(state))
        }
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::ListingsLoaded { jobs, admissions } => {
            tracing::debug!(
                job_count = jobs.len(),
                admission_count = admissions.len(),
                "stored listings received"
            );
            let unsaved = state.load_listings(jobs.clone(), admissions.clone());
            let mut actions = vec![];
            if unsaved.jobs {
                actions.extend(save_jobs(state));
            }
            if unsaved.admissions {
                actions.extend(save_admissions(state));
            }
            (true, actions)
        }
        WorkerResponse::Saved { key, count } => {
            tracing::debug!(key = %key, count = count, "collection saved");
            (false, vec![])
        }
        WorkerResponse::Error { message } => {
            tracing::warn!(error = %message, "worker error");
            (false, vec![])
        }
    }
}

/// Processes an event, mutates application state, and returns whether to
/// render along with the actions to execute.
///
/// # Errors
///
/// Currently every event is handled infallibly; the `Result` keeps the
/// signature stable for handlers that can fail.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let outcome = match event {
        Event::ShowHome => navigate(state, ViewMode::Home),
        Event::ShowJobs => navigate(state, ViewMode::Jobs),
        Event::ShowAdmissions => navigate(state, ViewMode::Admissions),
        Event::ShowPostForm => navigate(state, ViewMode::Post),
        Event::KeyDown => {
            state.move_selection_down();
            (true, vec![])
        }
        Event::KeyUp => {
            state.move_selection_up();
            (true, vec![])
        }
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::SearchMode => {
            if state.view_mode != ViewMode::Jobs {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search;
            (true, vec![])
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "leaving search box");
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search => {
                state.search_query.push(*c);
                tracing::trace!(query = %state.search_query, "search query updated");
                state.apply_filter();
                (true, vec![])
            }
            InputMode::Editing => {
                state.draft.push_char(*c);
                (true, vec![])
            }
            InputMode::Normal | InputMode::ConfirmDelete { .. } => (false, vec![]),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search => {
                state.search_query.pop();
                state.apply_filter();
                (true, vec![])
            }
            InputMode::Editing => {
                state.draft.pop_char();
                (true, vec![])
            }
            InputMode::Normal | InputMode::ConfirmDelete { .. } => (false, vec![]),
        },
        Event::CycleFilter | Event::CycleFilterBack => {
            if state.view_mode != ViewMode::Jobs {
                return Ok((false, vec![]));
            }
            state.type_filter = if *event == Event::CycleFilter {
                state.type_filter.next()
            } else {
                state.type_filter.previous()
            };
            state.apply_filter();
            (true, vec![])
        }
        Event::ClearFilters => {
            state.clear_filters();
            (true, vec![])
        }
        Event::RequestDelete => {
            let Some(job_id) = state.selected_job().map(|job| job.id) else {
                tracing::debug!("no job selected to delete");
                return Ok((false, vec![]));
            };
            state.input_mode = InputMode::ConfirmDelete { job_id };
            (true, vec![])
        }
        Event::ConfirmDelete => {
            let InputMode::ConfirmDelete { job_id } = state.input_mode else {
                return Ok((false, vec![]));
            };
            state.input_mode = InputMode::Normal;
            if state.delete_job(job_id) {
                tracing::info!(id = job_id, "job deleted");
                (true, save_jobs(state))
            } else {
                tracing::debug!(id = job_id, "job already gone");
                (true, vec![])
            }
        }
        Event::CancelDelete => {
            if !matches!(state.input_mode, InputMode::ConfirmDelete { .. }) {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }
        Event::NextField => {
            state.draft.focus_next();
            (true, vec![])
        }
        Event::PrevField => {
            state.draft.focus_previous();
            (true, vec![])
        }
        Event::CycleOption { forward } => {
            state.draft.cycle_option(*forward);
            (true, vec![])
        }
        Event::Publish => publish(state),
        Event::CancelPost => {
            state.draft.clear();
            state.navigate(ViewMode::Home);
            (true, vec![])
        }
        Event::LoadListings { data_dir } => (
            false,
            vec![Action::PostToWorker(WorkerMessage::load_listings(data_dir.clone()))],
        ),
        Event::WorkerResponse(response) => handle_worker_response(state, response),
    };

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::draft::PostKind;
    use crate::domain::{sample_admissions, sample_jobs, Admission, Job, JobType, TypeFilter};
    use crate::ui::theme::Theme;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(vec![], vec![], Theme::default());
        state.load_listings(sample_jobs(), sample_admissions());
        state
    }

    fn run(state: &mut AppState, events: &[Event]) -> Vec<Action> {
        events
            .iter()
            .flat_map(|event| handle_event(state, event).unwrap().1)
            .collect()
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn test_search_keeps_query_after_leaving_box() {
        let mut state = loaded_state();
        run(&mut state, &[Event::ShowJobs, Event::SearchMode]);
        type_text(&mut state, "remote");
        run(&mut state, &[Event::ExitSearch]);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search_query, "remote");
        assert_eq!(state.filtered_jobs.len(), 1);
        assert_eq!(state.filtered_jobs[0].location, "Remote");
    }

    #[test]
    fn test_chars_are_ignored_in_normal_mode() {
        let mut state = loaded_state();
        run(&mut state, &[Event::ShowJobs]);
        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn test_filter_cycle_and_clear() {
        let mut state = loaded_state();
        run(&mut state, &[Event::ShowJobs, Event::CycleFilter, Event::CycleFilter]);
        assert_eq!(state.type_filter, TypeFilter::Only(JobType::Private));
        assert_eq!(state.filtered_jobs.len(), 1);

        run(&mut state, &[Event::CycleFilterBack, Event::ClearFilters]);
        assert_eq!(state.type_filter, TypeFilter::All);
        assert_eq!(state.filtered_jobs.len(), 2);
    }

    #[test]
    fn test_confirmed_delete_removes_job_and_saves() {
        let mut state = loaded_state();
        run(&mut state, &[Event::ShowJobs, Event::KeyDown, Event::RequestDelete]);
        assert_eq!(state.input_mode, InputMode::ConfirmDelete { job_id: 2 });

        let actions = run(&mut state, &[Event::ConfirmDelete]);
        assert_eq!(state.jobs.len(), 1);
        assert!(state.jobs.iter().all(|job| job.id != 2));
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::SaveJobs { jobs, .. })] if jobs.len() == 1
        ));
    }

    #[test]
    fn test_declined_delete_changes_nothing() {
        let mut state = loaded_state();
        run(&mut state, &[Event::ShowJobs, Event::RequestDelete]);
        let actions = run(&mut state, &[Event::CancelDelete]);

        assert!(actions.is_empty());
        assert_eq!(state.jobs, sample_jobs());
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_mutations_before_load_apply_locally_without_saving() {
        let mut state = AppState::new(sample_jobs(), sample_admissions(), Theme::default());
        run(&mut state, &[Event::ShowPostForm, Event::NextField]);
        type_text(&mut state, "X");
        let mut actions = run(&mut state, &[Event::Publish]);

        assert_eq!(state.jobs.len(), 3);
        assert_eq!(state.jobs[0].title, "X");
        assert_eq!(state.view_mode, ViewMode::Jobs);
        assert!(state.draft.title.is_empty());

        actions.extend(run(&mut state, &[Event::KeyDown, Event::RequestDelete]));
        assert_eq!(state.input_mode, InputMode::ConfirmDelete { job_id: 1 });
        actions.extend(run(&mut state, &[Event::ConfirmDelete]));

        assert!(actions.is_empty());
        assert_eq!(state.jobs.len(), 2);
    }

    #[test]
    fn test_load_persists_edits_made_before_it() {
        let mut state = AppState::new(sample_jobs(), sample_admissions(), Theme::default());
        run(&mut state, &[Event::ShowPostForm, Event::NextField]);
        type_text(&mut state, "Early");
        run(&mut state, &[Event::Publish]);

        let actions = run(&mut state, &[Event::WorkerResponse(WorkerResponse::ListingsLoaded {
            jobs: vec![],
            admissions: sample_admissions(),
        })]);

        assert!(state.store_ready);
        assert_eq!(state.jobs.len(), 1);
        assert_eq!(state.jobs[0].title, "Early");
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::SaveJobs { jobs, .. })] if jobs.len() == 1
        ));
    }

    #[test]
    fn test_publish_admission_leaves_jobs_untouched() {
        let mut state = loaded_state();
        run(&mut state, &[
            Event::ShowPostForm,
            Event::CycleOption { forward: true },
            Event::NextField,
        ]);
        assert_eq!(state.draft.kind, PostKind::Admission);
        type_text(&mut state, "BS IT");
        run(&mut state, &[Event::NextField]);
        type_text(&mut state, "X University");

        let actions = run(&mut state, &[Event::Publish]);

        assert_eq!(state.view_mode, ViewMode::Admissions);
        assert_eq!(state.admissions.len(), 2);
        let Admission { program, university, campus, .. } = &state.admissions[0];
        assert_eq!(program, "BS IT");
        assert_eq!(university, "X University");
        assert!(campus.is_empty());
        assert_eq!(state.jobs, sample_jobs());
        assert_eq!(state.draft.kind, PostKind::Job);
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::SaveAdmissions { admissions, .. })] if admissions.len() == 2
        ));
    }

    #[test]
    fn test_publish_job_prepends_with_fresh_id() {
        let mut state = loaded_state();
        run(&mut state, &[Event::ShowPostForm, Event::NextField]);
        type_text(&mut state, "Lecturer");
        run(&mut state, &[Event::Publish]);
        run(&mut state, &[Event::ShowPostForm, Event::Publish]);

        assert_eq!(state.view_mode, ViewMode::Jobs);
        assert_eq!(state.jobs.len(), 4);
        let Job { id: newest, title, date_posted, .. } = &state.jobs[0];
        assert!(title.is_empty());
        assert_eq!(date_posted.len(), 10);
        assert_eq!(state.jobs[1].title, "Lecturer");
        assert!(*newest > state.jobs[1].id);
    }

    #[test]
    fn test_cancel_post_clears_draft_and_goes_home() {
        let mut state = loaded_state();
        run(&mut state, &[Event::ShowPostForm, Event::NextField]);
        type_text(&mut state, "Draft");
        let actions = run(&mut state, &[Event::CancelPost]);

        assert!(actions.is_empty());
        assert_eq!(state.view_mode, ViewMode::Home);
        assert!(state.draft.title.is_empty());
        assert_eq!(state.jobs, sample_jobs());
    }

    #[test]
    fn test_worker_error_is_not_rendered() {
        let mut state = loaded_state();
        let (render, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Error {
                message: "disk full".to_string(),
            }),
        )
        .unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }
}
