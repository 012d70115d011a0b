//! Drives the board through `handle_event` with a real worker behind it.

use rozgarhub::worker::{ListingsWorker, WorkerResponse};
use rozgarhub::{handle_event, initialize, Action, AppState, Config, Event, InputMode, ViewMode};
use std::collections::VecDeque;
use std::path::Path;

/// Plugin state plus the worker it talks to, wired the way the shim wires them.
struct Board {
    state: AppState,
    worker: ListingsWorker,
}

impl Board {
    fn open(data_dir: &Path) -> Self {
        let config = Config {
            data_dir: data_dir.to_path_buf(),
            ..Config::default()
        };
        let mut board = Self {
            state: initialize(&config),
            worker: ListingsWorker::default(),
        };
        board.send(&Event::LoadListings {
            data_dir: data_dir.to_string_lossy().to_string(),
        });
        board
    }

    /// Handles `event` and runs every worker round trip it triggers.
    /// Returns the responses the worker produced.
    fn send(&mut self, event: &Event) -> Vec<WorkerResponse> {
        let (_, actions) = handle_event(&mut self.state, event).unwrap();
        let mut queue: VecDeque<Action> = actions.into();
        let mut responses = Vec::new();
        while let Some(action) = queue.pop_front() {
            if let Action::PostToWorker(message) = action {
                let response = self.worker.handle_message(message);
                let (_, follow_up) =
                    handle_event(&mut self.state, &Event::WorkerResponse(response.clone())).unwrap();
                queue.extend(follow_up);
                responses.push(response);
            }
        }
        responses
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send(&Event::Char(c));
        }
    }
}

#[test]
fn published_job_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let mut board = Board::open(dir.path());
    assert!(board.state.store_ready);
    assert_eq!(board.state.jobs.len(), 2);

    board.send(&Event::ShowPostForm);
    assert_eq!(board.state.input_mode, InputMode::Editing);
    board.send(&Event::NextField);
    board.type_text("Lecturer Physics");
    board.send(&Event::NextField);
    board.type_text("Govt College");

    let responses = board.send(&Event::Publish);
    assert_eq!(
        responses,
        vec![WorkerResponse::Saved {
            key: "rz_jobs".to_string(),
            count: 3,
        }]
    );
    assert_eq!(board.state.view_mode, ViewMode::Jobs);
    assert_eq!(board.state.jobs[0].title, "Lecturer Physics");

    let reopened = Board::open(dir.path());
    let titles: Vec<&str> = reopened.state.jobs.iter().map(|j| j.title.as_str()).collect();
    assert_eq!(titles, ["Lecturer Physics", "Assistant (PPSC)", "Software Developer"]);
    assert_eq!(reopened.state.jobs[0].organization, "Govt College");
}

#[test]
fn published_admission_goes_to_admissions_slot() {
    let dir = tempfile::tempdir().unwrap();
    let mut board = Board::open(dir.path());

    board.send(&Event::ShowPostForm);
    board.send(&Event::CycleOption { forward: true });
    board.send(&Event::NextField);
    board.type_text("MBBS");

    let responses = board.send(&Event::Publish);
    assert_eq!(
        responses,
        vec![WorkerResponse::Saved {
            key: "rz_admissions".to_string(),
            count: 2,
        }]
    );
    assert_eq!(board.state.view_mode, ViewMode::Admissions);
    assert_eq!(board.state.jobs.len(), 2);

    let reopened = Board::open(dir.path());
    assert_eq!(reopened.state.admissions[0].program, "MBBS");
}

#[test]
fn confirmed_delete_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let mut board = Board::open(dir.path());

    board.send(&Event::ShowJobs);
    board.send(&Event::RequestDelete);
    assert!(matches!(board.state.input_mode, InputMode::ConfirmDelete { job_id: 1 }));

    board.send(&Event::CancelDelete);
    assert_eq!(board.state.jobs.len(), 2);

    board.send(&Event::RequestDelete);
    let responses = board.send(&Event::ConfirmDelete);
    assert_eq!(responses.len(), 1);
    assert_eq!(board.state.input_mode, InputMode::Normal);

    let reopened = Board::open(dir.path());
    assert_eq!(reopened.state.jobs.len(), 1);
    assert_eq!(reopened.state.jobs[0].title, "Software Developer");
}

#[test]
fn search_narrows_jobs_and_delete_targets_the_hit() {
    let dir = tempfile::tempdir().unwrap();
    let mut board = Board::open(dir.path());

    board.send(&Event::ShowJobs);
    board.send(&Event::SearchMode);
    board.type_text("remote");
    board.send(&Event::ExitSearch);
    assert_eq!(board.state.filtered_jobs.len(), 1);

    board.send(&Event::RequestDelete);
    board.send(&Event::ConfirmDelete);
    assert_eq!(board.state.jobs.len(), 1);
    assert_eq!(board.state.jobs[0].title, "Assistant (PPSC)");
    assert!(board.state.filtered_jobs.is_empty());

    board.send(&Event::ClearFilters);
    assert_eq!(board.state.filtered_jobs.len(), 1);
}

#[test]
fn job_posted_before_load_is_saved_once_listings_arrive() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        data_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    let mut board = Board {
        state: initialize(&config),
        worker: ListingsWorker::default(),
    };

    board.send(&Event::ShowPostForm);
    board.send(&Event::NextField);
    board.type_text("Early bird");
    let responses = board.send(&Event::Publish);

    assert!(responses.is_empty());
    assert_eq!(board.state.jobs.len(), 3);
    assert_eq!(board.state.view_mode, ViewMode::Jobs);
    assert!(!dir.path().join("rz_jobs.json").exists());

    let responses = board.send(&Event::LoadListings {
        data_dir: dir.path().to_string_lossy().to_string(),
    });
    assert_eq!(
        responses.last(),
        Some(&WorkerResponse::Saved {
            key: "rz_jobs".to_string(),
            count: 3,
        })
    );

    let reopened = Board::open(dir.path());
    assert_eq!(reopened.state.jobs.len(), 3);
    assert_eq!(reopened.state.jobs[0].title, "Early bird");
}

#[test]
fn board_works_in_memory_without_storage() {
    let config = Config::default();
    let mut state = initialize(&config);

    handle_event(&mut state, &Event::ShowJobs).unwrap();
    handle_event(&mut state, &Event::RequestDelete).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::ConfirmDelete).unwrap();

    assert!(actions.is_empty());
    assert_eq!(state.jobs.len(), 1);
    assert_eq!(state.jobs[0].title, "Software Developer");
}
