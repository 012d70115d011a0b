//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the view model from `AppState`, then hand
//! it to the component layer, which writes ANSI output to stdout.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI for a `rows` x `cols` pane to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows = rows, cols = cols, view = ?state.view_mode).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_frame(&viewmodel, &state.theme, cols, rows);
}
