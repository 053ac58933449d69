//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`](crate::ui::UIViewModel)
//! from [`AppState`], then hand it to the components. The renderer never
//! reads the store directly.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout for a pane of `rows` x `cols`.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_screen(&viewmodel, &state.theme, cols, rows);
}
