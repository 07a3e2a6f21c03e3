use anyhow::Result;
use glam::Vec2;

use crate::app::state::AppState;
use crate::core::continuity;

/// Verschiebt den gegriffenen Punkt auf `pos` und propagiert die
/// Tangentenstetigkeit an betroffenen inneren Ankern.
pub fn drag_selected(state: &mut AppState, pos: Vec2) -> Result<()> {
    let Some(index) = state.selection.selected_index else {
        return Ok(());
    };
    let old_pos = state.spline.get(index)?;
    state.spline.set_position(index, pos)?;
    continuity::propagate(&mut state.spline, index, old_pos);
    Ok(())
}

/// Beendet den Drag und hebt die Selektion auf.
pub fn end_drag(state: &mut AppState) {
    if let Some(index) = state.selection.selected_index.take() {
        log::debug!("drag of point {index} ended");
    }
}
