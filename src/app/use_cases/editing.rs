use anyhow::Result;
use glam::Vec2;

use crate::app::state::AppState;
use crate::app::use_cases::picking;

/// Greift den nächsten Punkt innerhalb des Pick-Radius oder hängt
/// einen neuen Kontrollpunkt ans Ende des Splines.
pub fn pick_or_append(state: &mut AppState, pos: Vec2) {
    let radius_sq = state.options.pick_radius_sq;
    match picking::nearest_point_within(state.spline.points(), pos, radius_sq) {
        Some(index) => {
            state.selection.selected_index = Some(index);
            log::debug!("point {index} picked for dragging");
        }
        None => {
            state.spline.append(pos);
            log::info!(
                "control point appended at ({:.3}, {:.3}), count={}",
                pos.x,
                pos.y,
                state.spline.count()
            );
        }
    }
}

/// Entfernt den nächsten Punkt innerhalb des Pick-Radius.
/// Außerhalb des Radius passiert nichts.
pub fn remove_nearest(state: &mut AppState, pos: Vec2) -> Result<()> {
    let radius_sq = state.options.pick_radius_sq;
    let Some(index) = picking::nearest_point_within(state.spline.points(), pos, radius_sq) else {
        return Ok(());
    };
    state.spline.remove_at(index)?;
    state.selection.invalidate_after_removal(index);
    log::info!("control point {index} removed, count={}", state.spline.count());
    Ok(())
}
