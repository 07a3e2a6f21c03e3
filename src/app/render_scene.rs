//! Baut die [`RenderScene`] aus dem aktuellen Zustand.

use crate::app::state::AppState;
use crate::core::tessellate_spline;
use crate::shared::RenderScene;

/// Erzeugt den Frame-Snapshot für die Darstellung.
///
/// Die Kurve wird pro Segment mit der konfigurierten Sample-Anzahl
/// tesselliert; ohne vollständiges Segment bleibt sie leer.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        control_points: state.spline.points().to_vec(),
        curve: tessellate_spline(
            state.spline.points(),
            state.options.curve_samples_per_segment,
        ),
        selected_index: state.selection.selected_index,
        hovered_index: state.selection.hovered_index,
        viewport_size: state.view.viewport.size().to_array(),
    }
}
