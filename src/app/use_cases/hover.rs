use glam::Vec2;

use crate::app::state::AppState;
use crate::app::use_cases::picking;

/// Berechnet den Hover-Index gegen die aktuelle Zeigerposition neu.
///
/// Der Hover-Radius ist in Pixeln konfiguriert und wird über den
/// Viewport in normalisierte Koordinaten umgerechnet.
pub fn update_hover(state: &mut AppState, pos: Vec2) {
    let radius = state
        .view
        .viewport
        .pixels_to_normalized(state.options.hover_radius_px);
    state.selection.hovered_index =
        picking::nearest_point_within(state.spline.points(), pos, radius * radius);
}
