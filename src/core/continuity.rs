//! Tangenten-Stetigkeit an inneren Ankern.
//!
//! An jedem inneren Anker `a` sollen die beiden Nachbar-Handles
//! gespiegelt liegen: `p[a+1] = p[a] + (p[a] - p[a-1])`. Dieses Modul
//! stellt die Spiegelung nach jedem Drag wieder her; welche Nachbarn
//! mitgezogen werden, entscheidet die Rolle des gezogenen Punkts.

use super::role::{is_interior_anchor, PointRole};
use super::spline::Spline;
use glam::Vec2;

/// Spiegelt `handle` am Anker: `anchor + (anchor - handle)`.
fn mirror_across(anchor: Vec2, handle: Vec2) -> Vec2 {
    2.0 * anchor - handle
}

/// Propagiert Tangenten-Stetigkeit nach dem Verschieben von `index`.
///
/// `old_pos` ist die Position vor dem Verschieben; Anker führen ihre
/// Handles um genau dieses Delta mit. Alle Updates sind sofort und
/// lesen bereits aktualisierte Positionen. Ziel-Indizes außerhalb von
/// `[0, len)` werden stillschweigend übersprungen; der erste und der
/// letzte Punkt der Sequenz propagieren nie (keine Gegenseite).
pub fn propagate(spline: &mut Spline, index: usize, old_pos: Vec2) {
    let len = spline.count();
    if index >= len || index == 0 || index + 1 == len {
        return;
    }

    let points = spline.points_mut();
    match PointRole::of(index) {
        PointRole::Anchor => {
            if !is_interior_anchor(index, len) {
                return;
            }
            // Beide Handles mitführen: die Spiegelung am Anker bleibt erhalten.
            let delta = points[index] - old_pos;
            points[index - 1] += delta;
            points[index + 1] += delta;
        }
        PointRole::HandleOut => {
            // Anker liegt direkt davor, Gegenstück zwei Indizes davor.
            let anchor = index - 1;
            if !is_interior_anchor(anchor, len) {
                return;
            }
            points[index - 2] = mirror_across(points[anchor], points[index]);
        }
        PointRole::HandleIn => {
            // Anker liegt direkt danach, Gegenstück zwei Indizes danach.
            let anchor = index + 1;
            if !is_interior_anchor(anchor, len) {
                return;
            }
            points[index + 2] = mirror_across(points[anchor], points[index]);
        }
    }
}
