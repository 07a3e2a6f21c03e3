use glam::Vec2;

/// Liefert den Index des nächsten Punkts innerhalb von `max_dist_sq`.
///
/// Linearer Scan über alle Punkte; bei gleichem Abstand gewinnt der
/// kleinere Index. Der Vergleich ist strikt, Punkte exakt auf dem
/// Radius zählen nicht als Treffer.
pub fn nearest_point_within(points: &[Vec2], pos: Vec2, max_dist_sq: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in points.iter().enumerate() {
        let d = p.distance_squared(pos);
        if d < max_dist_sq {
            match best {
                Some((_, best_d)) if best_d <= d => {}
                _ => best = Some((i, d)),
            }
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_nearest_within_radius() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.5, 0.0),
            Vec2::new(0.09, 0.0),
        ];
        let hit = nearest_point_within(&points, Vec2::new(0.1, 0.0), 0.01);
        assert_eq!(hit, Some(2));
    }

    #[test]
    fn misses_outside_radius() {
        let points = [Vec2::new(1.0, 1.0)];
        assert_eq!(nearest_point_within(&points, Vec2::ZERO, 0.01), None);
    }

    #[test]
    fn threshold_is_exclusive() {
        // Abstand exakt 0.1, Quadrat exakt 0.01
        let points = [Vec2::new(0.1, 0.0)];
        assert_eq!(nearest_point_within(&points, Vec2::ZERO, 0.01), None);
    }

    #[test]
    fn equal_distance_picks_lower_index() {
        let points = [Vec2::new(-0.05, 0.0), Vec2::new(0.05, 0.0)];
        assert_eq!(nearest_point_within(&points, Vec2::ZERO, 0.01), Some(0));
    }

    #[test]
    fn empty_slice_yields_none() {
        assert_eq!(nearest_point_within(&[], Vec2::ZERO, 0.01), None);
    }
}
