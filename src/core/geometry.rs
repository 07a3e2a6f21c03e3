//! Reine Geometrie-Funktionen für kubische Bézier-Kurven.
//!
//! Layer-neutral und frei von Seiteneffekten: das Ergebnis hängt nur von
//! den übergebenen Kontrollpunkten ab und ist beliebig oft abrufbar.

use glam::Vec2;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
///
/// Liefert bei `t = 0` exakt `p0` und bei `t = 1` exakt `p3`.
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Anzahl gültiger Segmente für eine Punktanzahl.
///
/// Segment `k` besteht aus den Indizes `[3k, 3k+1, 3k+2, 3k+3]` und ist
/// nur gültig solange `3k + 3 < len` — unter 4 Punkten existiert keins.
pub fn segment_count(point_count: usize) -> usize {
    if point_count < 4 {
        0
    } else {
        (point_count - 1) / 3
    }
}

/// Tesselliert die zusammengesetzte Kurve in eine Punktliste.
///
/// Pro gültigem Segment entstehen `samples_per_segment + 1` Stützpunkte
/// bei `t = i / samples` (der letzte exakt bei `t = 1`), alle Segmente in
/// Kurvenreihenfolge aneinandergehängt. Unter 4 Punkten: leere Liste.
pub fn tessellate_spline(points: &[Vec2], samples_per_segment: usize) -> Vec<Vec2> {
    let samples = samples_per_segment.max(1);
    let segments = segment_count(points.len());
    let mut result = Vec::with_capacity(segments * (samples + 1));

    for k in 0..segments {
        let base = 3 * k;
        for i in 0..=samples {
            let t = i as f32 / samples as f32;
            result.push(cubic_bezier(
                points[base],
                points[base + 1],
                points[base + 2],
                points[base + 3],
                t,
            ));
        }
    }

    result
}
