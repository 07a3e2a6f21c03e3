//! Umrechnung zwischen Fenster-Pixeln und normalisierten Koordinaten.

use glam::Vec2;

/// Viewport des Host-Fensters in Pixeln.
///
/// Die Engine arbeitet in normalisierten Gerätekoordinaten `[-1, 1]` mit
/// Y nach oben; Pointer-Eingaben kommen in Pixeln mit Y nach unten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Fenstergröße in Pixeln (mindestens 1×1)
    size: Vec2,
}

impl Viewport {
    /// Erstellt einen Viewport; Größen unter 1 Pixel werden angehoben.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height).max(Vec2::ONE),
        }
    }

    /// Aktuelle Fenstergröße in Pixeln.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Übernimmt eine neue Fenstergröße.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height).max(Vec2::ONE);
    }

    /// Liegt die Pixel-Position innerhalb des Fensters?
    pub fn contains(&self, pixel_pos: Vec2) -> bool {
        pixel_pos.x >= 0.0
            && pixel_pos.y >= 0.0
            && pixel_pos.x < self.size.x
            && pixel_pos.y < self.size.y
    }

    /// Pixel → normalisiert `[-1, 1]`, Y geflippt.
    pub fn to_normalized(&self, pixel_pos: Vec2) -> Vec2 {
        Vec2::new(
            pixel_pos.x / self.size.x * 2.0 - 1.0,
            -(pixel_pos.y / self.size.y * 2.0 - 1.0),
        )
    }

    /// Pixel-Länge → normalisierte Länge, umgerechnet über die Fensterbreite.
    pub fn pixels_to_normalized(&self, pixels: f32) -> f32 {
        pixels / self.size.x * 2.0
    }
}

impl Default for Viewport {
    /// Startgröße des Host-Fensters.
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}
