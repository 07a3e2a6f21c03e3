use glam::Vec2;

/// Pointer-Taste des Host-Fensters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Taste: Punkt greifen oder anhängen
    Primary,
    /// Rechte Taste: Punkt entfernen
    Secondary,
}

/// Eingaben aus dem Host-Fenster ohne direkte Mutationslogik.
///
/// Positionen sind Fenster-Pixel (Y nach unten); die Umrechnung in
/// normalisierte Koordinaten passiert im Intent-Mapping.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Pointer-Taste gedrückt
    PointerPressed {
        position: Vec2,
        button: PointerButton,
    },
    /// Pointer bewegt
    PointerMoved { position: Vec2 },
    /// Pointer-Taste losgelassen
    PointerReleased,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
}
