use glam::Vec2;

/// Mutierende Commands auf dem AppState.
///
/// Positionen sind bereits normalisierte Koordinaten `[-1, 1]` (Y-up);
/// ungültige Pointer-Positionen hat das Intent-Mapping vorher verworfen.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Punkt innerhalb des Pick-Radius greifen, sonst neuen anhängen
    PickOrAppendPoint { pos: Vec2 },
    /// Nächsten Punkt innerhalb des Pick-Radius entfernen
    RemoveNearestPoint { pos: Vec2 },
    /// Gezogenen Punkt verschieben (inklusive Stetigkeits-Propagation)
    DragSelectedPoint { pos: Vec2 },
    /// Hover-Index gegen die aktuelle Zeigerposition neu berechnen
    UpdateHover { pos: Vec2 },
    /// Drag beenden und Selektion aufheben
    EndDrag,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
}
