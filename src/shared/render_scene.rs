//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und die (externe)
//! Präsentationsschicht sie konsumiert — der Kern kennt keine
//! Grafik-API-Typen.

use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Alle Kontrollpunkte in Kurvenreihenfolge
    pub control_points: Vec<Vec2>,
    /// Tessellierte Kurve (leer unter 4 Kontrollpunkten)
    pub curve: Vec<Vec2>,
    /// Aktuell gezogener Punkt
    pub selected_index: Option<usize>,
    /// Punkt unter dem Zeiger
    pub hovered_index: Option<usize>,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve zum Zeichnen vorhanden ist.
    pub fn has_curve(&self) -> bool {
        !self.curve.is_empty()
    }

    /// Hervorzuhebender Punkt: Selektion hat Vorrang vor Hover.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.selected_index.or(self.hovered_index)
    }
}
