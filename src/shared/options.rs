//! Zentrale Konfiguration des Spline-Editors.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Picking ─────────────────────────────────────────────────────────

/// Quadrierter Pick-Radius in normalisierten Koordinaten (Radius 0.1),
/// gilt für Selektion und Entfernen.
pub const PICK_RADIUS_SQ: f32 = 0.01;
/// Hover-Radius in Screen-Pixeln; wird über die Fensterbreite in
/// normalisierte Einheiten umgerechnet.
pub const HOVER_RADIUS_PX: f32 = 10.0;

// ── Tessellation ────────────────────────────────────────────────────

/// Unterteilungen pro Bézier-Segment (101 Stützpunkte inkl. Endpunkt).
pub const CURVE_SAMPLES_PER_SEGMENT: usize = 100;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_spline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Quadrierter Pick-Radius in normalisierten Koordinaten
    pub pick_radius_sq: f32,
    /// Hover-Radius in Screen-Pixeln
    pub hover_radius_px: f32,
    /// Unterteilungen pro Segment bei der Tessellation
    pub curve_samples_per_segment: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            pick_radius_sq: PICK_RADIUS_SQ,
            hover_radius_px: HOVER_RADIUS_PX,
            curve_samples_per_segment: CURVE_SAMPLES_PER_SEGMENT,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_spline_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_spline_editor.toml")
    }
}
