//! Das zentrale Spline-Datenmodell: geordnete Kontrollpunkte.

use super::geometry;
use glam::Vec2;
use thiserror::Error;

/// Fehler bei indexbasierten Spline-Operationen.
///
/// Die Interaktionsschicht übergibt nur validierte Indizes; taucht der
/// Fehler dennoch auf, ist das ein Programmierfehler-Signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplineError {
    /// Der angefragte Index liegt außerhalb der Sequenz.
    #[error("Index {index} außerhalb des Bereichs (Länge {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Geordnete Kontrollpunkt-Sequenz; Einfügereihenfolge = Kurvenreihenfolge.
///
/// Segment `k` besteht aus den Punkten `[3k, 3k+1, 3k+2, 3k+3]` und ist
/// gültig solange `3k + 3 < len`. Unter 4 Punkten existiert keine Kurve,
/// nur diskrete Punkte. Indizes sind positionsgebunden, keine stabilen
/// IDs — ein Remove lässt spätere Indizes aufrücken.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spline {
    points: Vec<Vec2>,
}

impl Spline {
    /// Erstellt eine leere Spline.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Erstellt eine Spline aus vorhandenen Punkten.
    pub fn from_points(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Hängt einen Punkt am Ende an (verlängert immer die Sequenz).
    ///
    /// Duplikate und Fast-Duplikate sind erlaubt — Mehrdeutigkeit löst
    /// die Picking-Logik auf, nicht das Modell.
    pub fn append(&mut self, point: Vec2) {
        self.points.push(point);
    }

    /// Entfernt den Punkt am Index; nachfolgende Indizes rücken auf.
    pub fn remove_at(&mut self, index: usize) -> Result<Vec2, SplineError> {
        self.check(index)?;
        Ok(self.points.remove(index))
    }

    /// Überschreibt die Position am Index.
    ///
    /// Einziger Mutationspfad des Drags; die Stetigkeits-Propagation
    /// entscheidet danach, welche Nachbarn mitgezogen werden.
    pub fn set_position(&mut self, index: usize, point: Vec2) -> Result<(), SplineError> {
        self.check(index)?;
        self.points[index] = point;
        Ok(())
    }

    /// Liest die Position am Index.
    pub fn get(&self, index: usize) -> Result<Vec2, SplineError> {
        self.check(index)?;
        Ok(self.points[index])
    }

    /// Anzahl der Kontrollpunkte.
    pub fn count(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Kontrollpunkte in Kurvenreihenfolge.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Mutable Sicht für die Stetigkeits-Engine (Indizes vorab validiert).
    pub(crate) fn points_mut(&mut self) -> &mut [Vec2] {
        &mut self.points
    }

    /// Anzahl gültiger Segmente.
    pub fn segment_count(&self) -> usize {
        geometry::segment_count(self.points.len())
    }

    /// Die vier Kontrollpunkte von Segment `k`, falls gültig.
    pub fn segment(&self, k: usize) -> Option<[Vec2; 4]> {
        let base = 3 * k;
        if base + 3 < self.points.len() {
            Some([
                self.points[base],
                self.points[base + 1],
                self.points[base + 2],
                self.points[base + 3],
            ])
        } else {
            None
        }
    }

    /// Iterator über alle gültigen Segmente in Kurvenreihenfolge.
    pub fn segments(&self) -> impl Iterator<Item = [Vec2; 4]> + '_ {
        (0..self.segment_count()).filter_map(move |k| self.segment(k))
    }

    fn check(&self, index: usize) -> Result<(), SplineError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(SplineError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }
}
