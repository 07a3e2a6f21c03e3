//! Punkt-Rollen innerhalb der Segment-Struktur.

/// Rolle eines Kontrollpunkts, abgeleitet aus `index % 3`.
///
/// Die Stetigkeits-Engine verzweigt ausschließlich über diese Rolle,
/// nicht über Modulo-Arithmetik an der Verwendungsstelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRole {
    /// Stützpunkt; an inneren Positionen von zwei Segmenten geteilt (Index ≡ 0 mod 3)
    Anchor,
    /// Tangenten-Handle direkt nach seinem Anker (Index ≡ 1 mod 3)
    HandleOut,
    /// Tangenten-Handle direkt vor dem nächsten Anker (Index ≡ 2 mod 3)
    HandleIn,
}

impl PointRole {
    /// Bestimmt die Rolle des Punkts am gegebenen Index.
    pub fn of(index: usize) -> Self {
        match index % 3 {
            0 => PointRole::Anchor,
            1 => PointRole::HandleOut,
            _ => PointRole::HandleIn,
        }
    }
}

/// Gibt zurück, ob `index` ein innerer Anker ist: von zwei aufeinander
/// folgenden Segmenten geteilt, also weder der erste Punkt noch das
/// offene Ende der Sequenz.
pub fn is_interior_anchor(index: usize, len: usize) -> bool {
    index > 0 && index % 3 == 0 && index + 1 < len
}
