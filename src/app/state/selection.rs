/// Zustand der Zeiger-Interaktion, abgeleitet aus der Selektion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerState {
    /// Kein Punkt unter dem Zeiger, kein Drag aktiv
    Idle,
    /// Punkt unter dem Zeiger, aber nicht gegriffen
    Hovering(usize),
    /// Punkt ist gegriffen und folgt dem Zeiger
    Dragging(usize),
}

/// Selektion und Hover über den Kontrollpunkten.
///
/// `selected_index` ist nur während eines aktiven Drags gesetzt;
/// `hovered_index` wird bei jeder Zeigerbewegung neu berechnet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_index: Option<usize>,
    pub hovered_index: Option<usize>,
}

impl SelectionState {
    /// Leitet den Interaktionszustand ab; Drag hat Vorrang vor Hover.
    pub fn pointer_state(&self) -> PointerState {
        match (self.selected_index, self.hovered_index) {
            (Some(i), _) => PointerState::Dragging(i),
            (None, Some(i)) => PointerState::Hovering(i),
            (None, None) => PointerState::Idle,
        }
    }

    /// Passt die Indizes nach dem Entfernen von `removed` an:
    /// gleicher Index wird gelöscht, größere rücken um eins nach vorne.
    pub fn invalidate_after_removal(&mut self, removed: usize) {
        self.selected_index = Self::shift_down(self.selected_index, removed);
        self.hovered_index = Self::shift_down(self.hovered_index, removed);
    }

    fn shift_down(slot: Option<usize>, removed: usize) -> Option<usize> {
        match slot {
            Some(i) if i == removed => None,
            Some(i) if i > removed => Some(i - 1),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dragging_takes_priority_over_hover() {
        let sel = SelectionState {
            selected_index: Some(2),
            hovered_index: Some(5),
        };
        assert_eq!(sel.pointer_state(), PointerState::Dragging(2));
    }

    #[test]
    fn hover_without_selection_is_hovering() {
        let sel = SelectionState {
            selected_index: None,
            hovered_index: Some(1),
        };
        assert_eq!(sel.pointer_state(), PointerState::Hovering(1));
    }

    #[test]
    fn empty_selection_is_idle() {
        assert_eq!(SelectionState::default().pointer_state(), PointerState::Idle);
    }

    #[test]
    fn removal_clears_matching_index() {
        let mut sel = SelectionState {
            selected_index: Some(3),
            hovered_index: Some(3),
        };
        sel.invalidate_after_removal(3);
        assert_eq!(sel.selected_index, None);
        assert_eq!(sel.hovered_index, None);
    }

    #[test]
    fn removal_shifts_higher_indices_down() {
        let mut sel = SelectionState {
            selected_index: Some(5),
            hovered_index: Some(1),
        };
        sel.invalidate_after_removal(3);
        assert_eq!(sel.selected_index, Some(4));
        assert_eq!(sel.hovered_index, Some(1));
    }
}
