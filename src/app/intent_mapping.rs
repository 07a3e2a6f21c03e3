//! Übersetzt Host-Intents in Commands.
//!
//! Das Mapping ist eine reine Funktion über dem aktuellen Zustand:
//! Pixel werden in normalisierte Koordinaten umgerechnet, Positionen
//! außerhalb des Viewports verworfen und Drag-Folge-Commands nur bei
//! aktiver Selektion erzeugt.

use crate::app::events::{AppCommand, AppIntent, PointerButton};
use crate::app::state::AppState;

pub(crate) fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { position, button } => {
            let viewport = &state.view.viewport;
            if !viewport.contains(position) {
                return Vec::new();
            }
            let pos = viewport.to_normalized(position);
            match button {
                PointerButton::Primary => vec![AppCommand::PickOrAppendPoint { pos }],
                PointerButton::Secondary => vec![AppCommand::RemoveNearestPoint { pos }],
            }
        }
        AppIntent::PointerMoved { position } => {
            let viewport = &state.view.viewport;
            if !viewport.contains(position) {
                return Vec::new();
            }
            let pos = viewport.to_normalized(position);
            let mut commands = Vec::new();
            if state.is_dragging() {
                commands.push(AppCommand::DragSelectedPoint { pos });
            }
            commands.push(AppCommand::UpdateHover { pos });
            commands
        }
        AppIntent::PointerReleased => vec![AppCommand::EndDrag],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
    }
}
