use anyhow::Result;

use crate::app::events::{AppCommand, AppIntent};
use crate::app::intent_mapping::map_intent_to_commands;
use crate::app::state::AppState;
use crate::app::use_cases::{dragging, editing, hover};

/// Einstiegspunkt des Application-Layers.
///
/// Intents aus dem Host-Fenster werden zuerst in Commands übersetzt
/// und diese dann der Reihe nach gegen den Zustand ausgeführt. Jedes
/// ausgeführte Command landet im [`CommandLog`](crate::app::CommandLog).
#[derive(Debug, Default)]
pub struct AppController;

impl AppController {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_intent(&self, state: &mut AppState, intent: AppIntent) -> Result<()> {
        for command in map_intent_to_commands(state, intent) {
            self.handle_command(state, command)?;
        }
        Ok(())
    }

    pub fn handle_command(&self, state: &mut AppState, command: AppCommand) -> Result<()> {
        state.command_log.record(command.clone());
        match command {
            AppCommand::PickOrAppendPoint { pos } => {
                editing::pick_or_append(state, pos);
                Ok(())
            }
            AppCommand::RemoveNearestPoint { pos } => editing::remove_nearest(state, pos),
            AppCommand::DragSelectedPoint { pos } => dragging::drag_selected(state, pos),
            AppCommand::UpdateHover { pos } => {
                hover::update_hover(state, pos);
                Ok(())
            }
            AppCommand::EndDrag => {
                dragging::end_drag(state);
                Ok(())
            }
            AppCommand::SetViewportSize { size } => {
                state.view.set_viewport_size(size);
                Ok(())
            }
        }
    }
}
