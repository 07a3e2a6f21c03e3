use crate::app::command_log::CommandLog;
use crate::app::state::{SelectionState, ViewState};
use crate::core::Spline;
use crate::shared::EditorOptions;

/// Gesamter Editor-Zustand: Spline, Selektion, Viewport und Optionen.
#[derive(Debug, Default)]
pub struct AppState {
    pub spline: Spline,
    pub selection: SelectionState,
    pub view: ViewState,
    pub options: EditorOptions,
    pub command_log: CommandLog,
}

impl AppState {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn point_count(&self) -> usize {
        self.spline.count()
    }

    /// True, solange ein Punkt gegriffen ist.
    pub fn is_dragging(&self) -> bool {
        self.selection.selected_index.is_some()
    }
}
