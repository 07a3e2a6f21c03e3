use crate::core::Viewport;

/// Darstellungsbezogener Zustand, aktuell nur der Viewport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub viewport: Viewport,
}

impl ViewState {
    pub fn set_viewport_size(&mut self, size: [f32; 2]) {
        self.viewport.set_size(size[0], size[1]);
    }
}
