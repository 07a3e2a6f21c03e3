mod app_state;
mod selection;
mod view;

pub use app_state::AppState;
pub use selection::{PointerState, SelectionState};
pub use view::ViewState;
