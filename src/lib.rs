//! Bézier-Spline-Editor-Kern.
//! Modell, Picking und Stetigkeits-Engine als Library exportiert;
//! die Präsentationsschicht konsumiert die `RenderScene` read-only.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommandLog, PointerButton, PointerState,
    SelectionState, ViewState,
};
pub use self::core::{
    cubic_bezier, is_interior_anchor, segment_count, tessellate_spline, PointRole, Spline,
    SplineError, Viewport,
};
pub use shared::{EditorOptions, RenderScene};
