//! Layer-übergreifende Verträge: Optionen und Render-Szene.

pub mod options;
pub mod render_scene;

pub use options::EditorOptions;
pub use render_scene::RenderScene;
