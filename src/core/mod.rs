//! Core-Domänentypen: Spline, Punkt-Rollen, Geometrie, Stetigkeit, Viewport.

pub mod continuity;
pub mod geometry;
pub mod role;
pub mod spline;
pub mod viewport;

pub use geometry::{cubic_bezier, segment_count, tessellate_spline};
pub use role::{is_interior_anchor, PointRole};
pub use spline::{Spline, SplineError};
pub use viewport::Viewport;
