pub mod dragging;
pub mod editing;
pub mod hover;
pub mod picking;
