//! Renderers that display generations pulled from a `GridEngine`.

pub mod text;
pub mod window;

pub use text::TextRenderer;
