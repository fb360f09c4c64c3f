//! Markdown rendering

pub mod curriculum_render;
pub mod outline_render;

pub use curriculum_render::render_curriculum;
pub use outline_render::render_outline;
