pub mod color;
pub mod entity;
pub mod renderer;
