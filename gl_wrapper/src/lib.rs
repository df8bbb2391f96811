pub mod geometry;
pub mod program;
pub mod renderer;
