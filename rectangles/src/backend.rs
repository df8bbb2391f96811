use crate::color::Color;

/// Size of the drawing surface in device pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Hint on how often the vertex buffer gets replaced.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BufferUsage {
    StaticDraw,
    DynamicDraw,
}

///
/// Operations the draw driver needs from a graphics API
///
/// All calls are synchronous from the caller's point of view. Implementors own exactly one
/// shader program, one vertex buffer and one vertex array.
///
pub trait GraphicsBackend {
    type Error: std::error::Error + 'static;

    /// Creates the vertex buffer and vertex array and describes the layout as tightly packed
    /// pairs of `f32`.
    fn configure(&mut self) -> Result<(), Self::Error>;

    /// Replaces the whole buffer with `positions` (x, y pairs).
    fn upload(&mut self, positions: &[f32], usage: BufferUsage) -> Result<(), Self::Error>;

    /// Resizes the surface, sets the viewport, clears to transparent black, activates the
    /// program, binds the resolution uniform and the vertex array.
    fn prepare_frame(&mut self, resolution: Resolution) -> Result<(), Self::Error>;

    fn set_color(&mut self, color: Color) -> Result<(), Self::Error>;

    /// Draws `count` vertices as a triangle list.
    fn draw_triangles(&mut self, first: usize, count: usize) -> Result<(), Self::Error>;
}
