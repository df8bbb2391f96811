use gl::types::GLint;

use crate::geometry::{DynamicGeometry, GeometryError};
use crate::program::Program;

pub struct GlRenderer {
    current_program: u32,
}

impl GlRenderer {
    pub fn new() -> Self {
        Self { current_program: 0 }
    }

    pub fn use_program(&mut self, program: &Program) {
        let p_id = program.get_id();
        if self.current_program != p_id {
            unsafe { gl::UseProgram(p_id) }
            self.current_program = p_id;
        }
    }

    pub fn bind(&self, geometry: &DynamicGeometry) {
        unsafe { gl::BindVertexArray(geometry.vao()) }
    }

    /// Draws a triangle list from the bound vertex array.
    pub fn draw_range(
        &self,
        geometry: &DynamicGeometry,
        first: usize,
        count: usize,
    ) -> Result<(), GeometryError> {
        if first + count > geometry.vertices() {
            return Err(GeometryError::OutOfRange(
                first,
                first + count,
                geometry.vertices(),
            ));
        }

        unsafe {
            gl::DrawArrays(gl::TRIANGLES, first as i32, count as i32);
        }

        Ok(())
    }

    pub fn set_vec2(&self, location: GLint, x: f32, y: f32) {
        unsafe { gl::Uniform2f(location, x, y) }
    }

    pub fn set_vec4(&self, location: GLint, v: [f32; 4]) {
        unsafe { gl::Uniform4f(location, v[0], v[1], v[2], v[3]) }
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    /// Clears color and depth.
    pub fn clear(&self, [r, g, b, a]: [f32; 4]) {
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }
    }
}

impl Default for GlRenderer {
    fn default() -> Self {
        Self::new()
    }
}
