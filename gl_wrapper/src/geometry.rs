use std::ffi::c_void;

use gl::types::{GLenum, GLuint};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Usage {
    Static,
    Dynamic,
}

impl Usage {
    fn gl_enum(&self) -> GLenum {
        match self {
            Usage::Static => gl::STATIC_DRAW,
            Usage::Dynamic => gl::DYNAMIC_DRAW,
        }
    }
}

pub enum VertexAttribute {
    Vec2,
}

impl VertexAttribute {
    pub fn size(&self) -> usize {
        match self {
            VertexAttribute::Vec2 => 2,
        }
    }
}

///
/// One vertex buffer with one tightly packed float attribute, contents replaced wholesale
///
pub struct DynamicGeometry {
    vao: GLuint,
    vbo: GLuint,
    attribute: VertexAttribute,
    vertices: usize,
}

impl DynamicGeometry {
    /// Creates and binds the buffer and vertex array, then describes the attribute at
    /// `location` with zero stride and zero offset.
    pub fn configure(location: GLuint, attribute: VertexAttribute) -> Self {
        let mut vao = 0;
        let mut vbo = 0;

        unsafe {
            gl::GenBuffers(1, &mut vbo);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);
            gl::EnableVertexAttribArray(location);

            gl::VertexAttribPointer(
                location,
                attribute.size() as i32,
                gl::FLOAT,
                gl::FALSE,
                0,
                std::ptr::null(),
            );
        }

        log::debug!("created vertex array {vao} over buffer {vbo}");

        Self {
            vao,
            vbo,
            attribute,
            vertices: 0,
        }
    }

    pub fn upload(&mut self, data: &[f32], usage: Usage) -> Result<(), GeometryError> {
        if data.len() % self.attribute.size() != 0 {
            return Err(GeometryError::InvalidDataLength);
        }

        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                std::mem::size_of_val(data) as isize,
                data.as_ptr() as *const c_void,
                usage.gl_enum(),
            );
        }

        self.vertices = data.len() / self.attribute.size();

        Ok(())
    }

    pub fn vao(&self) -> GLuint {
        self.vao
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }
}

impl Drop for DynamicGeometry {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("Invalid data length for given attribute")]
    InvalidDataLength,
    #[error("Draw range {0}..{1} exceeds {2} uploaded vertices")]
    OutOfRange(usize, usize, usize),
}
