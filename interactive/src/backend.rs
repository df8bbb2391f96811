use gl::types::{GLint, GLuint};

use thiserror::Error;

use gl_wrapper::geometry::{DynamicGeometry, GeometryError, Usage, VertexAttribute};
use gl_wrapper::program::{PBError, Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;

use rectangles::shader::{
    COLOR_UNIFORM, FRAGMENT_SHADER_SRC, POSITION_ATTRIBUTE, RESOLUTION_UNIFORM,
    VERTEX_SHADER_SRC,
};
use rectangles::{BufferUsage, Color, GraphicsBackend, Resolution};

///
/// [`GraphicsBackend`] over the current OpenGL context
///
pub struct GlBackend {
    program: Program,
    renderer: GlRenderer,
    geometry: Option<DynamicGeometry>,
    position_location: GLuint,
    resolution_location: GLint,
    color_location: GLint,
}

impl GlBackend {
    /// Needs a current context with loaded function pointers.
    pub fn new() -> Result<Self, BackendError> {
        let program = ProgramBuilder::new(VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC).build()?;

        let position_location = program.attrib_location(POSITION_ATTRIBUTE)?;
        let resolution_location = program.uniform_location(RESOLUTION_UNIFORM)?;
        let color_location = program.uniform_location(COLOR_UNIFORM)?;

        Ok(Self {
            program,
            renderer: GlRenderer::new(),
            geometry: None,
            position_location,
            resolution_location,
            color_location,
        })
    }

    fn geometry(&mut self) -> Result<&mut DynamicGeometry, BackendError> {
        self.geometry.as_mut().ok_or(BackendError::NotConfigured)
    }
}

impl GraphicsBackend for GlBackend {
    type Error = BackendError;

    fn configure(&mut self) -> Result<(), Self::Error> {
        let geometry = DynamicGeometry::configure(self.position_location, VertexAttribute::Vec2);
        self.geometry = Some(geometry);

        Ok(())
    }

    fn upload(&mut self, positions: &[f32], usage: BufferUsage) -> Result<(), Self::Error> {
        let usage = match usage {
            BufferUsage::StaticDraw => Usage::Static,
            BufferUsage::DynamicDraw => Usage::Dynamic,
        };

        self.geometry()?.upload(positions, usage)?;

        Ok(())
    }

    fn prepare_frame(&mut self, resolution: Resolution) -> Result<(), Self::Error> {
        let Resolution { width, height } = resolution;

        self.renderer.resize(width, height);
        self.renderer.clear(Color::TRANSPARENT.as_array());

        self.renderer.use_program(&self.program);
        self.renderer
            .set_vec2(self.resolution_location, width as f32, height as f32);

        let geometry = self.geometry.as_ref().ok_or(BackendError::NotConfigured)?;
        self.renderer.bind(geometry);

        Ok(())
    }

    fn set_color(&mut self, color: Color) -> Result<(), Self::Error> {
        self.renderer.set_vec4(self.color_location, color.as_array());

        Ok(())
    }

    fn draw_triangles(&mut self, first: usize, count: usize) -> Result<(), Self::Error> {
        let geometry = self.geometry.as_ref().ok_or(BackendError::NotConfigured)?;
        self.renderer.draw_range(geometry, first, count)?;

        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("shader program: {0}")]
    Program(#[from] PBError),
    #[error("geometry: {0}")]
    Geometry(#[from] GeometryError),
    #[error("vertex buffer not configured")]
    NotConfigured,
}
