use thiserror::Error;

use crate::backend::{GraphicsBackend, Resolution};
use crate::frame::Frame;
use crate::rectangle::VERTICES_PER_RECTANGLE;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Ready,
}

///
/// Draws frames of rectangles through a [`GraphicsBackend`]
///
/// Every item of a frame costs exactly one buffer upload and one draw call of six vertices.
///
pub struct DrawDriver<B: GraphicsBackend> {
    backend: B,
    state: DriverState,
}

impl<B: GraphicsBackend> DrawDriver<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: DriverState::Uninitialized,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn configure(&mut self) -> Result<(), DriverError<B::Error>> {
        if self.state == DriverState::Ready {
            return Err(DriverError::AlreadyConfigured);
        }

        self.backend.configure().map_err(DriverError::Backend)?;
        self.state = DriverState::Ready;

        log::debug!("draw driver ready");

        Ok(())
    }

    pub fn render(
        &mut self,
        frame: &Frame,
        resolution: Resolution,
    ) -> Result<(), DriverError<B::Error>> {
        if self.state != DriverState::Ready {
            return Err(DriverError::NotConfigured);
        }

        self.backend
            .prepare_frame(resolution)
            .map_err(DriverError::Backend)?;

        if frame.is_empty() {
            log::warn!("frame has no rectangles");
        }

        for item in &frame.items {
            if item.rectangle.is_degenerate() {
                log::warn!("drawing zero area rectangle {:?}", item.rectangle);
            }

            self.backend
                .upload(&item.rectangle.to_positions(), frame.usage)
                .map_err(DriverError::Backend)?;

            if let Some(color) = item.color {
                self.backend.set_color(color).map_err(DriverError::Backend)?;
            }

            self.backend
                .draw_triangles(0, VERTICES_PER_RECTANGLE)
                .map_err(DriverError::Backend)?;
        }

        log::debug!(
            "drew {} rectangles at {}x{}",
            frame.len(),
            resolution.width,
            resolution.height
        );

        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum DriverError<E: std::error::Error + 'static> {
    #[error("draw driver used before configure")]
    NotConfigured,
    #[error("draw driver is already configured")]
    AlreadyConfigured,
    #[error("graphics backend failed: {0}")]
    Backend(#[source] E),
}
