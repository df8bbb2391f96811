use std::convert::Infallible;

use crate::backend::{BufferUsage, GraphicsBackend, Resolution};
use crate::color::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Configure,
    Upload {
        positions: Vec<f32>,
        usage: BufferUsage,
    },
    PrepareFrame(Resolution),
    SetColor(Color),
    DrawTriangles {
        first: usize,
        count: usize,
    },
}

///
/// Backend that stores commands instead of issuing them
///
/// Keeps a copy of the buffer contents so tests can look at what a real buffer would hold.
///
#[derive(Debug, Default)]
pub struct RecordingBackend {
    commands: Vec<Command>,
    buffer: Vec<f32>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    pub fn upload_count(&self) -> usize {
        self.count(|c| matches!(c, Command::Upload { .. }))
    }

    pub fn draw_count(&self) -> usize {
        self.count(|c| matches!(c, Command::DrawTriangles { .. }))
    }

    pub fn colors(&self) -> Vec<Color> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::SetColor(color) => Some(*color),
                _ => None,
            })
            .collect()
    }

    fn count(&self, f: impl Fn(&Command) -> bool) -> usize {
        self.commands.iter().filter(|c| f(c)).count()
    }
}

impl GraphicsBackend for RecordingBackend {
    type Error = Infallible;

    fn configure(&mut self) -> Result<(), Self::Error> {
        self.commands.push(Command::Configure);
        Ok(())
    }

    fn upload(&mut self, positions: &[f32], usage: BufferUsage) -> Result<(), Self::Error> {
        self.buffer.clear();
        self.buffer.extend_from_slice(positions);

        self.commands.push(Command::Upload {
            positions: positions.to_vec(),
            usage,
        });
        Ok(())
    }

    fn prepare_frame(&mut self, resolution: Resolution) -> Result<(), Self::Error> {
        self.commands.push(Command::PrepareFrame(resolution));
        Ok(())
    }

    fn set_color(&mut self, color: Color) -> Result<(), Self::Error> {
        self.commands.push(Command::SetColor(color));
        Ok(())
    }

    fn draw_triangles(&mut self, first: usize, count: usize) -> Result<(), Self::Error> {
        self.commands.push(Command::DrawTriangles { first, count });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rectangle::generate_rectangle;

    #[test]
    fn upload_replaces_buffer() {
        let mut backend = RecordingBackend::new();

        backend
            .upload(&generate_rectangle(0.0, 0.0, 5.0, 5.0), BufferUsage::DynamicDraw)
            .unwrap();
        backend
            .upload(&[1.0, 2.0], BufferUsage::DynamicDraw)
            .unwrap();

        assert_eq!(backend.buffer(), &[1.0_f32, 2.0]);
        assert_eq!(backend.upload_count(), 2);
    }

    #[test]
    fn repeated_upload_is_idempotent() {
        let data = generate_rectangle(3.0, 4.0, 5.0, 6.0);

        let mut once = RecordingBackend::new();
        once.upload(&data, BufferUsage::StaticDraw).unwrap();

        let mut twice = RecordingBackend::new();
        twice.upload(&data, BufferUsage::StaticDraw).unwrap();
        twice.upload(&data, BufferUsage::StaticDraw).unwrap();

        assert_eq!(once.buffer(), twice.buffer());
    }
}
