use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::BufferUsage;
use crate::color::Color;
use crate::frame::{DrawItem, Frame};
use crate::rectangle::Rectangle;

///
/// Reads frame descriptions from JSON5 files
///
/// ```json5
/// {
///     usage: "dynamic",
///     rectangles: [
///         { x: 10, y: 20, width: 70, height: 10, color: [1, 0, 0] },
///     ],
/// }
/// ```
///
pub struct FrameLoader {}

impl FrameLoader {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Frame, LoaderError> {
        let frame_str = std::fs::read_to_string(path)?;

        Self::load_from_str(&frame_str)
    }

    pub fn load_from_str(frame_str: &str) -> Result<Frame, LoaderError> {
        let file: FrameFile = json5::from_str(frame_str)?;

        let mut items = Vec::with_capacity(file.rectangles.len());

        for (i, stub) in file.rectangles.into_iter().enumerate() {
            let color = match stub.color {
                Some(c) => Some(color_from_slice(&c).ok_or(LoaderError::InvalidColor(i))?),
                None => None,
            };

            let rectangle = Rectangle::new(stub.x, stub.y, stub.width, stub.height);

            if !rectangle.origin.x.is_finite()
                || !rectangle.origin.y.is_finite()
                || !rectangle.width.is_finite()
                || !rectangle.height.is_finite()
            {
                return Err(LoaderError::NonFinite(i));
            }

            items.push(DrawItem { rectangle, color });
        }

        let usage = match file.usage {
            Some(UsageStub::Static) => BufferUsage::StaticDraw,
            Some(UsageStub::Dynamic) => BufferUsage::DynamicDraw,
            None if items.len() > 1 => BufferUsage::DynamicDraw,
            None => BufferUsage::StaticDraw,
        };

        log::debug!("loaded frame with {} rectangles", items.len());

        Ok(Frame::new(items, usage))
    }
}

fn color_from_slice(channels: &[f32]) -> Option<Color> {
    if let Ok(rgb) = <[f32; 3]>::try_from(channels) {
        return Some(rgb.into());
    }

    <[f32; 4]>::try_from(channels).ok().map(Color::from)
}

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("{0}")]
    InputError(#[from] std::io::Error),
    #[error("{0}")]
    FormatError(#[from] json5::Error),
    #[error("rectangle {0} needs 3 or 4 color channels")]
    InvalidColor(usize),
    #[error("rectangle {0} has a non finite coordinate")]
    NonFinite(usize),
}

#[derive(Debug, Serialize, Deserialize)]
struct FrameFile {
    usage: Option<UsageStub>,
    rectangles: Vec<RectangleStub>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum UsageStub {
    Static,
    Dynamic,
}

#[derive(Debug, Serialize, Deserialize)]
struct RectangleStub {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: Option<Vec<f32>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_rectangles() {
        let frame = FrameLoader::load_from_str(
            r#"{
                // two rectangles
                rectangles: [
                    { x: 10, y: 20, width: 70, height: 10, color: [1, 0, 0] },
                    { x: 0, y: 0, width: 5, height: 5 },
                ],
            }"#,
        )
        .unwrap();

        assert_eq!(frame.len(), 2);
        assert_eq!(frame.usage, BufferUsage::DynamicDraw);
        assert_eq!(frame.items[0].rectangle, Rectangle::new(10.0, 20.0, 70.0, 10.0));
        assert_eq!(frame.items[0].color, Some(Color::rgb(1.0, 0.0, 0.0)));
        assert_eq!(frame.items[1].color, None);
    }

    #[test]
    fn color_with_alpha() {
        let frame = FrameLoader::load_from_str(
            r#"{ rectangles: [{ x: 0, y: 0, width: 2, height: 2, color: [0.5, 0.25, 1, 0.5] }] }"#,
        )
        .unwrap();

        assert_eq!(frame.items[0].color, Some(Color::new(0.5, 0.25, 1.0, 0.5)));
    }

    #[test]
    fn explicit_usage() {
        let frame = FrameLoader::load_from_str(
            r#"{ usage: "static", rectangles: [{ x: 1, y: 1, width: 1, height: 1 }] }"#,
        )
        .unwrap();

        assert_eq!(frame.usage, BufferUsage::StaticDraw);
    }

    #[test]
    fn rejects_bad_color() {
        let err = FrameLoader::load_from_str(
            r#"{ rectangles: [{ x: 1, y: 1, width: 1, height: 1, color: [1, 0] }] }"#,
        )
        .unwrap_err();

        assert!(matches!(err, LoaderError::InvalidColor(0)));
    }

    #[test]
    fn rejects_missing_field() {
        let err = FrameLoader::load_from_str(r#"{ rectangles: [{ x: 1, y: 1 }] }"#).unwrap_err();

        assert!(matches!(err, LoaderError::FormatError(_)));
    }
}
