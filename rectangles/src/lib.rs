pub mod backend;
pub mod color;
pub mod driver;
pub mod frame;
pub mod frame_loader;
pub mod random;
pub mod recording;
pub mod rectangle;
pub mod shader;

pub use backend::{BufferUsage, GraphicsBackend, Resolution};
pub use color::Color;
pub use driver::{DrawDriver, DriverError, DriverState};
pub use frame::{DrawItem, Frame};
pub use rectangle::{generate_rectangle, Rectangle};
