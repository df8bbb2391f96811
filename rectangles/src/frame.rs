use crate::backend::BufferUsage;
use crate::color::Color;
use crate::random::RandomSource;
use crate::rectangle::Rectangle;

pub const DEFAULT_RANDOM_COUNT: usize = 50;
pub const DEFAULT_RANDOM_RANGE: u32 = 300;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawItem {
    pub rectangle: Rectangle,
    /// `None` keeps whatever color the previous item set.
    pub color: Option<Color>,
}

///
/// Everything drawn during one frame, in draw order
///
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub items: Vec<DrawItem>,
    pub usage: BufferUsage,
}

impl Frame {
    pub fn new(items: Vec<DrawItem>, usage: BufferUsage) -> Self {
        Self { items, usage }
    }

    /// One rectangle uploaded once.
    pub fn single(rectangle: Rectangle, color: Option<Color>) -> Self {
        Self {
            items: vec![DrawItem { rectangle, color }],
            usage: BufferUsage::StaticDraw,
        }
    }

    /// `count` rectangles with position and size in `0..range` and random opaque colors.
    pub fn random(source: &mut RandomSource, count: usize, range: u32) -> Self {
        let items = (0..count)
            .map(|_| DrawItem {
                rectangle: source.rectangle(range),
                color: Some(source.color()),
            })
            .collect();

        Self {
            items,
            usage: BufferUsage::DynamicDraw,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::single(Rectangle::new(10.0, 20.0, 70.0, 10.0), Some(Color::BLACK))
    }
}
