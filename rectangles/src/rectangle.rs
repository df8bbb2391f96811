use cgmath::Vector2;

/// Amount of vertices emitted for one rectangle (two triangles).
pub const VERTICES_PER_RECTANGLE: usize = 6;

/// Amount of floats emitted for one rectangle.
pub const FLOATS_PER_RECTANGLE: usize = VERTICES_PER_RECTANGLE * 2;

///
/// Axis aligned rectangle in pixel space, y pointing down
///
/// Width and height are not validated, zero or negative sizes give degenerate or flipped
/// rectangles.
///
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
    pub origin: Vector2<f32>,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vector2::new(x, y),
            width,
            height,
        }
    }

    /// Corner opposite to the origin.
    pub fn far_corner(&self) -> Vector2<f32> {
        self.origin + Vector2::new(self.width, self.height)
    }

    /// Corners in order top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Vector2<f32>; 4] {
        let Vector2 { x: x1, y: y1 } = self.origin;
        let Vector2 { x: x2, y: y2 } = self.far_corner();

        [
            Vector2::new(x1, y1),
            Vector2::new(x2, y1),
            Vector2::new(x1, y2),
            Vector2::new(x2, y2),
        ]
    }

    /// Two triangles sharing the diagonal from bottom-left to top-right.
    pub fn vertices(&self) -> [Vector2<f32>; VERTICES_PER_RECTANGLE] {
        let [tl, tr, bl, br] = self.corners();

        [tl, tr, bl, bl, tr, br]
    }

    pub fn to_positions(&self) -> [f32; FLOATS_PER_RECTANGLE] {
        let mut out = [0.0; FLOATS_PER_RECTANGLE];

        for (i, v) in self.vertices().iter().enumerate() {
            out[i * 2] = v.x;
            out[i * 2 + 1] = v.y;
        }

        out
    }

    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

pub fn generate_rectangle(x: f32, y: f32, width: f32, height: f32) -> [f32; FLOATS_PER_RECTANGLE] {
    Rectangle::new(x, y, width, height).to_positions()
}
