use cgmath::Vector2;

use crate::backend::Resolution;

/// Maps pixel positions to clip space using the `u_resolution` uniform.
pub const VERTEX_SHADER_SRC: &str = include_str!("gl_shaders/rect_vert.glsl");

/// Writes the `u_color` uniform to every fragment.
pub const FRAGMENT_SHADER_SRC: &str = include_str!("gl_shaders/flat_frag.glsl");

pub const POSITION_ATTRIBUTE: &str = "a_position";
pub const RESOLUTION_UNIFORM: &str = "u_resolution";
pub const COLOR_UNIFORM: &str = "u_color";

///
/// CPU version of the transform done by [`VERTEX_SHADER_SRC`]
///
pub fn pixel_to_clip(position: Vector2<f32>, resolution: Resolution) -> Vector2<f32> {
    let zero_to_one = Vector2::new(
        position.x / resolution.width as f32,
        position.y / resolution.height as f32,
    );
    let zero_to_two = zero_to_one * 2.0;
    let clip_space = zero_to_two - Vector2::new(1.0, 1.0);

    Vector2::new(clip_space.x, -clip_space.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_to_clip() {
        let res = Resolution::new(800, 600);

        assert_eq!(
            pixel_to_clip(Vector2::new(800.0, 600.0), res),
            Vector2::new(1.0, -1.0)
        );
        assert_eq!(
            pixel_to_clip(Vector2::new(0.0, 0.0), res),
            Vector2::new(-1.0, 1.0)
        );
        assert_eq!(
            pixel_to_clip(Vector2::new(400.0, 300.0), res),
            Vector2::new(0.0, 0.0)
        );
    }

    #[test]
    fn sources_declare_names() {
        assert!(VERTEX_SHADER_SRC.starts_with("#version 300 es"));
        assert!(FRAGMENT_SHADER_SRC.starts_with("#version 300 es"));
        assert!(VERTEX_SHADER_SRC.contains(&format!("in vec2 {POSITION_ATTRIBUTE};")));
        assert!(VERTEX_SHADER_SRC.contains(&format!("uniform vec2 {RESOLUTION_UNIFORM};")));
        assert!(FRAGMENT_SHADER_SRC.contains(&format!("uniform vec4 {COLOR_UNIFORM};")));
    }

    #[test]
    fn sources_match_cpu_transform() {
        for step in [
            "vec2 zeroToOne = a_position / u_resolution;",
            "vec2 zeroToTwo = zeroToOne * 2.0;",
            "vec2 clipSpace = zeroToTwo - 1.0;",
            "gl_Position = vec4(clipSpace * vec2(1, -1), 0, 1);",
        ] {
            assert!(VERTEX_SHADER_SRC.contains(step), "missing `{step}`");
        }

        assert!(FRAGMENT_SHADER_SRC.contains("outColor = u_color;"));
    }
}
