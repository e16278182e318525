//! Camera: world-to-viewport translation, recomputed every tick
//!
//! No smoothing - the camera snaps exactly to the player head. The renderer
//! subtracts the offset from every world coordinate before drawing.

use crate::util::vec2::Vec2;

/// Viewport size in world-scale units, supplied by the environment.
/// May change at arbitrary times; the camera is its only consumer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Translation to apply to world coordinates before drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
}

impl Camera {
    /// Center the viewport on the player head
    pub fn centered_on(head: Vec2, viewport: Viewport) -> Self {
        Self {
            x: head.x - viewport.width / 2.0,
            y: head.y - viewport.height / 2.0,
        }
    }

    /// Map a world coordinate into viewport space
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x - self.x, world.y - self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_snaps_to_head() {
        let cam = Camera::centered_on(Vec2::new(1000.0, 600.0), Viewport::new(800.0, 600.0));
        assert_eq!(cam.x, 600.0);
        assert_eq!(cam.y, 300.0);
    }

    #[test]
    fn test_head_lands_at_viewport_center() {
        let head = Vec2::new(123.0, 456.0);
        let viewport = Viewport::new(800.0, 600.0);
        let cam = Camera::centered_on(head, viewport);
        let screen = cam.to_screen(head);
        assert_eq!(screen, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_viewport_resize_only_moves_camera() {
        let head = Vec2::new(500.0, 500.0);
        let a = Camera::centered_on(head, Viewport::new(800.0, 600.0));
        let b = Camera::centered_on(head, Viewport::new(1920.0, 1080.0));
        assert_ne!(a, b);
        // Same head, recomputation is pure
        let again = Camera::centered_on(head, Viewport::new(800.0, 600.0));
        assert_eq!(a, again);
    }
}
