use std::f64::consts::TAU;

use crate::foundation::core::{Affine, BezPath, Point, Rgb8, Vec2, Viewport};

/// One drifting, spinning triangle.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    /// Center in canvas pixels.
    pub position: Point,
    /// Pixels per frame.
    pub velocity: Vec2,
    /// Circumradius in pixels.
    pub size: f64,
    /// Radians; unbounded.
    pub rotation: f64,
    /// Radians per frame.
    pub spin: f64,
    /// Palette column this polygon tracks across sections.
    pub slot: usize,
    /// Color at blend factor 0.
    pub base: Rgb8,
    /// Color at blend factor 1.
    pub target: Rgb8,
    /// Color painted in light mode.
    pub display: Rgb8,
}

impl Polygon {
    /// Vertex count.
    pub const SIDES: usize = 3;

    /// Outline in local space: vertices at angles `2πi/3`, radius `size`.
    pub fn triangle_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for i in 0..Self::SIDES {
            let angle = (i as f64 / Self::SIDES as f64) * TAU;
            let p = Point::new(angle.cos() * self.size, angle.sin() * self.size);
            if i == 0 {
                path.move_to(p);
            } else {
                path.line_to(p);
            }
        }
        path.close_path();
        path
    }

    /// Local-to-canvas transform (translate, then rotate).
    pub fn local_transform(&self) -> Affine {
        Affine::translate(self.position.to_vec2()) * Affine::rotate(self.rotation)
    }

    /// Advance one frame and reflect off the soft boundary.
    ///
    /// The wall sits `margin` pixels outside each canvas edge. Only velocity changes on
    /// contact, so shapes may travel past the wall briefly. Reflection always points the
    /// velocity back inward, so a shape that is still beyond the wall on the next frame keeps
    /// heading home instead of flipping again.
    pub fn step(&mut self, viewport: Viewport, margin: f64) {
        let next = self.position + self.velocity;
        let rotation = self.rotation + self.spin;
        if !(next.is_finite() && rotation.is_finite()) {
            tracing::warn!(
                position = ?self.position,
                velocity = ?self.velocity,
                "non-finite polygon step skipped"
            );
            return;
        }
        self.position = next;
        self.rotation = rotation;

        let (w, h) = (viewport.width_f64(), viewport.height_f64());
        if self.position.x < -margin {
            self.velocity.x = self.velocity.x.abs();
        } else if self.position.x > w + margin {
            self.velocity.x = -self.velocity.x.abs();
        }
        if self.position.y < -margin {
            self.velocity.y = self.velocity.y.abs();
        } else if self.position.y > h + margin {
            self.velocity.y = -self.velocity.y.abs();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/polygon.rs"]
mod tests;
