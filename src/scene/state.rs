use std::f64::consts::TAU;

use crate::color::palette::Palette;
use crate::config::model::{DeadZone, KinematicsConfig};
use crate::foundation::core::{Point, Vec2, Viewport};
use crate::foundation::rng::Rng64;
use crate::scene::polygon::Polygon;
use crate::scene::sections::{SectionPosition, retarget_polygon};

/// The fixed set of polygons owned by a renderer.
///
/// The polygon count is set at construction and never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    polygons: Vec<Polygon>,
}

impl Scene {
    /// Seed `count` polygons with randomized kinematics.
    ///
    /// Each axis independently lands in the low or high edge band of the canvas with equal
    /// probability, which clusters shapes toward the edges. Slots cycle through the palette
    /// columns; colors start at row 0 heading for row 1.
    pub fn seeded(
        count: usize,
        viewport: Viewport,
        kinematics: &KinematicsConfig,
        palette: &Palette,
        rng: &mut Rng64,
    ) -> Self {
        let columns = palette.columns();
        let polygons = (0..count)
            .map(|i| {
                let slot = i % columns;
                let x = edge_biased(rng, kinematics.edge_band) * viewport.width_f64();
                let y = edge_biased(rng, kinematics.edge_band) * viewport.height_f64();
                let vx = rng.symmetric(kinematics.max_speed_px);
                let vy = rng.symmetric(kinematics.max_speed_px);
                let size = rng.range(kinematics.size_px.min, kinematics.size_px.max);
                let rotation = rng.range(0.0, TAU);
                let spin = rng.symmetric(kinematics.max_spin_rad);
                let base = palette.color(0, slot);

                Polygon {
                    position: Point::new(x, y),
                    velocity: Vec2::new(vx, vy),
                    size,
                    rotation,
                    spin,
                    slot,
                    base,
                    target: palette.color(1, slot),
                    display: base,
                }
            })
            .collect();

        Self { polygons }
    }

    /// Build a scene from explicit polygons.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Polygons in paint order.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Polygon count.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// `true` when the scene has no polygons.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Advance every polygon one frame.
    pub fn step(&mut self, viewport: Viewport, margin: f64) {
        for p in &mut self.polygons {
            p.step(viewport, margin);
        }
    }

    /// Point every polygon at the palette rows for `position` and blend by the dead zone.
    pub fn retarget(&mut self, palette: &Palette, position: SectionPosition, dead_zone: DeadZone) {
        let factor = dead_zone.factor(position.progress);
        tracing::trace!(
            section = position.index,
            progress = position.progress,
            factor,
            "retarget polygons"
        );
        for p in &mut self.polygons {
            retarget_polygon(p, palette, position.index, factor);
        }
    }
}

fn edge_biased(rng: &mut Rng64, band: f64) -> f64 {
    if rng.chance(0.5) {
        rng.range(0.0, band)
    } else {
        rng.range(1.0 - band, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/state.rs"]
mod tests;
