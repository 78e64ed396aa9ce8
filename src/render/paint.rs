use kurbo::PathEl;

use crate::color::palette::Palette;
use crate::config::model::BackdropConfig;
use crate::foundation::core::{Rect, Rgb8};
use crate::foundation::error::BackdropResult;
use crate::host::theme::ThemeMode;
use crate::render::backend::Surface2d;
use crate::scene::polygon::Polygon;
use crate::scene::sections::shape_color;
use crate::scene::state::Scene;

/// Fixed styling applied on every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintStyle {
    /// Opaque background in light mode.
    pub light_background: Rgb8,
    /// Opaque background in dark mode.
    pub dark_background: Rgb8,
    /// Fill opacity for each shape.
    pub shape_alpha: f32,
}

impl PaintStyle {
    /// Background for `mode`.
    pub fn background(&self, mode: ThemeMode) -> Rgb8 {
        match mode {
            ThemeMode::Light => self.light_background,
            ThemeMode::Dark => self.dark_background,
        }
    }
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self::from(&BackdropConfig::default())
    }
}

impl From<&BackdropConfig> for PaintStyle {
    fn from(cfg: &BackdropConfig) -> Self {
        Self {
            light_background: cfg.light_background,
            dark_background: cfg.dark_background,
            shape_alpha: cfg.shape_alpha,
        }
    }
}

/// Per-frame inputs that are not owned by the scene.
#[derive(Clone, Copy, Debug)]
pub struct FrameContext<'a> {
    /// Section palette.
    pub palette: &'a Palette,
    /// Active theme.
    pub mode: ThemeMode,
    /// Background and shape styling.
    pub style: PaintStyle,
    /// Soft boundary distance for the update step.
    pub reflect_margin_px: f64,
}

/// Draw one frame: clear, paint the background, advance the scene, paint every polygon.
pub fn paint_frame<S>(
    surface: &mut S,
    scene: &mut Scene,
    frame: &FrameContext<'_>,
) -> BackdropResult<()>
where
    S: Surface2d + ?Sized,
{
    let viewport = surface.size();
    let bounds = Rect::new(0.0, 0.0, viewport.width_f64(), viewport.height_f64());

    surface.clear_rect(bounds)?;
    surface.save();
    surface.set_fill(frame.style.background(frame.mode));
    surface.set_global_alpha(1.0);
    let background = surface.fill_rect(bounds);
    surface.restore();
    background?;

    scene.step(viewport, frame.reflect_margin_px);

    for polygon in scene.polygons() {
        let color = shape_color(polygon, frame.palette, frame.mode);
        paint_polygon(surface, polygon, color, frame.style.shape_alpha)?;
    }
    Ok(())
}

/// Fill one polygon inside its own save/restore bracket.
///
/// The transform never leaks to the next shape, even when the fill fails.
pub fn paint_polygon<S>(
    surface: &mut S,
    polygon: &Polygon,
    color: Rgb8,
    alpha: f32,
) -> BackdropResult<()>
where
    S: Surface2d + ?Sized,
{
    surface.save();
    surface.translate(polygon.position.to_vec2());
    surface.rotate(polygon.rotation);
    surface.set_fill(color);
    surface.set_global_alpha(alpha);

    surface.begin_path();
    for el in polygon.triangle_path().elements() {
        match *el {
            PathEl::MoveTo(p) => surface.move_to(p),
            PathEl::LineTo(p) => surface.line_to(p),
            PathEl::ClosePath => surface.close_path(),
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        }
    }
    let filled = surface.fill();

    surface.restore();
    filled
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;
