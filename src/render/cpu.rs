use std::fmt;

use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgb8, Vec2, Viewport};
use crate::foundation::error::{BackdropError, BackdropResult};
use crate::render::backend::{FrameRGBA, Surface2d};
use crate::render::composite::over_in_place;

/// CPU raster surface powered by `vello_cpu`.
///
/// Fills are batched into a `vello_cpu` render context and composited onto a committed
/// premultiplied RGBA8 buffer whenever pixels must be observed or erased (`clear_rect`,
/// `snapshot`). A zero-sized surface accepts every call and draws nothing.
pub struct CpuSurface {
    size: Viewport,
    canvas: Vec<u8>,
    batch: Option<Batch>,
    state: DrawState,
    stack: Vec<DrawState>,
    path: BezPath,
}

struct Batch {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
    dirty: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DrawState {
    transform: Affine,
    fill: Rgb8,
    alpha: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            fill: Rgb8::BLACK,
            alpha: 1.0,
        }
    }
}

impl Default for CpuSurface {
    fn default() -> Self {
        Self {
            size: Viewport::default(),
            canvas: Vec::new(),
            batch: None,
            state: DrawState::default(),
            stack: Vec::new(),
            path: BezPath::new(),
        }
    }
}

impl fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CpuSurface")
            .field("size", &self.size)
            .field("state", &self.state)
            .field("saved", &self.stack.len())
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    /// Create a surface with the given backing store size.
    pub fn new(size: Viewport) -> BackdropResult<Self> {
        let mut surface = Self::default();
        surface.resize(size)?;
        Ok(surface)
    }

    /// Composite pending fills and copy out the pixels.
    pub fn snapshot(&mut self) -> BackdropResult<FrameRGBA> {
        self.flush()?;
        Ok(FrameRGBA {
            width: self.size.width,
            height: self.size.height,
            data: self.canvas.clone(),
            premultiplied: true,
        })
    }

    /// Depth of the save stack.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Current transform.
    pub fn transform(&self) -> Affine {
        self.state.transform
    }

    fn flush(&mut self) -> BackdropResult<()> {
        let Some(batch) = self.batch.as_mut() else {
            return Ok(());
        };
        if !batch.dirty {
            return Ok(());
        }

        batch.ctx.flush();
        let mut layer = vello_cpu::Pixmap::new(batch.width, batch.height);
        batch.ctx.render_to_pixmap(&mut layer);
        batch.ctx = vello_cpu::RenderContext::new(batch.width, batch.height);
        batch.dirty = false;

        over_in_place(&mut self.canvas, layer.data_as_u8_slice())
    }

    fn fill_device_path(&mut self, path: &BezPath) {
        let DrawState { fill, alpha, .. } = self.state;
        let Some(batch) = self.batch.as_mut() else {
            return;
        };
        if alpha <= 0.0 || path.elements().is_empty() {
            return;
        }

        let ctx = &mut batch.ctx;
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            fill.r, fill.g, fill.b, 255,
        ));
        if alpha < 1.0 {
            ctx.push_opacity_layer(alpha);
        }
        ctx.fill_path(&bezpath_to_cpu(path));
        if alpha < 1.0 {
            ctx.pop_layer();
        }
        batch.dirty = true;
    }

    fn device_point(&self, p: Point) -> Point {
        self.state.transform * p
    }
}

impl Surface2d for CpuSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn resize(&mut self, size: Viewport) -> BackdropResult<()> {
        let width: u16 = size
            .width
            .try_into()
            .map_err(|_| BackdropError::surface("surface width exceeds u16"))?;
        let height: u16 = size
            .height
            .try_into()
            .map_err(|_| BackdropError::surface("surface height exceeds u16"))?;

        self.size = size;
        self.canvas = vec![0; (size.width as usize) * (size.height as usize) * 4];
        self.batch = (!size.is_empty()).then(|| Batch {
            ctx: vello_cpu::RenderContext::new(width, height),
            width,
            height,
            dirty: false,
        });
        self.state = DrawState::default();
        self.stack.clear();
        self.path = BezPath::new();
        Ok(())
    }

    fn clear_rect(&mut self, rect: Rect) -> BackdropResult<()> {
        self.flush()?;

        let bbox = self.state.transform.transform_rect_bbox(rect);
        let clamp_x = |v: f64| v.clamp(0.0, self.size.width_f64()) as usize;
        let clamp_y = |v: f64| v.clamp(0.0, self.size.height_f64()) as usize;
        let (x0, x1) = (clamp_x(bbox.x0.floor()), clamp_x(bbox.x1.ceil()));
        let (y0, y1) = (clamp_y(bbox.y0.floor()), clamp_y(bbox.y1.ceil()));

        let stride = (self.size.width as usize) * 4;
        for y in y0..y1 {
            let row = &mut self.canvas[y * stride..(y + 1) * stride];
            row[x0 * 4..x1 * 4].fill(0);
        }
        Ok(())
    }

    fn set_fill(&mut self, color: Rgb8) {
        self.state.fill = color;
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        // Canvas ignores out-of-range alpha rather than clamping.
        if alpha.is_finite() && (0.0..=1.0).contains(&alpha) {
            self.state.alpha = alpha;
        }
    }

    fn fill_rect(&mut self, rect: Rect) -> BackdropResult<()> {
        let t = self.state.transform;
        let mut path = BezPath::new();
        path.move_to(t * Point::new(rect.x0, rect.y0));
        path.line_to(t * Point::new(rect.x1, rect.y0));
        path.line_to(t * Point::new(rect.x1, rect.y1));
        path.line_to(t * Point::new(rect.x0, rect.y1));
        path.close_path();
        self.fill_device_path(&path);
        Ok(())
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.state.transform = self.state.transform * Affine::translate(offset);
    }

    fn rotate(&mut self, radians: f64) {
        self.state.transform = self.state.transform * Affine::rotate(radians);
    }

    fn begin_path(&mut self) {
        self.path = BezPath::new();
    }

    fn move_to(&mut self, p: Point) {
        let p = self.device_point(p);
        self.path.move_to(p);
    }

    fn line_to(&mut self, p: Point) {
        let p = self.device_point(p);
        if self.path.elements().is_empty() {
            self.path.move_to(p);
        } else {
            self.path.line_to(p);
        }
    }

    fn close_path(&mut self) {
        if !self.path.elements().is_empty() {
            self.path.close_path();
        }
    }

    fn fill(&mut self) -> BackdropResult<()> {
        let path = std::mem::take(&mut self.path);
        self.fill_device_path(&path);
        self.path = path;
        Ok(())
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
