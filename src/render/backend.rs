use crate::foundation::core::{Point, Rect, Rgb8, Vec2, Viewport};
use crate::foundation::error::BackdropResult;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at (`x`, `y`), or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Immediate-mode 2D drawing surface, modelled on an HTML canvas context.
///
/// Path coordinates pass through the current transform when they are added. `save` and
/// `restore` bracket the transform, fill color and global alpha.
pub trait Surface2d {
    /// Backing store size in pixels.
    fn size(&self) -> Viewport;

    /// Resize the backing store. Clears content and resets drawing state.
    fn resize(&mut self, size: Viewport) -> BackdropResult<()>;

    /// Set the pixels under `rect` to transparent black.
    fn clear_rect(&mut self, rect: Rect) -> BackdropResult<()>;

    /// Set the fill color.
    fn set_fill(&mut self, color: Rgb8);

    /// Set the opacity applied to subsequent fills.
    fn set_global_alpha(&mut self, alpha: f32);

    /// Fill `rect` with the fill color; leaves the current path alone.
    fn fill_rect(&mut self, rect: Rect) -> BackdropResult<()>;

    /// Push drawing state.
    fn save(&mut self);

    /// Pop drawing state; a restore without a matching save is ignored.
    fn restore(&mut self);

    /// Post-multiply the transform by a translation.
    fn translate(&mut self, offset: Vec2);

    /// Post-multiply the transform by a rotation (radians).
    fn rotate(&mut self, radians: f64);

    /// Discard the current path.
    fn begin_path(&mut self);

    /// Start a subpath.
    fn move_to(&mut self, p: Point);

    /// Extend the current subpath.
    fn line_to(&mut self, p: Point);

    /// Close the current subpath.
    fn close_path(&mut self);

    /// Fill the current path with the fill color (nonzero winding).
    fn fill(&mut self) -> BackdropResult<()>;
}
