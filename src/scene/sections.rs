use crate::color::ops::{lerp_rgb, to_gray};
use crate::color::palette::Palette;
use crate::foundation::core::Rgb8;
use crate::host::theme::ThemeMode;
use crate::scene::polygon::Polygon;

/// Number of scroll sections.
pub const SECTION_COUNT: usize = 4;

/// Where the page is scrolled to, in section terms.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct SectionPosition {
    /// Section in `0..SECTION_COUNT`.
    pub index: usize,
    /// Progress through the section, in `[0, 1]`.
    pub progress: f64,
}

/// Vertical page layout that splits the scroll range into sections.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionLayout {
    /// Page offsets of the three landmarks that open sections 1, 2 and 3.
    pub boundaries: [f64; 3],
    /// Total scrollable document height; the end of section 3.
    pub document_height: f64,
}

impl SectionLayout {
    /// Create a layout from landmark offsets and document height.
    pub fn new(boundaries: [f64; 3], document_height: f64) -> Self {
        Self {
            boundaries,
            document_height,
        }
    }

    /// Classify a scroll offset. Total: every offset maps to exactly one section.
    ///
    /// Section 0 spans `[0, l1)`, 1 spans `[l1, l2)`, 2 spans `[l2, l3)`, 3 spans
    /// `[l3, document_height]`. Degenerate spans report progress 0.
    pub fn classify(&self, scroll_y: f64) -> SectionPosition {
        let y = if scroll_y.is_finite() { scroll_y } else { 0.0 };
        let [l1, l2, l3] = self.boundaries;

        let (index, start, end) = if y < l1 {
            (0, 0.0, l1)
        } else if y < l2 {
            (1, l1, l2)
        } else if y < l3 {
            (2, l2, l3)
        } else {
            (3, l3, self.document_height)
        };

        SectionPosition {
            index,
            progress: span_progress(y, start, end),
        }
    }
}

fn span_progress(y: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if !(span.is_finite() && span > 0.0) {
        return 0.0;
    }
    ((y - start) / span).clamp(0.0, 1.0)
}

/// Fill color for a polygon under the given theme.
///
/// Light mode paints the interpolated display color. Dark mode paints the gray of the
/// polygon's section-0 palette color and ignores scroll state.
pub fn shape_color(polygon: &Polygon, palette: &Palette, mode: ThemeMode) -> Rgb8 {
    match mode {
        ThemeMode::Light => polygon.display,
        ThemeMode::Dark => to_gray(palette.color(0, polygon.slot)),
    }
}

/// Recompute base, target and display colors for one polygon.
pub(crate) fn retarget_polygon(
    polygon: &mut Polygon,
    palette: &Palette,
    section: usize,
    factor: f64,
) {
    polygon.base = palette.color(section, polygon.slot);
    polygon.target = palette.color(section + 1, polygon.slot);
    polygon.display = lerp_rgb(polygon.base, polygon.target, factor);
}

#[cfg(test)]
#[path = "../../tests/unit/scene/sections.rs"]
mod tests;
