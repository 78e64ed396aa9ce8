//! Backdrop is a decorative animated background: a handful of large, translucent triangles
//! drift and spin behind a page, and their colors follow the reader's scroll position.
//!
//! # Overview
//!
//! 1. **Seed**: a [`Scene`] of [`Polygon`]s with edge-biased positions and small random
//!    velocities ([`Scene::seeded`]).
//! 2. **Update**: every frame each polygon moves and reflects off a soft wall outside the
//!    canvas ([`Scene::step`]).
//! 3. **Color**: scroll offsets are classified into one of four sections
//!    ([`SectionLayout::classify`]); a dead-zone window ([`DeadZone`]) turns section progress
//!    into a blend between palette rows ([`Scene::retarget`]).
//! 4. **Paint**: clear, fill the theme background, draw translucent triangles
//!    ([`paint_frame`]) onto any [`Surface2d`]; [`CpuSurface`] rasterizes with `vello_cpu`.
//!
//! [`BackgroundRenderer`] ties these together against a [`Host`] page: it subscribes to
//! resize, scroll and theme events, runs a frame loop, and tears everything down on
//! [`BackgroundRenderer::destroy`]. [`HeadlessHost`] is an in-memory host for tests and
//! offline rendering.
//!
//! Per-frame failures never stop the loop; they are logged through `tracing` and the frame is
//! skipped.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod config;
mod foundation;
mod host;
mod render;
mod scene;
mod session;

pub use color::ops::{LUMA_WEIGHTS, lerp_rgb, luma, to_gray};
pub use color::palette::{PALETTE_COLUMNS, Palette, PaletteRow};
pub use color::parse::{ColorParseError, ColorSyntax, parse_color};
pub use config::model::{BackdropConfig, DeadZone, KinematicsConfig, SizeRange};
pub use foundation::core::{Affine, BezPath, Point, Rect, Rgb8, Vec2, Viewport};
pub use foundation::error::{BackdropError, BackdropResult};
pub use foundation::rng::Rng64;
pub use host::api::{FrameRequestId, Host, HostEvent, HostEventKind, SubscriptionId};
pub use host::headless::HeadlessHost;
pub use host::theme::{FixedTheme, ThemeMode, ThemeProvider};
pub use render::backend::{FrameRGBA, Surface2d};
pub use render::cpu::CpuSurface;
pub use render::paint::{FrameContext, PaintStyle, paint_frame, paint_polygon};
pub use scene::polygon::Polygon;
pub use scene::sections::{SECTION_COUNT, SectionLayout, SectionPosition, shape_color};
pub use scene::state::Scene;
pub use session::renderer::{BackgroundRenderer, RendererState, RendererStats};
