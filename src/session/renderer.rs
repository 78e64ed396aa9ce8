use crate::color::palette::Palette;
use crate::config::model::{BackdropConfig, DeadZone};
use crate::foundation::error::{BackdropError, BackdropResult};
use crate::foundation::rng::Rng64;
use crate::host::api::{FrameRequestId, Host, HostEvent, HostEventKind, SubscriptionId};
use crate::host::theme::{ThemeMode, ThemeProvider};
use crate::render::backend::Surface2d;
use crate::render::paint::{FrameContext, PaintStyle, paint_frame};
use crate::scene::sections::{SectionLayout, SectionPosition};
use crate::scene::state::Scene;

/// Lifecycle state of a [`BackgroundRenderer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererState {
    /// Listening for events and rescheduling frames.
    Running,
    /// Torn down; every event is ignored and no frame is ever scheduled again.
    Disposed,
}

/// Frame counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RendererStats {
    /// Frames that painted successfully.
    pub frames_painted: u64,
    /// Frames whose paint failed and were skipped.
    pub frames_failed: u64,
    /// Scroll events skipped because an anchor was missing.
    pub scrolls_skipped: u64,
}

/// Animated polygon background bound to a host page.
///
/// Owns the scene, the drawing surface and the subscriptions it installs. The host delivers
/// [`HostEvent`]s through [`BackgroundRenderer::handle`]; each frame callback paints and
/// schedules the next one until [`BackgroundRenderer::destroy`] is called.
///
/// Failures inside an event or frame are logged and contained: the loop keeps running and the
/// scene keeps its last good state.
pub struct BackgroundRenderer<S> {
    surface: S,
    scene: Scene,
    palette: Palette,
    style: PaintStyle,
    dead_zone: DeadZone,
    reflect_margin_px: f64,
    anchors: [String; 3],
    theme: ThemeMode,
    section: SectionPosition,
    state: RendererState,
    pending_frame: Option<FrameRequestId>,
    subscriptions: Vec<SubscriptionId>,
    stats: RendererStats,
}

impl<S: Surface2d> BackgroundRenderer<S> {
    /// Attach a renderer to `host` and start the frame loop.
    ///
    /// Fails before anything is subscribed or scheduled when the config is invalid or the host
    /// cannot provide a drawing surface.
    #[tracing::instrument(skip_all, fields(polygons = config.polygon_count))]
    pub fn new<H>(
        host: &mut H,
        theme: &dyn ThemeProvider,
        config: BackdropConfig,
    ) -> BackdropResult<Self>
    where
        H: Host<Surface = S>,
    {
        config.validate()?;

        let mut surface = host
            .surface_2d()
            .ok_or_else(|| BackdropError::surface("2d rendering context is unavailable"))?;
        let viewport = host.viewport();
        surface.resize(viewport)?;

        let mut rng = config.seed.map(Rng64::new).unwrap_or_else(Rng64::from_clock);
        let scene = Scene::seeded(
            config.polygon_count,
            viewport,
            &config.kinematics,
            &config.palette,
            &mut rng,
        );

        let subscriptions = [
            HostEventKind::Resize,
            HostEventKind::Scroll,
            HostEventKind::ThemeChange,
        ]
        .into_iter()
        .map(|kind| host.subscribe(kind))
        .collect();
        let pending_frame = Some(host.request_frame());
        let theme = theme.current_mode();

        tracing::debug!(?viewport, ?theme, "background renderer started");

        Ok(Self {
            surface,
            scene,
            style: PaintStyle::from(&config),
            palette: config.palette,
            dead_zone: config.dead_zone,
            reflect_margin_px: config.reflect_margin_px,
            anchors: config.anchors,
            theme,
            section: SectionPosition::default(),
            state: RendererState::Running,
            pending_frame,
            subscriptions,
            stats: RendererStats::default(),
        })
    }

    /// Dispatch one host event. Ignored once disposed.
    pub fn handle<H>(&mut self, host: &mut H, event: HostEvent)
    where
        H: Host<Surface = S>,
    {
        if self.state == RendererState::Disposed {
            tracing::trace!(?event, "event after dispose ignored");
            return;
        }
        match event {
            HostEvent::Resize => self.on_resize(host),
            HostEvent::Scroll => self.on_scroll(host),
            HostEvent::ThemeChanged(mode) => self.on_theme(mode),
            HostEvent::Frame(id) => self.on_frame(host, id),
        }
    }

    /// Cancel the pending frame and remove every subscription. Safe to call repeatedly.
    pub fn destroy<H>(&mut self, host: &mut H)
    where
        H: Host<Surface = S>,
    {
        if self.state == RendererState::Disposed {
            return;
        }
        self.state = RendererState::Disposed;
        if let Some(id) = self.pending_frame.take() {
            host.cancel_frame(id);
        }
        for id in self.subscriptions.drain(..) {
            host.unsubscribe(id);
        }
        tracing::debug!(stats = ?self.stats, "background renderer disposed");
    }

    /// Current scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Drawing surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Drawing surface, mutably (for example to read back pixels).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Active theme.
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Lifecycle state.
    pub fn state(&self) -> RendererState {
        self.state
    }

    /// Section computed by the last successful scroll event.
    pub fn section(&self) -> SectionPosition {
        self.section
    }

    /// Frame the renderer is waiting for.
    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.pending_frame
    }

    /// Frame counters.
    pub fn stats(&self) -> RendererStats {
        self.stats
    }

    fn on_resize<H: Host<Surface = S>>(&mut self, host: &H) {
        let viewport = host.viewport();
        if let Err(err) = self.surface.resize(viewport) {
            tracing::warn!(%err, ?viewport, "surface resize failed");
        }
    }

    fn on_scroll<H: Host<Surface = S>>(&mut self, host: &H) {
        let layout = match self.section_layout(host) {
            Ok(layout) => layout,
            Err(err) => {
                self.stats.scrolls_skipped += 1;
                tracing::warn!(%err, "scroll skipped");
                return;
            }
        };
        self.section = layout.classify(host.scroll_y());
        self.scene.retarget(&self.palette, self.section, self.dead_zone);
    }

    fn section_layout<H: Host<Surface = S>>(&self, host: &H) -> BackdropResult<SectionLayout> {
        let mut boundaries = [0.0; 3];
        for (slot, id) in boundaries.iter_mut().zip(&self.anchors) {
            *slot = host
                .anchor_offset(id)
                .ok_or_else(|| BackdropError::layout(format!("anchor '{id}' not found")))?;
        }
        Ok(SectionLayout::new(boundaries, host.document_height()))
    }

    fn on_theme(&mut self, mode: ThemeMode) {
        if self.theme != mode {
            tracing::debug!(from = ?self.theme, to = ?mode, "theme changed");
        }
        self.theme = mode;
    }

    fn on_frame<H: Host<Surface = S>>(&mut self, host: &mut H, id: FrameRequestId) {
        if self.pending_frame != Some(id) {
            tracing::trace!(?id, "stale frame callback ignored");
            return;
        }
        self.pending_frame = None;

        let frame = FrameContext {
            palette: &self.palette,
            mode: self.theme,
            style: self.style,
            reflect_margin_px: self.reflect_margin_px,
        };
        match paint_frame(&mut self.surface, &mut self.scene, &frame) {
            Ok(()) => self.stats.frames_painted += 1,
            Err(err) => {
                self.stats.frames_failed += 1;
                tracing::warn!(%err, "frame paint failed");
            }
        }

        if self.state == RendererState::Running {
            self.pending_frame = Some(host.request_frame());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/renderer.rs"]
mod tests;
