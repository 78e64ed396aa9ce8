use std::collections::{BTreeMap, HashMap};

use crate::foundation::core::Viewport;
use crate::host::api::{FrameRequestId, Host, HostEvent, HostEventKind, SubscriptionId};
use crate::host::theme::ThemeMode;
use crate::render::backend::Surface2d;
use crate::render::cpu::CpuSurface;

/// In-memory host for tests, offline rendering and the CLI.
///
/// Layout metrics are set directly. Mutators return the event a real page would dispatch,
/// but only while a listener for that kind is installed; the caller forwards it to the
/// renderer. Frames are delivered explicitly with [`HeadlessHost::take_frame`].
#[derive(Debug)]
pub struct HeadlessHost<S = CpuSurface> {
    surface: Option<S>,
    viewport: Viewport,
    scroll_y: f64,
    document_height: f64,
    anchors: HashMap<String, f64>,
    subscriptions: BTreeMap<SubscriptionId, HostEventKind>,
    pending_frame: Option<FrameRequestId>,
    next_id: u64,
}

impl HeadlessHost<CpuSurface> {
    /// Host backed by a [`CpuSurface`].
    pub fn cpu(viewport: Viewport) -> Self {
        Self::new(viewport, Some(CpuSurface::default()))
    }
}

impl<S: Surface2d> HeadlessHost<S> {
    /// Host handing out `surface` once; `None` simulates a missing rendering context.
    ///
    /// The document height defaults to the viewport height.
    pub fn new(viewport: Viewport, surface: Option<S>) -> Self {
        Self {
            surface,
            viewport,
            scroll_y: 0.0,
            document_height: viewport.height_f64(),
            anchors: HashMap::new(),
            subscriptions: BTreeMap::new(),
            pending_frame: None,
            next_id: 1,
        }
    }

    /// Place (or move) an anchor element.
    pub fn set_anchor(&mut self, id: impl Into<String>, offset: f64) {
        self.anchors.insert(id.into(), offset);
    }

    /// Remove an anchor element.
    pub fn remove_anchor(&mut self, id: &str) {
        self.anchors.remove(id);
    }

    /// Set the scrollable document height.
    pub fn set_document_height(&mut self, height: f64) {
        self.document_height = height;
    }

    /// Scroll to `y`.
    pub fn scroll_to(&mut self, y: f64) -> Option<HostEvent> {
        self.scroll_y = y;
        self.emit(HostEventKind::Scroll, HostEvent::Scroll)
    }

    /// Resize the viewport.
    pub fn resize(&mut self, viewport: Viewport) -> Option<HostEvent> {
        self.viewport = viewport;
        self.emit(HostEventKind::Resize, HostEvent::Resize)
    }

    /// Flip the color-scheme preference.
    pub fn set_theme(&mut self, mode: ThemeMode) -> Option<HostEvent> {
        self.emit(HostEventKind::ThemeChange, HostEvent::ThemeChanged(mode))
    }

    /// Deliver the pending frame callback, if any.
    pub fn take_frame(&mut self) -> Option<HostEvent> {
        self.pending_frame.take().map(HostEvent::Frame)
    }

    /// Currently scheduled frame.
    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.pending_frame
    }

    /// Installed listener count.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// `true` if any listener for `kind` is installed.
    pub fn is_subscribed(&self, kind: HostEventKind) -> bool {
        self.subscriptions.values().any(|&k| k == kind)
    }

    fn emit(&self, kind: HostEventKind, event: HostEvent) -> Option<HostEvent> {
        self.is_subscribed(kind).then_some(event)
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl<S: Surface2d> Host for HeadlessHost<S> {
    type Surface = S;

    fn surface_2d(&mut self) -> Option<S> {
        self.surface.take()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }

    fn anchor_offset(&self, id: &str) -> Option<f64> {
        self.anchors.get(id).copied()
    }

    fn subscribe(&mut self, kind: HostEventKind) -> SubscriptionId {
        let id = SubscriptionId(self.next_id());
        self.subscriptions.insert(id, kind);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.remove(&id);
    }

    fn request_frame(&mut self) -> FrameRequestId {
        let id = FrameRequestId(self.next_id());
        self.pending_frame = Some(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        if self.pending_frame == Some(id) {
            self.pending_frame = None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/headless.rs"]
mod tests;
