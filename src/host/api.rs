use crate::foundation::core::Viewport;
use crate::host::theme::ThemeMode;
use crate::render::backend::Surface2d;

/// Handle for an installed event subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub u64);

/// Handle for a scheduled display-refresh callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameRequestId(pub u64);

/// Event categories a renderer can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HostEventKind {
    /// Viewport size changed.
    Resize,
    /// Vertical scroll offset changed.
    Scroll,
    /// Color-scheme preference changed.
    ThemeChange,
}

/// An event delivered by the host on the renderer's execution context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// Viewport size changed; read [`Host::viewport`].
    Resize,
    /// Scroll offset changed; read [`Host::scroll_y`].
    Scroll,
    /// Color-scheme preference changed.
    ThemeChanged(ThemeMode),
    /// A scheduled frame is due.
    Frame(FrameRequestId),
}

/// The page environment a renderer lives in.
///
/// Supplies the drawing surface, layout metrics and event plumbing. Everything runs on one
/// execution context: the host calls back into the renderer, never concurrently.
pub trait Host {
    /// Drawing surface type handed to the renderer.
    type Surface: Surface2d;

    /// Obtain the 2D drawing surface; `None` when no rendering context is available.
    fn surface_2d(&mut self) -> Option<Self::Surface>;

    /// Current viewport size.
    fn viewport(&self) -> Viewport;

    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    /// Total scrollable document height.
    fn document_height(&self) -> f64;

    /// Vertical page offset of the element with this id, if present.
    fn anchor_offset(&self, id: &str) -> Option<f64>;

    /// Install a listener for `kind`.
    fn subscribe(&mut self, kind: HostEventKind) -> SubscriptionId;

    /// Remove a listener. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);

    /// Schedule a callback for the next display refresh.
    fn request_frame(&mut self) -> FrameRequestId;

    /// Cancel a scheduled callback. Unknown ids are ignored.
    fn cancel_frame(&mut self, id: FrameRequestId);
}
