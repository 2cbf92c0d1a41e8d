//! Capabilities the animator consumes from its host.
//!
//! The host owns the event loop. It tells the animator about resize and
//! pointer-move signals only while a listener for that signal is registered,
//! and it fires a frame callback for each handle returned by
//! [`FrameScheduler::request_frame`] unless that handle is cancelled first.

use pencil_dust_core::Viewport;

use crate::surface::Surface;

/// Environment signals the animator can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// The viewport changed size.
    Resize,
    /// The pointer moved anywhere over the host, not only over the surface.
    PointerMove,
}

/// Registration token returned by [`EventSource::listen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Token for a single pending frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Subscribe to and unsubscribe from host signals.
pub trait EventSource {
    fn listen(&mut self, signal: Signal) -> ListenerId;
    fn unlisten(&mut self, id: ListenerId);
}

/// A refresh-synchronised, one-shot frame callback queue.
pub trait FrameScheduler {
    /// Ask for one frame callback on the next refresh.
    fn request_frame(&mut self) -> FrameHandle;
    /// Withdraw a pending request. Unknown or already fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Read-only view of the host's presentation mode.
pub trait ThemeQuery {
    fn is_dark(&self) -> bool;
}

/// Everything a mounted animator needs from its host.
pub trait Environment: EventSource + FrameScheduler + ThemeQuery {
    type Surface: Surface;

    /// Current viewport size in pixels.
    fn viewport(&self) -> Viewport;

    /// Create a drawing surface of the given size, or `None` if the host
    /// cannot provide one.
    fn acquire_surface(&mut self, viewport: Viewport) -> Option<Self::Surface>;
}
