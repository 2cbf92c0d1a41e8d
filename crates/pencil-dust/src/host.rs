//! The terminal standing in for a browser window.
//!
//! Terminal cells are mapped onto a virtual pixel grid so the animator can
//! work in the same pixel units it would use on a web page.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use pencil_dust_core::{Point, Theme, Viewport};
use pencil_dust_particles::{
    Environment, EventSource, FrameHandle, FrameScheduler, ListenerId, Signal, StrokeBuffer,
    ThemeQuery,
};

/// Virtual pixels per terminal column.
pub const CELL_WIDTH_PX: u32 = 8;
/// Virtual pixels per terminal row.
pub const CELL_HEIGHT_PX: u32 = 16;

/// Pixel viewport covering a terminal of `cols` × `rows` cells.
pub fn viewport_for(cols: u16, rows: u16) -> Viewport {
    Viewport::new(cols as u32 * CELL_WIDTH_PX, rows as u32 * CELL_HEIGHT_PX)
}

/// Pixel position of the centre of a terminal cell.
pub fn cell_center(col: u16, row: u16) -> Point {
    Point::new(
        (col as f32 + 0.5) * CELL_WIDTH_PX as f32,
        (row as f32 + 0.5) * CELL_HEIGHT_PX as f32,
    )
}

/// Listener registry, frame scheduler and theme marker for a terminal.
#[derive(Debug)]
pub struct TerminalEnvironment {
    /// Current viewport in pixels.
    viewport: Viewport,
    /// Presentation mode, toggled by the user.
    theme: Theme,
    /// Minimum spacing between fired frames.
    frame_interval: Duration,
    /// Registered listeners.
    listeners: HashMap<ListenerId, Signal>,
    /// The single queued frame and when it becomes due.
    pending: Option<(FrameHandle, Instant)>,
    /// When the last frame was handed out.
    last_frame: Option<Instant>,
    /// Source of listener and frame ids.
    next_id: u64,
}

impl TerminalEnvironment {
    pub fn new(cols: u16, rows: u16, theme: Theme, frame_interval: Duration) -> Self {
        Self {
            viewport: viewport_for(cols, rows),
            theme,
            frame_interval,
            listeners: HashMap::new(),
            pending: None,
            last_frame: None,
            next_id: 1,
        }
    }

    /// Record a terminal resize and return the new pixel viewport.
    pub fn set_size(&mut self, cols: u16, rows: u16) -> Viewport {
        self.viewport = viewport_for(cols, rows);
        self.viewport
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the presentation mode.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }

    /// Whether anyone is subscribed to `signal`.
    pub fn is_listening(&self, signal: Signal) -> bool {
        self.listeners.values().any(|s| *s == signal)
    }

    /// When the queued frame becomes due, if one is queued.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, due)| due)
    }

    /// Hand out the queued frame if it is due at `now`.
    pub fn take_due_frame(&mut self, now: Instant) -> Option<FrameHandle> {
        match self.pending {
            Some((handle, due)) if due <= now => {
                self.pending = None;
                self.last_frame = Some(now);
                Some(handle)
            }
            _ => None,
        }
    }

    /// Listeners plus queued frames still registered.
    pub fn active_subscriptions(&self) -> usize {
        self.listeners.len() + usize::from(self.pending.is_some())
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl EventSource for TerminalEnvironment {
    fn listen(&mut self, signal: Signal) -> ListenerId {
        let id = ListenerId(self.next_id());
        self.listeners.insert(id, signal);
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }
}

impl FrameScheduler for TerminalEnvironment {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
        let due = self
            .last_frame
            .map_or_else(Instant::now, |last| last + self.frame_interval);
        self.pending = Some((handle, due));
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if matches!(self.pending, Some((pending, _)) if pending == handle) {
            self.pending = None;
        }
    }
}

impl ThemeQuery for TerminalEnvironment {
    fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }
}

impl Environment for TerminalEnvironment {
    type Surface = StrokeBuffer;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn acquire_surface(&mut self, viewport: Viewport) -> Option<StrokeBuffer> {
        (!viewport.is_empty()).then(|| StrokeBuffer::new(viewport))
    }
}
