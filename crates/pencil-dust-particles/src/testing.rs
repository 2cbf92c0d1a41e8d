//! In-memory host used by unit tests.

use std::collections::BTreeMap;

use pencil_dust_core::Viewport;

use crate::environment::{
    Environment, EventSource, FrameHandle, FrameScheduler, ListenerId, Signal, ThemeQuery,
};
use crate::surface::StrokeBuffer;

#[derive(Debug)]
pub struct FakeEnvironment {
    pub viewport: Viewport,
    pub surface_available: bool,
    pub dark: bool,
    pub frames_requested: usize,
    pub cancelled: Vec<FrameHandle>,
    pub unlistened: usize,
    listeners: BTreeMap<ListenerId, Signal>,
    pending: Option<FrameHandle>,
    next_id: u64,
}

impl FakeEnvironment {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            surface_available: true,
            dark: false,
            frames_requested: 0,
            cancelled: Vec::new(),
            unlistened: 0,
            listeners: BTreeMap::new(),
            pending: None,
            next_id: 1,
        }
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_listening(&self, signal: Signal) -> bool {
        self.listeners.values().any(|s| *s == signal)
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl EventSource for FakeEnvironment {
    fn listen(&mut self, signal: Signal) -> ListenerId {
        let id = ListenerId(self.next_id());
        self.listeners.insert(id, signal);
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.unlistened += 1;
        self.listeners.remove(&id);
    }
}

impl FrameScheduler for FakeEnvironment {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
        self.frames_requested += 1;
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

impl ThemeQuery for FakeEnvironment {
    fn is_dark(&self) -> bool {
        self.dark
    }
}

impl Environment for FakeEnvironment {
    type Surface = StrokeBuffer;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn acquire_surface(&mut self, viewport: Viewport) -> Option<StrokeBuffer> {
        self.surface_available.then(|| StrokeBuffer::new(viewport))
    }
}
