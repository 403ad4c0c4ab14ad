//! Camera notifications for decoupled host consumption.
//!
//! The controller emits events, the host drains them once per frame. This
//! keeps the host free to react (UI, sound, scripting) without callbacks
//! reaching back into the controller.

use glam::Vec2;

/// Notifications the camera controller emits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraEvent {
    /// A focus transition started, carrying the resolved final target.
    FocusStarted { position: Vec2, zoom: f32 },
    /// A focus transition ran to natural completion. Never emitted for a
    /// superseded or cancelled transition.
    FocusFinished,
}

/// Simple event queue - events are pushed during update, drained at end of frame
#[derive(Default)]
pub struct EventQueue {
    events: Vec<CameraEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: CameraEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = CameraEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
