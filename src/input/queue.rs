//! Channel that serializes every input source into one ordered stream.
//!
//! Local pointer input and the relay each hold an [`EventSender`]; the owner of
//! the [`CanvasState`] drains the queue with [`EventQueue::dispatch`]. Events
//! are applied strictly in arrival order on the draining thread, so the canvas
//! needs no locking.

use super::events::InputEvent;
use super::state::CanvasState;
use crate::draw::SurfaceError;
use log::trace;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Clonable handle for pushing events into an [`EventQueue`].
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: Sender<InputEvent>,
}

impl EventSender {
    /// Queues `event`. Returns `false` once the queue has been dropped.
    pub fn send(&self, event: InputEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

#[derive(Debug)]
pub struct EventQueue {
    tx: Sender<InputEvent>,
    rx: Receiver<InputEvent>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    /// Queues an event from the owning thread.
    pub fn push(&self, event: InputEvent) {
        // The receiver lives in `self`, so this cannot fail.
        let _ = self.tx.send(event);
    }

    /// Applies every queued event to `state` in arrival order.
    ///
    /// Returns the number of events applied. Stops at the first surface error;
    /// events queued after the failing one stay queued.
    pub fn dispatch(&self, state: &mut CanvasState) -> Result<usize, SurfaceError> {
        let mut applied = 0;
        loop {
            match self.rx.try_recv() {
                Ok(event) => {
                    trace!("Dispatching {event:?}");
                    state.handle_event(event)?;
                    applied += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::input::{BoardMode, Tool};
    use std::thread;

    #[test]
    fn dispatch_applies_events_in_order() {
        let config = Config::default();
        let mut state = CanvasState::new(&config, BoardMode::Light).unwrap();
        let queue = EventQueue::new();

        queue.push(InputEvent::SelectTool { tool: Tool::Line });
        queue.push(InputEvent::SelectTool { tool: Tool::Star });
        assert_eq!(queue.dispatch(&mut state).unwrap(), 2);
        assert_eq!(state.tool(), Tool::Star);
        assert_eq!(queue.dispatch(&mut state).unwrap(), 0);
    }

    #[test]
    fn senders_feed_from_other_threads() {
        let config = Config::default();
        let mut state = CanvasState::new(&config, BoardMode::Light).unwrap();
        let queue = EventQueue::new();
        let sender = queue.sender();

        thread::spawn(move || {
            assert!(sender.send(InputEvent::ToggleGrid));
            assert!(sender.send(InputEvent::SetBrushSize { size: 7.0 }));
        })
        .join()
        .unwrap();

        assert_eq!(queue.dispatch(&mut state).unwrap(), 2);
        assert!(state.grid().show);
        assert_eq!(state.style().width, 7.0);
    }

    #[test]
    fn sender_reports_dropped_queue() {
        let queue = EventQueue::new();
        let sender = queue.sender();
        drop(queue);
        assert!(!sender.send(InputEvent::Undo));
    }
}
