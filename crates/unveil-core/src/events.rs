//! Reveal lifecycle events.
//!
//! The controller emits events while it processes scroll updates and clock
//! ticks; hosts poll them after each cycle to react to reveal state changes
//! (analytics, chained effects, demo logging).
//!
//! # Usage
//!
//! ```ignore
//! controller.on_scroll(viewport);
//! controller.advance(16.7);
//!
//! for event in controller.drain_events() {
//!     match event {
//!         RevealEvent::PlaybackFinished { registration_id, .. } => { /* ... */ }
//!         _ => {}
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::types::{Direction, RegistrationId};

/// Event emitted when a registration changes state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RevealEvent {
    /// A sequence or timeline was registered and armed.
    Registered {
        registration_id: RegistrationId,
        anchor: String,
    },
    /// The anchor crossed into the trigger's start threshold.
    Entered {
        registration_id: RegistrationId,
        anchor: String,
    },
    /// The anchor crossed back out of the trigger's start threshold.
    Exited {
        registration_id: RegistrationId,
        anchor: String,
    },
    /// A playback started in the given direction.
    PlaybackStarted {
        registration_id: RegistrationId,
        direction: Direction,
    },
    /// Every step of the registration settled in the given direction.
    PlaybackFinished {
        registration_id: RegistrationId,
        direction: Direction,
    },
    /// The registration was cancelled because a tracked element it needs
    /// was removed. Values freeze where they were.
    Cancelled { registration_id: RegistrationId },
    /// The registration was released by the host.
    Released { registration_id: RegistrationId },
}

impl RevealEvent {
    /// Get the registration ID for this event.
    pub fn registration_id(&self) -> RegistrationId {
        match self {
            Self::Registered {
                registration_id, ..
            }
            | Self::Entered {
                registration_id, ..
            }
            | Self::Exited {
                registration_id, ..
            }
            | Self::PlaybackStarted {
                registration_id, ..
            }
            | Self::PlaybackFinished {
                registration_id, ..
            }
            | Self::Cancelled { registration_id }
            | Self::Released { registration_id } => *registration_id,
        }
    }

    /// Check if this event ends the registration's life.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled { .. } | Self::Released { .. })
    }
}

/// Queue for collecting reveal events during update cycles.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<RevealEvent>,
}

impl EventQueue {
    /// Create a new empty event queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event onto the queue.
    pub fn push(&mut self, event: RevealEvent) {
        self.events.push_back(event);
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get the number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Pop the next event from the queue.
    pub fn pop(&mut self) -> Option<RevealEvent> {
        self.events.pop_front()
    }

    /// Drain all events from the queue, returning an iterator.
    pub fn drain(&mut self) -> impl Iterator<Item = RevealEvent> + '_ {
        self.events.drain(..)
    }

    /// Peek at the next event without removing it.
    pub fn peek(&self) -> Option<&RevealEvent> {
        self.events.front()
    }

    /// Clear all pending events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Get pending events for a specific registration (without removing
    /// them).
    pub fn events_for(&self, id: RegistrationId) -> Vec<&RevealEvent> {
        self.events
            .iter()
            .filter(|e| e.registration_id() == id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accessors() {
        let id = RegistrationId(7);
        let event = RevealEvent::Entered {
            registration_id: id,
            anchor: "hero".to_string(),
        };

        assert_eq!(event.registration_id(), id);
        assert!(!event.is_terminal());
        assert!(RevealEvent::Released {
            registration_id: id
        }
        .is_terminal());
        assert!(RevealEvent::Cancelled {
            registration_id: id
        }
        .is_terminal());
    }

    #[test]
    fn test_queue_operations() {
        let mut queue = EventQueue::new();
        assert!(queue.is_empty());

        queue.push(RevealEvent::Registered {
            registration_id: RegistrationId(1),
            anchor: "a".to_string(),
        });
        queue.push(RevealEvent::PlaybackStarted {
            registration_id: RegistrationId(1),
            direction: Direction::Forward,
        });

        assert_eq!(queue.len(), 2);
        assert!(matches!(
            queue.peek(),
            Some(RevealEvent::Registered { .. })
        ));

        let first = queue.pop().unwrap();
        assert!(matches!(first, RevealEvent::Registered { .. }));
        assert_eq!(queue.len(), 1);

        let rest: Vec<_> = queue.drain().collect();
        assert_eq!(rest.len(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_events_for_registration() {
        let mut queue = EventQueue::new();
        queue.push(RevealEvent::Registered {
            registration_id: RegistrationId(1),
            anchor: "a".to_string(),
        });
        queue.push(RevealEvent::Registered {
            registration_id: RegistrationId(2),
            anchor: "b".to_string(),
        });
        queue.push(RevealEvent::Released {
            registration_id: RegistrationId(1),
        });

        assert_eq!(queue.events_for(RegistrationId(1)).len(), 2);
        assert_eq!(queue.events_for(RegistrationId(2)).len(), 1);
        assert_eq!(queue.events_for(RegistrationId(3)).len(), 0);
    }

    #[test]
    fn test_event_serialization() {
        let event = RevealEvent::PlaybackFinished {
            registration_id: RegistrationId(42),
            direction: Direction::Backward,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("playback_finished"));
        assert!(json.contains("backward"));

        let parsed: RevealEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, parsed);
    }
}
