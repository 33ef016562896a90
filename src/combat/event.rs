//! Combat events for the presentation collaborator.
//!
//! The orchestrator publishes events to a queue the caller drains after
//! each request or step. Consumption is synchronous; nothing is delivered
//! across a scheduling boundary. This replaces engine-side callback hooks
//! with an explicit observer channel.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, InstanceId};
use crate::combat::session::CombatOutcome;
use crate::core::Side;

/// Something the presentation layer may want to react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// A new combat began; decks are built and starting hands drawn.
    CombatStarted,

    /// A side's turn began.
    TurnStarted { side: Side, turn: u32 },

    /// A side's turn ended.
    TurnEnded { side: Side },

    /// A card left a hand and resolved.
    CardPlayed {
        side: Side,
        instance: InstanceId,
        card: CardId,
    },

    /// Observable state changed; re-read the view.
    StateChanged,

    /// The combat ended.
    GameOver { outcome: CombatOutcome },
}

/// FIFO queue of pending events.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: Vec<CombatEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn publish(&mut self, event: CombatEvent) {
        self.events.push(event);
    }

    /// Take all pending events, oldest first.
    pub fn drain(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_and_drain_in_order() {
        let mut queue = EventQueue::new();

        queue.publish(CombatEvent::CombatStarted);
        queue.publish(CombatEvent::StateChanged);

        assert_eq!(queue.len(), 2);

        let events = queue.drain();
        assert_eq!(
            events,
            vec![CombatEvent::CombatStarted, CombatEvent::StateChanged]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_empty() {
        let mut queue = EventQueue::new();
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_event_serialization() {
        let event = CombatEvent::CardPlayed {
            side: Side::Player,
            instance: InstanceId::new(3),
            card: CardId::new(1),
        };

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: CombatEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
    }
}
