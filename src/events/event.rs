//! Animation events.
//!
//! The engine never renders or plays audio; it emits a timed event queue
//! that an external renderer maps to concrete visuals and sounds.

use serde::{Deserialize, Serialize};

use crate::combos::ComboId;
use crate::core::Side;

/// What an event shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Reveal,
    Ability,
    Buff,
    Debuff,
    Destroy,
    Combo,
}

/// One entry in the animation queue.
///
/// `delay_ms` values are non-decreasing across a built queue; ties keep
/// lane-then-side insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationEvent {
    /// What to show.
    pub event_type: EventType,

    /// Offset from the start of the queue.
    pub delay_ms: u32,

    /// Lane the event belongs to.
    pub lane: usize,

    /// Side the event belongs to.
    pub side: Side,

    /// Card the event concerns, if any.
    pub card_name: Option<String>,

    /// Signed power change for buff/debuff events.
    pub power_delta: Option<i64>,

    /// Combo identity for combo events.
    pub combo_id: Option<ComboId>,

    /// Sound descriptor for the renderer/audio layer.
    pub sound: Option<String>,
}

impl AnimationEvent {
    /// Create a bare event; optional fields start empty.
    #[must_use]
    pub fn new(event_type: EventType, delay_ms: u32, lane: usize, side: Side) -> Self {
        Self {
            event_type,
            delay_ms,
            lane,
            side,
            card_name: None,
            power_delta: None,
            combo_id: None,
            sound: None,
        }
    }

    /// Attach a card name (builder pattern).
    #[must_use]
    pub fn with_card_name(mut self, name: impl Into<String>) -> Self {
        self.card_name = Some(name.into());
        self
    }

    /// Attach a signed power delta (builder pattern).
    #[must_use]
    pub fn with_power_delta(mut self, delta: i64) -> Self {
        self.power_delta = Some(delta);
        self
    }

    /// Attach a combo id (builder pattern).
    #[must_use]
    pub fn with_combo(mut self, combo: ComboId) -> Self {
        self.combo_id = Some(combo);
        self
    }

    /// Attach a sound descriptor (builder pattern).
    #[must_use]
    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let event = AnimationEvent::new(EventType::Buff, 400, 1, Side::Opponent)
            .with_power_delta(25)
            .with_card_name("Dawn Sentinel");

        assert_eq!(event.event_type, EventType::Buff);
        assert_eq!(event.delay_ms, 400);
        assert_eq!(event.power_delta, Some(25));
        assert_eq!(event.card_name.as_deref(), Some("Dawn Sentinel"));
        assert!(event.combo_id.is_none());
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let event = AnimationEvent::new(EventType::Combo, 1000, 0, Side::Player)
            .with_combo(ComboId::new(3));
        let json = serde_json::to_string(&event).unwrap();
        let back: AnimationEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
