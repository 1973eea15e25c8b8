//! Vertical testimonial carousel
//!
//! Cards are stacked in a column and one is shown at a time. Arrow keys step
//! through them, wrapping at both ends. The renderer reads [`Carousel::offset`]
//! to translate the stack and [`Carousel::is_active`] to highlight a card.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Height of one card in pixels
pub const DEFAULT_CARD_HEIGHT: u32 = 370;

/// Errors from restoring a saved carousel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("current card {current} is outside 1..={last}")]
    CurrentOutOfRange { current: usize, last: usize },
}

/// Position within a fixed set of cards
///
/// `current` is one-based. An empty carousel sits at 1 and never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCarousel")]
pub struct Carousel {
    card_count: usize,
    current: usize,
}

/// Unchecked wire form of [`Carousel`]
#[derive(Deserialize)]
struct RawCarousel {
    card_count: usize,
    current: usize,
}

impl TryFrom<RawCarousel> for Carousel {
    type Error = CarouselError;

    fn try_from(raw: RawCarousel) -> Result<Self, Self::Error> {
        let last = raw.card_count.max(1);
        if raw.current == 0 || raw.current > last {
            return Err(CarouselError::CurrentOutOfRange {
                current: raw.current,
                last,
            });
        }
        Ok(Self {
            card_count: raw.card_count,
            current: raw.current,
        })
    }
}

impl Carousel {
    pub fn new(card_count: usize) -> Self {
        Self {
            card_count,
            current: 1,
        }
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// One-based index of the card on screen
    pub fn current(&self) -> usize {
        self.current
    }

    /// Advance one card, wrapping from the last to the first
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        if self.card_count == 0 {
            return false;
        }
        self.current = if self.current >= self.card_count {
            1
        } else {
            self.current + 1
        };
        debug!(current = self.current, "carousel next");
        true
    }

    /// Go back one card, wrapping from the first to the last
    pub fn prev(&mut self) -> bool {
        if self.card_count == 0 {
            return false;
        }
        self.current = if self.current <= 1 {
            self.card_count
        } else {
            self.current - 1
        };
        debug!(current = self.current, "carousel prev");
        true
    }

    /// Whether the card at zero-based `index` is the one on screen
    pub fn is_active(&self, index: usize) -> bool {
        self.card_count > 0 && index + 1 == self.current
    }

    /// Vertical translation of the card stack, in pixels
    pub fn offset(&self, card_height: u32) -> u64 {
        (self.current as u64).saturating_sub(1) * u64::from(card_height)
    }

    /// React to a key name (`"ArrowDown"`, `"ArrowUp"`). Returns whether the
    /// carousel moved.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowDown" => self.next(),
            "ArrowUp" => self.prev(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_on_first_card() {
        let carousel = Carousel::new(4);
        assert_eq!(carousel.current(), 1);
        assert!(carousel.is_active(0));
        assert!(!carousel.is_active(1));
        assert_eq!(carousel.offset(DEFAULT_CARD_HEIGHT), 0);
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), 3);
        assert_eq!(carousel.offset(DEFAULT_CARD_HEIGHT), 740);

        carousel.next();
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.current(), 3);
        assert!(carousel.is_active(2));
    }

    #[test]
    fn test_keys() {
        let mut carousel = Carousel::new(2);
        assert!(carousel.handle_key("ArrowDown"));
        assert_eq!(carousel.current(), 2);
        assert!(carousel.handle_key("ArrowUp"));
        assert_eq!(carousel.current(), 1);
        assert!(!carousel.handle_key("Enter"));
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_empty_carousel_never_moves() {
        let mut carousel = Carousel::new(0);
        assert!(!carousel.next());
        assert!(!carousel.handle_key("ArrowUp"));
        assert_eq!(carousel.current(), 1);
        assert!(!carousel.is_active(0));
        assert_eq!(carousel.offset(DEFAULT_CARD_HEIGHT), 0);
    }

    #[test]
    fn test_state_serializes() {
        let mut carousel = Carousel::new(5);
        carousel.next();
        let value = serde_json::to_value(carousel).unwrap();
        assert_eq!(value, serde_json::json!({"card_count": 5, "current": 2}));
    }

    #[test]
    fn test_state_round_trips() {
        let mut carousel = Carousel::new(5);
        carousel.prev();
        let json = serde_json::to_string(&carousel).unwrap();
        let restored: Carousel = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, carousel);
        assert_eq!(restored.current(), 5);
    }

    #[test]
    fn test_out_of_range_state_is_rejected() {
        for json in [
            r#"{"card_count":3,"current":0}"#,
            r#"{"card_count":3,"current":9}"#,
            r#"{"card_count":0,"current":2}"#,
        ] {
            let err = serde_json::from_str::<Carousel>(json).unwrap_err();
            assert!(err.to_string().contains("outside"), "{json}: {err}");
        }

        let empty: Carousel = serde_json::from_str(r#"{"card_count":0,"current":1}"#).unwrap();
        assert_eq!(empty.offset(DEFAULT_CARD_HEIGHT), 0);
    }

    #[test]
    fn test_range_error_message() {
        let err = Carousel::try_from(RawCarousel {
            card_count: 3,
            current: 4,
        })
        .unwrap_err();
        assert_eq!(err, CarouselError::CurrentOutOfRange { current: 4, last: 3 });
        assert_eq!(err.to_string(), "current card 4 is outside 1..=3");
    }

    proptest! {
        #[test]
        fn exactly_one_card_is_active(count in 1usize..12, steps in prop::collection::vec(any::<bool>(), 0..40)) {
            let mut carousel = Carousel::new(count);
            for down in steps {
                carousel.handle_key(if down { "ArrowDown" } else { "ArrowUp" });
            }
            let active = (0..count).filter(|&i| carousel.is_active(i)).count();
            prop_assert_eq!(active, 1);
        }

        #[test]
        fn full_cycle_returns_home(count in 1usize..12) {
            let mut carousel = Carousel::new(count);
            for _ in 0..count {
                carousel.next();
            }
            prop_assert_eq!(carousel.current(), 1);
        }
    }
}
