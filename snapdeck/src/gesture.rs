// Copyright 2026 the Snapdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture classification: drag sessions and fast-swipe detection.
//!
//! A [`DragSession`] is opened on the first drag-move after a drag begins
//! and discarded when the drag ends. Timestamps are plain `f64` seconds from
//! an **unscaled** monotonic clock supplied by the host, so global playback
//! speed scaling never affects swipe timing.
//!
//! At drag end, [`SwipeThresholds::classify`] decides between a fast swipe
//! (an explicit request to move exactly one page) and a nearest-page settle.

use kurbo::Vec2;

/// State captured at the first drag-move of a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Unscaled monotonic time at which the gesture started, in seconds.
    pub started_at: f64,
    /// Container position when the gesture started.
    pub origin: Vec2,
}

impl DragSession {
    /// Horizontal displacement of the container since the gesture started.
    ///
    /// Positive values mean the content moved toward later pages.
    #[must_use]
    pub fn displacement_x(&self, position: Vec2) -> f64 {
        self.origin.x - position.x
    }
}

/// Direction of a recognized fast swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Advance one page (toward higher indices).
    Forward,
    /// Go back one page (toward lower indices).
    Backward,
}

/// Thresholds separating a fast swipe from an ordinary drag.
///
/// A gesture is a fast swipe only when it is *quick* (shorter than
/// `max_duration`) and *decisive but bounded*: its displacement magnitude
/// must exceed `min_distance` yet stay below `max_distance` (conventionally
/// one viewport width — anything longer is a deliberate multi-page drag,
/// not a swipe).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeThresholds {
    /// Maximum gesture duration, in seconds of unscaled time.
    pub max_duration: f64,
    /// Minimum displacement magnitude, in device units.
    pub min_distance: f64,
    /// Maximum displacement magnitude, in device units.
    pub max_distance: f64,
}

impl SwipeThresholds {
    /// Classifies a finished gesture.
    ///
    /// Returns the swipe direction when the gesture qualifies as a fast
    /// swipe, or `None` for a nearest-page settle.
    #[must_use]
    pub fn classify(&self, displacement_x: f64, elapsed: f64) -> Option<SwipeDirection> {
        let magnitude = displacement_x.abs();
        if elapsed < self.max_duration
            && magnitude > self.min_distance
            && magnitude < self.max_distance
        {
            if displacement_x > 0.0 {
                Some(SwipeDirection::Forward)
            } else {
                Some(SwipeDirection::Backward)
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{DragSession, SwipeDirection, SwipeThresholds};

    const THRESHOLDS: SwipeThresholds = SwipeThresholds {
        max_duration: 0.3,
        min_distance: 100.0,
        max_distance: 300.0,
    };

    #[test]
    fn quick_decisive_gesture_is_a_swipe() {
        assert_eq!(
            THRESHOLDS.classify(150.0, 0.1),
            Some(SwipeDirection::Forward)
        );
        assert_eq!(
            THRESHOLDS.classify(-150.0, 0.1),
            Some(SwipeDirection::Backward)
        );
    }

    #[test]
    fn slow_gesture_is_not_a_swipe() {
        assert_eq!(THRESHOLDS.classify(150.0, 0.5), None);
    }

    #[test]
    fn short_gesture_is_not_a_swipe() {
        assert_eq!(THRESHOLDS.classify(50.0, 0.1), None);
        // Exactly at the minimum distance does not qualify.
        assert_eq!(THRESHOLDS.classify(100.0, 0.1), None);
    }

    #[test]
    fn page_length_gesture_is_a_drag_not_a_swipe() {
        assert_eq!(THRESHOLDS.classify(300.0, 0.1), None);
        assert_eq!(THRESHOLDS.classify(450.0, 0.1), None);
    }

    #[test]
    fn duration_boundary_is_exclusive() {
        assert_eq!(THRESHOLDS.classify(150.0, 0.3), None);
        assert!(THRESHOLDS.classify(150.0, 0.299).is_some());
    }

    #[test]
    fn displacement_sign_follows_content_motion() {
        let session = DragSession {
            started_at: 1.0,
            origin: Vec2::new(450.0, 0.0),
        };
        // Container moved left: content advanced toward later pages.
        assert_eq!(session.displacement_x(Vec2::new(300.0, 0.0)), 150.0);
        // Container moved right: content retreated toward earlier pages.
        assert_eq!(session.displacement_x(Vec2::new(600.0, 0.0)), -150.0);
    }
}
