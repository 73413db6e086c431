// Copyright 2026 the Snapdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated settle: per-tick deceleration toward a snap target.

use kurbo::Vec2;

/// Squared distance below which a settling container snaps exactly to its
/// target (≈0.5 device units of linear distance).
pub const SNAP_EPSILON_SQUARED: f64 = 0.25;

/// Result of one settle step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SettleStep {
    /// Still in motion; the new container position.
    Moving(Vec2),
    /// Close enough: the position snapped exactly to the target. The host
    /// should zero any residual native scroll velocity so it cannot fight
    /// the snap.
    Arrived(Vec2),
}

impl SettleStep {
    /// Returns the position after the step, regardless of arrival.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        match *self {
            Self::Moving(p) | Self::Arrived(p) => p,
        }
    }

    /// Returns `true` if the step reached the target.
    #[must_use]
    pub fn is_arrived(&self) -> bool {
        matches!(self, Self::Arrived(_))
    }
}

/// Advances `position` toward `target` by one tick of duration `dt`.
///
/// The interpolation factor is `min(deceleration_rate × dt, 1.0)`; clamping
/// prevents overshoot on large ticks. Each step closes a fixed fraction of
/// the remaining distance, which yields an ease-out motion that terminates:
/// once the squared remaining distance drops below
/// [`SNAP_EPSILON_SQUARED`], the step reports [`SettleStep::Arrived`] with
/// the exact target position.
#[must_use]
pub fn settle_step(position: Vec2, target: Vec2, deceleration_rate: f64, dt: f64) -> SettleStep {
    let factor = (deceleration_rate * dt).min(1.0);
    let next = position + (target - position) * factor;
    if (next - target).hypot2() < SNAP_EPSILON_SQUARED {
        SettleStep::Arrived(target)
    } else {
        SettleStep::Moving(next)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{SettleStep, settle_step};

    #[test]
    fn step_moves_toward_target() {
        let step = settle_step(Vec2::ZERO, Vec2::new(100.0, 0.0), 10.0, 0.016);
        match step {
            SettleStep::Moving(p) => {
                assert!(p.x > 0.0 && p.x < 100.0, "moved partway: {p:?}");
            }
            SettleStep::Arrived(_) => panic!("should not arrive in one short tick"),
        }
    }

    #[test]
    fn factor_clamped_for_large_ticks() {
        // rate × dt far above 1: one step lands on the target, no overshoot.
        let step = settle_step(Vec2::ZERO, Vec2::new(100.0, 0.0), 10.0, 5.0);
        assert_eq!(step, SettleStep::Arrived(Vec2::new(100.0, 0.0)));
    }

    #[test]
    fn near_target_snaps_exactly() {
        let target = Vec2::new(100.0, 0.0);
        let step = settle_step(Vec2::new(99.9, 0.0), target, 10.0, 0.016);
        assert_eq!(step, SettleStep::Arrived(target));
        assert_eq!(step.position(), target);
    }

    #[test]
    fn terminates_in_bounded_ticks_from_any_distance() {
        for start_x in [1.0, 10.0, 500.0, 10_000.0] {
            let target = Vec2::ZERO;
            let mut position = Vec2::new(start_x, 0.0);
            let mut ticks = 0;
            loop {
                let step = settle_step(position, target, 10.0, 1.0 / 60.0);
                position = step.position();
                ticks += 1;
                if step.is_arrived() {
                    break;
                }
                assert!(ticks < 1_000, "settle from {start_x} did not terminate");
            }
            assert_eq!(position, target, "final position is exactly the target");
        }
    }
}
