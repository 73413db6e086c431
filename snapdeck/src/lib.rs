// Copyright 2026 the Snapdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=snapdeck --heading-base-level=0

//! Snapdeck: a host-agnostic paged scroll-snap (carousel) core.
//!
//! This crate provides a small, headless state machine for a horizontally
//! paged container that always settles on exactly one page boundary. It
//! covers:
//!
//! - [`PageLayout`]: per-page snap positions and container geometry, derived
//!   once from viewport width and page count.
//! - Gesture classification ([`SwipeThresholds`], [`DragSession`]): telling a
//!   fast swipe (move exactly one page) from an ordinary drag (settle on the
//!   nearest page).
//! - The animated settle ([`settle_step`]): per-tick deceleration toward a
//!   snap target, with exact termination.
//! - [`IndicatorSync`]: a one-of-N selection across page indicator visuals
//!   that tracks the *nearest* page continuously during motion.
//! - [`Pager`]: the top-level controller owning the anchored position, the
//!   current page, and the phase machine, plus [`NavBindings`] for retained
//!   button/tab click wiring.
//!
//! It does **not** own any scene graph, input routing, or frame scheduling.
//! Hosts are expected to:
//!
//! - Apply [`PageLayout`] geometry to their transforms once at startup.
//! - Deliver drag begin/move/end events into the [`Pager`], passing unscaled
//!   monotonic timestamps for swipe timing.
//! - Call [`Pager::tick`] once per frame and mirror the returned position.
//! - Apply returned [`SelectionChange`] values to their indicator visuals
//!   (swap the sprite, reset its native size).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use snapdeck::{Pager, PagerConfig};
//!
//! // 3 pages in a 300-unit viewport, resting on page 0.
//! let mut pager = Pager::new(PagerConfig::default(), 300.0, 3);
//! assert_eq!(pager.layout().content_size(), Vec2::new(900.0, 0.0));
//!
//! // A quick flick: the host's scroll mechanics move the container and
//! // report positions in; timestamps are unscaled monotonic seconds.
//! pager.begin_drag();
//! let start = pager.position();
//! pager.drag_move(start, 10.0);
//! pager.drag_move(start - Vec2::new(150.0, 0.0), 10.05);
//! pager.end_drag(10.1);
//!
//! // Classified as a fast swipe: the pager heads for page 1.
//! assert_eq!(pager.current_page(), 1);
//!
//! // Drive the settle; a real host mirrors `update.position` every frame.
//! loop {
//!     let update = pager.tick(1.0 / 60.0);
//!     if update.arrived {
//!         break;
//!     }
//! }
//! assert_eq!(pager.nearest_page(), Some(1));
//! ```
//!
//! ## Design notes
//!
//! - Single-threaded and cooperative: input events are handled within the
//!   delivering call, one settle step runs per tick, and a new drag or
//!   target unconditionally supersedes an in-flight settle. The pager is
//!   the single writer of the anchored position and current page.
//! - Nothing fails: out-of-range indices clamp, indicator misconfiguration
//!   disables the feature with [`IndicatorDiagnostic`] data, and a deck
//!   with zero pages turns every operation into a no-op.
//! - Vertical paging, looping wraparound, and momentum physics beyond the
//!   single-parameter deceleration are intentionally out of scope.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod gesture;
mod indicator;
mod layout;
mod motion;
mod nav;
mod pager;

pub use gesture::{DragSession, SwipeDirection, SwipeThresholds};
pub use indicator::{IndicatorDiagnostic, IndicatorSlot, IndicatorSync, SelectionChange};
pub use layout::PageLayout;
pub use motion::{SNAP_EPSILON_SQUARED, SettleStep, settle_step};
pub use nav::{NavAction, NavBindings};
pub use pager::{Pager, PagerConfig, PagerHooks, PagerPhase, TickUpdate};
