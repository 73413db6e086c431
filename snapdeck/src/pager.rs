// Copyright 2026 the Snapdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paging controller: top-level state holder and public API.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Vec2;

use crate::gesture::{DragSession, SwipeDirection, SwipeThresholds};
use crate::indicator::{IndicatorDiagnostic, IndicatorSlot, IndicatorSync, SelectionChange};
use crate::layout::PageLayout;
use crate::motion::settle_step;

/// Immutable pager configuration.
///
/// The defaults mirror common touch-UI tuning: a 0.3 s / 100-unit fast-swipe
/// window and a deceleration rate of 10.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagerConfig {
    /// Page shown at initialization.
    pub starting_page: usize,
    /// Maximum duration of a fast swipe, in seconds of unscaled time.
    pub fast_swipe_max_duration: f64,
    /// Minimum displacement of a fast swipe, in device units.
    pub fast_swipe_min_distance: f64,
    /// How quickly the container settles onto a page. Each tick closes
    /// `min(rate × dt, 1)` of the remaining distance.
    pub deceleration_rate: f64,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            starting_page: 0,
            fast_swipe_max_duration: 0.3,
            fast_swipe_min_distance: 100.0,
            deceleration_rate: 10.0,
        }
    }
}

/// Which top-level state the pager is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerPhase {
    /// At rest on a page boundary.
    Idle,
    /// A pointer drag is in progress; the host's scroll mechanics own the
    /// container's motion.
    Dragging,
    /// Animating toward a snap target.
    Settling,
}

/// Internal phase with its per-state payload. Illegal combinations (for
/// example dragging while settling) are unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Dragging { session: Option<DragSession> },
    Settling { target: Vec2 },
}

/// What one scheduler tick produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickUpdate {
    /// The container position after this tick; the host mirrors it into its
    /// transform.
    pub position: Vec2,
    /// The settle reached its target this tick. The host should zero any
    /// residual native scroll velocity so it cannot fight the snap.
    pub arrived: bool,
    /// Indicator appearance updates to apply, if the nearest page changed.
    pub selection: Option<SelectionChange>,
}

/// Injected extension points, invoked by the pager at fixed lifecycle
/// moments.
///
/// Both methods default to no-ops, so a specialized variant only overrides
/// what it needs. Hooks receive the pager itself and may call any of its
/// operations.
pub trait PagerHooks {
    /// Called once, when the hooks are attached.
    fn on_init(&mut self, pager: &mut Pager) {
        let _ = pager;
    }

    /// Called at the end of every [`Pager::tick`], regardless of phase.
    fn on_tick(&mut self, pager: &mut Pager) {
        let _ = pager;
    }
}

/// A horizontally-paged, swipe-driven carousel core.
///
/// The pager owns the authoritative anchored position and the current page
/// index; it is the single writer of both. The host mirrors
/// [`Pager::position`] into its transform after every call, feeds drag
/// events in through [`Pager::begin_drag`] / [`Pager::drag_move`] /
/// [`Pager::end_drag`], and drives the settle animation with one
/// [`Pager::tick`] per frame.
///
/// All page-index inputs are clamped into range; with zero pages every
/// operation is a no-op. No operation fails.
pub struct Pager {
    config: PagerConfig,
    layout: PageLayout,
    position: Vec2,
    current_page: usize,
    phase: Phase,
    indicators: IndicatorSync,
    hooks: Option<Box<dyn PagerHooks>>,
}

impl fmt::Debug for Pager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("config", &self.config)
            .field("layout", &self.layout)
            .field("position", &self.position)
            .field("current_page", &self.current_page)
            .field("phase", &self.phase)
            .field("indicators", &self.indicators)
            .finish_non_exhaustive()
    }
}

impl Pager {
    /// Creates a pager for `page_count` pages in a viewport of
    /// `viewport_width` device units, positioned on the configured starting
    /// page (clamped into range).
    #[must_use]
    pub fn new(config: PagerConfig, viewport_width: f64, page_count: usize) -> Self {
        let layout = PageLayout::compute(viewport_width, page_count);
        let mut pager = Self {
            config,
            position: layout.initial_position(),
            current_page: 0,
            phase: Phase::Idle,
            indicators: IndicatorSync::disabled(),
            hooks: None,
            layout,
        };
        pager.set_page(config.starting_page as isize);
        pager
    }

    /// Returns the configuration the pager was built with.
    #[must_use]
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Returns the page geometry, for the host's one-time layout pass.
    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Returns the current anchored container position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Returns the current page index.
    ///
    /// While settling this reflects *intent* — the page the animation is
    /// heading to — not the settled position. With zero pages it stays `0`.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns which top-level state the pager is in.
    #[must_use]
    pub fn phase(&self) -> PagerPhase {
        match self.phase {
            Phase::Idle => PagerPhase::Idle,
            Phase::Dragging { .. } => PagerPhase::Dragging,
            Phase::Settling { .. } => PagerPhase::Settling,
        }
    }

    /// Returns the page whose snap position is closest to the current
    /// container position, or `None` with zero pages.
    #[must_use]
    pub fn nearest_page(&self) -> Option<usize> {
        self.layout.nearest_page(self.position)
    }

    /// Jumps to `index` (clamped) with no animation.
    ///
    /// Cancels any in-flight motion or drag, moves the container exactly
    /// onto the page's snap position, and syncs the indicator selection.
    /// Idempotent; a no-op with zero pages.
    pub fn set_page(&mut self, index: isize) -> Option<SelectionChange> {
        let index = self.layout.clamp_index(index)?;
        let snap = self.layout.snap_position(index)?;
        self.position = snap;
        self.current_page = index;
        self.phase = Phase::Idle;
        self.indicators.set_selection(index)
    }

    /// Starts an animated settle toward `index` (clamped).
    ///
    /// The current page is updated *before* the animation completes — it
    /// reflects where the pager is heading. Supersedes any previous target
    /// unconditionally; a no-op with zero pages.
    pub fn lerp_to_page(&mut self, index: isize) {
        let Some(index) = self.layout.clamp_index(index) else {
            return;
        };
        let Some(target) = self.layout.snap_position(index) else {
            return;
        };
        self.phase = Phase::Settling { target };
        self.current_page = index;
    }

    /// Animates one page forward.
    pub fn next_page(&mut self) {
        self.lerp_to_page(self.current_page as isize + 1);
    }

    /// Animates one page backward.
    pub fn previous_page(&mut self) {
        self.lerp_to_page(self.current_page as isize - 1);
    }

    /// Notifies the pager that a pointer drag began.
    ///
    /// Always cancels an in-flight settle before any further position
    /// write, so a stale animation can never fight the live drag. The drag
    /// session itself only opens on the first [`Self::drag_move`].
    pub fn begin_drag(&mut self) {
        self.phase = Phase::Dragging { session: None };
    }

    /// Reports the container position during a drag.
    ///
    /// The host's own scroll mechanics move the container while dragging;
    /// the pager only records where it is. The first move after
    /// [`Self::begin_drag`] opens the drag session, snapshotting `now`
    /// (unscaled monotonic seconds) and the position; subsequent moves keep
    /// the indicator previewing the nearest page.
    ///
    /// Ignored outside a drag.
    pub fn drag_move(&mut self, position: Vec2, now: f64) -> Option<SelectionChange> {
        let Phase::Dragging { session } = self.phase else {
            return None;
        };
        self.position = position;
        if session.is_none() {
            self.phase = Phase::Dragging {
                session: Some(DragSession {
                    started_at: now,
                    origin: position,
                }),
            };
            return None;
        }
        let nearest = self.layout.nearest_page(self.position)?;
        self.indicators.set_selection(nearest)
    }

    /// Finishes a drag and chooses where to settle.
    ///
    /// A quick gesture whose displacement lies strictly between the
    /// configured minimum and one viewport width is a fast swipe and moves
    /// exactly one page in the gesture's direction. Everything else —
    /// including a drag that never produced a move event — settles on the
    /// nearest page.
    ///
    /// Ignored outside a drag.
    pub fn end_drag(&mut self, now: f64) {
        let Phase::Dragging { session } = self.phase else {
            return;
        };
        self.phase = Phase::Idle;

        let Some(session) = session else {
            self.settle_nearest();
            return;
        };

        let thresholds = SwipeThresholds {
            max_duration: self.config.fast_swipe_max_duration,
            min_distance: self.config.fast_swipe_min_distance,
            max_distance: self.layout.viewport_width(),
        };
        let displacement = session.displacement_x(self.position);
        match thresholds.classify(displacement, now - session.started_at) {
            Some(SwipeDirection::Forward) => self.next_page(),
            Some(SwipeDirection::Backward) => self.previous_page(),
            None => self.settle_nearest(),
        }
    }

    /// Advances the pager by one scheduler tick of `dt` seconds.
    ///
    /// While settling, this performs exactly one deceleration step and
    /// keeps the indicator tracking the nearest page; on arrival the
    /// position equals the target exactly and the phase returns to idle.
    /// In other phases the tick only runs the [`PagerHooks::on_tick`] hook.
    pub fn tick(&mut self, dt: f64) -> TickUpdate {
        let mut arrived = false;
        let mut selection = None;

        if let Phase::Settling { target } = self.phase {
            let step = settle_step(self.position, target, self.config.deceleration_rate, dt);
            self.position = step.position();
            if step.is_arrived() {
                self.phase = Phase::Idle;
                arrived = true;
            }
            if let Some(nearest) = self.layout.nearest_page(self.position) {
                selection = self.indicators.set_selection(nearest);
            }
        }

        self.run_tick_hook();
        TickUpdate {
            position: self.position,
            arrived,
            selection,
        }
    }

    /// Attaches extension hooks, firing [`PagerHooks::on_init`] immediately.
    ///
    /// Replaces any previously attached hooks.
    pub fn attach_hooks(&mut self, mut hooks: Box<dyn PagerHooks>) {
        hooks.on_init(self);
        self.hooks = Some(hooks);
    }

    /// Enables indicator sync over the host-resolved `slots` and selects
    /// the current page.
    ///
    /// The feature stays disabled (with a diagnostic) when the slot count
    /// does not match the page count; see [`IndicatorSync::new`].
    pub fn enable_indicators(&mut self, slots: &[IndicatorSlot]) -> Option<SelectionChange> {
        self.indicators = IndicatorSync::new(slots, self.layout.page_count());
        if self.layout.is_empty() {
            return None;
        }
        self.indicators.set_selection(self.current_page)
    }

    /// Returns the indicator sync state.
    #[must_use]
    pub fn indicators(&self) -> &IndicatorSync {
        &self.indicators
    }

    /// Drains indicator diagnostics for the host to report.
    pub fn take_indicator_diagnostics(&mut self) -> Vec<IndicatorDiagnostic> {
        self.indicators.take_diagnostics()
    }

    fn settle_nearest(&mut self) {
        if let Some(nearest) = self.layout.nearest_page(self.position) {
            self.lerp_to_page(nearest as isize);
        }
    }

    fn run_tick_hook(&mut self) {
        if let Some(mut hooks) = self.hooks.take() {
            hooks.on_tick(self);
            // The hook itself may have attached replacement hooks.
            if self.hooks.is_none() {
                self.hooks = Some(hooks);
            }
        }
    }
}
