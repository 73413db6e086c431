// Copyright 2026 the Snapdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation bindings: retained click wiring for buttons and tabs.
//!
//! Hosts wire external click sources (previous/next buttons, an ordered tab
//! strip) to pager operations through a binding table built once at
//! initialization. Each binding occupies a stable slot; delivering a click
//! and tearing the wiring down both refer to that same retained entry, so
//! removal actually removes what was registered.

use alloc::vec::Vec;

use crate::indicator::SelectionChange;
use crate::pager::Pager;

/// A pager operation a click source can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Animate one page backward.
    Previous,
    /// Animate one page forward.
    Next,
    /// Jump directly to a page (clamped).
    Page(usize),
}

/// A table of click bindings with stable slot ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavBindings {
    actions: Vec<Option<NavAction>>,
}

impl NavBindings {
    /// Creates an empty binding table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates one [`NavAction::Page`] binding per page, index-aligned with
    /// page indices — the usual wiring for an ordered tab strip.
    #[must_use]
    pub fn for_tabs(page_count: usize) -> Self {
        Self {
            actions: (0..page_count).map(|i| Some(NavAction::Page(i))).collect(),
        }
    }

    /// Registers a binding and returns its slot id.
    ///
    /// Slot ids are stable: they never shift when other bindings are
    /// removed.
    pub fn bind(&mut self, action: NavAction) -> usize {
        self.actions.push(Some(action));
        self.actions.len() - 1
    }

    /// Removes the binding in `slot`. Unknown or already-removed slots are
    /// ignored.
    pub fn unbind(&mut self, slot: usize) {
        if let Some(entry) = self.actions.get_mut(slot) {
            *entry = None;
        }
    }

    /// Removes every binding; the teardown counterpart of initialization.
    pub fn clear(&mut self) {
        self.actions.clear();
    }

    /// Returns the action bound in `slot`, if any.
    #[must_use]
    pub fn action(&self, slot: usize) -> Option<NavAction> {
        self.actions.get(slot).copied().flatten()
    }

    /// Delivers a click on `slot` to the pager.
    ///
    /// Unknown or removed slots are no-ops. Returns indicator updates when
    /// the bound action produced any (only [`NavAction::Page`] does so
    /// immediately; the animated actions update indicators from later
    /// ticks).
    pub fn activate(&self, slot: usize, pager: &mut Pager) -> Option<SelectionChange> {
        match self.action(slot)? {
            NavAction::Previous => {
                pager.previous_page();
                None
            }
            NavAction::Next => {
                pager.next_page();
                None
            }
            NavAction::Page(index) => pager.set_page(index as isize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NavAction, NavBindings};
    use crate::pager::{Pager, PagerConfig, PagerPhase};

    fn pager() -> Pager {
        Pager::new(PagerConfig::default(), 300.0, 3)
    }

    #[test]
    fn tab_bindings_jump_to_their_page() {
        let bindings = NavBindings::for_tabs(3);
        let mut p = pager();
        bindings.activate(2, &mut p);
        assert_eq!(p.current_page(), 2);
        assert_eq!(p.phase(), PagerPhase::Idle);
    }

    #[test]
    fn prev_next_bindings_animate() {
        let mut bindings = NavBindings::new();
        let prev = bindings.bind(NavAction::Previous);
        let next = bindings.bind(NavAction::Next);

        let mut p = pager();
        bindings.activate(next, &mut p);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.phase(), PagerPhase::Settling);

        bindings.activate(prev, &mut p);
        assert_eq!(p.current_page(), 0);
    }

    #[test]
    fn unbind_removes_exactly_the_registered_slot() {
        let mut bindings = NavBindings::for_tabs(3);
        bindings.unbind(1);

        let mut p = pager();
        bindings.activate(1, &mut p);
        assert_eq!(p.current_page(), 0, "removed binding no longer fires");

        // Other slots keep their ids.
        bindings.activate(2, &mut p);
        assert_eq!(p.current_page(), 2);
    }

    #[test]
    fn cleared_table_ignores_clicks() {
        let mut bindings = NavBindings::for_tabs(3);
        bindings.clear();
        let mut p = pager();
        bindings.activate(0, &mut p);
        bindings.activate(2, &mut p);
        assert_eq!(p.current_page(), 0);
        assert_eq!(p.phase(), PagerPhase::Idle);
    }

    #[test]
    fn unknown_slots_are_no_ops() {
        let bindings = NavBindings::new();
        let mut p = pager();
        assert_eq!(bindings.activate(42, &mut p), None);
    }
}
