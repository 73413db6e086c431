// Copyright 2026 the Snapdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indicator sync: one-of-N selection across page indicator visuals.
//!
//! The sync is headless: it tracks which indicator slot is selected and
//! reports the slots whose appearance must change as [`SelectionChange`]
//! values. Applying a change is the host's job — swap the slot's visual to
//! its selected/unselected asset and reset the visual's native display size.
//!
//! Misconfiguration never fails. A slot count that does not match the page
//! count disables the feature for the widget's lifetime; a slot whose visual
//! handle could not be resolved is skipped on selection changes. Both are
//! reported as [`IndicatorDiagnostic`] values the host can drain and log.

use alloc::vec::Vec;
use core::mem;

/// Host-side resolution status of one indicator child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorSlot {
    /// The child's visual handle resolved and can be restyled.
    Resolved,
    /// The child has no usable visual handle; selection changes skip it.
    Missing,
}

/// A non-fatal condition observed while configuring or driving indicators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorDiagnostic {
    /// Indicator child count differs from the page count; the feature is
    /// disabled entirely.
    CountMismatch {
        /// Number of indicator children the host resolved.
        indicators: usize,
        /// Number of pages in the deck.
        pages: usize,
    },
    /// An indicator child is missing its visual handle.
    MissingHandle {
        /// Index of the affected slot.
        index: usize,
    },
    /// A selection change touched a slot without a handle and skipped it.
    SlotSkipped {
        /// Index of the skipped slot.
        index: usize,
    },
}

/// Appearance updates the host must apply after a selection change.
///
/// `deselect` names the slot to restore to its unselected asset; `select`
/// names the slot to switch to its selected asset. Either may be `None`:
/// there was no previous selection, or the affected slot has no handle and
/// was skipped. Both updates include resetting the visual's native size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    /// Slot to restore to the unselected appearance, if any.
    pub deselect: Option<usize>,
    /// Slot to switch to the selected appearance, if any.
    pub select: Option<usize>,
}

/// Tracks the selected indicator across a set of per-page visuals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndicatorSync {
    enabled: bool,
    present: Vec<bool>,
    selected: Option<usize>,
    diagnostics: Vec<IndicatorDiagnostic>,
}

impl IndicatorSync {
    /// Creates a disabled sync; every [`Self::set_selection`] is a no-op.
    ///
    /// Use this when the host has no indicator assets configured.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Builds a sync over the host-resolved indicator `slots`.
    ///
    /// The feature is enabled only when `slots.len() == page_count`;
    /// otherwise the sync stays disabled and records a
    /// [`IndicatorDiagnostic::CountMismatch`] once. Missing slots are
    /// recorded per index and skipped defensively on later changes.
    #[must_use]
    pub fn new(slots: &[IndicatorSlot], page_count: usize) -> Self {
        if slots.len() != page_count {
            return Self {
                enabled: false,
                present: Vec::new(),
                selected: None,
                diagnostics: alloc::vec![IndicatorDiagnostic::CountMismatch {
                    indicators: slots.len(),
                    pages: page_count,
                }],
            };
        }

        let present: Vec<bool> = slots
            .iter()
            .map(|slot| matches!(slot, IndicatorSlot::Resolved))
            .collect();
        let diagnostics = present
            .iter()
            .enumerate()
            .filter(|(_, ok)| !**ok)
            .map(|(index, _)| IndicatorDiagnostic::MissingHandle { index })
            .collect();

        Self {
            enabled: true,
            present,
            selected: None,
            diagnostics,
        }
    }

    /// Returns `true` when the indicator feature is active.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the currently selected slot, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Moves the selection to `index`.
    ///
    /// Returns `None` when nothing changes: the sync is disabled, the index
    /// is already selected, or it is out of range. Otherwise returns the
    /// appearance updates the host must apply. The stored selection always
    /// advances, even when a missing handle forces a visual update to be
    /// skipped.
    pub fn set_selection(&mut self, index: usize) -> Option<SelectionChange> {
        if !self.enabled || self.selected == Some(index) || index >= self.present.len() {
            return None;
        }

        let deselect = match self.selected {
            Some(previous) if self.present[previous] => Some(previous),
            Some(previous) => {
                self.diagnostics
                    .push(IndicatorDiagnostic::SlotSkipped { index: previous });
                None
            }
            None => None,
        };
        let select = if self.present[index] {
            Some(index)
        } else {
            self.diagnostics
                .push(IndicatorDiagnostic::SlotSkipped { index });
            None
        };

        self.selected = Some(index);
        Some(SelectionChange { deselect, select })
    }

    /// Drains accumulated diagnostics for the host to report.
    pub fn take_diagnostics(&mut self) -> Vec<IndicatorDiagnostic> {
        mem::take(&mut self.diagnostics)
    }
}
