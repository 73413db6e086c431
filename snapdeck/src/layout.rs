// Copyright 2026 the Snapdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Vec2;

/// Immutable page geometry, derived once at initialization.
///
/// For a viewport of width `w` holding `n` fixed-width pages laid out
/// contiguously, page `i` sits at the child offset
/// `(i*w − n*w/2 + w/2, 0)` inside the container. The container has to move
/// in the opposite direction to bring a page into view, so the snap position
/// for page `i` is the **negation** of its child offset.
///
/// Hosts are expected to, once, after [`PageLayout::compute`]:
/// - size the container to [`PageLayout::content_size`],
/// - place the container at [`PageLayout::initial_position`],
/// - place each page child at its entry in [`PageLayout::child_offsets`].
///
/// The layout is not responsive: it captures the viewport width available at
/// construction time and is never recomputed.
#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout {
    viewport_width: f64,
    child_offsets: Vec<Vec2>,
    snap_positions: Vec<Vec2>,
    content_size: Vec2,
}

impl PageLayout {
    /// Computes page geometry for `page_count` pages in a viewport of
    /// `viewport_width` device units.
    ///
    /// A `page_count` of zero produces an empty table; all index-based
    /// queries on the resulting layout return `None`.
    #[must_use]
    pub fn compute(viewport_width: f64, page_count: usize) -> Self {
        let total_width = viewport_width * page_count as f64;
        let center_offset = viewport_width / 2.0;

        let mut child_offsets = Vec::with_capacity(page_count);
        let mut snap_positions = Vec::with_capacity(page_count);
        for i in 0..page_count {
            let offset = Vec2::new(
                i as f64 * viewport_width - total_width / 2.0 + center_offset,
                0.0,
            );
            child_offsets.push(offset);
            snap_positions.push(-offset);
        }

        Self {
            viewport_width,
            child_offsets,
            snap_positions,
            content_size: Vec2::new(total_width, 0.0),
        }
    }

    /// Returns the viewport width the layout was computed for.
    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Returns the number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.snap_positions.len()
    }

    /// Returns `true` if the layout holds no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snap_positions.is_empty()
    }

    /// Returns the layout offset of each page child inside the container,
    /// index-aligned with page indices.
    #[must_use]
    pub fn child_offsets(&self) -> &[Vec2] {
        &self.child_offsets
    }

    /// Returns the container position that centers each page in the
    /// viewport, index-aligned with page indices.
    #[must_use]
    pub fn snap_positions(&self) -> &[Vec2] {
        &self.snap_positions
    }

    /// Returns the snap position for `index`, or `None` when out of range.
    #[must_use]
    pub fn snap_position(&self, index: usize) -> Option<Vec2> {
        self.snap_positions.get(index).copied()
    }

    /// Returns the container size: `(viewport_width × page_count, 0)`.
    #[must_use]
    pub fn content_size(&self) -> Vec2 {
        self.content_size
    }

    /// Returns the initial container position, at half the content extent.
    #[must_use]
    pub fn initial_position(&self) -> Vec2 {
        self.content_size / 2.0
    }

    /// Clamps a (possibly negative) page index into `[0, page_count)`.
    ///
    /// Returns `None` when the layout is empty, so callers never index into
    /// an empty table.
    #[must_use]
    pub fn clamp_index(&self, index: isize) -> Option<usize> {
        if self.snap_positions.is_empty() {
            return None;
        }
        let max = self.snap_positions.len() - 1;
        if index <= 0 {
            Some(0)
        } else {
            Some((index as usize).min(max))
        }
    }

    /// Returns the page whose snap position is closest to `position`,
    /// by squared Euclidean distance.
    ///
    /// Ties go to the first such index in ascending order. Returns `None`
    /// when the layout is empty.
    #[must_use]
    pub fn nearest_page(&self, position: Vec2) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, snap) in self.snap_positions.iter().enumerate() {
            let dist = (position - *snap).hypot2();
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((i, dist)),
            }
        }
        best.map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::PageLayout;

    #[test]
    fn table_length_matches_page_count() {
        for count in 0..8 {
            let layout = PageLayout::compute(300.0, count);
            assert_eq!(layout.page_count(), count);
            assert_eq!(layout.snap_positions().len(), count);
            assert_eq!(layout.child_offsets().len(), count);
        }
    }

    #[test]
    fn snap_positions_evenly_spaced_and_monotonic() {
        let width = 300.0;
        let layout = PageLayout::compute(width, 5);
        let positions = layout.snap_positions();
        for pair in positions.windows(2) {
            let step = pair[1].x - pair[0].x;
            assert!((step.abs() - width).abs() < 1e-9);
            assert!(pair[1].x < pair[0].x, "snap positions descend as pages advance");
        }
        for p in positions {
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn snap_position_is_negated_child_offset() {
        let layout = PageLayout::compute(250.0, 4);
        for i in 0..4 {
            let child = layout.child_offsets()[i];
            assert_eq!(layout.snap_position(i), Some(-child));
        }
    }

    #[test]
    fn content_size_and_initial_position() {
        let layout = PageLayout::compute(300.0, 3);
        assert_eq!(layout.content_size(), Vec2::new(900.0, 0.0));
        assert_eq!(layout.initial_position(), Vec2::new(450.0, 0.0));
    }

    #[test]
    fn clamp_index_bounds() {
        let layout = PageLayout::compute(100.0, 3);
        assert_eq!(layout.clamp_index(-5), Some(0));
        assert_eq!(layout.clamp_index(0), Some(0));
        assert_eq!(layout.clamp_index(2), Some(2));
        assert_eq!(layout.clamp_index(8), Some(2));
    }

    #[test]
    fn empty_layout_is_inert() {
        let layout = PageLayout::compute(300.0, 0);
        assert!(layout.is_empty());
        assert_eq!(layout.clamp_index(0), None);
        assert_eq!(layout.snap_position(0), None);
        assert_eq!(layout.nearest_page(Vec2::ZERO), None);
        assert_eq!(layout.content_size(), Vec2::ZERO);
    }

    #[test]
    fn nearest_page_picks_minimal_distance() {
        let layout = PageLayout::compute(300.0, 3);
        for i in 0..3 {
            let snap = layout.snap_position(i).unwrap();
            assert_eq!(layout.nearest_page(snap), Some(i));
            // A probe well within half a page of the snap still resolves to it.
            assert_eq!(layout.nearest_page(snap + Vec2::new(75.0, 0.0)), Some(i));
        }
    }

    #[test]
    fn nearest_page_ties_break_ascending() {
        let layout = PageLayout::compute(300.0, 3);
        let a = layout.snap_position(0).unwrap();
        let b = layout.snap_position(1).unwrap();
        let midpoint = (a + b) / 2.0;
        assert_eq!(layout.nearest_page(midpoint), Some(0));
    }
}
