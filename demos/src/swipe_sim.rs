// Copyright 2026 the Snapdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A terminal host simulation for the snapdeck pager.
//!
//! Plays three gestures against a 3-page, 300-unit deck — a fast swipe, a
//! slow drag, and a tab-button jump — printing the container position and
//! the indicator strip frame by frame.

use kurbo::Vec2;
use snapdeck::{
    IndicatorSlot, NavBindings, Pager, PagerConfig, SelectionChange, TickUpdate,
};

const FRAME: f64 = 1.0 / 60.0;

/// The host's view of the indicator strip: one glyph per page.
struct Strip {
    selected: Vec<bool>,
}

impl Strip {
    fn new(n: usize) -> Self {
        Self {
            selected: vec![false; n],
        }
    }

    fn apply(&mut self, change: Option<SelectionChange>) {
        let Some(change) = change else { return };
        // A real host swaps sprites and resets their native size here.
        if let Some(i) = change.deselect {
            self.selected[i] = false;
        }
        if let Some(i) = change.select {
            self.selected[i] = true;
        }
    }

    fn render(&self) -> String {
        self.selected
            .iter()
            .map(|s| if *s { '●' } else { '○' })
            .collect()
    }
}

fn run_to_rest(pager: &mut Pager, strip: &mut Strip, clock: &mut f64) {
    loop {
        let TickUpdate {
            position,
            arrived,
            selection,
        } = pager.tick(FRAME);
        *clock += FRAME;
        strip.apply(selection);
        println!(
            "  t={clock:7.3}  x={:8.2}  page={}  [{}]",
            position.x,
            pager.current_page(),
            strip.render()
        );
        if arrived {
            // Here a host would also zero its native scroll velocity.
            break;
        }
    }
}

fn drag(
    pager: &mut Pager,
    strip: &mut Strip,
    clock: &mut f64,
    delta: Vec2,
    duration: f64,
    label: &str,
) {
    println!("{label}");
    pager.begin_drag();
    let start = pager.position();
    let steps = 6;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let change = pager.drag_move(start + delta * t, *clock + duration * t);
        strip.apply(change);
    }
    *clock += duration;
    pager.end_drag(*clock);
}

fn main() {
    let mut clock = 0.0;
    let mut pager = Pager::new(PagerConfig::default(), 300.0, 3);
    let mut strip = Strip::new(3);
    strip.apply(pager.enable_indicators(&[IndicatorSlot::Resolved; 3]));
    for diagnostic in pager.take_indicator_diagnostics() {
        eprintln!("indicator: {diagnostic:?}");
    }

    let tabs = NavBindings::for_tabs(3);

    println!("resting on page {} [{}]", pager.current_page(), strip.render());

    drag(
        &mut pager,
        &mut strip,
        &mut clock,
        Vec2::new(-150.0, 0.0),
        0.1,
        "fast swipe forward (150 units in 0.1s):",
    );
    run_to_rest(&mut pager, &mut strip, &mut clock);

    drag(
        &mut pager,
        &mut strip,
        &mut clock,
        Vec2::new(-150.0, 0.0),
        0.5,
        "slow drag (150 units in 0.5s, settles on nearest):",
    );
    run_to_rest(&mut pager, &mut strip, &mut clock);

    println!("tab button 0 (instant jump):");
    strip.apply(tabs.activate(0, &mut pager));
    println!(
        "  t={clock:7.3}  x={:8.2}  page={}  [{}]",
        pager.position().x,
        pager.current_page(),
        strip.render()
    );
}
