//! Scroll track geometry for continuous (desktop) reading.
//!
//! The track is cut into units of `viewport_height × scroll_unit_fraction`. The first unit
//! zooms the book in; page `i` flips while the scroll position crosses unit `i + 1`.

use crate::shared::animation::{AnimTarget, AnimationEngine, Props, ScrollRange};

const SCRUB_SECONDS: f64 = 1.0;

/// Scroll offset at which page `index` is fully shown.
pub fn offset_for_page(index: usize, unit: f64) -> f64 {
    (index as f64 + 1.0) * unit
}

/// Page whose flip the scroll position is currently in, if it exists.
pub fn page_at_offset(scroll_y: f64, unit: f64, total: usize) -> Option<usize> {
    if unit <= 0.0 || scroll_y < 0.0 || !scroll_y.is_finite() {
        return None;
    }
    let index = (scroll_y / unit).floor() as usize;
    (index < total).then_some(index)
}

/// Install the scroll-bound animations of the whole book.
pub fn install_bindings(engine: &dyn AnimationEngine, total: usize, unit: f64) {
    engine.bind_to_scroll(
        AnimTarget::Book,
        &Props::new().scale(1.0),
        ScrollRange {
            start: 0.0,
            end: unit,
            scrub: Some(SCRUB_SECONDS),
        },
    );

    // the last page never flips
    for index in 0..total.saturating_sub(1) {
        let i = index as f64;
        engine.bind_to_scroll(
            AnimTarget::Page(index),
            &Props::new().rotate_y(-(180.0 - i / 2.0)),
            ScrollRange {
                start: (i + 1.0) * unit,
                end: (i + 2.0) * unit,
                scrub: Some(SCRUB_SECONDS),
            },
        );
        engine.bind_to_scroll(
            AnimTarget::Page(index),
            &Props::new().z(if index == 0 { -(total as f64) } else { i }),
            ScrollRange {
                start: (i + 1.0) * unit,
                end: (i + 1.5) * unit,
                scrub: Some(SCRUB_SECONDS),
            },
        );
    }
}
