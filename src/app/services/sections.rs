//! Pure scroll geometry: which section is active, how visible a card is,
//! and where an anchor scroll should land. Coordinates are in content
//! space, i.e. pixels from the top of the scrolled column.

use crate::app::domain::SectionId;

/// Fixed header height compensated when jumping to a section.
pub const HEADER_OFFSET: i32 = 80;

/// How far below the scroll position a section top may sit and still count
/// as the current section.
pub const ACTIVE_LOOKAHEAD: i32 = 160;

/// Cards start revealing slightly before they fully enter the viewport.
pub const REVEAL_BOTTOM_MARGIN: i32 = 50;

/// Fraction of a card that must be visible before it animates in.
pub const REVEAL_THRESHOLD: f32 = 0.10;

/// Fraction of the stats row that must be visible before counters start.
pub const STATS_THRESHOLD: f32 = 0.50;

/// Frames in an animated anchor scroll, at ~16 ms per frame.
pub const SCROLL_FRAMES: u32 = 15;
pub const SCROLL_FRAME_SECS: f64 = 0.016;

/// The section owning the current scroll position: the last one whose top
/// has crossed `scroll_y + ACTIVE_LOOKAHEAD`. `tops` must be in display
/// order. Above the first section, nothing is active.
pub fn active_section(tops: &[(SectionId, i32)], scroll_y: i32) -> Option<SectionId> {
    let threshold = scroll_y + ACTIVE_LOOKAHEAD;
    tops.iter()
        .take_while(|(_, top)| *top <= threshold)
        .last()
        .map(|(id, _)| *id)
}

/// Visible fraction of an element, with the viewport bottom pulled up by
/// `REVEAL_BOTTOM_MARGIN` so reveals trigger a little early.
pub fn visible_fraction(top: i32, height: i32, scroll_y: i32, viewport_h: i32) -> f32 {
    if height <= 0 || viewport_h <= 0 {
        return 0.0;
    }
    let view_top = scroll_y;
    let view_bottom = scroll_y + viewport_h - REVEAL_BOTTOM_MARGIN;
    let overlap = (top + height).min(view_bottom) - top.max(view_top);
    (overlap.max(0) as f32 / height as f32).min(1.0)
}

/// Where an anchor jump to a section lands, compensating for the fixed
/// header and clamping to the scrollable range.
pub fn anchor_target(section_top: i32, max_scroll: i32) -> i32 {
    (section_top - HEADER_OFFSET).clamp(0, max_scroll.max(0))
}

/// Position of an eased scroll at `frame` of `total` frames. Smoothstep,
/// exact endpoints.
pub fn eased_position(from: i32, to: i32, frame: u32, total: u32) -> i32 {
    if total == 0 || frame >= total {
        return to;
    }
    let t = frame as f64 / total as f64;
    let eased = t * t * (3.0 - 2.0 * t);
    from + ((to - from) as f64 * eased).round() as i32
}

/// The header swaps to its elevated look once scrolled past this point.
pub const HEADER_ELEVATION_AT: i32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    fn tops() -> Vec<(SectionId, i32)> {
        vec![
            (SectionId::Home, 0),
            (SectionId::About, 600),
            (SectionId::Skills, 1200),
            (SectionId::Contact, 2000),
        ]
    }

    #[test]
    fn test_active_section_picks_last_crossed() {
        assert_eq!(active_section(&tops(), 0), Some(SectionId::Home));
        assert_eq!(active_section(&tops(), 500), Some(SectionId::Home));
        // 600 <= 500 + 160 fails, 600 <= 440+160 exactly
        assert_eq!(active_section(&tops(), 440), Some(SectionId::About));
        assert_eq!(active_section(&tops(), 1900), Some(SectionId::Contact));
    }

    #[test]
    fn test_active_section_none_above_first() {
        let tops = vec![(SectionId::About, 600), (SectionId::Skills, 1200)];
        assert_eq!(active_section(&tops, 0), None);
    }

    #[test]
    fn test_visible_fraction_bounds() {
        // Fully above the viewport
        assert_eq!(visible_fraction(0, 100, 500, 400), 0.0);
        // Fully inside
        assert_eq!(visible_fraction(600, 100, 500, 400), 1.0);
        // Straddling the (margin-adjusted) bottom edge: viewport ends at
        // 500 + 400 - 50 = 850, so 40 of 100 px are visible
        let f = visible_fraction(810, 100, 500, 400);
        assert!((f - 0.4).abs() < 1e-6);
        // Degenerate geometry never reveals
        assert_eq!(visible_fraction(0, 0, 0, 400), 0.0);
        assert_eq!(visible_fraction(0, 100, 0, 0), 0.0);
    }

    #[test]
    fn test_anchor_target_offsets_and_clamps() {
        assert_eq!(anchor_target(600, 5000), 520);
        assert_eq!(anchor_target(40, 5000), 0);
        assert_eq!(anchor_target(4990, 4000), 4000);
        assert_eq!(anchor_target(40, -10), 0);
    }

    #[test]
    fn test_eased_position_endpoints_exact() {
        assert_eq!(eased_position(0, 520, 0, 15), 0);
        assert_eq!(eased_position(0, 520, 15, 15), 520);
        assert_eq!(eased_position(0, 520, 20, 15), 520);
        // Monotonic in between
        let mut last = 0;
        for frame in 0..=15 {
            let pos = eased_position(0, 520, frame, 15);
            assert!(pos >= last);
            last = pos;
        }
    }
}
