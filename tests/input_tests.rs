// Host-side tests for scroll and pointer sampling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/core/input.rs");
}

use input::*;

#[test]
fn section_index_rounds_to_nearest_section() {
    let h = 800.0;
    assert_eq!(section_index(0.0, h), 0);
    assert_eq!(section_index(0.4 * h, h), 0);
    assert_eq!(section_index(1.4 * h, h), 1);
    assert_eq!(section_index(1.6 * h, h), 2);
    assert_eq!(section_index(2.0 * h, h), 2);
}

#[test]
fn section_index_handles_degenerate_viewport() {
    assert_eq!(section_index(500.0, 0.0), 0);
    assert_eq!(section_index(500.0, -10.0), 0);
    assert_eq!(section_index(f32::NAN, 800.0), 0);
    assert_eq!(section_index(f32::INFINITY, 800.0), 0);
}

#[test]
fn clamp_section_keeps_index_in_range() {
    assert_eq!(clamp_section(-3, 3), 0);
    assert_eq!(clamp_section(1, 3), 1);
    assert_eq!(clamp_section(7, 3), 2);
    assert_eq!(clamp_section(4, 0), 0);
}

#[test]
fn crossing_reported_once_per_boundary() {
    let h = 800.0;
    let mut sampler = InputSampler::new(3, 0.0);
    assert_eq!(sampler.on_scroll(0.2 * h, h), None);
    assert_eq!(
        sampler.on_scroll(0.6 * h, h),
        Some(BoundaryCrossed { from: 0, to: 1 })
    );
    // further samples inside the same section are silent
    assert_eq!(sampler.on_scroll(0.9 * h, h), None);
    assert_eq!(sampler.on_scroll(1.3 * h, h), None);
    assert_eq!(sampler.scroll().current_section, 1);
    assert_eq!(sampler.scroll().raw_scroll_y, 1.3 * h);
}

#[test]
fn crossing_backwards_reports_lower_section() {
    let h = 600.0;
    let mut sampler = InputSampler::new(3, 0.0);
    sampler.on_scroll(2.0 * h, h);
    assert_eq!(
        sampler.on_scroll(0.2 * h, h),
        Some(BoundaryCrossed { from: 2, to: 0 })
    );
}

#[test]
fn overscroll_is_clamped_and_never_refires() {
    let h = 700.0;
    let mut sampler = InputSampler::new(3, 0.0);
    assert_eq!(
        sampler.on_scroll(5.0 * h, h),
        Some(BoundaryCrossed { from: 0, to: 2 })
    );
    assert_eq!(sampler.on_scroll(6.0 * h, h), None);
    assert_eq!(sampler.on_scroll(-2.0 * h, h), Some(BoundaryCrossed { from: 2, to: 0 }));
    assert_eq!(sampler.on_scroll(-3.0 * h, h), None);
}

#[test]
fn initial_section_is_zero_even_when_scrolled() {
    let sampler = InputSampler::new(3, 1600.0);
    assert_eq!(sampler.scroll().current_section, 0);
    assert_eq!(sampler.scroll().raw_scroll_y, 1600.0);
}

#[test]
fn pointer_is_centred_on_viewport() {
    let vp = Viewport::new(1000.0, 500.0);
    let c = normalize_pointer(500.0, 250.0, &vp);
    assert_eq!(c, CursorOffset { x: 0.0, y: 0.0 });
    let c = normalize_pointer(0.0, 500.0, &vp);
    assert_eq!(c, CursorOffset { x: -0.5, y: 0.5 });
}

#[test]
fn pointer_sample_overwrites_previous() {
    let mut sampler = InputSampler::new(3, 0.0);
    sampler.on_pointer_move(0.1, 0.2);
    sampler.on_pointer_move(-0.3, 0.4);
    assert_eq!(sampler.cursor(), CursorOffset { x: -0.3, y: 0.4 });
}

#[test]
fn viewport_extents_are_sanitized() {
    let vp = Viewport::new(0.0, f32::NAN);
    assert_eq!(vp.width, 1.0);
    assert_eq!(vp.height, 1.0);
    assert_eq!(Viewport::new(1920.0, 1080.0).aspect(), 1920.0 / 1080.0);
}
