// Host-side tests for easing curves and the relative tween runner.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod story_core {
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
}

use glam::Vec3;
use story_core::scene::TrackedObject;
use story_core::tween::*;

const EPS: f32 = 1e-4;

fn objects() -> Vec<TrackedObject> {
    (0..3).map(|i| TrackedObject::new(i, 0.0, 6.0)).collect()
}

fn spin_request(index: usize, duration: f32) -> TweenRequest {
    TweenRequest {
        target: TweenTarget::Rotation(index),
        delta: Vec3::new(6.0, 3.0, 6.0),
        duration,
        easing: Easing::Power2InOut,
    }
}

#[test]
fn easing_endpoints_are_fixed() {
    for e in [
        Easing::Linear,
        Easing::Power2In,
        Easing::Power2Out,
        Easing::Power2InOut,
    ] {
        assert_eq!(e.apply(0.0), 0.0, "{:?}", e);
        assert!((e.apply(1.0) - 1.0).abs() < EPS, "{:?}", e);
        // out-of-range input is clamped
        assert_eq!(e.apply(-1.0), 0.0);
        assert!((e.apply(2.0) - 1.0).abs() < EPS);
    }
    assert!((Easing::Power2InOut.apply(0.5) - 0.5).abs() < EPS);
}

#[test]
fn power2_curves_are_cubic() {
    let e = Easing::Power2InOut;
    assert_eq!(e.apply(0.25), 0.0625);
    assert_eq!(e.apply(0.75), 0.9375);
    assert!((e.apply(0.9) - 0.996).abs() < EPS);
    assert_eq!(Easing::Power2In.apply(0.5), 0.125);
    assert_eq!(Easing::Power2Out.apply(0.5), 0.875);
}

#[test]
fn easing_is_monotonic() {
    for e in [Easing::Power2In, Easing::Power2Out, Easing::Power2InOut] {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = e.apply(i as f32 / 100.0);
            assert!(v >= prev, "{:?} at {}", e, i);
            prev = v;
        }
    }
}

#[test]
fn finished_tween_adds_exact_delta() {
    let mut objs = objects();
    let mut tweener = Tweener::new();
    tweener.animate(spin_request(1, 2.0));
    for _ in 0..200 {
        tweener.advance(1.0 / 60.0, &mut objs);
    }
    assert!(tweener.is_idle());
    let r = objs[1].rotation;
    assert!((r - Vec3::new(6.0, 3.0, 6.0)).abs().max_element() < EPS, "{:?}", r);
    assert_eq!(objs[0].rotation, Vec3::ZERO);
    assert_eq!(objs[2].rotation, Vec3::ZERO);
}

#[test]
fn step_size_does_not_change_result() {
    let mut coarse = objects();
    let mut fine = objects();
    let mut a = Tweener::new();
    let mut b = Tweener::new();
    a.animate(spin_request(0, 2.0));
    b.animate(spin_request(0, 2.0));
    a.advance(1.0, &mut coarse);
    for _ in 0..4 {
        b.advance(0.25, &mut fine);
    }
    assert!((coarse[0].rotation - fine[0].rotation).abs().max_element() < EPS);
    assert_eq!(a.active_count(), 1);
}

#[test]
fn overlapping_tweens_accumulate() {
    let mut objs = objects();
    let mut tweener = Tweener::new();
    tweener.animate(spin_request(2, 2.0));
    tweener.advance(1.0, &mut objs);
    tweener.animate(spin_request(2, 2.0));
    assert_eq!(tweener.active_count(), 2);
    for _ in 0..10 {
        tweener.advance(0.5, &mut objs);
    }
    assert!(tweener.is_idle());
    let r = objs[2].rotation;
    assert!((r - Vec3::new(12.0, 6.0, 12.0)).abs().max_element() < EPS, "{:?}", r);
}

#[test]
fn zero_duration_applies_immediately() {
    let mut objs = objects();
    let mut tweener = Tweener::new();
    tweener.animate(spin_request(0, 0.0));
    tweener.advance(0.0, &mut objs);
    assert!(tweener.is_idle());
    assert_eq!(objs[0].rotation, Vec3::new(6.0, 3.0, 6.0));
}

#[test]
fn unknown_object_is_ignored() {
    let mut objs = objects();
    let mut tweener = Tweener::new();
    tweener.animate(spin_request(9, 1.0));
    tweener.advance(2.0, &mut objs);
    assert!(tweener.is_idle());
    assert!(objs.iter().all(|o| o.rotation == Vec3::ZERO));
}

#[test]
fn vec_animator_records_requests() {
    let mut sink: Vec<TweenRequest> = Vec::new();
    sink.animate(spin_request(1, 2.0));
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].target.object_index(), 1);
}
