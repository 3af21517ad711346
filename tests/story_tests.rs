// Host-side tests for the scroll-story controller: scroll mapping, section
// crossings, parallax easing, idle spin and responsive layout.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod story_core {
    pub mod clock {
        include!("../src/core/clock.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod input {
        include!("../src/core/input.rs");
    }
    pub mod material {
        include!("../src/core/material.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod story {
        include!("../src/core/story.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
}

use glam::{Vec2, Vec3};
use instant::Instant;
use std::time::Duration;
use story_core::clock::FrameClock;
use story_core::config::StoryConfig;
use story_core::error::StoryError;
use story_core::input::{BoundaryCrossed, Viewport};
use story_core::scene::{camera_height_for_scroll, CameraRig, LayoutMode};
use story_core::story::StoryController;
use story_core::tween::{Easing, TweenRequest, TweenTarget, Tweener};

const H: f32 = 800.0;

fn controller(width: f32) -> StoryController {
    StoryController::new(
        StoryConfig::default(),
        Viewport::new(width, H),
        0.0,
        Instant::now(),
    )
    .expect("default config is valid")
}

#[test]
fn crossing_into_second_section_requests_one_rotation() {
    let mut story = controller(1200.0);
    let mut sink: Vec<TweenRequest> = Vec::new();
    assert_eq!(story.on_scroll(0.3 * H, &mut sink), None);
    assert!(sink.is_empty());
    assert_eq!(
        story.on_scroll(0.6 * H, &mut sink),
        Some(BoundaryCrossed { from: 0, to: 1 })
    );
    assert_eq!(sink.len(), 1);
    let req = sink[0];
    assert_eq!(req.target, TweenTarget::Rotation(1));
    assert_eq!(req.delta, Vec3::new(6.0, 3.0, 6.0));
    assert_eq!(req.duration, 2.0);
    assert_eq!(req.easing, Easing::Power2InOut);
    assert_eq!(story.current_section(), 1);
}

#[test]
fn clamped_overscroll_never_refires() {
    let mut story = controller(1200.0);
    let mut sink: Vec<TweenRequest> = Vec::new();
    story.on_scroll(10.0 * H, &mut sink);
    story.on_scroll(11.0 * H, &mut sink);
    story.on_scroll(12.0 * H, &mut sink);
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].target, TweenTarget::Rotation(2));
}

#[test]
fn camera_height_tracks_scroll_linearly() {
    let mut story = controller(1200.0);
    let mut sink: Vec<TweenRequest> = Vec::new();
    story.on_scroll(2.0 * H, &mut sink);
    story.advance(0.016);
    assert_eq!(story.rig().camera_local.y, -12.0);
    assert_eq!(camera_height_for_scroll(0.5 * H, H, 6.0), -3.0);
}

#[test]
fn camera_starts_at_initial_scroll() {
    let story = StoryController::new(
        StoryConfig::default(),
        Viewport::new(1200.0, H),
        H,
        Instant::now(),
    )
    .expect("valid");
    assert_eq!(story.rig().camera_local.y, -6.0);
    assert_eq!(story.current_section(), 0);
}

#[test]
fn rig_converges_toward_cursor() {
    let mut story = controller(1200.0);
    // bottom-right corner of the viewport
    story.on_pointer_move(1200.0, H);
    let mut prev = f32::MAX;
    for _ in 0..120 {
        story.advance(1.0 / 60.0);
        let err = (0.5 - story.rig().position.x).abs();
        assert!(err < prev);
        prev = err;
    }
    assert!(prev < 0.01);
    assert!((story.rig().position.y - 0.5).abs() < 0.01);
}

#[test]
fn rig_blend_factor_is_capped() {
    let mut rig = CameraRig::new(4.0);
    rig.ease_toward(Vec2::new(0.4, -0.2), 5.0, 10.0);
    assert_eq!(rig.position.x, 0.4);
    assert_eq!(rig.position.y, -0.2);
    assert_eq!(rig.eye(), Vec3::new(0.4, -0.2, 4.0));
}

#[test]
fn idle_rotation_increases_with_time() {
    let mut story = controller(1200.0);
    let start = Instant::now();
    let mut clock = FrameClock::starting_at(start);
    let mut prev: Vec<Vec3> = story.objects().iter().map(|o| o.rotation).collect();
    for i in 1..=10 {
        let t = clock.tick_at(start + Duration::from_millis(16 * i));
        story.advance(t.dt);
        for (o, p) in story.objects().iter().zip(&prev) {
            assert!(o.rotation.x > p.x);
            assert!(o.rotation.y > p.y);
        }
        prev = story.objects().iter().map(|o| o.rotation).collect();
    }
}

#[test]
fn idle_spin_ignores_scroll_and_pointer() {
    let mut moving = controller(1200.0);
    let mut still = controller(1200.0);
    let mut sink: Vec<TweenRequest> = Vec::new();
    for i in 1..=20 {
        let before: Vec<Vec3> = moving.objects().iter().map(|o| o.rotation).collect();
        moving.on_scroll(i as f32 * 0.15 * H, &mut sink);
        moving.on_pointer_move(i as f32 * 50.0, H - i as f32 * 30.0);
        moving.advance(1.0 / 60.0);
        still.advance(1.0 / 60.0);
        for ((o, b), s) in moving.objects().iter().zip(&before).zip(still.objects()) {
            assert!(o.rotation.x > b.x && o.rotation.y > b.y);
            assert_eq!(o.rotation, s.rotation);
        }
    }
    // the crossings were only recorded, so spin alone moved the objects
    assert!(!sink.is_empty());
}

#[test]
fn restarted_clock_skips_setup_time() {
    let start = Instant::now();
    let mut story = StoryController::new(
        StoryConfig::default(),
        Viewport::new(1200.0, H),
        0.0,
        start,
    )
    .expect("valid");
    let loop_start = start + Duration::from_secs(5);
    story.restart_clock(loop_start);
    let t = story.tick(loop_start + Duration::from_millis(100));
    assert!((t.dt - 0.1).abs() < 1e-3);
    assert!((t.elapsed - 0.1).abs() < 1e-3);
    assert!((story.objects()[0].rotation.x - 0.01).abs() < 1e-4);
}

#[test]
fn tick_uses_elapsed_time() {
    let start = Instant::now();
    let mut story = StoryController::new(
        StoryConfig::default(),
        Viewport::new(1200.0, H),
        0.0,
        start,
    )
    .expect("valid");
    let t = story.tick(start + Duration::from_secs(1));
    assert!((t.dt - 1.0).abs() < 1e-3);
    assert!((story.objects()[0].rotation.x - 0.1).abs() < 1e-3);
    assert!((story.objects()[0].rotation.y - 0.12).abs() < 1e-3);
}

#[test]
fn layout_follows_breakpoint() {
    let mut story = controller(1200.0);
    assert_eq!(story.layout(), LayoutMode::Alternating);
    let xs: Vec<f32> = story.objects().iter().map(|o| o.position.x).collect();
    assert_eq!(xs, vec![-2.0, 2.0, -2.0]);

    assert_eq!(story.on_resize(500.0, H), LayoutMode::Stacked);
    assert!(story.objects().iter().all(|o| o.position.x == 0.0));

    assert_eq!(story.on_resize(1200.0, H), LayoutMode::Alternating);
    let xs: Vec<f32> = story.objects().iter().map(|o| o.position.x).collect();
    assert_eq!(xs, vec![-2.0, 2.0, -2.0]);

    // exactly at the breakpoint keeps the wide layout
    assert_eq!(story.on_resize(767.0, H), LayoutMode::Alternating);
}

#[test]
fn repeated_resize_is_idempotent() {
    let mut story = controller(1200.0);
    assert_eq!(story.on_resize(500.0, H), LayoutMode::Stacked);
    let positions: Vec<Vec3> = story.objects().iter().map(|o| o.position).collect();
    let camera = story.camera();
    assert_eq!(story.on_resize(500.0, H), LayoutMode::Stacked);
    let again: Vec<Vec3> = story.objects().iter().map(|o| o.position).collect();
    assert_eq!(positions, again);
    assert_eq!(story.camera(), camera);
    assert_eq!(story.layout(), LayoutMode::Stacked);
}

#[test]
fn narrow_start_is_stacked() {
    let story = controller(400.0);
    assert_eq!(story.layout(), LayoutMode::Stacked);
    assert!(story.objects().iter().all(|o| o.position.x == 0.0));
}

#[test]
fn objects_stack_down_by_spacing() {
    let story = controller(1200.0);
    let ys: Vec<f32> = story.objects().iter().map(|o| o.position.y).collect();
    assert_eq!(ys, vec![0.0, -6.0, -12.0]);
}

#[test]
fn camera_follows_rig_and_viewport() {
    let mut story = controller(1600.0);
    story.on_resize(1600.0, H);
    let cam = story.camera();
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 4.0));
    assert_eq!(cam.target, Vec3::new(0.0, 0.0, 3.0));
    assert_eq!(cam.aspect, 2.0);
    assert!((cam.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
}

#[test]
fn tweener_drives_crossed_object() {
    let mut story = controller(1200.0);
    let mut tweener = Tweener::new();
    story.on_scroll(H, &mut tweener);
    assert_eq!(tweener.active_count(), 1);
    tweener.advance(2.5, story.objects_mut());
    assert!(tweener.is_idle());
    assert_eq!(story.objects()[0].rotation, Vec3::ZERO);
    let r = story.objects()[1].rotation;
    assert!((r - Vec3::new(6.0, 3.0, 6.0)).abs().max_element() < 1e-4);
}

#[test]
fn invalid_config_is_rejected() {
    let vp = Viewport::new(1200.0, H);

    let mut cfg = StoryConfig::default();
    cfg.objects.clear();
    let err = StoryController::new(cfg, vp, 0.0, Instant::now()).unwrap_err();
    assert_eq!(err, StoryError::EmptyScene);

    let mut cfg = StoryConfig::default();
    cfg.object_spacing = 0.0;
    assert_eq!(cfg.validate(), Err(StoryError::InvalidSpacing(0.0)));

    let mut cfg = StoryConfig::default();
    cfg.section_tween.duration = -1.0;
    assert_eq!(cfg.validate(), Err(StoryError::InvalidTweenDuration(-1.0)));

    let mut cfg = StoryConfig::default();
    cfg.parallax_ease_rate = f32::NAN;
    assert!(matches!(cfg.validate(), Err(StoryError::InvalidEaseRate(_))));
}

#[test]
fn default_config_describes_three_sections() {
    let cfg = StoryConfig::default();
    assert_eq!(cfg.section_count(), 3);
    assert!(cfg.validate().is_ok());
    let names: Vec<&str> = cfg.objects.iter().map(|o| o.material.name).collect();
    assert_eq!(names, vec!["lava", "stone", "water"]);
    assert_eq!(cfg.objects[0].material.maps().count(), 5);
}
