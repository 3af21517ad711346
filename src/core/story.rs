use glam::{Vec2, Vec3};
use instant::Instant;

use super::clock::{FrameClock, FrameTime};
use super::config::StoryConfig;
use super::error::StoryError;
use super::input::{normalize_pointer, BoundaryCrossed, InputSampler, Viewport};
use super::scene::{camera_height_for_scroll, Camera, CameraRig, LayoutMode, TrackedObject};
use super::tween::{Animator, TweenRequest, TweenTarget};

/// Owns all scroll-story state. Platform event handlers call into it and the
/// frame loop ticks it once per animation frame.
#[derive(Clone, Debug)]
pub struct StoryController {
    config: StoryConfig,
    viewport: Viewport,
    input: InputSampler,
    clock: FrameClock,
    rig: CameraRig,
    objects: Vec<TrackedObject>,
    layout: LayoutMode,
}

impl StoryController {
    pub fn new(
        config: StoryConfig,
        viewport: Viewport,
        initial_scroll_y: f32,
        start: Instant,
    ) -> Result<Self, StoryError> {
        config.validate()?;
        let mut objects: Vec<TrackedObject> = config
            .objects
            .iter()
            .enumerate()
            .map(|(i, o)| TrackedObject::new(i, o.offset_x, config.object_spacing))
            .collect();
        let layout = LayoutMode::for_width(viewport.width, config.layout_breakpoint_px);
        layout.apply(&mut objects);
        let mut rig = CameraRig::new(config.camera.distance);
        rig.camera_local.y =
            camera_height_for_scroll(initial_scroll_y, viewport.height, config.object_spacing);
        Ok(Self {
            input: InputSampler::new(objects.len(), initial_scroll_y),
            clock: FrameClock::starting_at(start),
            rig,
            objects,
            layout,
            viewport,
            config,
        })
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) {
        let c = normalize_pointer(client_x, client_y, &self.viewport);
        self.input.on_pointer_move(c.x, c.y);
    }

    /// Record a scroll sample. A section change sends one rotation tween for
    /// the newly current object and is returned to the caller.
    pub fn on_scroll(
        &mut self,
        raw_y: f32,
        animator: &mut impl Animator,
    ) -> Option<BoundaryCrossed> {
        let crossed = self.input.on_scroll(raw_y, self.viewport.height)?;
        log::debug!("[story] section {} -> {}", crossed.from, crossed.to);
        let tween = self.config.section_tween;
        animator.animate(TweenRequest {
            target: TweenTarget::Rotation(crossed.to),
            delta: tween.delta,
            duration: tween.duration,
            easing: tween.easing,
        });
        Some(crossed)
    }

    /// Re-lay out objects for the new width, then store the viewport.
    pub fn on_resize(&mut self, width: f32, height: f32) -> LayoutMode {
        let viewport = Viewport::new(width, height);
        let layout = LayoutMode::for_width(viewport.width, self.config.layout_breakpoint_px);
        layout.apply(&mut self.objects);
        if layout != self.layout {
            log::info!("[story] layout {:?} at {}px", layout, viewport.width);
        }
        self.layout = layout;
        self.viewport = viewport;
        layout
    }

    /// Restart the frame clock so the next tick measures from `now`.
    pub fn restart_clock(&mut self, now: Instant) {
        self.clock = FrameClock::starting_at(now);
    }

    /// Sample the clock and run one update step.
    pub fn tick(&mut self, now: Instant) -> FrameTime {
        let time = self.clock.tick_at(now);
        self.advance(time.dt);
        time
    }

    pub fn advance(&mut self, dt: f32) {
        let cursor = self.input.cursor();
        self.rig.ease_toward(
            Vec2::new(cursor.x, cursor.y),
            self.config.parallax_ease_rate,
            dt,
        );
        for obj in &mut self.objects {
            obj.spin(self.config.idle_spin, dt);
        }
        self.rig.camera_local.y = camera_height_for_scroll(
            self.input.scroll().raw_scroll_y,
            self.viewport.height,
            self.config.object_spacing,
        );
    }

    pub fn camera(&self) -> Camera {
        let eye = self.rig.eye();
        Camera {
            eye,
            target: eye + Vec3::NEG_Z,
            up: Vec3::Y,
            aspect: self.viewport.aspect(),
            fovy_radians: self.config.camera.fov_y_deg.to_radians(),
            znear: self.config.camera.near,
            zfar: self.config.camera.far,
        }
    }

    #[inline]
    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    #[inline]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    #[inline]
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    #[inline]
    pub fn current_section(&self) -> usize {
        self.input.scroll().current_section
    }

    #[inline]
    pub fn objects(&self) -> &[TrackedObject] {
        &self.objects
    }

    #[inline]
    pub fn objects_mut(&mut self) -> &mut [TrackedObject] {
        &mut self.objects
    }
}
