use glam::{Vec2, Vec3};

use super::constants::*;
use super::error::StoryError;
use super::geometry::Shape;
use super::material::MaterialConfig;
use super::tween::Easing;

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectConfig {
    pub shape: Shape,
    pub material: MaterialConfig,
    /// Horizontal offset used on wide viewports.
    pub offset_x: f32,
}

/// Rotation started when a section becomes current.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionTween {
    pub delta: Vec3,
    pub duration: f32,
    pub easing: Easing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    pub distance: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightConfig {
    /// Position of the directional light; it shines toward the origin.
    pub position: Vec3,
    pub intensity: f32,
}

impl LightConfig {
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

/// Runtime configuration for the whole story. `Default` is the shipped page.
#[derive(Clone, Debug, PartialEq)]
pub struct StoryConfig {
    pub object_spacing: f32,
    pub layout_breakpoint_px: f32,
    pub parallax_ease_rate: f32,
    pub idle_spin: Vec2,
    pub section_tween: SectionTween,
    pub camera: CameraConfig,
    pub light: LightConfig,
    pub objects: Vec<ObjectConfig>,
}

impl Default for StoryConfig {
    fn default() -> Self {
        let (sphere_w, sphere_h) = SPHERE_SEGMENTS;
        let (knot_tubular, knot_radial) = TORUS_KNOT_SEGMENTS;
        let (knot_p, knot_q) = TORUS_KNOT_PQ;
        Self {
            object_spacing: OBJECT_SPACING,
            layout_breakpoint_px: LAYOUT_BREAKPOINT_PX,
            parallax_ease_rate: PARALLAX_EASE_RATE,
            idle_spin: Vec2::new(IDLE_SPIN_X, IDLE_SPIN_Y),
            section_tween: SectionTween {
                delta: Vec3::from(SECTION_TWEEN_DELTA),
                duration: SECTION_TWEEN_DURATION_SEC,
                easing: Easing::Power2InOut,
            },
            camera: CameraConfig {
                fov_y_deg: CAMERA_FOV_Y_DEG,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                distance: CAMERA_DISTANCE,
            },
            light: LightConfig {
                position: Vec3::from(LIGHT_POSITION),
                intensity: LIGHT_INTENSITY,
            },
            objects: vec![
                ObjectConfig {
                    shape: Shape::Sphere {
                        radius: SPHERE_RADIUS,
                        width_segments: sphere_w,
                        height_segments: sphere_h,
                    },
                    material: MaterialConfig::lava(),
                    offset_x: SECTION_OFFSETS_X[0],
                },
                ObjectConfig {
                    shape: Shape::Cone {
                        radius: CONE_RADIUS,
                        height: CONE_HEIGHT,
                        radial_segments: CONE_SEGMENTS,
                    },
                    material: MaterialConfig::stone(),
                    offset_x: SECTION_OFFSETS_X[1],
                },
                ObjectConfig {
                    shape: Shape::TorusKnot {
                        radius: TORUS_KNOT_RADIUS,
                        tube: TORUS_KNOT_TUBE,
                        tubular_segments: knot_tubular,
                        radial_segments: knot_radial,
                        p: knot_p,
                        q: knot_q,
                    },
                    material: MaterialConfig::water(),
                    offset_x: SECTION_OFFSETS_X[2],
                },
            ],
        }
    }
}

impl StoryConfig {
    pub fn validate(&self) -> Result<(), StoryError> {
        if self.objects.is_empty() {
            return Err(StoryError::EmptyScene);
        }
        if !(self.object_spacing.is_finite() && self.object_spacing > 0.0) {
            return Err(StoryError::InvalidSpacing(self.object_spacing));
        }
        let duration = self.section_tween.duration;
        if !(duration.is_finite() && duration >= 0.0) {
            return Err(StoryError::InvalidTweenDuration(duration));
        }
        let rate = self.parallax_ease_rate;
        if !(rate.is_finite() && rate >= 0.0) {
            return Err(StoryError::InvalidEaseRate(rate));
        }
        Ok(())
    }

    #[inline]
    pub fn section_count(&self) -> usize {
        self.objects.len()
    }
}
