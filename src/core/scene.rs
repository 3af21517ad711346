// Scene-side state: tracked section objects, the parallax camera rig and the
// camera description handed to the renderer. Platform-free.

use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// One object per section. `rotation` is an XYZ Euler triple in radians.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedObject {
    pub position: Vec3,
    pub rotation: Vec3,
    pub configured_offset_x: f32,
}

impl TrackedObject {
    pub fn new(section: usize, offset_x: f32, spacing: f32) -> Self {
        Self {
            position: Vec3::new(offset_x, -(section as f32) * spacing, 0.0),
            rotation: Vec3::ZERO,
            configured_offset_x: offset_x,
        }
    }

    #[inline]
    pub fn spin(&mut self, rate: Vec2, dt: f32) {
        self.rotation.x += dt * rate.x;
        self.rotation.y += dt * rate.y;
    }

    pub fn model_matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_rotation_translation(rot, self.position)
    }
}

/// Horizontal placement of section objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Narrow viewport: every object centred.
    Stacked,
    /// Wide viewport: each object at its configured offset.
    Alternating,
}

impl LayoutMode {
    #[inline]
    pub fn for_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            LayoutMode::Stacked
        } else {
            LayoutMode::Alternating
        }
    }

    pub fn apply(&self, objects: &mut [TrackedObject]) {
        for obj in objects {
            obj.position.x = match self {
                LayoutMode::Stacked => 0.0,
                LayoutMode::Alternating => obj.configured_offset_x,
            };
        }
    }
}

/// Parent transform for the camera.
///
/// The rig position eases toward the cursor (parallax); the camera's local
/// position follows scroll. The two channels compose by nesting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub camera_local: Vec3,
}

impl CameraRig {
    pub fn new(camera_distance: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            camera_local: Vec3::new(0.0, 0.0, camera_distance),
        }
    }

    /// First-order low-pass toward `target`; the blend factor is capped at 1.
    pub fn ease_toward(&mut self, target: Vec2, rate: f32, dt: f32) {
        let k = (rate * dt.max(0.0)).min(1.0);
        self.position.x += (target.x - self.position.x) * k;
        self.position.y += (target.y - self.position.y) * k;
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.position + self.camera_local
    }
}

/// World-space camera height for a scroll offset. Linear, no easing.
#[inline]
pub fn camera_height_for_scroll(scroll_y: f32, viewport_height: f32, spacing: f32) -> f32 {
    -(scroll_y / viewport_height) * spacing
}
