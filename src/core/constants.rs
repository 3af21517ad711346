/// Scene layout and motion tuning constants.
///
/// These values reproduce the look of the page as designed; `StoryConfig`
/// bundles them into a runtime configuration.
// Vertical world distance between consecutive section objects
pub const OBJECT_SPACING: f32 = 6.0;

// Alternating left/right horizontal offsets for wide viewports
pub const SECTION_OFFSETS_X: [f32; 3] = [-2.0, 2.0, -2.0];

// Below this viewport width (CSS px) objects collapse to x = 0
pub const LAYOUT_BREAKPOINT_PX: f32 = 767.0;

// Parallax rig easing rate (1/s); time constant is 1 / rate
pub const PARALLAX_EASE_RATE: f32 = 5.0;

// Idle spin (rad/s)
pub const IDLE_SPIN_X: f32 = 0.1;
pub const IDLE_SPIN_Y: f32 = 0.12;

// One-shot rotation started when a section becomes current
pub const SECTION_TWEEN_DELTA: [f32; 3] = [6.0, 3.0, 6.0];
pub const SECTION_TWEEN_DURATION_SEC: f32 = 2.0;

// Perspective camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_DISTANCE: f32 = 4.0;

// Single white directional light
pub const LIGHT_POSITION: [f32; 3] = [1.0, 1.0, 0.0];
pub const LIGHT_INTENSITY: f32 = 1.0;

// Sphere(radius, width segments, height segments)
pub const SPHERE_RADIUS: f32 = 1.0;
pub const SPHERE_SEGMENTS: (u32, u32) = (32, 32);

// Cone(radius, height, radial segments)
pub const CONE_RADIUS: f32 = 1.5;
pub const CONE_HEIGHT: f32 = 2.0;
pub const CONE_SEGMENTS: u32 = 4;

// Torus knot(radius, tube, tubular segments, radial segments, p, q)
pub const TORUS_KNOT_RADIUS: f32 = 0.8;
pub const TORUS_KNOT_TUBE: f32 = 0.35;
pub const TORUS_KNOT_SEGMENTS: (u32, u32) = (100, 16);
pub const TORUS_KNOT_PQ: (u32, u32) = (2, 3);

// Material defaults
pub const STANDARD_ROUGHNESS: f32 = 0.5;
pub const TEXTURED_DISPLACEMENT_SCALE: f32 = 0.1;
pub const DEFAULT_DISPLACEMENT_SCALE: f32 = 1.0; // renderer default when none is given
pub const AO_INTENSITY: f32 = 1.0;
pub const PHONG_SHININESS: f32 = 30.0;
pub const PHONG_SPECULAR: [f32; 3] = [0.0667, 0.0667, 0.0667]; // 0x111111
