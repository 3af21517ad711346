pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod material;
pub mod scene;
pub mod story;
pub mod tween;

pub use clock::*;
pub use config::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use material::*;
pub use scene::*;
pub use story::*;
pub use tween::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
