/// Web front-end constants: DOM hooks and renderer output settings.
// Canvas the renderer draws into (`<canvas class="webgl">`)
pub const CANVAS_SELECTOR: &str = "canvas.webgl";

// Backing store resolution cap; never render above CSS pixel density
pub const MAX_PIXEL_RATIO: f64 = 1.0;

// Base URL prepended to material texture paths
pub const ASSET_BASE_URL: &str = "";

// Clear colour behind the objects (linear RGB)
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

// Depth buffer format shared by pipeline and attachment
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
