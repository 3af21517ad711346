// Procedural meshes for the section objects. Parameterisation and vertex
// layout follow the usual sphere / cone / torus-knot generators so texture
// maps line up the same way.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    #[inline]
    pub fn new(position: Vec3, normal: Vec3, uv: [f32; 2]) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv,
        }
    }
}

/// CPU-side triangle list, ready for upload.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Shape of a section object with its generator parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
        p: u32,
        q: u32,
    },
}

impl Shape {
    pub fn build(&self) -> MeshData {
        match *self {
            Shape::Sphere {
                radius,
                width_segments,
                height_segments,
            } => sphere(radius, width_segments, height_segments),
            Shape::Cone {
                radius,
                height,
                radial_segments,
            } => cone(radius, height, radial_segments),
            Shape::TorusKnot {
                radius,
                tube,
                tubular_segments,
                radial_segments,
                p,
                q,
            } => torus_knot(radius, tube, tubular_segments, radial_segments, p, q),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Sphere { .. } => "sphere",
            Shape::Cone { .. } => "cone",
            Shape::TorusKnot { .. } => "torus_knot",
        }
    }
}

pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    let mut indices = Vec::new();

    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let theta = v * PI;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let phi = u * TAU;
            let normal = Vec3::new(
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            );
            vertices.push(Vertex::new(normal * radius, normal, [u, 1.0 - v]));
        }
    }

    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // poles collapse to a single triangle per quad
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData { vertices, indices }
}

/// Cone with its apex at `+height / 2` and a closed base at `-height / 2`.
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let rs = radial_segments.max(3);
    let half = height * 0.5;
    let slope = radius / height.max(f32::EPSILON);
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // side: row 0 is the apex ring, row 1 the base ring
    for (row, (y, r)) in [(half, 0.0), (-half, radius)].into_iter().enumerate() {
        for x in 0..=rs {
            let u = x as f32 / rs as f32;
            let theta = u * TAU;
            let (sin, cos) = theta.sin_cos();
            let position = Vec3::new(r * sin, y, r * cos);
            let normal = Vec3::new(sin, slope, cos).normalize();
            vertices.push(Vertex::new(position, normal, [u, 1.0 - row as f32]));
        }
    }
    let row = rs + 1;
    for x in 0..rs {
        // apex ring has zero radius, so only the lower triangle has area
        indices.extend_from_slice(&[row + x, row + x + 1, x + 1]);
    }

    // base cap: one centre vertex per segment keeps uv seams clean
    let center_start = vertices.len() as u32;
    for _ in 0..rs {
        vertices.push(Vertex::new(
            Vec3::new(0.0, -half, 0.0),
            Vec3::NEG_Y,
            [0.5, 0.5],
        ));
    }
    let ring_start = vertices.len() as u32;
    for x in 0..=rs {
        let theta = x as f32 / rs as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        vertices.push(Vertex::new(
            Vec3::new(radius * sin, -half, radius * cos),
            Vec3::NEG_Y,
            // bottom cap: v is mirrored so the map reads correctly from below
            [cos * 0.5 + 0.5, -sin * 0.5 + 0.5],
        ));
    }
    for x in 0..rs {
        let c = center_start + x;
        let i = ring_start + x;
        indices.extend_from_slice(&[i + 1, i, c]);
    }

    MeshData { vertices, indices }
}

/// (p, q) torus knot swept by a circular tube.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshData {
    let ts = tubular_segments.max(3);
    let rs = radial_segments.max(3);
    let p = p.max(1) as f32;
    let q = q as f32;
    let mut vertices = Vec::with_capacity(((ts + 1) * (rs + 1)) as usize);
    let mut indices = Vec::with_capacity((ts * rs * 6) as usize);

    let curve = |u: f32| -> Vec3 {
        let qu_over_p = q / p * u;
        let cs = qu_over_p.cos();
        Vec3::new(
            radius * (2.0 + cs) * 0.5 * u.cos(),
            radius * (2.0 + cs) * 0.5 * u.sin(),
            radius * qu_over_p.sin() * 0.5,
        )
    };

    for i in 0..=ts {
        let u = i as f32 / ts as f32 * p * TAU;
        let p1 = curve(u);
        let p2 = curve(u + 0.01);
        let t = p2 - p1;
        let n = p2 + p1;
        let b = t.cross(n).normalize();
        let n = b.cross(t).normalize();

        for j in 0..=rs {
            let v = j as f32 / rs as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let position = p1 + n * cx + b * cy;
            let normal = (position - p1).normalize();
            vertices.push(Vertex::new(
                position,
                normal,
                [i as f32 / ts as f32, j as f32 / rs as f32],
            ));
        }
    }

    let row = rs + 1;
    for j in 1..=ts {
        for i in 1..=rs {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    MeshData { vertices, indices }
}
