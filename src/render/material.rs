use super::helpers;
use crate::core::{MaterialConfig, Shading, TextureSlot};

/// Per-object uniform block (group 1). Layout matches `Object` in scene.wgsl.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) normal_matrix: [[f32; 4]; 4],
    pub(crate) params: [f32; 4],
    pub(crate) specular: [f32; 4],
}

impl ObjectUniforms {
    pub(crate) fn new(model: glam::Mat4, material: &MaterialConfig) -> Self {
        let (roughness, shading, specular) = match material.shading {
            Shading::Standard { roughness } => (roughness, 0.0, [0.0, 0.0, 0.0, 1.0]),
            Shading::Phong {
                shininess,
                specular,
            } => (1.0, 1.0, [specular[0], specular[1], specular[2], shininess]),
        };
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            params: [
                material.displacement_scale,
                material.ao_intensity,
                roughness,
                shading,
            ],
            specular,
        }
    }
}

pub(crate) fn texture_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let texture_entry = |binding: u32| wgpu::BindGroupLayoutEntry {
        binding,
        // displacement is read in the vertex stage
        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    };
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("material_bgl"),
        entries: &[
            texture_entry(0),
            texture_entry(1),
            texture_entry(2),
            texture_entry(3),
            texture_entry(4),
            wgpu::BindGroupLayoutEntry {
                binding: 5,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

pub(crate) fn create_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("material_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}

/// The five texture maps of one object, fallback texels until loaded.
pub(crate) struct MaterialTextures {
    name: &'static str,
    textures: Vec<(wgpu::Texture, wgpu::TextureView)>,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl MaterialTextures {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        material: &MaterialConfig,
    ) -> Self {
        let textures: Vec<_> = TextureSlot::ALL
            .iter()
            .map(|slot| {
                let label = format!("{}_{:?}_fallback", material.name, slot);
                helpers::create_rgba_texture(device, queue, &label, 1, 1, &slot.fallback_texel())
            })
            .collect();
        let bind_group = build_bind_group(device, layout, sampler, material.name, &textures);
        Self {
            name: material.name,
            textures,
            bind_group,
        }
    }

    /// Swap in a decoded map and rebuild the bind group.
    pub(crate) fn replace(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        slot: TextureSlot,
        image: &image::RgbaImage,
    ) {
        let (width, height) = image.dimensions();
        let label = format!("{}_{:?}", self.name, slot);
        self.textures[slot.index()] =
            helpers::create_rgba_texture(device, queue, &label, width, height, image.as_raw());
        self.bind_group = build_bind_group(device, layout, sampler, self.name, &self.textures);
    }
}

fn build_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    name: &str,
    textures: &[(wgpu::Texture, wgpu::TextureView)],
) -> wgpu::BindGroup {
    let view = |slot: TextureSlot| wgpu::BindingResource::TextureView(&textures[slot.index()].1);
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(&format!("{name}_material_bg")),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: view(TextureSlot::Color),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: view(TextureSlot::Displacement),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: view(TextureSlot::Normal),
            },
            wgpu::BindGroupEntry {
                binding: 3,
                resource: view(TextureSlot::Occlusion),
            },
            wgpu::BindGroupEntry {
                binding: 4,
                resource: view(TextureSlot::Surface),
            },
            wgpu::BindGroupEntry {
                binding: 5,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
