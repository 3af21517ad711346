use super::constants::*;

/// Texture inputs of a surface material, in bind order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Color,
    Displacement,
    Normal,
    Occlusion,
    /// Roughness map for standard shading, specular map for Phong.
    Surface,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 5] = [
        TextureSlot::Color,
        TextureSlot::Displacement,
        TextureSlot::Normal,
        TextureSlot::Occlusion,
        TextureSlot::Surface,
    ];

    #[inline]
    pub fn index(&self) -> usize {
        match self {
            TextureSlot::Color => 0,
            TextureSlot::Displacement => 1,
            TextureSlot::Normal => 2,
            TextureSlot::Occlusion => 3,
            TextureSlot::Surface => 4,
        }
    }

    /// 1x1 texel bound until the real map arrives; chosen to be a no-op in
    /// the shader (white albedo, zero height, flat normal, full occlusion).
    pub fn fallback_texel(&self) -> [u8; 4] {
        match self {
            TextureSlot::Color => [255, 255, 255, 255],
            TextureSlot::Displacement => [0, 0, 0, 255],
            TextureSlot::Normal => [128, 128, 255, 255],
            TextureSlot::Occlusion => [255, 255, 255, 255],
            TextureSlot::Surface => [255, 255, 255, 255],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shading {
    /// Roughness-driven highlight; `Surface` is a roughness multiplier.
    Standard { roughness: f32 },
    /// Fixed-exponent highlight; `Surface` scales the specular colour.
    Phong { shininess: f32, specular: [f32; 3] },
}

#[derive(Clone, Debug, PartialEq)]
pub struct MaterialConfig {
    pub name: &'static str,
    pub color_map: Option<&'static str>,
    pub displacement_map: Option<&'static str>,
    pub normal_map: Option<&'static str>,
    pub occlusion_map: Option<&'static str>,
    pub surface_map: Option<&'static str>,
    pub displacement_scale: f32,
    pub ao_intensity: f32,
    pub shading: Shading,
}

impl MaterialConfig {
    pub fn map(&self, slot: TextureSlot) -> Option<&'static str> {
        match slot {
            TextureSlot::Color => self.color_map,
            TextureSlot::Displacement => self.displacement_map,
            TextureSlot::Normal => self.normal_map,
            TextureSlot::Occlusion => self.occlusion_map,
            TextureSlot::Surface => self.surface_map,
        }
    }

    /// `(slot, path)` for every map the material names.
    pub fn maps(&self) -> impl Iterator<Item = (TextureSlot, &'static str)> + '_ {
        TextureSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.map(slot).map(|path| (slot, path)))
    }

    pub fn lava() -> Self {
        Self {
            name: "lava",
            color_map: Some("Lava/LavaCOLOR.jpg"),
            displacement_map: Some("Lava/LavaDISP.png"),
            normal_map: Some("Lava/LavaNORM.jpg"),
            occlusion_map: Some("Lava/LavaOCC.jpg"),
            surface_map: Some("Lava/LavaROUGH.jpg"),
            displacement_scale: TEXTURED_DISPLACEMENT_SCALE,
            ao_intensity: AO_INTENSITY,
            shading: Shading::Standard {
                roughness: STANDARD_ROUGHNESS,
            },
        }
    }

    pub fn stone() -> Self {
        Self {
            name: "stone",
            color_map: Some("Stone/Stone_Floorbasecolor.jpg"),
            displacement_map: Some("Stone/Stone_Floorheight.png"),
            normal_map: Some("Stone/Stone_Floornormal.jpg"),
            occlusion_map: Some("Stone/Stone_FloorambientOcclusion.jpg"),
            surface_map: Some("Stone/Stone_Floorroughness.jpg"),
            displacement_scale: TEXTURED_DISPLACEMENT_SCALE,
            ao_intensity: AO_INTENSITY,
            shading: Shading::Standard {
                roughness: STANDARD_ROUGHNESS,
            },
        }
    }

    pub fn water() -> Self {
        Self {
            name: "water",
            color_map: Some("Water/WaterCOLOR.jpg"),
            displacement_map: Some("Water/WaterDISP.jpg"),
            normal_map: Some("Water/WaterNORM.jpg"),
            occlusion_map: Some("Water/WaterOCC.jpg"),
            surface_map: Some("Water/WaterSPEC.jpg"),
            displacement_scale: DEFAULT_DISPLACEMENT_SCALE,
            ao_intensity: AO_INTENSITY,
            shading: Shading::Phong {
                shininess: PHONG_SHININESS,
                specular: PHONG_SPECULAR,
            },
        }
    }
}
