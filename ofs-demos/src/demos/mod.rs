//! Every demo program, from an empty window up to lit, textured cubes.

pub mod camera_class;
pub mod light_casters;
pub mod lighting_color;
pub mod shader_class;
pub mod shader_location;
pub mod start_3d;
pub mod triangle;
pub mod window;

pub use camera_class::CameraClass;
pub use light_casters::{DirectionalLightDemo, PointLightDemo, SpotlightDemo};
pub use lighting_color::LightingColor;
pub use shader_class::ShaderClass;
pub use shader_location::ShaderLocation;
pub use start_3d::Start3d;
pub use triangle::Triangle;
pub use window::BlankWindow;

/// Teal background shared by the unlit demos.
pub(crate) const CLEAR_COLOR: [f32; 3] = [0.2, 0.3, 0.3];

/// Binds each loaded texture to the unit matching its index.
pub(crate) fn bind_textures(textures: &[Option<crate::abs::Texture>]) {
    for (unit, texture) in textures.iter().enumerate() {
        if let Some(texture) = texture {
            texture.bind(unit as u32);
        }
    }
}
