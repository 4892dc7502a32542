//! Structs and functions for handling textures.
//!
//! The module provides the [`Texture`] struct, an owned 2D texture on the GPU side. Images are
//! decoded with the `image` crate, expanded to RGBA and uploaded with a full mipmap chain.

use std::{path::Path, sync::Arc};

use glow::HasContext;
use image::{DynamicImage, GenericImageView};

use super::GlError;

#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("failed to load texture {path}: {source}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Gl(#[from] GlError),
}

/// Represents a texture stored on the GPU side.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: glow::Texture,
}

impl Texture {
    /// Uploads the given [`image::DynamicImage`]. Rows are flipped first when
    /// `flip_vertically` is set, since OpenGL expects the first row at the bottom.
    pub fn from_image(
        gl: &Arc<glow::Context>,
        image: &DynamicImage,
        flip_vertically: bool,
    ) -> Result<Self, TextureError> {
        let rgba = if flip_vertically {
            image.flipv().to_rgba8()
        } else {
            image.to_rgba8()
        };
        let (width, height) = rgba.dimensions();
        Self::from_rgba(gl, width, height, rgba.as_raw())
    }

    /// Decodes and uploads the image at `path`, flipped so texture coordinates start at the
    /// bottom left.
    pub fn from_path(gl: &Arc<glow::Context>, path: &Path) -> Result<Self, TextureError> {
        let image = image::open(path).map_err(|source| TextureError::Image {
            path: path.display().to_string(),
            source,
        })?;
        let (width, height) = image.dimensions();
        log::debug!("loaded {} ({width}x{height})", path.display());
        Self::from_image(gl, &image, true)
    }

    /// A single magenta texel, used in place of textures that failed to load.
    pub fn placeholder(gl: &Arc<glow::Context>) -> Result<Self, TextureError> {
        Self::from_rgba(gl, 1, 1, &[255, 0, 255, 255])
    }

    /// Creates a new texture from raw RGBA data.
    pub fn from_rgba(
        gl: &Arc<glow::Context>,
        width: u32,
        height: u32,
        data: &[u8],
    ) -> Result<Self, TextureError> {
        unsafe {
            let texture = gl.create_texture().map_err(GlError::new("texture"))?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(data)),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
            })
        }
    }

    /// Binds the texture to the specified texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}

/// Loads a texture, logging the failure and substituting [`Texture::placeholder`].
pub fn load_texture_or_log(gl: &Arc<glow::Context>, path: &Path) -> Option<Texture> {
    Texture::from_path(gl, path)
        .or_else(|e| {
            log::error!("{e}");
            Texture::placeholder(gl)
        })
        .inspect_err(|e| log::error!("{e}"))
        .ok()
}
