//! Thin owning wrappers around OpenGL objects: the window and context, shader programs, textures
//! and vertex buffers. Every wrapper deletes its GL object when dropped.

pub mod app;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use app::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;

/// The driver refused to create an OpenGL object.
#[derive(Debug, thiserror::Error)]
#[error("failed to create {object}: {message}")]
pub struct GlError {
    pub object: &'static str,
    pub message: String,
}

impl GlError {
    pub(crate) fn new(object: &'static str) -> impl FnOnce(String) -> Self {
        move |message| Self { object, message }
    }
}
