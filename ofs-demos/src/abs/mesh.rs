//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct for managing vertex data on the GPU side.
//! Vertices should implement the [`Vertex`] trait, which describes their attribute layout.

use std::sync::Arc;

use glow::HasContext;
use ofs_core::geometry::{ColorVertex, LitVertex, PositionVertex, TexturedVertex};

use super::GlError;

/// Trait that defines the necessary methods for a vertex.
pub trait Vertex: Copy {
    /// Sets up the vertex attribute pointers for the vertex.
    fn vertex_attribs(gl: &glow::Context);
}

/// Enables float attribute `index` with `size` components, `offset` floats into the vertex.
unsafe fn float_attrib<V>(gl: &glow::Context, index: u32, size: i32, offset: usize) {
    let stride = std::mem::size_of::<V>() as i32;
    let offset = (offset * std::mem::size_of::<f32>()) as i32;
    unsafe {
        gl.enable_vertex_attrib_array(index);
        gl.vertex_attrib_pointer_f32(index, size, glow::FLOAT, false, stride, offset);
    }
}

impl Vertex for PositionVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            float_attrib::<Self>(gl, 0, 3, 0);
        }
    }
}

impl Vertex for ColorVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            float_attrib::<Self>(gl, 0, 3, 0);
            float_attrib::<Self>(gl, 1, 3, 3);
        }
    }
}

impl Vertex for TexturedVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            float_attrib::<Self>(gl, 0, 3, 0);
            float_attrib::<Self>(gl, 1, 2, 3);
        }
    }
}

impl Vertex for LitVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            float_attrib::<Self>(gl, 0, 3, 0);
            float_attrib::<Self>(gl, 1, 3, 3);
            float_attrib::<Self>(gl, 2, 2, 6);
        }
    }
}

fn as_bytes<T: Copy>(data: &[T]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(data.as_ptr() as *const u8, std::mem::size_of_val(data)) }
}

/// Represents a mesh stored on the GPU side.
///
/// Meshes built with [`Mesh::indexed`] own an element buffer and draw with `glDrawElements`;
/// meshes built with [`Mesh::arrays`] draw their vertices in order.
pub struct Mesh {
    gl: Arc<glow::Context>,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: Option<glow::Buffer>,
    count: usize,
}

impl Mesh {
    /// Uploads vertices that are drawn as consecutive triangles.
    pub fn arrays<V: Vertex>(gl: &Arc<glow::Context>, vertices: &[V]) -> Result<Self, GlError> {
        Self::new(gl, vertices, None)
    }

    /// Uploads vertices together with the indices that assemble them into triangles.
    pub fn indexed<V: Vertex>(
        gl: &Arc<glow::Context>,
        vertices: &[V],
        indices: &[u32],
    ) -> Result<Self, GlError> {
        Self::new(gl, vertices, Some(indices))
    }

    fn new<V: Vertex>(
        gl: &Arc<glow::Context>,
        vertices: &[V],
        indices: Option<&[u32]>,
    ) -> Result<Self, GlError> {
        unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(GlError::new("vertex array"))?;
            let vbo = match gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(e) => {
                    gl.delete_vertex_array(vao);
                    return Err(GlError::new("vertex buffer")(e));
                }
            };

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, as_bytes(vertices), glow::STATIC_DRAW);

            let ebo = match indices {
                Some(indices) => {
                    let ebo = match gl.create_buffer() {
                        Ok(ebo) => ebo,
                        Err(e) => {
                            gl.bind_vertex_array(None);
                            gl.delete_buffer(vbo);
                            gl.delete_vertex_array(vao);
                            return Err(GlError::new("element buffer")(e));
                        }
                    };
                    // The element buffer binding is recorded in the vertex array.
                    gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
                    gl.buffer_data_u8_slice(
                        glow::ELEMENT_ARRAY_BUFFER,
                        as_bytes(indices),
                        glow::STATIC_DRAW,
                    );
                    Some(ebo)
                }
                None => None,
            };

            V::vertex_attribs(gl);

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            Ok(Self {
                gl: Arc::clone(gl),
                vao,
                vbo,
                ebo,
                count: indices.map_or(vertices.len(), <[u32]>::len),
            })
        }
    }

    /// Draws the mesh as triangles.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            if self.ebo.is_some() {
                self.gl
                    .draw_elements(glow::TRIANGLES, self.count as i32, glow::UNSIGNED_INT, 0);
            } else {
                self.gl.draw_arrays(glow::TRIANGLES, 0, self.count as i32);
            }
            self.gl.bind_vertex_array(None);
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            if let Some(ebo) = self.ebo {
                self.gl.delete_buffer(ebo);
            }
            self.gl.delete_buffer(self.vbo);
            self.gl.delete_vertex_array(self.vao);
        }
    }
}
