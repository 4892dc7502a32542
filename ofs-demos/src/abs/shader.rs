//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for compiling and linking
//! GLSL, either from strings or from a pair of files on disk. The [`Uniform`] trait uploads
//! values, including whole light structs, to a program by name.

use std::{fmt, path::Path, sync::Arc};

use glam::{Mat4, Vec3, Vec4};
use glow::HasContext;
use ofs_core::{
    asset::{AssetError, ShaderSource},
    lighting::{Attenuation, DirectionalLight, Material, Phong, PointLight, SpotLight},
};

use super::GlError;

/// The programmable pipeline stage a [`Shader`] runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Gl(#[from] GlError),
    #[error("failed to compile {stage} shader: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("failed to link shader program: {0}")]
    Link(String),
}

/// Represents an individual compiled shader stage.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    pub fn new(
        gl: &Arc<glow::Context>,
        stage: ShaderStage,
        source: &str,
    ) -> Result<Self, ShaderError> {
        unsafe {
            let shader = gl
                .create_shader(stage.gl_enum())
                .map_err(GlError::new("shader"))?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(ShaderError::Compile { stage, log });
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// A value that can be written to a named uniform of a linked program.
///
/// Names the program does not use are skipped, the same way GL ignores location `-1`.
pub trait Uniform {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str);
}

fn location(
    gl: &glow::Context,
    program: glow::Program,
    name: &str,
) -> Option<glow::UniformLocation> {
    let location = unsafe { gl.get_uniform_location(program, name) };
    if location.is_none() {
        log::trace!("uniform `{name}` is not active");
    }
    location
}

macro_rules! impl_uniform {
    ($ty:ty, |$gl:ident, $loc:ident, $value:ident| $body:expr) => {
        impl Uniform for $ty {
            fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
                if let Some(loc) = location(gl, program, name) {
                    let $gl = gl;
                    let $loc = Some(&loc);
                    let $value = self;
                    unsafe { $body }
                }
            }
        }
    };
}

impl_uniform!(bool, |gl, loc, v| gl.uniform_1_i32(loc, *v as i32));
impl_uniform!(i32, |gl, loc, v| gl.uniform_1_i32(loc, *v));
impl_uniform!(f32, |gl, loc, v| gl.uniform_1_f32(loc, *v));
impl_uniform!(Vec3, |gl, loc, v| gl.uniform_3_f32(loc, v.x, v.y, v.z));
impl_uniform!(Vec4, |gl, loc, v| gl.uniform_4_f32(loc, v.x, v.y, v.z, v.w));
impl_uniform!(Mat4, |gl, loc, v| gl.uniform_matrix_4_f32_slice(
    loc,
    false,
    v.as_ref()
));

impl<T: Uniform> Uniform for &T {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        (*self).set_uniform(gl, program, name);
    }
}

// Struct uniforms are written field by field as `name.field`.

impl Uniform for Phong {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        self.ambient
            .set_uniform(gl, program, &format!("{name}.ambient"));
        self.diffuse
            .set_uniform(gl, program, &format!("{name}.diffuse"));
        self.specular
            .set_uniform(gl, program, &format!("{name}.specular"));
    }
}

impl Uniform for Attenuation {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        self.constant
            .set_uniform(gl, program, &format!("{name}.constant"));
        self.linear.set_uniform(gl, program, &format!("{name}.linear"));
        self.quadratic
            .set_uniform(gl, program, &format!("{name}.quadratic"));
    }
}

impl Uniform for DirectionalLight {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        self.direction
            .set_uniform(gl, program, &format!("{name}.direction"));
        self.phong.set_uniform(gl, program, name);
    }
}

impl Uniform for PointLight {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        self.position
            .set_uniform(gl, program, &format!("{name}.position"));
        self.phong.set_uniform(gl, program, name);
        self.attenuation.set_uniform(gl, program, name);
    }
}

impl Uniform for SpotLight {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        self.position
            .set_uniform(gl, program, &format!("{name}.position"));
        self.direction
            .set_uniform(gl, program, &format!("{name}.direction"));
        self.cut_off.set_uniform(gl, program, &format!("{name}.cutOff"));
        self.outer_cut_off
            .set_uniform(gl, program, &format!("{name}.outerCutOff"));
        self.phong.set_uniform(gl, program, name);
        self.attenuation.set_uniform(gl, program, name);
    }
}

/// Texture units 0 and 1 hold the diffuse and specular maps.
impl Uniform for Material {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        0_i32.set_uniform(gl, program, &format!("{name}.diffuse"));
        1_i32.set_uniform(gl, program, &format!("{name}.specular"));
        self.shininess
            .set_uniform(gl, program, &format!("{name}.shininess"));
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, ShaderError> {
        unsafe {
            let program = gl.create_program().map_err(GlError::new("program"))?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(ShaderError::Link(log));
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
            })
        }
    }

    /// Compiles a vertex and a fragment shader and links them. The intermediate shader objects
    /// are deleted once the program is linked.
    pub fn from_sources(
        gl: &Arc<glow::Context>,
        vertex: &str,
        fragment: &str,
    ) -> Result<Self, ShaderError> {
        let vertex = Shader::new(gl, ShaderStage::Vertex, vertex)?;
        let fragment = Shader::new(gl, ShaderStage::Fragment, fragment)?;
        Self::new(gl, &[&vertex, &fragment])
    }

    /// Reads a vertex and a fragment shader from disk, then compiles and links them.
    pub fn from_files(
        gl: &Arc<glow::Context>,
        vertex_path: &Path,
        fragment_path: &Path,
    ) -> Result<Self, ShaderError> {
        let source = ShaderSource::read(vertex_path, fragment_path)?;
        log::debug!(
            "compiling {} and {}",
            vertex_path.display(),
            fragment_path.display()
        );
        Self::from_sources(gl, &source.vertex, &source.fragment)
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Sets a uniform variable in the shader program. The program must be in use.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        value.set_uniform(&self.gl, self.id, name);
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}

/// Loads a program from two files, logging the failure instead of returning it.
///
/// Demos keep running without the program; anything drawn with it is skipped.
pub fn load_program_or_log(
    gl: &Arc<glow::Context>,
    vertex_path: &Path,
    fragment_path: &Path,
) -> Option<ShaderProgram> {
    ShaderProgram::from_files(gl, vertex_path, fragment_path)
        .inspect_err(|e| log::error!("failed to init shader: {e}"))
        .ok()
}
