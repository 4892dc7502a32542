//! A quad drawn with a program loaded from files, its green channel pulsing over time.

use glam::Vec4;
use glow::HasContext;
use ofs_core::{
    geometry::{QUAD, QUAD_INDICES},
    transform::pulse,
};

use super::CLEAR_COLOR;
use crate::{
    Demo, SetupContext,
    abs::{Mesh, ShaderProgram, load_program_or_log},
    input::UpdateContext,
    or_log,
};

pub struct ShaderClass {
    program: Option<ShaderProgram>,
    quad: Option<Mesh>,
}

impl Demo for ShaderClass {
    const TITLE: &'static str = "OpenGL - ShaderClass";

    fn new(ctx: &SetupContext) -> Self {
        let (vertex, fragment) = ctx.assets.shader_pair("shader_class", "shader");
        Self {
            program: load_program_or_log(ctx.gl, &vertex, &fragment),
            quad: or_log(Mesh::indexed(ctx.gl, &QUAD, &QUAD_INDICES), "quad mesh"),
        }
    }

    fn render(&mut self, gl: &glow::Context, ctx: &UpdateContext) {
        let [r, g, b] = CLEAR_COLOR;
        unsafe {
            gl.clear_color(r, g, b, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        if let (Some(program), Some(quad)) = (&self.program, &self.quad) {
            program.use_program();
            program.set_uniform("color", Vec4::new(0.0, pulse(ctx.time), 0.0, 1.0));
            quad.draw();
        }
    }
}
