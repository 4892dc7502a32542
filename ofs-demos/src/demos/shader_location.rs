//! A quad whose colour comes from a second vertex attribute bound at location 1.

use glow::HasContext;
use ofs_core::geometry::{COLORED_QUAD, QUAD_INDICES};

use super::CLEAR_COLOR;
use crate::{
    Demo, SetupContext,
    abs::{Mesh, ShaderProgram},
    input::UpdateContext,
    or_log,
};

const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec3 inColor;

out vec4 color;

void main() {
    gl_Position = vec4(aPos, 1.0);
    color = vec4(inColor, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330 core
in vec4 color;
out vec4 FragColor;

void main() {
    FragColor = color;
}
"#;

pub struct ShaderLocation {
    program: Option<ShaderProgram>,
    quad: Option<Mesh>,
}

impl Demo for ShaderLocation {
    const TITLE: &'static str = "OpenGL - Shader Location";

    fn new(ctx: &SetupContext) -> Self {
        Self {
            program: or_log(
                ShaderProgram::from_sources(ctx.gl, VERTEX_SHADER, FRAGMENT_SHADER),
                "shader",
            ),
            quad: or_log(
                Mesh::indexed(ctx.gl, &COLORED_QUAD, &QUAD_INDICES),
                "quad mesh",
            ),
        }
    }

    fn render(&mut self, gl: &glow::Context, _ctx: &UpdateContext) {
        let [r, g, b] = CLEAR_COLOR;
        unsafe {
            gl.clear_color(r, g, b, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        if let (Some(program), Some(quad)) = (&self.program, &self.quad) {
            program.use_program();
            quad.draw();
        }
    }
}
