//! An orange triangle drawn with shaders compiled from inline source.
//!
//! The window starts empty. Enter shows the triangle and Space clears it again.

use glow::HasContext;
use ofs_core::geometry::TRIANGLE;
use sdl2::keyboard::Keycode;

use super::CLEAR_COLOR;
use crate::{
    Demo, DemoFlow, SetupContext,
    abs::{Mesh, ShaderProgram},
    input::{KeyboardState, UpdateContext},
    or_log,
};

const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;

void main() {
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 FragColor;

void main() {
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
"#;

/// Enter shows the triangle and Space hides it; Enter wins when both go down in one frame.
fn next_visibility(visible: bool, keyboard: &KeyboardState) -> bool {
    if keyboard.pressed.contains(&Keycode::Return) {
        true
    } else if keyboard.pressed.contains(&Keycode::Space) {
        false
    } else {
        visible
    }
}

pub struct Triangle {
    program: Option<ShaderProgram>,
    mesh: Option<Mesh>,
    visible: bool,
}

impl Demo for Triangle {
    const TITLE: &'static str = "Triangle";

    fn new(ctx: &SetupContext) -> Self {
        Self {
            program: or_log(
                ShaderProgram::from_sources(ctx.gl, VERTEX_SHADER, FRAGMENT_SHADER),
                "triangle shader",
            ),
            mesh: or_log(Mesh::arrays(ctx.gl, &TRIANGLE), "triangle mesh"),
            visible: false,
        }
    }

    fn update(&mut self, ctx: &UpdateContext) -> DemoFlow {
        self.visible = next_visibility(self.visible, ctx.keyboard);
        DemoFlow::Continue
    }

    fn render(&mut self, gl: &glow::Context, _ctx: &UpdateContext) {
        let [r, g, b] = CLEAR_COLOR;
        unsafe {
            gl.clear_color(r, g, b, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        if !self.visible {
            return;
        }
        if let (Some(program), Some(mesh)) = (&self.program, &self.mesh) {
            program.use_program();
            mesh.draw();
        }
    }
}
