//! A textured cube spinning in front of a fixed camera.

use glam::Mat4;
use glow::HasContext;
use ofs_core::{
    geometry::textured_cube,
    transform::{fixed_view, spinning_model},
};

use super::{CLEAR_COLOR, bind_textures};
use crate::{
    Demo, SetupContext,
    abs::{Mesh, ShaderProgram, Texture, load_program_or_log, load_texture_or_log},
    input::UpdateContext,
    or_log,
};

const FOV_DEGREES: f32 = 45.0;

pub struct Start3d {
    program: Option<ShaderProgram>,
    cube: Option<Mesh>,
    textures: [Option<Texture>; 2],
}

impl Demo for Start3d {
    const TITLE: &'static str = "OpenGL - 3D";

    fn new(ctx: &SetupContext) -> Self {
        let (vertex, fragment) = ctx.assets.shader_pair("start_3d", "cube");
        let program = load_program_or_log(ctx.gl, &vertex, &fragment);
        if let Some(program) = &program {
            program.use_program();
            program.set_uniform("texture1", 0_i32);
            program.set_uniform("texture2", 1_i32);
        }

        unsafe {
            ctx.gl.enable(glow::DEPTH_TEST);
        }

        Self {
            program,
            cube: or_log(Mesh::arrays(ctx.gl, &textured_cube()), "cube mesh"),
            textures: [
                load_texture_or_log(ctx.gl, &ctx.assets.texture("wood.png")),
                load_texture_or_log(ctx.gl, &ctx.assets.texture("awesomeface.png")),
            ],
        }
    }

    fn render(&mut self, gl: &glow::Context, ctx: &UpdateContext) {
        let [r, g, b] = CLEAR_COLOR;
        unsafe {
            gl.clear_color(r, g, b, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        let (Some(program), Some(cube)) = (&self.program, &self.cube) else {
            return;
        };
        bind_textures(&self.textures);

        let projection =
            Mat4::perspective_rh_gl(FOV_DEGREES.to_radians(), ctx.aspect_ratio(), 0.1, 100.0);
        program.use_program();
        program.set_uniform("model", spinning_model(ctx.time));
        program.set_uniform("view", fixed_view());
        program.set_uniform("projection", projection);
        cube.draw();
    }
}
