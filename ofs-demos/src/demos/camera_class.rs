//! Ten textured cubes and a fly camera steered with the captured mouse and W/A/S/D/Q/E.

use glow::HasContext;
use ofs_core::{geometry::textured_cube, transform::cube_models};

use super::{CLEAR_COLOR, bind_textures};
use crate::{
    CursorMode, Demo, DemoFlow, SetupContext,
    abs::{Mesh, ShaderProgram, Texture, load_program_or_log, load_texture_or_log},
    controls::{FlyControls, LookMode},
    input::UpdateContext,
    or_log,
};

pub struct CameraClass {
    controls: FlyControls,
    program: Option<ShaderProgram>,
    cube: Option<Mesh>,
    textures: [Option<Texture>; 2],
}

impl Demo for CameraClass {
    const TITLE: &'static str = "OpenGL - Camera";
    const CURSOR: CursorMode = CursorMode::Captured;

    fn new(ctx: &SetupContext) -> Self {
        let (vertex, fragment) = ctx.assets.shader_pair("camera_class", "cube");
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
            controls: FlyControls::new(ctx.config, LookMode::Captured),
            program,
            cube: or_log(Mesh::arrays(ctx.gl, &textured_cube()), "cube mesh"),
            textures: [
                load_texture_or_log(ctx.gl, &ctx.assets.texture("wood.png")),
                load_texture_or_log(ctx.gl, &ctx.assets.texture("awesomeface.png")),
            ],
        }
    }

    fn update(&mut self, ctx: &UpdateContext) -> DemoFlow {
        self.controls.update(ctx);
        DemoFlow::Continue
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

        let camera = &self.controls.camera;
        program.use_program();
        program.set_uniform("view", camera.view_matrix());
        program.set_uniform("projection", camera.projection_matrix(ctx.aspect_ratio()));
        for model in cube_models() {
            program.set_uniform("model", model);
            cube.draw();
        }
    }
}
