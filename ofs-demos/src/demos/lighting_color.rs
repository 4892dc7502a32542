//! A coral cube lit by a white light, with a small cube marking where the light is.
//!
//! The arrow keys move the light around.

use glam::{Mat4, Vec3};
use glow::HasContext;
use ofs_core::{
    geometry::cube_positions_only,
    lighting::LIGHT_START,
    transform::light_marker_model,
};

use super::CLEAR_COLOR;
use crate::{
    CursorMode, Demo, DemoFlow, SetupContext,
    abs::{Mesh, ShaderProgram, load_program_or_log},
    controls::{FlyControls, LookMode},
    input::UpdateContext,
    or_log,
};

const OBJECT_COLOR: Vec3 = Vec3::new(1.0, 0.5, 0.31);
const LIGHT_COLOR: Vec3 = Vec3::ONE;

/// The small white cube drawn at a light's position.
pub(crate) struct LightMarker {
    program: Option<ShaderProgram>,
    mesh: Option<Mesh>,
}

impl LightMarker {
    pub(crate) fn new(ctx: &SetupContext) -> Self {
        let (vertex, fragment) = ctx.assets.shader_pair("lighting_color", "light_cube");
        Self {
            program: load_program_or_log(ctx.gl, &vertex, &fragment),
            mesh: or_log(
                Mesh::arrays(ctx.gl, &cube_positions_only()),
                "light marker mesh",
            ),
        }
    }

    pub(crate) fn draw(&self, view: Mat4, projection: Mat4, position: Vec3) {
        if let (Some(program), Some(mesh)) = (&self.program, &self.mesh) {
            program.use_program();
            program.set_uniform("view", view);
            program.set_uniform("projection", projection);
            program.set_uniform("model", light_marker_model(position));
            mesh.draw();
        }
    }
}

pub struct LightingColor {
    controls: FlyControls,
    program: Option<ShaderProgram>,
    cube: Option<Mesh>,
    marker: LightMarker,
    light_position: Vec3,
}

impl LightingColor {
    fn load_object_program(ctx: &SetupContext) -> Option<ShaderProgram> {
        let (vertex, fragment) = ctx.assets.shader_pair("lighting_color", "object");
        let program = load_program_or_log(ctx.gl, &vertex, &fragment)?;
        program.use_program();
        program.set_uniform("objectColor", OBJECT_COLOR);
        program.set_uniform("lightColor", LIGHT_COLOR);
        Some(program)
    }
}

impl Demo for LightingColor {
    const TITLE: &'static str = "OpenGL - Lighting";
    const CURSOR: CursorMode = CursorMode::Captured;

    fn new(ctx: &SetupContext) -> Self {
        unsafe {
            ctx.gl.enable(glow::DEPTH_TEST);
        }

        Self {
            controls: FlyControls::new(ctx.config, LookMode::Captured),
            program: Self::load_object_program(ctx),
            cube: or_log(Mesh::arrays(ctx.gl, &cube_positions_only()), "cube mesh"),
            marker: LightMarker::new(ctx),
            light_position: LIGHT_START,
        }
    }

    fn update(&mut self, ctx: &UpdateContext) -> DemoFlow {
        self.controls.update(ctx);
        for nudge in ctx.keyboard.light_nudges() {
            nudge.apply(&mut self.light_position, ctx.delta_time);
        }
        DemoFlow::Continue
    }

    fn render(&mut self, gl: &glow::Context, ctx: &UpdateContext) {
        let [r, g, b] = CLEAR_COLOR;
        unsafe {
            gl.clear_color(r, g, b, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        let camera = &self.controls.camera;
        let view = camera.view_matrix();
        let projection = camera.projection_matrix(ctx.aspect_ratio());

        if let (Some(program), Some(cube)) = (&self.program, &self.cube) {
            program.use_program();
            program.set_uniform("view", view);
            program.set_uniform("projection", projection);
            program.set_uniform("model", Mat4::IDENTITY);
            cube.draw();
        }

        self.marker.draw(view, projection, self.light_position);
    }
}
