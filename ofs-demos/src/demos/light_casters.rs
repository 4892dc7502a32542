//! Ten wooden crates lit by one of three kinds of light caster.
//!
//! All three demos share [`LitScene`]: the crates carry a diffuse and a specular map and the only
//! difference is the light uploaded to the `light` uniform and how it follows the scene. The
//! directional and point demos turn the camera while the left mouse button is held; the
//! spotlight demo captures the cursor.

use glam::Vec3;
use glow::HasContext;
use ofs_core::{
    Camera,
    geometry::CUBE,
    lighting::{
        Attenuation, DirectionalLight, LIGHT_START, Material, Phong, PointLight, SpotLight,
    },
    transform::cube_models,
};

use super::{bind_textures, lighting_color::LightMarker};
use crate::{
    CursorMode, Demo, DemoFlow, SetupContext,
    abs::{Mesh, ShaderProgram, Texture, Uniform, load_program_or_log, load_texture_or_log},
    controls::{FlyControls, LookMode},
    input::UpdateContext,
    or_log,
};

const CLEAR_COLOR: [f32; 3] = [0.0, 0.1, 0.1];
const SHADER_DIR: &str = "light_casters";

/// Everything the light caster demos draw, lit by `light`.
pub struct LitScene<L> {
    controls: FlyControls,
    program: Option<ShaderProgram>,
    cube: Option<Mesh>,
    textures: [Option<Texture>; 2],
    material: Material,
    pub light: L,
}

impl<L: Uniform> LitScene<L> {
    /// Loads the crate program with the fragment shader `<fragment>.fs.glsl`.
    fn new(
        ctx: &SetupContext,
        fragment: &str,
        look: LookMode,
        light: L,
        material: Material,
    ) -> Self {
        let vertex_path = ctx.assets.shader(SHADER_DIR, "cube.vs.glsl");
        let fragment_path = ctx.assets.shader(SHADER_DIR, &format!("{fragment}.fs.glsl"));

        unsafe {
            ctx.gl.enable(glow::DEPTH_TEST);
        }

        Self {
            controls: FlyControls::new(ctx.config, look),
            program: load_program_or_log(ctx.gl, &vertex_path, &fragment_path),
            cube: or_log(Mesh::arrays(ctx.gl, &CUBE), "crate mesh"),
            textures: [
                load_texture_or_log(ctx.gl, &ctx.assets.texture("container.png")),
                load_texture_or_log(ctx.gl, &ctx.assets.texture("container_specular.png")),
            ],
            material,
            light,
        }
    }

    fn update(&mut self, ctx: &UpdateContext) {
        self.controls.update(ctx);
    }

    fn render(&self, gl: &glow::Context, ctx: &UpdateContext) {
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
        program.set_uniform("viewPos", camera.position);
        program.set_uniform("material", self.material);
        program.set_uniform("light", &self.light);
        for model in cube_models() {
            program.set_uniform("model", model);
            cube.draw();
        }
    }
}

/// Sunlight falling down and slightly forward.
pub struct DirectionalLightDemo {
    scene: LitScene<DirectionalLight>,
}

impl Demo for DirectionalLightDemo {
    const TITLE: &'static str = "OpenGL - Directional Light";

    fn new(ctx: &SetupContext) -> Self {
        let light = DirectionalLight {
            direction: Vec3::new(-0.2, -1.0, -0.3),
            phong: Phong::white(),
        };
        Self {
            scene: LitScene::new(
                ctx,
                "directional",
                LookMode::HoldToLook,
                light,
                Material::default(),
            ),
        }
    }

    fn update(&mut self, ctx: &UpdateContext) -> DemoFlow {
        self.scene.update(ctx);
        DemoFlow::Continue
    }

    fn render(&mut self, gl: &glow::Context, ctx: &UpdateContext) {
        self.scene.render(gl, ctx);
    }
}

/// A lamp that fades with distance. The arrow keys move it.
pub struct PointLightDemo {
    scene: LitScene<PointLight>,
    marker: LightMarker,
}

impl Demo for PointLightDemo {
    const TITLE: &'static str = "OpenGL - Point Light";

    fn new(ctx: &SetupContext) -> Self {
        let light = PointLight {
            position: LIGHT_START,
            phong: Phong::white(),
            attenuation: Attenuation::RANGE_50,
        };
        Self {
            scene: LitScene::new(
                ctx,
                "point",
                LookMode::HoldToLook,
                light,
                Material::default(),
            ),
            marker: LightMarker::new(ctx),
        }
    }

    fn update(&mut self, ctx: &UpdateContext) -> DemoFlow {
        self.scene.update(ctx);
        for nudge in ctx.keyboard.light_nudges() {
            nudge.apply(&mut self.scene.light.position, ctx.delta_time);
        }
        DemoFlow::Continue
    }

    fn render(&mut self, gl: &glow::Context, ctx: &UpdateContext) {
        self.scene.render(gl, ctx);

        let camera = &self.scene.controls.camera;
        self.marker.draw(
            camera.view_matrix(),
            camera.projection_matrix(ctx.aspect_ratio()),
            self.scene.light.position,
        );
    }
}

/// A narrow, hard-edged flashlight held by the camera.
pub struct SpotlightDemo {
    scene: LitScene<SpotLight>,
}

impl SpotlightDemo {
    const CUT_OFF_DEGREES: f32 = 5.0;

    /// A light at `camera`, pointing where it looks.
    fn flashlight(camera: &Camera) -> SpotLight {
        SpotLight::from_degrees(
            camera.position,
            camera.front,
            Self::CUT_OFF_DEGREES,
            Self::CUT_OFF_DEGREES,
            Phong::new(Vec3::splat(0.01), Vec3::splat(0.8), Vec3::ONE),
            Attenuation::RANGE_50,
        )
    }
}

impl Demo for SpotlightDemo {
    const TITLE: &'static str = "OpenGL - Lighting Map";
    const CURSOR: CursorMode = CursorMode::Captured;

    fn new(ctx: &SetupContext) -> Self {
        Self {
            scene: LitScene::new(
                ctx,
                "spotlight",
                LookMode::Captured,
                Self::flashlight(&Camera::default()),
                Material { shininess: 16.0 },
            ),
        }
    }

    fn update(&mut self, ctx: &UpdateContext) -> DemoFlow {
        self.scene.update(ctx);
        self.scene.light = Self::flashlight(&self.scene.controls.camera);
        DemoFlow::Continue
    }

    fn render(&mut self, gl: &glow::Context, ctx: &UpdateContext) {
        self.scene.render(gl, ctx);
    }
}
