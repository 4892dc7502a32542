//! The [`Demo`] trait and the event loop every demo binary runs.

use std::{path::PathBuf, process::ExitCode, sync::Arc};

use glow::HasContext;
use ofs_core::{Config, asset::AssetRoot, timing::FrameTimer};
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
};

use crate::{
    abs::App,
    input::{KeyboardState, MouseState, UpdateContext},
    logger,
};

/// Assets shipped next to this crate, used unless the config points elsewhere.
const BUNDLED_ASSETS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

/// Whether the demo hides the cursor and reads relative mouse motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorMode {
    Free,
    Captured,
}

/// What the loop should do after a demo's update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoFlow {
    Continue,
    Quit,
}

/// What a demo gets to build its GPU resources with.
pub struct SetupContext<'a> {
    pub gl: &'a Arc<glow::Context>,
    pub assets: &'a AssetRoot,
    pub config: &'a Config,
}

/// A standalone demo program.
///
/// The runner owns the window; a demo owns its meshes, programs and textures, which are
/// dropped before the context goes away.
pub trait Demo: Sized {
    /// Window title.
    const TITLE: &'static str;

    const CURSOR: CursorMode = CursorMode::Free;

    /// Builds the demo once the window and context exist.
    fn new(ctx: &SetupContext) -> Self;

    /// Advances the demo's state by one frame.
    fn update(&mut self, _ctx: &UpdateContext) -> DemoFlow {
        DemoFlow::Continue
    }

    /// Draws one frame. The runner swaps buffers afterwards.
    fn render(&mut self, gl: &glow::Context, ctx: &UpdateContext);
}

/// Runs demo `D` until its window is closed or Escape is pressed.
pub fn run<D: Demo>() -> ExitCode {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    if let Err(e) = logger::init(config.level_filter()) {
        eprintln!("failed to initialise logging: {e}");
    }
    if let Some(e) = config_error {
        log::warn!("{e}, using defaults");
    }

    log::info!("starting \"{}\"", D::TITLE);
    match run_loop::<D>(&config) {
        Ok(()) => {
            log::info!("\"{}\" finished", D::TITLE);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_loop<D: Demo>(config: &Config) -> Result<(), crate::DemoError> {
    let mut app = App::new(D::TITLE, &config.window)?;
    app.capture_cursor(D::CURSOR == CursorMode::Captured);

    let assets = AssetRoot::new(
        config
            .asset_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(BUNDLED_ASSETS)),
    );
    log::debug!("loading assets from {}", assets.path().display());

    let mut viewport = app.drawable_size();
    unsafe {
        app.gl.viewport(0, 0, viewport.0 as i32, viewport.1 as i32);
    }

    let mut demo = D::new(&SetupContext {
        gl: &app.gl,
        assets: &assets,
        config,
    });

    let mut keyboard = KeyboardState::default();
    let mut mouse = MouseState::default();
    let mut timer = FrameTimer::new();

    'running: loop {
        let delta_time = timer.tick();
        keyboard.begin_frame();
        mouse.begin_frame();

        for event in app.event_pump.poll_iter() {
            keyboard.handle_event(&event);
            mouse.handle_event(&event);
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => {
                    viewport = app.window.drawable_size();
                    log::trace!("viewport resized to {}x{}", viewport.0, viewport.1);
                    unsafe {
                        app.gl.viewport(0, 0, viewport.0 as i32, viewport.1 as i32);
                    }
                }
                _ => {}
            }
        }

        let ctx = UpdateContext {
            keyboard: &keyboard,
            mouse: &mouse,
            delta_time,
            time: timer.elapsed(),
            viewport,
        };
        if demo.update(&ctx) == DemoFlow::Quit {
            break 'running;
        }
        demo.render(&app.gl, &ctx);
        app.window.gl_swap_window();
    }

    drop(demo);
    Ok(())
}
