//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which owns the SDL2 window, the OpenGL 3.3 core
//! context and the event pump every demo polls.

use std::sync::Arc;

use ofs_core::config::WindowConfig;

use crate::DemoError;

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Opens a window titled `title` and makes a fresh OpenGL context current on it.
    ///
    /// The configured width and height are ignored when `fullscreen` is set; the window then
    /// takes the size of the desktop.
    pub fn new(title: &str, config: &WindowConfig) -> Result<Self, DemoError> {
        let sdl = sdl2::init().map_err(DemoError::Sdl)?;
        let video_subsystem = sdl.video().map_err(DemoError::Sdl)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let (width, height) = if config.fullscreen {
            let mode = video_subsystem
                .current_display_mode(0)
                .map_err(DemoError::Sdl)?;
            (mode.w as u32, mode.h as u32)
        } else {
            (config.width, config.height)
        };

        let mut window = video_subsystem
            .window(title, width, height)
            .opengl()
            .resizable()
            .position_centered()
            .build()
            .map_err(|e| DemoError::Window(e.to_string()))?;
        if config.fullscreen {
            window
                .set_fullscreen(sdl2::video::FullscreenType::Desktop)
                .map_err(DemoError::Window)?;
        }

        let gl_context = window.gl_create_context().map_err(DemoError::Context)?;
        window
            .gl_make_current(&gl_context)
            .map_err(DemoError::Context)?;

        let interval = if config.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("could not set swap interval: {e}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let event_pump = sdl.event_pump().map_err(DemoError::Sdl)?;

        log::info!("opened {width}x{height} window \"{title}\"");

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl: Arc::new(gl),
            event_pump,
        })
    }

    /// Current drawable size in pixels.
    pub fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }

    /// Hides the cursor and reports relative motion only, for mouse-look.
    pub fn capture_cursor(&self, captured: bool) {
        self.sdl.mouse().set_relative_mouse_mode(captured);
    }
}
