//! An empty window: the smallest possible demo.

use glow::HasContext;

use super::CLEAR_COLOR;
use crate::{Demo, SetupContext, input::UpdateContext};

pub struct BlankWindow;

impl Demo for BlankWindow {
    const TITLE: &'static str = "OpenGL";

    fn new(_ctx: &SetupContext) -> Self {
        Self
    }

    fn render(&mut self, gl: &glow::Context, _ctx: &UpdateContext) {
        let [r, g, b] = CLEAR_COLOR;
        unsafe {
            gl.clear_color(r, g, b, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }
}
