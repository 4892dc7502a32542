//! OpenGL From Scratch demos.
//!
//! Every demo is a small [`Demo`] implementation with its own binary under `src/bin`. The
//! shared [`run`] function opens the window, drives the event loop and hands each frame to the
//! demo.

use std::fmt::Display;

pub mod abs;
pub mod controls;
pub mod demo;
pub mod demos;
pub mod input;
pub mod logger;

pub use demo::{CursorMode, Demo, DemoFlow, SetupContext, run};

/// Failures that stop a demo before its first frame.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("failed to create window: {0}")]
    Window(String),
    #[error("failed to create OpenGL context: {0}")]
    Context(String),
}

/// Logs `what` failed and drops the error, for resources a demo can run without.
pub(crate) fn or_log<T, E: Display>(result: Result<T, E>, what: &str) -> Option<T> {
    result
        .inspect_err(|e| log::error!("failed to create {what}: {e}"))
        .ok()
}
