//! GL-free building blocks of the OpenGL From Scratch demos.
//!
//! Everything here is plain math and file handling: the fly camera, frame timing, cursor
//! tracking, the hand-written meshes and transforms, light caster parameters, configuration
//! and shader source loading. The `ofs-demos` crate turns these into draw calls.

pub mod asset;
pub mod camera;
pub mod config;
pub mod cursor;
pub mod geometry;
pub mod lighting;
pub mod timing;
pub mod transform;

pub use camera::{Camera, CameraMovement};
pub use config::Config;
