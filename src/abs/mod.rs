//! This module contains the thin layer over SDL2 and OpenGL used by both demos:
//! application setup, the graphics API seam, shader management and meshes.

pub mod app;
pub mod gpu;
pub mod mesh;
#[cfg(test)]
pub mod recording;
pub mod shader;

pub use app::*;
pub use gpu::*;
pub use mesh::*;
pub use shader::*;
