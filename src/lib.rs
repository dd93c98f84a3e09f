//! Two small OpenGL demos built on SDL2 and `glow`.
//!
//! `clear-window` opens a window and clears it to a fixed color every frame.
//! `phong-models` loads a row of OBJ meshes and lights them with a single
//! point light using the Phong model. Both run the same [`scenes::RenderLoop`]
//! until escape is pressed or the window is closed.

pub mod abs;
pub mod asset;
pub mod camera;
pub mod error;
pub mod input;
pub mod logging;
pub mod render;
pub mod scenes;

pub use error::{Error, Result};
