//! Module for anything related to rendering.
//!
//! This module contains the OBJ loader, the GPU-side model set and the
//! shaders used by the Phong demo.

pub mod models;
pub mod obj;
