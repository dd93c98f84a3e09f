//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL shaders.
//! This module also provides the [`Uniform`] trait for setting uniform variables in shader
//! programs.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use glam::{Mat4, Vec3};

use super::Gpu;
use crate::error::{Error, Result};

/// The pipeline stage a [`Shader`] is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Represents an individual OpenGL shader.
pub struct Shader<G: Gpu> {
    gpu: Arc<G>,
    id: G::Shader,
    stage: ShaderStage,
}

impl<G: Gpu> Shader<G> {
    /// Compiles a new shader from the given source code.
    ///
    /// On failure the driver's info log is returned in [`Error::ShaderCompile`]
    /// and the shader object is deleted.
    pub fn new(gpu: &Arc<G>, stage: ShaderStage, source: &str) -> Result<Self> {
        let shader = gpu.create_shader(stage.gl_enum()).map_err(Error::Gpu)?;
        gpu.shader_source(shader, source);
        gpu.compile_shader(shader);

        if !gpu.shader_compile_status(shader) {
            let log = gpu.shader_info_log(shader);
            gpu.delete_shader(shader);
            return Err(Error::ShaderCompile { stage, log });
        }

        log::debug!("compiled {stage} shader");
        Ok(Self {
            gpu: Arc::clone(gpu),
            id: shader,
            stage,
        })
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn id(&self) -> G::Shader {
        self.id
    }
}

impl<G: Gpu> Drop for Shader<G> {
    fn drop(&mut self) {
        self.gpu.delete_shader(self.id);
    }
}

/// Represents a uniform variable in a shader program.
pub trait Uniform {
    /// Uploads the value to an already resolved location of the bound program.
    fn upload<G: Gpu>(&self, gpu: &G, location: &G::UniformLocation);
}

impl Uniform for f32 {
    fn upload<G: Gpu>(&self, gpu: &G, location: &G::UniformLocation) {
        gpu.uniform_f32(location, *self);
    }
}

impl Uniform for Vec3 {
    fn upload<G: Gpu>(&self, gpu: &G, location: &G::UniformLocation) {
        gpu.uniform_vec3(location, self.x, self.y, self.z);
    }
}

impl Uniform for Mat4 {
    fn upload<G: Gpu>(&self, gpu: &G, location: &G::UniformLocation) {
        gpu.uniform_mat4(location, &self.to_cols_array());
    }
}

impl<T: Uniform> Uniform for &T {
    fn upload<G: Gpu>(&self, gpu: &G, location: &G::UniformLocation) {
        (*self).upload(gpu, location);
    }
}

/// Represents an OpenGL shader program linked from a vertex and a fragment shader.
///
/// Uniform locations are looked up by name the first time they are set and
/// cached for the lifetime of the program. Names the program does not expose
/// are cached as missing too, so they are only reported once.
pub struct ShaderProgram<G: Gpu> {
    gpu: Arc<G>,
    id: G::Program,
    locations: RefCell<HashMap<String, Option<G::UniformLocation>>>,
}

impl<G: Gpu> ShaderProgram<G> {
    /// Links a new shader program. The stages are consumed: once the program
    /// is linked they are detached and deleted, leaving the program as the
    /// only owner of the result.
    pub fn link(gpu: &Arc<G>, vertex: Shader<G>, fragment: Shader<G>) -> Result<Self> {
        let program = gpu.create_program().map_err(Error::Gpu)?;

        gpu.attach_shader(program, vertex.id);
        gpu.attach_shader(program, fragment.id);
        gpu.link_program(program);

        if !gpu.program_link_status(program) {
            let log = gpu.program_info_log(program);
            gpu.delete_program(program);
            return Err(Error::ShaderLink { log });
        }

        gpu.detach_shader(program, vertex.id);
        gpu.detach_shader(program, fragment.id);
        drop(vertex);
        drop(fragment);

        log::debug!("linked shader program {program:?}");
        Ok(Self {
            gpu: Arc::clone(gpu),
            id: program,
            locations: RefCell::new(HashMap::new()),
        })
    }

    /// Compiles both stages from source and links them.
    pub fn from_sources(gpu: &Arc<G>, vertex_source: &str, fragment_source: &str) -> Result<Self> {
        let vertex = Shader::new(gpu, ShaderStage::Vertex, vertex_source)?;
        let fragment = Shader::new(gpu, ShaderStage::Fragment, fragment_source)?;
        Self::link(gpu, vertex, fragment)
    }

    pub fn id(&self) -> G::Program {
        self.id
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        self.gpu.use_program(Some(self.id));
    }

    /// Sets a uniform variable in the shader program. The program must be bound.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        if let Some(location) = self.location(name) {
            value.upload(self.gpu.as_ref(), &location);
        }
    }

    fn location(&self, name: &str) -> Option<G::UniformLocation> {
        if let Some(cached) = self.locations.borrow().get(name) {
            return cached.clone();
        }
        let location = self.gpu.uniform_location(self.id, name);
        if location.is_none() {
            log::warn!("shader program has no active uniform named `{name}`");
        }
        self.locations
            .borrow_mut()
            .insert(name.to_owned(), location.clone());
        location
    }
}

impl<G: Gpu> Drop for ShaderProgram<G> {
    fn drop(&mut self) {
        self.gpu.delete_program(self.id);
    }
}
