//! Error type shared by both demo programs.

use std::path::PathBuf;

use thiserror::Error;

use crate::abs::ShaderStage;

/// Every way setup can fail. None of these are retried; the binaries log the
/// error and exit with a non-zero status.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to initialize SDL: {0}")]
    Sdl(String),
    #[error("failed to create window: {0}")]
    Window(String),
    #[error("failed to create OpenGL context: {0}")]
    Context(String),
    #[error("OpenGL {required_major}.{required_minor} is required, driver reports {major}.{minor}")]
    GlVersion {
        major: u32,
        minor: u32,
        required_major: u32,
        required_minor: u32,
    },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to load OBJ file {}: {source}", .path.display())]
    Obj {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },
    #[error("failed to compile {stage} shader: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },
    #[error("failed to link shader program: {log}")]
    ShaderLink { log: String },
    #[error("failed to allocate GPU object: {0}")]
    Gpu(String),
    #[error("invalid scene config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
