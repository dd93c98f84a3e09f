//! Startup assets: text files on disk and the JSON scene definition.

use std::path::{Path, PathBuf};

use glam::Vec3;

use crate::error::{Error, Result};

/// The scene definition compiled into the `phong-models` binary.
pub const DEFAULT_SCENE_JSON: &str = include_str!("assets/scene.json");

/// Reads a whole text file, typically shader source.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct WindowDef {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowDef {
    fn default() -> Self {
        Self {
            title: "Phong Models".to_string(),
            width: 1200,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ShaderDef {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl Default for ShaderDef {
    fn default() -> Self {
        Self {
            vertex: PathBuf::from("src/render/shaders/phong/vert.glsl"),
            fragment: PathBuf::from("src/render/shaders/phong/frag.glsl"),
        }
    }
}

/// Fixed camera parameters. Both projections are built from these and never
/// change afterwards; in particular `aspect` does not follow window resizes.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct CameraDef {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Half the height of the orthographic view box; the half width is this
    /// times `aspect`.
    pub ortho_half_height: f32,
}

impl Default for CameraDef {
    fn default() -> Self {
        Self {
            eye: [0.0, 2.0, 6.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov_y_degrees: 45.0,
            aspect: 1200.0 / 800.0,
            near: 0.1,
            far: 100.0,
            ortho_half_height: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LightDef {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub ambient_strength: f32,
    pub specular_strength: f32,
    pub shininess: f32,
}

impl Default for LightDef {
    fn default() -> Self {
        Self {
            position: [3.0, 4.0, 4.0],
            color: [1.0, 1.0, 1.0],
            ambient_strength: 0.1,
            specular_strength: 0.5,
            shininess: 32.0,
        }
    }
}

/// Where the models are placed and how they are tinted. Model `i` of `n`
/// sits at `x = (i - (n - 1) / 2) * spacing` with color `palette[i % len]`.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LayoutDef {
    pub spacing: f32,
    pub palette: Vec<[f32; 3]>,
}

impl Default for LayoutDef {
    fn default() -> Self {
        Self {
            spacing: 2.0,
            palette: vec![[1.0, 0.5, 0.31], [0.31, 0.5, 1.0], [0.5, 1.0, 0.31]],
        }
    }
}

/// The full scene definition.
#[derive(Debug, Clone, PartialEq, Default, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub window: WindowDef,
    pub clear_color: ClearColor,
    pub shaders: ShaderDef,
    /// OBJ files, drawn in this order.
    pub models: Vec<PathBuf>,
    pub layout: LayoutDef,
    pub camera: CameraDef,
    pub light: LightDef,
    /// Directory relative paths are resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub struct ClearColor(pub [f32; 4]);

impl Default for ClearColor {
    fn default() -> Self {
        ClearColor([0.2, 0.3, 0.3, 1.0])
    }
}

impl SceneConfig {
    /// Parses a scene definition; relative paths in it resolve against `base_dir`.
    pub fn new(json: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut config: SceneConfig = serde_json::from_str(json)?;
        config.base_dir = base_dir.into();
        Ok(config)
    }

    /// The embedded scene, with paths resolving against the crate directory.
    pub fn builtin() -> Result<Self> {
        Self::new(DEFAULT_SCENE_JSON, env!("CARGO_MANIFEST_DIR"))
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn model_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.models.iter().map(|path| self.resolve(path))
    }

    /// Offset of model `index` in a row of `count` models.
    pub fn model_translation(&self, index: usize, count: usize) -> Vec3 {
        let center = (count.max(1) - 1) as f32 / 2.0;
        Vec3::new((index as f32 - center) * self.layout.spacing, 0.0, 0.0)
    }

    pub fn model_color(&self, index: usize) -> Vec3 {
        match self.layout.palette.len() {
            0 => Vec3::ONE,
            len => Vec3::from_array(self.layout.palette[index % len]),
        }
    }
}
