//! The Phong demo: a row of OBJ models lit by a single point light.

use std::sync::Arc;

use glam::{Mat4, Vec3};

use super::Scene;
use crate::abs::{Gpu, ShaderProgram};
use crate::asset::{self, LightDef, SceneConfig};
use crate::camera::Camera;
use crate::error::Result;
use crate::input::{FrameInput, Key};
use crate::render::models::ModelSet;
use crate::render::obj::{self, MeshData};

/// Light and material constants uploaded every frame.
#[derive(Debug, Clone, Copy)]
pub struct Lighting {
    pub light_position: Vec3,
    pub light_color: Vec3,
    pub ambient_strength: f32,
    pub specular_strength: f32,
    pub shininess: f32,
}

impl From<&LightDef> for Lighting {
    fn from(def: &LightDef) -> Self {
        Self {
            light_position: Vec3::from_array(def.position),
            light_color: Vec3::from_array(def.color),
            ambient_strength: def.ambient_strength,
            specular_strength: def.specular_strength,
            shininess: def.shininess,
        }
    }
}

/// Everything the Phong demo owns: program, meshes, camera and the placement
/// of each model.
pub struct ModelScene<G: Gpu> {
    gpu: Arc<G>,
    program: ShaderProgram<G>,
    models: ModelSet<G>,
    translations: Vec<Vec3>,
    colors: Vec<Vec3>,
    camera: Camera,
    lighting: Lighting,
    clear_color: [f32; 4],
}

impl<G: Gpu> ModelScene<G> {
    /// Reads and links the shaders, loads every model and uploads them. The
    /// first failure aborts setup.
    pub fn load(gpu: &Arc<G>, config: &SceneConfig) -> Result<Self> {
        let vertex_source = asset::read_text(config.resolve(&config.shaders.vertex))?;
        let fragment_source = asset::read_text(config.resolve(&config.shaders.fragment))?;
        let program = ShaderProgram::from_sources(gpu, &vertex_source, &fragment_source)?;

        let meshes = config
            .model_paths()
            .map(obj::load_obj)
            .collect::<Result<Vec<_>>>()?;

        Self::new(gpu, program, &meshes, config)
    }

    /// Builds the scene from an already linked program and loaded meshes.
    pub fn new(
        gpu: &Arc<G>,
        program: ShaderProgram<G>,
        meshes: &[MeshData],
        config: &SceneConfig,
    ) -> Result<Self> {
        let models = ModelSet::upload(gpu, meshes)?;
        let count = models.len();

        gpu.enable(glow::DEPTH_TEST);

        Ok(Self {
            gpu: Arc::clone(gpu),
            program,
            models,
            translations: (0..count)
                .map(|i| config.model_translation(i, count))
                .collect(),
            colors: (0..count).map(|i| config.model_color(i)).collect(),
            camera: Camera::new(&config.camera),
            lighting: Lighting::from(&config.light),
            clear_color: config.clear_color.0,
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn models(&self) -> &ModelSet<G> {
        &self.models
    }
}

impl<G: Gpu> Scene for ModelScene<G> {
    fn handle_input(&mut self, input: &FrameInput) {
        // Perspective is checked last and wins when both keys are held.
        if input.is_down(Key::Orthographic) {
            self.camera.set_orthographic(true);
        }
        if input.is_down(Key::Perspective) {
            self.camera.set_orthographic(false);
        }
    }

    // The projection keeps its configured aspect ratio.
    fn resize(&mut self, width: i32, height: i32) {
        self.gpu.viewport(0, 0, width, height);
    }

    fn render(&mut self) {
        let [r, g, b, a] = self.clear_color;
        self.gpu.clear_color(r, g, b, a);
        self.gpu.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);

        let program = &self.program;
        program.use_program();
        program.set_uniform("u_view", self.camera.view_matrix());
        program.set_uniform("u_projection", self.camera.projection_matrix());
        program.set_uniform("u_light_pos", self.lighting.light_position);
        program.set_uniform("u_view_pos", self.camera.eye);
        program.set_uniform("u_light_color", self.lighting.light_color);
        program.set_uniform("u_ambient_strength", self.lighting.ambient_strength);
        program.set_uniform("u_specular_strength", self.lighting.specular_strength);
        program.set_uniform("u_shininess", self.lighting.shininess);

        for ((mesh, translation), color) in self
            .models
            .meshes()
            .iter()
            .zip(&self.translations)
            .zip(&self.colors)
        {
            program.set_uniform("u_model", Mat4::from_translation(*translation));
            program.set_uniform("u_object_color", color);
            mesh.draw();
        }
    }
}
