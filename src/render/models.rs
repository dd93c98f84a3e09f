//! The row of models drawn by the Phong demo, uploaded to the GPU once.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use super::obj::MeshData;
use crate::abs::{Gpu, Mesh, Vertex};
use crate::error::Result;

/// One interleaved vertex record: position then normal, 6 floats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct ModelVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

impl Vertex for ModelVertex {
    fn vertex_attribs<G: Gpu>(gpu: &G) {
        let stride = size_of::<ModelVertex>() as i32;

        // Position attribute
        gpu.vertex_attrib_f32(0, 3, stride, 0);

        // Normal attribute
        gpu.vertex_attrib_f32(1, 3, stride, size_of::<Vec3>() as i32);
    }
}

/// GPU meshes for every loaded model, in draw order.
pub struct ModelSet<G: Gpu> {
    meshes: Vec<Mesh<G>>,
}

impl<G: Gpu> ModelSet<G> {
    /// Uploads each mesh into its own vertex buffer, index buffer and vertex array.
    pub fn upload(gpu: &Arc<G>, meshes: &[MeshData]) -> Result<Self> {
        let meshes = meshes
            .iter()
            .map(|data| Mesh::new(gpu, &data.vertices, &data.indices))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("uploaded {} meshes", meshes.len());
        Ok(Self { meshes })
    }

    pub fn meshes(&self) -> &[Mesh<G>] {
        &self.meshes
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}
