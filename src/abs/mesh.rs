//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct for managing mesh data on the GPU side.
//! Vertices should implement the [`Vertex`] trait.

use std::sync::Arc;

use super::Gpu;
use crate::error::{Error, Result};

/// Trait that defines the necessary methods for a vertex.
pub trait Vertex: bytemuck::Pod {
    /// Sets up the vertex attribute pointers for the vertex.
    fn vertex_attribs<G: Gpu>(gpu: &G);
}

/// Represents a mesh stored on the GPU side: a vertex buffer, an index buffer
/// and the vertex array describing them. The data is uploaded once and never
/// changes.
pub struct Mesh<G: Gpu> {
    gpu: Arc<G>,
    vao: G::VertexArray,
    vbo: G::Buffer,
    ebo: G::Buffer,
    index_count: usize,
}

impl<G: Gpu> Mesh<G> {
    /// Creates a new mesh from the given vertex and index data.
    pub fn new<V: Vertex>(gpu: &Arc<G>, vertices: &[V], indices: &[u32]) -> Result<Self> {
        let vao = gpu.create_vertex_array().map_err(Error::Gpu)?;
        let vbo = match gpu.create_buffer() {
            Ok(vbo) => vbo,
            Err(e) => {
                gpu.delete_vertex_array(vao);
                return Err(Error::Gpu(e));
            }
        };
        let ebo = match gpu.create_buffer() {
            Ok(ebo) => ebo,
            Err(e) => {
                gpu.delete_buffer(vbo);
                gpu.delete_vertex_array(vao);
                return Err(Error::Gpu(e));
            }
        };

        gpu.bind_vertex_array(Some(vao));
        gpu.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gpu.buffer_data(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(vertices),
            glow::STATIC_DRAW,
        );

        gpu.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
        gpu.buffer_data(
            glow::ELEMENT_ARRAY_BUFFER,
            bytemuck::cast_slice(indices),
            glow::STATIC_DRAW,
        );

        V::vertex_attribs(gpu.as_ref());

        // The element buffer binding is part of the vertex array state, so the
        // array is unbound first.
        gpu.bind_vertex_array(None);
        gpu.bind_buffer(glow::ARRAY_BUFFER, None);
        gpu.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

        Ok(Self {
            gpu: Arc::clone(gpu),
            vao,
            vbo,
            ebo,
            index_count: indices.len(),
        })
    }

    /// Draws the mesh as an indexed triangle list.
    pub fn draw(&self) {
        self.gpu.bind_vertex_array(Some(self.vao));
        self.gpu.draw_elements(
            glow::TRIANGLES,
            self.index_count as i32,
            glow::UNSIGNED_INT,
            0,
        );
        self.gpu.bind_vertex_array(None);
    }

    /// Returns the amount of indices used in the mesh
    pub fn index_count(&self) -> usize {
        self.index_count
    }
}

impl<G: Gpu> Drop for Mesh<G> {
    fn drop(&mut self) {
        self.gpu.delete_buffer(self.vbo);
        self.gpu.delete_buffer(self.ebo);
        self.gpu.delete_vertex_array(self.vao);
    }
}
