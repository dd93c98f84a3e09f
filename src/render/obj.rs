//! Loading OBJ files into flat, GPU-ready vertex and index lists.
//!
//! Every face corner becomes its own [`ModelVertex`] and its own index, so the
//! index list is always `0..vertices.len()`. Identical corners are not merged.

use std::io::BufRead;
use std::path::Path;

use glam::Vec3;

use super::models::ModelVertex;
use crate::asset;
use crate::error::{Error, Result};

/// CPU-side mesh produced by the loader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

/// Loads and flattens every model in the OBJ file at `path`.
///
/// A missing or broken material library is only logged; the geometry is
/// still returned. Material libraries are looked up next to the OBJ file.
pub fn load_obj(path: impl AsRef<Path>) -> Result<MeshData> {
    let path = path.as_ref();
    let start = std::time::Instant::now();

    let text = asset::read_text(path)?;
    let dir = path.parent().unwrap_or(Path::new(""));
    let mesh = parse_text(&text, path, |mtl| tobj::load_mtl(dir.join(mtl)))?;

    log::info!(
        "loaded {} ({} vertices) in {:?}",
        path.display(),
        mesh.vertices.len(),
        start.elapsed()
    );
    Ok(mesh)
}

/// Parses OBJ text from a reader. Material libraries are not resolved.
pub fn parse_obj<B: BufRead>(reader: &mut B) -> Result<MeshData> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|source| Error::Io {
        path: "<memory>".into(),
        source,
    })?;
    parse_text(&text, Path::new("<memory>"), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })
}

fn parse_text<F>(text: &str, origin: &Path, material_loader: F) -> Result<MeshData>
where
    F: Fn(&Path) -> tobj::MTLLoadResult,
{
    let (models, materials) =
        tobj::load_obj_buf(&mut text.as_bytes(), &load_options(), material_loader).map_err(
            |source| Error::Obj {
                path: origin.to_path_buf(),
                source,
            },
        )?;
    if let Err(e) = materials {
        log::warn!("{}: material library skipped: {e}", origin.display());
    }
    Ok(flatten(&models, &corner_normal_flags(text)))
}

/// Whether each triangulated corner named a normal in the file, in the order
/// `tobj` emits corners. `tobj` fills a missing `vn` with a neighbouring
/// normal once the file has any normals, so this is read from the text.
fn corner_normal_flags(text: &str) -> Vec<bool> {
    let mut flags = Vec::new();
    for line in text.lines() {
        let mut words = line.split_whitespace();
        if !matches!(words.next(), Some("f" | "l")) {
            continue;
        }
        let face: Vec<bool> = words.map(names_normal).collect();
        // Points and lines are dropped by the loader. Larger polygons are
        // fanned around their first corner.
        for i in 1..face.len().saturating_sub(1) {
            flags.extend([face[0], face[i], face[i + 1]]);
        }
    }
    flags
}

/// `v//vn` and `v/vt/vn` name a normal, `v` and `v/vt` don't.
fn names_normal(vertex: &str) -> bool {
    vertex.split('/').nth(2).is_some_and(|n| !n.is_empty())
}

fn flatten(models: &[tobj::Model], has_normal: &[bool]) -> MeshData {
    let corners = models.iter().map(|m| m.mesh.indices.len()).sum();
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(corners),
        indices: Vec::with_capacity(corners),
    };

    for model in models {
        let m = &model.mesh;
        for (corner, &position_index) in m.indices.iter().enumerate() {
            let position = vec3_at(&m.positions, position_index).unwrap_or(Vec3::ZERO);
            let named = has_normal.get(mesh.vertices.len()).copied().unwrap_or(true);
            let normal = m
                .normal_indices
                .get(corner)
                .filter(|_| named)
                .and_then(|&normal_index| vec3_at(&m.normals, normal_index))
                .unwrap_or(Vec3::ZERO);

            mesh.indices.push(mesh.vertices.len() as u32);
            mesh.vertices.push(ModelVertex { position, normal });
        }
    }

    mesh
}

fn vec3_at(data: &[f32], index: u32) -> Option<Vec3> {
    let start = index as usize * 3;
    data.get(start..start + 3).map(Vec3::from_slice)
}
