//! Plain mesh buffers produced by chunk extraction.

use serde::{Deserialize, Serialize};

/// Triangle mesh for one chunk, in chunk-local coordinates.
///
/// Attribute vectors are parallel: vertex `i` owns `positions[3i..3i+3]`,
/// `normals[3i..3i+3]` and, when present, `uvs[2i..2i+2]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// Vertex positions, 3 floats per vertex
    pub positions: Vec<f32>,
    /// Vertex normals, 3 floats per vertex
    pub normals: Vec<f32>,
    /// Atlas texture coordinates, 2 floats per vertex
    pub uvs: Option<Vec<f32>>,
    /// Triangle list, 3 indices per triangle
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Create empty buffers, with a UV stream if `with_uvs` is set.
    pub fn new(with_uvs: bool) -> Self {
        Self {
            uvs: with_uvs.then(Vec::new),
            ..Self::default()
        }
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of quads (two triangles each)
    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }

    /// Returns true if there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns true if texture coordinates were generated
    pub fn has_uvs(&self) -> bool {
        self.uvs.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffers_are_empty() {
        let mesh = MeshBuffers::new(true);
        assert!(mesh.is_empty());
        assert!(mesh.has_uvs());
        assert_eq!(mesh.vertex_count(), 0);

        assert!(!MeshBuffers::new(false).has_uvs());
    }
}
