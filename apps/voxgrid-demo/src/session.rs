//! Editing session: owns the world, the harness-side mesh cache and the
//! editor state that the UI would otherwise keep in globals.

use hashbrown::HashMap;
use tracing::debug;
use voxgrid_core::{ChunkPos, Ray, VoxelType};
use voxgrid_mesh::MeshBuffers;
use voxgrid_world::{EditKind, EditOutcome, VoxelWorld};

/// Explicit editor state, passed into world calls as plain values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorState {
    /// Material used when placing.
    pub selected: VoxelType,
}

impl EditorState {
    /// Edit performed by a pointer click; `remove` mirrors a modifier key.
    pub const fn edit_kind(self, remove: bool) -> EditKind {
        if remove || self.selected.is_empty() {
            EditKind::Remove
        } else {
            EditKind::Place(self.selected)
        }
    }
}

/// Aggregate size of the cached meshes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshStats {
    pub chunks: usize,
    pub quads: usize,
    pub vertices: usize,
}

/// World plus the mesh buffers a renderer would have uploaded.
pub struct Session {
    world: VoxelWorld,
    meshes: HashMap<ChunkPos, MeshBuffers>,
    pub editor: EditorState,
}

impl Session {
    pub fn new(world: VoxelWorld, editor: EditorState) -> Self {
        Self {
            world,
            meshes: HashMap::new(),
            editor,
        }
    }

    pub fn world(&self) -> &VoxelWorld {
        &self.world
    }

    /// Cached mesh for a chunk, if it has any faces.
    pub fn mesh(&self, chunk: ChunkPos) -> Option<&MeshBuffers> {
        self.meshes.get(&chunk)
    }

    /// Rebuild meshes for every allocated chunk.
    pub fn rebuild_all(&mut self) {
        self.meshes.clear();
        for (pos, mesh) in self.world.extract_all_meshes() {
            if !mesh.is_empty() {
                self.meshes.insert(pos, mesh);
            }
        }
    }

    /// Rebuild the given chunks, dropping meshes that became empty.
    pub fn rebuild(&mut self, chunks: &[ChunkPos]) {
        for &pos in chunks {
            let mesh = self.world.extract_chunk_mesh(pos);
            debug!(?pos, quads = mesh.quad_count(), "rebuilt chunk mesh");
            if mesh.is_empty() {
                self.meshes.remove(&pos);
            } else {
                self.meshes.insert(pos, mesh);
            }
        }
    }

    /// Pick along `ray`, edit, and refresh the affected meshes.
    pub fn click(&mut self, ray: &Ray, remove: bool) -> Option<EditOutcome> {
        let kind = self.editor.edit_kind(remove);
        let outcome = self.world.apply_edit(ray, kind)?;
        self.rebuild(&outcome.affected);
        Some(outcome)
    }

    pub fn stats(&self) -> MeshStats {
        self.meshes.values().fold(
            MeshStats {
                chunks: self.meshes.len(),
                ..MeshStats::default()
            },
            |mut stats, mesh| {
                stats.quads += mesh.quad_count();
                stats.vertices += mesh.vertex_count();
                stats
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use voxgrid_core::VoxelPos;

    fn session() -> Session {
        let mut world = VoxelWorld::unbounded(8).unwrap();
        world.fill_region(VoxelPos::new(0, 0, 0), VoxelPos::new(8, 1, 8), VoxelType(1));
        let mut session = Session::new(world, EditorState { selected: VoxelType(3) });
        session.rebuild_all();
        session
    }

    fn down_ray(x: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, 20.0, z), Vec3::new(x, -5.0, z))
    }

    #[test]
    fn flat_slab_meshes_outer_faces() {
        let session = session();
        // 64 top + 64 bottom + 4 * 8 sides.
        assert_eq!(session.stats().quads, 64 + 64 + 32);
        assert_eq!(session.stats().chunks, 1);
    }

    #[test]
    fn placing_rebuilds_affected_chunks() {
        let mut session = session();
        let outcome = session.click(&down_ray(7.5, 7.5), false).unwrap();

        assert_eq!(outcome.pos, VoxelPos::new(7, 1, 7));
        assert_eq!(session.world().get_voxel(outcome.pos), VoxelType(3));
        // Top face under the new voxel is culled, four sides and a top are added.
        assert_eq!(session.stats().quads, 64 + 64 + 32 - 1 + 5);
        assert!(session.mesh(ChunkPos::new(0, 0, 0)).is_some());
    }

    #[test]
    fn removing_restores_faces() {
        let mut session = session();
        session.click(&down_ray(2.5, 2.5), true).unwrap();

        assert_eq!(
            session.world().get_voxel(VoxelPos::new(2, 0, 2)),
            VoxelType::EMPTY
        );
        // Lost top and bottom, gained four inner sides.
        assert_eq!(session.stats().quads, 64 + 64 + 32 - 2 + 4);
    }

    #[test]
    fn empty_selection_removes() {
        let editor = EditorState { selected: VoxelType::EMPTY };
        assert_eq!(editor.edit_kind(false), EditKind::Remove);
        let editor = EditorState { selected: VoxelType(2) };
        assert_eq!(editor.edit_kind(false), EditKind::Place(VoxelType(2)));
        assert_eq!(editor.edit_kind(true), EditKind::Remove);
    }
}
