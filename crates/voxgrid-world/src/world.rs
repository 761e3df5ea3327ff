//! The voxel world: storage plus fixed configuration.

use tracing::{debug, info, instrument};
use voxgrid_core::{ChunkPos, ChunkSize, Ray, RayHit, Result, VoxelPos, VoxelType};
use voxgrid_mesh::{MeshBuffers, VoxelMesher, VoxelStorage};
use voxgrid_voxel::ChunkStore;

use crate::config::{WorldConfig, WorldShape};
use crate::edit::{affected_chunks, edit_target, EditKind, EditOutcome};

/// A sparse voxel world.
///
/// The world is single-threaded: meshing and raycasting only read, so they
/// may run in parallel while no write is in flight, but the world itself
/// provides no synchronization.
#[derive(Clone, Debug)]
pub struct VoxelWorld {
    config: WorldConfig,
    store: ChunkStore,
    mesher: VoxelMesher,
}

impl VoxelWorld {
    /// Create a world from a validated configuration.
    pub fn new(config: WorldConfig) -> Result<Self> {
        config.validate()?;

        let mut store = ChunkStore::new(config.chunk_size);
        if config.shape == WorldShape::Bounded {
            store.ensure_chunk(ChunkPos::new(0, 0, 0));
        }
        let mesher = config.atlas.map_or_else(VoxelMesher::new, VoxelMesher::with_atlas);

        info!(
            chunk_size = config.chunk_size.get(),
            shape = ?config.shape,
            uvs = config.atlas.is_some(),
            "created voxel world"
        );
        Ok(Self {
            config,
            store,
            mesher,
        })
    }

    /// Unbounded world without UV generation.
    pub fn unbounded(chunk_size: u32) -> Result<Self> {
        Self::new(WorldConfig::new(chunk_size)?)
    }

    /// Bounded single-chunk world without UV generation.
    pub fn bounded(size: u32) -> Result<Self> {
        Self::new(WorldConfig::new(size)?.with_shape(WorldShape::Bounded))
    }

    /// Get the world configuration.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Get the underlying chunk store.
    pub fn store(&self) -> &ChunkStore {
        &self.store
    }

    /// Chunk edge length.
    pub fn chunk_size(&self) -> ChunkSize {
        self.config.chunk_size
    }

    /// Get the voxel at a position; empty if never written.
    pub fn get_voxel(&self, pos: VoxelPos) -> VoxelType {
        self.store.get_voxel(pos)
    }

    /// Set the voxel at a position.
    ///
    /// Unbounded worlds allocate the owning chunk on demand; bounded worlds
    /// drop writes outside their single chunk. Returns whether the write landed.
    pub fn set_voxel(&mut self, pos: VoxelPos, voxel: VoxelType) -> bool {
        self.write_voxel(pos, voxel, true)
    }

    /// Set a voxel, allocating its chunk only if `create_if_missing` is set
    /// and the world is unbounded.
    pub fn write_voxel(
        &mut self,
        pos: VoxelPos,
        voxel: VoxelType,
        create_if_missing: bool,
    ) -> bool {
        let create = create_if_missing && self.config.shape == WorldShape::Unbounded;
        self.store.write_voxel(pos, voxel, create)
    }

    /// Fill the half-open box `[min, max)` with one voxel type.
    ///
    /// Returns the number of writes that landed.
    pub fn fill_region(&mut self, min: VoxelPos, max: VoxelPos, voxel: VoxelType) -> usize {
        let mut written = 0;
        for y in min.y..max.y {
            for z in min.z..max.z {
                for x in min.x..max.x {
                    if self.set_voxel(VoxelPos::new(x, y, z), voxel) {
                        written += 1;
                    }
                }
            }
        }
        written
    }

    /// Build the face-culled mesh of one chunk.
    pub fn extract_chunk_mesh(&self, chunk: ChunkPos) -> MeshBuffers {
        self.mesher.extract_chunk(&self.store, chunk)
    }

    /// Build meshes for every allocated chunk, ordered by chunk position.
    pub fn extract_all_meshes(&self) -> Vec<(ChunkPos, MeshBuffers)> {
        self.store
            .positions()
            .into_iter()
            .map(|pos| (pos, self.extract_chunk_mesh(pos)))
            .collect()
    }

    /// Find the first solid voxel along a ray segment.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<RayHit> {
        self.mesher.intersect_ray(&self.store, ray)
    }

    /// Pick along `ray` and apply `kind` at the picked voxel.
    ///
    /// Returns `None` when the ray hits nothing. The outcome lists the
    /// chunks whose meshes need rebuilding.
    #[instrument(level = "trace", skip(self))]
    pub fn apply_edit(&mut self, ray: &Ray, kind: EditKind) -> Option<EditOutcome> {
        let hit = self.intersect_ray(ray)?;
        let pos = edit_target(&hit, kind);
        let previous = self.get_voxel(pos);
        let voxel = kind.voxel();

        let affected = if self.set_voxel(pos, voxel) {
            affected_chunks(pos, self.chunk_size())
        } else {
            Vec::new()
        };
        debug!(?pos, ?previous, ?voxel, chunks = affected.len(), "applied edit");

        Some(EditOutcome {
            pos,
            previous,
            voxel,
            affected,
        })
    }
}

impl VoxelStorage for VoxelWorld {
    fn chunk_size(&self) -> ChunkSize {
        self.config.chunk_size
    }

    fn get_voxel(&self, pos: VoxelPos) -> VoxelType {
        self.store.get_voxel(pos)
    }

    fn contains_chunk(&self, pos: ChunkPos) -> bool {
        self.store.contains_chunk(pos)
    }
}
