//! Procedural terrain seeding.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use voxgrid_core::{ChunkPos, LocalPos, VoxelPos, VoxelType};

use crate::world::VoxelWorld;
use crate::WorldSeed;

/// Terrain generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Seed for noise generation.
    pub seed: WorldSeed,
    /// Lowest surface height (Y coordinate).
    pub base_height: i32,
    /// Horizontal scale of terrain features.
    pub terrain_scale: f64,
    /// Maximum terrain height variation above the base.
    pub terrain_height: f64,
    /// Number of noise octaves for detail.
    pub octaves: usize,
    /// Frequency multiplier between octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between octaves.
    pub persistence: f64,
    /// Depth of the sub-surface layer below the surface.
    pub subsurface_depth: u32,
    /// Voxel type of the surface layer.
    pub surface: VoxelType,
    /// Voxel type just below the surface.
    pub subsurface: VoxelType,
    /// Voxel type of everything deeper.
    pub deep: VoxelType,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            base_height: 4,
            terrain_scale: 48.0,
            terrain_height: 16.0,
            octaves: 4,
            lacunarity: 2.0,
            persistence: 0.5,
            subsurface_depth: 3,
            surface: VoxelType(1),
            subsurface: VoxelType(2),
            deep: VoxelType(3),
        }
    }
}

/// Height-field terrain generator using fractal noise.
pub struct TerrainGenerator {
    config: TerrainConfig,
    height_noise: Fbm<Perlin>,
}

impl TerrainGenerator {
    /// Create a new terrain generator with the given configuration.
    pub fn new(config: TerrainConfig) -> Self {
        let height_noise = Fbm::<Perlin>::new(config.seed as u32)
            .set_octaves(config.octaves)
            .set_lacunarity(config.lacunarity)
            .set_persistence(config.persistence);

        Self {
            config,
            height_noise,
        }
    }

    /// Create a terrain generator with default configuration.
    pub fn with_seed(seed: WorldSeed) -> Self {
        Self::new(TerrainConfig {
            seed,
            ..Default::default()
        })
    }

    /// Get the terrain configuration.
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Surface height at voxel XZ coordinates.
    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        let nx = f64::from(x) / self.config.terrain_scale;
        let nz = f64::from(z) / self.config.terrain_scale;

        // Noise returns [-1, 1], map to [0, terrain_height] above the base.
        let noise_value = self.height_noise.get([nx, nz]).clamp(-1.0, 1.0);
        ((noise_value + 1.0) * 0.5 * self.config.terrain_height) as i32 + self.config.base_height
    }

    /// Voxel type at height `y` below a surface at `surface_height`.
    fn voxel_at_depth(&self, y: i32, surface_height: i32) -> VoxelType {
        if y > surface_height {
            VoxelType::EMPTY
        } else if y == surface_height {
            self.config.surface
        } else if y > surface_height - self.config.subsurface_depth as i32 {
            self.config.subsurface
        } else {
            self.config.deep
        }
    }

    /// Seed one chunk of `world`. Returns the number of solid voxels written.
    pub fn generate_chunk(&self, world: &mut VoxelWorld, pos: ChunkPos) -> usize {
        let size = world.chunk_size();
        let edge = size.get();
        let mut written = 0;

        for lz in 0..edge {
            for lx in 0..edge {
                let column = LocalPos::new(lx, 0, lz);
                let Some(base) = VoxelPos::from_chunk_local(pos, column, size) else {
                    continue;
                };
                let surface_height = self.height_at(base.x, base.z);

                for ly in 0..edge {
                    let local = LocalPos::new(lx, ly, lz);
                    let Some(voxel_pos) = VoxelPos::from_chunk_local(pos, local, size) else {
                        continue;
                    };
                    let voxel = self.voxel_at_depth(voxel_pos.y, surface_height);
                    if voxel.is_solid() && world.set_voxel(voxel_pos, voxel) {
                        written += 1;
                    }
                }
            }
        }

        debug!(?pos, written, "generated chunk");
        written
    }

    /// Seed every chunk in the inclusive box `[min, max]`.
    pub fn generate_region(&self, world: &mut VoxelWorld, min: ChunkPos, max: ChunkPos) -> usize {
        let mut written = 0;
        for cy in min.y..=max.y {
            for cz in min.z..=max.z {
                for cx in min.x..=max.x {
                    written += self.generate_chunk(world, ChunkPos::new(cx, cy, cz));
                }
            }
        }
        info!(?min, ?max, written, "generated terrain region");
        written
    }
}
