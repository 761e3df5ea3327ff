//! Face-culled mesh extraction and ray picking over chunked voxel storage.
//!
//! Both algorithms are stateless readers of a [`VoxelStorage`]; they never
//! mutate the world and may run concurrently against a store that is not
//! being written to.

pub mod atlas;
pub mod face;
pub mod mesh;
pub mod mesher;
pub mod raycast;

pub use atlas::AtlasLayout;
pub use face::{FaceCorner, FaceDescriptor, FACES, FACE_INDICES};
pub use mesh::MeshBuffers;
pub use mesher::{extract_chunk_mesh, VoxelMesher};
pub use raycast::{intersect_ray, intersect_ray_from};

pub use voxgrid_voxel::VoxelStorage;
