mod block;
mod chunk;
mod face;
mod mesh;
mod terrain_generator;
mod voxel;

pub use block::{BlockDescriptor, BlockId, BlockRegistry, BlockType, RegistryError, TextureId};
pub use chunk::{Chunk, VoxelBuffer, CHUNK_SIZE, VOXEL_SIZE};
pub use face::FaceDirection;
pub use mesh::{MeshBuffer, MeshVertex};
pub use terrain_generator::{generate_voxels, LayeredGenerator, NoiseGenerator, WorldGenerator};
pub use voxel::Voxel;
