mod misc;
mod ray;
pub mod world;

use std::{env, path::PathBuf};

pub use misc::Settings;
pub use ray::{Ray, RAY_STEP};
pub use world::{
    generate_voxels, BlockDescriptor, BlockId, BlockRegistry, BlockType, Chunk, FaceDirection,
    LayeredGenerator, MeshBuffer, MeshVertex, NoiseGenerator, RegistryError, TextureId, Voxel,
    VoxelBuffer, WorldGenerator, CHUNK_SIZE, VOXEL_SIZE,
};

pub const TITLE: &'static str = "gridcraft";

/// Directory holding the block descriptor files, overridable for packaged
/// installs.
pub fn resource_path() -> PathBuf {
    if let Ok(var) = env::var("RESOURCE_PATH") {
        PathBuf::from(var)
    } else {
        PathBuf::from("./res")
    }
}
