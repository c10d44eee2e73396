use cgmath::Vector3;
use noise::{Cache, NoiseFn, Perlin};
use rand::prelude::*;

use crate::{
    misc::index::index_from_pos,
    world::{BlockId, Voxel, VoxelBuffer, CHUNK_SIZE},
};

/// A world generation rule: which block sits in each cell of the grid.
/// Generation is independent of meshing; any rule that answers for the whole
/// grid works.
pub trait WorldGenerator {
    fn block_at(&self, pos: &Vector3<i32>) -> BlockId;
}

/// Fills the full grid from a generation rule.
pub fn generate_voxels(generator: &impl WorldGenerator) -> VoxelBuffer {
    let mut voxels = vec![Voxel::AIR; (CHUNK_SIZE as usize).pow(3)];

    for x in 0..CHUNK_SIZE as i32 {
        for y in 0..CHUNK_SIZE as i32 {
            for z in 0..CHUNK_SIZE as i32 {
                let pos = Vector3::new(x, y, z);
                voxels[index_from_pos(&pos) as usize] = Voxel::new(generator.block_at(&pos));
            }
        }
    }

    VoxelBuffer::new(voxels)
}

/// Flat layered world: stone up to `y = 4`, dirt at `y = 5..6`, grass at
/// `y = 7`, air above.
#[derive(Clone, Copy, Debug)]
pub struct LayeredGenerator {
    stone: BlockId,
    dirt: BlockId,
    grass: BlockId,
}

impl LayeredGenerator {
    pub const fn new(stone: BlockId, dirt: BlockId, grass: BlockId) -> Self {
        Self { stone, dirt, grass }
    }
}

impl Default for LayeredGenerator {
    fn default() -> Self {
        Self::new(BlockId::new(1), BlockId::new(2), BlockId::new(3))
    }
}

impl WorldGenerator for LayeredGenerator {
    fn block_at(&self, pos: &Vector3<i32>) -> BlockId {
        if pos.y < 5 {
            self.stone
        } else if pos.y < 7 {
            self.dirt
        } else if pos.y == 7 {
            self.grass
        } else {
            BlockId::AIR
        }
    }
}

const BASE_GROUND_LEVEL: f64 = 8.0;
const HILLINESS: f64 = 6.0;
const NOISE_SCALE: f64 = 32.0;
const LEVELS_OF_DIRT: i32 = 3;

/// Rolling terrain from a seeded Perlin height field, with the same
/// grass/dirt/stone column structure as [`LayeredGenerator`].
#[derive(Clone, Debug)]
pub struct NoiseGenerator {
    #[allow(dead_code)]
    seed: u32,
    noise: Cache<Perlin>,
    layers: LayeredGenerator,
}

impl NoiseGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            noise: Cache::new(Perlin::new(seed)),
            layers: LayeredGenerator::default(),
        }
    }

    pub fn with_layers(seed: u32, layers: LayeredGenerator) -> Self {
        Self {
            seed,
            noise: Cache::new(Perlin::new(seed)),
            layers,
        }
    }

    pub fn generate_seed() -> u32 {
        let mut rng = rand::thread_rng();
        rng.gen()
    }

    fn ground_level(&self, x: i32, z: i32) -> i32 {
        let xz = [x as f64 / NOISE_SCALE, z as f64 / NOISE_SCALE];
        (BASE_GROUND_LEVEL + self.noise.get(xz) * HILLINESS) as i32
    }
}

impl WorldGenerator for NoiseGenerator {
    fn block_at(&self, pos: &Vector3<i32>) -> BlockId {
        let ground_y = self.ground_level(pos.x, pos.z);

        if pos.y > ground_y {
            BlockId::AIR
        } else if pos.y == ground_y {
            self.layers.grass
        } else if pos.y > ground_y - LEVELS_OF_DIRT {
            self.layers.dirt
        } else {
            self.layers.stone
        }
    }
}
