use std::{iter, ops::Index};

use cgmath::Vector3;
use rle_vec::RleVec;

use crate::{
    misc::index::index_from_pos,
    world::{BlockRegistry, MeshBuffer, Voxel},
};

/// Blocks along each axis of the cubic chunk grid.
pub const CHUNK_SIZE: u32 = 17;
/// World-space edge length of one voxel.
pub const VOXEL_SIZE: f32 = 1.0;

/// Run-length encoded storage for the full `CHUNK_SIZE`³ grid. Every cell
/// holds a value; layered worlds collapse into a handful of runs.
#[derive(Clone, Debug)]
pub struct VoxelBuffer {
    buffer: RleVec<Voxel>,
}

impl VoxelBuffer {
    pub fn new(voxels: Vec<Voxel>) -> Self {
        debug_assert!(voxels.len() == (CHUNK_SIZE as usize).pow(3));

        Self {
            buffer: RleVec::from_iter(voxels),
        }
    }

    pub fn filled(voxel: Voxel) -> Self {
        Self {
            buffer: RleVec::from_iter(iter::repeat(voxel).take((CHUNK_SIZE as usize).pow(3))),
        }
    }

    pub fn set(&mut self, pos: &Vector3<i32>, voxel: Voxel) {
        self.buffer.set(index_from_pos(pos) as usize, voxel);
    }

    /// Fast occupancy probe over the runs, without visiting every cell.
    pub fn contains_solid(&self, registry: &BlockRegistry) -> bool {
        self.buffer.runs().any(|run| run.value.is_solid(registry))
    }
}

impl Default for VoxelBuffer {
    fn default() -> Self {
        Self::filled(Voxel::AIR)
    }
}

impl Index<&Vector3<i32>> for VoxelBuffer {
    type Output = Voxel;

    fn index(&self, index: &Vector3<i32>) -> &Self::Output {
        &self.buffer[index_from_pos(index) as usize]
    }
}

/// The fixed-size voxel grid and its derived mesh. The chunk is the single
/// source of truth for world state inside its bounds and the exclusive owner
/// of the mesh built from it.
pub struct Chunk {
    voxels: VoxelBuffer,
    mesh: Option<MeshBuffer>,
    mesh_up_to_date: bool,
}

impl Chunk {
    pub fn new(voxels: VoxelBuffer) -> Self {
        Self {
            voxels,
            mesh: None,
            mesh_up_to_date: false,
        }
    }

    pub const fn in_bounds(pos: &Vector3<i32>) -> bool {
        pos.x >= 0
            && pos.x < CHUNK_SIZE as i32
            && pos.y >= 0
            && pos.y < CHUNK_SIZE as i32
            && pos.z >= 0
            && pos.z < CHUNK_SIZE as i32
    }

    /// Total over all of `i32`³: anything outside the grid reads as air, so
    /// callers never need a bounds check of their own.
    pub fn get(&self, pos: &Vector3<i32>) -> Voxel {
        if Self::in_bounds(pos) {
            self.voxels[pos]
        } else {
            Voxel::AIR
        }
    }

    /// Replaces one cell and marks the mesh stale. Writes outside the grid
    /// are ignored.
    pub fn set(&mut self, pos: &Vector3<i32>, voxel: Voxel) {
        if Self::in_bounds(pos) {
            self.voxels.set(pos, voxel);
            self.mesh_up_to_date = false;
        }
    }

    pub fn is_solid(&self, pos: &Vector3<i32>, registry: &BlockRegistry) -> bool {
        self.get(pos).is_solid(registry)
    }

    pub fn voxels(&self) -> &VoxelBuffer {
        &self.voxels
    }

    /// Drops any previous mesh and builds a fresh one from the current grid.
    /// Edits are coalesced for free: however many cells changed since the
    /// last build, the cost is one rebuild.
    pub fn rebuild_mesh(&mut self, registry: &BlockRegistry) -> &MeshBuffer {
        let mesh = MeshBuffer::build(self, registry);
        self.mesh_up_to_date = true;

        self.mesh.insert(mesh)
    }

    pub fn mesh(&self) -> Option<&MeshBuffer> {
        self.mesh.as_ref()
    }

    pub fn mesh_up_to_date(&self) -> bool {
        self.mesh_up_to_date
    }

    pub fn set_mesh_outdated(&mut self) {
        self.mesh_up_to_date = false
    }
}

impl Clone for Chunk {
    fn clone(&self) -> Self {
        // The mesh is owned by exactly one chunk; a clone starts without one.
        Self {
            voxels: self.voxels.clone(),
            mesh: None,
            mesh_up_to_date: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{BlockDescriptor, BlockId};

    fn stone_registry() -> BlockRegistry {
        let mut registry = BlockRegistry::new();
        registry.register(BlockDescriptor {
            id: 1,
            name: "Stone".to_owned(),
            texture: vec!["Stone".to_owned()],
            is_solid: true,
            destroy_time: 1.5,
            durability: 30,
            resistance: 15,
        });
        registry
    }

    #[test]
    fn reads_outside_the_grid_are_air() {
        let chunk = Chunk::new(VoxelBuffer::filled(Voxel::new(BlockId::new(1))));

        assert_eq!(chunk.get(&Vector3::new(-1, 0, 0)), Voxel::AIR);
        assert_eq!(chunk.get(&Vector3::new(0, CHUNK_SIZE as i32, 0)), Voxel::AIR);
        assert_eq!(chunk.get(&Vector3::new(3, 3, 99)), Voxel::AIR);
        assert_eq!(chunk.get(&Vector3::new(0, 0, 0)), Voxel::new(BlockId::new(1)));
    }

    #[test]
    fn writes_outside_the_grid_are_ignored() {
        let mut chunk = Chunk::new(VoxelBuffer::default());
        let registry = stone_registry();
        chunk.rebuild_mesh(&registry);

        chunk.set(&Vector3::new(-1, 5, 5), Voxel::new(BlockId::new(1)));
        chunk.set(&Vector3::new(5, 5, CHUNK_SIZE as i32), Voxel::new(BlockId::new(1)));

        assert!(chunk.mesh_up_to_date());
        assert!(!chunk.voxels().contains_solid(&registry));
    }

    #[test]
    fn in_bounds_write_marks_mesh_stale() {
        let mut chunk = Chunk::new(VoxelBuffer::default());
        let registry = stone_registry();
        chunk.rebuild_mesh(&registry);
        assert!(chunk.mesh_up_to_date());

        chunk.set(&Vector3::new(4, 4, 4), Voxel::new(BlockId::new(1)));

        assert!(!chunk.mesh_up_to_date());
        assert_eq!(chunk.get(&Vector3::new(4, 4, 4)), Voxel::new(BlockId::new(1)));

        chunk.rebuild_mesh(&registry);
        assert!(chunk.mesh_up_to_date());
    }

    #[test]
    fn solid_probe_sees_every_run() {
        let registry = stone_registry();
        let mut buffer = VoxelBuffer::default();
        assert!(!buffer.contains_solid(&registry));

        buffer.set(&Vector3::new(16, 16, 16), Voxel::new(BlockId::new(1)));
        assert!(buffer.contains_solid(&registry));
    }
}
