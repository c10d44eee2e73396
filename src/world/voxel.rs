use crate::world::{BlockId, BlockRegistry};

/// One cell of the chunk grid. Cells always hold a value; empty space is the
/// canonical [`Voxel::AIR`], not an absence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Voxel {
    block: BlockId,
}

impl Voxel {
    pub const AIR: Voxel = Voxel { block: BlockId::AIR };

    pub const fn new(block: BlockId) -> Self {
        Self { block }
    }

    pub const fn block_id(&self) -> BlockId {
        self.block
    }

    pub const fn is_air(&self) -> bool {
        self.block.is_air()
    }

    /// Solidity is derived through the registry; air and unregistered ids are
    /// non-solid.
    pub fn is_solid(&self, registry: &BlockRegistry) -> bool {
        registry.is_solid(self.block)
    }
}
