use cgmath::{InnerSpace, Point3, Vector3};

use crate::world::{BlockId, BlockRegistry, Chunk, Voxel, VOXEL_SIZE};

/// March step between samples. Must stay at or below half a voxel edge so no
/// cell along the ray is ever stepped over.
pub const RAY_STEP: f32 = 0.05 * VOXEL_SIZE;

/// A viewer's line of sight for block edits: origin, normalized direction and
/// maximum reach. Samples are floored to cells; both edit operations mutate
/// at most one voxel and rebuild the chunk mesh before returning.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    origin: Point3<f32>,
    dir: Vector3<f32>,
    reach: f32,
}

impl Ray {
    pub fn new(origin: Point3<f32>, dir: Vector3<f32>, reach: f32) -> Self {
        Self {
            origin,
            dir: dir.normalize(),
            reach,
        }
    }

    fn cell_at(&self, t: f32) -> Vector3<i32> {
        let sample = self.origin + self.dir * t;

        Vector3::new(
            (sample.x / VOXEL_SIZE).floor() as i32,
            (sample.y / VOXEL_SIZE).floor() as i32,
            (sample.z / VOXEL_SIZE).floor() as i32,
        )
    }

    /// Clears the first in-bounds solid voxel along the ray and returns its
    /// cell. Out-of-bounds samples are stepped over; running out of reach
    /// without a hit leaves the chunk untouched.
    pub fn remove_block(&self, chunk: &mut Chunk, registry: &BlockRegistry) -> Option<Vector3<i32>> {
        let mut t = 0.0;
        while t < self.reach {
            let cell = self.cell_at(t);

            if Chunk::in_bounds(&cell) && chunk.is_solid(&cell, registry) {
                chunk.set(&cell, Voxel::AIR);
                chunk.rebuild_mesh(registry);
                return Some(cell);
            }

            t += RAY_STEP;
        }

        None
    }

    /// Places `block` in the last empty cell sampled before the first
    /// in-bounds solid hit, and returns that cell. No solid hit, no empty
    /// cell on record, or a record that is no longer air: nothing changes.
    pub fn place_block(
        &self,
        chunk: &mut Chunk,
        registry: &BlockRegistry,
        block: BlockId,
    ) -> Option<Vector3<i32>> {
        let mut last_empty = None;

        let mut t = 0.0;
        while t < self.reach {
            let cell = self.cell_at(t);

            if Chunk::in_bounds(&cell) {
                if chunk.is_solid(&cell, registry) {
                    return match last_empty {
                        Some(place_pos) if chunk.get(&place_pos).is_air() => {
                            chunk.set(&place_pos, Voxel::new(block));
                            chunk.rebuild_mesh(registry);
                            Some(place_pos)
                        }
                        _ => None,
                    };
                }

                last_empty = Some(cell);
            }

            t += RAY_STEP;
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{generate_voxels, BlockDescriptor, LayeredGenerator, VoxelBuffer, CHUNK_SIZE};

    fn registry() -> BlockRegistry {
        let mut registry = BlockRegistry::new();
        for (id, name, solid) in [
            (0, "Air", false),
            (1, "Stone", true),
            (2, "Dirt", true),
            (3, "Grass", true),
            (4, "Cobblestone", true),
        ] {
            registry.register(BlockDescriptor {
                id,
                name: name.to_owned(),
                texture: if solid { vec![name.to_owned()] } else { vec![] },
                is_solid: solid,
                destroy_time: 1.0,
                durability: 10,
                resistance: 5,
            });
        }
        registry
    }

    fn layered_chunk() -> Chunk {
        Chunk::new(generate_voxels(&LayeredGenerator::default()))
    }

    fn down_ray(x: f32, z: f32, reach: f32) -> Ray {
        Ray::new(Point3::new(x, 12.0, z), Vector3::new(0.0, -1.0, 0.0), reach)
    }

    #[test]
    fn remove_clears_the_first_solid_hit() {
        let registry = registry();
        let mut chunk = layered_chunk();

        let removed = down_ray(8.5, 8.5, 8.0).remove_block(&mut chunk, &registry);

        assert_eq!(removed, Some(Vector3::new(8, 7, 8)));
        assert!(chunk.get(&Vector3::new(8, 7, 8)).is_air());
        // The voxel below the removed one is untouched.
        assert_eq!(chunk.get(&Vector3::new(8, 6, 8)), Voxel::new(BlockId::new(2)));
        assert!(chunk.mesh_up_to_date());
    }

    #[test]
    fn remove_out_of_reach_is_a_no_op() {
        let registry = registry();
        let mut chunk = layered_chunk();
        chunk.rebuild_mesh(&registry);

        let removed = down_ray(8.5, 8.5, 3.0).remove_block(&mut chunk, &registry);

        assert_eq!(removed, None);
        assert_eq!(chunk.get(&Vector3::new(8, 7, 8)), Voxel::new(BlockId::new(3)));
    }

    #[test]
    fn remove_is_deterministic() {
        let registry = registry();
        let ray = Ray::new(
            Point3::new(2.3, 11.7, 4.9),
            Vector3::new(0.4, -1.0, 0.2),
            10.0,
        );

        let mut first = layered_chunk();
        let mut second = first.clone();

        assert_eq!(
            ray.remove_block(&mut first, &registry),
            ray.remove_block(&mut second, &registry)
        );
    }

    #[test]
    fn consecutive_removes_dig_downward() {
        let registry = registry();
        let mut chunk = layered_chunk();
        let ray = down_ray(3.5, 3.5, 12.0);

        assert_eq!(ray.remove_block(&mut chunk, &registry), Some(Vector3::new(3, 7, 3)));
        assert_eq!(ray.remove_block(&mut chunk, &registry), Some(Vector3::new(3, 6, 3)));
        assert_eq!(ray.remove_block(&mut chunk, &registry), Some(Vector3::new(3, 5, 3)));
    }

    #[test]
    fn place_fills_the_last_empty_cell_before_the_hit() {
        let registry = registry();
        let mut chunk = layered_chunk();

        let placed = down_ray(8.5, 8.5, 8.0).place_block(&mut chunk, &registry, BlockId::new(4));

        assert_eq!(placed, Some(Vector3::new(8, 8, 8)));
        assert_eq!(chunk.get(&Vector3::new(8, 8, 8)), Voxel::new(BlockId::new(4)));
        // The block that was hit stays in place.
        assert_eq!(chunk.get(&Vector3::new(8, 7, 8)), Voxel::new(BlockId::new(3)));
    }

    #[test]
    fn place_without_a_solid_hit_is_a_no_op() {
        let registry = registry();
        let mut chunk = layered_chunk();

        // Horizontal ray through empty sky.
        let ray = Ray::new(Point3::new(0.5, 12.5, 0.5), Vector3::new(1.0, 0.0, 0.0), 10.0);
        assert_eq!(ray.place_block(&mut chunk, &registry, BlockId::new(4)), None);
    }

    #[test]
    fn place_starting_inside_geometry_is_a_no_op() {
        let registry = registry();
        let mut chunk = layered_chunk();

        // First sample is already solid, so no empty cell is on record.
        let ray = Ray::new(Point3::new(8.5, 2.5, 8.5), Vector3::new(0.0, -1.0, 0.0), 8.0);
        assert_eq!(ray.place_block(&mut chunk, &registry, BlockId::new(4)), None);
        assert_eq!(chunk.get(&Vector3::new(8, 2, 8)), Voxel::new(BlockId::new(1)));
    }

    #[test]
    fn edits_outside_the_grid_never_happen() {
        let registry = registry();
        let mut chunk = Chunk::new(VoxelBuffer::default());

        // Ray that never crosses a solid voxel inside the grid.
        let ray = Ray::new(
            Point3::new(-4.0, CHUNK_SIZE as f32 + 2.0, -4.0),
            Vector3::new(-1.0, 0.2, -1.0),
            6.0,
        );

        assert_eq!(ray.remove_block(&mut chunk, &registry), None);
        assert_eq!(ray.place_block(&mut chunk, &registry, BlockId::new(1)), None);
        assert!(!chunk.voxels().contains_solid(&registry));
    }
}
