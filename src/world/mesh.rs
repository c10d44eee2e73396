use bytemuck::{Pod, Zeroable};
use cgmath::Vector3;
use either::Either;
use strum::IntoEnumIterator;

use crate::world::{BlockRegistry, Chunk, FaceDirection, TextureId, CHUNK_SIZE, VOXEL_SIZE};

/// Interleaved vertex as a renderer uploads it: position then UV.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

// Every face carries the same UV square; textures are bound per face, not
// remapped through an atlas.
const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Geometry derived from one chunk: one textured quad per exposed voxel face.
/// Each group of 6 indices is one face, drawn with the texture at the same
/// position in `face_textures`. Rebuilt wholesale, never patched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffer {
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
    face_textures: Vec<TextureId>,
}

impl MeshBuffer {
    /// Walks the grid and emits a quad for every face of a solid voxel whose
    /// neighbor is non-solid. Neighbors outside the grid read as air, so
    /// faces on the chunk boundary are always emitted. A voxel whose id is
    /// not registered, or whose block has no textures, contributes nothing.
    pub fn build(chunk: &Chunk, registry: &BlockRegistry) -> Self {
        let mut out = Self::default();

        if !chunk.voxels().contains_solid(registry) {
            return out;
        }

        for x in 0..CHUNK_SIZE as i32 {
            for y in 0..CHUNK_SIZE as i32 {
                for z in 0..CHUNK_SIZE as i32 {
                    let pos = Vector3::new(x, y, z);
                    let voxel = chunk.get(&pos);
                    if voxel.is_air() {
                        continue;
                    }

                    let Some(block) = registry.get(voxel.block_id()) else {
                        log::warn!(
                            "No block type registered for id {:} at {pos:?} - skipping",
                            *voxel.block_id()
                        );
                        continue;
                    };
                    if !block.is_solid() {
                        continue;
                    }

                    let Some(texture) = block.texture() else {
                        log::warn!("Solid block `{:}` has no textures - skipping", block.name());
                        continue;
                    };

                    for face in FaceDirection::iter() {
                        if chunk.is_solid(&(pos + face.as_dir()), registry) {
                            continue;
                        }

                        out.push_face(
                            &pos,
                            face,
                            match texture {
                                Either::Left(all_faces) => *all_faces,
                                Either::Right(per_face) => per_face[face.as_index()],
                            },
                        );
                    }
                }
            }
        }

        out
    }

    fn push_face(&mut self, pos: &Vector3<i32>, face: FaceDirection, texture: TextureId) {
        let base = self.vertices.len() as u32;

        for (corner, uv) in face.quad_corners().into_iter().zip(FACE_UVS) {
            self.vertices.push(MeshVertex {
                position: [
                    (pos.x as f32 + corner[0]) * VOXEL_SIZE,
                    (pos.y as f32 + corner[1]) * VOXEL_SIZE,
                    (pos.z as f32 + corner[2]) * VOXEL_SIZE,
                ],
                uv,
            });
        }

        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        self.face_textures.push(texture);
    }

    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// One texture reference per face, in face order: the renderer binds
    /// entry `i` before drawing indices `6 * i .. 6 * i + 6`.
    pub fn face_textures(&self) -> &[TextureId] {
        &self.face_textures
    }

    pub fn face_count(&self) -> usize {
        self.indices.len() / 6
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
