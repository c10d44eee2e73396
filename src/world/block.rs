use std::{
    collections::hash_map::DefaultHasher,
    fs,
    hash::{Hash, Hasher},
    io,
    ops::Deref,
    path::{Path, PathBuf},
};

use either::Either;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::world::FaceDirection;

/// Identifier of a block type. `0` is reserved for air: never solid, never
/// rendered, and valid even when no block file defines it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(u16);

impl BlockId {
    pub const AIR: BlockId = BlockId(0);

    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    pub const fn is_air(self) -> bool {
        self.0 == 0
    }
}

impl Deref for BlockId {
    type Target = u16;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Opaque reference to a texture, derived from its name. The core never
/// touches image data; a renderer resolves these through
/// [`BlockRegistry::texture_name`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TextureId(u64);

impl Deref for TextureId {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for TextureId {
    fn from(value: &str) -> Self {
        TextureId({
            let mut hasher = DefaultHasher::new();
            value.to_string().hash(&mut hasher);
            hasher.finish()
        })
    }
}

/// On-disk form of a block type, one YAML file per block. `texture` holds
/// either no entries (invisible), a single name used on all six faces, or six
/// names in face order (+Z, -Z, -X, +X, -Y, +Y).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockDescriptor {
    pub id: u16,
    pub name: String,
    pub texture: Vec<String>,
    pub is_solid: bool,
    pub destroy_time: f32,
    pub durability: u32,
    pub resistance: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlockType {
    id: BlockId,
    name: String,
    texture: Option<Either<TextureId, [TextureId; 6]>>,
    is_solid: bool,
    destroy_time: f32,
    durability: u32,
    resistance: u32,
}

impl BlockType {
    pub const fn id(&self) -> BlockId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn is_solid(&self) -> bool {
        self.is_solid
    }

    pub const fn is_rendered(&self) -> bool {
        self.texture.is_some()
    }

    pub const fn texture(&self) -> Option<&Either<TextureId, [TextureId; 6]>> {
        self.texture.as_ref()
    }

    /// Texture for one face of this block, `None` when the block has no
    /// texture entry at all.
    pub fn face_texture(&self, face: FaceDirection) -> Option<TextureId> {
        self.texture.as_ref().map(|texture| match texture {
            Either::Left(all_faces) => *all_faces,
            Either::Right(per_face) => per_face[face.as_index()],
        })
    }

    pub const fn destroy_time(&self) -> f32 {
        self.destroy_time
    }

    pub const fn durability(&self) -> u32 {
        self.durability
    }

    pub const fn resistance(&self) -> u32 {
        self.resistance
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed reading block directory {path:?} - {source}")]
    ReadDir { path: PathBuf, source: io::Error },
}

/// All block types known to a world, keyed by id. An explicit instance is
/// passed wherever solidity or textures are resolved; there is no process-wide
/// registry.
#[derive(Clone, Debug, Default)]
pub struct BlockRegistry {
    blocks: FxHashMap<BlockId, BlockType>,
    texture_id_to_name: FxHashMap<TextureId, String>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every block descriptor file in `path`. A file that fails to
    /// read or parse, or a descriptor that fails validation, is logged and
    /// skipped; only an unreadable directory fails the whole load.
    pub fn load_from_dir(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let entries = fs::read_dir(path).map_err(|source| RegistryError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;

        let mut out = Self::new();
        for entry in entries {
            let file_path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    log::error!("Failed reading directory entry in `{}` - {e}", path.display());
                    continue;
                }
            };

            match fs::read_to_string(&file_path) {
                Ok(block_string) => match serde_yaml::from_str::<BlockDescriptor>(&block_string) {
                    Ok(descriptor) => out.register(descriptor),
                    Err(e) => log::error!("Failed parsing `{}` - {e}", file_path.display()),
                },
                Err(e) => log::error!("Failed reading block file `{}` - {e}", file_path.display()),
            }
        }

        Ok(out)
    }

    /// Registers one block type. A descriptor with a texture count other than
    /// 0, 1 or 6, or an id already taken, is logged and dropped.
    pub fn register(&mut self, descriptor: BlockDescriptor) {
        let id = BlockId::new(descriptor.id);

        if self.blocks.contains_key(&id) {
            log::error!(
                "Block `{}` reuses id {} - already registered as `{}`",
                descriptor.name,
                descriptor.id,
                self.blocks[&id].name()
            );
            return;
        }

        let texture = match descriptor.texture.len() {
            0 => None,
            1 => Some(Either::Left(TextureId::from(descriptor.texture[0].as_str()))),
            6 => {
                let mut per_face = [TextureId::default(); 6];
                for (slot, name) in per_face.iter_mut().zip(&descriptor.texture) {
                    *slot = TextureId::from(name.as_str());
                }
                Some(Either::Right(per_face))
            }
            n => {
                log::error!(
                    "Block `{}` has invalid number of textures - {n}. Only 0, 1 or 6 textures are valid",
                    descriptor.name
                );
                return;
            }
        };

        for name in &descriptor.texture {
            self.texture_id_to_name
                .insert(TextureId::from(name.as_str()), name.to_owned());
        }

        self.blocks.insert(
            id,
            BlockType {
                id,
                name: descriptor.name,
                texture,
                is_solid: descriptor.is_solid,
                destroy_time: descriptor.destroy_time,
                durability: descriptor.durability,
                resistance: descriptor.resistance,
            },
        );
    }

    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.blocks.get(&id)
    }

    /// Solidity of an id; an unregistered id is treated as non-solid.
    pub fn is_solid(&self, id: BlockId) -> bool {
        self.get(id).map_or(false, BlockType::is_solid)
    }

    pub fn texture_name(&self, id: &TextureId) -> Option<&String> {
        self.texture_id_to_name.get(id)
    }

    #[allow(dead_code)]
    pub fn all_texture_names(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.texture_id_to_name.values().map(String::as_str).collect();
        out.sort_unstable();
        out
    }
}
