use cgmath::Vector3;
use strum_macros::EnumIter;

/// The six axis-aligned directions a voxel face can point in. The variant
/// order fixes the face-texture index of a block: 0 = +Z front, 1 = -Z back,
/// 2 = -X west, 3 = +X east, 4 = -Y bottom, 5 = +Y top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum FaceDirection {
    Front,
    Back,
    West,
    East,
    Bottom,
    Top,
}

impl FaceDirection {
    #[allow(dead_code)]
    pub fn from_dir(dir: &Vector3<i32>) -> Option<Self> {
        if dir.x == 0 && dir.y == 0 && dir.z == 1 {
            Some(FaceDirection::Front)
        } else if dir.x == 0 && dir.y == 0 && dir.z == -1 {
            Some(FaceDirection::Back)
        } else if dir.x == -1 && dir.y == 0 && dir.z == 0 {
            Some(FaceDirection::West)
        } else if dir.x == 1 && dir.y == 0 && dir.z == 0 {
            Some(FaceDirection::East)
        } else if dir.x == 0 && dir.y == -1 && dir.z == 0 {
            Some(FaceDirection::Bottom)
        } else if dir.x == 0 && dir.y == 1 && dir.z == 0 {
            Some(FaceDirection::Top)
        } else {
            None
        }
    }

    pub fn as_dir(&self) -> Vector3<i32> {
        match self {
            FaceDirection::Front => Vector3::new(0, 0, 1),
            FaceDirection::Back => Vector3::new(0, 0, -1),
            FaceDirection::West => Vector3::new(-1, 0, 0),
            FaceDirection::East => Vector3::new(1, 0, 0),
            FaceDirection::Bottom => Vector3::new(0, -1, 0),
            FaceDirection::Top => Vector3::new(0, 1, 0),
        }
    }

    #[allow(dead_code)]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(FaceDirection::Front),
            1 => Some(FaceDirection::Back),
            2 => Some(FaceDirection::West),
            3 => Some(FaceDirection::East),
            4 => Some(FaceDirection::Bottom),
            5 => Some(FaceDirection::Top),
            _ => None,
        }
    }

    pub fn as_index(&self) -> usize {
        match self {
            FaceDirection::Front => 0,
            FaceDirection::Back => 1,
            FaceDirection::West => 2,
            FaceDirection::East => 3,
            FaceDirection::Bottom => 4,
            FaceDirection::Top => 5,
        }
    }

    /// Corner offsets of a unit quad on this side of the cube at the origin.
    /// The order is load-bearing: the two triangles (0,1,2) and (2,3,0) must
    /// wind counter-clockwise when seen from outside the cube, or back-face
    /// culling inverts which faces are visible.
    pub fn quad_corners(&self) -> [[f32; 3]; 4] {
        match self {
            FaceDirection::Front => [
                [0.0, 0.0, 1.0],
                [1.0, 0.0, 1.0],
                [1.0, 1.0, 1.0],
                [0.0, 1.0, 1.0],
            ],
            FaceDirection::Back => [
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 0.0, 0.0],
            ],
            FaceDirection::West => [
                [0.0, 0.0, 1.0],
                [0.0, 1.0, 1.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0],
            ],
            FaceDirection::East => [
                [1.0, 1.0, 0.0],
                [1.0, 1.0, 1.0],
                [1.0, 0.0, 1.0],
                [1.0, 0.0, 0.0],
            ],
            FaceDirection::Bottom => [
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 0.0, 1.0],
                [0.0, 0.0, 1.0],
            ],
            FaceDirection::Top => [
                [0.0, 1.0, 0.0],
                [0.0, 1.0, 1.0],
                [1.0, 1.0, 1.0],
                [1.0, 1.0, 0.0],
            ],
        }
    }
}
