use cgmath::Vector3;

use crate::world::CHUNK_SIZE;

#[inline]
pub const fn index_from_pos(pos: &Vector3<i32>) -> u32 {
    debug_assert!(
        pos.x >= 0
            && pos.x < CHUNK_SIZE as i32
            && pos.y >= 0
            && pos.y < CHUNK_SIZE as i32
            && pos.z >= 0
            && pos.z < CHUNK_SIZE as i32
    );

    ((pos.x * CHUNK_SIZE as i32 + pos.y) * CHUNK_SIZE as i32 + pos.z) as u32
}

#[allow(dead_code)]
#[inline]
pub const fn pos_from_index(index: u32) -> Vector3<i32> {
    debug_assert!(index < CHUNK_SIZE.pow(3));

    let z = index % CHUNK_SIZE;
    let y = (index / CHUNK_SIZE) % CHUNK_SIZE;
    let x = index / (CHUNK_SIZE * CHUNK_SIZE);

    Vector3::new(x as i32, y as i32, z as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_over_the_grid() {
        for x in 0..CHUNK_SIZE as i32 {
            for y in 0..CHUNK_SIZE as i32 {
                for z in 0..CHUNK_SIZE as i32 {
                    let pos = Vector3::new(x, y, z);
                    assert_eq!(pos_from_index(index_from_pos(&pos)), pos);
                }
            }
        }
    }

    #[test]
    fn indices_are_dense_and_unique() {
        assert_eq!(index_from_pos(&Vector3::new(0, 0, 0)), 0);
        assert_eq!(
            index_from_pos(&Vector3::new(
                CHUNK_SIZE as i32 - 1,
                CHUNK_SIZE as i32 - 1,
                CHUNK_SIZE as i32 - 1
            )),
            CHUNK_SIZE.pow(3) - 1
        );
    }
}
