use cgmath::{Point3, Vector3};
use gridcraft::{
    generate_voxels, BlockId, BlockRegistry, Chunk, LayeredGenerator, NoiseGenerator, Ray, Settings,
    CHUNK_SIZE,
};

// Headless smoke run: generate a chunk, mesh it, then exercise one remove and
// one place through the raycast editor. Rendering lives in a separate client.
fn main() {
    env_logger::init();

    let settings = Settings::load_from_file();

    let registry = match BlockRegistry::load_from_dir(gridcraft::resource_path().join("block")) {
        Ok(registry) => registry,
        Err(e) => {
            log::error!("Failed loading block registry - {e}");
            return;
        }
    };

    let voxels = if settings.flat_world {
        generate_voxels(&LayeredGenerator::default())
    } else {
        let seed = if settings.seed == 0 {
            NoiseGenerator::generate_seed()
        } else {
            settings.seed
        };
        log::info!("Generating terrain with seed {seed}");
        generate_voxels(&NoiseGenerator::new(seed))
    };

    let mut chunk = Chunk::new(voxels);
    let mesh = chunk.rebuild_mesh(&registry);
    log::info!(
        "Chunk meshed: {} faces, {} vertices, {} indices",
        mesh.face_count(),
        mesh.vertices().len(),
        mesh.indices().len()
    );

    let center = CHUNK_SIZE as f32 / 2.0;
    let ray = Ray::new(
        Point3::new(center, 12.0, center),
        Vector3::new(0.0, -1.0, 0.0),
        settings.reach,
    );

    match ray.remove_block(&mut chunk, &registry) {
        Some(cell) => log::info!("Removed block at {cell:?}"),
        None => log::info!("Nothing to remove within reach"),
    }
    match ray.place_block(&mut chunk, &registry, BlockId::new(4)) {
        Some(cell) => log::info!("Placed block at {cell:?}"),
        None => log::info!("No spot to place within reach"),
    }

    if let Some(mesh) = chunk.mesh() {
        log::info!(
            "Chunk remeshed: {} faces, {} vertices, {} indices",
            mesh.face_count(),
            mesh.vertices().len(),
            mesh.indices().len()
        );
    }
}
