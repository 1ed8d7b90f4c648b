use glade_mesh::Mesh;
use glade_procgen::mushroom::{generate_mushroom, MushroomRecipe};
use glade_procgen::tree::{generate_tree, TreeRecipe};
use glade_terrain::heightfield::HeightProfile;
use glade_terrain::mesh_gen::generate_terrain_mesh;
use glade_terrain::scatter::scatter_positions;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Glade - Scene Assembly Demo ===\n");

    let profile = HeightProfile::default();
    let terrain_length = 20.0;
    let mut rng = StdRng::seed_from_u64(2024);

    let mut scene = generate_terrain_mesh(&profile, 100, terrain_length);
    println!(
        "Terrain: {} vertices, {} triangles",
        scene.vertex_count(),
        scene.triangle_count()
    );

    let tree_spots = scatter_positions(&profile, &mut rng, 40, terrain_length, 1.5)?;
    let tree_recipe = TreeRecipe::default();
    for spot in &tree_spots {
        let mut tree = generate_tree(&tree_recipe);
        tree.translate(*spot);
        scene.append(tree);
    }
    println!("Planted {} trees", tree_spots.len());

    let mushroom_spots = scatter_positions(&profile, &mut rng, 60, terrain_length, 0.0)?;
    let mushroom_recipe = MushroomRecipe::default();
    for spot in &mushroom_spots {
        let mut mushroom = generate_mushroom(&mushroom_recipe);
        mushroom.translate(*spot);
        scene.append(mushroom);
    }
    println!("Planted {} mushrooms", mushroom_spots.len());

    report(&scene);

    Ok(())
}

fn report(scene: &Mesh) {
    println!("\nScene totals: {} vertices, {} triangles", scene.vertex_count(), scene.triangle_count());

    let vertex_bytes = scene.vertices().len() * std::mem::size_of::<glade_mesh::MeshVertex>();
    let index_bytes = scene.indices().len() * std::mem::size_of::<u32>();
    println!("GPU buffers: ~{:.2} KB", (vertex_bytes + index_bytes) as f32 / 1024.0);
}
