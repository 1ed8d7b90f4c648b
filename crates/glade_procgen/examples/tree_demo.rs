use glade_procgen::mushroom::{generate_mushroom, MushroomRecipe};
use glade_procgen::tree::{generate_tree, TreeRecipe};

fn main() {
    println!("=== Glade - Tree & Mushroom Generation Demo ===\n");

    let recipe = TreeRecipe::default();
    println!("--- Tree ---");
    println!("Trunk: radius {:.2}m, height {:.2}m", recipe.trunk_radius, recipe.trunk_height);
    println!("Foliage layers: {}", recipe.foliage_layers);

    let tree = generate_tree(&recipe);
    println!("Mesh: {} vertices, {} triangles", tree.vertex_count(), tree.triangle_count());

    let max_z = tree.positions.iter().map(|p| p.z).fold(f32::MIN, f32::max);
    println!("Total height: {:.2}m\n", max_z);

    // a taller variant from the same builder
    let tall = TreeRecipe {
        trunk_height: 1.4,
        foliage_layers: 5,
        ..TreeRecipe::default()
    };
    let tall_tree = generate_tree(&tall);
    println!("--- Tall variant ---");
    println!("Mesh: {} vertices, {} triangles\n", tall_tree.vertex_count(), tall_tree.triangle_count());

    let mushroom = generate_mushroom(&MushroomRecipe::default());
    println!("--- Mushroom ---");
    println!("Mesh: {} vertices, {} triangles", mushroom.vertex_count(), mushroom.triangle_count());

    let vertex_bytes = mushroom.vertices().len() * std::mem::size_of::<glade_mesh::MeshVertex>();
    let index_bytes = mushroom.indices().len() * std::mem::size_of::<u32>();
    println!("GPU buffers: ~{:.2} KB", (vertex_bytes + index_bytes) as f32 / 1024.0);
}
