use crate::primitives::{generate_cone, generate_cylinder};
use glade_mesh::Mesh;
use glam::Vec3;

/// Parameters for a stacked-cone conifer. Foliage dimensions derive from the
/// trunk radius: each cone spans four trunk radii and rises six, stacked at
/// steps of one trunk diameter.
#[derive(Debug, Clone)]
pub struct TreeRecipe {
    pub trunk_radius: f32,
    pub trunk_height: f32,
    pub foliage_layers: u32,
    pub trunk_color: [f32; 3],
    pub foliage_color: [f32; 3],
}

impl Default for TreeRecipe {
    fn default() -> Self {
        TreeRecipe {
            trunk_radius: 0.1,
            trunk_height: 0.7,
            foliage_layers: 3,
            trunk_color: [0.4, 0.3, 0.3],
            foliage_color: [0.4, 0.6, 0.3],
        }
    }
}

/// Build a tree mesh: a trunk cylinder with foliage cones stacked on top.
pub fn generate_tree(recipe: &TreeRecipe) -> Mesh {
    let r = recipe.trunk_radius;
    let h = recipe.trunk_height;

    let mut trunk = generate_cylinder(r, h);
    trunk.fill_color(recipe.trunk_color);

    let mut foliage = Mesh::new();
    for layer in 0..recipe.foliage_layers {
        foliage.append(generate_cone(4.0 * r, 6.0 * r, 2.0 * r * layer as f32));
    }
    // lift the whole canopy onto the trunk, then recolor it as one piece
    foliage.translate(Vec3::new(0.0, 0.0, h));
    foliage.fill_color(recipe.foliage_color);

    let mut tree = trunk;
    tree.append(foliage);

    tree
}
