use crate::primitives::{generate_cone, generate_cylinder};
use glade_mesh::Mesh;

/// Parameters for a toadstool: a thin stem capped by a single wide cone.
#[derive(Debug, Clone)]
pub struct MushroomRecipe {
    pub stem_radius: f32,
    pub stem_height: f32,
    pub stem_color: [f32; 3],
    pub cap_color: [f32; 3],
}

impl Default for MushroomRecipe {
    fn default() -> Self {
        MushroomRecipe {
            stem_radius: 0.02,
            stem_height: 0.1,
            stem_color: [0.9, 0.9, 0.9],
            cap_color: [0.9, 0.15, 0.13],
        }
    }
}

/// Build a mushroom mesh: stem cylinder plus a cap cone resting on its top.
pub fn generate_mushroom(recipe: &MushroomRecipe) -> Mesh {
    let r = recipe.stem_radius;
    let h = recipe.stem_height;

    let mut stem = generate_cylinder(r, h);
    stem.fill_color(recipe.stem_color);

    // the cap cone is built directly at stem height via its z offset
    let mut cap = generate_cone(4.0 * r, 2.0 * r, h);
    cap.fill_color(recipe.cap_color);

    let mut mushroom = stem;
    mushroom.append(cap);

    mushroom
}
