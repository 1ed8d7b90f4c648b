use crate::heightfield::HeightProfile;
use glam::Vec3;
use rand::Rng;
use thiserror::Error;

/// Attempt cap when rejection-sampling a single point.
pub const MAX_TRIES: u32 = 1000;

/// Spacing below this is treated as "no spacing constraint".
const NEGLIGIBLE_DIST: f32 = 1.0e-12;

#[derive(Debug, Error)]
pub enum ScatterError {
    /// No candidate for one point satisfied the spacing constraint within
    /// the attempt cap: the domain is too small, `min_dist` too large or the
    /// requested count too high.
    #[error("exhausted retry budget placing point {index}: spacing constraint unsatisfiable")]
    Exhausted { index: usize },
}

/// A candidate keeps `min_dist` to every accepted point. The candidate is
/// compared at each accepted point's own elevation, which reduces to planar
/// distance.
fn is_position_valid(x: f32, y: f32, accepted: &[Vec3], min_dist: f32) -> bool {
    if min_dist < NEGLIGIBLE_DIST {
        return true;
    }

    accepted
        .iter()
        .all(|p| p.distance(Vec3::new(x, y, p.z)) >= min_dist)
}

/// Rejection-sample `count` positions on the terrain, uniformly over the
/// square footprint of side `terrain_length`, pairwise at least `min_dist`
/// apart. Each accepted position carries its terrain elevation as z.
///
/// Fails with [`ScatterError::Exhausted`] as soon as one point runs out of
/// tries; nothing partial is returned.
pub fn scatter_positions(
    profile: &HeightProfile,
    rng: &mut impl Rng,
    count: usize,
    terrain_length: f32,
    min_dist: f32,
) -> Result<Vec<Vec3>, ScatterError> {
    let half = 0.5 * terrain_length;
    let mut positions = Vec::with_capacity(count);

    for index in 0..count {
        let mut tries = 0u32;
        loop {
            tries += 1;
            if tries > MAX_TRIES {
                return Err(ScatterError::Exhausted { index });
            }

            let x = rng.gen_range(-half..half);
            let y = rng.gen_range(-half..half);

            if is_position_valid(x, y, &positions, min_dist) {
                positions.push(Vec3::new(x, y, profile.height(x, y)));
                break;
            }
        }
    }

    log::debug!(
        "scattered {} positions over {}x{} with spacing {}",
        positions.len(),
        terrain_length,
        terrain_length,
        min_dist
    );

    Ok(positions)
}
