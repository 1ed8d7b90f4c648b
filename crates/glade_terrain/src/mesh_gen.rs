use crate::heightfield::HeightProfile;
use glade_mesh::Mesh;
use glam::Vec3;

/// Sample the height profile on a `resolution` x `resolution` grid over a
/// square of side `terrain_length` centered at the origin, and triangulate
/// it with two triangles per cell.
///
/// `resolution` is the vertex count per side and must be at least 2. The
/// vertex at grid position (ku, kv) lands at flat index `kv + N * ku`.
pub fn generate_terrain_mesh(
    profile: &HeightProfile,
    resolution: usize,
    terrain_length: f32,
) -> Mesh {
    debug_assert!(resolution >= 2);

    let n = resolution;
    let mut terrain = Mesh::with_vertex_count(n * n);

    for ku in 0..n {
        for kv in 0..n {
            // parametric coordinates (u, v) in [0, 1]
            let u = ku as f32 / (n as f32 - 1.0);
            let v = kv as f32 / (n as f32 - 1.0);

            let x = (u - 0.5) * terrain_length;
            let y = (v - 0.5) * terrain_length;
            let z = profile.height(x, y);

            terrain.positions[kv + n * ku] = Vec3::new(x, y, z);
        }
    }

    // Two triangles per grid cell. The diagonal choice and winding feed the
    // derived normals, so they stay fixed.
    let stride = n as u32;
    for ku in 0..n - 1 {
        for kv in 0..n - 1 {
            let idx = (kv + n * ku) as u32;

            terrain.triangles.push([idx, idx + 1 + stride, idx + 1]);
            terrain.triangles.push([idx, idx + stride, idx + 1 + stride]);
        }
    }

    terrain.fill_empty_fields();

    log::debug!(
        "terrain mesh: {} vertices, {} triangles",
        terrain.vertex_count(),
        terrain.triangle_count()
    );

    terrain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_counts() {
        let profile = HeightProfile::default();
        for n in [2, 3, 10, 33] {
            let terrain = generate_terrain_mesh(&profile, n, 20.0);
            assert_eq!(terrain.vertex_count(), n * n);
            assert_eq!(terrain.triangle_count(), 2 * (n - 1) * (n - 1));
        }
    }

    #[test]
    fn test_indices_in_bounds() {
        let profile = HeightProfile::default();
        let terrain = generate_terrain_mesh(&profile, 10, 20.0);
        let count = terrain.vertex_count() as u32;
        for triangle in &terrain.triangles {
            assert!(triangle.iter().all(|&i| i < count));
        }
    }

    #[test]
    fn test_smallest_grid_corners() {
        let profile = HeightProfile::default();
        let terrain = generate_terrain_mesh(&profile, 2, 2.0);

        for position in &terrain.positions {
            assert!(position.x == -1.0 || position.x == 1.0);
            assert!(position.y == -1.0 || position.y == 1.0);
            assert_eq!(position.z, profile.height(position.x, position.y));
        }
    }

    #[test]
    fn test_attributes_filled() {
        let terrain = generate_terrain_mesh(&HeightProfile::default(), 5, 10.0);
        assert_eq!(terrain.colors.len(), terrain.vertex_count());
        assert_eq!(terrain.normals.len(), terrain.vertex_count());
    }
}
