use glam::Vec3;

/// CPU-side triangle mesh with per-vertex attributes.
///
/// Builders assemble `positions` and `triangles` first and leave the
/// attribute buffers empty; `fill_empty_fields` completes the mesh before it
/// is returned to a caller. Triangle winding determines the front face and is
/// never reordered by any operation here.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub colors: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub triangles: Vec<[u32; 3]>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate `count` vertex slots so builders can write by index.
    pub fn with_vertex_count(count: usize) -> Self {
        Mesh {
            positions: vec![Vec3::ZERO; count],
            ..Default::default()
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Fill any attribute buffer the builder left empty with defaults:
    /// white colors, smooth normals derived from connectivity.
    pub fn fill_empty_fields(&mut self) {
        if self.colors.is_empty() {
            self.colors = vec![[1.0, 1.0, 1.0]; self.positions.len()];
        }
        if self.normals.is_empty() {
            self.normals = calculate_smooth_normals(&self.positions, &self.triangles);
        }
    }

    /// Overwrite the whole color buffer with a single color.
    pub fn fill_color(&mut self, color: [f32; 3]) {
        self.colors.clear();
        self.colors.resize(self.positions.len(), color);
    }

    /// Shift every vertex position by a constant offset.
    pub fn translate(&mut self, offset: Vec3) {
        for position in &mut self.positions {
            *position += offset;
        }
    }

    /// Concatenate another mesh onto this one.
    ///
    /// Appended triangle indices are offset by the current vertex count so
    /// they keep pointing at the vertices they came with.
    pub fn append(&mut self, other: Mesh) {
        let offset = self.positions.len() as u32;
        self.positions.extend(other.positions);
        self.colors.extend(other.colors);
        self.normals.extend(other.normals);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|&[a, b, c]| [a + offset, b + offset, c + offset]),
        );
    }
}

/// Smooth per-vertex normals by accumulating area-weighted face normals.
///
/// Vertices referenced by no triangle (or only by degenerate ones) fall back
/// to +Z.
fn calculate_smooth_normals(positions: &[Vec3], triangles: &[[u32; 3]]) -> Vec<[f32; 3]> {
    let mut accumulated = vec![Vec3::ZERO; positions.len()];

    for &[i0, i1, i2] in triangles {
        let p0 = positions[i0 as usize];
        let p1 = positions[i1 as usize];
        let p2 = positions[i2 as usize];

        // Cross product length is proportional to face area, so larger faces
        // weigh more in the average.
        let face_normal = (p1 - p0).cross(p2 - p0);

        accumulated[i0 as usize] += face_normal;
        accumulated[i1 as usize] += face_normal;
        accumulated[i2 as usize] += face_normal;
    }

    accumulated
        .into_iter()
        .map(|n| {
            if n.length_squared() > 0.0 {
                n.normalize().to_array()
            } else {
                [0.0, 0.0, 1.0]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.positions = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        mesh.triangles = vec![[0, 1, 2], [0, 2, 3]];
        mesh.fill_empty_fields();
        mesh
    }

    #[test]
    fn test_fill_empty_fields_defaults() {
        let mesh = unit_quad();
        assert_eq!(mesh.colors.len(), 4);
        assert_eq!(mesh.normals.len(), 4);
        assert_eq!(mesh.colors[0], [1.0, 1.0, 1.0]);

        // Flat CCW quad in the xy plane faces +Z with unit-length normals
        for normal in &mesh.normals {
            let n = Vec3::from_array(*normal);
            assert!((n.length() - 1.0).abs() < 1e-6);
            assert!((n.z - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_unreferenced_vertex_gets_default_normal() {
        let mut mesh = unit_quad();
        mesh.positions.push(Vec3::new(5.0, 5.0, 5.0));
        mesh.normals.clear();
        mesh.colors.clear();
        mesh.fill_empty_fields();
        assert_eq!(mesh.normals[4], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_append_offsets_indices() {
        let mut combined = unit_quad();
        let other = unit_quad();
        combined.append(other);

        assert_eq!(combined.vertex_count(), 8);
        assert_eq!(combined.triangle_count(), 4);
        assert_eq!(combined.colors.len(), 8);
        assert_eq!(combined.normals.len(), 8);

        // Second quad's triangles were shifted by the first quad's 4 vertices,
        // winding untouched
        assert_eq!(combined.triangles[2], [4, 5, 6]);
        assert_eq!(combined.triangles[3], [4, 6, 7]);
    }

    #[test]
    fn test_translate() {
        let mut mesh = unit_quad();
        mesh.translate(Vec3::new(0.0, 0.0, 2.0));
        for position in &mesh.positions {
            assert_eq!(position.z, 2.0);
        }
    }

    #[test]
    fn test_fill_color_matches_vertex_count() {
        let mut mesh = unit_quad();
        mesh.fill_color([0.4, 0.6, 0.3]);
        assert_eq!(mesh.colors.len(), mesh.vertex_count());
        assert!(mesh.colors.iter().all(|&c| c == [0.4, 0.6, 0.3]));
    }
}
