use glade_mesh::Mesh;
use glam::Vec3;
use std::f32::consts::TAU;

/// Angular resolution of the round primitives. The ring itself carries
/// `RADIAL_RESOLUTION - 1` vertices; the missing last sample coincides with
/// the first one and is closed by index wraparound instead.
pub const RADIAL_RESOLUTION: usize = 20;

/// Open-ended cylinder: two vertex rings at z = 0 and z = `height`, side
/// quads split into two triangles each, no caps.
pub fn generate_cylinder(radius: f32, height: f32) -> Mesh {
    let n_u = RADIAL_RESOLUTION;
    let n_v = 2;

    let mut mesh = Mesh::with_vertex_count((n_u - 1) * n_v);

    for ku in 0..n_u - 1 {
        let u = ku as f32 / (n_u as f32 - 1.0);
        let (sin, cos) = (TAU * u).sin_cos();
        for kv in 0..n_v {
            let z = if kv == 0 { 0.0 } else { height };
            mesh.positions[kv + n_v * ku] = Vec3::new(radius * cos, radius * sin, z);
        }
    }

    let num_vertices = (n_v * (n_u - 1)) as u32;
    for ku in 0..n_u - 1 {
        for kv in 0..n_v - 1 {
            let idx = (kv + n_v * ku) as u32;

            mesh.triangles.push([
                (idx + 2) % num_vertices,
                (idx + 1) % num_vertices,
                idx % num_vertices,
            ]);
            mesh.triangles.push([
                (idx + 2) % num_vertices,
                (idx + 3) % num_vertices,
                (idx + 1) % num_vertices,
            ]);
        }
    }

    mesh.fill_empty_fields();

    mesh
}

/// Cone over an open base ring: ring vertices at z = `z_offset`, then the
/// base center, then the apex at z = `z_offset + height` appended last.
/// Base and mantle are both fan-triangulated.
pub fn generate_cone(radius: f32, height: f32, z_offset: f32) -> Mesh {
    let n_u = RADIAL_RESOLUTION;
    let ring = n_u - 1;

    // ring + base center + apex; center and apex sit at the end of the buffer
    let mut mesh = Mesh::with_vertex_count(ring + 2);
    let center_idx = (mesh.vertex_count() - 2) as u32;
    let apex_idx = (mesh.vertex_count() - 1) as u32;
    mesh.positions[center_idx as usize] = Vec3::new(0.0, 0.0, z_offset);
    mesh.positions[apex_idx as usize] = Vec3::new(0.0, 0.0, z_offset + height);

    for ku in 0..ring {
        let u = ku as f32 / (n_u as f32 - 1.0);
        let (sin, cos) = (TAU * u).sin_cos();
        mesh.positions[ku] = Vec3::new(radius * cos, radius * sin, z_offset);
    }

    // The fan loop runs one step past the ring: the modulo wrap closes the
    // cone, and the final pair repeats the first segment. Triangle count is
    // therefore 2 * RADIAL_RESOLUTION, and callers count on that.
    let base = ring as u32;
    for ku in 0..n_u as u32 {
        mesh.triangles.push([center_idx, ku % base, (ku + 1) % base]);
        mesh.triangles.push([(ku + 1) % base, apex_idx, ku % base]);
    }

    mesh.fill_empty_fields();

    mesh
}
