use crate::mesh::Mesh;

/// Interleaved vertex layout for GPU upload.
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl Mesh {
    /// Interleave the attribute buffers into one vertex stream.
    ///
    /// Attributes missing for a vertex (mesh not yet completed with
    /// `fill_empty_fields`) fall back to the same defaults it would assign.
    pub fn vertices(&self) -> Vec<MeshVertex> {
        (0..self.positions.len())
            .map(|i| MeshVertex {
                position: self.positions[i].to_array(),
                normal: self.normals.get(i).copied().unwrap_or([0.0, 0.0, 1.0]),
                color: self.colors.get(i).copied().unwrap_or([1.0, 1.0, 1.0]),
            })
            .collect()
    }

    /// Flat index buffer, three entries per triangle.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}
