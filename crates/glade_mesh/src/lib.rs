pub mod mesh;
pub mod vertex;

pub use mesh::*;
pub use vertex::*;
