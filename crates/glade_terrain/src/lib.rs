pub mod heightfield;
pub mod mesh_gen;
pub mod scatter;

pub use heightfield::*;
pub use mesh_gen::*;
pub use scatter::*;
