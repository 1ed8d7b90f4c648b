pub mod mushroom;
pub mod primitives;
pub mod tree;

pub use mushroom::*;
pub use primitives::*;
pub use tree::*;
