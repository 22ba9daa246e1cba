pub mod camera;
pub mod draw;
pub mod scene;

pub use camera::*;
pub use draw::*;
pub use scene::*;
