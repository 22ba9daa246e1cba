mod color;
mod transform;

pub use color::{rgb, srgb_to_linear};
pub use transform::{compose_trs, look_at, ortho, perspective, rotation, RotationAxis};
