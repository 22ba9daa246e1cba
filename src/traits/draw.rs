use glam::{Mat4, Vec4};

use crate::scene::RenderCommand;

/// Receiver of one frame's draw calls; the backend owns all binding state
pub trait DrawTarget {
    /// Start a frame with its projection and clear colour
    fn begin(&mut self, projection: Mat4, clear_colour: Vec4);

    /// Queue one draw of a registered range
    fn draw(&mut self, command: RenderCommand);
}
