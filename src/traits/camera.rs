use glam::{Mat4, Vec3};

use crate::camera::NavCommand;
use crate::input::Key;

/// Keyboard-driven camera abstraction
pub trait CameraController {
    /// World-to-view transform for the current state
    fn view_matrix(&self) -> Mat4;

    /// Projection for a viewport of the given width/height ratio
    fn projection(&self, aspect: f32) -> Mat4;

    /// Camera position in world space
    fn eye(&self) -> Vec3;

    /// Command bound to `key` for this camera, if any
    fn command_for(&self, key: Key) -> Option<NavCommand>;

    /// Apply one discrete command. Returns false when nothing changed.
    fn apply(&mut self, command: NavCommand) -> bool;
}
