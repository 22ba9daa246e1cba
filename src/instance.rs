use glam::{Mat4, Vec3, Vec4};

use crate::layout::MeshKey;
use crate::math::{compose_trs, RotationAxis};

/// Where a unit mesh lands in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub location: Vec3,
    pub angle_degrees: f32,
    pub scale: Vec3,
}

impl Placement {
    pub const fn new(location: Vec3, angle_degrees: f32, scale: Vec3) -> Self {
        Self {
            location,
            angle_degrees,
            scale,
        }
    }

    /// Unrotated placement
    pub const fn at(location: Vec3, scale: Vec3) -> Self {
        Self::new(location, 0.0, scale)
    }

    pub fn transform(&self, axis: RotationAxis) -> Mat4 {
        compose_trs(self.location, axis, self.angle_degrees, self.scale)
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::at(Vec3::ZERO, Vec3::ONE)
    }
}

/// A registered mesh drawn once with its own transform and colour.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    mesh: MeshKey,
    model: Mat4,
    colour: Vec4,
    segments: u32,
}

impl Instance {
    pub fn new(
        mesh: impl Into<MeshKey>,
        placement: Placement,
        axis: RotationAxis,
        colour: Vec4,
    ) -> Self {
        Self::with_transform(mesh, placement.transform(axis), colour)
    }

    pub fn with_transform(mesh: impl Into<MeshKey>, model: Mat4, colour: Vec4) -> Self {
        Self {
            mesh: mesh.into(),
            model,
            colour,
            segments: 1,
        }
    }

    /// Static geometry authored directly in world space.
    pub fn fixed(mesh: impl Into<MeshKey>, colour: Vec4) -> Self {
        Self::with_transform(mesh, Mat4::IDENTITY, colour)
    }

    /// Draw the range as `n` equal consecutive pieces.
    pub fn segmented(mut self, n: u32) -> Self {
        self.segments = n.max(1);
        self
    }

    pub fn mesh(&self) -> MeshKey {
        self.mesh
    }

    pub fn model(&self) -> Mat4 {
        self.model
    }

    pub fn colour(&self) -> Vec4 {
        self.colour
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }
}
