use glam::{Mat4, Vec3};

/// Axis an instance rotates about. `Z` is world-up in every scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

impl RotationAxis {
    pub const fn vector(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }
}

/// Rotation about a principal axis, angle in degrees
pub fn rotation(axis: RotationAxis, angle_degrees: f32) -> Mat4 {
    Mat4::from_axis_angle(axis.vector(), angle_degrees.to_radians())
}

/// `T(location) * R(axis, angle) * S(scale)`: scale first, then rotate, then translate.
pub fn compose_trs(location: Vec3, axis: RotationAxis, angle_degrees: f32, scale: Vec3) -> Mat4 {
    Mat4::from_translation(location) * rotation(axis, angle_degrees) * Mat4::from_scale(scale)
}

pub fn look_at(eye: Vec3, at: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, at, up)
}

/// Perspective projection with a vertical field of view in degrees (0..1 depth range)
pub fn perspective(fovy_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh(fovy_degrees.to_radians(), aspect, near, far)
}

pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    Mat4::orthographic_rh(left, right, bottom, top, near, far)
}
