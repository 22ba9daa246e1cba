use std::fmt;

use crate::layout::MeshKey;

/// Errors raised while generating meshes or assembling a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Angular step of zero or one that does not divide 360 degrees
    InvalidAngularStep(u32),
    /// The same mesh key was registered twice
    DuplicateMesh(MeshKey),
    /// An instance references a mesh that is not in the registry
    UnregisteredMesh(MeshKey),
    /// A segmented instance cannot split its range into equal parts
    UnevenSegments {
        mesh: MeshKey,
        count: u32,
        segments: u32,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAngularStep(step) => {
                write!(f, "angular step of {step} degrees does not divide 360")
            }
            Self::DuplicateMesh(key) => write!(f, "mesh '{key}' registered twice"),
            Self::UnregisteredMesh(key) => write!(f, "mesh '{key}' is not registered"),
            Self::UnevenSegments {
                mesh,
                count,
                segments,
            } => write!(
                f,
                "mesh '{mesh}' has {count} vertices, not divisible into {segments} segments"
            ),
        }
    }
}

impl std::error::Error for SceneError {}
