use glam::Vec3;

use crate::layout::MeshKey;
use crate::mesh::{Mesh, Topology};

pub const GRASS: MeshKey = MeshKey::Named("grass");

/// 2 km square of ground centred on the origin
pub fn grass() -> Mesh {
    fan(&[
        Vec3::new(1000.0, -1000.0, 0.0),
        Vec3::new(1000.0, 1000.0, 0.0),
        Vec3::new(-1000.0, 1000.0, 0.0),
        Vec3::new(-1000.0, -1000.0, 0.0),
    ])
}

/// World-space convex polygon drawn as a fan
pub fn fan(points: &[Vec3]) -> Mesh {
    Mesh::new(points.to_vec(), Topology::TriangleFan)
}
