use glam::Vec3;

use super::BoxAnchor;

pub(super) const VERTEX_COUNT: usize = 36;

// Corners 0-3 on the top face, 4-7 below them.
const CORNERS: [[f32; 3]; 8] = [
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 0.0, 1.0],
    [0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 0.0],
];

// Counter-clockwise seen from outside the box.
const FACES: [[usize; 4]; 6] = [
    [1, 0, 3, 2],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
    [6, 5, 1, 2],
    [4, 5, 6, 7],
    [5, 4, 0, 1],
];

/// Unit box as a triangle list, two triangles per face.
pub(super) fn rectangular_prism(anchor: BoxAnchor) -> Vec<Vec3> {
    let shift = match anchor {
        BoxAnchor::Corner => Vec3::ZERO,
        BoxAnchor::Centered => Vec3::splat(0.5),
    };
    FACES
        .iter()
        .flat_map(|&[a, b, c, d]| [a, b, c, a, c, d])
        .map(|i| Vec3::from_array(CORNERS[i]) - shift)
        .collect()
}
