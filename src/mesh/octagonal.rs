use std::f32::consts::TAU;

use glam::Vec3;

pub(super) const SIDES: usize = 8;

/// Corner `i` sits half a step off the axes so that edges face the cardinal directions.
fn corner(i: usize) -> (f32, f32) {
    let theta = TAU / SIDES as f32 * (i as f32 + 0.5);
    (theta.cos(), theta.sin())
}

pub(super) fn octagon() -> Vec<Vec3> {
    (0..SIDES)
        .map(corner)
        .map(|(x, y)| Vec3::new(x, y, 0.0))
        .collect()
}

/// Apex, then the ring closed by repeating corner 0.
pub(super) fn octagonal_pyramid() -> Vec<Vec3> {
    std::iter::once(Vec3::Z)
        .chain((0..=SIDES).map(corner).map(|(x, y)| Vec3::new(x, y, 0.0)))
        .collect()
}

/// Octagonal side wall between z = 0 and z = 1, closed.
pub(super) fn step() -> Vec<Vec3> {
    (0..=SIDES)
        .map(corner)
        .flat_map(|(x, y)| [Vec3::new(x, y, 0.0), Vec3::new(x, y, 1.0)])
        .collect()
}
