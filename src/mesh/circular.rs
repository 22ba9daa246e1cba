use glam::Vec3;

use super::{CylinderSpan, MeshStyle};

/// Side wall only; bottom then top rim point per sample. Caps are separate circles.
pub(super) fn cylinder(style: &MeshStyle) -> Vec<Vec3> {
    let bottom = style.cylinder_span.bottom();
    let top = CylinderSpan::TOP;
    style
        .ring()
        .flat_map(|(x, y)| [Vec3::new(x, y, bottom), Vec3::new(x, y, top)])
        .collect()
}

/// Apex first, then the base rim at z = 0.
pub(super) fn cone(style: &MeshStyle) -> Vec<Vec3> {
    std::iter::once(Vec3::Z)
        .chain(style.ring().map(|(x, y)| Vec3::new(x, y, 0.0)))
        .collect()
}

pub(super) fn circle(style: &MeshStyle) -> Vec<Vec3> {
    style.ring().map(|(x, y)| Vec3::new(x, y, 0.0)).collect()
}

/// Annulus at z = 1, outer then inner point per sample.
pub(super) fn circular_strip(style: &MeshStyle) -> Vec<Vec3> {
    let inner = style.strip_inner_radius;
    style
        .ring()
        .flat_map(|(x, y)| [Vec3::new(x, y, 1.0), Vec3::new(x * inner, y * inner, 1.0)])
        .collect()
}
