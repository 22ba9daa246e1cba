//! Fixed groups of instances placed relative to one origin.

use glam::{Vec3, Vec4};

use crate::instance::{Instance, Placement};
use crate::math::RotationAxis;
use crate::mesh::Shape;

/// A prop made of several primitive instances.
pub trait Composite {
    /// Parts in draw order.
    fn parts(&self) -> Vec<Instance>;
}

/// Cylinder trunk with a cone of leaves on top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tree {
    pub placement: Placement,
    pub axis: RotationAxis,
    pub leaf: Vec4,
    pub trunk: Vec4,
}

impl Tree {
    const TRUNK_SCALE: Vec3 = Vec3::new(0.4, 0.4, 1.0);
    const LEAF_SCALE: Vec3 = Vec3::new(1.7, 1.7, 2.0);

    pub fn new(placement: Placement, axis: RotationAxis, leaf: Vec4, trunk: Vec4) -> Self {
        Self {
            placement,
            axis,
            leaf,
            trunk,
        }
    }
}

impl Composite for Tree {
    fn parts(&self) -> Vec<Instance> {
        let p = self.placement;
        let trunk = Placement::new(p.location, p.angle_degrees, p.scale * Self::TRUNK_SCALE);
        let leaves = Placement::new(
            p.location + Vec3::new(0.0, 0.0, p.scale.z),
            p.angle_degrees,
            p.scale * Self::LEAF_SCALE,
        );
        vec![
            Instance::new(Shape::Cylinder, trunk, self.axis, self.trunk),
            Instance::new(Shape::Cone, leaves, self.axis, self.leaf),
        ]
    }
}

/// One octagonal tier: floor, ceiling and side wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandstandStep {
    pub placement: Placement,
    pub axis: RotationAxis,
    pub base: Vec4,
    pub side: Vec4,
}

impl BandstandStep {
    pub fn new(placement: Placement, axis: RotationAxis, base: Vec4, side: Vec4) -> Self {
        Self {
            placement,
            axis,
            base,
            side,
        }
    }
}

impl Composite for BandstandStep {
    fn parts(&self) -> Vec<Instance> {
        let p = self.placement;
        let ceiling = Placement {
            location: p.location + Vec3::new(0.0, 0.0, p.scale.z),
            ..p
        };
        vec![
            Instance::new(Shape::Octagon, p, self.axis, self.base),
            Instance::new(Shape::Octagon, ceiling, self.axis, self.base),
            Instance::new(Shape::Step, p, self.axis, self.side),
        ]
    }
}
