//! Wooden cartwheel turning about the X axis, viewed on an orbit.

use std::f32::consts::PI;

use glam::{Mat4, Vec3, Vec4};

use crate::camera::{AzimuthFrom, CameraRig, OrbitCamera, OrbitTuning, OrthoBounds};
use crate::error::SceneError;
use crate::instance::{Instance, Placement};
use crate::layout::MeshRegistry;
use crate::math::{rgb, rotation, RotationAxis};
use crate::mesh::{CylinderSpan, MeshStyle, Shape};
use crate::traits::SceneProvider;

const HUB_CYLINDER: Vec4 = rgb(1.0, 1.0, 0.0);
const HUB_CIRCLE: Vec4 = rgb(0.85, 0.85, 0.0);
const SPOKES: Vec4 = rgb(1.0, 0.0, 0.0);
const OUTER_RIM: Vec4 = rgb(0.8, 0.8, 0.8);
const INNER_RIM: Vec4 = rgb(0.95, 0.95, 0.95);
const RIM_SIDES: Vec4 = rgb(0.9, 0.7, 0.7);

const SPOKE_COUNT: u32 = 12;
const HUB_RADIUS: f32 = 0.2;
const RIM_INNER_RADIUS: f32 = 0.85;
/// Standing the unit meshes upright turns their Z axis into -Y
const UPRIGHT: f32 = 90.0;

pub struct Cartwheel {
    tuning: OrbitTuning,
}

impl Cartwheel {
    pub fn new(tuning: OrbitTuning) -> Self {
        Self { tuning }
    }

    /// Spoke `i` as a thin cylinder from the hub out to the rim, turned about Y.
    pub fn spoke_transform(i: u32) -> Mat4 {
        let angle = i as f32 / SPOKE_COUNT as f32 * 360.0;
        let half_length = (RIM_INNER_RADIUS - HUB_RADIUS) / 2.0;
        rotation(RotationAxis::Y, angle)
            * Mat4::from_translation(Vec3::new(0.0, 0.0, (HUB_RADIUS + RIM_INNER_RADIUS) / 2.0))
            * Mat4::from_scale(Vec3::new(0.02, 0.02, half_length))
    }
}

impl SceneProvider for Cartwheel {
    fn name(&self) -> &str {
        "cartwheel"
    }

    fn mesh_style(&self) -> Result<MeshStyle, SceneError> {
        Ok(MeshStyle::with_angular_step(5)?.cylinder_span(CylinderSpan::Symmetric))
    }

    fn register_meshes(
        &self,
        registry: &mut MeshRegistry,
        style: &MeshStyle,
    ) -> Result<(), SceneError> {
        for shape in [Shape::Cylinder, Shape::Circle, Shape::CircularStrip] {
            registry.register_shape(shape, style)?;
        }
        Ok(())
    }

    fn instances(&self) -> Vec<Instance> {
        let axis = RotationAxis::X;
        let upright = |x: f32, y: f32, z: f32, scale: Vec3| {
            Placement::new(Vec3::new(x, y, z), UPRIGHT, scale)
        };
        let hub = Vec3::splat(HUB_RADIUS);

        let mut instances = vec![
            Instance::new(Shape::Cylinder, upright(0.0, 0.0, 0.0, hub), axis, HUB_CYLINDER),
            Instance::new(Shape::Circle, upright(0.0, -HUB_RADIUS, 0.0, hub), axis, HUB_CIRCLE),
            Instance::new(Shape::Circle, upright(0.0, HUB_RADIUS, 0.0, hub), axis, HUB_CIRCLE),
        ];
        instances.extend(
            (0..SPOKE_COUNT)
                .map(|i| Instance::with_transform(Shape::Cylinder, Self::spoke_transform(i), SPOKES)),
        );

        let outer = Vec3::new(1.0, 1.0, 0.1);
        let inner = Vec3::new(RIM_INNER_RADIUS, RIM_INNER_RADIUS, 0.1);
        instances.extend([
            Instance::new(Shape::Cylinder, upright(0.0, 0.0, 0.0, outer), axis, OUTER_RIM),
            Instance::new(Shape::Cylinder, upright(0.0, 0.0, 0.0, inner), axis, INNER_RIM),
            Instance::new(Shape::CircularStrip, upright(0.0, 0.0, 0.0, outer), axis, RIM_SIDES),
            Instance::new(Shape::CircularStrip, upright(0.0, 0.2, 0.0, outer), axis, RIM_SIDES),
        ]);
        instances
    }

    fn camera(&self) -> CameraRig {
        CameraRig::Orbit(OrbitCamera::new(
            2.0,
            PI / 3.0,
            PI / 4.0,
            AzimuthFrom::X,
            OrthoBounds::square(2.0, 0.1, 10.0),
            self.tuning,
        ))
    }

    fn clear_colour(&self) -> Vec4 {
        rgb(0.5, 0.5, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spoke_spans_hub_to_rim() {
        let m = Cartwheel::spoke_transform(0);
        let inner = m.transform_point3(Vec3::new(0.0, 0.0, -1.0));
        let outer = m.transform_point3(Vec3::new(0.0, 0.0, 1.0));
        assert!((inner.z - HUB_RADIUS).abs() < 1e-6);
        assert!((outer.z - RIM_INNER_RADIUS).abs() < 1e-6);
    }

    #[test]
    fn test_quarter_spoke_points_along_x() {
        let m = Cartwheel::spoke_transform(3);
        let tip = m.transform_point3(Vec3::new(0.0, 0.0, 1.0));
        assert!(tip.abs_diff_eq(Vec3::new(RIM_INNER_RADIUS, 0.0, 0.0), 1e-5));
    }
}
