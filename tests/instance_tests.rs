use glam::{Mat4, Vec3, Vec4};
use scene_demos::composite::{BandstandStep, Composite, Tree};
use scene_demos::instance::{Instance, Placement};
use scene_demos::layout::MeshKey;
use scene_demos::math::{compose_trs, RotationAxis};
use scene_demos::mesh::Shape;

const LEAF: Vec4 = Vec4::new(0.0, 0.6, 0.0, 1.0);
const TRUNK: Vec4 = Vec4::new(0.55, 0.25, 0.08, 1.0);

#[cfg(test)]
mod instance_tests {
    use super::*;

    #[test]
    fn test_unrotated_unit_placement_is_translation() {
        let placement = Placement::new(Vec3::new(5.0, 5.0, 0.0), 0.0, Vec3::ONE);
        let instance = Instance::new(Shape::Cone, placement, RotationAxis::Z, LEAF);
        let expected = Mat4::from_translation(Vec3::new(5.0, 5.0, 0.0));
        assert!(instance.model().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_model_is_translate_rotate_scale() {
        let placement = Placement::new(Vec3::new(1.0, 2.0, 3.0), 90.0, Vec3::new(2.0, 1.0, 1.0));
        let instance = Instance::new(Shape::RectangularPrism, placement, RotationAxis::Z, LEAF);
        // (1,0,0) scales to (2,0,0), turns to (0,2,0), then moves
        let p = instance.model().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(1.0, 4.0, 3.0), 1e-5));
        assert_eq!(
            instance.model(),
            compose_trs(placement.location, RotationAxis::Z, 90.0, placement.scale)
        );
    }

    #[test]
    fn test_fixed_and_segmented() {
        let instance = Instance::fixed(MeshKey::Named("grass"), LEAF);
        assert_eq!(instance.model(), Mat4::IDENTITY);
        assert_eq!(instance.segments(), 1);
        assert_eq!(instance.segmented(50).segments(), 50);
        assert_eq!(Instance::fixed(MeshKey::Named("grass"), LEAF).segmented(0).segments(), 1);
    }

    #[test]
    fn test_explicit_transform_kept() {
        let m = Mat4::from_rotation_y(1.0) * Mat4::from_scale(Vec3::splat(0.5));
        let instance = Instance::with_transform(Shape::Cylinder, m, TRUNK);
        assert_eq!(instance.model(), m);
        assert_eq!(instance.mesh(), MeshKey::Shape(Shape::Cylinder));
        assert_eq!(instance.colour(), TRUNK);
    }
}

#[cfg(test)]
mod composite_tests {
    use super::*;

    #[test]
    fn test_tree_parts() {
        let placement = Placement::at(Vec3::new(-10.0, 20.0, 0.0), Vec3::splat(3.0));
        let parts = Tree::new(placement, RotationAxis::Z, LEAF, TRUNK).parts();
        assert_eq!(parts.len(), 2);

        let trunk = &parts[0];
        assert_eq!(trunk.mesh(), MeshKey::Shape(Shape::Cylinder));
        assert_eq!(trunk.colour(), TRUNK);
        let expected = compose_trs(
            Vec3::new(-10.0, 20.0, 0.0),
            RotationAxis::Z,
            0.0,
            Vec3::new(1.2, 1.2, 3.0),
        );
        assert!(trunk.model().abs_diff_eq(expected, 1e-5));

        let leaves = &parts[1];
        assert_eq!(leaves.mesh(), MeshKey::Shape(Shape::Cone));
        assert_eq!(leaves.colour(), LEAF);
        let expected = compose_trs(
            Vec3::new(-10.0, 20.0, 3.0),
            RotationAxis::Z,
            0.0,
            Vec3::new(5.1, 5.1, 6.0),
        );
        assert!(leaves.model().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_bandstand_step_parts() {
        let base = Vec4::new(0.95, 0.95, 0.95, 1.0);
        let side = Vec4::new(0.8, 0.8, 0.8, 1.0);
        let placement = Placement::at(Vec3::new(0.0, 0.0, 0.25), Vec3::new(7.4, 7.4, 0.25));
        let parts = BandstandStep::new(placement, RotationAxis::Z, base, side).parts();

        let meshes: Vec<_> = parts.iter().map(Instance::mesh).collect();
        assert_eq!(
            meshes,
            vec![
                MeshKey::Shape(Shape::Octagon),
                MeshKey::Shape(Shape::Octagon),
                MeshKey::Shape(Shape::Step),
            ]
        );
        // floor at the origin height, ceiling one step higher
        let floor = parts[0].model().transform_point3(Vec3::ZERO);
        let ceiling = parts[1].model().transform_point3(Vec3::ZERO);
        assert!((floor.z - 0.25).abs() < 1e-6);
        assert!((ceiling.z - 0.5).abs() < 1e-6);
        assert_eq!(parts[2].colour(), side);
        assert_eq!(parts[0].colour(), base);
    }
}
