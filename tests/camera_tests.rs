use glam::Vec3;
use scene_demos::camera::{
    AzimuthFrom, CameraRig, FlyCamera, FlyTuning, NavCommand, OrbitCamera, OrbitTuning,
    OrthoBounds,
};
use scene_demos::input::Key;
use scene_demos::traits::CameraController;

fn fly() -> FlyCamera {
    FlyCamera::new(
        Vec3::new(0.0, -75.0, 2.0),
        Vec3::new(0.0, 0.0, 2.0),
        27.0,
        1.0,
        300.0,
        FlyTuning::default(),
    )
    .with_vertical_nudge()
}

fn orbit(from: AzimuthFrom) -> OrbitCamera {
    OrbitCamera::new(
        2.0,
        std::f32::consts::FRAC_PI_3,
        std::f32::consts::FRAC_PI_4,
        from,
        OrthoBounds::square(2.0, 0.1, 10.0),
        OrbitTuning::default(),
    )
}

#[cfg(test)]
mod fly_tests {
    use super::*;

    #[test]
    fn test_advance_then_retreat_restores() {
        let mut camera = fly();
        assert!(camera.apply(NavCommand::Advance));
        assert!(camera.eye.abs_diff_eq(Vec3::new(0.0, -74.0, 2.0), 1e-5));
        assert!(camera.at.abs_diff_eq(Vec3::new(0.0, 1.0, 2.0), 1e-5));
        assert!(camera.apply(NavCommand::Retreat));
        assert!(camera.eye.abs_diff_eq(Vec3::new(0.0, -75.0, 2.0), 1e-5));
        assert!(camera.at.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-5));
    }

    #[test]
    fn test_strafe_moves_along_right() {
        let mut camera = fly();
        camera.apply(NavCommand::StrafeRight);
        // looking down +Y with +Z up, right is +X
        assert!(camera.eye.abs_diff_eq(Vec3::new(1.0, -75.0, 2.0), 1e-5));
        camera.apply(NavCommand::StrafeLeft);
        assert!(camera.eye.abs_diff_eq(Vec3::new(0.0, -75.0, 2.0), 1e-5));
    }

    #[test]
    fn test_turn_left_then_right_restores_at() {
        let mut camera = fly();
        let eye = camera.eye;
        camera.apply(NavCommand::TurnLeft);
        assert!(camera.at.x < 0.0, "turning left swings the view towards -X");
        assert_eq!(camera.eye, eye);
        // turning keeps the look distance
        assert!(((camera.at - camera.eye).length() - 75.0).abs() < 1e-3);
        camera.apply(NavCommand::TurnRight);
        assert!(camera.at.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-3));
        assert_eq!(camera.eye, eye);
    }

    #[test]
    fn test_vertical_nudge() {
        let mut camera = fly();
        camera.apply(NavCommand::Raise);
        assert!((camera.eye.z - 2.25).abs() < 1e-6);
        assert!((camera.at.z - 2.25).abs() < 1e-6);
        camera.apply(NavCommand::Lower);
        camera.apply(NavCommand::Lower);
        assert!((camera.eye.z - 1.75).abs() < 1e-6);
    }

    #[test]
    fn test_fov_clamps() {
        let mut camera = fly();
        assert!(camera.apply(NavCommand::WidenFov));
        assert_eq!(camera.fovy_degrees, 33.0);
        for _ in 0..10 {
            camera.apply(NavCommand::WidenFov);
        }
        assert_eq!(camera.fovy_degrees, 45.0);
        assert!(!camera.apply(NavCommand::WidenFov), "already at the limit");
        for _ in 0..10 {
            camera.apply(NavCommand::NarrowFov);
        }
        assert_eq!(camera.fovy_degrees, 15.0);
    }

    #[test]
    fn test_start_fov_clamped_into_tuning() {
        let narrow_floor = FlyTuning {
            fov_min: 30.0,
            ..FlyTuning::default()
        };
        let camera = FlyCamera::new(Vec3::ZERO, Vec3::Y, 27.0, 1.0, 300.0, narrow_floor);
        assert_eq!(camera.fovy_degrees, 30.0);

        let low_ceiling = FlyTuning {
            fov_max: 20.0,
            ..FlyTuning::default()
        };
        let camera = FlyCamera::new(Vec3::ZERO, Vec3::Y, 27.0, 1.0, 300.0, low_ceiling);
        assert_eq!(camera.fovy_degrees, 20.0);
    }

    #[test]
    fn test_fov_commands_move_the_right_way() {
        for (fov_min, fov_max) in [(30.0, 45.0), (15.0, 20.0), (27.0, 27.0)] {
            let tuning = FlyTuning {
                fov_min,
                fov_max,
                ..FlyTuning::default()
            };
            let mut camera = FlyCamera::new(Vec3::ZERO, Vec3::Y, 27.0, 1.0, 300.0, tuning);
            let before = camera.fovy_degrees;
            camera.apply(NavCommand::NarrowFov);
            assert!(camera.fovy_degrees <= before, "narrow widened in [{fov_min}, {fov_max}]");
            let before = camera.fovy_degrees;
            camera.apply(NavCommand::WidenFov);
            assert!(camera.fovy_degrees >= before, "widen narrowed in [{fov_min}, {fov_max}]");
        }
    }

    #[test]
    fn test_fov_leaves_position_alone() {
        let mut camera = fly();
        camera.apply(NavCommand::NarrowFov);
        assert_eq!(camera.eye, Vec3::new(0.0, -75.0, 2.0));
        assert_eq!(camera.at, Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_degenerate_forward_ignored() {
        let mut camera = FlyCamera::new(Vec3::ONE, Vec3::ONE, 27.0, 1.0, 300.0, FlyTuning::default());
        assert!(!camera.apply(NavCommand::Advance));
        assert!(!camera.apply(NavCommand::TurnLeft));
        assert_eq!(camera.eye, Vec3::ONE);
        assert_eq!(camera.at, Vec3::ONE);
    }

    #[test]
    fn test_key_bindings() {
        let camera = fly();
        assert_eq!(camera.command_for(Key::W), Some(NavCommand::Advance));
        assert_eq!(camera.command_for(Key::Q), Some(NavCommand::TurnLeft));
        assert_eq!(camera.command_for(Key::X), Some(NavCommand::Lower));
        assert_eq!(camera.command_for(Key::Plus), Some(NavCommand::WidenFov));
    }

    #[test]
    fn test_orbit_commands_ignored() {
        let mut camera = fly();
        assert!(!camera.apply(NavCommand::TiltUp));
    }
}

#[cfg(test)]
mod orbit_tests {
    use super::*;

    #[test]
    fn test_eye_from_spherical_x() {
        let camera = orbit(AzimuthFrom::X);
        let (st, ct) = std::f32::consts::FRAC_PI_3.sin_cos();
        let (sp, cp) = std::f32::consts::FRAC_PI_4.sin_cos();
        let expected = Vec3::new(2.0 * st * cp, 2.0 * st * sp, 2.0 * ct);
        assert!(camera.eye().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_eye_from_spherical_y() {
        let mut camera = orbit(AzimuthFrom::Y);
        camera.azimuth = 0.0;
        let eye = camera.eye();
        // φ = 0 measured from Y puts the eye in the YZ plane
        assert!(eye.x.abs() < 1e-6);
        assert!(eye.y > 0.0);
    }

    #[test]
    fn test_polar_clamped_at_poles() {
        let mut camera = orbit(AzimuthFrom::X);
        for _ in 0..100 {
            camera.apply(NavCommand::TiltUp);
        }
        assert!((camera.polar - 5f32.to_radians()).abs() < 1e-5);
        assert!(!camera.apply(NavCommand::TiltUp));
        for _ in 0..200 {
            camera.apply(NavCommand::TiltDown);
        }
        assert!((camera.polar - 175f32.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn test_azimuth_steps() {
        let mut camera = orbit(AzimuthFrom::X);
        let start = camera.azimuth;
        camera.apply(NavCommand::SwingRight);
        assert!((camera.azimuth - start - 2f32.to_radians()).abs() < 1e-6);
        camera.apply(NavCommand::SwingLeft);
        assert!((camera.azimuth - start).abs() < 1e-6);
    }

    #[test]
    fn test_orbit_keeps_radius() {
        let mut camera = orbit(AzimuthFrom::X);
        camera.apply(NavCommand::TiltDown);
        camera.apply(NavCommand::SwingLeft);
        assert!((camera.eye().length() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_unbound_keys() {
        let camera = orbit(AzimuthFrom::X);
        assert_eq!(camera.command_for(Key::Q), None);
        assert_eq!(camera.command_for(Key::Plus), None);
        assert_eq!(camera.command_for(Key::W), Some(NavCommand::TiltUp));
    }
}

#[cfg(test)]
mod rig_tests {
    use super::*;

    #[test]
    fn test_rig_dispatches() {
        let mut rig = CameraRig::Fly(fly());
        assert_eq!(rig.fovy_degrees(), Some(27.0));
        assert!(rig.apply(NavCommand::WidenFov));
        assert_eq!(rig.fovy_degrees(), Some(33.0));

        let rig = CameraRig::Orbit(orbit(AzimuthFrom::X));
        assert_eq!(rig.fovy_degrees(), None);
        assert!(rig.eye().abs_diff_eq(orbit(AzimuthFrom::X).eye(), 1e-6));
    }
}
