use glam::{Vec3, Vec4};
use scene_demos::camera::{CameraRig, FlyCamera, FlyTuning};
use scene_demos::config::DemoConfig;
use scene_demos::input::Key;
use scene_demos::instance::Instance;
use scene_demos::layout::{MeshKey, MeshRegistry};
use scene_demos::mesh::{Mesh, MeshStyle, Shape, Topology};
use scene_demos::scene::CommandList;
use scene_demos::scenes::{build_scene, SceneKind, Woodland};
use scene_demos::traits::SceneProvider;
use scene_demos::{Scene, SceneError};

/// Minimal provider whose meshes and instances are supplied by the test
struct Fixture {
    meshes: Vec<(MeshKey, Mesh)>,
    instances: Vec<Instance>,
}

impl SceneProvider for Fixture {
    fn name(&self) -> &str {
        "fixture"
    }

    fn register_meshes(
        &self,
        registry: &mut MeshRegistry,
        _style: &MeshStyle,
    ) -> Result<(), SceneError> {
        for (key, mesh) in &self.meshes {
            registry.register(*key, mesh.clone())?;
        }
        Ok(())
    }

    fn instances(&self) -> Vec<Instance> {
        self.instances.clone()
    }

    fn camera(&self) -> CameraRig {
        CameraRig::Fly(FlyCamera::new(
            Vec3::new(0.0, -10.0, 0.0),
            Vec3::ZERO,
            30.0,
            0.1,
            100.0,
            FlyTuning::default(),
        ))
    }

    fn clear_colour(&self) -> Vec4 {
        Vec4::ONE
    }
}

fn scene(kind: SceneKind) -> Scene {
    build_scene(kind, &DemoConfig::default()).unwrap()
}

fn record(scene: &Scene) -> CommandList {
    let mut list = CommandList::default();
    scene.render(4.0 / 3.0, &mut list);
    list
}

#[cfg(test)]
mod build_tests {
    use super::*;

    #[test]
    fn test_every_scene_builds() {
        for kind in SceneKind::ALL {
            let scene = scene(kind);
            assert_eq!(scene.name(), kind.to_string());
            assert!(scene.draw_count() > 0);
        }
    }

    #[test]
    fn test_vertex_totals() {
        let totals: Vec<u32> = SceneKind::ALL
            .iter()
            .map(|&kind| scene(kind).layout().vertex_count())
            .collect();
        assert_eq!(totals, vec![196, 365, 186, 10302]);
    }

    #[test]
    fn test_fixed_draw_counts() {
        assert_eq!(scene(SceneKind::Bandstand).draw_count(), 70);
        assert_eq!(scene(SceneKind::Cartwheel).draw_count(), 19);
        assert_eq!(scene(SceneKind::Surface).draw_count(), 152);
    }

    #[test]
    fn test_woodland_draw_count_follows_trees() {
        let config = DemoConfig::default();
        let trees = Woodland::new(config.fly, config.woodland_seed).trees().len();
        assert_eq!(scene(SceneKind::Woodland).draw_count(), 5 + 16 + 4 + 2 * trees);
    }

    #[test]
    fn test_woodland_seed_is_configurable() {
        let mut config = DemoConfig::default();
        let a = build_scene(SceneKind::Woodland, &config).unwrap();
        config.woodland_seed = 1;
        let b = build_scene(SceneKind::Woodland, &config).unwrap();
        assert_ne!(a.instances(), b.instances());
        assert_eq!(a.layout().vertex_count(), b.layout().vertex_count());
    }

    #[test]
    fn test_unregistered_mesh_rejected() {
        let fixture = Fixture {
            meshes: vec![(
                MeshKey::Named("strip"),
                Mesh::new(vec![Vec3::ZERO; 4], Topology::TriangleStrip),
            )],
            instances: vec![Instance::fixed(Shape::Cone, Vec4::ONE)],
        };
        let err = Scene::build(&fixture).unwrap_err();
        assert!(matches!(err, SceneError::UnregisteredMesh(MeshKey::Shape(Shape::Cone))));
    }

    #[test]
    fn test_uneven_segments_rejected() {
        let key = MeshKey::Named("strip");
        let fixture = Fixture {
            meshes: vec![(key, Mesh::new(vec![Vec3::ZERO; 10], Topology::TriangleStrip))],
            instances: vec![Instance::fixed(key, Vec4::ONE).segmented(3)],
        };
        let err = Scene::build(&fixture).unwrap_err();
        assert!(matches!(
            err,
            SceneError::UnevenSegments { count: 10, segments: 3, .. }
        ));
    }

    #[test]
    fn test_duplicate_mesh_rejected() {
        let key = MeshKey::Named("strip");
        let mesh = Mesh::new(vec![Vec3::ZERO; 4], Topology::TriangleStrip);
        let fixture = Fixture {
            meshes: vec![(key, mesh.clone()), (key, mesh)],
            instances: vec![],
        };
        assert!(matches!(
            Scene::build(&fixture).unwrap_err(),
            SceneError::DuplicateMesh(_)
        ));
    }
}

#[cfg(test)]
mod render_tests {
    use super::*;

    #[test]
    fn test_one_command_per_draw() {
        for kind in SceneKind::ALL {
            let scene = scene(kind);
            let list = record(&scene);
            assert_eq!(list.commands.len(), scene.draw_count(), "{kind}");
            assert_eq!(list.clear_colour, scene.clear_colour());
            assert_eq!(list.projection, scene.projection(4.0 / 3.0));
        }
    }

    #[test]
    fn test_ranges_inside_buffer() {
        for kind in SceneKind::ALL {
            let scene = scene(kind);
            let total = scene.layout().vertex_count();
            for command in record(&scene).commands {
                assert!(command.range.count > 0);
                assert!(command.range.end() <= total, "{kind}: {:?}", command.range);
            }
        }
    }

    #[test]
    fn test_surface_segments_tile_each_mesh() {
        let scene = scene(SceneKind::Surface);
        let commands = record(&scene).commands;
        let fill = scene.layout().range(MeshKey::Named("surface-fill")).unwrap();
        let pieces: Vec<_> = commands.iter().filter(|c| fill.contains(&c.range)).collect();
        assert_eq!(pieces.len(), 50);
        assert_eq!(pieces[0].range.first, fill.first);
        for pair in pieces.windows(2) {
            assert_eq!(pair[0].range.end(), pair[1].range.first);
        }
        assert_eq!(pieces[49].range.end(), fill.end());
    }

    #[test]
    fn test_model_view_includes_camera() {
        let scene = scene(SceneKind::Bandstand);
        let commands = record(&scene).commands;
        // grass is authored in world space, so its model-view is the view itself
        assert_eq!(commands[0].model_view, scene.view());
        assert_eq!(commands[0].range, scene.layout().range(MeshKey::Named("grass")).unwrap());
    }

    #[test]
    fn test_render_replaces_previous_frame() {
        let scene = scene(SceneKind::Cartwheel);
        let mut list = CommandList::default();
        scene.render(1.0, &mut list);
        scene.render(1.0, &mut list);
        assert_eq!(list.commands.len(), 19);
    }
}

#[cfg(test)]
mod input_tests {
    use super::*;

    #[test]
    fn test_key_moves_camera() {
        let mut scene = scene(SceneKind::Woodland);
        let before = scene.view();
        assert!(scene.handle_key(Key::W));
        assert_ne!(scene.view(), before);
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut scene = scene(SceneKind::Cartwheel);
        let before = scene.view();
        assert!(!scene.handle_key(Key::Q));
        assert_eq!(scene.view(), before);
    }

    #[test]
    fn test_fov_only_on_perspective_scenes() {
        let mut bandstand = scene(SceneKind::Bandstand);
        assert_eq!(bandstand.fovy_degrees(), Some(27.0));
        assert!(bandstand.handle_key(Key::Minus));
        assert_eq!(bandstand.fovy_degrees(), Some(21.0));
        assert_eq!(scene(SceneKind::Surface).fovy_degrees(), None);
    }

    #[test]
    fn test_configured_fov_floor_never_widens_on_narrow() {
        let mut config = DemoConfig::default();
        config.fly.fov_min = 30.0;
        let mut bandstand = build_scene(SceneKind::Bandstand, &config).unwrap();
        assert_eq!(bandstand.fovy_degrees(), Some(30.0));
        assert!(!bandstand.handle_key(Key::Minus));
        assert_eq!(bandstand.fovy_degrees(), Some(30.0));
    }
}
