//! Park with crossing paths, hedges, trees and an octagonal bandstand.

use glam::{Vec3, Vec4};

use super::common::{self, GRASS};
use crate::camera::{CameraRig, FlyCamera, FlyTuning};
use crate::composite::{BandstandStep, Composite, Tree};
use crate::error::SceneError;
use crate::instance::{Instance, Placement};
use crate::layout::{MeshKey, MeshRegistry};
use crate::math::{rgb, RotationAxis};
use crate::mesh::{MeshStyle, Shape};
use crate::traits::SceneProvider;

const PATH_EW: MeshKey = MeshKey::Named("path-east-west");
const PATH_NS: MeshKey = MeshKey::Named("path-north-south");

const GRASS_GREEN: Vec4 = rgb(0.0, 1.0, 0.0);
const PATHWAY: Vec4 = rgb(0.3, 0.3, 0.3);
const HEDGE: Vec4 = rgb(0.0, 0.3, 0.0);
const LEAVES: Vec4 = rgb(0.0, 0.6, 0.0);
const TRUNK: Vec4 = rgb(0.55, 0.25, 0.08);
const BASE: Vec4 = rgb(0.95, 0.95, 0.95);
const STEP: Vec4 = rgb(0.8, 0.8, 0.8);
const POST: Vec4 = rgb(0.4, 0.27, 0.13);
const ROOF_BASE: Vec4 = rgb(1.0, 0.9, 0.8);
const ROOF: Vec4 = rgb(0.7, 0.12, 0.12);

const SMALL: Vec3 = Vec3::new(1.0, 1.0, 1.0);
const MEDIUM: Vec3 = Vec3::new(2.0, 2.0, 2.0);
const LARGE: Vec3 = Vec3::new(3.0, 3.0, 3.0);
const TALL: Vec3 = Vec3::new(2.0, 2.0, 5.0);

const TREES: [(f32, f32, Vec3); 20] = [
    // inside the hedge
    (-10.0, 20.0, LARGE),
    (-10.0, 5.0, LARGE),
    (-10.0, -10.0, LARGE),
    // along the paths
    (5.0, -50.0, SMALL),
    (-5.0, -50.0, SMALL),
    (5.0, 50.0, SMALL),
    (-5.0, 50.0, SMALL),
    (-50.0, 5.0, SMALL),
    (-50.0, -5.0, SMALL),
    (50.0, 5.0, SMALL),
    (50.0, -5.0, SMALL),
    // background
    (15.0, 75.0, TALL),
    (-25.0, 80.0, TALL),
    (-5.0, 90.0, TALL),
    (30.0, -60.0, MEDIUM),
    (-10.0, -55.0, MEDIUM),
    (70.0, 5.0, TALL),
    (-50.0, -15.0, TALL),
    (-90.0, -35.0, TALL),
    (85.0, 20.0, TALL),
];

const POST_RING_RADIUS: f32 = 6.0;
const POST_WIDTH: f32 = 0.3;

pub struct Bandstand {
    tuning: FlyTuning,
}

impl Bandstand {
    pub fn new(tuning: FlyTuning) -> Self {
        Self { tuning }
    }

    fn hedges() -> impl Iterator<Item = Instance> {
        let vertical = Vec3::new(2.0, 39.0, 3.0);
        let horizontal = Vec3::new(39.0, 2.0, 3.0);
        let corners = [(-40.0, -40.0), (-40.0, 1.0), (38.0, 1.0), (38.0, -40.0)];
        let across = [(-40.0, -40.0), (-40.0, 38.0), (1.0, 38.0), (1.0, -40.0)];
        corners
            .into_iter()
            .map(move |(x, y)| (x, y, vertical))
            .chain(across.into_iter().map(move |(x, y)| (x, y, horizontal)))
            .map(|(x, y, scale)| {
                Instance::new(
                    Shape::RectangularPrism,
                    Placement::at(Vec3::new(x, y, 0.0), scale),
                    RotationAxis::Z,
                    HEDGE,
                )
            })
    }

    fn posts() -> impl Iterator<Item = Instance> {
        let step = std::f32::consts::TAU / 8.0;
        let half = POST_WIDTH / 2.0;
        (0..8).map(move |i| {
            let theta = step * (i as f32 + 0.5);
            let location = Vec3::new(
                POST_RING_RADIUS * theta.cos() - half,
                POST_RING_RADIUS * theta.sin() - half,
                0.4,
            );
            Instance::new(
                Shape::RectangularPrism,
                Placement::at(location, Vec3::new(POST_WIDTH, POST_WIDTH, 4.0)),
                RotationAxis::Z,
                POST,
            )
        })
    }
}

impl SceneProvider for Bandstand {
    fn name(&self) -> &str {
        "bandstand"
    }

    fn register_meshes(
        &self,
        registry: &mut MeshRegistry,
        style: &MeshStyle,
    ) -> Result<(), SceneError> {
        registry.register(GRASS, common::grass())?;
        registry.register(
            PATH_EW,
            common::fan(&[
                Vec3::new(-500.0, 1.0, 0.01),
                Vec3::new(500.0, 1.0, 0.01),
                Vec3::new(500.0, -1.0, 0.01),
                Vec3::new(-500.0, -1.0, 0.01),
            ]),
        )?;
        registry.register(
            PATH_NS,
            common::fan(&[
                Vec3::new(-1.0, 500.0, 0.01),
                Vec3::new(1.0, 500.0, 0.01),
                Vec3::new(1.0, -500.0, 0.01),
                Vec3::new(-1.0, -500.0, 0.01),
            ]),
        )?;
        for shape in [
            Shape::RectangularPrism,
            Shape::Cylinder,
            Shape::Cone,
            Shape::Octagon,
            Shape::Step,
            Shape::OctagonalPyramid,
        ] {
            registry.register_shape(shape, style)?;
        }
        Ok(())
    }

    fn instances(&self) -> Vec<Instance> {
        let axis = RotationAxis::Z;
        let mut instances = vec![
            Instance::fixed(GRASS, GRASS_GREEN),
            Instance::fixed(PATH_EW, PATHWAY),
            Instance::fixed(PATH_NS, PATHWAY),
        ];
        instances.extend(Self::hedges());

        for (x, y, scale) in TREES {
            let tree = Tree::new(Placement::at(Vec3::new(x, y, 0.0), scale), axis, LEAVES, TRUNK);
            instances.extend(tree.parts());
        }

        let tiers = [(0.0, 8.0), (0.25, 7.4), (0.5, 6.8)];
        for (z, width) in tiers {
            let placement = Placement::at(Vec3::new(0.0, 0.0, z), Vec3::new(width, width, 0.25));
            instances.extend(BandstandStep::new(placement, axis, BASE, STEP).parts());
        }

        instances.extend(Self::posts());

        let roof_origin = Vec3::new(0.0, 0.0, 4.5);
        instances.push(Instance::new(
            Shape::Octagon,
            Placement::at(roof_origin, Vec3::new(6.8, 6.8, 0.0)),
            axis,
            ROOF_BASE,
        ));
        instances.push(Instance::new(
            Shape::OctagonalPyramid,
            Placement::at(roof_origin, Vec3::new(6.8, 6.8, 4.0)),
            axis,
            ROOF,
        ));
        instances
    }

    fn camera(&self) -> CameraRig {
        let camera = FlyCamera::new(
            Vec3::new(0.0, -75.0, 2.0),
            Vec3::new(0.0, 0.0, 2.0),
            27.0,
            1.0,
            300.0,
            self.tuning,
        );
        CameraRig::Fly(camera.with_vertical_nudge())
    }

    fn clear_colour(&self) -> Vec4 {
        rgb(0.6, 0.8, 1.0)
    }
}
