//! Temple clearing in a seeded scatter of trees.

use glam::{Vec3, Vec4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::common::{self, GRASS};
use crate::camera::{CameraRig, FlyCamera, FlyTuning};
use crate::composite::{Composite, Tree};
use crate::error::SceneError;
use crate::instance::{Instance, Placement};
use crate::layout::{MeshKey, MeshRegistry};
use crate::math::{rgb, RotationAxis};
use crate::mesh::{BoxAnchor, Mesh, MeshStyle, Shape, Topology};
use crate::traits::SceneProvider;

const PATH_NS: MeshKey = MeshKey::Named("path-north-south");
const PATH_EW: MeshKey = MeshKey::Named("path-east-west");
const TEMPLE_BASE: MeshKey = MeshKey::Named("temple-base");
const TEMPLE_ROOF: MeshKey = MeshKey::Named("temple-roof");

const LIGHT_GREEN: Vec4 = rgb(0.48, 0.70, 0.22);
const MED_GREEN: Vec4 = rgb(0.41, 0.62, 0.27);
const DARK_GREEN: Vec4 = rgb(0.33, 0.55, 0.33);
const BROWN: Vec4 = rgb(0.55, 0.47, 0.37);
const STONE: Vec4 = rgb(0.93, 0.87, 0.80);
const DARK_STONE: Vec4 = rgb(0.85, 0.82, 0.74);

const COLUMN_HEIGHT: f32 = 4.0;
const COLUMN_DIAMETER: f32 = 1.0;
const COLUMN_SPACING: f32 = 2.0;
const LINTEL_HEIGHT: f32 = 0.5;
const BASE_WIDTH: f32 = 8.0;
const BASE_LENGTH: f32 = 13.0;
const BASE_EDGE: f32 = 1.5;
const BASE_X: f32 = BASE_WIDTH / 2.0;
const BASE_Y: f32 = BASE_LENGTH / 2.0;

const PATH_HALF_WIDTH: f32 = 2.5;

pub struct Woodland {
    tuning: FlyTuning,
    seed: u64,
}

impl Woodland {
    pub fn new(tuning: FlyTuning, seed: u64) -> Self {
        Self { tuning, seed }
    }

    /// 5 m wide strips crossing the whole map, one vertex pair every 100 m
    fn path(along_x: bool) -> Mesh {
        let vertices = (-1000..=1000)
            .step_by(100)
            .flat_map(|i| {
                let t = i as f32;
                if along_x {
                    [Vec3::new(t, -PATH_HALF_WIDTH, 0.01), Vec3::new(t, PATH_HALF_WIDTH, 0.01)]
                } else {
                    [Vec3::new(-PATH_HALF_WIDTH, t, 0.01), Vec3::new(PATH_HALF_WIDTH, t, 0.01)]
                }
            })
            .collect();
        Mesh::new(vertices, Topology::TriangleStrip)
    }

    /// Gables front and back, then the two slopes, as a triangle list
    pub fn roof() -> Mesh {
        let eave = COLUMN_HEIGHT + LINTEL_HEIGHT - 0.25;
        let ridge = COLUMN_HEIGHT + LINTEL_HEIGHT + 1.0;
        let front = -BASE_Y + 1.0;
        let back = BASE_Y - 1.0;
        let left = -BASE_X;
        let right = BASE_X;
        let mid = 0.0;

        let v = Vec3::new;
        let vertices = vec![
            v(left, front, eave),
            v(right, front, eave),
            v(mid, front, ridge),
            v(left, back, eave),
            v(right, back, eave),
            v(mid, back, ridge),
            v(mid, front, ridge),
            v(left, front, eave),
            v(left, back, eave),
            v(mid, back, ridge),
            v(left, back, eave),
            v(mid, front, ridge),
            v(mid, front, ridge),
            v(right, front, eave),
            v(right, back, eave),
            v(mid, back, ridge),
            v(mid, front, ridge),
            v(right, back, eave),
        ];
        Mesh::new(vertices, Topology::TriangleList)
    }

    fn columns() -> Vec<Instance> {
        let scale = Vec3::new(COLUMN_DIAMETER / 2.0, COLUMN_DIAMETER / 2.0, COLUMN_HEIGHT);
        let column = |x: f32, y: f32| {
            Instance::new(
                Shape::Cylinder,
                Placement::at(Vec3::new(x, y, 0.0), scale),
                RotationAxis::Z,
                STONE,
            )
        };

        let mut columns = Vec::new();
        let mut offset = BASE_EDGE;
        while offset < BASE_LENGTH {
            columns.push(column(-BASE_X + 1.0, BASE_Y - offset));
            columns.push(column(BASE_X - 1.0, BASE_Y - offset));
            offset += COLUMN_SPACING;
        }
        for y in [-BASE_Y + BASE_EDGE, BASE_Y - BASE_EDGE] {
            columns.push(column(-BASE_X + 3.0, y));
            columns.push(column(BASE_X - 3.0, y));
        }
        columns
    }

    fn lintels() -> Vec<Instance> {
        let lintel = |x: f32, y: f32, scale: Vec3| {
            Instance::new(
                Shape::RectangularPrism,
                Placement::at(Vec3::new(x, y, COLUMN_HEIGHT), scale),
                RotationAxis::Z,
                DARK_STONE,
            )
        };
        let sides = Vec3::new(COLUMN_DIAMETER, BASE_LENGTH - 2.0, LINTEL_HEIGHT);
        let ends = Vec3::new(BASE_WIDTH - 1.5, COLUMN_DIAMETER, LINTEL_HEIGHT);
        vec![
            lintel(BASE_X - COLUMN_DIAMETER, 0.0, sides),
            lintel(-BASE_X + COLUMN_DIAMETER, 0.0, sides),
            lintel(0.0, -BASE_Y + BASE_EDGE, ends),
            lintel(0.0, BASE_Y - BASE_EDGE, ends),
        ]
    }

    /// True when a trunk at (x, y) would stand on the temple platform or its margin
    pub fn on_temple(x: f32, y: f32) -> bool {
        x.abs() < BASE_X + 1.0 && y.abs() < BASE_Y + 1.0
    }

    /// One candidate per 10 m band, spread further out as the band grows.
    pub fn trees(&self) -> Vec<Tree> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut trees = Vec::new();
        for band in (-500..500).step_by(10) {
            let reach = band as f32;
            let x = signed(&mut rng) * reach * rng.random::<f32>();
            let y = signed(&mut rng) * reach * rng.random::<f32>();
            if Self::on_temple(x, y) {
                continue;
            }
            let angle = rng.random::<f32>();
            let height = 1.0 + rng.random::<f32>();
            trees.push(Tree::new(
                Placement::new(Vec3::new(x, y, 0.0), angle, Vec3::new(1.0, 1.0, height)),
                RotationAxis::Z,
                DARK_GREEN,
                BROWN,
            ));
        }
        trees
    }
}

fn signed(rng: &mut StdRng) -> f32 {
    if rng.random_bool(0.5) {
        -1.0
    } else {
        1.0
    }
}

impl SceneProvider for Woodland {
    fn name(&self) -> &str {
        "woodland"
    }

    fn mesh_style(&self) -> Result<MeshStyle, SceneError> {
        Ok(MeshStyle::with_angular_step(30)?.box_anchor(BoxAnchor::Centered))
    }

    fn register_meshes(
        &self,
        registry: &mut MeshRegistry,
        style: &MeshStyle,
    ) -> Result<(), SceneError> {
        registry.register(GRASS, common::grass())?;
        registry.register(PATH_NS, Self::path(false))?;
        registry.register(PATH_EW, Self::path(true))?;
        registry.register(
            TEMPLE_BASE,
            common::fan(&[
                Vec3::new(-BASE_X, -BASE_Y, 0.02),
                Vec3::new(BASE_X, -BASE_Y, 0.02),
                Vec3::new(BASE_X, BASE_Y, 0.02),
                Vec3::new(-BASE_X, BASE_Y, 0.02),
            ]),
        )?;
        registry.register(TEMPLE_ROOF, Self::roof())?;
        for shape in [Shape::Cylinder, Shape::Cone, Shape::RectangularPrism] {
            registry.register_shape(shape, style)?;
        }
        Ok(())
    }

    fn instances(&self) -> Vec<Instance> {
        let mut instances = vec![
            Instance::fixed(GRASS, LIGHT_GREEN),
            Instance::fixed(PATH_NS, MED_GREEN),
            Instance::fixed(PATH_EW, MED_GREEN),
            Instance::fixed(TEMPLE_BASE, DARK_STONE),
            Instance::fixed(TEMPLE_ROOF, STONE),
        ];
        instances.extend(Self::columns());
        instances.extend(Self::lintels());
        instances.extend(self.trees().iter().flat_map(Composite::parts));
        instances
    }

    fn camera(&self) -> CameraRig {
        CameraRig::Fly(FlyCamera::new(
            Vec3::new(0.0, -75.0, 2.0),
            Vec3::new(0.0, 0.0, 2.0),
            27.0,
            1.0,
            300.0,
            self.tuning,
        ))
    }

    fn clear_colour(&self) -> Vec4 {
        rgb(0.64, 0.87, 1.0)
    }
}
