//! Height field `z = r⁴ - r²` drawn filled with a wire grid on top.

use std::f32::consts::PI;

use glam::Vec4;

use crate::camera::{AzimuthFrom, CameraRig, OrbitCamera, OrbitTuning, OrthoBounds};
use crate::error::SceneError;
use crate::instance::Instance;
use crate::layout::{MeshKey, MeshRegistry};
use crate::math::rgb;
use crate::mesh::{MeshStyle, SurfaceGrid};
use crate::traits::SceneProvider;

const FILL: MeshKey = MeshKey::Named("surface-fill");
const ROWS: MeshKey = MeshKey::Named("surface-rows");
const COLUMNS: MeshKey = MeshKey::Named("surface-columns");

pub struct Surface {
    grid: SurfaceGrid,
    tuning: OrbitTuning,
}

impl Surface {
    pub fn new(tuning: OrbitTuning) -> Self {
        Self {
            grid: SurfaceGrid::default(),
            tuning,
        }
    }
}

impl SceneProvider for Surface {
    fn name(&self) -> &str {
        "surface"
    }

    fn register_meshes(
        &self,
        registry: &mut MeshRegistry,
        _style: &MeshStyle,
    ) -> Result<(), SceneError> {
        let meshes = self.grid.generate();
        registry.register(FILL, meshes.fill)?;
        registry.register(ROWS, meshes.rows)?;
        registry.register(COLUMNS, meshes.columns)?;
        Ok(())
    }

    fn instances(&self) -> Vec<Instance> {
        let lines = self.grid.samples();
        vec![
            Instance::fixed(FILL, rgb(0.5, 0.3, 0.9)).segmented(self.grid.divisions()),
            Instance::fixed(ROWS, rgb(1.0, 1.0, 1.0)).segmented(lines),
            Instance::fixed(COLUMNS, rgb(0.0, 0.0, 0.0)).segmented(lines),
        ]
    }

    fn camera(&self) -> CameraRig {
        CameraRig::Orbit(OrbitCamera::new(
            6.0,
            PI / 3.0,
            PI / 4.0,
            AzimuthFrom::Y,
            OrthoBounds::square(2.0, 0.1, 10.0),
            self.tuning,
        ))
    }

    fn clear_colour(&self) -> Vec4 {
        rgb(0.9, 0.9, 0.9)
    }
}
