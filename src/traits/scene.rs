use glam::Vec4;

use crate::camera::CameraRig;
use crate::error::SceneError;
use crate::instance::Instance;
use crate::layout::MeshRegistry;
use crate::mesh::MeshStyle;

/// Scene construction abstraction
pub trait SceneProvider {
    /// Scene name for logging
    fn name(&self) -> &str;

    /// Parameters for the primitive generators
    fn mesh_style(&self) -> Result<MeshStyle, SceneError> {
        Ok(MeshStyle::default())
    }

    /// Register every mesh the scene draws, in buffer order
    fn register_meshes(
        &self,
        registry: &mut MeshRegistry,
        style: &MeshStyle,
    ) -> Result<(), SceneError>;

    /// Instances in draw order
    fn instances(&self) -> Vec<Instance>;

    /// Camera in its starting state
    fn camera(&self) -> CameraRig;

    /// Background colour, authored in sRGB
    fn clear_colour(&self) -> Vec4;
}
