use glam::{Mat4, Vec4};

/// Per-draw uniform block for the flat colour shader
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniform {
    pub model_view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub colour: [f32; 4],
}

impl DrawUniform {
    pub fn new(model_view: Mat4, projection: Mat4, colour: Vec4) -> Self {
        Self {
            model_view: model_view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            colour: colour.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size_matches_shader() {
        // two mat4x4<f32> and one vec4<f32>
        assert_eq!(std::mem::size_of::<DrawUniform>(), 144);
    }

    #[test]
    fn test_columns_preserved() {
        let m = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        let u = DrawUniform::new(m, Mat4::IDENTITY, Vec4::ONE);
        assert_eq!(u.model_view[3], [1.0, 2.0, 3.0, 1.0]);
    }
}
