use glam::Vec4;

/// Opaque colour from authored sRGB components
pub const fn rgb(r: f32, g: f32, b: f32) -> Vec4 {
    Vec4::new(r, g, b, 1.0)
}

fn channel_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Scene colours are authored in sRGB; an sRGB swapchain expects linear values.
/// Alpha is passed through.
pub fn srgb_to_linear(colour: Vec4) -> Vec4 {
    Vec4::new(
        channel_to_linear(colour.x),
        channel_to_linear(colour.y),
        channel_to_linear(colour.z),
        colour.w,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_to_linear_endpoints() {
        let black = srgb_to_linear(rgb(0.0, 0.0, 0.0));
        let white = srgb_to_linear(rgb(1.0, 1.0, 1.0));
        assert!(black.truncate().abs_diff_eq(glam::Vec3::ZERO, 1e-6));
        assert!(white.truncate().abs_diff_eq(glam::Vec3::ONE, 1e-6));
    }

    #[test]
    fn test_srgb_to_linear_midtone_darkens() {
        let grey = srgb_to_linear(rgb(0.5, 0.5, 0.5));
        assert!((grey.x - 0.214).abs() < 0.01);
    }

    #[test]
    fn test_srgb_to_linear_keeps_alpha() {
        let c = srgb_to_linear(Vec4::new(0.3, 0.3, 0.3, 0.25));
        assert_eq!(c.w, 0.25);
    }
}
