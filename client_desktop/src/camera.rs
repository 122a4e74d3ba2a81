//! Camera for the playfield
//!
//! 2D orthographic projection in playfield units, origin top-left, y down

use glam::Mat4;

pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Map a `width` x `height` playfield onto the whole surface
    pub fn playfield(width: f32, height: f32) -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0),
        }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn project(camera: &Camera, x: f32, y: f32) -> Vec3 {
        camera.view_proj().project_point3(Vec3::new(x, y, 0.0))
    }

    #[test]
    fn test_playfield_corners_map_to_clip_corners() {
        let camera = Camera::playfield(300.0, 300.0);

        let top_left = project(&camera, 0.0, 0.0);
        assert!((top_left.x + 1.0).abs() < 1e-6 && (top_left.y - 1.0).abs() < 1e-6);

        let bottom_right = project(&camera, 300.0, 300.0);
        assert!((bottom_right.x - 1.0).abs() < 1e-6 && (bottom_right.y + 1.0).abs() < 1e-6);

        let center = project(&camera, 150.0, 150.0);
        assert!(center.x.abs() < 1e-6 && center.y.abs() < 1e-6);
    }

    #[test]
    fn test_uniform_is_256_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
