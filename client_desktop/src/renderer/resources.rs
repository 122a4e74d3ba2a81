use crate::camera::{Camera, CameraUniform};
use game_core::Rect;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // center x, center y, width, height
    pub rotation: [f32; 4],  // cos, sin, 0, 0
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    pub const UPRIGHT: [f32; 4] = [1.0, 0.0, 0.0, 0.0];

    /// Axis-aligned quad covering `rect`
    pub fn rect(rect: Rect, tint: [f32; 4]) -> Self {
        let center = rect.center();
        Self {
            transform: [center.x, center.y, rect.size.x, rect.size.y],
            rotation: Self::UPRIGHT,
            tint,
        }
    }
}

/// Instances the buffer holds before its first growth
pub const INITIAL_INSTANCE_CAPACITY: usize = 256;

pub struct GpuBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
    pub capacity: usize,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GpuBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    GpuBuffers {
        camera: camera_buffer,
        instances: create_instance_buffer(device, INITIAL_INSTANCE_CAPACITY),
        capacity: INITIAL_INSTANCE_CAPACITY,
    }
}

pub fn create_instance_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some("Instance Buffer"),
        size: (capacity * std::mem::size_of::<InstanceData>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Capacity to reallocate to so that `needed` instances fit
pub fn grown_capacity(current: usize, needed: usize) -> usize {
    if needed <= current {
        current
    } else {
        needed.next_power_of_two().max(INITIAL_INSTANCE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 48);
    }

    #[test]
    fn test_rect_instance_is_centered() {
        let instance = InstanceData::rect(Rect::new(5.0, 130.0, 10.0, 40.0), [1.0; 4]);
        assert_eq!(instance.transform, [10.0, 150.0, 10.0, 40.0]);
        assert_eq!(instance.rotation, InstanceData::UPRIGHT);
    }

    #[test]
    fn test_grown_capacity() {
        assert_eq!(grown_capacity(256, 10), 256, "Fits already");
        assert_eq!(grown_capacity(256, 256), 256);
        assert_eq!(grown_capacity(256, 257), 512);
        assert_eq!(grown_capacity(512, 1500), 2048);
    }
}
