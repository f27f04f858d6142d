use bytemuck::{Pod, Zeroable};

/// One sphere instance in the render buffer.
/// 8 floats = 32 bytes, ready for direct GPU upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SphereInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub emissive: f32,
}

impl SphereInstance {
    /// Number of floats per instance.
    pub const FLOATS: usize = 8;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Flat buffer of sphere instances, rebuilt each frame from the scene.
pub struct RenderBuffer {
    instances: Vec<SphereInstance>,
    max_instances: usize,
}

impl RenderBuffer {
    pub fn with_capacity(max_instances: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max_instances),
            max_instances,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Push an instance. Silently drops past the configured maximum —
    /// overflow means a misconfigured scene, not a reason to halt the loop.
    pub fn push(&mut self, instance: SphereInstance) {
        if self.instances.len() < self.max_instances {
            self.instances.push(instance);
        } else {
            log::warn!("render buffer full ({} instances), dropping", self.max_instances);
        }
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances(&self) -> &[SphereInstance] {
        &self.instances
    }

    /// Raw float view for the host's buffer upload.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_respects_max() {
        let mut buf = RenderBuffer::with_capacity(2);
        for _ in 0..5 {
            buf.push(SphereInstance::default());
        }
        assert_eq!(buf.instance_count(), 2);
    }

    #[test]
    fn float_view_matches_stride() {
        let mut buf = RenderBuffer::with_capacity(4);
        buf.push(SphereInstance { x: 1.0, ..Default::default() });
        let floats = buf.as_floats();
        assert_eq!(floats.len(), SphereInstance::FLOATS);
        assert_eq!(floats[0], 1.0);
    }
}
