/// Sphere mesh component — the only primitive the orrery renderer needs.
/// Radius is in world units; color is linear RGB.
#[derive(Debug, Clone, Copy)]
pub struct SphereMesh {
    pub radius: f32,
    pub color: [f32; 3],
    /// Emissive intensity (0 = lit only, >0 = glows).
    pub emissive: f32,
}

impl SphereMesh {
    pub fn new(radius: f32, color: [f32; 3]) -> Self {
        Self {
            radius,
            color,
            emissive: 0.0,
        }
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }
}
