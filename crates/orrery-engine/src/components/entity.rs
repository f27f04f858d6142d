use crate::api::types::EntityId;
use crate::components::mesh::SphereMesh;
use glam::{Quat, Vec3};

/// Fat Entity — a single struct with optional components.
/// Designed for simplicity and rapid prototyping over ECS purity.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Orientation in world space.
    pub rotation: Quat,
    /// Sphere mesh component (optional — entities without one are invisible).
    pub mesh: Option<SphereMesh>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            mesh: None,
        }
    }

    /// Spin the entity about its local y axis by `angle` radians.
    pub fn spin_y(&mut self, angle: f32) {
        self.rotation = self.rotation * Quat::from_rotation_y(angle);
    }

    /// Transform a point from this entity's local frame to world space.
    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        self.pos + self.rotation * local
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_mesh(mut self, mesh: SphereMesh) -> Self {
        self.mesh = Some(mesh);
        self
    }
}
