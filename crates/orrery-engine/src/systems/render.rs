use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, SphereInstance};

/// Build the sphere render buffer from a set of entities.
/// Inactive entities and entities without a mesh are skipped.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };

        buffer.push(SphereInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            radius: mesh.radius,
            r: mesh.color[0],
            g: mesh.color[1],
            b: mesh.color[2],
            emissive: mesh.emissive,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::mesh::SphereMesh;
    use glam::Vec3;

    #[test]
    fn skips_meshless_and_inactive() {
        let mut invisible = Entity::new(EntityId(3)).with_mesh(SphereMesh::new(1.0, [1.0; 3]));
        invisible.active = false;

        let entities = vec![
            Entity::new(EntityId(1))
                .with_pos(Vec3::new(1.0, 2.0, 3.0))
                .with_mesh(SphereMesh::new(5.0, [0.2, 0.4, 0.8]).with_emissive(1.5)),
            Entity::new(EntityId(2)), // no mesh
            invisible,
        ];

        let mut buffer = RenderBuffer::with_capacity(8);
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 1);
        let inst = &buffer.instances()[0];
        assert_eq!((inst.x, inst.y, inst.z), (1.0, 2.0, 3.0));
        assert_eq!(inst.radius, 5.0);
        assert_eq!(inst.emissive, 1.5);
    }
}
