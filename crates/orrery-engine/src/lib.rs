pub mod api;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod runner;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::SphereMesh;
pub use core::scene::Scene;
pub use core::time::{FixedTimestep, SimClock};
pub use input::queue::{InputEvent, InputQueue, PointerButton};
pub use renderer::camera::Camera3D;
pub use renderer::instance::{RenderBuffer, SphereInstance};
pub use renderer::line::{LineId, LineSet, Polyline};
pub use runner::GameRunner;
pub use systems::render::build_render_buffer;
