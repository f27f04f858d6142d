use crate::api::types::{EntityId, GameEvent};
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;
use crate::renderer::line::LineSet;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum number of sphere instances in the render buffer (default: 64).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Vertical field of view for the default camera, in radians.
    pub camera_fov_y: f32,
    /// Viewport aspect ratio for the default camera.
    pub camera_aspect: f32,
    /// Camera clip planes.
    pub camera_near: f32,
    pub camera_far: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_instances: 64,
            max_events: 32,
            camera_fov_y: 75.0_f32.to_radians(),
            camera_aspect: 16.0 / 9.0,
            camera_near: 0.1,
            camera_far: 15000.0,
        }
    }
}

/// The core contract every visualization must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state: spawn entities, place the camera, allocate lines.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed simulation tick. Runs before the frame's render buffers
    /// are rebuilt; queued input is handed to exactly one tick per frame.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: Camera3D,
    pub lines: LineSet,
    pub events: Vec<GameEvent>,
    max_events: usize,
    next_id: u32,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            camera: Camera3D::new(
                config.camera_fov_y,
                config.camera_aspect,
                config.camera_near,
                config.camera_far,
            ),
            lines: LineSet::new(),
            events: Vec::with_capacity(config.max_events),
            max_events: config.max_events,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the embedding UI. Events past
    /// the configured per-frame limit are dropped with a warning.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() < self.max_events {
            self.events.push(event);
        } else {
            log::warn!("event buffer full ({}), dropping event", self.max_events);
        }
    }

    /// Clear per-frame transient data. Called by the runner before each frame.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ctx = EngineContext::new(&GameConfig::default());
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert_eq!(b.0, a.0 + 1);
    }

    #[test]
    fn events_past_the_limit_are_dropped() {
        let config = GameConfig {
            max_events: 2,
            ..GameConfig::default()
        };
        let mut ctx = EngineContext::new(&config);
        for i in 0..5 {
            ctx.emit_event(GameEvent { kind: i as f32, a: 0.0, b: 0.0, c: 0.0 });
        }
        assert_eq!(ctx.events.len(), 2);
        assert_eq!(ctx.events[1].kind, 1.0);
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new(&GameConfig::default());
        ctx.emit_event(GameEvent { kind: 1.0, a: 2.0, b: 0.0, c: 0.0 });
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }
}
