use crate::api::game::{EngineContext, Game, GameConfig};
use crate::core::time::FixedTimestep;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::instance::RenderBuffer;
use crate::systems::render::build_render_buffer;

/// Generic loop driver that owns the simulation state and wires up the
/// engine tick. The host shell calls `push_input` between frames and
/// `tick(dt)` once per display refresh, then reads the render buffer,
/// line set and camera uniform back out.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);
        let ctx = EngineContext::new(&config);

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            render_buffer,
            timestep,
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        log::info!("game initialized: {} entities", self.ctx.scene.len());
    }

    /// Push an input event into the queue. Handlers run atomically inside
    /// the next tick, so no partial-update state is ever observable.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: fixed-step updates, then rebuild the render buffer.
    ///
    /// Queued input is observed by exactly one fixed step: the first step
    /// of the frame sees the queue, which is then drained before any
    /// further step runs. A frame too short to produce a step leaves the
    /// queue untouched for the next tick, so a trigger is never dropped
    /// unseen and never handled twice.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for step in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
            if step == 0 {
                self.input.drain();
            }
        }

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
