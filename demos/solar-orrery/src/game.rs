//! The orrery itself: per-tick orbital state update, spin, Saturn's ring
//! fixup, trail recording and the focus trigger, in that order.

use glam::Vec3;
use orrery_engine::{
    EngineContext, Entity, EntityId, Game, GameConfig, GameEvent, InputEvent, InputQueue, LineId,
    Polyline, PointerButton, SimClock, SphereMesh,
};
use std::fmt;

use crate::bodies::{self, BODY_COUNT, PLANET_COUNT, SATURN, SUN};
use crate::config::{ConfigError, SimConfig};
use crate::focus::CameraFocus;
use crate::orbit::{orbit_position, OrbitError, OrbitParams};
use crate::trail::TrailSet;

/// Emitted whenever the focus trigger fires; `a` carries the new body index.
pub const EVENT_FOCUS_CHANGED: f32 = 1.0;

/// The fixed simulation step; the clock advances by exactly this much per
/// tick, so it must agree with what `config()` hands the runner.
const FIXED_DT: f32 = 1.0 / 60.0;

const TRAIL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.6];
const TRAIL_WIDTH: f32 = 1.0;

/// Startup failure: bad configuration or a bad orbit constant.
#[derive(Debug)]
pub enum SetupError {
    Config(ConfigError),
    Orbit(OrbitError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Orbit(e) => write!(f, "invalid orbit parameters: {e}"),
        }
    }
}

impl std::error::Error for SetupError {}

impl From<ConfigError> for SetupError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<OrbitError> for SetupError {
    fn from(e: OrbitError) -> Self {
        Self::Orbit(e)
    }
}

pub struct Orrery {
    config: SimConfig,
    clock: SimClock,
    orbits: [OrbitParams; PLANET_COUNT],
    focus: CameraFocus,
    trails: TrailSet,
    body_ids: [Option<EntityId>; BODY_COUNT],
    ring_id: Option<EntityId>,
    trail_lines: Vec<LineId>,
}

impl Orrery {
    /// Validate configuration and orbit constants up front; the frame loop
    /// itself has no failure modes.
    pub fn new(config: SimConfig) -> Result<Self, SetupError> {
        config.validate()?;
        let orbits = bodies::planet_orbits()?;
        let clock = SimClock::new(config.time_scale);
        let focus = CameraFocus::new(config.focus_distance);
        let trails = TrailSet::new(BODY_COUNT, config.trail_capacity);

        Ok(Self {
            config,
            clock,
            orbits,
            focus,
            trails,
            body_ids: [None; BODY_COUNT],
            ring_id: None,
            trail_lines: Vec::new(),
        })
    }

    pub fn focus_index(&self) -> usize {
        self.focus.index()
    }

    pub fn trails(&self) -> &TrailSet {
        &self.trails
    }

    /// Enable continuous focus tracking: the camera re-follows the focused
    /// body every tick instead of only on the trigger.
    pub fn set_tracking(&mut self, tracking: bool) {
        self.focus.tracking = tracking;
    }

    fn spawn_body(&self, ctx: &mut EngineContext, index: usize, pos: Vec3) -> EntityId {
        let id = ctx.next_id();
        let mut mesh = SphereMesh::new(bodies::BODY_RADII[index], bodies::BODY_COLORS[index]);
        if index == SUN {
            mesh = mesh.with_emissive(bodies::SUN_EMISSIVE);
        }
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(bodies::BODY_NAMES[index])
                .with_pos(pos)
                .with_mesh(mesh),
        );
        id
    }

    /// Current world position of every tracked body, in body-table order.
    fn body_positions(&self, ctx: &EngineContext) -> [Vec3; BODY_COUNT] {
        let mut out = [Vec3::ZERO; BODY_COUNT];
        for (i, id) in self.body_ids.iter().enumerate() {
            if let Some(entity) = id.and_then(|id| ctx.scene.get(id)) {
                out[i] = entity.pos;
            }
        }
        out
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            // Only the secondary button cycles focus; everything else is
            // someone else's business.
            if let InputEvent::PointerDown { button: PointerButton::Secondary, .. } = event {
                let index = self.focus.advance();
                self.apply_focus(ctx);
                ctx.emit_event(GameEvent {
                    kind: EVENT_FOCUS_CHANGED,
                    a: index as f32,
                    b: 0.0,
                    c: 0.0,
                });
            }
        }
    }

    fn apply_focus(&self, ctx: &mut EngineContext) {
        if let Some(id) = self.body_ids[self.focus.index()] {
            // Clone breaks the scene/camera double borrow; entities are small.
            if let Some(body) = ctx.scene.get(id).cloned() {
                self.focus.apply(&body, &mut ctx.camera);
            }
        }
    }

    fn rotate_bodies(&self, ctx: &mut EngineContext) {
        for (i, id) in self.body_ids.iter().enumerate() {
            let rate = bodies::SPIN_RATES[i];
            if rate == 0.0 {
                continue;
            }
            if let Some(entity) = id.and_then(|id| ctx.scene.get_mut(id)) {
                entity.spin_y(rate);
            }
        }
    }

    /// The orbital state update: solve each planet's position at the shared
    /// time and write it into the scene. The orbital plane maps to the
    /// horizontal (y stays 0); the Sun is never touched.
    fn move_planets(&self, ctx: &mut EngineContext) {
        let t = self.clock.time();
        for i in 0..PLANET_COUNT {
            let (x, y) = orbit_position(&self.orbits[i], t);
            if let Some(entity) = self.body_ids[i].and_then(|id| ctx.scene.get_mut(id)) {
                entity.pos = Vec3::new(x as f32, 0.0, y as f32);
            }
        }
    }

    /// Dependent-position fixups — the ring marker snaps to Saturn after
    /// the planets have moved.
    fn fixup_dependents(&self, ctx: &mut EngineContext) {
        let saturn_pos = self.body_ids[SATURN]
            .and_then(|id| ctx.scene.get(id))
            .map(|e| e.pos);
        if let (Some(pos), Some(ring)) = (saturn_pos, self.ring_id) {
            if let Some(entity) = ctx.scene.get_mut(ring) {
                entity.pos = pos;
            }
        }
    }

    fn record_trails(&mut self, ctx: &mut EngineContext) {
        let positions = self.body_positions(ctx);
        self.trails.record_frame(&positions);

        for (i, &line_id) in self.trail_lines.iter().enumerate() {
            if let (Some(trail), Some(line)) = (self.trails.get(i), ctx.lines.get_mut(line_id)) {
                line.set_points(trail.iter());
            }
        }
    }
}

impl Game for Orrery {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: FIXED_DT,
            max_instances: 16,
            max_events: 16,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        // Planets start at their solved t = 0 positions (each at perihelion)
        for i in 0..PLANET_COUNT {
            let (x, y) = orbit_position(&self.orbits[i], 0.0);
            self.body_ids[i] = Some(self.spawn_body(ctx, i, Vec3::new(x as f32, 0.0, y as f32)));
        }
        self.body_ids[SUN] = Some(self.spawn_body(ctx, SUN, Vec3::ZERO));

        // Saturn's ring marker rides along with the planet
        let ring_id = ctx.next_id();
        let saturn_pos = self.body_positions(ctx)[SATURN];
        ctx.scene.spawn(
            Entity::new(ring_id)
                .with_tag("ring")
                .with_pos(saturn_pos)
                .with_mesh(SphereMesh::new(bodies::RING_RADIUS, bodies::RING_COLOR)),
        );
        self.ring_id = Some(ring_id);

        // One trail polyline per body, pre-sized to the path resolution
        for _ in 0..BODY_COUNT {
            let mut line = Polyline::new(TRAIL_COLOR, TRAIL_WIDTH);
            line.reserve(self.config.orbit_path_resolution);
            self.trail_lines.push(ctx.lines.add(line));
        }

        log::info!(
            "orrery ready: {} bodies, trail capacity {}",
            BODY_COUNT,
            self.config.trail_capacity
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // Focus triggers act atomically before the simulation step
        self.handle_input(ctx, input);

        self.clock.advance(f64::from(FIXED_DT));
        self.rotate_bodies(ctx);
        self.move_planets(ctx);
        self.fixup_dependents(ctx);
        self.record_trails(ctx);

        if self.focus.tracking {
            self.apply_focus(ctx);
        }
    }
}
