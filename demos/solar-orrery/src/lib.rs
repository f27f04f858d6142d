pub mod bodies;
pub mod config;
pub mod focus;
pub mod game;
pub mod orbit;
pub mod trail;

pub use config::SimConfig;
pub use game::Orrery;
