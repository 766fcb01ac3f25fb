//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only (no clocks)
//! - Stable iteration order (by ball index)
//! - No rendering or platform dependencies

pub mod arena;
pub mod ball;
pub mod collision;
pub mod energy;
pub mod vector;
pub mod world;

pub use arena::Arena;
pub use ball::Ball;
pub use collision::{WallContact, balls_colliding, elastic_exchange, elastic_velocities};
pub use energy::{EnergyMonitor, EnergyReport, StreakState};
pub use vector::{Heading, Vector2D};
pub use world::{ENERGY_LOG_TARGET, Simulation};
