//! Bouncing Balls - two circular bodies under gravity in a rectangular arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vectors, balls, collisions, energy monitor)
//! - `settings`: Serde-backed simulation configuration
//! - `error`: Error type shared by construction and config loading

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{Result, SimError};
pub use settings::{BallSeed, SimConfig};
pub use sim::{Ball, EnergyMonitor, EnergyReport, Heading, Simulation, Vector2D};

/// Simulation configuration constants
pub mod consts {
    /// Gravitational acceleration (m/s², pointing toward -y)
    pub const GRAVITY: f64 = 9.82;
    /// Consecutive drifting frames before the energy diagnostic is emitted
    pub const ENERGY_STREAK: u32 = 5;

    /// Driver frame timestep (60 Hz animation loop)
    pub const FRAME_DT: f64 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default arena dimensions (width, height)
    pub const DEFAULT_ARENA: (f64, f64) = (10.0, 10.0);
}
