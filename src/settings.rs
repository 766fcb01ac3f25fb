//! Simulation configuration
//!
//! Loaded from a JSON file by the driver; every field falls back to the
//! two-ball default when omitted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ARENA, ENERGY_STREAK, GRAVITY};
use crate::error::{Result, SimError, require_positive};
use crate::sim::{Ball, Vector2D};

/// Initial state of one ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSeed {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub radius: f64,
    pub mass: f64,
}

impl BallSeed {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, radius: f64, mass: f64) -> Self {
        Self {
            position: Vector2D::new(x, y),
            velocity: Vector2D::new(vx, vy),
            radius,
            mass,
        }
    }

    /// Build the ball, validating radius and mass
    pub fn spawn(&self) -> Result<Ball> {
        Ball::new(self.position, self.velocity, self.radius, self.mass)
    }
}

/// Arena, physics constants and initial balls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Arena width
    pub width: f64,
    /// Arena height
    pub height: f64,
    /// Gravitational acceleration along -y
    pub gravity: f64,
    /// Consecutive drifting frames per energy report
    pub energy_streak: u32,
    /// Balls in index order (collision pairs are visited as (i, j), i < j)
    pub balls: Vec<BallSeed>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::two_ball(DEFAULT_ARENA.0, DEFAULT_ARENA.1)
    }
}

impl SimConfig {
    /// The standard scene: two balls placed relative to the arena size
    pub fn two_ball(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            gravity: GRAVITY,
            energy_streak: ENERGY_STREAK,
            balls: vec![
                BallSeed::new(width / 3.0, height * 0.9, 1.2, 1.6, 0.2, 1.0),
                BallSeed::new(2.0 * width / 3.0, height * 0.7, -0.6, 0.6, 0.3, 1.0),
            ],
        }
    }

    /// Check everything that would otherwise fail during stepping
    pub fn validate(&self) -> Result<()> {
        require_positive("arena width", self.width)?;
        require_positive("arena height", self.height)?;
        if !self.gravity.is_finite() {
            return Err(SimError::invalid(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if self.energy_streak == 0 {
            return Err(SimError::invalid("energy_streak must be at least 1"));
        }
        for (i, seed) in self.balls.iter().enumerate() {
            require_positive(&format!("ball {i} radius"), seed.radius)?;
            require_positive(&format!("ball {i} mass"), seed.mass)?;
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded config from {} ({} balls, {}x{} arena)",
            path.display(),
            config.balls.len(),
            config.width,
            config.height
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_ball_seeds() {
        let config = SimConfig::two_ball(9.0, 10.0);
        assert_eq!(config.balls.len(), 2);
        assert_eq!(config.balls[0].position, Vector2D::new(3.0, 9.0));
        assert_eq!(config.balls[0].velocity, Vector2D::new(1.2, 1.6));
        assert_eq!(config.balls[0].radius, 0.2);
        assert_eq!(config.balls[1].position, Vector2D::new(6.0, 7.0));
        assert_eq!(config.balls[1].velocity, Vector2D::new(-0.6, 0.6));
        assert_eq!(config.balls[1].radius, 0.3);
        assert!(config.balls.iter().all(|b| b.mass == 1.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = SimConfig::default();
        config.width = 0.0;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.height = -1.0;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.balls[1].mass = 0.0;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.balls[0].radius = -0.2;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.gravity = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.energy_streak = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let config = SimConfig::from_json(r#"{ "gravity": 1.62 }"#).unwrap();
        assert_eq!(config.gravity, 1.62);
        assert_eq!(config.width, DEFAULT_ARENA.0);
        assert_eq!(config.balls.len(), 2);
    }

    #[test]
    fn test_from_json_custom_balls() {
        let json = r#"{
            "width": 4.0,
            "height": 3.0,
            "balls": [
                { "position": [1.0, 1.0], "velocity": [0.5, 0.0], "radius": 0.1, "mass": 2.0 }
            ]
        }"#;
        let config = SimConfig::from_json(json).unwrap();
        assert_eq!(config.balls.len(), 1);
        assert_eq!(config.balls[0].mass, 2.0);
        assert_eq!(config.energy_streak, ENERGY_STREAK);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            SimConfig::from_json("not json"),
            Err(SimError::Parse(_))
        ));
        assert!(matches!(
            SimConfig::from_json(r#"{ "width": -2.0 }"#),
            Err(SimError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SimConfig::two_ball(12.0, 8.0);
        let json = config.to_json().unwrap();
        assert_eq!(SimConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            SimConfig::load("/nonexistent/bouncing-balls.json"),
            Err(SimError::Io(_))
        ));
    }
}
