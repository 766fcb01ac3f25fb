//! Ball entity: kinematic state plus fixed radius and mass

use serde::{Deserialize, Serialize};

use super::vector::Vector2D;
use crate::error::{Result, require_positive};

/// A circular body
///
/// Position and velocity change every step; radius and mass are fixed at
/// construction and only exposed through getters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vector2D,
    pub velocity: Vector2D,
    radius: f64,
    mass: f64,
}

impl Ball {
    /// Create a ball, rejecting non-positive radius or mass
    pub fn new(position: Vector2D, velocity: Vector2D, radius: f64, mass: f64) -> Result<Self> {
        require_positive("radius", radius)?;
        require_positive("mass", mass)?;
        Ok(Self {
            position,
            velocity,
            radius,
            mass,
        })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// ½·m·|v|²
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    /// m·g·y, measured from the arena floor
    pub fn potential_energy(&self, gravity: f64) -> f64 {
        self.mass * gravity * self.position.y()
    }

    /// Kinetic plus gravitational potential energy
    pub fn mechanical_energy(&self, gravity: f64) -> f64 {
        self.kinetic_energy() + self.potential_energy(gravity)
    }

    pub fn momentum(&self) -> Vector2D {
        self.velocity.scale(self.mass)
    }

    /// Explicit Euler position update with the current velocity
    pub fn integrate(&mut self, dt: f64) {
        self.position.accumulate(self.velocity.scale(dt));
    }
}
