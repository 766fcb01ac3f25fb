//! Simulation world and the per-frame step
//!
//! `advance` runs four phases in a fixed order:
//! 1. energy diagnostic (reads state, updates the monitor only)
//! 2. ball-ball collision test and response, pairwise in index order
//! 3. wall heading correction, then gravity for balls that did not touch
//!    the top or bottom edge
//! 4. position integration with the velocities from phase 3

use serde::Serialize;

use super::arena::Arena;
use super::ball::Ball;
use super::collision::{balls_colliding, elastic_exchange};
use super::energy::{EnergyMonitor, EnergyReport};
use super::vector::Vector2D;
use crate::error::{Result, SimError};
use crate::settings::SimConfig;

/// Log target for the energy diagnostic line
pub const ENERGY_LOG_TARGET: &str = "energy";

/// Balls in a rectangular arena under uniform gravity
#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    arena: Arena,
    gravity: f64,
    balls: Vec<Ball>,
    start_energy: f64,
    monitor: EnergyMonitor,
    frame: u64,
}

impl Simulation {
    /// Standard two-ball scene in a `width` x `height` arena
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Self::from_config(&SimConfig::two_ball(width, height))
    }

    pub fn from_config(config: &SimConfig) -> Result<Self> {
        config.validate()?;
        let arena = Arena::new(config.width, config.height)?;
        let balls = config
            .balls
            .iter()
            .map(|seed| seed.spawn())
            .collect::<Result<Vec<_>>>()?;

        let start_energy = total_energy(&balls, config.gravity);
        log::debug!(
            "Simulation created: {}x{} arena, {} balls, start energy {}",
            arena.width(),
            arena.height(),
            balls.len(),
            start_energy
        );

        Ok(Self {
            arena,
            gravity: config.gravity,
            balls,
            start_energy,
            monitor: EnergyMonitor::new(start_energy, config.energy_streak),
            frame: 0,
        })
    }

    #[inline]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    #[inline]
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    #[inline]
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn ball(&self, index: usize) -> Option<&Ball> {
        self.balls.get(index)
    }

    /// Total mechanical energy captured at construction
    #[inline]
    pub fn start_energy(&self) -> f64 {
        self.start_energy
    }

    /// Current total mechanical energy
    pub fn total_energy(&self) -> f64 {
        total_energy(&self.balls, self.gravity)
    }

    pub fn energy_monitor(&self) -> &EnergyMonitor {
        &self.monitor
    }

    /// Number of completed `advance` calls
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// `dt == 0` is a no-motion step (diagnostics still run). Negative `dt`
    /// is not rejected and steps backwards through the same formulas.
    pub fn advance(&mut self, dt: f64) {
        if let Some(report) = self.check_energy() {
            log::info!(target: ENERGY_LOG_TARGET, "{report}");
        }
        self.resolve_ball_collisions();
        self.apply_walls_and_gravity(dt);
        for ball in &mut self.balls {
            ball.integrate(dt);
        }
        self.frame += 1;
    }

    fn check_energy(&mut self) -> Option<EnergyReport> {
        let current = total_energy(&self.balls, self.gravity);
        self.monitor.observe(current)
    }

    fn resolve_ball_collisions(&mut self) {
        let n = self.balls.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (head, tail) = self.balls.split_at_mut(j);
                let (a, b) = (&mut head[i], &mut tail[0]);
                if balls_colliding(a, b) {
                    log::debug!("frame {}: balls {i} and {j} collide", self.frame);
                    elastic_exchange(a, b);
                }
            }
        }
    }

    fn apply_walls_and_gravity(&mut self, dt: f64) {
        let gravity_step = Vector2D::new(0.0, self.gravity * dt);
        for (i, ball) in self.balls.iter_mut().enumerate() {
            let contact = self.arena.wall_contact(ball);
            if contact.any() {
                log::trace!("frame {}: ball {i} wall contact {contact:?}", self.frame);
                contact.apply(&mut ball.velocity);
            }
            // No gravity on a floor/ceiling bounce step
            if !contact.vertical() {
                ball.velocity = ball.velocity.sub(gravity_step);
            }
        }
    }

    /// Pretty-printed JSON snapshot of the whole world
    pub fn snapshot_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(SimError::from)
    }
}

fn total_energy(balls: &[Ball], gravity: f64) -> f64 {
    balls.iter().map(|b| b.mechanical_energy(gravity)).sum()
}
