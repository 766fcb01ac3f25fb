//! Collision detection and response
//!
//! Ball-ball response treats x and y as two independent 1D elastic
//! collisions. Momentum and kinetic energy are conserved per axis, but the
//! contact normal is ignored, so oblique impacts exchange the wrong
//! components. The energy monitor's numbers depend on this exact formula;
//! it is not replaced by a contact-normal impulse.

use super::ball::Ball;
use super::vector::{Heading, Vector2D};

/// Which arena edges a ball touched this step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
    pub top: bool,
}

impl WallContact {
    /// Top or bottom edge touched (gravity is skipped for the step)
    #[inline]
    pub fn vertical(&self) -> bool {
        self.top || self.bottom
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.left || self.right || self.vertical()
    }

    /// Point the velocity back into the arena for every touched edge
    ///
    /// Only signs change; the position is left where it is.
    pub fn apply(&self, velocity: &mut Vector2D) {
        if self.left {
            velocity.force_x_heading(Heading::Positive);
        }
        if self.right {
            velocity.force_x_heading(Heading::Negative);
        }
        if self.bottom {
            velocity.force_y_heading(Heading::Positive);
        }
        if self.top {
            velocity.force_y_heading(Heading::Negative);
        }
    }
}

/// Centers closer than (or exactly at) the sum of the radii
pub fn balls_colliding(a: &Ball, b: &Ball) -> bool {
    let distance = a.position.sub(b.position).magnitude();
    distance <= a.radius() + b.radius()
}

/// Post-collision velocities for a pair, per-axis 1D elastic formula
///
/// `v1' = ((m1 - m2)·u1 + 2·m2·u2) / (m1 + m2)`, symmetric for `v2'`.
pub fn elastic_velocities(
    u1: Vector2D,
    m1: f64,
    u2: Vector2D,
    m2: f64,
) -> (Vector2D, Vector2D) {
    let total = m1 + m2;
    let v1 = u1.scale((m1 - m2) / total).add(u2.scale(2.0 * m2 / total));
    let v2 = u1.scale(2.0 * m1 / total).add(u2.scale((m2 - m1) / total));
    (v1, v2)
}

/// Exchange velocities between two colliding balls in place
pub fn elastic_exchange(a: &mut Ball, b: &mut Ball) {
    let (v1, v2) = elastic_velocities(a.velocity, a.mass(), b.velocity, b.mass());
    a.velocity = v1;
    b.velocity = v2;
}
