//! Rectangular, axis-aligned arena with its origin at the bottom-left corner

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::WallContact;
use crate::error::{Result, require_positive};

/// Arena bounds: x in [0, width], y in [0, height]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    width: f64,
    height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        require_positive("arena width", width)?;
        require_positive("arena height", height)?;
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Which edges the ball's extent touches or has crossed
    pub fn wall_contact(&self, ball: &Ball) -> WallContact {
        let p = ball.position;
        let r = ball.radius();
        WallContact {
            left: p.x() - r <= 0.0,
            right: p.x() + r >= self.width,
            bottom: p.y() - r <= 0.0,
            top: p.y() + r >= self.height,
        }
    }

    /// Whether the ball lies strictly inside every wall
    pub fn contains(&self, ball: &Ball) -> bool {
        !self.wall_contact(ball).any()
    }
}
