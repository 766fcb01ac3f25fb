//! 2D vector algebra for positions and velocities
//!
//! `Vector2D` is a plain value: every operation returns a new vector except
//! `accumulate`, which exists for the integration step, and the
//! `force_*_heading` setters used by wall bounces.

use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Required sign of a vector component after a bounce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Negative,
    Positive,
}

impl Heading {
    /// Map a `-1`/`+1` direction to a heading (anything else is `None`)
    pub fn from_sign(dir: i32) -> Option<Self> {
        match dir {
            -1 => Some(Heading::Negative),
            1 => Some(Heading::Positive),
            _ => None,
        }
    }

    /// Apply this heading to a component, keeping its magnitude
    #[inline]
    pub fn apply(self, component: f64) -> f64 {
        match self {
            Heading::Negative => -component.abs(),
            Heading::Positive => component.abs(),
        }
    }
}

/// Two-component f64 vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector2D(DVec2);

#[allow(clippy::should_implement_trait)]
impl Vector2D {
    pub const ZERO: Self = Self(DVec2::ZERO);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    #[inline]
    pub fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }

    #[inline]
    pub fn scale(self, k: f64) -> Self {
        Self(self.0 * k)
    }

    /// Add `other` into this vector in place
    #[inline]
    pub fn accumulate(&mut self, other: Self) {
        self.0 += other.0;
    }

    /// Euclidean norm
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.0.length()
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.0.length_squared()
    }

    /// Copy of this vector with the x component pointing along `heading`
    #[inline]
    pub fn with_x_heading(self, heading: Heading) -> Self {
        Self::new(heading.apply(self.0.x), self.0.y)
    }

    /// Copy of this vector with the y component pointing along `heading`
    #[inline]
    pub fn with_y_heading(self, heading: Heading) -> Self {
        Self::new(self.0.x, heading.apply(self.0.y))
    }

    #[inline]
    pub fn force_x_heading(&mut self, heading: Heading) {
        self.0.x = heading.apply(self.0.x);
    }

    #[inline]
    pub fn force_y_heading(&mut self, heading: Heading) {
        self.0.y = heading.apply(self.0.y);
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        v.0
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector2D::add(self, rhs)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Vector2D::sub(self, rhs)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}
