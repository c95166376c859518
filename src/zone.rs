//! Zone definitions: named angular sectors of the field and their
//! representative points.

use core::fmt;

/// Index of a zone within its catalog.
pub type ZoneId = usize;

/// A point on the field. The origin is the pitch, the boundary has radius 1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        libm::hypot(self.x - other.x, self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Round `value` to `places` decimal digits. Zero always comes back
/// positive: an empty `f64` sum is `-0.0`.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = libm::pow(10.0, places as f64);
    libm::round(value * scale) / scale + 0.0
}

/// Project a polar angle (degrees) at `radius` to a point, rounded to three
/// decimals.
pub fn angle_to_point(angle_deg: f64, radius: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(
        round_to(libm::cos(rad) * radius, 3),
        round_to(libm::sin(rad) * radius, 3),
    )
}

/// Static description of a zone: name, angular interval `[start, end)` in
/// degrees and scoring-risk weight.
///
/// Intervals may overlap or run past ±180°; nothing is normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneDef {
    name: &'static str,
    start: f64,
    end: f64,
    risk: f64,
}

impl ZoneDef {
    /// Create a new zone definition.
    pub const fn new(name: &'static str, start: f64, end: f64, risk: f64) -> Self {
        Self {
            name,
            start,
            end,
            risk,
        }
    }

    /// Zone's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Angular interval `(start, end)` in degrees.
    pub fn angle(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    /// Scoring-risk weight in `(0, 1]`.
    pub fn risk(&self) -> f64 {
        self.risk
    }

    /// Midpoint of the angular interval in degrees.
    pub fn mid_angle(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Representative point: the midpoint angle projected at `radius`.
    pub fn center(&self, radius: f64) -> Point {
        angle_to_point(self.mid_angle(), radius)
    }
}
