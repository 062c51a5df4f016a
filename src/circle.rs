use std::f64::consts::PI;
use std::fmt;

use crate::Point;

/// Circle described by a center point and a radius.
///
/// The radius is not validated: zero and negative radii are representable,
/// and every measurement below is defined on them.
#[derive(Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    /// Creates a circle of the given radius centered at the origin.
    pub fn new(radius: f64) -> Self {
        Self::with_center(radius, Point::origin())
    }

    /// Creates a circle of the given radius centered at `center`.
    pub fn with_center(radius: f64, center: Point) -> Self {
        Self { center, radius }
    }

    /// Returns the distance of the circle's edge from the origin.
    ///
    /// ```rust
    /// use planar::{Circle, Point};
    ///
    /// let circle = Circle::with_center(2.0, Point::new(3.0, 4.0));
    /// assert_eq!(circle.edge_distance_from_origin(), 3.0);
    /// ```
    pub fn edge_distance_from_origin(&self) -> f64 {
        (self.center.distance_from_origin() - self.radius).abs()
    }

    /// Returns the circle's area.
    ///
    /// ```rust
    /// use planar::Circle;
    ///
    /// let circle = Circle::new(3.0);
    /// assert_eq!(circle.area() as i64, 28);
    /// ```
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Returns the circle's circumference.
    ///
    /// ```rust
    /// use planar::Circle;
    ///
    /// let circle = Circle::new(3.0);
    /// assert_eq!(circle.circumference() as i64, 18);
    /// ```
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl fmt::Debug for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circle({}, {}, {})",
            self.radius, self.center.x, self.center.y
        )
    }
}

// The display form is the debug form.
impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
