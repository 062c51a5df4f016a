//! Plain 2D geometric value types.
//!
//! This crate provides two small `Copy` value types: [`Point`], a Cartesian
//! coordinate pair, and [`Circle`], a circle described by a center point and
//! a radius. Components are plain `f64` with exact structural equality;
//! nothing is validated or clamped, and non-finite inputs flow through
//! arithmetic with ordinary IEEE 754 semantics.
//!
//! # Quick Start
//!
//! ```rust
//! use planar::{Circle, Point};
//!
//! let p = Point::new(3.0, 4.0);
//! assert_eq!(p.distance_from_origin(), 5.0);
//!
//! let q = p + Point::new(1.0, -2.0);
//! assert_eq!(q, Point::new(4.0, 2.0));
//!
//! let c = Circle::with_center(2.0, p);
//! assert_eq!(c.edge_distance_from_origin(), 3.0);
//! assert_eq!(format!("{c}"), "Circle(2, 3, 4)");
//! ```
//!
//! # Operator contract
//!
//! Binary operators between two points apply component-wise and return a new
//! point. Scalar `*` and `/` scale both components. The `*Assign` variants
//! apply the same transformation to the left operand in place. Division by
//! zero is not guarded and produces IEEE infinities or NaNs.

mod circle;
mod point;

pub use circle::Circle;
pub use point::Point;
