use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Point;

impl Point {
    /// Component-wise floor of the quotient by a scalar.
    ///
    /// Rust has no floor-division operator to overload; this is the method
    /// form, equivalent to flooring each component of `self / rhs`.
    pub fn floor_div(self, rhs: f64) -> Point {
        Point::new((self.x / rhs).floor(), (self.y / rhs).floor())
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl DivAssign<f64> for Point {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn add_is_component_wise() {
        let sum = Point::new(1.0, 2.0) + Point::new(3.0, -4.0);
        assert_eq!(sum, Point::new(4.0, -2.0));
    }

    #[test]
    fn add_assign_matches_add() {
        let mut acc = Point::new(1.0, 2.0);
        acc += Point::new(3.0, -4.0);
        assert_eq!(acc, Point::new(1.0, 2.0) + Point::new(3.0, -4.0));
    }

    #[test]
    fn sub_returns_a_point() {
        let diff = Point::new(5.0, 7.0) - Point::new(2.0, 3.0);
        assert_eq!(diff, Point::new(3.0, 4.0));
    }

    #[test]
    fn sub_assign_subtracts_the_operand() {
        let mut p = Point::new(5.0, 7.0);
        p -= Point::new(2.0, 3.0);
        assert_eq!(p, Point::new(3.0, 4.0));
    }

    #[test]
    fn neg_flips_both_components() {
        assert_eq!(-Point::new(3.0, -4.0), Point::new(-3.0, 4.0));
    }

    #[test]
    fn scalar_mul_scales_both_components() {
        assert_eq!(Point::new(3.0, -4.0) * 2.0, Point::new(6.0, -8.0));
    }

    #[test]
    fn scalar_div_scales_both_components() {
        assert_eq!(Point::new(6.0, -8.0) / 2.0, Point::new(3.0, -4.0));
    }

    #[test]
    fn scalar_assign_variants_match_binary_forms() {
        let mut m = Point::new(3.0, -4.0);
        m *= 2.0;
        assert_eq!(m, Point::new(6.0, -8.0));
        m /= 2.0;
        assert_eq!(m, Point::new(3.0, -4.0));
    }

    #[test]
    fn floor_div_floors_each_quotient() {
        assert_eq!(Point::new(7.0, -7.0).floor_div(2.0), Point::new(3.0, -4.0));
    }

    #[test]
    fn division_by_zero_follows_ieee_semantics() {
        let p = Point::new(1.0, -1.0) / 0.0;
        assert_eq!(p.x, f64::INFINITY);
        assert_eq!(p.y, f64::NEG_INFINITY);
    }
}
