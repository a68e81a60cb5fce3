
//! Structs for manipulating points in 2D space.

use approx::AbsDiffEq;
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};

#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point2D {
  pub x: f64,
  pub y: f64,
}

impl Point2D {
  pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

  pub fn new(x: f64, y: f64) -> Point2D {
    Point2D { x, y }
  }

  /// The projection of this point onto the x axis.
  pub fn x_component(self) -> Point2D {
    Point2D { x: self.x, y: 0.0 }
  }

  /// The projection of this point onto the y axis.
  pub fn y_component(self) -> Point2D {
    Point2D { x: 0.0, y: self.y }
  }

  pub fn midpoint(self, other: Point2D) -> Point2D {
    Point2D {
      x: (self.x + other.x) / 2.0,
      y: (self.y + other.y) / 2.0,
    }
  }

  pub fn norm_squared(self) -> f64 {
    self.x * self.x + self.y * self.y
  }
}

impl Add for Point2D {
  type Output = Point2D;

  fn add(self, other: Point2D) -> Point2D {
    Point2D {
      x: self.x + other.x,
      y: self.y + other.y,
    }
  }
}

impl Sub for Point2D {
  type Output = Point2D;

  fn sub(self, other: Point2D) -> Point2D {
    Point2D {
      x: self.x - other.x,
      y: self.y - other.y,
    }
  }
}

impl Display for Point2D {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

impl From<(f64, f64)> for Point2D {
  fn from((x, y): (f64, f64)) -> Point2D {
    Point2D { x, y }
  }
}

impl AbsDiffEq for Point2D {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
    self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;

  #[test]
  fn test_components() {
    let p = Point2D::new(3.0, 2.0);
    assert_eq!(p.x_component(), Point2D::new(3.0, 0.0));
    assert_eq!(p.y_component(), Point2D::new(0.0, 2.0));
    assert_eq!(p.x_component() + p.y_component(), p);
  }

  #[test]
  fn test_midpoint() {
    let p = Point2D::new(3.0, 2.0);
    assert_abs_diff_eq!(Point2D::ORIGIN.midpoint(p), Point2D::new(1.5, 1.0));
    assert_abs_diff_eq!(p.midpoint(p), p);
  }

  #[test]
  fn test_norm_squared() {
    assert_abs_diff_eq!(Point2D::new(3.0, 4.0).norm_squared(), 25.0);
    assert_abs_diff_eq!(Point2D::ORIGIN.norm_squared(), 0.0);
  }

  #[test]
  fn test_display() {
    assert_eq!(Point2D::new(0.5, -1.0).to_string(), "(0.5, -1)");
  }
}
