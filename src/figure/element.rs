
//! The individual drawable elements of a geometric panel.

use crate::util::point::Point2D;

use serde::{Serialize, Deserialize};

/// A point marker, drawn as a filled dot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
  pub at: Point2D,
  pub color: Color,
}

/// A directed arrow between two points in data coordinates. The arrow
/// head is drawn to scale and counts toward the arrow's visual length.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrow {
  pub from: Point2D,
  pub to: Point2D,
  pub color: Color,
  pub width: f64,
  pub length_includes_head: bool,
}

/// A text annotation anchored at a point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
  pub text: String,
  pub at: Point2D,
  pub font_size: f64,
}

/// The named colors the frontend is expected to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
  Red,
  Black,
  Blue,
}

impl Arrow {
  pub fn new(from: Point2D, to: Point2D, color: Color, width: f64) -> Arrow {
    Arrow { from, to, color, width, length_includes_head: true }
  }

  /// The displacement from tail to head.
  pub fn delta(&self) -> Point2D {
    self.to - self.from
  }
}

impl Label {
  pub fn new(text: impl Into<String>, at: Point2D, font_size: f64) -> Label {
    Label { text: text.into(), at, font_size }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;

  #[test]
  fn test_arrow_delta() {
    let arrow = Arrow::new(Point2D::new(3.0, 0.0), Point2D::new(3.0, 2.0), Color::Blue, 0.01);
    assert_abs_diff_eq!(arrow.delta(), Point2D::new(0.0, 2.0));
  }

  #[test]
  fn test_color_serialization() {
    assert_eq!(serde_json::to_value(Color::Red).unwrap(), "red");
    assert_eq!(serde_json::to_value(Color::Black).unwrap(), "black");
    assert_eq!(serde_json::to_value(Color::Blue).unwrap(), "blue");
  }
}
