
//! Visible coordinate windows for geometric panels.

use serde::{Serialize, Deserialize};

use std::ops::Range;

/// The visible data-coordinate range of a panel. The window is fixed
/// by the caller; content outside it is simply not visible, which is
/// not an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewWindow {
  pub x_bounds: Range<f64>,
  pub y_bounds: Range<f64>,
}

impl ViewWindow {
  pub fn new(x_bounds: Range<f64>, y_bounds: Range<f64>) -> ViewWindow {
    ViewWindow { x_bounds, y_bounds }
  }

  pub fn width(&self) -> f64 {
    self.x_bounds.end - self.x_bounds.start
  }

  pub fn height(&self) -> f64 {
    self.y_bounds.end - self.y_bounds.start
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;

  #[test]
  fn test_dimensions() {
    let view = ViewWindow::new(-1.0..5.5, -1.0..3.0);
    assert_abs_diff_eq!(view.width(), 6.5);
    assert_abs_diff_eq!(view.height(), 4.0);
  }
}
