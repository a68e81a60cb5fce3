
//! Renders a 2D vector as the sum of its x- and y-axis component
//! vectors, for use on lecture slides introducing PCA.
//!
//! The output figure has two panels: a geometric panel with the
//! origin, the vector, and its two component arrows, and a text panel
//! stating the Pythagorean norm identity for the vector.

use crate::figure::{Figure, FigureSize, GeometricPanel, Panel, TextPanel};
use crate::figure::element::{Arrow, Color, Label, Marker};
use crate::figure::view::ViewWindow;
use crate::util::point::Point2D;

pub const FIGURE_SIZE: FigureSize = FigureSize { width: 14.0, height: 4.0 };

/// The view window is fixed regardless of the input vector, so that
/// successive slides share a frame of reference. Vectors outside it
/// are clipped, not rejected.
pub const VIEW_X_BOUNDS: std::ops::Range<f64> = -1.0..5.5;
pub const VIEW_Y_BOUNDS: std::ops::Range<f64> = -1.0..3.0;

pub const FONT_SIZE: f64 = 16.0;
pub const ARROW_WIDTH: f64 = 0.01;

// Label anchors are nudged off the geometry they annotate so the text
// does not sit on top of the arrows.
const ORIGIN_LABEL_OFFSET: Point2D = Point2D { x: -0.3, y: -0.3 };
const VECTOR_LABEL_OFFSET: Point2D = Point2D { x: -2.2, y: 0.0 };
const X_LABEL_OFFSET: Point2D = Point2D { x: -0.5, y: -0.3 };
const Y_LABEL_OFFSET: Point2D = Point2D { x: 0.1, y: -0.1 };

/// Anchor of the norm-identity annotation, in the text panel's
/// axes-fraction coordinates.
const IDENTITY_ANCHOR: Point2D = Point2D { x: 0.0, y: 0.5 };

/// Produces the two-panel decomposition figure for `v1`.
///
/// Accepts any real pair, including zero or degenerate vectors; for
/// `(0, 0)` all three arrows collapse onto the origin, which still
/// renders fine. Behavior on non-finite coordinates is unspecified.
pub fn render(v1: Point2D) -> Figure {
  Figure::new(FIGURE_SIZE, vec![
    Panel::from(geometric_panel(v1)),
    Panel::from(text_panel(v1)),
  ])
}

fn geometric_panel(v1: Point2D) -> GeometricPanel {
  let x_tip = v1.x_component();
  GeometricPanel {
    title: r"x- and y- axis components of $\vec{v_1}$".to_owned(),
    markers: vec![
      Marker { at: Point2D::ORIGIN, color: Color::Red },
    ],
    arrows: vec![
      Arrow::new(Point2D::ORIGIN, x_tip, Color::Red, ARROW_WIDTH),
      Arrow::new(Point2D::ORIGIN, v1, Color::Black, ARROW_WIDTH),
      Arrow::new(x_tip, v1, Color::Blue, ARROW_WIDTH),
    ],
    labels: vec![
      Label::new("$(0, 0)$", Point2D::ORIGIN + ORIGIN_LABEL_OFFSET, FONT_SIZE),
      Label::new(
        format!(r"$\vec{{v_1}} = ({:.2}, {:.2})$", v1.x, v1.y),
        Point2D::ORIGIN.midpoint(v1) + VECTOR_LABEL_OFFSET,
        FONT_SIZE,
      ),
      Label::new(
        format!(r"$\vec{{x}} = ({:.2}, 0)$", v1.x),
        Point2D::ORIGIN.midpoint(x_tip) + X_LABEL_OFFSET,
        FONT_SIZE,
      ),
      Label::new(
        format!(r"$\vec{{y}} = (0, {:.2})$", v1.y),
        x_tip.midpoint(v1) + Y_LABEL_OFFSET,
        FONT_SIZE,
      ),
    ],
    view: ViewWindow::new(VIEW_X_BOUNDS, VIEW_Y_BOUNDS),
    equal_aspect: true,
  }
}

fn text_panel(v1: Point2D) -> TextPanel {
  // The identity is stated symbolically. The squares are never
  // evaluated or checked against the actual norm.
  let identity = format!(
    r"$\|\vec{{v_1}}\|^2 = \|\vec{{x}}\|^2 + \|\vec{{y}}\|^2$ = ${:.2}^2 + {:.2}^2$",
    v1.x, v1.y,
  );
  TextPanel {
    labels: vec![Label::new(identity, IDENTITY_ANCHOR, FONT_SIZE)],
  }
}
