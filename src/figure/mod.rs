
//! Typed descriptions of figures, consumed by an external display
//! mechanism such as a notebook frontend.
//!
//! A [`Figure`] is data, not pixels. This crate never rasterizes;
//! it hands a serializable scene description to whatever frontend
//! actually draws it.

pub mod element;
pub mod payload;
pub mod view;

use element::{Arrow, Label, Marker};
use view::ViewWindow;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::convert::TryFrom;

/// A figure is an ordered sequence of panels, drawn side by side,
/// together with an overall size hint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Figure {
  pub size: FigureSize,
  pub panels: Vec<Panel>,
}

/// Overall figure size, in the host display's units. Matplotlib-style
/// frontends read this as inches.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
  pub width: f64,
  pub height: f64,
}

/// A single panel of a figure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Panel {
  Geometric(GeometricPanel),
  Text(TextPanel),
}

/// A panel with a coordinate system: markers, arrows, and positioned
/// labels, clipped to a fixed view window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometricPanel {
  pub title: String,
  pub markers: Vec<Marker>,
  pub arrows: Vec<Arrow>,
  pub labels: Vec<Label>,
  pub view: ViewWindow,
  pub equal_aspect: bool,
}

/// A panel with axes and ticks disabled, carrying only annotations.
/// Label positions are in axes-fraction coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextPanel {
  pub labels: Vec<Label>,
}

#[derive(Clone, Debug, PartialEq, Error)]
#[error("Expected {expected} panel, got {actual}")]
pub struct TryFromPanelError {
  expected: &'static str,
  actual: &'static str,
}

impl Figure {
  pub fn new(size: FigureSize, panels: Vec<Panel>) -> Figure {
    Figure { size, panels }
  }
}

impl Panel {
  fn kind_name(&self) -> &'static str {
    match self {
      Panel::Geometric(_) => "Geometric",
      Panel::Text(_) => "Text",
    }
  }
}

impl From<GeometricPanel> for Panel {
  fn from(panel: GeometricPanel) -> Panel {
    Panel::Geometric(panel)
  }
}

impl From<TextPanel> for Panel {
  fn from(panel: TextPanel) -> Panel {
    Panel::Text(panel)
  }
}

impl TryFrom<Panel> for GeometricPanel {
  type Error = TryFromPanelError;

  fn try_from(panel: Panel) -> Result<GeometricPanel, TryFromPanelError> {
    match panel {
      Panel::Geometric(p) => Ok(p),
      panel => Err(TryFromPanelError { expected: "Geometric", actual: panel.kind_name() }),
    }
  }
}

impl TryFrom<Panel> for TextPanel {
  type Error = TryFromPanelError;

  fn try_from(panel: Panel) -> Result<TextPanel, TryFromPanelError> {
    match panel {
      Panel::Text(p) => Ok(p),
      panel => Err(TryFromPanelError { expected: "Text", actual: panel.kind_name() }),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_text_panel() -> TextPanel {
    TextPanel { labels: vec![] }
  }

  #[test]
  fn test_try_from_panel() {
    let panel = Panel::from(sample_text_panel());
    assert_eq!(TextPanel::try_from(panel), Ok(sample_text_panel()));
  }

  #[test]
  fn test_try_from_panel_failure() {
    let panel = Panel::from(sample_text_panel());
    let err = GeometricPanel::try_from(panel).unwrap_err();
    assert_eq!(err.to_string(), "Expected Geometric panel, got Text");
  }

  #[test]
  fn test_panel_serialization_tag() {
    let panel = Panel::from(sample_text_panel());
    let json = serde_json::to_value(&panel).unwrap();
    assert_eq!(json["type"], "Text");
  }
}
