
//! Wire form of a figure, for handing to the display frontend.

use super::Figure;

use base64::engine::general_purpose::{STANDARD as BASE64_STANDARD};
use base64::Engine;
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};
use std::io::Cursor;

/// A [`Figure`] serialized in CBOR and encoded in base64.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerializedFigure {
  base64: String,
}

impl SerializedFigure {
  pub fn new(figure: &Figure) -> anyhow::Result<SerializedFigure> {
    let mut bytes = Vec::<u8>::new();
    ciborium::into_writer(figure, &mut bytes)?;
    Ok(SerializedFigure {
      base64: BASE64_STANDARD.encode(&bytes),
    })
  }

  pub fn try_deserialize(self) -> anyhow::Result<Figure> {
    let bytes = BASE64_STANDARD.decode(self.base64)?;
    let figure = ciborium::from_reader(Cursor::new(bytes))?;
    Ok(figure)
  }
}

impl Display for SerializedFigure {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(&self.base64)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::decomposition;
  use crate::util::point::Point2D;

  #[test]
  fn test_serialized_figure_round_trip() {
    let figure = decomposition::render(Point2D::new(3.0, 2.0));
    let serialized = SerializedFigure::new(&figure).unwrap();
    assert_eq!(serialized.try_deserialize().unwrap(), figure);
  }

  #[test]
  fn test_serialized_figure_is_base64() {
    let figure = decomposition::render(Point2D::new(3.0, 2.0));
    let serialized = SerializedFigure::new(&figure).unwrap();
    let text = serialized.to_string();
    assert!(!text.is_empty());
    assert!(BASE64_STANDARD.decode(text).is_ok());
  }
}
