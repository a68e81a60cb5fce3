
pub mod decomposition;
pub mod figure;
pub mod util;

pub use decomposition::render;
pub use figure::Figure;
pub use util::point::Point2D;
