pub mod bounding_box;
pub mod line;
mod parse;
pub mod point;
pub mod segment;
pub mod shape;

pub use bounding_box::BoundingBox;
pub use line::Line;
pub use point::{NaturalPoint, Point, Vector, VirtualPoint};
pub use segment::LineSegment;
pub use shape::{Circle, Geometric, Outline, Polygon, Rectangle, Shape, Square, Triangle};
