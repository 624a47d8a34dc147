pub mod point_2;
pub mod triangle_2;

pub use point_2::Point2;
pub use triangle_2::Triangle2;
