pub mod orientation;
pub mod overlap;
pub mod winding;

pub use orientation::{Orientation, area, orient2d, orientation2d};
pub use overlap::{tri_tri_overlap_2d, tri_tri_overlap_2d_with};
pub use winding::{WindingError, normalize_winding};
