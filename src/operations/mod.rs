pub mod abs;
pub mod zero;

pub use abs::Abs;
pub use zero::{One, Zero};
