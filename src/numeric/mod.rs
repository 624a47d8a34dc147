pub mod exact;
pub mod float;
pub mod scalar;

pub use exact::Exact;
pub use scalar::Scalar;
