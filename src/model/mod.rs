pub mod destination;
pub mod detection;

pub use destination::Destination;
pub use detection::DetectionRecord;
