pub mod calendar;
pub mod period;

// Chronology crate: small, well-tested calendar primitives only.
pub use calendar::*;
pub use period::*;
