pub mod aggregation;
pub mod streaks;

pub use aggregation::*;
pub use streaks::*;
