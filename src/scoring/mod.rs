pub mod loop_round;
pub mod putting;
pub mod wedge_ladder;

pub use loop_round::*;
pub use putting::*;
pub use wedge_ladder::*;
