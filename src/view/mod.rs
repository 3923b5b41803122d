pub mod dashboard;
pub mod putting;
pub mod reference;
pub mod testing;
pub mod three_hole_loop;
pub mod utils;
pub mod wedge_ladder;

pub use dashboard::*;
pub use putting::*;
pub use reference::*;
pub use testing::*;
pub use three_hole_loop::*;
pub use utils::*;
pub use wedge_ladder::*;
