pub mod putting;
pub mod reference;
pub mod round;
pub mod session;
pub mod testing;
pub mod types;
pub mod utils;
pub mod wedge;

pub use putting::*;
pub use reference::*;
pub use round::*;
pub use session::*;
pub use testing::*;
pub use types::*;
pub use utils::*;
pub use wedge::*;
