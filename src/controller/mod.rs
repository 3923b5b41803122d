pub mod dashboard;
pub mod putting;
pub mod testing;
pub mod three_hole_loop;
pub mod wedge_ladder;

/// Rolling window used by every trend chart unless overridden.
pub const DEFAULT_TREND_WINDOW: usize = 3;
