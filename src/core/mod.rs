pub mod density;
pub mod tick_scale;

mod rounding;

pub use density::{axis_tick_target_count, max_ticks_for_span};
pub use tick_scale::TickScale;
