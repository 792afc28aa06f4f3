pub use step::{decrement, drag, increment, snap_value};
pub use string::{find_number, find_positive_number, format_compact};
pub use tweaker::{Tweaker, Unit};
pub use units::amp::Amp;
pub use units::filter_hz::FilterHz;
pub use units::ms::Ms;
pub use units::percentage::Percentage;
pub use units::percentage_bipolar::PercentageBipolar;
pub use units::speed::Speed;

/// The raw control-space scalar a widget manipulates.
pub type Value = f32;

// Re-exports
pub use knurl_core;

mod step;
mod string;
mod tweaker;
pub mod units;
