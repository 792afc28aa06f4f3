pub mod amp;
pub mod filter_hz;
pub mod ms;
pub mod percentage;
pub mod percentage_bipolar;
pub mod speed;
