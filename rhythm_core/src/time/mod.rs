pub mod conductor;

pub use conductor::{ClockTick, Conductor};
