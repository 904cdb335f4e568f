//! Platform abstraction layer
//!
//! Hosts (browser shell, native runner) feed two things in here:
//! - Raw input events, normalized to a single activation
//! - Elapsed wall-clock time, turned into frames and spawn timer firings

pub mod driver;
pub mod input;

pub use driver::Driver;
pub use input::{Activate, InputQueue, InputSender, RawInput, input_channel, normalize};
