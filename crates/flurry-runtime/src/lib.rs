//! Flurry Runtime - Frame loop infrastructure
//!
//! Provides the building blocks a host uses to drive the particle core:
//! - `FrameClock` - fixed-step driver with FPS accounting
//! - `PointerInput` - translates pointer events into emission requests
//! - `RuntimeSystem` - trait for systems ticked by the clock

mod clock;
mod input;
mod system;

pub use clock::{ClockSettings, FpsCounter, FrameClock, FrameReport};
pub use input::{EmitRequest, PointerEvent, PointerInput};
pub use system::RuntimeSystem;
