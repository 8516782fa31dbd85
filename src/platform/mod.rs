//! Platform abstraction layer
//!
//! Handles the host side of the game loop:
//! - Input events sampled into one `TickInput` per frame
//! - The frame driver tying world, input and high-score storage together

pub mod driver;
pub mod input;

pub use driver::FrameDriver;
pub use input::{InputSampler, Key};
