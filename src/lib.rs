pub use chip8::{Chip8, Config};
pub use constants::{TICKS_PER_SECOND, TICK_DURATION};
pub use error::{Error, Result};
pub use instruction::{Flow, Instruction};
pub use sound::{Beep, Mute};
pub use state::{FrameBuffer, RenderingMode};
pub use variant::{quirks, Quirks, Variant};

mod chip8;
pub mod constants;
mod error;
mod instruction;
pub mod opcode;
mod operations;
mod raster;
mod sound;
pub mod state;
mod variant;
