use std::time::Duration;

/// Total addressable memory in bytes
pub const MEMORY_SIZE: usize = 4096;

/// Programs are loaded here and the program counter starts here
pub const PROGRAM_START: u16 = 0x200;

/// The largest program image that fits between `PROGRAM_START` and the end of memory
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Number of return addresses the stack can hold
pub const STACK_SIZE: usize = 16;

/// Dimensions of the low resolution display region
pub const LORES_WIDTH: usize = 64;
pub const LORES_HEIGHT: usize = 32;

/// Dimensions of the high resolution display region; this is the size of the frame buffer
pub const DISPLAY_WIDTH: usize = 128;
pub const DISPLAY_HEIGHT: usize = 64;

/// Instructions executed per tick before the speed multiplier is applied
pub const INSTRUCTIONS_PER_FRAME: usize = 10;

/// The tick controller is meant to be driven at this rate
pub const TICKS_PER_SECOND: u32 = 60;

/// Nominal time between two ticks (~16.67ms)
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICKS_PER_SECOND as u64);

/// Snapshots kept for rewinding; one is taken per tick so this is 10 seconds of history
pub const MAX_SAVED_STATES: usize = 600;

/// Each glyph in the font is 5 bytes tall
pub const GLYPH_SIZE: u16 = 5;

/// # Font
/// Glyphs for the hexadecimal digits 0..F, stored at the start of memory.
///
/// Each glyph is 4 pixels wide and 5 tall; only the high nibble of each byte is used.
/// ```text
/// 0xF0 ****
/// 0x90 *  *
/// 0x90 *  *
/// 0x90 *  *
/// 0xF0 ****
/// ```
pub const FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
