use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT, LORES_HEIGHT, LORES_WIDTH, MEMORY_SIZE, PROGRAM_START,
    STACK_SIZE,
};
use crate::variant::{Quirks, Variant};

/// A snapshot of the machine's internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry, borrow and collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) an 8-bit stack pointer; the index of the next free stack slot
///
/// Timers
/// - 2 8-bit timers (delay & sound), each decremented once per tick while nonzero
///
/// ## Memory
/// - 16 slot stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 holds the font
///     - 0x200.. holds the loaded program
/// - 128x64 frame buffer
///     - only the top left 64x32 region is used in low resolution mode
///
/// ## Input
/// - 16 booleans tracking the pressed status of keys 0..F
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub rendering_mode: RenderingMode,
    pub draw_flag: bool,
    pub keypad: [bool; 16],
    variant: Variant,
}

impl State {
    pub fn new(variant: Variant) -> Self {
        // 0x000 - 0x050 is reserved for the font
        let mut memory = [0; MEMORY_SIZE];
        memory[..FONT.len()].copy_from_slice(&FONT);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory,
            frame_buffer: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            rendering_mode: RenderingMode::Low,
            draw_flag: false,
            keypad: [false; 16],
            variant,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn quirks(&self) -> Quirks {
        self.variant.quirks()
    }

    /// Reads a byte; addresses wrap within memory
    pub fn read(&self, address: u16) -> u8 {
        self.memory[address as usize % MEMORY_SIZE]
    }

    /// Writes a byte; addresses wrap within memory
    pub fn write(&mut self, address: u16, value: u8) {
        self.memory[address as usize % MEMORY_SIZE] = value;
    }

    /// Width and height of the region of the frame buffer the current rendering mode uses
    pub fn resolution(&self) -> (usize, usize) {
        self.rendering_mode.resolution()
    }
}

/// The FrameBuffer is indexed as [y][x]; `true` is a lit pixel
pub type FrameBuffer = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// Which region of the frame buffer is active
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderingMode {
    /// 64x32
    Low,
    /// 128x64
    High,
}

impl RenderingMode {
    pub fn resolution(self) -> (usize, usize) {
        match self {
            RenderingMode::Low => (LORES_WIDTH, LORES_HEIGHT),
            RenderingMode::High => (DISPLAY_WIDTH, DISPLAY_HEIGHT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_program() {
        let state = State::new(Variant::Chip8);
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.sp, 0);
        assert_eq!(state.rendering_mode, RenderingMode::Low);
    }

    #[test]
    fn test_font_for_zero() {
        let state = State::new(Variant::XoChip);
        assert_eq!(state.memory[0..5], [0xF0, 0x90, 0x90, 0x90, 0xF0]);
        assert_eq!(state.memory[0x4B..0x50], [0xF0, 0x80, 0xF0, 0x80, 0x80]);
    }

    #[test]
    fn test_memory_access_wraps() {
        let mut state = State::new(Variant::Chip8);
        state.write(0x1000, 0xAB);
        assert_eq!(state.memory[0x000], 0xAB);
        assert_eq!(state.read(0xF000), 0xAB);
    }

    #[test]
    fn test_resolution_follows_mode() {
        let mut state = State::new(Variant::SuperChip);
        assert_eq!(state.resolution(), (64, 32));
        state.rendering_mode = RenderingMode::High;
        assert_eq!(state.resolution(), (128, 64));
    }
}
