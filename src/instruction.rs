use rand::RngCore;

use crate::error::{Error, Result};
use crate::opcode::Opcode;
use crate::operations::*;
use crate::raster;
use crate::state::{RenderingMode, State};

/// Whether the current batch of instructions should keep going
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Halt,
}

/// A decoded opcode. Register fields are the raw 4-bit indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 00CN - scroll down n rows
    ScrollDown(u8),
    /// 00E0 - clear screen
    Clear,
    /// 00EE - return from subroutine
    Return,
    /// 00FB - scroll right 4 columns
    ScrollRight,
    /// 00FC - scroll left 4 columns
    ScrollLeft,
    /// 00FD - stop executing for the rest of the tick
    Halt,
    /// 00FE - low resolution
    LowRes,
    /// 00FF - high resolution
    HighRes,
    /// 1NNN - jump to NNN
    Jump(u16),
    /// 2NNN - call subroutine at NNN
    Call(u16),
    /// 3XKK - skip next if Vx == KK
    SkipEqualByte(u8, u8),
    /// 4XKK - skip next if Vx != KK
    SkipNotEqualByte(u8, u8),
    /// 5XY0 - skip next if Vx == Vy
    SkipEqual(u8, u8),
    /// 6XKK - Vx = KK
    LoadByte(u8, u8),
    /// 7XKK - Vx += KK
    AddByte(u8, u8),
    /// 8XY0 - Vx = Vy
    Move(u8, u8),
    /// 8XY1 - Vx |= Vy
    Or(u8, u8),
    /// 8XY2 - Vx &= Vy
    And(u8, u8),
    /// 8XY3 - Vx ^= Vy
    Xor(u8, u8),
    /// 8XY4 - Vx += Vy, VF = carry
    Add(u8, u8),
    /// 8XY5 - Vx -= Vy, VF = !borrow
    Sub(u8, u8),
    /// 8XY6 - Vx >>= 1, VF = lsb
    ShiftRight(u8, u8),
    /// 8XY7 - Vx = Vy - Vx, VF = !borrow
    SubReversed(u8, u8),
    /// 8XYE - Vx <<= 1, VF = msb
    ShiftLeft(u8, u8),
    /// 9XY0 - skip next if Vx != Vy
    SkipNotEqual(u8, u8),
    /// ANNN - I = NNN
    LoadIndex(u16),
    /// BNNN - jump to NNN plus an offset register
    JumpOffset(u16),
    /// CXKK - Vx = rand & KK
    Random(u8, u8),
    /// DXYN - draw an n row sprite at Vx, Vy
    Draw(u8, u8, u8),
    /// EX9E - skip next if key Vx is pressed
    SkipPressed(u8),
    /// EXA1 - skip next if key Vx is not pressed
    SkipNotPressed(u8),
    /// FX07 - Vx = DT
    LoadDelay(u8),
    /// FX0A - wait for a key and store it in Vx
    WaitKey(u8),
    /// FX15 - DT = Vx
    SetDelay(u8),
    /// FX18 - ST = Vx
    SetSound(u8),
    /// FX1E - I += Vx
    AddIndex(u8),
    /// FX29 - I = glyph for Vx
    LoadGlyph(u8),
    /// FX33 - mem[I..I+3] = bcd(Vx)
    Bcd(u8),
    /// FX55 - mem[I..=I+x] = V0..=Vx
    Store(u8),
    /// FX65 - V0..=Vx = mem[I..=I+x]
    Load(u8),
}

impl Instruction {
    /// Selects the Instruction for a given opcode.
    /// `address` is only used to report where an unknown opcode was found.
    pub fn decode(op: u16, address: u16) -> Result<Instruction> {
        use Instruction::*;

        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xC, n) => ScrollDown(n),
            (0x0, 0x0, 0xE, 0x0) => Clear,
            (0x0, 0x0, 0xE, 0xE) => Return,
            (0x0, 0x0, 0xF, 0xB) => ScrollRight,
            (0x0, 0x0, 0xF, 0xC) => ScrollLeft,
            (0x0, 0x0, 0xF, 0xD) => Halt,
            (0x0, 0x0, 0xF, 0xE) => LowRes,
            (0x0, 0x0, 0xF, 0xF) => HighRes,
            (0x1, ..) => Jump(op.addr()),
            (0x2, ..) => Call(op.addr()),
            (0x3, x, ..) => SkipEqualByte(x, op.kk()),
            (0x4, x, ..) => SkipNotEqualByte(x, op.kk()),
            (0x5, x, y, 0x0) => SkipEqual(x, y),
            (0x6, x, ..) => LoadByte(x, op.kk()),
            (0x7, x, ..) => AddByte(x, op.kk()),
            (0x8, x, y, 0x0) => Move(x, y),
            (0x8, x, y, 0x1) => Or(x, y),
            (0x8, x, y, 0x2) => And(x, y),
            (0x8, x, y, 0x3) => Xor(x, y),
            (0x8, x, y, 0x4) => Add(x, y),
            (0x8, x, y, 0x5) => Sub(x, y),
            (0x8, x, y, 0x6) => ShiftRight(x, y),
            (0x8, x, y, 0x7) => SubReversed(x, y),
            (0x8, x, y, 0xE) => ShiftLeft(x, y),
            (0x9, x, y, 0x0) => SkipNotEqual(x, y),
            (0xA, ..) => LoadIndex(op.addr()),
            (0xB, ..) => JumpOffset(op.addr()),
            (0xC, x, ..) => Random(x, op.kk()),
            (0xD, x, y, n) => Draw(x, y, n),
            (0xE, x, 0x9, 0xE) => SkipPressed(x),
            (0xE, x, 0xA, 0x1) => SkipNotPressed(x),
            (0xF, x, 0x0, 0x7) => LoadDelay(x),
            (0xF, x, 0x0, 0xA) => WaitKey(x),
            (0xF, x, 0x1, 0x5) => SetDelay(x),
            (0xF, x, 0x1, 0x8) => SetSound(x),
            (0xF, x, 0x1, 0xE) => AddIndex(x),
            (0xF, x, 0x2, 0x9) => LoadGlyph(x),
            (0xF, x, 0x3, 0x3) => Bcd(x),
            (0xF, x, 0x5, 0x5) => Store(x),
            (0xF, x, 0x6, 0x5) => Load(x),
            _ => {
                return Err(Error::UnknownOpcode {
                    opcode: op,
                    address,
                })
            }
        };
        Ok(instruction)
    }

    /// Runs the instruction against `state`; the program counter must already point past it
    pub fn execute(self, state: &mut State, rng: &mut dyn RngCore) -> Result<Flow> {
        use Instruction::*;

        match self {
            ScrollDown(n) => raster::scroll_down(state, n),
            Clear => raster::clear(state),
            Return => ret(state)?,
            ScrollRight => raster::scroll_right(state),
            ScrollLeft => raster::scroll_left(state),
            Halt => return Ok(Flow::Halt),
            LowRes => raster::set_mode(state, RenderingMode::Low),
            HighRes => raster::set_mode(state, RenderingMode::High),
            Jump(addr) => jump(state, addr),
            Call(addr) => call(state, addr)?,
            SkipEqualByte(x, kk) => ske(state, x, kk),
            SkipNotEqualByte(x, kk) => skne(state, x, kk),
            SkipEqual(x, y) => skre(state, x, y),
            LoadByte(x, kk) => load(state, x, kk),
            AddByte(x, kk) => add(state, x, kk),
            Move(x, y) => mv(state, x, y),
            Or(x, y) => or(state, x, y),
            And(x, y) => and(state, x, y),
            Xor(x, y) => xor(state, x, y),
            Add(x, y) => addr(state, x, y),
            Sub(x, y) => sub(state, x, y),
            ShiftRight(x, y) => shr(state, x, y),
            SubReversed(x, y) => subn(state, x, y),
            ShiftLeft(x, y) => shl(state, x, y),
            SkipNotEqual(x, y) => skrne(state, x, y),
            LoadIndex(addr) => loadi(state, addr),
            JumpOffset(addr) => jumpi(state, addr),
            Random(x, kk) => rand(state, x, kk, rng),
            Draw(x, y, n) => raster::draw(state, x, y, n),
            SkipPressed(x) => skpr(state, x),
            SkipNotPressed(x) => skup(state, x),
            LoadDelay(x) => moved(state, x),
            WaitKey(x) => keyd(state, x),
            SetDelay(x) => loads(state, x),
            SetSound(x) => ld(state, x),
            AddIndex(x) => addi(state, x),
            LoadGlyph(x) => ldspr(state, x),
            Bcd(x) => bcd(state, x),
            Store(x) => stor(state, x),
            Load(x) => read(state, x),
        }
        Ok(Flow::Continue)
    }
}
