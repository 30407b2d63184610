use rand::{Rng, RngCore};

use crate::constants::{GLYPH_SIZE, STACK_SIZE};
use crate::error::{Error, Result};
use crate::state::State;

// Every operation runs after the program counter has been moved past its own opcode,
// so `state.pc - 2` is the address of the instruction being executed.

fn current_address(state: &State) -> u16 {
    state.pc.wrapping_sub(2)
}

fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.pc = state.pc.wrapping_add(2);
    }
}

/// PC = STACK.pop()
pub fn ret(state: &mut State) -> Result<()> {
    if state.sp == 0 {
        return Err(Error::StackUnderflow {
            address: current_address(state),
        });
    }
    state.sp -= 1;
    state.pc = state.stack[state.sp as usize];
    Ok(())
}

/// PC = addr
pub fn jump(state: &mut State, addr: u16) {
    state.pc = addr;
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, addr: u16) -> Result<()> {
    if state.sp as usize >= STACK_SIZE - 1 {
        return Err(Error::StackOverflow {
            address: current_address(state),
        });
    }
    state.stack[state.sp as usize] = state.pc;
    state.sp += 1;
    state.pc = addr;
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(state: &mut State, x: u8, kk: u8) {
    let condition = state.v[x as usize] == kk;
    skip_if(state, condition);
}

/// if Vx != kk then pc += 2
pub fn skne(state: &mut State, x: u8, kk: u8) {
    let condition = state.v[x as usize] != kk;
    skip_if(state, condition);
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &mut State, x: u8, y: u8) {
    let condition = state.v[x as usize] == state.v[y as usize];
    skip_if(state, condition);
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &mut State, x: u8, y: u8) {
    let condition = state.v[x as usize] != state.v[y as usize];
    skip_if(state, condition);
}

/// Vx = kk
pub fn load(state: &mut State, x: u8, kk: u8) {
    state.v[x as usize] = kk;
}

/// Vx += kk
/// Overflow is dropped and VF is left alone
pub fn add(state: &mut State, x: u8, kk: u8) {
    state.v[x as usize] = state.v[x as usize].wrapping_add(kk);
}

/// Vx = Vy
pub fn mv(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] = state.v[y as usize];
}

fn logic(state: &mut State, x: u8, y: u8, op: fn(u8, u8) -> u8) {
    state.v[x as usize] = op(state.v[x as usize], state.v[y as usize]);
    if state.quirks().logic_resets_flag {
        state.v[0xF] = 0x0;
    }
}

/// Vx |= Vy
pub fn or(state: &mut State, x: u8, y: u8) {
    logic(state, x, y, |a, b| a | b);
}

/// Vx &= Vy
pub fn and(state: &mut State, x: u8, y: u8) {
    logic(state, x, y, |a, b| a & b);
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: u8, y: u8) {
    logic(state, x, y, |a, b| a ^ b);
}

/// Vx += Vy; VF = overflow
pub fn addr(state: &mut State, x: u8, y: u8) {
    let (res, over) = state.v[x as usize].overflowing_add(state.v[y as usize]);
    state.v[x as usize] = res;
    state.v[0xF] = over as u8;
}

/// Vx -= Vy; VF = !underflow
pub fn sub(state: &mut State, x: u8, y: u8) {
    let (res, under) = state.v[x as usize].overflowing_sub(state.v[y as usize]);
    state.v[x as usize] = res;
    state.v[0xF] = !under as u8;
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(state: &mut State, x: u8, y: u8) {
    let (res, under) = state.v[y as usize].overflowing_sub(state.v[x as usize]);
    state.v[x as usize] = res;
    state.v[0xF] = !under as u8;
}

/// Vx >>= 1; VF = the bit shifted out
pub fn shr(state: &mut State, x: u8, y: u8) {
    if state.quirks().shift_copies_source {
        state.v[x as usize] = state.v[y as usize];
    }
    let lsb = state.v[x as usize] & 0x1;
    state.v[x as usize] >>= 1;
    state.v[0xF] = lsb;
}

/// Vx <<= 1; VF = the bit shifted out
pub fn shl(state: &mut State, x: u8, y: u8) {
    if state.quirks().shift_copies_source {
        state.v[x as usize] = state.v[y as usize];
    }
    let msb = state.v[x as usize] >> 7;
    state.v[x as usize] <<= 1;
    state.v[0xF] = msb;
}

/// I = addr
pub fn loadi(state: &mut State, addr: u16) {
    state.i = addr;
}

/// PC = V0 + addr, or Vx + addr where x is the high nibble of addr
pub fn jumpi(state: &mut State, addr: u16) {
    let register = if state.quirks().offset_jump_uses_vx {
        (addr >> 8) as usize & 0xF
    } else {
        0x0
    };
    state.pc = addr.wrapping_add(u16::from(state.v[register]));
}

/// Vx = rand_byte & kk
pub fn rand(state: &mut State, x: u8, kk: u8, rng: &mut dyn RngCore) {
    let rand_byte: u8 = rng.gen();
    state.v[x as usize] = rand_byte & kk;
}

/// if keypad[Vx] then pc += 2
pub fn skpr(state: &mut State, x: u8) {
    let condition = state.keypad[(state.v[x as usize] & 0xF) as usize];
    skip_if(state, condition);
}

/// if !keypad[Vx] then pc += 2
pub fn skup(state: &mut State, x: u8) {
    let condition = !state.keypad[(state.v[x as usize] & 0xF) as usize];
    skip_if(state, condition);
}

/// Vx = DT
pub fn moved(state: &mut State, x: u8) {
    state.v[x as usize] = state.delay_timer;
}

/// Vx = first pressed key
/// Re-executes itself on the next cycle until a key is down
pub fn keyd(state: &mut State, x: u8) {
    match state.keypad.iter().position(|pressed| *pressed) {
        Some(key) => state.v[x as usize] = key as u8,
        None => state.pc = state.pc.wrapping_sub(2),
    }
}

/// DT = Vx
pub fn loads(state: &mut State, x: u8) {
    state.delay_timer = state.v[x as usize];
}

/// ST = Vx
pub fn ld(state: &mut State, x: u8) {
    state.sound_timer = state.v[x as usize];
}

/// I += Vx
pub fn addi(state: &mut State, x: u8) {
    state.i = state.i.wrapping_add(u16::from(state.v[x as usize]));
}

/// I = Vx * 5
/// Set I to the memory address of the font glyph for the low nibble of Vx
pub fn ldspr(state: &mut State, x: u8) {
    state.i = u16::from(state.v[x as usize] & 0xF) * GLYPH_SIZE;
}

/// mem[I..I+3] = bcd(Vx)
pub fn bcd(state: &mut State, x: u8) {
    let value = state.v[x as usize];
    let digits = [value / 100, value / 10 % 10, value % 10];
    for (offset, digit) in digits.iter().enumerate() {
        state.write(state.i.wrapping_add(offset as u16), *digit);
    }
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(state: &mut State, x: u8) {
    for register in 0..=x {
        state.write(state.i.wrapping_add(u16::from(register)), state.v[register as usize]);
    }
    if state.quirks().increments_index_on_bulk_transfer {
        state.i = state.i.wrapping_add(u16::from(x) + 1);
    }
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(state: &mut State, x: u8) {
    for register in 0..=x {
        state.v[register as usize] = state.read(state.i.wrapping_add(u16::from(register)));
    }
    if state.quirks().increments_index_on_bulk_transfer {
        state.i = state.i.wrapping_add(u16::from(x) + 1);
    }
}
