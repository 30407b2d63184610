use std::collections::VecDeque;
use std::io::Read;

use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::constants::{
    INSTRUCTIONS_PER_FRAME, MAX_PROGRAM_SIZE, MAX_SAVED_STATES, MEMORY_SIZE, PROGRAM_START,
};
use crate::error::Result;
use crate::instruction::{Flow, Instruction};
use crate::opcode;
use crate::sound::Beep;
use crate::state::{FrameBuffer, RenderingMode, State};
use crate::variant::Variant;

/// Settings chosen by whoever drives the machine
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub variant: Variant,
    /// Instructions run per tick at a speed of 1
    pub instructions_per_frame: usize,
    /// Multiplies `instructions_per_frame`
    pub speed: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            variant: Variant::default(),
            instructions_per_frame: INSTRUCTIONS_PER_FRAME,
            speed: 1,
        }
    }
}

/// # Chip-8
/// A CHIP-8, SUPER-CHIP or XO-CHIP virtual machine.
///
/// Tracks:
///  - current `state`
///  - `previous_states` for rewinding, one per tick
///  - the `beep` to drive from the sound timer
///  - the `rng` consumed by CXKK
///
/// Supplies interfaces for:
/// - loading and clearing programs
/// - pressing and releasing keys
/// - ticking the machine forwards and rewinding it
/// - inspecting its frame buffer for rendering by some display
///
/// Nothing here keeps time; call `tick` 60 times a second.
pub struct Chip8 {
    state: State,
    previous_states: VecDeque<State>,
    config: Config,
    beep: Box<dyn Beep>,
    rng: Box<dyn RngCore>,
}

impl Chip8 {
    pub fn new(config: Config, beep: impl Beep + 'static) -> Self {
        Self::with_rng(config, beep, StdRng::from_entropy())
    }

    /// Builds a machine whose CXKK results come from `rng`
    pub fn with_rng(
        config: Config,
        beep: impl Beep + 'static,
        rng: impl RngCore + 'static,
    ) -> Self {
        Chip8 {
            state: State::new(config.variant),
            previous_states: VecDeque::with_capacity(MAX_SAVED_STATES),
            config,
            beep: Box::new(beep),
            rng: Box::new(rng),
        }
    }

    /// Load a program from a source file
    ///
    /// The source is read before memory is touched, so a failed read leaves the machine as it was.
    /// At most `MAX_PROGRAM_SIZE` bytes are loaded; reading stops one byte past that.
    ///
    /// # Arguments
    /// * `reader` a reader that yields a raw program image
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut rom = Vec::with_capacity(MAX_PROGRAM_SIZE + 1);
        Read::take(&mut *reader, MAX_PROGRAM_SIZE as u64 + 1).read_to_end(&mut rom)?;

        if rom.len() > MAX_PROGRAM_SIZE {
            warn!(
                "program is over {} bytes; the rest will not be loaded",
                MAX_PROGRAM_SIZE
            );
            rom.truncate(MAX_PROGRAM_SIZE);
        }

        let start = PROGRAM_START as usize;
        self.state.memory[start..start + rom.len()].copy_from_slice(&rom);
        info!("loaded {} byte program for {}", rom.len(), self.config.variant);
        Ok(())
    }

    /// Zero everything from the program start to the end of memory.
    /// Registers, timers and the frame buffer are left alone.
    pub fn clear_program(&mut self) {
        for byte in self.state.memory[PROGRAM_START as usize..MEMORY_SIZE].iter_mut() {
            *byte = 0;
        }
    }

    /// Emulates 1/60th of a second
    /// - decrements the delay timer
    /// - plays or pauses the beep and decrements the sound timer
    /// - runs `instructions_per_frame * speed` instructions, stopping early at a halt
    pub fn tick(&mut self) -> Result<Flow> {
        self.save_state();

        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }

        if self.state.sound_timer > 0 {
            self.beep.play();
            self.state.sound_timer -= 1;
        } else {
            self.beep.pause();
        }

        let cycles = self
            .config
            .instructions_per_frame
            .saturating_mul(self.config.speed);
        for _ in 0..cycles {
            if self.step()? == Flow::Halt {
                debug!("halted at {:04X}", self.state.pc.wrapping_sub(2));
                return Ok(Flow::Halt);
            }
        }
        Ok(Flow::Continue)
    }

    /// Fetches, decodes and executes a single instruction
    pub fn step(&mut self) -> Result<Flow> {
        let address = self.state.pc;
        let op = self.get_op();
        self.state.pc = self.state.pc.wrapping_add(2);

        let instruction = Instruction::decode(op, address)?;
        trace!(
            "{:04X} {:04X} {:?} v{:02X?} i{:04X}",
            address,
            op,
            instruction,
            self.state.v,
            self.state.i
        );
        instruction.execute(&mut self.state, self.rng.as_mut())
    }

    /// Restores the state from before the most recent tick, if there is one.
    /// The keypad is left as it is now.
    pub fn rewind(&mut self) -> bool {
        match self.previous_states.pop_front() {
            Some(state) => {
                let keypad = self.state.keypad;
                self.state = state;
                self.state.keypad = keypad;
                self.state.draw_flag = true;
                true
            }
            None => false,
        }
    }

    /// Returns the FrameBuffer if the display should be redrawn
    pub fn frame(&self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Marks the current frame as drawn
    pub fn acknowledge_frame(&mut self) {
        self.state.draw_flag = false;
    }

    pub fn rendering_mode(&self) -> RenderingMode {
        self.state.rendering_mode
    }

    /// Width and height of the part of the frame buffer in use
    pub fn resolution(&self) -> (usize, usize) {
        self.state.resolution()
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the keypad index 0..F; higher bits are ignored
    pub fn key_press(&mut self, key: u8) {
        self.state.keypad[(key & 0xF) as usize] = true;
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the keypad index 0..F; higher bits are ignored
    pub fn key_release(&mut self, key: u8) {
        self.state.keypad[(key & 0xF) as usize] = false;
    }

    pub fn keypad_mut(&mut self) -> &mut [bool; 16] {
        &mut self.state.keypad
    }

    /// Changes the speed multiplier for subsequent ticks
    pub fn set_speed(&mut self, speed: usize) {
        self.config.speed = speed;
    }

    pub fn state(&self) -> &State {
        &self.state
    }


    /// Puts the current state in previous_states
    /// - if there are already MAX_SAVED_STATES saved then the oldest is dropped
    fn save_state(&mut self) {
        if self.previous_states.len() == MAX_SAVED_STATES {
            self.previous_states.pop_back();
        }
        self.previous_states.push_front(self.state);
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> u16 {
        let pc = self.state.pc;
        opcode::from_bytes(self.state.read(pc), self.state.read(pc.wrapping_add(1)))
    }
}
