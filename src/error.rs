use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop the interpreter from making progress.
///
/// None of these are fatal to the host; the driving loop decides whether to halt, skip or log.
/// `address` is always the location of the offending instruction.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown opcode {opcode:#06X} at {address:#05X}")]
    UnknownOpcode { opcode: u16, address: u16 },
    #[error("return with an empty stack at {address:#05X}")]
    StackUnderflow { address: u16 },
    #[error("call with a full stack at {address:#05X}")]
    StackOverflow { address: u16 },
    #[error("unable to read program: {0}")]
    Io(#[from] std::io::Error),
}
