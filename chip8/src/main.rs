use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use chip8x::constants::INSTRUCTIONS_PER_FRAME;
use chip8x::{Config, Variant};
use display::ColorScheme;

mod keymap;
mod run;
mod sound;

/// Play CHIP-8, SUPER-CHIP and XO-CHIP programs
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the program image
    #[arg(long)]
    rom: PathBuf,

    /// Which machine to emulate: original, super or xo
    #[arg(long, default_value = "original")]
    spec: Variant,

    /// Multiplier on instructions per frame
    #[arg(long, default_value_t = 1)]
    speed: usize,

    /// Instructions per frame at speed 1
    #[arg(long, default_value_t = INSTRUCTIONS_PER_FRAME)]
    ipf: usize,

    /// Colour scheme: black, yellow or green
    #[arg(long, default_value = "green")]
    color: ColorScheme,

    /// Window pixels per low resolution pixel
    #[arg(long, default_value_t = 10)]
    scale: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = Config {
        variant: args.spec,
        instructions_per_frame: args.ipf,
        speed: args.speed,
    };
    run::run(&args.rom, config, args.color, args.scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["chip8", "--rom", "pong.ch8"]);
        assert_eq!(args.spec, Variant::Chip8);
        assert_eq!(args.speed, 1);
        assert_eq!(args.ipf, 10);
        assert_eq!(args.color, ColorScheme::Green);
        assert_eq!(args.scale, 10);
    }

    #[test]
    fn test_args_variant() {
        let args = Args::parse_from(["chip8", "--rom", "a.ch8", "--spec", "xo", "--color", "yellow"]);
        assert_eq!(args.spec, Variant::XoChip);
        assert_eq!(args.color, ColorScheme::Yellow);
    }

    #[test]
    fn test_args_require_rom() {
        assert!(Args::try_parse_from(["chip8"]).is_err());
    }
}
