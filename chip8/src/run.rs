use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use log::{error, info};
use sdl2::event::Event;
use sdl2::keyboard::Scancode;

use chip8x::{Chip8, Config, TICK_DURATION};
use display::{ColorScheme, Display};

use crate::keymap::{keymap, CONTROLS};
use crate::sound::SdlBeep;

/// Runs a program until the window is closed or the machine faults.
///
/// # Arguments
/// * `rom` path to a raw program image
/// * `config` the variant and speed to run it with
/// * `scheme` colours for the display
/// * `scale` window pixels per low resolution pixel
pub fn run(
    rom: &Path,
    config: Config,
    scheme: ColorScheme,
    scale: u32,
) -> Result<(), Box<dyn Error>> {
    // Get SDL2 context
    let sdl = sdl2::init()?;
    let title = format!("chip8 - {}", config.variant);
    let mut display = Display::new(&sdl, &title, scale, scheme)?;
    let mut events = sdl.event_pump()?;
    let beep = SdlBeep::new(&sdl)?;

    let mut chip8 = Chip8::new(config, beep);

    // Load ROM
    let file = File::open(rom)?;
    let mut reader = BufReader::new(file);
    chip8.load_rom(&mut reader)?;
    info!("running {}", rom.display());
    println!("{}", CONTROLS);

    let mut last_tick = Instant::now();

    // Whether or not the default tick rate should be respected
    let mut fast_forward = false;
    // Whether the machine's state should be ticked forwards or backwards
    let mut rewind = false;

    'event: loop {
        // If the frame buffer changed, render it and mark it drawn
        if let Some(frame) = chip8.frame() {
            display.render(frame, chip8.rendering_mode())?;
            chip8.acknowledge_frame();
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    scancode: Some(key),
                    ..
                } => match (key, keymap(key)) {
                    (_, Some(k)) => chip8.key_press(k),
                    (Scancode::Space, _) => fast_forward = true,
                    (Scancode::Escape, _) => rewind = true,
                    _ => continue,
                },
                Event::KeyUp {
                    scancode: Some(key),
                    ..
                } => match (key, keymap(key)) {
                    (_, Some(k)) => chip8.key_release(k),
                    (Scancode::Space, _) => fast_forward = false,
                    (Scancode::Escape, _) => rewind = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        if rewind {
            chip8.rewind();
        } else if let Err(e) = chip8.tick() {
            error!("stopping: {}", e);
            break 'event;
        }

        // Handle timing
        let elapsed = last_tick.elapsed();
        if !fast_forward && TICK_DURATION > elapsed {
            std::thread::sleep(TICK_DURATION - elapsed);
        }
        last_tick = Instant::now();
    }

    Ok(())
}
