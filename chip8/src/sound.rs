use std::error::Error;

use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

use chip8x::Beep;

const SAMPLE_RATE: i32 = 44_100;
const TONE_HZ: f32 = 440.0;
const VOLUME: f32 = 0.15;

pub struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase <= 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// Buzzer backed by an SDL2 playback device.
///
/// The device must outlive the emulator, so it lives here rather than in the run loop.
pub struct SdlBeep {
    device: AudioDevice<SquareWave>,
    playing: bool,
}

impl SdlBeep {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, Box<dyn Error>> {
        let audio = sdl.audio()?;
        let desired_spec = AudioSpecDesired {
            freq: Some(SAMPLE_RATE),
            channels: Some(1),
            samples: None,
        };
        let device = audio.open_playback(None, &desired_spec, |spec| SquareWave {
            phase_inc: TONE_HZ / spec.freq as f32,
            phase: 0.0,
            volume: VOLUME,
        })?;
        Ok(SdlBeep {
            device,
            playing: false,
        })
    }
}

impl Beep for SdlBeep {
    fn play(&mut self) {
        if !self.playing {
            self.device.resume();
            self.playing = true;
        }
    }

    fn pause(&mut self) {
        if self.playing {
            self.device.pause();
            self.playing = false;
        }
    }
}
