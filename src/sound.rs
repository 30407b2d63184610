/// Something that can make the buzzer noise.
///
/// Called once per tick; implementations must return promptly and own any device I/O themselves.
pub trait Beep {
    fn play(&mut self);
    fn pause(&mut self);
}

/// A beeper that makes no noise
#[derive(Default)]
pub struct Mute;

impl Beep for Mute {
    fn play(&mut self) {}

    fn pause(&mut self) {}
}
