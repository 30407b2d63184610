use sdl2::keyboard::Scancode;

/// Controls printed on startup.
pub const CONTROLS: &str = "\
keypad      keyboard
|1|2|3|C|   |1|2|3|4|
|4|5|6|D|   |Q|W|E|R|
|7|8|9|E|   |A|S|D|F|
|A|0|B|F|   |Z|X|C|V|

hold Escape to rewind, hold Space to fast forward";

/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// This original layout is mapped to the left 4 alphanumeric columns.
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
/// Scancodes are positional, so the layout holds on non-QWERTY keyboards too.
pub fn keymap(key: Scancode) -> Option<u8> {
    match key {
        Scancode::X => Some(0x0),
        Scancode::Num1 => Some(0x1),
        Scancode::Num2 => Some(0x2),
        Scancode::Num3 => Some(0x3),
        Scancode::Q => Some(0x4),
        Scancode::W => Some(0x5),
        Scancode::E => Some(0x6),
        Scancode::A => Some(0x7),
        Scancode::S => Some(0x8),
        Scancode::D => Some(0x9),
        Scancode::Z => Some(0xA),
        Scancode::C => Some(0xB),
        Scancode::Num4 => Some(0xC),
        Scancode::R => Some(0xD),
        Scancode::F => Some(0xE),
        Scancode::V => Some(0xF),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap_covers_keypad() {
        let keys = [
            Scancode::X,
            Scancode::Num1,
            Scancode::Num2,
            Scancode::Num3,
            Scancode::Q,
            Scancode::W,
            Scancode::E,
            Scancode::A,
            Scancode::S,
            Scancode::D,
            Scancode::Z,
            Scancode::C,
            Scancode::Num4,
            Scancode::R,
            Scancode::F,
            Scancode::V,
        ];
        for (expected, key) in keys.iter().enumerate() {
            assert_eq!(keymap(*key), Some(expected as u8));
        }
    }

    #[test]
    fn test_keymap_ignores_controls() {
        assert_eq!(keymap(Scancode::Escape), None);
        assert_eq!(keymap(Scancode::Space), None);
    }
}
