use log::debug;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::state::{RenderingMode, State};

/// Columns moved by the horizontal scroll instructions
const HORIZONTAL_SCROLL: usize = 4;

/// Turns every pixel off
pub fn clear(state: &mut State) {
    state.frame_buffer = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    state.draw_flag = true;
}

/// Switches the active region of the frame buffer without touching its contents
pub fn set_mode(state: &mut State, mode: RenderingMode) {
    debug!("switching to {:?} resolution", mode);
    state.rendering_mode = mode;
    state.draw_flag = true;
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n onto the FrameBuffer at position Vx, Vy.
///
/// The starting position always wraps into the active region. Pixels that run past its
/// right or bottom edge are either dropped or wrapped depending on `clips_at_edge`.
/// VF is set if any lit pixel was turned off.
pub fn draw(state: &mut State, x: u8, y: u8, n: u8) {
    let (width, height) = state.resolution();
    let clips = state.quirks().clips_at_edge;
    let origin_x = state.v[x as usize] as usize % width;
    let origin_y = state.v[y as usize] as usize % height;
    let mut collided = false;

    for row in 0..n as usize {
        let mut py = origin_y + row;
        if py >= height {
            if clips {
                break;
            }
            py %= height;
        }

        let sprite = state.read(state.i.wrapping_add(row as u16));
        for bit in 0..8 {
            let mut px = origin_x + bit;
            if px >= width {
                if clips {
                    break;
                }
                px %= width;
            }

            if (sprite >> (7 - bit)) & 1 == 1 {
                let pixel = &mut state.frame_buffer[py][px];
                collided |= *pixel;
                *pixel = !*pixel;
            }
        }
    }

    state.v[0xF] = collided as u8;
    state.draw_flag = true;
}

/// Moves every lit pixel down by n rows; pixels pushed past the bottom are lost
pub fn scroll_down(state: &mut State, n: u8) {
    let (width, height) = state.resolution();
    let n = n as usize;
    // bottom to top so a moved pixel is never visited twice
    for y in (0..height).rev() {
        for x in 0..width {
            if state.frame_buffer[y][x] {
                state.frame_buffer[y][x] = false;
                if y + n < height {
                    state.frame_buffer[y + n][x] = true;
                }
            }
        }
    }
    state.draw_flag = true;
}

/// Moves every lit pixel right by four columns; pixels pushed past the edge are lost
pub fn scroll_right(state: &mut State) {
    let (width, height) = state.resolution();
    for row in state.frame_buffer[..height].iter_mut() {
        for x in (0..width).rev() {
            if row[x] {
                row[x] = false;
                if x + HORIZONTAL_SCROLL < width {
                    row[x + HORIZONTAL_SCROLL] = true;
                }
            }
        }
    }
    state.draw_flag = true;
}

/// Moves every lit pixel left by four columns; pixels pushed past the edge are lost
pub fn scroll_left(state: &mut State) {
    let (width, height) = state.resolution();
    for row in state.frame_buffer[..height].iter_mut() {
        for x in 0..width {
            if row[x] {
                row[x] = false;
                if x >= HORIZONTAL_SCROLL {
                    row[x - HORIZONTAL_SCROLL] = true;
                }
            }
        }
    }
    state.draw_flag = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Variant;

    fn lit(state: &State) -> Vec<(usize, usize)> {
        let mut pixels = Vec::new();
        for (y, row) in state.frame_buffer.iter().enumerate() {
            for (x, pixel) in row.iter().enumerate() {
                if *pixel {
                    pixels.push((x, y));
                }
            }
        }
        pixels
    }

    #[test]
    fn test_clear() {
        let mut state = State::new(Variant::Chip8);
        state.frame_buffer[10][100] = true;
        clear(&mut state);
        assert!(lit(&state).is_empty());
        assert!(state.draw_flag);
    }

    #[test]
    fn test_set_mode_keeps_pixels() {
        let mut state = State::new(Variant::SuperChip);
        state.frame_buffer[1][1] = true;
        set_mode(&mut state, RenderingMode::High);
        assert_eq!(state.rendering_mode, RenderingMode::High);
        assert_eq!(lit(&state), vec![(1, 1)]);
        assert!(state.draw_flag);
    }

    #[test]
    fn test_draw_glyph() {
        let mut state = State::new(Variant::Chip8);
        state.v[0x0] = 0x1;
        // the 0 glyph with a 1x 1y offset
        draw(&mut state, 0x0, 0x0, 5);
        assert_eq!(state.frame_buffer[1][1..5], [true, true, true, true]);
        assert_eq!(state.frame_buffer[2][1..5], [true, false, false, true]);
        assert_eq!(state.frame_buffer[3][1..5], [true, false, false, true]);
        assert_eq!(state.frame_buffer[4][1..5], [true, false, false, true]);
        assert_eq!(state.frame_buffer[5][1..5], [true, true, true, true]);
        assert_eq!(lit(&state).len(), 14);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_draw_twice_collides_and_erases() {
        let mut state = State::new(Variant::Chip8);
        state.i = 0x300;
        state.memory[0x300] = 0xFF;
        state.v[0x1] = 10;
        state.v[0x2] = 5;
        draw(&mut state, 0x1, 0x2, 1);
        assert_eq!(state.v[0xF], 0x0);
        assert_eq!(lit(&state).len(), 8);
        draw(&mut state, 0x1, 0x2, 1);
        assert_eq!(state.v[0xF], 0x1);
        assert!(lit(&state).is_empty());
    }

    #[test]
    fn test_draw_collision_not_reset_by_later_pixels() {
        let mut state = State::new(Variant::Chip8);
        state.i = 0x300;
        state.memory[0x300] = 0xC0;
        state.frame_buffer[0][0] = true;
        draw(&mut state, 0x0, 0x0, 1);
        assert_eq!(state.v[0xF], 0x1);
        assert_eq!(lit(&state), vec![(1, 0)]);
    }

    #[test]
    fn test_draw_xors() {
        let mut state = State::new(Variant::Chip8);
        state.frame_buffer[0][2..6].copy_from_slice(&[false, true, false, true]);
        state.v[0x0] = 2;
        state.i = 0x300;
        state.memory[0x300] = 0xC0;
        draw(&mut state, 0x0, 0x1, 1);
        assert_eq!(state.frame_buffer[0][2..6], [true, false, false, true]);
    }

    #[test]
    fn test_draw_clips_at_edge() {
        let mut state = State::new(Variant::SuperChip);
        state.i = 0x300;
        state.memory[0x300..0x302].copy_from_slice(&[0xFF, 0xFF]);
        state.v[0x0] = 60;
        state.v[0x1] = 31;
        draw(&mut state, 0x0, 0x1, 2);
        assert_eq!(lit(&state), vec![(60, 31), (61, 31), (62, 31), (63, 31)]);
    }

    #[test]
    fn test_draw_wraps_at_edge() {
        let mut state = State::new(Variant::XoChip);
        state.i = 0x300;
        state.memory[0x300..0x302].copy_from_slice(&[0x81, 0x00]);
        state.v[0x0] = 60;
        state.v[0x1] = 31;
        draw(&mut state, 0x0, 0x1, 1);
        // bit 0 lands on x=60, bit 7 wraps to x=3
        assert_eq!(lit(&state), vec![(3, 31), (60, 31)]);
    }

    #[test]
    fn test_draw_wraps_origin() {
        let mut state = State::new(Variant::Chip8);
        state.i = 0x300;
        state.memory[0x300] = 0x80;
        state.v[0x0] = 64 + 3;
        state.v[0x1] = 32 + 2;
        draw(&mut state, 0x0, 0x1, 1);
        assert_eq!(lit(&state), vec![(3, 2)]);
    }

    #[test]
    fn test_draw_uses_high_resolution() {
        let mut state = State::new(Variant::SuperChip);
        state.rendering_mode = RenderingMode::High;
        state.i = 0x300;
        state.memory[0x300] = 0x80;
        state.v[0x0] = 100;
        state.v[0x1] = 50;
        draw(&mut state, 0x0, 0x1, 1);
        assert_eq!(lit(&state), vec![(100, 50)]);
    }

    #[test]
    fn test_scroll_down() {
        let mut state = State::new(Variant::SuperChip);
        state.frame_buffer[3][7] = true;
        state.frame_buffer[5][7] = true;
        scroll_down(&mut state, 2);
        assert_eq!(lit(&state), vec![(7, 5), (7, 7)]);
        assert!(state.draw_flag);
    }

    #[test]
    fn test_scroll_down_drops_instead_of_wrapping() {
        let mut state = State::new(Variant::SuperChip);
        state.frame_buffer[30][0] = true;
        scroll_down(&mut state, 4);
        assert!(lit(&state).is_empty());
    }

    #[test]
    fn test_scroll_right() {
        let mut state = State::new(Variant::SuperChip);
        state.frame_buffer[0][0] = true;
        state.frame_buffer[0][4] = true;
        state.frame_buffer[1][62] = true;
        scroll_right(&mut state);
        assert_eq!(lit(&state), vec![(4, 0), (8, 0)]);
    }

    #[test]
    fn test_scroll_left() {
        let mut state = State::new(Variant::SuperChip);
        state.frame_buffer[0][2] = true;
        state.frame_buffer[0][4] = true;
        state.frame_buffer[0][8] = true;
        scroll_left(&mut state);
        assert_eq!(lit(&state), vec![(0, 0), (4, 0)]);
    }

    #[test]
    fn test_scroll_right_high_resolution() {
        let mut state = State::new(Variant::SuperChip);
        state.rendering_mode = RenderingMode::High;
        state.frame_buffer[40][100] = true;
        scroll_right(&mut state);
        assert_eq!(lit(&state), vec![(104, 40)]);
    }
}
