use std::error::Error;
use std::str::FromStr;

use sdl2::pixels::PixelFormatEnum;

use chip8x::constants::{LORES_HEIGHT, LORES_WIDTH};
use chip8x::{FrameBuffer, RenderingMode};

type Rgb = [u8; 3];

/// Foreground and background colours for lit and unlit pixels
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    /// white on black
    Black,
    /// amber on brown
    Yellow,
    /// green on black
    Green,
}

impl ColorScheme {
    fn colors(self) -> (Rgb, Rgb) {
        match self {
            ColorScheme::Black => ([255, 255, 255], [0, 0, 0]),
            ColorScheme::Yellow => ([255, 204, 1], [154, 102, 1]),
            ColorScheme::Green => ([0, 255, 0], [0, 0, 0]),
        }
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "black" => Ok(ColorScheme::Black),
            "yellow" => Ok(ColorScheme::Yellow),
            "green" => Ok(ColorScheme::Green),
            _ => Err(format!(
                "unknown color `{}`; expected one of black, yellow, green",
                s
            )),
        }
    }
}

/// # Display
/// The screen is 64x32 pixels in low resolution mode and 128x64 in high resolution mode.
/// Either way it fills the same window; high resolution pixels are half the size.
/// The display only gets a call to `render` when the frame buffer is updated.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    scheme: ColorScheme,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `title` the window title
    /// * `scale` the size multiplier for each low resolution pixel
    /// * `scheme` the colours to draw with
    pub fn new(
        sdl: &sdl2::Sdl,
        title: &str,
        scale: u32,
        scheme: ColorScheme,
    ) -> Result<Self, Box<dyn Error>> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                title,
                LORES_WIDTH as u32 * scale,
                LORES_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()?;
        let canvas = window.into_canvas().build()?;

        Ok(Display { canvas, scheme })
    }

    /// Formats the active region of a frame buffer as an SDL2 RGB24 texture.
    ///
    /// An SDL2 texture is a 1D array of ints that represent concatenated rows of RGB pixels.
    ///
    /// This is done by:
    /// - Taking the rows and columns the rendering mode uses
    /// - Flattening them into a 1D array by concatenating the rows
    /// - Replacing each pixel with the 3 bytes of its foreground or background colour
    ///
    /// # Arguments
    /// * `frame` a frame buffer
    /// * `mode` which part of the frame buffer is in use
    /// * `scheme` the colours to draw with
    fn frame_to_sdl_texture(
        frame: &FrameBuffer,
        mode: RenderingMode,
        scheme: ColorScheme,
    ) -> Vec<u8> {
        let (width, height) = mode.resolution();
        let (on, off) = scheme.colors();
        frame[..height]
            .iter()
            .flat_map(|row| row[..width].iter())
            .flat_map(|pixel| if *pixel { on } else { off }.to_vec())
            .collect()
    }

    /// Formats the frame buffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a frame buffer
    /// * `mode` which part of the frame buffer is in use
    pub fn render(&mut self, frame: &FrameBuffer, mode: RenderingMode) -> Result<(), Box<dyn Error>> {
        let (width, height) = mode.resolution();
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator.create_texture_streaming(
            PixelFormatEnum::RGB24,
            width as u32,
            height as u32,
        )?;

        let pixels = Display::frame_to_sdl_texture(frame, mode, self.scheme);
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            for (y, row) in pixels.chunks(width * 3).enumerate() {
                buffer[y * pitch..y * pitch + row.len()].copy_from_slice(row);
            }
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chip8x::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

    #[test]
    fn test_frame_to_sdl_texture() {
        let mut frame: FrameBuffer = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        frame[0][0..2].copy_from_slice(&[false, true]);
        frame[1][0..2].copy_from_slice(&[true, false]);
        // outside the low resolution region
        frame[40][100] = true;
        let texture = Display::frame_to_sdl_texture(&frame, RenderingMode::Low, ColorScheme::Black);

        let mut expected: Vec<u8> = vec![0; 6144];
        expected[0..6].copy_from_slice(&[0, 0, 0, 255, 255, 255]);
        expected[192..198].copy_from_slice(&[255, 255, 255, 0, 0, 0]);

        assert_eq!(texture, expected);
    }

    #[test]
    fn test_frame_to_sdl_texture_high_resolution() {
        let mut frame: FrameBuffer = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        frame[63][127] = true;
        let texture = Display::frame_to_sdl_texture(&frame, RenderingMode::High, ColorScheme::Green);

        assert_eq!(texture.len(), 128 * 64 * 3);
        assert_eq!(texture[texture.len() - 3..], [0, 255, 0]);
        assert_eq!(texture[0..3], [0, 0, 0]);
    }

    #[test]
    fn test_parses_color_scheme() {
        assert_eq!("Yellow".parse::<ColorScheme>(), Ok(ColorScheme::Yellow));
        assert!("purple".parse::<ColorScheme>().is_err());
    }
}
