//! Board of glasses
//!
//! Fixed-capacity collection of [`Glass`] records. A glass keeps the index it
//! was inserted at for the lifetime of the board, so the index doubles as its
//! position on the display and its LED address in a frame.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Vec;

use crate::OutputDriver;
use crate::color::{Colors, Rgb};
use crate::glass::Glass;
use crate::port::Port;

/// Static identity of a glass: where its reed switch is wired
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GlassWiring {
    pub reed_pin: u8,
    pub port: Port,
}

impl GlassWiring {
    pub const fn new(port: Port, reed_pin: u8) -> Self {
        Self { reed_pin, port }
    }
}

/// Layout of a board and the state every glass starts with
#[derive(Debug, Clone, Copy)]
pub struct BoardConfig<'a> {
    /// One entry per glass, in display order
    pub wiring: &'a [GlassWiring],
    pub colors: Colors,
    pub glass_status: bool,
}

/// Error returned when pushing to a full board.
///
/// Carries the rejected glass back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFull(pub Glass);

/// Glasses indexed by position
///
/// N is the maximum number of glasses on the board
#[derive(Debug, Clone, Default)]
pub struct Board<const N: usize> {
    glasses: Vec<Glass, N>,
}

impl<const N: usize> Board<N> {
    pub const fn new() -> Self {
        Self {
            glasses: Vec::new(),
        }
    }

    /// Build a board with one glass per wiring entry
    ///
    /// Glass `i` is wired as `config.wiring[i]`.
    pub fn from_config(config: &BoardConfig<'_>) -> Result<Self, BoardFull> {
        let mut board = Self::new();
        for wiring in config.wiring {
            board.push(Glass::new(
                wiring.reed_pin,
                wiring.port,
                config.glass_status,
                config.colors,
            ))?;
        }
        Ok(board)
    }

    /// Append a glass
    ///
    /// Returns the index of the new glass, or the glass if the board is full
    pub fn push(&mut self, glass: Glass) -> Result<usize, BoardFull> {
        let index = self.glasses.len();
        self.glasses.push(glass).map_err(|glass| {
            #[cfg(feature = "esp32-log")]
            println!("[board] full, dropping glass on pin {}", glass.reed_pin());
            BoardFull(glass)
        })?;
        Ok(index)
    }

    pub fn get(&self, index: usize) -> Option<&Glass> {
        self.glasses.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Glass> {
        self.glasses.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.glasses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glasses.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Glass> {
        self.glasses.iter()
    }

    /// Find the glass wired to an expander line
    pub fn position_of(&self, port: Port, reed_pin: u8) -> Option<usize> {
        self.glasses
            .iter()
            .position(|glass| glass.port() == port && glass.reed_pin() == reed_pin)
    }

    /// Number of glasses currently on the board
    pub fn present_count(&self) -> usize {
        self.glasses
            .iter()
            .filter(|glass| glass.glass_status())
            .count()
    }

    /// Set the same colors on every glass
    pub fn fill_colors(&mut self, colors: Colors) {
        for glass in &mut self.glasses {
            glass.set_colors(colors.red, colors.green, colors.blue);
        }
    }

    /// Write the LED color of each glass into the frame
    ///
    /// Glass `i` lands in `frame[i]`. Returns the number of LEDs written,
    /// which is the shorter of the board and the frame.
    pub fn render(&self, frame: &mut [Rgb]) -> usize {
        let mut written = 0;
        for (led, glass) in frame.iter_mut().zip(self.glasses.iter()) {
            *led = glass.led_color();
            written += 1;
        }
        written
    }

    /// Render the board and hand the frame to a driver
    pub fn present<D: OutputDriver>(&self, driver: &mut D, frame: &mut [Rgb]) {
        let written = self.render(frame);
        driver.write(&frame[..written]);
    }
}

impl<'a, const N: usize> IntoIterator for &'a Board<N> {
    type Item = &'a Glass;
    type IntoIter = core::slice::Iter<'a, Glass>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
