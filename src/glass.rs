//! Glass record
//!
//! One physical glass on the board: the reed switch that detects it, the
//! expander port that switch hangs off, whether the glass is currently
//! present and the color its LED should show.
//!
//! The record does no sensing and talks to no hardware. Callers own
//! validation of pins, ports and color ranges.

use crate::color::{Colors, Rgb};
use crate::port::Port;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Glass {
    /// Expander pin wired to the reed switch of this glass
    reed_pin: u8,
    /// Expander port the reed switch is connected to
    port: Port,
    /// Glass is on the board (true) or removed (false)
    glass_status: bool,
    colors: Colors,
}

impl Glass {
    pub const fn new(reed_pin: u8, port: Port, glass_status: bool, colors: Colors) -> Self {
        Self {
            reed_pin,
            port,
            glass_status,
            colors,
        }
    }

    pub const fn set_reed_pin(&mut self, reed_pin: u8) {
        self.reed_pin = reed_pin;
    }

    pub const fn set_port(&mut self, port: Port) {
        self.port = port;
    }

    pub const fn set_glass_status(&mut self, glass_status: bool) {
        self.glass_status = glass_status;
    }

    /// Replace all three color channels in one call
    pub const fn set_colors(&mut self, red: i32, green: i32, blue: i32) {
        self.colors.set(red, green, blue);
    }

    pub const fn reed_pin(&self) -> u8 {
        self.reed_pin
    }

    pub const fn port(&self) -> Port {
        self.port
    }

    pub const fn glass_status(&self) -> bool {
        self.glass_status
    }

    pub const fn colors(&self) -> Colors {
        self.colors
    }

    /// Color the LED of this glass should be driven with
    pub const fn led_color(&self) -> Rgb {
        self.colors.to_rgb()
    }
}
