#![no_std]

pub mod board;
pub mod color;
pub mod glass;
pub mod port;
pub mod update;

pub use board::{Board, BoardConfig, BoardFull, GlassWiring};
pub use glass::Glass;
pub use port::Port;
pub use update::{
    GlassChange, GlassUpdate, QueueFull, UnknownGlass, UpdateProcessor, UpdateQueue,
    UpdateReceiver, UpdateReport, UpdateSender, apply_update,
};

pub use color::{Colors, Rgb};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// [`Board::present`] is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
