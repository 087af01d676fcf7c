mod colors;

pub use colors::Colors;
use smart_leds::RGB8;

pub type Rgb = RGB8;
