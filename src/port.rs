//! I/O expander ports
//!
//! The reed switches are wired to a 16-bit GPIO expander (MCP23017 style),
//! which splits its lines into two 8-pin banks.

const PORT_NAME_A: &str = "a";
const PORT_NAME_B: &str = "b";

const PORT_ID_A: u8 = 0;
const PORT_ID_B: u8 = 1;

/// Expander bank a glass's reed switch is connected to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Port {
    #[default]
    A = PORT_ID_A,
    B = PORT_ID_B,
}

impl Port {
    /// Every port, in raw id order
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// Parse a port from its raw id
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            PORT_ID_A => Some(Self::A),
            PORT_ID_B => Some(Self::B),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Parse a port from its name, ignoring case
    pub fn parse_from_str(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case(PORT_NAME_A) {
            Some(Self::A)
        } else if name.eq_ignore_ascii_case(PORT_NAME_B) {
            Some(Self::B)
        } else {
            None
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => PORT_NAME_A,
            Self::B => PORT_NAME_B,
        }
    }
}
