use crate::error::Error;
use core::fmt;

/// Width of a register in bits.
pub const REG_BITS: u32 = u32::BITS;

/// Index of a register bit, guaranteed to be within `0..REG_BITS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BitIndex(u8);

impl BitIndex {
    pub fn new(index: i64) -> Result<Self, Error> {
        if (0..REG_BITS as i64).contains(&index) {
            Ok(Self(index as u8))
        } else {
            Err(Error::BitIndexOutOfRange(index))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Position of the bit within the most-significant-first digit sequence
    /// produced by [`binary_string`].
    pub const fn position(self) -> u8 {
        (REG_BITS - 1) as u8 - self.0
    }
}

impl fmt::Display for BitIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Render `value` as 32 binary digits, most significant first, in nibble
/// groups separated by a single space.
pub fn binary_string(value: u32) -> String {
    let mut out = String::with_capacity(REG_BITS as usize + 7);
    for i in (0..REG_BITS).rev() {
        out.push(if (value >> i) & 1 == 1 { '1' } else { '0' });
        if i % 4 == 0 && i != 0 {
            out.push(' ');
        }
    }
    out
}

/// Outcome of checking a single bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitCheck {
    pub position: u8,
    pub index: BitIndex,
    pub bit: u8,
}

impl BitCheck {
    pub const fn passed(&self) -> bool {
        self.bit == 1
    }
}

impl fmt::Display for BitCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order bit:{}, invert order:{}, bit:{}, {}!",
            self.position,
            self.index,
            self.bit,
            if self.passed() { "pass" } else { "fail" }
        )
    }
}

pub fn check_bit(value: u32, index: BitIndex) -> BitCheck {
    let position = index.position();
    BitCheck {
        position,
        index,
        bit: ((value >> index.get()) & 1) as u8,
    }
}
