use std::num::ParseIntError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The value is not a hexadecimal 32 bit unsigned integer.
    #[error("invalid hex value '{value}': {source}")]
    InvalidHex {
        value: String,
        #[source]
        source: ParseIntError,
    },
    /// The bit index is not a decimal integer.
    #[error("invalid bit index '{value}': {source}")]
    InvalidBitIndex {
        value: String,
        #[source]
        source: ParseIntError,
    },
    /// The bit index does not address a bit of a 32 bit register.
    #[error("bit index {0} out of range, expected 0..=31")]
    BitIndexOutOfRange(i64),
}

/// Process exit status, the interface scripts rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The requested bit is set, or no check was requested.
    Pass,
    /// The requested bit is clear.
    Fail,
    /// Wrong argument count or malformed argument.
    Usage,
}

impl ExitStatus {
    pub const fn as_u8(self) -> u8 {
        match self {
            ExitStatus::Pass => 0,
            ExitStatus::Fail => 1,
            ExitStatus::Usage => 2,
        }
    }
}

impl From<ExitStatus> for u8 {
    fn from(status: ExitStatus) -> u8 {
        status.as_u8()
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status.as_u8())
    }
}
