use crate::bits::BitIndex;
use crate::error::Error;
use crate::probe::{CheckRequest, Probe};
use crate::regs::RegisterQuad;
use clap::{CommandFactory, Parser};

const ENV_DEBUG: &str = "CPUID_CHECK_DEBUG";

const EXAMPLES: &str = "\
REG: a|b|c|d selects the output EAX|EBX|ECX|EDX, anything else skips the check.
Exit status: 0 bit set or no check, 1 bit clear, 2 usage error.

CET SHSTK cpuid check example:
  # cpuid-check 7 0 0 0 c 7";

/// Query cpuid with the given input registers and optionally check that one
/// output bit is set.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help = true, after_help = EXAMPLES)]
pub struct Args {
    /// Input EAX value in hex (leaf)
    #[arg(value_name = "EAX", value_parser = parse_hex)]
    pub eax: u32,

    /// Input EBX value in hex
    #[arg(value_name = "EBX", value_parser = parse_hex, requires = "ecx", requires = "edx")]
    pub ebx: Option<u32>,

    /// Input ECX value in hex (sub-leaf)
    #[arg(value_name = "ECX", value_parser = parse_hex)]
    pub ecx: Option<u32>,

    /// Input EDX value in hex
    #[arg(value_name = "EDX", value_parser = parse_hex, requires = "ebx")]
    pub edx: Option<u32>,

    /// Output register to check: a|b|c|d
    #[arg(value_name = "REG", requires = "bit", requires = "edx")]
    pub selector: Option<char>,

    /// Decimal index of the bit to check, 0..=31
    #[arg(value_name = "BIT", value_parser = parse_bit_index, allow_negative_numbers = true)]
    pub bit: Option<BitIndex>,

    /// Enable debug logging
    #[arg(short, long, env = ENV_DEBUG, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Number of positional values supplied: 1, 4 or 6.
    pub fn positional_count(&self) -> usize {
        if self.selector.is_some() {
            6
        } else if self.ebx.is_some() {
            4
        } else {
            1
        }
    }

    pub fn input(&self) -> RegisterQuad {
        RegisterQuad::new(
            self.eax,
            self.ebx.unwrap_or_default(),
            self.ecx.unwrap_or_default(),
            self.edx.unwrap_or_default(),
        )
    }

    pub fn probe(&self) -> Probe {
        let check = match (self.selector, self.bit) {
            (Some(selector), Some(index)) => Some(CheckRequest { selector, index }),
            _ => None,
        };
        Probe {
            input: self.input(),
            positional: self.positional_count(),
            check,
        }
    }
}

/// Text to show for a rejected command line: the error followed by the usage
/// line, or the full help when no arguments were given.
pub fn usage_report(err: &clap::Error) -> String {
    let mut text = err.to_string();
    if !text.contains("Usage:") {
        text = format!("{}\n{}\n", text.trim_end(), Args::command().render_usage());
    }
    text
}

/// Parse a 32 bit hex value with an optional `0x` prefix.
pub fn parse_hex(s: &str) -> Result<u32, Error> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).map_err(|source| Error::InvalidHex {
        value: s.to_string(),
        source,
    })
}

pub fn parse_bit_index(s: &str) -> Result<BitIndex, Error> {
    let index: i64 = s.parse().map_err(|source| Error::InvalidBitIndex {
        value: s.to_string(),
        source,
    })?;
    BitIndex::new(index)
}
