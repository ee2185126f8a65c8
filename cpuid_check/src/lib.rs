//! Issue a single `cpuid` query and check one bit of its output.
//!
//! Queries go through the [`cpuid::Cpuid`] trait. [`cpuid::NativeCpuid`] runs the
//! instruction on x86 and x86_64. [`cpuid::TableCpuid`] answers from a fixed
//! table on any target and backs the tests of the report logic.

pub mod bits;
pub mod cli;
pub mod cpuid;
pub mod error;
pub mod probe;
pub mod regs;

pub use crate::error::{Error, ExitStatus};
pub use crate::regs::{Register, RegisterQuad};
