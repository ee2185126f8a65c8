use crate::bits::{BitIndex, binary_string, check_bit};
use crate::cpuid::Cpuid;
use crate::error::ExitStatus;
use crate::regs::{Register, RegisterQuad};
use std::io::{self, Write};

/// A requested check of one output bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckRequest {
    /// Register selector as given; only `a` to `d` select a register.
    pub selector: char,
    pub index: BitIndex,
}

/// One run of the tool: the input registers and an optional bit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub input: RegisterQuad,
    /// Number of positional arguments the run was invoked with.
    pub positional: usize,
    pub check: Option<CheckRequest>,
}

impl Probe {
    pub fn new(input: RegisterQuad) -> Self {
        Self {
            input,
            positional: 4,
            check: None,
        }
    }

    pub fn with_check(mut self, selector: char, index: BitIndex) -> Self {
        self.positional = 6;
        self.check = Some(CheckRequest { selector, index });
        self
    }
}

/// Query `cpu` once and write the report to `out`.
///
/// Returns [`ExitStatus::Fail`] only if a recognized register was selected
/// and its bit is clear.
pub fn run<C: Cpuid, W: Write>(probe: &Probe, cpu: &C, out: &mut W) -> io::Result<ExitStatus> {
    match probe.positional {
        1 => writeln!(out, "Just get eax={}", probe.input.eax)?,
        n => writeln!(out, "{} parameters, eax={}", n, probe.input.eax)?,
    }
    writeln!(out, "cpuid({})", probe.input)?;

    log::debug!("cpuid input: {}", probe.input);
    let output = cpu.query(probe.input);
    log::debug!("cpuid output: {}", output);

    writeln!(out, "After native_cpuid:")?;
    writeln!(
        out,
        "out:  eax={:08x}, ebx={:08x}, ecx={:08x},  edx={:08x}",
        output.eax, output.ebx, output.ecx, output.edx
    )?;
    writeln!(out, "output:")?;
    for (reg, value) in output.iter() {
        writeln!(out, "  {}={:08x}    || Binary: {}", reg, value, binary_string(value))?;
    }

    let status = match probe.check {
        Some(check) => {
            writeln!(out, "Now check cpuid e{}x, bit {}", check.selector, check.index)?;
            run_check(&output, check, out)?
        }
        None => {
            writeln!(out, "No check requested, skip.")?;
            ExitStatus::Pass
        }
    };

    writeln!(out, "Done! Return:{}.", status.as_u8())?;
    writeln!(out)?;
    Ok(status)
}

fn run_check<W: Write>(output: &RegisterQuad, check: CheckRequest, out: &mut W) -> io::Result<ExitStatus> {
    let Some(reg) = Register::from_selector(check.selector) else {
        log::warn!("unrecognized register selector '{}'", check.selector);
        writeln!(out, "No check point, not in a-d, skip.")?;
        return Ok(ExitStatus::Pass);
    };

    let result = check_bit(output.get(reg), check.index);
    log::debug!("{} bit {}: {}", reg, check.index, result.bit);
    writeln!(out, "Start with 0, pass: bit set 1, fail: bit set 0")?;
    writeln!(out, "{}", result)?;

    Ok(if result.passed() {
        ExitStatus::Pass
    } else {
        ExitStatus::Fail
    })
}
