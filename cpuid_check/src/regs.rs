use core::fmt;

/// The four general purpose registers exchanged with `cpuid`.
///
/// EAX selects the leaf and ECX the sub-leaf. EBX and EDX are carried along
/// as given but do not influence the instruction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RegisterQuad {
    pub eax: u32,
    pub ebx: u32,
    pub ecx: u32,
    pub edx: u32,
}

impl RegisterQuad {
    pub const fn new(eax: u32, ebx: u32, ecx: u32, edx: u32) -> Self {
        Self { eax, ebx, ecx, edx }
    }

    pub const fn get(&self, reg: Register) -> u32 {
        match reg {
            Register::Eax => self.eax,
            Register::Ebx => self.ebx,
            Register::Ecx => self.ecx,
            Register::Edx => self.edx,
        }
    }

    /// Registers paired with their values, in architectural order.
    pub fn iter(&self) -> impl Iterator<Item = (Register, u32)> + '_ {
        Register::ALL.into_iter().map(|reg| (reg, self.get(reg)))
    }
}

impl fmt::Display for RegisterQuad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "eax={:08x}, ebx={:08x}, ecx={:08x}, edx={:08x}",
            self.eax, self.ebx, self.ecx, self.edx
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    Eax,
    Ebx,
    Ecx,
    Edx,
}

impl Register {
    pub const ALL: [Register; 4] = [Register::Eax, Register::Ebx, Register::Ecx, Register::Edx];

    /// Map a selector character to its register. Only lowercase `a` to `d`
    /// are recognized.
    pub const fn from_selector(c: char) -> Option<Self> {
        match c {
            'a' => Some(Register::Eax),
            'b' => Some(Register::Ebx),
            'c' => Some(Register::Ecx),
            'd' => Some(Register::Edx),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Register::Eax => "eax",
            Register::Ebx => "ebx",
            Register::Ecx => "ecx",
            Register::Edx => "edx",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
