use crate::regs::RegisterQuad;

/// Something that answers processor identification queries.
pub trait Cpuid {
    /// Issue one query. EAX selects the leaf and ECX the sub-leaf, all four
    /// registers of the result are the instruction's outputs.
    fn query(&self, input: RegisterQuad) -> RegisterQuad;
}

/// Executes the `cpuid` instruction on the current processor.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeCpuid;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl Cpuid for NativeCpuid {
    fn query(&self, input: RegisterQuad) -> RegisterQuad {
        #[cfg(target_arch = "x86")]
        use core::arch::x86::__cpuid_count;
        #[cfg(target_arch = "x86_64")]
        use core::arch::x86_64::__cpuid_count;
        use core::sync::atomic::{Ordering, compiler_fence};

        // keep memory accesses on their side of the instruction
        compiler_fence(Ordering::SeqCst);
        let result = unsafe { __cpuid_count(input.eax, input.ecx) };
        compiler_fence(Ordering::SeqCst);

        RegisterQuad::new(result.eax, result.ebx, result.ecx, result.edx)
    }
}

/// Answers queries from a fixed table, falling back to all zeroes for
/// unknown leaves the way processors report unsupported leaves.
#[derive(Debug, Default, Clone)]
pub struct TableCpuid {
    entries: Vec<((u32, u32), RegisterQuad)>,
}

impl TableCpuid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_leaf(mut self, leaf: u32, subleaf: u32, out: RegisterQuad) -> Self {
        self.entries.push(((leaf, subleaf), out));
        self
    }
}

impl Cpuid for TableCpuid {
    fn query(&self, input: RegisterQuad) -> RegisterQuad {
        self.entries
            .iter()
            .find(|(key, _)| *key == (input.eax, input.ecx))
            .map(|(_, out)| *out)
            .unwrap_or_default()
    }
}
