//! Execution statistics collection and reporting.
//!
//! This module tracks what the FPU engine has executed. It provides:
//! 1. **Instruction mix:** Counts by class (arithmetic, conversion, compare, control, memory).
//! 2. **Record forms:** How many instructions mirrored the FPSCR into CR1.
//! 3. **Exceptions:** Trapped invalid operations and illegal instruction forms.
//! 4. **Reporting:** A `Display` implementation in the same layout as the section dumps.

use std::fmt;

use crate::isa::FpClass;

/// Counters updated by the instruction dispatcher.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FpStats {
    /// Arithmetic, square root, estimate, move and select instructions.
    pub inst_arith: u64,
    /// `frsp`, `fctiw`, `fctiwz`.
    pub inst_convert: u64,
    /// `fcmpu`, `fcmpo`.
    pub inst_compare: u64,
    /// FPSCR transfer and control instructions.
    pub inst_control: u64,
    /// Floating-point loads and stores.
    pub inst_memory: u64,
    /// Instructions executed with the record bit set.
    pub record_forms: u64,
    /// Invalid operations that trapped because VE was set.
    pub fp_traps: u64,
    /// Words rejected as illegal (undecodable or update form with `rA = 0`).
    pub illegal: u64,
}

impl FpStats {
    /// Counts one completed instruction of `class`.
    pub fn record(&mut self, class: FpClass) {
        let counter = match class {
            FpClass::Arithmetic => &mut self.inst_arith,
            FpClass::Conversion => &mut self.inst_convert,
            FpClass::Compare => &mut self.inst_compare,
            FpClass::Control => &mut self.inst_control,
            FpClass::Memory => &mut self.inst_memory,
        };
        *counter += 1;
    }

    /// Total completed instructions across all classes.
    pub fn total(&self) -> u64 {
        self.inst_arith + self.inst_convert + self.inst_compare + self.inst_control + self.inst_memory
    }
}

impl fmt::Display for FpStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total().max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;

        writeln!(f, "==========================================================")?;
        writeln!(f, "POWERPC FPU STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "fp_insts                 {}", self.total())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, n) in [
            ("op.arith", self.inst_arith),
            ("op.convert", self.inst_convert),
            ("op.compare", self.inst_compare),
            ("op.control", self.inst_control),
            ("op.memory", self.inst_memory),
        ] {
            writeln!(f, "  {name:<22} {n} ({:.2}%)", pct(n))?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "EXCEPTIONS")?;
        writeln!(f, "  record_forms           {}", self.record_forms)?;
        writeln!(f, "  fp_traps               {}", self.fp_traps)?;
        writeln!(f, "  illegal                {}", self.illegal)?;
        write!(f, "==========================================================")
    }
}
