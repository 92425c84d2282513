//! Instruction Dispatch.
//!
//! This module is the entry point the surrounding emulator calls for every
//! floating-point instruction word. It performs the following:
//! 1. **Decode:** Identifies the instruction and extracts its operand fields.
//! 2. **Tracing:** Emits a `trace` event per instruction when enabled.
//! 3. **Dispatch:** Invokes the operation on the owning execution unit.
//! 4. **Accounting:** Updates statistics for completed, trapped and illegal instructions.

use super::Cpu;
use crate::common::{Exception, ExecResult, ProgramCause};
use crate::config::ProcessorModel;
use crate::isa::{FpDecoded, FpOp, decode};

impl Cpu {
    /// Executes one floating-point instruction word.
    ///
    /// # Errors
    ///
    /// Returns the exception to deliver instead of completing the instruction:
    /// [`Exception::ILLEGAL`] for words that are not floating-point instructions or for
    /// update forms with `rA = 0`, [`Exception::FP_ENABLED`] for trapped invalid
    /// conversions, and any fault raised by the memory bus.
    pub fn execute_fp(&mut self, inst: u32) -> ExecResult {
        let Some(op) = decode(inst) else {
            tracing::warn!(inst = format_args!("{inst:#010x}"), "not a floating-point instruction");
            self.stats.illegal += 1;
            return Err(Exception::ILLEGAL);
        };
        let ops = FpDecoded::decode(inst);

        if self.trace {
            tracing::trace!(
                inst = format_args!("{inst:#010x}"),
                op = op.mnemonic(),
                record = ops.record,
                "execute"
            );
        }

        match self.dispatch(op, &ops) {
            Ok(()) => {
                self.stats.record(op.class());
                if ops.record && op.has_record_form() {
                    self.stats.record_forms += 1;
                }
                Ok(())
            }
            Err(e) => {
                tracing::debug!(
                    op = op.mnemonic(),
                    vector = format_args!("{:#05x}", e.vector()),
                    "{e}"
                );
                match e {
                    Exception::Program(ProgramCause::IllegalInstruction) => self.stats.illegal += 1,
                    Exception::Program(ProgramCause::FloatingPointEnabled) => {
                        self.stats.fp_traps += 1;
                        if self.trace {
                            self.regs.dump();
                        }
                    }
                    Exception::DataStorage { .. } | Exception::Alignment { .. } => {}
                }
                Err(e)
            }
        }
    }

    /// Invokes the operation for an already decoded instruction.
    ///
    /// Instructions without a record form ignore `ops.record`. The guest rounding mode is
    /// installed on the calling thread for the duration of the operation only.
    pub fn dispatch(&mut self, op: FpOp, ops: &FpDecoded) -> ExecResult {
        let ops = &FpDecoded {
            record: ops.record && op.has_record_form(),
            ..*ops
        };
        self.fpscr.enter_host();
        let result = self.run_op(op, ops);
        self.fpscr.leave_host();
        result
    }

    fn run_op(&mut self, op: FpOp, ops: &FpDecoded) -> ExecResult {
        match op {
            FpOp::Fadd => self.fadd(ops),
            FpOp::Fsub => self.fsub(ops),
            FpOp::Fmul => self.fmul(ops),
            FpOp::Fdiv => self.fdiv(ops),
            FpOp::Fmadd => self.fmadd(ops),
            FpOp::Fmsub => self.fmsub(ops),
            FpOp::Fnmadd => self.fnmadd(ops),
            FpOp::Fnmsub => self.fnmsub(ops),
            FpOp::Fadds => self.fadds(ops),
            FpOp::Fsubs => self.fsubs(ops),
            FpOp::Fmuls => self.fmuls(ops),
            FpOp::Fdivs => self.fdivs(ops),
            FpOp::Fmadds => self.fmadds(ops),
            FpOp::Fmsubs => self.fmsubs(ops),
            FpOp::Fnmadds => self.fnmadds(ops),
            FpOp::Fnmsubs => self.fnmsubs(ops),
            FpOp::Fsqrt => self.fsqrt(ops),
            FpOp::Fsqrts => self.fsqrts(ops),
            FpOp::Frsqrte => self.frsqrte(ops),
            FpOp::Fres => self.fres(ops),
            FpOp::Fmr => self.fmr(ops),
            FpOp::Fabs => self.fabs(ops),
            FpOp::Fnabs => self.fnabs(ops),
            FpOp::Fneg => self.fneg(ops),
            FpOp::Fsel => self.fsel(ops),
            FpOp::Frsp => self.frsp(ops),
            FpOp::Fctiw => self.fctiw(ops),
            FpOp::Fctiwz => self.fctiwz(ops),
            FpOp::Fcmpu => self.fcmpu(ops),
            FpOp::Fcmpo => self.fcmpo(ops),
            FpOp::Mffs => match self.model {
                ProcessorModel::Mpc601 => self.mffs_601(ops),
                ProcessorModel::Mpc603e => self.mffs(ops),
            },
            FpOp::Mtfsf => self.mtfsf(ops),
            FpOp::Mtfsfi => self.mtfsfi(ops),
            FpOp::Mtfsb0 => self.mtfsb0(ops),
            FpOp::Mtfsb1 => self.mtfsb1(ops),
            FpOp::Mcrfs => self.mcrfs(ops),
            FpOp::Lfs => self.lfs(ops),
            FpOp::Lfsu => self.lfsu(ops),
            FpOp::Lfsx => self.lfsx(ops),
            FpOp::Lfsux => self.lfsux(ops),
            FpOp::Lfd => self.lfd(ops),
            FpOp::Lfdu => self.lfdu(ops),
            FpOp::Lfdx => self.lfdx(ops),
            FpOp::Lfdux => self.lfdux(ops),
            FpOp::Stfs => self.stfs(ops),
            FpOp::Stfsu => self.stfsu(ops),
            FpOp::Stfsx => self.stfsx(ops),
            FpOp::Stfsux => self.stfsux(ops),
            FpOp::Stfd => self.stfd(ops),
            FpOp::Stfdu => self.stfdu(ops),
            FpOp::Stfdx => self.stfdx(ops),
            FpOp::Stfdux => self.stfdux(ops),
            FpOp::Stfiwx => self.stfiwx(ops),
        }
    }
}
