//! Construction, dispatch and accounting tests.

use ppcsim_core::common::Exception;
use ppcsim_core::config::{Config, ConfigError, HostEnvKind, ProcessorModel};
use ppcsim_core::core::Cpu;
use ppcsim_core::core::arch::fpscr;
use ppcsim_core::isa::ppcfp::opcodes::{OP_LFD, OP_LFSU};
use ppcsim_core::isa::ppcfp::xo;
use ppcsim_core::isa::{FpOp, decode};
use ppcsim_core::soc::Memory;
use ppcsim_core::stats::FpStats;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::{InstructionBuilder, a_form, d_form, x_form};
use crate::common::harness::{RAM_BASE, RAM_SIZE, TestContext, ops};

fn detached_config() -> Config {
    let mut config = Config::default();
    config.fpu.host_env = HostEnvKind::Detached;
    config
}

// ══════════════════════════════════════════════════════════
// 1. Construction
// ══════════════════════════════════════════════════════════

#[test]
fn new_applies_config() {
    let mut config = detached_config();
    config.fpu.model = ProcessorModel::Mpc601;
    config.fpu.initial_fpscr = fpscr::VXCVI | fpscr::VE | 0b01;
    config.general.trace_instructions = true;

    let cpu = Cpu::new(Box::new(Memory::new(RAM_SIZE, RAM_BASE)), &config).unwrap();

    assert_eq!(cpu.model, ProcessorModel::Mpc601);
    assert!(cpu.trace);
    assert_eq!(
        cpu.fpscr.read(),
        fpscr::VXCVI | fpscr::VE | 0b01 | fpscr::VX | fpscr::FEX,
        "summaries derived at reset"
    );
    assert_eq!(cpu.cr.read(), 0);
    assert_eq!(cpu.stats.total(), 0);
}

#[test]
fn new_rejects_invalid_config() {
    let mut config = detached_config();
    config.fpu.initial_fpscr = fpscr::RESERVED;
    let err = Cpu::new(Box::new(Memory::new(RAM_SIZE, RAM_BASE)), &config).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "fpu.initial_fpscr", .. }));
}

#[test]
fn debug_output_names_state() {
    let ctx = TestContext::new();
    let out = format!("{:?}", ctx.cpu);
    assert!(out.contains("fpscr"));
    assert!(out.contains("Mpc603e"));
}

#[test]
fn cpu_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Cpu>();
}

// ══════════════════════════════════════════════════════════
// 2. Dispatch
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::zero(0x0000_0000)]
#[case::integer_add(0x7C63_2214)]
#[case::unknown_x_form(0xFC00_0002)]
#[case::fres_on_double(0xFC60_1030)]
#[case::fsel_on_single(0xEC60_102E)]
fn undecodable_words_are_illegal(#[case] inst: u32) {
    let mut ctx = TestContext::new();
    assert_eq!(ctx.run(inst), Err(Exception::ILLEGAL));
    assert_eq!(ctx.cpu.stats.illegal, 1);
    assert_eq!(ctx.cpu.stats.total(), 0);
}

#[test]
fn dispatch_runs_decoded_op() {
    let mut ctx = TestContext::new();
    ctx.set_f64(1, 6.0);
    ctx.set_f64(2, 4.0);
    ctx.cpu.dispatch(FpOp::Fsub, &ops(3, 1, 2, 0)).unwrap();
    assert_eq!(ctx.get_f64(3), 2.0);
}

#[test]
fn dispatch_masks_record_for_compares() {
    let mut ctx = TestContext::new().with_fpscr(fpscr::FX);
    let mut o = ops(0, 1, 2, 0);
    o.record = true;
    o.crfd = 6;
    ctx.cpu.dispatch(FpOp::Fcmpo, &o).unwrap();
    assert_eq!(ctx.cpu.cr.field(1), 0);
    assert_eq!(ctx.cpu.cr.field(6), 0b0010);
}

#[test]
fn mffs_selects_model_variant() {
    let inst = x_form(xo::MFFS, 1, 0, 0);
    let mut ctx = TestContext::new().with_fpscr(fpscr::ZX);
    ctx.run(inst).unwrap();
    assert_eq!(ctx.get_bits(1) >> 32, 0xFFF8_0000);

    ctx.cpu.model = ProcessorModel::Mpc601;
    ctx.run(inst).unwrap();
    assert_eq!(ctx.get_bits(1) >> 32, 0xFFFF_FFFF);
}

#[test]
fn traced_execution_matches_untraced() {
    let inst = a_form(xo::FMUL, 3, 1, 2, 0);
    let mut plain = TestContext::new();
    let mut traced = TestContext::new();
    traced.cpu.trace = true;
    for ctx in [&mut plain, &mut traced] {
        ctx.set_f64(1, 1.25);
        ctx.set_f64(2, -8.0);
        ctx.run(inst).unwrap();
    }
    assert_eq!(plain.get_bits(3), traced.get_bits(3));
    assert_eq!(plain.fpscr(), traced.fpscr());
}

// ══════════════════════════════════════════════════════════
// 3. Accounting
// ══════════════════════════════════════════════════════════

#[test]
fn stats_count_by_class() {
    let mut ctx = TestContext::new();
    ctx.set_f64(1, 1.0);
    ctx.set_f64(2, 2.0);
    ctx.set_gpr(4, RAM_BASE);

    ctx.run(a_form(xo::FADD, 3, 1, 0, 2)).unwrap();
    ctx.run(a_form(xo::FADD, 3, 1, 0, 2) | 1).unwrap();
    ctx.run(x_form(xo::FRSP, 3, 0, 2)).unwrap();
    ctx.run(x_form(xo::FCMPU, 0, 1, 2)).unwrap();
    ctx.run(x_form(xo::MFFS, 5, 0, 0)).unwrap();
    ctx.run(d_form(OP_LFD, 6, 4, 8)).unwrap();

    let stats = &ctx.cpu.stats;
    assert_eq!(stats.inst_arith, 2);
    assert_eq!(stats.inst_convert, 1);
    assert_eq!(stats.inst_compare, 1);
    assert_eq!(stats.inst_control, 1);
    assert_eq!(stats.inst_memory, 1);
    assert_eq!(stats.record_forms, 1);
    assert_eq!(stats.total(), 6);
}

#[test]
fn record_bit_on_compare_is_not_counted() {
    let mut ctx = TestContext::new();
    let inst = InstructionBuilder::new()
        .opcode(63)
        .ra(1)
        .rb(2)
        .xo10(xo::FCMPU)
        .record()
        .build();
    ctx.run(inst).unwrap();
    assert_eq!(ctx.cpu.stats.record_forms, 0);
    assert_eq!(ctx.cpu.stats.inst_compare, 1);
}

#[test]
fn update_form_with_ra_zero_counts_as_illegal() {
    let mut ctx = TestContext::new();
    let inst = d_form(OP_LFSU, 1, 0, 0);
    assert_eq!(decode(inst), Some(FpOp::Lfsu));
    assert_eq!(ctx.run(inst), Err(Exception::ILLEGAL));
    assert_eq!(ctx.cpu.stats.illegal, 1);
    assert_eq!(ctx.cpu.stats.inst_memory, 0);
}

#[test]
fn bus_faults_are_not_counted() {
    let mut ctx = TestContext::new();
    ctx.set_gpr(4, 0x10);
    let result = ctx.run(d_form(OP_LFD, 1, 4, 0));
    assert_eq!(result, Err(Exception::DataStorage { addr: 0x10 }));
    assert_eq!(ctx.cpu.stats, FpStats::default());
}

#[test]
fn trapped_conversion_is_counted() {
    let mut ctx = TestContext::new().with_fpscr(fpscr::VE);
    ctx.set_f64(2, f64::INFINITY);
    assert_eq!(
        ctx.run(x_form(xo::FCTIWZ, 3, 0, 2)),
        Err(Exception::FP_ENABLED)
    );
    assert_eq!(ctx.cpu.stats.fp_traps, 1);
    assert_eq!(ctx.cpu.stats.total(), 0);
}

#[test]
fn traced_trap_still_reports_exception() {
    let mut ctx = TestContext::new().with_fpscr(fpscr::VE);
    ctx.cpu.trace = true;
    ctx.set_f64(2, f64::NAN);
    let err = ctx.run(x_form(xo::FCTIW, 3, 0, 2)).unwrap_err();
    assert_eq!(err.vector(), 0x700);
    assert_eq!(ctx.cpu.stats.fp_traps, 1);
}

#[rstest]
#[case(Exception::ILLEGAL, 0x700)]
#[case(Exception::FP_ENABLED, 0x700)]
#[case(Exception::DataStorage { addr: 4 }, 0x300)]
#[case(Exception::Alignment { addr: 3 }, 0x600)]
fn exception_vectors(#[case] e: Exception, #[case] vector: u32) {
    assert_eq!(e.vector(), vector);
}
