//! Invalid-operation classification.
//!
//! Arithmetic instructions consult this table before computing their result. Each row
//! names the operation class, the operand condition and the FPSCR bits it sets:
//!
//! | Class | Condition              | Sets        |
//! |-------|------------------------|-------------|
//! | ADD   | both operands NaN      | FX, VXISI   |
//! | SUB   | both operands infinite | FX, VXISI   |
//! | SUB   | both operands NaN      | FX, VXISI   |
//! | MUL   | both operands NaN      | FX          |
//! | DIV   | both operands infinite | FX, VXIDI   |
//! | DIV   | both operands zero     | FX, VXZDZ   |
//! | SQRT  | operand B NaN or −1.0  | FX, VXSQRT  |
//!
//! This is the processor's observed behavior, not generic IEEE-754 invalid detection:
//! `0 × ∞` is not flagged for MUL, for instance.

use crate::core::arch::fpscr::{self, Fpscr};

/// Operation class selecting the rows of the classification table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FpOpKind {
    /// Addition (and the add step of fused multiply-add).
    Add,
    /// Subtraction (and the subtract step of fused multiply-subtract).
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
    /// Square root; only operand B is examined.
    Sqrt,
}

/// Bits cleared before any rule is evaluated.
pub const CLASSIFY_CLEAR_MASK: u32 = 0x7FBF_FFFF;

/// One row of the classification table.
#[derive(Clone, Copy, Debug)]
pub struct InvalidRule {
    /// Operation class the row applies to.
    pub kind: FpOpKind,
    /// Operand condition.
    pub when: fn(f64, f64) -> bool,
    /// FPSCR bits set when the condition holds.
    pub sets: u32,
}

fn both_nan(a: f64, b: f64) -> bool {
    a.is_nan() && b.is_nan()
}

fn both_inf(a: f64, b: f64) -> bool {
    a.is_infinite() && b.is_infinite()
}

fn both_zero(a: f64, b: f64) -> bool {
    a == 0.0 && b == 0.0
}

fn sqrt_invalid(_a: f64, b: f64) -> bool {
    b.is_nan() || b == -1.0
}

/// The classification table.
pub const INVALID_RULES: &[InvalidRule] = &[
    InvalidRule { kind: FpOpKind::Add, when: both_nan, sets: fpscr::FX | fpscr::VXISI },
    InvalidRule { kind: FpOpKind::Sub, when: both_inf, sets: fpscr::FX | fpscr::VXISI },
    InvalidRule { kind: FpOpKind::Sub, when: both_nan, sets: fpscr::FX | fpscr::VXISI },
    InvalidRule { kind: FpOpKind::Mul, when: both_nan, sets: fpscr::FX },
    InvalidRule { kind: FpOpKind::Div, when: both_inf, sets: fpscr::FX | fpscr::VXIDI },
    InvalidRule { kind: FpOpKind::Div, when: both_zero, sets: fpscr::FX | fpscr::VXZDZ },
    InvalidRule { kind: FpOpKind::Sqrt, when: sqrt_invalid, sets: fpscr::FX | fpscr::VXSQRT },
];

/// Returns the bits the table sets for `kind` applied to `(a, b)`.
pub fn invalid_bits(kind: FpOpKind, a: f64, b: f64) -> u32 {
    INVALID_RULES
        .iter()
        .filter(|rule| rule.kind == kind && (rule.when)(a, b))
        .fold(0, |acc, rule| acc | rule.sets)
}

/// Clears the classification mask, applies the table and recomputes VX and FEX.
///
/// # Arguments
///
/// * `fpscr` - FPSCR to update.
/// * `kind`  - Operation class.
/// * `a`     - First operand (ignored for `Sqrt`).
/// * `b`     - Second operand.
pub fn classify_invalid(fpscr: &mut Fpscr, kind: FpOpKind, a: f64, b: f64) {
    let cleared = fpscr.read() & CLASSIFY_CLEAR_MASK;
    fpscr.write(cleared | invalid_bits(kind, a, b));
    fpscr.update_summaries();
}
