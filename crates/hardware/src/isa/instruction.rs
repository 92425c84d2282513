//! Instruction field extraction.
//!
//! Provides bit extraction functions and the `FpDecoded` operand structure for
//! PowerPC floating-point instructions. PowerPC numbers bits from the MSB, so the
//! shifts below are `31 - last_bit` of each field.

/// Mask for a 5-bit register field.
pub const REG_MASK: u32 = 0x1F;
/// Mask for a 3-bit CR/FPSCR field selector.
pub const CRF_MASK: u32 = 0x7;
/// Mask for the 8-bit `mtfsf` field mask.
pub const FM_MASK: u32 = 0xFF;
/// Mask for the 4-bit `mtfsfi` immediate.
pub const IMM_MASK: u32 = 0xF;
/// Mask for the 10-bit X-form extended opcode.
pub const XO10_MASK: u32 = 0x3FF;
/// Mask for the 5-bit A-form extended opcode.
pub const XO5_MASK: u32 = 0x1F;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Primary opcode (bits 0-5).
    fn opcd(&self) -> u32;
    /// `frD`/`frS`/`rD`/`crbD` field (bits 6-10).
    fn rd(&self) -> usize;
    /// `frA`/`rA` field (bits 11-15).
    fn ra(&self) -> usize;
    /// `frB`/`rB` field (bits 16-20).
    fn rb(&self) -> usize;
    /// `frC` field (bits 21-25).
    fn rc(&self) -> usize;
    /// `crfD` field (bits 6-8).
    fn crfd(&self) -> usize;
    /// `crfS` field (bits 11-13).
    fn crfs(&self) -> usize;
    /// `FM` field of `mtfsf` (bits 7-14).
    fn fm(&self) -> u8;
    /// `IMM` field of `mtfsfi` (bits 16-19).
    fn imm4(&self) -> u32;
    /// Sign-extended 16-bit displacement (bits 16-31).
    fn d(&self) -> i32;
    /// X-form extended opcode (bits 21-30).
    fn xo10(&self) -> u32;
    /// A-form extended opcode (bits 26-30).
    fn xo5(&self) -> u32;
    /// Record bit (bit 31).
    fn record(&self) -> bool;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcd(&self) -> u32 {
        self >> 26
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 21) & REG_MASK) as usize
    }

    #[inline(always)]
    fn ra(&self) -> usize {
        ((self >> 16) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rb(&self) -> usize {
        ((self >> 11) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rc(&self) -> usize {
        ((self >> 6) & REG_MASK) as usize
    }

    #[inline(always)]
    fn crfd(&self) -> usize {
        ((self >> 23) & CRF_MASK) as usize
    }

    #[inline(always)]
    fn crfs(&self) -> usize {
        ((self >> 18) & CRF_MASK) as usize
    }

    #[inline(always)]
    fn fm(&self) -> u8 {
        ((self >> 17) & FM_MASK) as u8
    }

    #[inline(always)]
    fn imm4(&self) -> u32 {
        (self >> 12) & IMM_MASK
    }

    #[inline(always)]
    fn d(&self) -> i32 {
        i32::from(*self as u16 as i16)
    }

    #[inline(always)]
    fn xo10(&self) -> u32 {
        (self >> 1) & XO10_MASK
    }

    #[inline(always)]
    fn xo5(&self) -> u32 {
        (self >> 1) & XO5_MASK
    }

    #[inline(always)]
    fn record(&self) -> bool {
        self & 1 != 0
    }
}

/// Operand fields of a floating-point instruction, decoded once per execution.
///
/// Every operation takes this structure instead of the raw word, so operations can be
/// exercised with literal register indices. Fields an instruction form does not use are
/// simply ignored by that operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FpDecoded {
    /// Destination (or store source) register; also the bit number for `mtfsb0/1`.
    pub rd: usize,
    /// Operand A register (FPR for arithmetic, GPR base for loads/stores).
    pub ra: usize,
    /// Operand B register (FPR for arithmetic, GPR index for X-form loads/stores).
    pub rb: usize,
    /// Operand C register.
    pub rc: usize,
    /// Destination CR or FPSCR field (0-7).
    pub crfd: usize,
    /// Source FPSCR field for `mcrfs` (0-7).
    pub crfs: usize,
    /// `mtfsf` field mask.
    pub fm: u8,
    /// `mtfsfi` immediate.
    pub imm: u32,
    /// Sign-extended displacement for D-form loads/stores.
    pub d: i32,
    /// Record bit: mirror the FPSCR summary into CR1 on completion.
    pub record: bool,
}

impl FpDecoded {
    /// Extracts every operand field from `inst`.
    pub fn decode(inst: u32) -> Self {
        Self {
            rd: inst.rd(),
            ra: inst.ra(),
            rb: inst.rb(),
            rc: inst.rc(),
            crfd: inst.crfd(),
            crfs: inst.crfs(),
            fm: inst.fm(),
            imm: inst.imm4(),
            d: inst.d(),
            record: inst.record(),
        }
    }
}

impl From<u32> for FpDecoded {
    fn from(inst: u32) -> Self {
        Self::decode(inst)
    }
}
