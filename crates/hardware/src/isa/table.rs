//! Ordered instruction pattern table.
//!
//! Every engine resolves an instruction word through [`lookup`], which walks
//! [`PATTERNS`] and returns the FIRST entry whose fixed bits match. Templates
//! are written most-significant bit first with `0`/`1` fixing a bit and `?`
//! leaving it free; spaces are ignored. Order is significant: more specific
//! templates precede the general ones they overlap, and the all-wildcard
//! catch-all is last.

use crate::core::units::alu::AluOp;
use crate::core::units::lsu::MemWidth;
use crate::isa::instruction::Format;
use crate::isa::semantics::{BranchCond as Cond, Semantics};

use AluOp::{
    Add, And, Div, Divu, Mul, Mulh, Mulhsu, Mulhu, Or, Rem, Remu, Sll, Slt, Sltu, Sra, Srl, Sub,
    Xor,
};
use Format::{B, I, J, N, R, S, U};
use MemWidth::{Byte, Double, Half, Word};

/// One row of the instruction table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Mnemonic.
    pub name: &'static str,
    /// Bits fixed by the template.
    pub mask: u32,
    /// Required values of the fixed bits.
    pub bits: u32,
    /// Operand layout.
    pub format: Format,
    /// Behaviour.
    pub semantics: Semantics,
}

impl Pattern {
    /// Returns `true` if `inst` agrees with every fixed bit of the template.
    #[inline(always)]
    pub const fn matches(&self, inst: u32) -> bool {
        inst & self.mask == self.bits
    }

    /// Returns `true` if every word matched by `other` is also matched by `self`.
    pub const fn covers(&self, other: &Self) -> bool {
        self.mask & other.mask == self.mask && other.bits & self.mask == self.bits
    }
}

/// Parses a 32-position template into `(mask, bits)` at compile time.
///
/// A template with a position count other than 32, or with a character other
/// than `0`, `1`, `?` or space, fails const evaluation.
const fn parse(template: &str) -> (u32, u32) {
    let bytes = template.as_bytes();
    let mut mask = 0u32;
    let mut bits = 0u32;
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'0' => {
                mask = (mask << 1) | 1;
                bits <<= 1;
                count += 1;
            }
            b'1' => {
                mask = (mask << 1) | 1;
                bits = (bits << 1) | 1;
                count += 1;
            }
            b'?' => {
                mask <<= 1;
                bits <<= 1;
                count += 1;
            }
            b' ' => {}
            _ => panic!("invalid character in instruction template"),
        }
        i += 1;
    }
    assert!(count == 32, "instruction template must have 32 positions");
    (mask, bits)
}

const fn pat(template: &str, name: &'static str, format: Format, semantics: Semantics) -> Pattern {
    let (mask, bits) = parse(template);
    Pattern {
        name,
        mask,
        bits,
        format,
        semantics,
    }
}

const fn load(width: MemWidth, signed: bool) -> Semantics {
    Semantics::Load { width, signed }
}

const fn imm(op: AluOp) -> Semantics {
    Semantics::AluImm { op, word: false }
}

const fn imm_w(op: AluOp) -> Semantics {
    Semantics::AluImm { op, word: true }
}

const fn reg(op: AluOp) -> Semantics {
    Semantics::AluReg { op, word: false }
}

const fn reg_w(op: AluOp) -> Semantics {
    Semantics::AluReg { op, word: true }
}

/// The catch-all entry: matches any word and halts the run.
pub const UNKNOWN: Pattern = pat(
    "??????? ????? ????? ??? ????? ????? ??",
    "inv",
    N,
    Semantics::Unknown,
);

/// The instruction table, in match-precedence order.
pub static PATTERNS: &[Pattern] = &[
    pat("??????? ????? ????? ??? ????? 01101 11", "lui", U, Semantics::Lui),
    pat("??????? ????? ????? ??? ????? 00101 11", "auipc", U, Semantics::Auipc),
    pat("??????? ????? ????? ??? ????? 11011 11", "jal", J, Semantics::Jal),
    pat("??????? ????? ????? 000 ????? 11001 11", "jalr", I, Semantics::Jalr),
    pat("??????? ????? ????? 000 ????? 11000 11", "beq", B, Semantics::Branch(Cond::Eq)),
    pat("??????? ????? ????? 001 ????? 11000 11", "bne", B, Semantics::Branch(Cond::Ne)),
    pat("??????? ????? ????? 100 ????? 11000 11", "blt", B, Semantics::Branch(Cond::Lt)),
    pat("??????? ????? ????? 101 ????? 11000 11", "bge", B, Semantics::Branch(Cond::Ge)),
    pat("??????? ????? ????? 110 ????? 11000 11", "bltu", B, Semantics::Branch(Cond::Ltu)),
    pat("??????? ????? ????? 111 ????? 11000 11", "bgeu", B, Semantics::Branch(Cond::Geu)),
    pat("??????? ????? ????? 000 ????? 00000 11", "lb", I, load(Byte, true)),
    pat("??????? ????? ????? 001 ????? 00000 11", "lh", I, load(Half, true)),
    pat("??????? ????? ????? 010 ????? 00000 11", "lw", I, load(Word, true)),
    pat("??????? ????? ????? 100 ????? 00000 11", "lbu", I, load(Byte, false)),
    pat("??????? ????? ????? 101 ????? 00000 11", "lhu", I, load(Half, false)),
    pat("??????? ????? ????? 110 ????? 00000 11", "lwu", I, load(Word, false)),
    pat("??????? ????? ????? 011 ????? 00000 11", "ld", I, load(Double, false)),
    pat("??????? ????? ????? 000 ????? 01000 11", "sb", S, Semantics::Store(Byte)),
    pat("??????? ????? ????? 001 ????? 01000 11", "sh", S, Semantics::Store(Half)),
    pat("??????? ????? ????? 010 ????? 01000 11", "sw", S, Semantics::Store(Word)),
    pat("??????? ????? ????? 011 ????? 01000 11", "sd", S, Semantics::Store(Double)),
    pat("??????? ????? ????? 000 ????? 00100 11", "addi", I, imm(Add)),
    pat("??????? ????? ????? 010 ????? 00100 11", "slti", I, imm(Slt)),
    pat("??????? ????? ????? 011 ????? 00100 11", "sltiu", I, imm(Sltu)),
    pat("000000? ????? ????? 001 ????? 00100 11", "slli", I, imm(Sll)),
    pat("000000? ????? ????? 101 ????? 00100 11", "srli", I, imm(Srl)),
    pat("010000? ????? ????? 101 ????? 00100 11", "srai", I, imm(Sra)),
    pat("0000000 ????? ????? 001 ????? 00110 11", "slliw", I, imm_w(Sll)),
    pat("0000000 ????? ????? 101 ????? 00110 11", "srliw", I, imm_w(Srl)),
    pat("0100000 ????? ????? 101 ????? 00110 11", "sraiw", I, imm_w(Sra)),
    pat("??????? ????? ????? 100 ????? 00100 11", "xori", I, imm(Xor)),
    pat("??????? ????? ????? 110 ????? 00100 11", "ori", I, imm(Or)),
    pat("??????? ????? ????? 111 ????? 00100 11", "andi", I, imm(And)),
    pat("??????? ????? ????? 000 ????? 00110 11", "addiw", I, imm_w(Add)),
    pat("0000000 ????? ????? 000 ????? 01100 11", "add", R, reg(Add)),
    pat("0100000 ????? ????? 000 ????? 01100 11", "sub", R, reg(Sub)),
    pat("0000000 ????? ????? 001 ????? 01100 11", "sll", R, reg(Sll)),
    pat("0000000 ????? ????? 010 ????? 01100 11", "slt", R, reg(Slt)),
    pat("0000000 ????? ????? 011 ????? 01100 11", "sltu", R, reg(Sltu)),
    pat("0000000 ????? ????? 100 ????? 01100 11", "xor", R, reg(Xor)),
    pat("0000000 ????? ????? 101 ????? 01100 11", "srl", R, reg(Srl)),
    pat("0100000 ????? ????? 101 ????? 01100 11", "sra", R, reg(Sra)),
    pat("0000000 ????? ????? 110 ????? 01100 11", "or", R, reg(Or)),
    pat("0000000 ????? ????? 111 ????? 01100 11", "and", R, reg(And)),
    pat("0000000 ????? ????? 000 ????? 01110 11", "addw", R, reg_w(Add)),
    pat("0100000 ????? ????? 000 ????? 01110 11", "subw", R, reg_w(Sub)),
    pat("0000000 ????? ????? 001 ????? 01110 11", "sllw", R, reg_w(Sll)),
    pat("0000000 ????? ????? 101 ????? 01110 11", "srlw", R, reg_w(Srl)),
    pat("0100000 ????? ????? 101 ????? 01110 11", "sraw", R, reg_w(Sra)),
    pat("0000??? ????? 00000 000 00000 00011 11", "fence", I, Semantics::Fence),
    pat("0000000 00000 00000 001 00000 00011 11", "fence.i", I, Semantics::Fence),
    pat("0000000 00001 00000 000 00000 11100 11", "ebreak", I, Semantics::Ebreak),
    pat("0000000 00000 00000 000 00000 11100 11", "ecall", I, Semantics::Ecall),
    pat("0000001 ????? ????? 000 ????? 01100 11", "mul", R, reg(Mul)),
    pat("0000001 ????? ????? 001 ????? 01100 11", "mulh", R, reg(Mulh)),
    pat("0000001 ????? ????? 010 ????? 01100 11", "mulhsu", R, reg(Mulhsu)),
    pat("0000001 ????? ????? 011 ????? 01100 11", "mulhu", R, reg(Mulhu)),
    pat("0000001 ????? ????? 100 ????? 01100 11", "div", R, reg(Div)),
    pat("0000001 ????? ????? 101 ????? 01100 11", "divu", R, reg(Divu)),
    pat("0000001 ????? ????? 110 ????? 01100 11", "rem", R, reg(Rem)),
    pat("0000001 ????? ????? 111 ????? 01100 11", "remu", R, reg(Remu)),
    pat("0000001 ????? ????? 000 ????? 01110 11", "mulw", R, reg_w(Mul)),
    pat("0000001 ????? ????? 100 ????? 01110 11", "divw", R, reg_w(Div)),
    pat("0000001 ????? ????? 101 ????? 01110 11", "divuw", R, reg_w(Divu)),
    pat("0000001 ????? ????? 110 ????? 01110 11", "remw", R, reg_w(Rem)),
    pat("0000001 ????? ????? 111 ????? 01110 11", "remuw", R, reg_w(Remu)),
    UNKNOWN,
];

/// Returns the first pattern matching `inst`.
///
/// The catch-all entry guarantees a match; the fallback only exists so the
/// lookup stays total without indexing.
pub fn lookup(inst: u32) -> &'static Pattern {
    PATTERNS
        .iter()
        .find(|p| p.matches(inst))
        .unwrap_or(&UNKNOWN)
}

/// Lists `(earlier, later)` index pairs where the earlier template matches
/// every word the later one does, making the later entry unreachable.
pub fn shadowed_pairs() -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for (j, later) in PATTERNS.iter().enumerate() {
        for (i, earlier) in PATTERNS[..j].iter().enumerate() {
            if earlier.covers(later) {
                out.push((i, j));
            }
        }
    }
    out
}
