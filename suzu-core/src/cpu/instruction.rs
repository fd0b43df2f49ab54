use super::instructions_table;
use std::fmt::Display;

/// A decoded instruction together with its dispatch table metadata.
///
/// `cycles` holds the timing cost in T-states as `(taken, not_taken)`,
/// where both sides are equal for unconditional instructions. `length`
/// counts the opcode and its immediate operand bytes.
#[derive(Clone, Copy, Debug)]
pub struct Instruction {
    pub pc: u16,
    pub opcode: Opcode,
    pub src: OperandType,
    pub dest: OperandType,
    pub mnemonic: &'static str,
    pub length: u8,
    pub cycles: (u8, u8),
}

/// The location an operand is read from or written to.
///
/// `Imm*` and `*Addr*` variants that carry immediate bytes fetch them
/// from the program counter while being resolved.
#[derive(PartialEq, Copy, Clone, Debug)]
pub enum OperandType {
    RegA,
    RegB,
    RegC,
    RegD,
    RegE,
    RegH,
    RegL,

    AddrHL,
    AddrHLDec,
    AddrHLInc,
    AddrDE,

    RegAF,
    RegBC,
    RegDE,
    RegHL,

    RegSP,

    Imm8,
    Imm8Signed,
    Imm16,

    HighAddr8,
    HighAddrC, // only for the C register
    Addr16,

    // Also for instructions with one operand as a fill
    Implied,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Condition {
    NC,
    NZ,
    Z,
    Unconditional,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Opcode {
    Nop,

    Ld,

    Push,
    Pop,

    Inc,
    Inc16,
    Dec,
    Dec16,

    Add,
    Add16,
    Cp,
    And,
    Xor,
    Or,

    Cpl,
    Ccf,

    Jp(Condition),
    Jr(Condition),

    Call(Condition),
    Ret(Condition),

    Rst(u8),

    Di,
    Ei,

    Prefix,

    Swap,
    Res(u8),

    Illegal,
}

impl Instruction {
    pub fn from_byte(byte: u8, pc: u16) -> Self {
        let (opcode, operand_types, mnemonic, length, cycles) =
            instructions_table::INSTRUCTIONS[byte as usize];

        Instruction {
            pc,
            opcode,
            src: operand_types.1,
            dest: operand_types.0,
            mnemonic,
            length,
            cycles,
        }
    }

    pub fn from_prefix(byte: u8, pc: u16) -> Self {
        let (opcode, operand_types, mnemonic, length, cycles) =
            instructions_table::PREFIXED_INSTRUCTIONS[byte as usize];

        Instruction {
            pc,
            opcode,
            src: operand_types.1,
            dest: operand_types.0,
            mnemonic,
            length,
            cycles,
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic)
    }
}
