//! Dispatch metadata for the two opcode pages.
//!
//! Each row is `(opcode, (dest, src), mnemonic, length, (taken, not_taken))`
//! with timings in T-states. Opcodes the execution core does not define
//! decode to `Illegal` and freeze the cpu when stepped.

use super::instruction::Condition::*;
use super::instruction::Opcode::{self, *};
use super::instruction::OperandType::{self, *};

type InstructionRow = (Opcode, (OperandType, OperandType), &'static str, u8, (u8, u8));

const ILLEGAL_ROW: InstructionRow = (Illegal, (Implied, Implied), "ILLEGAL", 1, (0, 0));
const PREFIXED_ILLEGAL_ROW: InstructionRow = (Illegal, (Implied, Implied), "ILLEGAL", 2, (0, 0));

pub(super) const INSTRUCTIONS: [InstructionRow; 256] = [
    // 0x0_
    (Nop, (Implied, Implied), "NOP", 1, (4, 4)),
    (Ld, (RegBC, Imm16), "LD BC, nnnn", 3, (12, 12)),
    ILLEGAL_ROW,
    (Inc16, (RegBC, RegBC), "INC BC", 1, (8, 8)),
    (Inc, (RegB, RegB), "INC B", 1, (4, 4)),
    (Dec, (RegB, RegB), "DEC B", 1, (4, 4)),
    (Ld, (RegB, Imm8), "LD B, nn", 2, (8, 8)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Dec16, (RegBC, RegBC), "DEC BC", 1, (8, 8)),
    (Inc, (RegC, RegC), "INC C", 1, (4, 4)),
    (Dec, (RegC, RegC), "DEC C", 1, (4, 4)),
    (Ld, (RegC, Imm8), "LD C, nn", 2, (8, 8)),
    ILLEGAL_ROW,
    // 0x1_
    ILLEGAL_ROW,
    (Ld, (RegDE, Imm16), "LD DE, nnnn", 3, (12, 12)),
    (Ld, (AddrDE, RegA), "LD (DE), A", 1, (8, 8)),
    (Inc16, (RegDE, RegDE), "INC DE", 1, (8, 8)),
    (Inc, (RegD, RegD), "INC D", 1, (4, 4)),
    (Dec, (RegD, RegD), "DEC D", 1, (4, 4)),
    (Ld, (RegD, Imm8), "LD D, nn", 2, (8, 8)),
    ILLEGAL_ROW,
    (Jr(Unconditional), (Implied, Imm8Signed), "JR nn", 2, (12, 12)),
    (Add16, (RegHL, RegDE), "ADD HL, DE", 1, (8, 8)),
    (Ld, (RegA, AddrDE), "LD A, (DE)", 1, (8, 8)),
    ILLEGAL_ROW,
    (Inc, (RegE, RegE), "INC E", 1, (4, 4)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    // 0x2_
    (Jr(NZ), (Implied, Imm8Signed), "JR NZ, nn", 2, (12, 8)),
    (Ld, (RegHL, Imm16), "LD HL, nnnn", 3, (12, 12)),
    (Ld, (AddrHLInc, RegA), "LDI (HL), A", 1, (8, 8)),
    (Inc16, (RegHL, RegHL), "INC HL", 1, (8, 8)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Jr(Z), (Implied, Imm8Signed), "JR Z, nn", 2, (12, 8)),
    ILLEGAL_ROW,
    (Ld, (RegA, AddrHLInc), "LDI A, (HL)", 1, (8, 8)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Cpl, (Implied, Implied), "CPL", 1, (4, 4)),
    // 0x3_
    (Jr(NC), (Implied, Imm8Signed), "JR NC, nn", 2, (12, 8)),
    (Ld, (RegSP, Imm16), "LD SP, nnnn", 3, (12, 12)),
    (Ld, (AddrHLDec, RegA), "LDD (HL), A", 1, (8, 8)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Ld, (AddrHL, Imm8), "LD (HL), nn", 2, (12, 12)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Ld, (RegA, Imm8), "LD A, nn", 2, (8, 8)),
    (Ccf, (Implied, Implied), "CCF", 1, (4, 4)),
    // 0x4_
    (Ld, (RegB, RegB), "LD B, B", 1, (4, 4)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Ld, (RegB, RegA), "LD B, A", 1, (4, 4)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Ld, (RegC, RegA), "LD C, A", 1, (4, 4)),
    // 0x5_
    (Ld, (RegD, RegB), "LD D, B", 1, (4, 4)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Ld, (RegD, AddrHL), "LD D, (HL)", 1, (8, 8)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Ld, (RegE, AddrHL), "LD E, (HL)", 1, (8, 8)),
    (Ld, (RegE, RegA), "LD E, A", 1, (4, 4)),
    // 0x6_
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    // 0x7_
    (Ld, (AddrHL, RegB), "LD (HL), B", 1, (8, 8)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Ld, (RegA, RegB), "LD A, B", 1, (4, 4)),
    (Ld, (RegC, RegA), "LD C, A", 1, (4, 4)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Ld, (RegA, RegH), "LD A, H", 1, (4, 4)),
    (Ld, (RegA, RegL), "LD A, L", 1, (4, 4)),
    (Ld, (RegA, AddrHL), "LD A, (HL)", 1, (8, 8)),
    (Ld, (RegA, RegA), "LD A, A", 1, (4, 4)),
    // 0x8_
    (Add, (RegA, RegB), "ADD A, B", 1, (4, 4)),
    (Add, (RegA, RegC), "ADD A, C", 1, (4, 4)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Add, (RegA, RegA), "ADD A, A", 1, (4, 4)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    // 0x9_
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    // 0xA_
    ILLEGAL_ROW,
    (And, (RegA, RegC), "AND A, C", 1, (4, 4)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (And, (RegA, RegA), "AND A, A", 1, (4, 4)),
    ILLEGAL_ROW,
    (Xor, (RegA, RegC), "XOR A, C", 1, (4, 4)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Xor, (RegA, RegA), "XOR A, A", 1, (4, 4)),
    // 0xB_
    (Or, (RegA, RegB), "OR B", 1, (4, 4)),
    (Or, (RegA, RegC), "OR C", 1, (4, 4)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Cp, (Implied, RegA), "CP A", 1, (4, 4)),
    // 0xC_
    ILLEGAL_ROW,
    (Pop, (RegBC, Implied), "POP BC", 1, (12, 12)),
    ILLEGAL_ROW,
    (Jp(Unconditional), (Implied, Imm16), "JP nnnn", 3, (16, 16)),
    (Call(NZ), (Implied, Imm16), "CALL NZ, nnnn", 3, (24, 12)),
    (Push, (Implied, RegBC), "PUSH BC", 1, (16, 16)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Ret(Z), (Implied, Implied), "RET Z", 1, (20, 8)),
    (Ret(Unconditional), (Implied, Implied), "RET", 1, (16, 16)),
    (Jp(Z), (Implied, Imm16), "JP Z, nnnn", 3, (16, 12)),
    (Prefix, (Implied, Implied), "PREFIX CB", 1, (0, 0)),
    ILLEGAL_ROW,
    (Call(Unconditional), (Implied, Imm16), "CALL nnnn", 3, (24, 24)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    // 0xD_
    ILLEGAL_ROW,
    (Pop, (RegDE, Implied), "POP DE", 1, (12, 12)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Push, (Implied, RegDE), "PUSH DE", 1, (16, 16)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    // 0xE_
    (Ld, (HighAddr8, RegA), "LD (FF00+nn), A", 2, (12, 12)),
    (Pop, (RegHL, Implied), "POP HL", 1, (12, 12)),
    (Ld, (HighAddrC, RegA), "LD (FF00+C), A", 1, (8, 8)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Push, (Implied, RegHL), "PUSH HL", 1, (16, 16)),
    (And, (RegA, Imm8), "AND nn", 2, (8, 8)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Jp(Unconditional), (Implied, RegHL), "JP HL", 1, (4, 4)),
    (Ld, (Addr16, RegA), "LD (nnnn), A", 3, (16, 16)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Rst(0x28), (Implied, Implied), "RST 28", 1, (16, 16)),
    // 0xF_
    (Ld, (RegA, HighAddr8), "LD A, (FF00+nn)", 2, (12, 12)),
    (Pop, (RegAF, Implied), "POP AF", 1, (12, 12)),
    ILLEGAL_ROW,
    (Di, (Implied, Implied), "DI", 1, (4, 4)),
    ILLEGAL_ROW,
    (Push, (Implied, RegAF), "PUSH AF", 1, (16, 16)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Ld, (RegA, Addr16), "LD A, (nnnn)", 3, (16, 16)),
    (Ei, (Implied, Implied), "EI", 1, (4, 4)),
    ILLEGAL_ROW,
    ILLEGAL_ROW,
    (Cp, (Implied, Imm8), "CP nn", 2, (8, 8)),
    (Rst(0x38), (Implied, Implied), "RST 38", 1, (16, 16)),
];

pub(super) const PREFIXED_INSTRUCTIONS: [InstructionRow; 256] = [
    // 0x0_
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    // 0x1_
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    // 0x2_
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    // 0x3_
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    (Swap, (RegA, RegA), "SWAP A", 2, (8, 8)),
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    // 0x4_
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    // 0x5_
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    // 0x6_
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    // 0x7_
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    // 0x8_
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    (Res(0), (RegA, RegA), "RES 0, A", 2, (8, 8)),
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    // 0x9_
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    // 0xA_
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    // 0xB_
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    // 0xC_
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    // 0xD_
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    // 0xE_
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    // 0xF_
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
    PREFIXED_ILLEGAL_ROW,
];
