use super::instruction::{Condition, Instruction, Opcode, OperandType};
use super::CpuBusProvider;
use crate::memory::InterruptType;
use crate::trace::{TraceEvent, TraceSink};

use bitflags::bitflags;

const INTERRUPT_DISPATCH_CYCLES: u32 = 20;

bitflags! {
    struct CpuFlags: u8 {
        const Z = 1 << 7;
        const N = 1 << 6;
        const H = 1 << 5;
        const C = 1 << 4;
    }
}

/// Carry out of the low nibble. Tests the nibble overlap of the two
/// operands, not the sum.
#[inline]
fn half_carry_on_add(op1: u8, op2: u8) -> bool {
    (op1 & 0xf) & (op2 & 0xf) != 0
}

/// Borrow into the low nibble, derived from the pre-operation value and
/// the result.
#[inline]
fn half_carry_on_sub(op1: u8, result: u8) -> bool {
    (result & !op1) & 0xf != 0
}

/// Execution state of the engine. `Halted` is terminal within a run;
/// stepping a halted cpu is a no-op costing zero cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuState {
    Running,
    Halted,
}

/// Diagnostic captured when an undefined opcode halts the engine.
///
/// `pc` identifies the first byte of the faulting instruction (the 0xCB
/// byte for prefixed opcodes). `executed_instructions` counts the
/// instructions retired before the fault; the fault itself is excluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HaltReason {
    pub pc: u16,
    pub opcode: u8,
    pub prefixed: bool,
    pub executed_instructions: u64,
}

/// Snapshot of the register file in its paired 16-bit views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuRegisters {
    pub af: u16,
    pub bc: u16,
    pub de: u16,
    pub hl: u16,
    pub sp: u16,
    pub pc: u16,
}

pub struct Cpu {
    reg_a: u8,
    reg_b: u8,
    reg_c: u8,
    reg_d: u8,
    reg_e: u8,
    reg_h: u8,
    reg_l: u8,
    reg_f: CpuFlags,

    reg_sp: u16,

    reg_pc: u16,

    ime: bool,

    state: CpuState,
    executed_instructions: u64,
    halt_reason: Option<HaltReason>,

    trace_sinks: Vec<Box<dyn TraceSink>>,
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            reg_a: 0,
            reg_b: 0,
            reg_c: 0,
            reg_d: 0,
            reg_e: 0,
            reg_h: 0,
            reg_l: 0,
            reg_f: CpuFlags::from_bits_truncate(0),
            reg_sp: 0,
            reg_pc: 0,

            ime: false,

            state: CpuState::Running,
            executed_instructions: 0,
            halt_reason: None,

            trace_sinks: Vec::new(),
        };

        cpu.reset();

        cpu
    }

    /// Executes one step: an interrupt dispatch or a single instruction.
    /// Returns the elapsed T-states, `0` once the engine is halted.
    pub fn step<P: CpuBusProvider>(&mut self, bus: &mut P) -> u32 {
        if self.state == CpuState::Halted {
            return 0;
        }

        if self.ime {
            if let Some(interrupt) = bus.take_interrupt() {
                return self.dispatch_interrupt(interrupt, bus);
            }
        }

        let pc = self.reg_pc;
        let mut opcode = bus.read(pc);
        let mut prefixed = false;
        let mut instruction = Instruction::from_byte(opcode, pc);

        if instruction.opcode == Opcode::Illegal {
            // leave pc at the opcode so the driver can inspect it
            self.fatal_halt(pc, opcode, prefixed);
            return 0;
        }

        self.reg_pc = self.reg_pc.wrapping_add(1);

        if instruction.opcode == Opcode::Prefix {
            opcode = self.fetch_next_pc(bus);
            prefixed = true;
            instruction = Instruction::from_prefix(opcode, pc);

            if instruction.opcode == Opcode::Illegal {
                self.fatal_halt(pc, opcode, prefixed);
                return 0;
            }
        }

        let before = self.registers();
        let (cycles, operand) = self.exec_instruction(instruction, bus);
        self.executed_instructions += 1;

        if !self.trace_sinks.is_empty() {
            let event = TraceEvent {
                pc,
                opcode,
                prefixed,
                operand,
                mnemonic: instruction.mnemonic,
                before,
                after: self.registers(),
                cycles,
            };

            for sink in self.trace_sinks.iter_mut() {
                sink.instruction_executed(&event);
            }
        }

        cycles
    }

    pub fn state(&self) -> CpuState {
        self.state
    }

    pub fn halt_reason(&self) -> Option<HaltReason> {
        self.halt_reason
    }

    pub fn executed_instructions(&self) -> u64 {
        self.executed_instructions
    }

    pub fn registers(&self) -> CpuRegisters {
        CpuRegisters {
            af: self.reg_af_read(),
            bc: self.reg_bc_read(),
            de: self.reg_de_read(),
            hl: self.reg_hl_read(),
            sp: self.reg_sp,
            pc: self.reg_pc,
        }
    }

    pub fn add_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.trace_sinks.push(sink);
    }
}

impl Cpu {
    fn reset(&mut self) {
        // initial values of the registers (DMG)
        self.reg_af_write(0x01B0);
        self.reg_bc_write(0x0013);
        self.reg_de_write(0x00D8);
        self.reg_hl_write(0x014D);
        self.reg_sp = 0xFFFE;
        self.reg_pc = 0x0100;
    }

    #[inline]
    fn reg_af_read(&self) -> u16 {
        (self.reg_a as u16) << 8 | self.reg_f.bits() as u16
    }

    #[inline]
    fn reg_bc_read(&self) -> u16 {
        (self.reg_b as u16) << 8 | self.reg_c as u16
    }

    #[inline]
    fn reg_de_read(&self) -> u16 {
        (self.reg_d as u16) << 8 | self.reg_e as u16
    }

    #[inline]
    fn reg_hl_read(&self) -> u16 {
        (self.reg_h as u16) << 8 | self.reg_l as u16
    }

    #[inline]
    fn reg_af_write(&mut self, data: u16) {
        self.reg_a = (data >> 8) as u8;
        self.reg_f
            .clone_from(&CpuFlags::from_bits_truncate(data as u8));
    }

    #[inline]
    fn reg_bc_write(&mut self, data: u16) {
        self.reg_b = (data >> 8) as u8;
        self.reg_c = data as u8;
    }

    #[inline]
    fn reg_de_write(&mut self, data: u16) {
        self.reg_d = (data >> 8) as u8;
        self.reg_e = data as u8;
    }

    #[inline]
    fn reg_hl_write(&mut self, data: u16) {
        self.reg_h = (data >> 8) as u8;
        self.reg_l = data as u8;
    }

    #[inline]
    fn flag_get(&self, flag: CpuFlags) -> bool {
        self.reg_f.intersects(flag)
    }

    #[inline]
    fn flag_set(&mut self, flag: CpuFlags, value: bool) {
        self.reg_f.set(flag, value);
    }

    fn fetch_next_pc<P: CpuBusProvider>(&mut self, bus: &mut P) -> u8 {
        let result = bus.read(self.reg_pc);
        self.reg_pc = self.reg_pc.wrapping_add(1);
        result
    }

    fn read_operand<P: CpuBusProvider>(&mut self, ty: OperandType, bus: &mut P) -> u16 {
        match ty {
            OperandType::RegA => self.reg_a as u16,
            OperandType::RegB => self.reg_b as u16,
            OperandType::RegC => self.reg_c as u16,
            OperandType::RegD => self.reg_d as u16,
            OperandType::RegE => self.reg_e as u16,
            OperandType::RegH => self.reg_h as u16,
            OperandType::RegL => self.reg_l as u16,
            OperandType::AddrHL => bus.read(self.reg_hl_read()) as u16,
            OperandType::AddrHLDec => {
                let hl = self.reg_hl_read();
                let result = bus.read(hl) as u16;
                self.reg_hl_write(hl.wrapping_sub(1));
                result
            }
            OperandType::AddrHLInc => {
                let hl = self.reg_hl_read();
                let result = bus.read(hl) as u16;
                self.reg_hl_write(hl.wrapping_add(1));
                result
            }
            OperandType::AddrDE => bus.read(self.reg_de_read()) as u16,
            OperandType::RegAF => self.reg_af_read(),
            OperandType::RegBC => self.reg_bc_read(),
            OperandType::RegDE => self.reg_de_read(),
            OperandType::RegHL => self.reg_hl_read(),
            OperandType::RegSP => self.reg_sp,
            OperandType::Imm8 => self.fetch_next_pc(bus) as u16,
            OperandType::Imm8Signed => self.fetch_next_pc(bus) as i8 as i16 as u16,
            OperandType::Imm16 => {
                (self.fetch_next_pc(bus) as u16) | ((self.fetch_next_pc(bus) as u16) << 8)
            }
            OperandType::HighAddr8 => {
                let addr = 0xFF00 | self.fetch_next_pc(bus) as u16;
                bus.read(addr) as u16
            }
            OperandType::HighAddrC => bus.read(0xFF00 | self.reg_c as u16) as u16,
            OperandType::Addr16 => {
                let addr =
                    (self.fetch_next_pc(bus) as u16) | ((self.fetch_next_pc(bus) as u16) << 8);
                bus.read(addr) as u16
            }
            OperandType::Implied => 0,
        }
    }

    fn write_operand<P: CpuBusProvider>(&mut self, ty: OperandType, data: u16, bus: &mut P) {
        match ty {
            OperandType::RegA => self.reg_a = data as u8,
            OperandType::RegB => self.reg_b = data as u8,
            OperandType::RegC => self.reg_c = data as u8,
            OperandType::RegD => self.reg_d = data as u8,
            OperandType::RegE => self.reg_e = data as u8,
            OperandType::RegH => self.reg_h = data as u8,
            OperandType::RegL => self.reg_l = data as u8,
            OperandType::AddrHL => bus.write(self.reg_hl_read(), data as u8),
            OperandType::AddrHLDec => {
                let hl = self.reg_hl_read();
                bus.write(hl, data as u8);
                self.reg_hl_write(hl.wrapping_sub(1));
            }
            OperandType::AddrHLInc => {
                let hl = self.reg_hl_read();
                bus.write(hl, data as u8);
                self.reg_hl_write(hl.wrapping_add(1));
            }
            OperandType::AddrDE => bus.write(self.reg_de_read(), data as u8),
            OperandType::RegAF => self.reg_af_write(data),
            OperandType::RegBC => self.reg_bc_write(data),
            OperandType::RegDE => self.reg_de_write(data),
            OperandType::RegHL => self.reg_hl_write(data),
            OperandType::RegSP => self.reg_sp = data,
            OperandType::HighAddr8 => {
                let addr = 0xFF00 | self.fetch_next_pc(bus) as u16;
                bus.write(addr, data as u8);
            }
            OperandType::HighAddrC => bus.write(0xFF00 | self.reg_c as u16, data as u8),
            OperandType::Addr16 => {
                let addr =
                    (self.fetch_next_pc(bus) as u16) | ((self.fetch_next_pc(bus) as u16) << 8);
                bus.write(addr, data as u8);
            }
            OperandType::Implied => {}
            OperandType::Imm16 | OperandType::Imm8 | OperandType::Imm8Signed => unreachable!(),
        }
    }

    fn stack_push<P: CpuBusProvider>(&mut self, data: u16, bus: &mut P) {
        self.reg_sp = self.reg_sp.wrapping_sub(2);
        bus.write_u16(self.reg_sp, data);
    }

    fn stack_pop<P: CpuBusProvider>(&mut self, bus: &mut P) -> u16 {
        let result = bus.read_u16(self.reg_sp);
        self.reg_sp = self.reg_sp.wrapping_add(2);
        result
    }

    fn check_cond(&self, cond: Condition) -> bool {
        match cond {
            Condition::NC => !self.flag_get(CpuFlags::C),
            Condition::NZ => !self.flag_get(CpuFlags::Z),
            Condition::Z => self.flag_get(CpuFlags::Z),
            Condition::Unconditional => true,
        }
    }

    fn dispatch_interrupt<P: CpuBusProvider>(
        &mut self,
        interrupt: InterruptType,
        bus: &mut P,
    ) -> u32 {
        self.ime = false;
        self.stack_push(self.reg_pc, bus);
        self.reg_pc = interrupt.vector();

        INTERRUPT_DISPATCH_CYCLES
    }

    fn fatal_halt(&mut self, pc: u16, opcode: u8, prefixed: bool) {
        self.state = CpuState::Halted;
        self.halt_reason = Some(HaltReason {
            pc,
            opcode,
            prefixed,
            executed_instructions: self.executed_instructions,
        });

        log::warn!(
            "undefined {}opcode 0x{:02X} at 0x{:04X} after {} executed instructions",
            if prefixed { "prefixed " } else { "" },
            opcode,
            pc,
            self.executed_instructions,
        );
    }

    /// Executes a decoded instruction and returns `(cycles, operand)`,
    /// where `operand` is the raw word read from the source operand.
    fn exec_instruction<P: CpuBusProvider>(
        &mut self,
        instruction: Instruction,
        bus: &mut P,
    ) -> (u32, u16) {
        let src = self.read_operand(instruction.src, bus);
        let mut cycles = instruction.cycles.0 as u32;

        let result = match instruction.opcode {
            Opcode::Nop => 0,
            Opcode::Ld => src,
            Opcode::Push => {
                self.stack_push(src, bus);
                0
            }
            Opcode::Pop => self.stack_pop(bus),
            Opcode::Inc16 => src.wrapping_add(1),
            Opcode::Inc => {
                let result = src.wrapping_add(1) & 0xFF;

                self.flag_set(CpuFlags::Z, result == 0);
                self.flag_set(CpuFlags::N, false);
                self.flag_set(CpuFlags::H, half_carry_on_add(src as u8, 1));

                result
            }
            Opcode::Dec16 => src.wrapping_sub(1),
            Opcode::Dec => {
                let result = src.wrapping_sub(1) & 0xFF;

                self.flag_set(CpuFlags::Z, result == 0);
                self.flag_set(CpuFlags::N, true);
                self.flag_set(CpuFlags::H, half_carry_on_sub(src as u8, result as u8));

                result
            }
            Opcode::Add => {
                let dest = self.read_operand(instruction.dest, bus);
                let result = dest.wrapping_add(src) & 0xFF;

                self.reg_f = CpuFlags::empty();
                self.flag_set(CpuFlags::H, half_carry_on_add(dest as u8, src as u8));
                self.flag_set(CpuFlags::C, dest + src > 0xFF);
                self.flag_set(CpuFlags::Z, result == 0);

                result
            }
            Opcode::Add16 => {
                // 16-bit pair addition updates no flags here
                let dest = self.read_operand(instruction.dest, bus);
                dest.wrapping_add(src)
            }
            Opcode::Cp => {
                let diff = (self.reg_a as i16) - (src as i16);

                self.flag_set(CpuFlags::N, true);
                self.flag_set(CpuFlags::Z, diff == 0);
                self.flag_set(CpuFlags::H, half_carry_on_sub(self.reg_a, diff as u8));
                self.flag_set(CpuFlags::C, diff < 0);

                0
            }
            Opcode::And => {
                let dest = self.read_operand(instruction.dest, bus);
                let result = dest & src & 0xFF;

                self.reg_f = CpuFlags::empty();
                self.flag_set(CpuFlags::H, true);
                self.flag_set(CpuFlags::Z, result == 0);

                result
            }
            Opcode::Xor => {
                let dest = self.read_operand(instruction.dest, bus);
                let result = (dest ^ src) & 0xFF;

                self.reg_f = CpuFlags::empty();
                self.flag_set(CpuFlags::Z, result == 0);

                result
            }
            Opcode::Or => {
                let dest = self.read_operand(instruction.dest, bus);
                let result = (dest | src) & 0xFF;

                self.reg_f = CpuFlags::empty();
                self.flag_set(CpuFlags::Z, result == 0);

                result
            }
            Opcode::Cpl => {
                self.reg_a = !self.reg_a;

                self.flag_set(CpuFlags::N, true);
                self.flag_set(CpuFlags::H, true);

                0
            }
            Opcode::Ccf => {
                self.flag_set(CpuFlags::N, false);
                self.flag_set(CpuFlags::H, false);
                self.flag_set(CpuFlags::C, !self.flag_get(CpuFlags::C));

                0
            }
            Opcode::Jp(cond) => {
                if self.check_cond(cond) {
                    self.reg_pc = src;
                } else {
                    cycles = instruction.cycles.1 as u32;
                }
                0
            }
            Opcode::Jr(cond) => {
                if self.check_cond(cond) {
                    self.reg_pc = self.reg_pc.wrapping_add(src);
                } else {
                    cycles = instruction.cycles.1 as u32;
                }
                0
            }
            Opcode::Call(cond) => {
                if self.check_cond(cond) {
                    self.stack_push(self.reg_pc, bus);
                    self.reg_pc = src;
                } else {
                    cycles = instruction.cycles.1 as u32;
                }
                0
            }
            Opcode::Ret(cond) => {
                if self.check_cond(cond) {
                    self.reg_pc = self.stack_pop(bus);
                } else {
                    cycles = instruction.cycles.1 as u32;
                }
                0
            }
            Opcode::Rst(loc) => {
                self.stack_push(self.reg_pc, bus);
                self.reg_pc = loc as u16;
                0
            }
            Opcode::Di => {
                self.ime = false;
                0
            }
            Opcode::Ei => {
                self.ime = true;
                0
            }
            Opcode::Swap => {
                let result = ((src >> 4) & 0xF) | ((src & 0xF) << 4);

                self.reg_f = CpuFlags::empty();
                self.flag_set(CpuFlags::Z, result == 0);

                result
            }
            Opcode::Res(bit) => src & !((1 << bit) as u16),
            Opcode::Prefix | Opcode::Illegal => unreachable!(),
        };

        self.write_operand(instruction.dest, result, bus);

        (cycles, src)
    }
}
