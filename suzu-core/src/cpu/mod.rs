mod cpu;
pub mod instruction;
mod instructions_table;

pub use cpu::{Cpu, CpuRegisters, CpuState, HaltReason};

use crate::memory::InterruptType;

/// The cpu's view of the rest of the machine: byte and word access to
/// the address space, plus interrupt hand-off.
///
/// `take_interrupt` returns the highest-priority source that is both
/// requested and enabled, clearing its request bit, or `None`. It is
/// the only operation that clears request bits.
pub trait CpuBusProvider {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);

    fn read_u16(&mut self, addr: u16) -> u16;
    fn write_u16(&mut self, addr: u16, data: u16);

    fn take_interrupt(&mut self) -> Option<InterruptType>;
}
