use crate::cpu::CpuRegisters;

/// A record of one executed instruction. `before` and `after` are the
/// register snapshots around execution, `operand` is the raw word read
/// from the source operand.
///
/// For prefixed instructions `opcode` holds the second byte and `pc`
/// the address of the prefix.
#[derive(Clone, Copy, Debug)]
pub struct TraceEvent {
    pub pc: u16,
    pub opcode: u8,
    pub prefixed: bool,
    pub operand: u16,
    pub mnemonic: &'static str,
    pub before: CpuRegisters,
    pub after: CpuRegisters,
    pub cycles: u32,
}

/// Receives one event per executed instruction. Events are only built
/// when at least one sink is attached, so an idle machine pays nothing.
pub trait TraceSink {
    fn instruction_executed(&mut self, event: &TraceEvent);
}

/// Sink that forwards every event to the `log` crate at trace level.
pub struct LogTraceSink;

impl TraceSink for LogTraceSink {
    fn instruction_executed(&mut self, event: &TraceEvent) {
        log::trace!(
            "0x{:04X}: {:<15} AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} ({} cycles)",
            event.pc,
            event.mnemonic,
            event.after.af,
            event.after.bc,
            event.after.de,
            event.after.hl,
            event.after.sp,
            event.cycles,
        );
    }
}
