mod cartridge;
mod cpu;
mod display;
mod memory;
mod timer;
mod trace;

#[cfg(test)]
mod tests;

pub use cartridge::{CartridgeError, CartridgeHeader, CgbMode};
pub use cpu::instruction::{Condition, Instruction, Opcode, OperandType};
pub use cpu::{Cpu, CpuBusProvider, CpuRegisters, CpuState, HaltReason};
pub use display::{DisplayTiming, DEFAULT_SCANLINE_CYCLES};
pub use memory::{regs, Bus, InterruptManager, InterruptType, MEMORY_SIZE, ROM_BANK_SIZE};
pub use timer::Timer;
pub use trace::{LogTraceSink, TraceEvent, TraceSink};

#[derive(Debug, Clone, Copy)]
pub struct GameboyConfig {
    /// Cycles per scanline for the display timing unit.
    pub scanline_cycles: u32,
}

impl Default for GameboyConfig {
    fn default() -> Self {
        Self {
            scanline_cycles: DEFAULT_SCANLINE_CYCLES,
        }
    }
}

pub struct GameBoy {
    cpu: Cpu,
    bus: Bus,
    timer: Timer,
    display: DisplayTiming,
}

impl GameBoy {
    pub fn new(config: GameboyConfig) -> Self {
        Self {
            cpu: Cpu::new(),
            bus: Bus::default(),
            timer: Timer::default(),
            display: DisplayTiming::new(config.scanline_cycles),
        }
    }

    /// Runs one machine iteration and returns the elapsed cycles: the
    /// cpu executes one instruction (or dispatches one interrupt), then
    /// the peripherals observe the cycle count, timer first.
    pub fn step(&mut self) -> u32 {
        let cycles = self.cpu.step(&mut self.bus);
        self.timer.advance(cycles, &mut self.bus);
        self.display.advance(cycles, &mut self.bus);
        cycles
    }

    /// Steps until at least `target` cycles have elapsed or the engine
    /// halts, returning the consumed count.
    pub fn clock_for_cycles(&mut self, target: u32) -> u32 {
        let mut consumed = 0;
        while consumed < target {
            if !self.is_running() {
                break;
            }
            consumed += self.step();
        }
        consumed
    }

    pub fn is_running(&self) -> bool {
        self.cpu.state() == CpuState::Running
    }

    pub fn registers(&self) -> CpuRegisters {
        self.cpu.registers()
    }

    pub fn executed_instructions(&self) -> u64 {
        self.cpu.executed_instructions()
    }

    pub fn halt_reason(&self) -> Option<HaltReason> {
        self.cpu.halt_reason()
    }

    pub fn add_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.cpu.add_trace_sink(sink);
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn cartridge_header(&self) -> Result<CartridgeHeader, CartridgeError> {
        CartridgeHeader::from_bus(&self.bus)
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new(GameboyConfig::default())
    }
}
