#![cfg(test)]

use super::memory::{regs, InterruptManager, InterruptType};
use super::trace::{TraceEvent, TraceSink};
use super::{GameBoy, GameboyConfig};

use std::cell::RefCell;
use std::rc::Rc;

fn machine_with_program(program: &[u8]) -> GameBoy {
    let mut gb = GameBoy::default();
    gb.bus_mut().write_bytes(0x0100, program);
    gb
}

struct CollectingSink(Rc<RefCell<Vec<TraceEvent>>>);

impl TraceSink for CollectingSink {
    fn instruction_executed(&mut self, event: &TraceEvent) {
        self.0.borrow_mut().push(*event);
    }
}

#[test]
fn power_on_machine_is_running() {
    let gb = GameBoy::default();

    assert!(gb.is_running());
    assert_eq!(gb.registers().pc, 0x0100);
    assert_eq!(gb.executed_instructions(), 0);
    assert_eq!(gb.halt_reason(), None);
}

#[test]
fn push_pop_round_trip_restores_sp() {
    // LD BC, 0x1234; PUSH BC; LD BC, 0x0000; POP BC
    let mut gb = machine_with_program(&[0x01, 0x34, 0x12, 0xC5, 0x01, 0x00, 0x00, 0xC1]);

    gb.step();
    assert_eq!(gb.registers().bc, 0x1234);

    gb.step();
    assert_eq!(gb.registers().sp, 0xFFFC);

    gb.step();
    assert_eq!(gb.registers().bc, 0x0000);

    gb.step();
    assert_eq!(gb.registers().bc, 0x1234);
    assert_eq!(gb.registers().sp, 0xFFFE);
}

#[test]
fn jr_self_loop_spins_in_place() {
    let mut gb = machine_with_program(&[0x18, 0xFE]);

    for _ in 0..3 {
        assert_eq!(gb.step(), 12);
        assert_eq!(gb.registers().pc, 0x0100);
    }
    assert!(gb.is_running());
    assert_eq!(gb.executed_instructions(), 3);
}

#[test]
fn countdown_loop_runs_to_completion() {
    // LD B, 3; then DEC B / JR NZ back to the DEC until B hits zero,
    // falling through into an undefined opcode
    let mut gb = machine_with_program(&[0x06, 0x03, 0x05, 0x20, 0xFD, 0xD3]);

    let consumed = gb.clock_for_cycles(1000);

    assert_eq!(consumed, 52);
    assert!(!gb.is_running());
    assert_eq!(gb.executed_instructions(), 7);

    let reason = gb.halt_reason().expect("the machine halted");
    assert_eq!(reason.pc, 0x0105);
    assert_eq!(reason.opcode, 0xD3);
}

#[test]
fn undefined_opcode_halts_the_machine() {
    let mut gb = machine_with_program(&[0x00, 0x00, 0xD3]);

    gb.step();
    gb.step();
    assert_eq!(gb.step(), 0);

    assert!(!gb.is_running());
    assert_eq!(gb.executed_instructions(), 2);

    let reason = gb.halt_reason().expect("the machine halted");
    assert_eq!(reason.pc, 0x0102);
    assert_eq!(reason.opcode, 0xD3);
    assert!(!reason.prefixed);
    assert_eq!(reason.executed_instructions, 2);

    // a halted machine steps for free and stays halted
    assert_eq!(gb.step(), 0);
    assert!(!gb.is_running());
}

#[test]
fn undefined_prefixed_opcode_reports_the_prefix_address() {
    let mut gb = machine_with_program(&[0xCB, 0x00]);

    assert_eq!(gb.step(), 0);

    let reason = gb.halt_reason().expect("the machine halted");
    assert_eq!(reason.pc, 0x0100);
    assert_eq!(reason.opcode, 0x00);
    assert!(reason.prefixed);
    assert_eq!(gb.registers().pc, 0x0102);
}

#[test]
fn interrupt_dispatch_through_the_machine() {
    let mut gb = machine_with_program(&[0xFB, 0x00]);

    gb.step();
    gb.bus_mut().write(regs::IE, 0x01);
    gb.bus_mut().request_interrupt(InterruptType::Vblank);

    assert_eq!(gb.step(), 20);
    assert_eq!(gb.registers().pc, 0x0040);
    assert_eq!(gb.registers().sp, 0xFFFC);
    assert_eq!(gb.bus().read_u16(0xFFFC), 0x0101);
    assert_eq!(gb.bus().read(regs::IF) & 0x01, 0);
}

#[test]
fn clock_for_cycles_consumes_at_least_the_target() {
    // zeroed memory executes as NOPs
    let mut gb = GameBoy::default();

    assert_eq!(gb.clock_for_cycles(10), 12);
    assert_eq!(gb.executed_instructions(), 3);
}

#[test]
fn clock_for_cycles_stops_at_a_halt() {
    let mut gb = machine_with_program(&[0x00, 0xD3]);

    assert_eq!(gb.clock_for_cycles(100), 4);
    assert_eq!(gb.executed_instructions(), 1);
    assert!(!gb.is_running());

    // no more progress once halted
    assert_eq!(gb.clock_for_cycles(100), 0);
}

#[test]
fn trace_sinks_observe_executed_instructions() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut gb = machine_with_program(&[0x3E, 0x55, 0xD3]);
    gb.add_trace_sink(Box::new(CollectingSink(events.clone())));

    gb.step();

    {
        let events = events.borrow();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.pc, 0x0100);
        assert_eq!(event.opcode, 0x3E);
        assert!(!event.prefixed);
        assert_eq!(event.operand, 0x55);
        assert_eq!(event.mnemonic, "LD A, nn");
        assert_eq!(event.cycles, 8);
        assert_eq!(event.before.af, 0x01B0);
        assert_eq!(event.after.af, 0x55B0);
        assert_eq!(event.after.pc, 0x0102);
    }

    // the faulting instruction produces no event
    gb.step();
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn each_step_feeds_the_peripherals() {
    let mut gb = GameBoy::default();
    // timer on, counting every 16 cycles
    gb.bus_mut().write(regs::TAC, 0b101);

    for _ in 0..4 {
        gb.step();
    }

    assert_eq!(gb.bus().read(regs::TIMA), 1);
    assert_eq!(gb.bus().read(regs::LY), 1);
}

#[test]
fn custom_scanline_cycles_change_the_line_rate() {
    let mut gb = GameBoy::new(GameboyConfig { scanline_cycles: 8 });

    gb.step();
    assert_eq!(gb.bus().read(regs::LY), 0);

    gb.step();
    assert_eq!(gb.bus().read(regs::LY), 1);
}

#[test]
fn cartridge_header_reads_from_the_bus() {
    let mut gb = GameBoy::default();
    {
        let bus = gb.bus_mut();
        bus.write_bytes(0x0134, b"SUZU CORE");
        bus.write(0x0143, 0x80);
        bus.write(0x0147, 0x01);
        bus.write(0x0148, 0x02);
        bus.write(0x0149, 0x03);
    }

    let header = gb.cartridge_header().expect("a valid header");
    assert_eq!(header.title, "SUZU CORE");
    assert_eq!(header.rom_banks, 8);
    assert_eq!(header.ram_banks, 4);
}
