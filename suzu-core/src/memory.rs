mod interrupts;

pub use interrupts::{InterruptManager, InterruptType};

use crate::cpu::CpuBusProvider;
use byteorder::{ByteOrder, LittleEndian};

pub const MEMORY_SIZE: usize = 0x10000;
pub const ROM_BANK_SIZE: usize = 0x4000;

/// Addresses of the memory mapped hardware registers.
pub mod regs {
    pub const DIV: u16 = 0xFF04;
    pub const TIMA: u16 = 0xFF05;
    pub const TMA: u16 = 0xFF06;
    pub const TAC: u16 = 0xFF07;
    pub const IF: u16 = 0xFF0F;
    pub const NR10: u16 = 0xFF10;
    pub const NR11: u16 = 0xFF11;
    pub const NR12: u16 = 0xFF12;
    pub const NR14: u16 = 0xFF14;
    pub const NR21: u16 = 0xFF16;
    pub const NR22: u16 = 0xFF17;
    pub const NR24: u16 = 0xFF19;
    pub const NR30: u16 = 0xFF1A;
    pub const NR31: u16 = 0xFF1B;
    pub const NR32: u16 = 0xFF1C;
    pub const NR34: u16 = 0xFF1E;
    pub const NR41: u16 = 0xFF20;
    pub const NR42: u16 = 0xFF21;
    pub const NR43: u16 = 0xFF22;
    pub const NR44: u16 = 0xFF23;
    pub const NR50: u16 = 0xFF24;
    pub const NR51: u16 = 0xFF25;
    pub const NR52: u16 = 0xFF26;
    pub const LCDC: u16 = 0xFF40;
    pub const STAT: u16 = 0xFF41;
    pub const SCY: u16 = 0xFF42;
    pub const SCX: u16 = 0xFF43;
    pub const LY: u16 = 0xFF44;
    pub const LYC: u16 = 0xFF45;
    pub const BGP: u16 = 0xFF47;
    pub const OBP0: u16 = 0xFF48;
    pub const OBP1: u16 = 0xFF49;
    pub const WY: u16 = 0xFF4A;
    pub const WX: u16 = 0xFF4B;
    pub const IE: u16 = 0xFFFF;
}

/// Hardware register values as the DMG boot rom leaves them.
const POWER_ON_DEFAULTS: [(u16, u8); 31] = [
    (regs::TIMA, 0x00),
    (regs::TMA, 0x00),
    (regs::TAC, 0x00),
    (regs::NR10, 0x80),
    (regs::NR11, 0xBF),
    (regs::NR12, 0xF3),
    (regs::NR14, 0xBF),
    (regs::NR21, 0x3F),
    (regs::NR22, 0x00),
    (regs::NR24, 0xBF),
    (regs::NR30, 0x7F),
    (regs::NR31, 0xFF),
    (regs::NR32, 0x9F),
    (regs::NR34, 0xBF),
    (regs::NR41, 0xFF),
    (regs::NR42, 0x00),
    (regs::NR43, 0x00),
    (regs::NR44, 0xBF),
    (regs::NR50, 0x77),
    (regs::NR51, 0xF3),
    (regs::NR52, 0xF1),
    (regs::LCDC, 0x91),
    (regs::SCY, 0x00),
    (regs::SCX, 0x00),
    (regs::LYC, 0x00),
    (regs::BGP, 0xFC),
    (regs::OBP0, 0xFF),
    (regs::OBP1, 0xFF),
    (regs::WY, 0x00),
    (regs::WX, 0x00),
    (regs::IE, 0x00),
];

/// A flat 64KB memory bus.
///
/// Every address is backed by plain storage, including rom, vram and the
/// hardware registers, so peripherals exchange state by reading and
/// writing the shared register bytes.
pub struct Bus {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl Default for Bus {
    fn default() -> Self {
        let mut bus = Self {
            data: Box::new([0; MEMORY_SIZE]),
        };

        for &(addr, value) in POWER_ON_DEFAULTS.iter() {
            bus.data[addr as usize] = value;
        }

        bus
    }
}

impl Bus {
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    pub fn write(&mut self, addr: u16, data: u8) {
        self.data[addr as usize] = data;
    }

    /// Fills `buf` starting from `addr`. Spans that do not fit below the
    /// top of the address space leave `buf` untouched.
    pub fn read_bytes(&self, addr: u16, buf: &mut [u8]) {
        let start = addr as usize;
        if start + buf.len() >= MEMORY_SIZE {
            return;
        }

        buf.copy_from_slice(&self.data[start..start + buf.len()]);
    }

    /// Copies `data` into memory starting from `addr`. Spans that do not
    /// fit below the top of the address space are dropped entirely.
    pub fn write_bytes(&mut self, addr: u16, data: &[u8]) {
        let start = addr as usize;
        if start + data.len() >= MEMORY_SIZE {
            return;
        }

        self.data[start..start + data.len()].copy_from_slice(data);
    }

    pub fn read_u16(&self, addr: u16) -> u16 {
        let mut buf = [0; 2];
        self.read_bytes(addr, &mut buf);
        LittleEndian::read_u16(&buf)
    }

    pub fn write_u16(&mut self, addr: u16, data: u16) {
        let mut buf = [0; 2];
        LittleEndian::write_u16(&mut buf, data);
        self.write_bytes(addr, &buf);
    }

    /// Reads one bit of a hardware register. Bits outside 0..=7 read as
    /// false.
    pub fn get_bit(&self, addr: u16, bit: u8) -> bool {
        if bit > 7 {
            return false;
        }

        (self.data[addr as usize] >> bit) & 1 == 1
    }

    /// Sets or clears one bit of a hardware register. Bits outside 0..=7
    /// are ignored.
    pub fn set_bit(&mut self, addr: u16, bit: u8, value: bool) {
        if bit > 7 {
            return;
        }

        let mask = 1 << bit;
        if value {
            self.data[addr as usize] |= mask;
        } else {
            self.data[addr as usize] &= !mask;
        }
    }

    /// Renders `len` bytes starting at `addr` as rows of 16 bytes,
    /// grouped in pairs. Out of range spans render as an empty string.
    pub fn hex_dump(&self, addr: u16, len: u16) -> String {
        let start = addr as usize;
        if start + len as usize >= MEMORY_SIZE {
            return String::new();
        }

        let mut out = String::new();
        for (row, chunk) in self.data[start..start + len as usize].chunks(16).enumerate() {
            out.push_str(&format!("0x{:04x}:", start + row * 16));
            for (col, byte) in chunk.iter().enumerate() {
                if col % 2 == 0 {
                    out.push(' ');
                }
                out.push_str(&format!("{:02x}", byte));
            }
            out.push('\n');
        }
        out
    }

    fn pending_interrupts(&self) -> u8 {
        self.data[regs::IF as usize] & self.data[regs::IE as usize] & 0x1F
    }
}

impl InterruptManager for Bus {
    fn request_interrupt(&mut self, interrupt: InterruptType) {
        let flag = interrupts::InterruptsFlags::from(interrupt);
        self.data[regs::IF as usize] |= flag.bits();
    }
}

impl CpuBusProvider for Bus {
    fn read(&mut self, addr: u16) -> u8 {
        Bus::read(self, addr)
    }

    fn write(&mut self, addr: u16, data: u8) {
        Bus::write(self, addr, data);
    }

    fn read_u16(&mut self, addr: u16) -> u16 {
        Bus::read_u16(self, addr)
    }

    fn write_u16(&mut self, addr: u16, data: u16) {
        Bus::write_u16(self, addr, data);
    }

    fn take_interrupt(&mut self) -> Option<InterruptType> {
        let interrupt = interrupts::next_pending(self.pending_interrupts())?;
        let flag = interrupts::InterruptsFlags::from(interrupt);
        self.data[regs::IF as usize] &= !flag.bits();
        Some(interrupt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_on_register_values() {
        let bus = Bus::default();

        assert_eq!(bus.read(regs::TIMA), 0x00);
        assert_eq!(bus.read(regs::TAC), 0x00);
        assert_eq!(bus.read(regs::NR12), 0xF3);
        assert_eq!(bus.read(regs::NR52), 0xF1);
        assert_eq!(bus.read(regs::LCDC), 0x91);
        assert_eq!(bus.read(regs::BGP), 0xFC);
        assert_eq!(bus.read(regs::OBP0), 0xFF);
        assert_eq!(bus.read(regs::LY), 0x00);
        assert_eq!(bus.read(regs::IF), 0x00);
        assert_eq!(bus.read(regs::IE), 0x00);
    }

    #[test]
    fn bulk_operations_roundtrip() {
        let mut bus = Bus::default();

        bus.write_bytes(0x8000, &[0xDE, 0xAD, 0xBE, 0xEF]);

        let mut buf = [0; 4];
        bus.read_bytes(0x8000, &mut buf);
        assert_eq!(buf, [0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn bulk_operations_out_of_range_are_dropped() {
        let mut bus = Bus::default();

        // 0xFFFE + 2 hits the top of the address space
        bus.write_bytes(0xFFFE, &[0xAA, 0xBB]);
        assert_eq!(bus.read(0xFFFE), 0x00);
        assert_eq!(bus.read(0xFFFF), 0x00);

        bus.write(0xFFFE, 0x12);
        bus.write(0xFFFF, 0x34);
        let mut buf = [0; 2];
        bus.read_bytes(0xFFFE, &mut buf);
        assert_eq!(buf, [0, 0]);
    }

    #[test]
    fn single_byte_reaches_the_last_address() {
        let mut bus = Bus::default();

        bus.write(0xFFFF, 0x1F);
        assert_eq!(bus.read(0xFFFF), 0x1F);
    }

    #[test]
    fn word_operations_are_little_endian() {
        let mut bus = Bus::default();

        bus.write_u16(0xC000, 0xBEEF);
        assert_eq!(bus.read(0xC000), 0xEF);
        assert_eq!(bus.read(0xC001), 0xBE);
        assert_eq!(bus.read_u16(0xC000), 0xBEEF);
    }

    #[test]
    fn word_operations_follow_the_bulk_range_rule() {
        let mut bus = Bus::default();

        bus.write(0xFFFE, 0x12);
        bus.write(0xFFFF, 0x34);
        assert_eq!(bus.read_u16(0xFFFE), 0);

        bus.write_u16(0xFFFE, 0xABCD);
        assert_eq!(bus.read(0xFFFE), 0x12);
        assert_eq!(bus.read(0xFFFF), 0x34);
    }

    #[test]
    fn bit_accessors() {
        let mut bus = Bus::default();

        bus.set_bit(regs::STAT, 2, true);
        assert_eq!(bus.read(regs::STAT), 0b100);
        assert!(bus.get_bit(regs::STAT, 2));

        bus.set_bit(regs::STAT, 2, false);
        assert_eq!(bus.read(regs::STAT), 0);
        assert!(!bus.get_bit(regs::STAT, 2));
    }

    #[test]
    fn bit_accessors_ignore_out_of_range_bits() {
        let mut bus = Bus::default();

        bus.write(0xC000, 0xFF);
        assert!(!bus.get_bit(0xC000, 8));

        bus.set_bit(0xC000, 8, false);
        assert_eq!(bus.read(0xC000), 0xFF);
    }

    #[test]
    fn interrupt_requests_accumulate_in_if() {
        let mut bus = Bus::default();

        bus.request_interrupt(InterruptType::Vblank);
        bus.request_interrupt(InterruptType::Timer);
        assert_eq!(bus.read(regs::IF), 0b101);

        // requesting twice must not lose the first request
        bus.request_interrupt(InterruptType::Vblank);
        assert_eq!(bus.read(regs::IF), 0b101);
    }

    #[test]
    fn take_interrupt_respects_enable_mask_and_priority() {
        let mut bus = Bus::default();

        bus.request_interrupt(InterruptType::Timer);
        bus.request_interrupt(InterruptType::LcdStat);

        // nothing enabled, nothing to take
        assert_eq!(CpuBusProvider::take_interrupt(&mut bus), None);
        assert_eq!(bus.read(regs::IF), 0b110);

        bus.write(regs::IE, 0b111);
        assert_eq!(
            CpuBusProvider::take_interrupt(&mut bus),
            Some(InterruptType::LcdStat)
        );
        assert_eq!(bus.read(regs::IF), 0b100);
        assert_eq!(
            CpuBusProvider::take_interrupt(&mut bus),
            Some(InterruptType::Timer)
        );
        assert_eq!(bus.read(regs::IF), 0);
    }

    #[test]
    fn hex_dump_formats_rows_of_sixteen() {
        let mut bus = Bus::default();

        bus.write_bytes(0x8000, &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(bus.hex_dump(0x8000, 4), "0x8000: dead beef\n");

        let dump = bus.hex_dump(0x8000, 20);
        let mut lines = dump.lines();
        assert_eq!(
            lines.next(),
            Some("0x8000: dead beef 0000 0000 0000 0000 0000 0000")
        );
        assert_eq!(lines.next(), Some("0x8010: 0000 0000"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn hex_dump_out_of_range_is_empty() {
        let bus = Bus::default();

        assert_eq!(bus.hex_dump(0xFFF0, 16), "");
    }
}
