use crate::memory::{regs, Bus, InterruptManager, InterruptType};

/// Simplified per-scanline cycle count, overridable through the
/// machine config.
pub const DEFAULT_SCANLINE_CYCLES: u32 = 15;

const VBLANK_START_LINE: u8 = 144;
const LAST_LINE: u8 = 153;

const LCDC_DISPLAY_ENABLE_BIT: u8 = 7;
const STAT_COINCIDENCE_INTERRUPT_BIT: u8 = 6;
const STAT_COINCIDENCE_FLAG_BIT: u8 = 2;

/// Scanline-granular display timing. Owns only its cycle accumulator;
/// the line number, line-compare and status registers live on the bus.
pub struct DisplayTiming {
    scanline_cycles: u64,
    accumulator: u64,
}

impl Default for DisplayTiming {
    fn default() -> Self {
        Self::new(DEFAULT_SCANLINE_CYCLES)
    }
}

impl DisplayTiming {
    pub fn new(scanline_cycles: u32) -> Self {
        Self {
            scanline_cycles: scanline_cycles as u64,
            accumulator: 0,
        }
    }

    /// Feeds `cycles` elapsed T-states to the display timing.
    ///
    /// While the display-enable bit is clear the line number is pinned
    /// to zero and nothing is requested. Otherwise, each time the
    /// accumulated cycles reach the scanline threshold the line number
    /// advances (wrapping 153 to 0), at most once per call; entering
    /// line 144 raises the VBlank request, and the line-compare check
    /// updates the coincidence flag and optionally raises LCD-status.
    pub fn advance(&mut self, cycles: u32, bus: &mut Bus) {
        if !bus.get_bit(regs::LCDC, LCDC_DISPLAY_ENABLE_BIT) {
            bus.write(regs::LY, 0);
            self.accumulator = 0;
            return;
        }

        self.accumulator += cycles as u64;

        if self.accumulator >= self.scanline_cycles {
            self.accumulator = 0;

            let ly = bus.read(regs::LY);
            let ly = if ly == LAST_LINE { 0 } else { ly.wrapping_add(1) };
            bus.write(regs::LY, ly);

            if ly == VBLANK_START_LINE {
                bus.request_interrupt(InterruptType::Vblank);
            }

            if bus.read(regs::LYC) == ly {
                bus.set_bit(regs::STAT, STAT_COINCIDENCE_FLAG_BIT, true);

                if bus.get_bit(regs::STAT, STAT_COINCIDENCE_INTERRUPT_BIT) {
                    bus.request_interrupt(InterruptType::LcdStat);
                }
            } else {
                bus.set_bit(regs::STAT, STAT_COINCIDENCE_FLAG_BIT, false);
            }
        }
    }
}
