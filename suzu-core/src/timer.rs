use crate::memory::{regs, Bus, InterruptManager, InterruptType};

use bitflags::bitflags;

bitflags! {
    struct TimerControl: u8 {
        const TIMER_ENABLE = 1 << 2;
        const FREQ_DIVIDER = 0b11;
    }
}

impl TimerControl {
    fn timer_enabled(&self) -> bool {
        self.intersects(Self::TIMER_ENABLE)
    }

    fn clock_divider(&self) -> u64 {
        match self.bits() & Self::FREQ_DIVIDER.bits() {
            0 => 1024,
            1 => 16,
            2 => 64,
            3 => 256,
            _ => unreachable!(),
        }
    }
}

/// The interval timer. Owns only its cycle accumulator; the counter,
/// reload and control registers live on the bus.
#[derive(Default)]
pub struct Timer {
    accumulator: u64,
}

impl Timer {
    /// Feeds `cycles` elapsed T-states to the timer.
    ///
    /// While the control register's enable bit is clear the accumulator
    /// is held at zero. Otherwise, once the accumulated cycles reach the
    /// selected divider threshold the counter register increments, at
    /// most once per call. A counter at 0xFF reloads from the modulo
    /// register instead and raises the Timer interrupt request.
    pub fn advance(&mut self, cycles: u32, bus: &mut Bus) {
        let control = TimerControl::from_bits_truncate(bus.read(regs::TAC));

        if !control.timer_enabled() {
            self.accumulator = 0;
            return;
        }

        self.accumulator += cycles as u64;

        if self.accumulator >= control.clock_divider() {
            self.accumulator = 0;

            let counter = bus.read(regs::TIMA);
            if counter == 0xFF {
                let reload = bus.read(regs::TMA);
                bus.write(regs::TIMA, reload);
                bus.request_interrupt(InterruptType::Timer);
            } else {
                bus.write(regs::TIMA, counter + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMER_INTERRUPT: u8 = 1 << 2;

    fn enabled_bus(freq_select: u8) -> Bus {
        let mut bus = Bus::default();
        bus.write(regs::TAC, 0b100 | freq_select);
        bus
    }

    #[test]
    fn counter_increments_after_the_selected_divisor() {
        let mut bus = enabled_bus(1);
        let mut timer = Timer::default();

        timer.advance(15, &mut bus);
        assert_eq!(bus.read(regs::TIMA), 0x00);

        timer.advance(1, &mut bus);
        assert_eq!(bus.read(regs::TIMA), 0x01);
    }

    #[test]
    fn at_most_one_increment_per_call() {
        let mut bus = enabled_bus(1);
        let mut timer = Timer::default();

        timer.advance(64, &mut bus);
        assert_eq!(bus.read(regs::TIMA), 0x01);
    }

    #[test]
    fn slow_divisor_needs_the_full_batch() {
        let mut bus = enabled_bus(0);
        let mut timer = Timer::default();

        timer.advance(1023, &mut bus);
        assert_eq!(bus.read(regs::TIMA), 0x00);

        timer.advance(1, &mut bus);
        assert_eq!(bus.read(regs::TIMA), 0x01);
    }

    #[test]
    fn freq_select_two_ticks_every_64_cycles() {
        let mut bus = enabled_bus(2);
        let mut timer = Timer::default();

        timer.advance(63, &mut bus);
        assert_eq!(bus.read(regs::TIMA), 0x00);

        timer.advance(1, &mut bus);
        assert_eq!(bus.read(regs::TIMA), 0x01);
    }

    #[test]
    fn freq_select_three_ticks_every_256_cycles() {
        let mut bus = enabled_bus(3);
        let mut timer = Timer::default();

        timer.advance(255, &mut bus);
        assert_eq!(bus.read(regs::TIMA), 0x00);

        timer.advance(1, &mut bus);
        assert_eq!(bus.read(regs::TIMA), 0x01);
    }

    #[test]
    fn overflow_reloads_from_the_modulo_register() {
        let mut bus = enabled_bus(1);
        let mut timer = Timer::default();
        bus.write(regs::TIMA, 0xFF);
        bus.write(regs::TMA, 0xAB);

        timer.advance(16, &mut bus);
        assert_eq!(bus.read(regs::TIMA), 0xAB);
        assert_eq!(bus.read(regs::IF) & TIMER_INTERRUPT, TIMER_INTERRUPT);
    }

    #[test]
    fn increment_below_overflow_requests_nothing() {
        let mut bus = enabled_bus(1);
        let mut timer = Timer::default();
        bus.write(regs::TIMA, 0xFE);

        timer.advance(16, &mut bus);
        assert_eq!(bus.read(regs::TIMA), 0xFF);
        assert_eq!(bus.read(regs::IF) & TIMER_INTERRUPT, 0);
    }

    #[test]
    fn disabled_timer_resets_the_accumulator() {
        let mut bus = enabled_bus(1);
        let mut timer = Timer::default();

        timer.advance(15, &mut bus);

        bus.write(regs::TAC, 0b001);
        timer.advance(100, &mut bus);
        assert_eq!(bus.read(regs::TIMA), 0x00);

        // progress restarts from zero after re-enabling
        bus.write(regs::TAC, 0b101);
        timer.advance(15, &mut bus);
        assert_eq!(bus.read(regs::TIMA), 0x00);
        timer.advance(1, &mut bus);
        assert_eq!(bus.read(regs::TIMA), 0x01);
    }

    #[test]
    fn advance_zero_changes_nothing() {
        let mut bus = enabled_bus(1);
        let mut timer = Timer::default();

        timer.advance(15, &mut bus);
        timer.advance(0, &mut bus);
        assert_eq!(bus.read(regs::TIMA), 0x00);

        timer.advance(1, &mut bus);
        assert_eq!(bus.read(regs::TIMA), 0x01);
    }
}
