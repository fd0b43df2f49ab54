use bitflags::bitflags;
use std::convert::From;

const INTERRUPTS_VECTOR: [u16; 5] = [0x40, 0x48, 0x50, 0x58, 0x60];

/// The five hardware interrupt sources, in priority order.
///
/// The discriminant of each variant is its bit position in the `IF` and
/// `IE` registers, lower bits winning when several are pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterruptType {
    Vblank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl InterruptType {
    pub fn vector(self) -> u16 {
        INTERRUPTS_VECTOR[self as usize]
    }
}

pub trait InterruptManager {
    fn request_interrupt(&mut self, interrupt: InterruptType);
}

bitflags! {
    pub(super) struct InterruptsFlags: u8 {
        const VBLANK   = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER    = 1 << 2;
        const SERIAL   = 1 << 3;
        const JOYPAD   = 1 << 4;
    }
}

impl From<InterruptType> for InterruptsFlags {
    fn from(interrupt: InterruptType) -> Self {
        match interrupt {
            InterruptType::Vblank => Self::VBLANK,
            InterruptType::LcdStat => Self::LCD_STAT,
            InterruptType::Timer => Self::TIMER,
            InterruptType::Serial => Self::SERIAL,
            InterruptType::Joypad => Self::JOYPAD,
        }
    }
}

const INTERRUPT_TYPES: [InterruptType; 5] = [
    InterruptType::Vblank,
    InterruptType::LcdStat,
    InterruptType::Timer,
    InterruptType::Serial,
    InterruptType::Joypad,
];

/// Selects the highest priority interrupt from a `IF & IE` mask.
pub(super) fn next_pending(pending: u8) -> Option<InterruptType> {
    let pending = InterruptsFlags::from_bits_truncate(pending);
    if pending.is_empty() {
        return None;
    }

    let mut bits = pending.bits();
    let mut counter = 0;
    while bits != 0 {
        if bits & 1 == 1 {
            return Some(INTERRUPT_TYPES[counter]);
        }
        counter += 1;
        bits >>= 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_follow_bit_order() {
        assert_eq!(InterruptType::Vblank.vector(), 0x40);
        assert_eq!(InterruptType::LcdStat.vector(), 0x48);
        assert_eq!(InterruptType::Timer.vector(), 0x50);
        assert_eq!(InterruptType::Serial.vector(), 0x58);
        assert_eq!(InterruptType::Joypad.vector(), 0x60);
    }

    #[test]
    fn lowest_set_bit_wins() {
        assert_eq!(next_pending(0), None);
        assert_eq!(next_pending(0b00001), Some(InterruptType::Vblank));
        assert_eq!(next_pending(0b10010), Some(InterruptType::LcdStat));
        assert_eq!(next_pending(0b11100), Some(InterruptType::Timer));
        assert_eq!(next_pending(0b11000), Some(InterruptType::Serial));
        assert_eq!(next_pending(0b10000), Some(InterruptType::Joypad));
    }

    #[test]
    fn unused_high_bits_are_ignored() {
        assert_eq!(next_pending(0xE0), None);
        assert_eq!(next_pending(0xE4), Some(InterruptType::Timer));
    }
}
