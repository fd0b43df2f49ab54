mod error;

pub use error::CartridgeError;

use crate::memory::{Bus, ROM_BANK_SIZE};

use std::fmt;

const HEADER_TITLE: usize = 0x134;
const HEADER_TITLE_SIZE: usize = 15;
const HEADER_CGB_FLAG: usize = 0x143;
const HEADER_TYPE: usize = 0x147;
const HEADER_ROM_SIZE: usize = 0x148;
const HEADER_RAM_SIZE: usize = 0x149;
const HEADER_SIZE: usize = 0x14A;

const CGB_SUPPORT_MASK: u8 = 0x80;
const CGB_ONLY_MASK: u8 = 0xC0;

/// Color support advertised by the header's CGB flag byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CgbMode {
    Support,
    Only,
    Unknown,
}

impl fmt::Display for CgbMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CgbMode::Support => write!(f, "CGB Support"),
            CgbMode::Only => write!(f, "CGB Only"),
            CgbMode::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Decoded cartridge header fields. The loader that brings rom bytes
/// into the machine lives out of tree; the core only interprets the
/// header bytes it is handed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartridgeHeader {
    pub title: String,
    pub cgb_mode: CgbMode,
    pub cartridge_type: u8,
    pub rom_banks: u16,
    pub ram_banks: u8,
}

impl CartridgeHeader {
    /// Decodes the header from the start of a rom image. `data` must
    /// cover the header area, at least 0x14A bytes.
    pub fn parse(data: &[u8]) -> Result<Self, CartridgeError> {
        if data.len() < HEADER_SIZE {
            return Err(CartridgeError::HeaderTooShort(data.len()));
        }

        let title = String::from_utf8(
            data[HEADER_TITLE..HEADER_TITLE + HEADER_TITLE_SIZE]
                .iter()
                .copied()
                .take_while(|e| e != &0)
                .collect::<Vec<u8>>(),
        )
        .map_err(|_| CartridgeError::InvalidTitle)?;

        // the support mask is checked first, so a byte matching both
        // classifies as Support
        let cgb_flag = data[HEADER_CGB_FLAG];
        let cgb_mode = if cgb_flag & CGB_SUPPORT_MASK != 0 {
            CgbMode::Support
        } else if cgb_flag & CGB_ONLY_MASK != 0 {
            CgbMode::Only
        } else {
            CgbMode::Unknown
        };

        let rom_size_code = data[HEADER_ROM_SIZE];
        if rom_size_code > 8 {
            return Err(CartridgeError::InvalidRomSizeCode(rom_size_code));
        }
        let rom_banks = ((2 * ROM_BANK_SIZE << rom_size_code) / ROM_BANK_SIZE) as u16;

        let ram_banks = match data[HEADER_RAM_SIZE] {
            0 => 0,
            1 | 2 => 1,
            3 => 4,
            4 => 16,
            5 => 8,
            code => return Err(CartridgeError::InvalidRamSizeCode(code)),
        };

        Ok(Self {
            title,
            cgb_mode,
            cartridge_type: data[HEADER_TYPE],
            rom_banks,
            ram_banks,
        })
    }

    /// Decodes the header out of an already populated bus.
    pub fn from_bus(bus: &Bus) -> Result<Self, CartridgeError> {
        let mut data = [0; HEADER_SIZE];
        bus.read_bytes(0, &mut data);
        Self::parse(&data)
    }
}

impl fmt::Display for CartridgeHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "CGB Flag: {}", self.cgb_mode)?;
        writeln!(f, "Type: {:#x}", self.cartridge_type)?;
        writeln!(f, "ROM Size: {} Banks", self.rom_banks)?;
        write!(f, "RAM Size: {} Banks", self.ram_banks)
    }
}
