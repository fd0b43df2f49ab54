/// An error that may occur while decoding a cartridge header.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartridgeError {
    /// The input does not cover the header area.
    #[error("The header needs at least 0x14A bytes, got {0}")]
    HeaderTooShort(usize),
    /// The game title contains invalid UTF-8 characters.
    #[error("The game title contains invalid UTF-8 characters")]
    InvalidTitle,
    /// The header contains an invalid rom size code.
    #[error("The rom size code {0} is invalid")]
    InvalidRomSizeCode(u8),
    /// The header contains an invalid ram size code.
    #[error("The ram size code {0} is invalid")]
    InvalidRamSizeCode(u8),
}
