use crate::DomainError;

/// Number of CGRAM slots on an HD44780 controller.
pub const GLYPH_SLOTS: u8 = 8;

/// A 5x8 custom character. Each row uses the low five bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph([u8; 8]);

impl Glyph {
    pub fn new(rows: [u8; 8]) -> Result<Self, DomainError> {
        if let Some(row) = rows.iter().find(|row| **row > 0x1F) {
            return Err(DomainError::InvalidGlyph(format!(
                "row 0x{:02X} exceeds 5 pixels",
                row
            )));
        }
        Ok(Self(rows))
    }

    pub fn rows(&self) -> &[u8; 8] {
        &self.0
    }
}

/// Glyphs stored by the status daemon and their CGRAM slots.
pub mod symbols {
    use super::Glyph;

    pub const MEMORY_SLOT: u8 = 0;
    pub const TEMPERATURE_SLOT: u8 = 1;
    pub const IP_SLOT: u8 = 2;

    pub const MEMORY: Glyph = Glyph([0x0E, 0x1F, 0x0E, 0x1F, 0x0E, 0x1F, 0x0E, 0x00]);
    pub const TEMPERATURE: Glyph = Glyph([0x04, 0x0A, 0x0A, 0x0A, 0x11, 0x1F, 0x0E, 0x00]);
    pub const IP: Glyph = Glyph([0x1C, 0x08, 0x08, 0x1C, 0x07, 0x05, 0x07, 0x04]);

    /// `(slot, glyph)` pairs in storage order.
    pub const ALL: [(u8, Glyph); 3] = [
        (MEMORY_SLOT, MEMORY),
        (TEMPERATURE_SLOT, TEMPERATURE),
        (IP_SLOT, IP),
    ];
}
