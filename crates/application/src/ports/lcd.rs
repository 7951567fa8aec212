use pistats_domain::{DomainError, Glyph};

/// Command vocabulary of a two-line character display.
///
/// Calls are blocking and cheap; implementations talk to the hardware
/// directly and keep track of the cursor themselves.
pub trait Lcd: Send {
    fn clear(&mut self) -> Result<(), DomainError>;

    /// Moves the cursor to column 0, row 0.
    fn home(&mut self) -> Result<(), DomainError>;

    /// Current cursor position as `(column, row)`.
    fn cursor(&self) -> (u8, u8);

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), DomainError>;

    fn backlight_on(&mut self) -> Result<(), DomainError>;

    fn backlight_off(&mut self) -> Result<(), DomainError>;

    fn display_on(&mut self) -> Result<(), DomainError>;

    fn display_off(&mut self) -> Result<(), DomainError>;

    fn blink_off(&mut self) -> Result<(), DomainError>;

    fn cursor_off(&mut self) -> Result<(), DomainError>;

    fn write(&mut self, text: &str) -> Result<(), DomainError>;

    /// Stores `glyph` in CGRAM slot `slot` (0-7).
    fn store_glyph(&mut self, slot: u8, glyph: &Glyph) -> Result<(), DomainError>;

    /// Draws the glyph in `slot` at the cursor.
    fn write_glyph(&mut self, slot: u8) -> Result<(), DomainError>;
}

impl<L: Lcd + ?Sized> Lcd for Box<L> {
    fn clear(&mut self) -> Result<(), DomainError> {
        (**self).clear()
    }

    fn home(&mut self) -> Result<(), DomainError> {
        (**self).home()
    }

    fn cursor(&self) -> (u8, u8) {
        (**self).cursor()
    }

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), DomainError> {
        (**self).set_cursor(column, row)
    }

    fn backlight_on(&mut self) -> Result<(), DomainError> {
        (**self).backlight_on()
    }

    fn backlight_off(&mut self) -> Result<(), DomainError> {
        (**self).backlight_off()
    }

    fn display_on(&mut self) -> Result<(), DomainError> {
        (**self).display_on()
    }

    fn display_off(&mut self) -> Result<(), DomainError> {
        (**self).display_off()
    }

    fn blink_off(&mut self) -> Result<(), DomainError> {
        (**self).blink_off()
    }

    fn cursor_off(&mut self) -> Result<(), DomainError> {
        (**self).cursor_off()
    }

    fn write(&mut self, text: &str) -> Result<(), DomainError> {
        (**self).write(text)
    }

    fn store_glyph(&mut self, slot: u8, glyph: &Glyph) -> Result<(), DomainError> {
        (**self).store_glyph(slot, glyph)
    }

    fn write_glyph(&mut self, slot: u8) -> Result<(), DomainError> {
        (**self).write_glyph(slot)
    }
}
