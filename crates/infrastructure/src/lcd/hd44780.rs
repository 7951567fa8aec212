//! HD44780 character LCD driven in 4-bit mode through MCP23S17 port B.
//!
//! Port B wiring on the PiFace Control and Display:
//!
//! | bit | signal    |
//! |-----|-----------|
//! | 0-3 | D4-D7     |
//! | 4   | enable    |
//! | 5   | read/write (held low) |
//! | 6   | register select |
//! | 7   | backlight |
//!
//! The controller is never read back, so the cursor position is tracked in
//! software.

use super::mcp23s17::{Mcp23s17, SpiBus, GPIOB};
use pistats_application::ports::Lcd;
use pistats_domain::{DomainError, Glyph, GLYPH_SLOTS};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::sleep;
use std::time::Duration;
use tracing::debug;

pub const COLUMNS: u8 = 16;
pub const ROWS: u8 = 2;

/// Each row of DDRAM holds 40 characters, only the first 16 are visible.
const DDRAM_ROW_WIDTH: u8 = 40;
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

const PIN_ENABLE: u8 = 1 << 4;
const PIN_RS: u8 = 1 << 6;
const PIN_BACKLIGHT: u8 = 1 << 7;

const CMD_CLEAR: u8 = 0x01;
const CMD_HOME: u8 = 0x02;
const CMD_ENTRY_MODE: u8 = 0x04;
const CMD_DISPLAY_CONTROL: u8 = 0x08;
const CMD_FUNCTION_SET: u8 = 0x20;
const CMD_SET_CGRAM: u8 = 0x40;
const CMD_SET_DDRAM: u8 = 0x80;

const ENTRY_LEFT: u8 = 0x02;
const DISPLAY_ON: u8 = 0x04;
const CURSOR_ON: u8 = 0x02;
const BLINK_ON: u8 = 0x01;
const FUNCTION_2LINE: u8 = 0x08;

const CLEAR_DELAY: Duration = Duration::from_micros(2_000);

pub struct Hd44780<S: SpiBus> {
    bus: Arc<Mutex<Mcp23s17<S>>>,
    backlight: bool,
    display_control: u8,
    cursor: (u8, u8),
}

impl<S: SpiBus> Hd44780<S> {
    /// Wraps an already initialised expander. Call [`Hd44780::init`] before use.
    pub fn new(bus: Arc<Mutex<Mcp23s17<S>>>) -> Self {
        Self {
            bus,
            backlight: false,
            display_control: DISPLAY_ON,
            cursor: (0, 0),
        }
    }

    /// Power-on initialisation into 4-bit, two line mode with the display
    /// on, cursor and blink off.
    pub fn init(&mut self) -> Result<(), DomainError> {
        let backlight = self.backlight;
        {
            let mut bus = lock(&self.bus)?;
            sleep(Duration::from_millis(15));
            for wait_us in [4_100, 100, 100] {
                write_nibble(&mut bus, 0x03, false, backlight)?;
                sleep(Duration::from_micros(wait_us));
            }
            write_nibble(&mut bus, 0x02, false, backlight)?;
        }

        self.command(CMD_FUNCTION_SET | FUNCTION_2LINE)?;
        self.display_control = DISPLAY_ON;
        self.apply_display_control()?;
        self.clear()?;
        self.command(CMD_ENTRY_MODE | ENTRY_LEFT)?;

        debug!("HD44780 initialised");
        Ok(())
    }

    fn command(&mut self, command: u8) -> Result<(), DomainError> {
        let backlight = self.backlight;
        let mut bus = lock(&self.bus)?;
        send_byte(&mut bus, command, false, backlight)
    }

    fn data(&mut self, byte: u8) -> Result<(), DomainError> {
        let backlight = self.backlight;
        let mut bus = lock(&self.bus)?;
        send_byte(&mut bus, byte, true, backlight)
    }

    fn apply_display_control(&mut self) -> Result<(), DomainError> {
        self.command(CMD_DISPLAY_CONTROL | self.display_control)
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DomainError> {
        self.backlight = on;
        let mut bus = lock(&self.bus)?;
        bus.write_register(GPIOB, if on { PIN_BACKLIGHT } else { 0 })
    }

    fn put(&mut self, byte: u8) -> Result<(), DomainError> {
        self.data(byte)?;
        self.cursor.0 = (self.cursor.0 + 1).min(DDRAM_ROW_WIDTH - 1);
        Ok(())
    }
}

impl<S: SpiBus> Lcd for Hd44780<S> {
    fn clear(&mut self) -> Result<(), DomainError> {
        self.command(CMD_CLEAR)?;
        sleep(CLEAR_DELAY);
        self.cursor = (0, 0);
        Ok(())
    }

    fn home(&mut self) -> Result<(), DomainError> {
        self.command(CMD_HOME)?;
        sleep(CLEAR_DELAY);
        self.cursor = (0, 0);
        Ok(())
    }

    fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), DomainError> {
        let column = column.min(DDRAM_ROW_WIDTH - 1);
        let row = row.min(ROWS - 1);
        self.command(CMD_SET_DDRAM | (ROW_OFFSETS[row as usize] + column))?;
        self.cursor = (column, row);
        Ok(())
    }

    fn backlight_on(&mut self) -> Result<(), DomainError> {
        self.set_backlight(true)
    }

    fn backlight_off(&mut self) -> Result<(), DomainError> {
        self.set_backlight(false)
    }

    fn display_on(&mut self) -> Result<(), DomainError> {
        self.display_control |= DISPLAY_ON;
        self.apply_display_control()
    }

    fn display_off(&mut self) -> Result<(), DomainError> {
        self.display_control &= !DISPLAY_ON;
        self.apply_display_control()
    }

    fn blink_off(&mut self) -> Result<(), DomainError> {
        self.display_control &= !BLINK_ON;
        self.apply_display_control()
    }

    fn cursor_off(&mut self) -> Result<(), DomainError> {
        self.display_control &= !CURSOR_ON;
        self.apply_display_control()
    }

    fn write(&mut self, text: &str) -> Result<(), DomainError> {
        for c in text.chars() {
            if c == '\n' {
                let next_row = (self.cursor.1 + 1) % ROWS;
                self.set_cursor(0, next_row)?;
                continue;
            }
            self.put(to_rom_char(c))?;
        }
        Ok(())
    }

    fn store_glyph(&mut self, slot: u8, glyph: &Glyph) -> Result<(), DomainError> {
        if slot >= GLYPH_SLOTS {
            return Err(DomainError::InvalidGlyph(format!("slot {} out of range", slot)));
        }

        self.command(CMD_SET_CGRAM | (slot << 3))?;
        for row in glyph.rows() {
            self.data(*row)?;
        }

        let (column, row) = self.cursor;
        self.set_cursor(column, row)
    }

    fn write_glyph(&mut self, slot: u8) -> Result<(), DomainError> {
        if slot >= GLYPH_SLOTS {
            return Err(DomainError::InvalidGlyph(format!("slot {} out of range", slot)));
        }
        self.put(slot)
    }
}

fn lock<S: SpiBus>(
    bus: &Arc<Mutex<Mcp23s17<S>>>,
) -> Result<MutexGuard<'_, Mcp23s17<S>>, DomainError> {
    bus.lock()
        .map_err(|_| DomainError::Hardware("SPI bus lock poisoned".to_string()))
}

/// Character ROM A00 matches ASCII for printable characters.
fn to_rom_char(c: char) -> u8 {
    if c.is_ascii() && !c.is_ascii_control() {
        c as u8
    } else {
        b'?'
    }
}

fn send_byte<S: SpiBus>(
    bus: &mut Mcp23s17<S>,
    byte: u8,
    register_select: bool,
    backlight: bool,
) -> Result<(), DomainError> {
    write_nibble(bus, byte >> 4, register_select, backlight)?;
    write_nibble(bus, byte & 0x0F, register_select, backlight)
}

/// Presents a nibble on D4-D7 and strobes enable; the controller latches
/// on the falling edge.
fn write_nibble<S: SpiBus>(
    bus: &mut Mcp23s17<S>,
    nibble: u8,
    register_select: bool,
    backlight: bool,
) -> Result<(), DomainError> {
    let mut port = nibble & 0x0F;
    if register_select {
        port |= PIN_RS;
    }
    if backlight {
        port |= PIN_BACKLIGHT;
    }

    bus.write_register(GPIOB, port)?;
    bus.write_register(GPIOB, port | PIN_ENABLE)?;
    bus.write_register(GPIOB, port)
}
