use super::{clear_lcd, turn_off_lcd, turn_on_lcd};
use crate::ports::Lcd;
use pistats_domain::DomainError;
use tracing::debug;

/// Whether the display and backlight end up powered after clearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerMode {
    On,
    Off,
}

/// Use case: clear the screen, optionally switching the panel on or off.
pub struct ClearDisplayUseCase<L: Lcd> {
    lcd: L,
}

impl<L: Lcd> ClearDisplayUseCase<L> {
    pub fn new(lcd: L) -> Self {
        Self { lcd }
    }

    pub fn execute(&mut self, power: Option<PowerMode>) -> Result<(), DomainError> {
        match power {
            Some(PowerMode::On) => turn_on_lcd(&mut self.lcd)?,
            Some(PowerMode::Off) => turn_off_lcd(&mut self.lcd)?,
            None => {}
        }
        clear_lcd(&mut self.lcd)?;

        debug!(?power, "Display cleared");
        Ok(())
    }

    pub fn into_inner(self) -> L {
        self.lcd
    }
}
