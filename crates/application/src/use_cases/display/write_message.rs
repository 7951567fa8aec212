use super::clear_lcd;
use crate::ports::Lcd;
use pistats_domain::DomainError;
use tracing::debug;

/// Use case: replace the screen contents with a message.
/// An empty message leaves the screen blank.
pub struct WriteMessageUseCase<L: Lcd> {
    lcd: L,
}

impl<L: Lcd> WriteMessageUseCase<L> {
    pub fn new(lcd: L) -> Self {
        Self { lcd }
    }

    pub fn execute(&mut self, message: &str, backlight: bool) -> Result<(), DomainError> {
        if backlight {
            self.lcd.backlight_on()?;
        } else {
            self.lcd.backlight_off()?;
        }

        clear_lcd(&mut self.lcd)?;

        for (row, line) in message.split('\n').take(2).enumerate() {
            if row > 0 {
                self.lcd.set_cursor(0, row as u8)?;
            }
            self.lcd.write(line)?;
        }

        debug!(len = message.len(), backlight, "Message written");
        Ok(())
    }

    pub fn into_inner(self) -> L {
        self.lcd
    }
}
