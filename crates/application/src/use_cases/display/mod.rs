mod clear;
mod hello;
mod write_message;

pub use clear::{ClearDisplayUseCase, PowerMode};
pub use hello::{GreetUseCase, DEFAULT_GREETING};
pub use write_message::WriteMessageUseCase;

use crate::ports::Lcd;
use pistats_domain::DomainError;

/// Blank the screen and hide the cursor.
pub fn clear_lcd(lcd: &mut dyn Lcd) -> Result<(), DomainError> {
    lcd.blink_off()?;
    lcd.cursor_off()?;
    lcd.clear()
}

pub fn turn_on_lcd(lcd: &mut dyn Lcd) -> Result<(), DomainError> {
    lcd.display_on()?;
    lcd.backlight_on()
}

pub fn turn_off_lcd(lcd: &mut dyn Lcd) -> Result<(), DomainError> {
    lcd.display_off()?;
    lcd.backlight_off()
}

/// Moves to the start of the other row: row 0 goes to row 1, anything
/// else goes home.
pub fn next_line(lcd: &mut dyn Lcd) -> Result<(), DomainError> {
    let (_, row) = lcd.cursor();
    if row == 0 {
        lcd.set_cursor(0, 1)
    } else {
        lcd.home()
    }
}
