use crate::ports::Lcd;
use pistats_domain::DomainError;

pub const DEFAULT_GREETING: &str = "Hello, World!";

/// Use case: light the screen and print a greeting at the cursor.
///
/// Unlike [`super::WriteMessageUseCase`] the screen is not cleared first.
pub struct GreetUseCase<L: Lcd> {
    lcd: L,
}

impl<L: Lcd> GreetUseCase<L> {
    pub fn new(lcd: L) -> Self {
        Self { lcd }
    }

    pub fn execute(&mut self, greeting: Option<&str>) -> Result<(), DomainError> {
        self.lcd.blink_off()?;
        self.lcd.cursor_off()?;
        self.lcd.backlight_on()?;
        self.lcd.write(greeting.unwrap_or(DEFAULT_GREETING))
    }

    pub fn into_inner(self) -> L {
        self.lcd
    }
}
