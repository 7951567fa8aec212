use crate::ports::Lcd;
use crate::use_cases::display::{clear_lcd, next_line};
use pistats_domain::{symbols, DomainError, Page, Question, StatusSnapshot};

/// Draws one of the four status pages.
pub fn render_page(
    lcd: &mut dyn Lcd,
    page: Page,
    snapshot: &StatusSnapshot,
) -> Result<(), DomainError> {
    start_screen(lcd)?;
    let stats = &snapshot.stats;

    match page {
        Page::StatusIp => {
            lcd.write(&format!("Pihole {}", stats.title_status()))?;
            next_line(lcd)?;
            lcd.write_glyph(symbols::IP_SLOT)?;
            lcd.write(&format!(":{}", stats.ip_address))?;
        }
        Page::UptimeMemoryTemp => {
            lcd.write(&format!("Up:{}", snapshot.uptime))?;
            next_line(lcd)?;
            lcd.write_glyph(symbols::MEMORY_SLOT)?;
            lcd.write(&snapshot.memory)?;
            lcd.write(" ")?;
            lcd.write_glyph(symbols::TEMPERATURE_SLOT)?;
            lcd.write(&snapshot.temperature)?;
        }
        Page::Blocked => {
            lcd.write(&format!(
                "Ads:{:.1}% {}",
                stats.percentage_blocked, stats.ads_blocked
            ))?;
            next_line(lcd)?;
            lcd.write(&format!("Sites:{}", stats.domains_blocked))?;
        }
        Page::Clients => {
            lcd.write(&format!("Clients: {}", stats.clients))?;
            next_line(lcd)?;
            lcd.write(&format!("DNS: {}", stats.dns_queries))?;
        }
    }
    Ok(())
}

pub fn render_question(lcd: &mut dyn Lcd, question: &Question) -> Result<(), DomainError> {
    render_notice(lcd, question.prompt(), &question.answer_line())
}

/// Two fixed lines of text.
pub fn render_notice(lcd: &mut dyn Lcd, first: &str, second: &str) -> Result<(), DomainError> {
    start_screen(lcd)?;
    lcd.write(first)?;
    next_line(lcd)?;
    lcd.write(second)
}

fn start_screen(lcd: &mut dyn Lcd) -> Result<(), DomainError> {
    clear_lcd(lcd)?;
    lcd.home()
}
