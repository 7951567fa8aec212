use super::render::{render_notice, render_page, render_question};
use super::CollectSnapshotUseCase;
use crate::ports::{Lcd, SoftwareUpdater};
use crate::use_cases::display::{clear_lcd, turn_off_lcd, turn_on_lcd};
use pistats_domain::config::INTERVAL_CHOICES;
use pistats_domain::{
    symbols, DisplayEvent, DomainError, Page, PageRotation, Question, StatusSnapshot, Switch,
    UpdateStatus,
};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// What the event loop should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug)]
enum Menu {
    Functions(Question),
    Interval(Question),
    Software {
        question: Question,
        updates: UpdateStatus,
    },
}

impl Menu {
    fn question(&self) -> &Question {
        match self {
            Menu::Functions(q) | Menu::Interval(q) => q,
            Menu::Software { question, .. } => question,
        }
    }

    fn question_mut(&mut self) -> &mut Question {
        match self {
            Menu::Functions(q) | Menu::Interval(q) => q,
            Menu::Software { question, .. } => question,
        }
    }
}

/// Drives the status screen: owns the display, the latest snapshot and the
/// page rotation, and reacts to one [`DisplayEvent`] at a time.
///
/// Buttons 0-3 jump to a page, button 4 exits, the rocker press opens the
/// function menu (rocker left/right move through answers while it is open).
/// The refresh interval is published through a watch channel so the timer
/// job can follow menu changes.
pub struct StatusController<L: Lcd> {
    lcd: L,
    collect: Arc<CollectSnapshotUseCase>,
    updater: Arc<dyn SoftwareUpdater>,
    interval: watch::Sender<u32>,
    rotation: PageRotation,
    snapshot: Option<StatusSnapshot>,
    backlight_on: bool,
    menu: Option<Menu>,
}

impl<L: Lcd> StatusController<L> {
    pub fn new(
        lcd: L,
        collect: Arc<CollectSnapshotUseCase>,
        updater: Arc<dyn SoftwareUpdater>,
        interval: watch::Sender<u32>,
        auto_rotate: bool,
    ) -> Self {
        Self {
            lcd,
            collect,
            updater,
            interval,
            rotation: PageRotation::new(auto_rotate),
            snapshot: None,
            backlight_on: true,
            menu: None,
        }
    }

    /// Powers the display, stores the status glyphs and shows the first page.
    pub async fn start(&mut self) -> Result<(), DomainError> {
        clear_lcd(&mut self.lcd)?;
        turn_on_lcd(&mut self.lcd)?;
        self.lcd.home()?;

        for (slot, glyph) in symbols::ALL {
            self.lcd.store_glyph(slot, &glyph)?;
        }

        self.show(Page::StatusIp).await
    }

    pub async fn handle(&mut self, event: DisplayEvent) -> Result<Flow, DomainError> {
        debug!(?event, page = ?self.rotation.current(), "Handling display event");

        match event {
            DisplayEvent::Tick => {
                self.on_tick().await?;
                Ok(Flow::Continue)
            }
            DisplayEvent::Pressed(switch) => self.on_switch(switch).await,
        }
    }

    /// Clears the screen and powers it down.
    pub fn shutdown(&mut self) -> Result<(), DomainError> {
        clear_lcd(&mut self.lcd)?;
        turn_off_lcd(&mut self.lcd)?;
        info!("Display powered down");
        Ok(())
    }

    pub fn current_page(&self) -> Page {
        self.rotation.current()
    }

    pub fn auto_rotate(&self) -> bool {
        self.rotation.auto_rotate()
    }

    pub fn snapshot(&self) -> Option<&StatusSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn interval_minutes(&self) -> u32 {
        *self.interval.borrow()
    }

    pub fn backlight_on(&self) -> bool {
        self.backlight_on
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_some()
    }

    pub fn lcd(&self) -> &L {
        &self.lcd
    }

    async fn on_tick(&mut self) -> Result<(), DomainError> {
        if self.menu.is_some() {
            debug!("Menu open, skipping refresh");
            return Ok(());
        }
        if self.interval_minutes() == 0 {
            debug!("Refresh disabled, ignoring tick");
            return Ok(());
        }

        self.refresh().await?;
        let page = self.rotation.tick();
        self.render(page)
    }

    async fn on_switch(&mut self, switch: Switch) -> Result<Flow, DomainError> {
        if switch == Switch::Button4 {
            info!("Exit button pressed");
            return Ok(Flow::Exit);
        }

        if let Some(page) = page_for(switch) {
            self.menu = None;
            self.show(page).await?;
            return Ok(Flow::Continue);
        }

        if self.menu.is_some() {
            self.on_menu_switch(switch).await?;
        } else if switch == Switch::RockerPress {
            self.open_functions_menu()?;
        } else {
            debug!(?switch, "Switch has no action outside the menu");
        }
        Ok(Flow::Continue)
    }

    async fn on_menu_switch(&mut self, switch: Switch) -> Result<(), DomainError> {
        let Some(menu) = self.menu.as_mut() else {
            return Ok(());
        };

        match switch {
            Switch::RockerLeft => menu.question_mut().previous(),
            Switch::RockerRight => menu.question_mut().next(),
            Switch::RockerPress => {
                if let Some(menu) = self.menu.take() {
                    return self.confirm(menu).await;
                }
                return Ok(());
            }
            _ => return Ok(()),
        }

        render_question(&mut self.lcd, menu.question())
    }

    async fn confirm(&mut self, menu: Menu) -> Result<(), DomainError> {
        match menu {
            Menu::Functions(question) => match question.selected() {
                0 => {
                    self.toggle_backlight()?;
                    self.show_current().await
                }
                1 => self.open_interval_menu(),
                2 => {
                    let enabled = self.rotation.toggle_auto_rotate();
                    info!(enabled, "Page rotation toggled");
                    self.show_current().await
                }
                3 => self.open_software_menu().await,
                _ => self.show_current().await,
            },
            Menu::Interval(question) => {
                let minutes = INTERVAL_CHOICES
                    .get(question.selected())
                    .copied()
                    .unwrap_or_default();
                self.interval.send_replace(minutes);
                info!(minutes, "Refresh interval changed");
                self.show_current().await
            }
            Menu::Software { question, updates } => {
                if question.selected() == 1 {
                    self.install_updates(updates).await?;
                }
                self.show_current().await
            }
        }
    }

    fn open_functions_menu(&mut self) -> Result<(), DomainError> {
        let backlight = if self.backlight_on {
            "Backlight Off"
        } else {
            "Backlight On"
        };
        let rotate = if self.rotation.auto_rotate() {
            "Rotate Off"
        } else {
            "Rotate On"
        };

        let question = Question::new(
            "Choose Function",
            vec![
                backlight.to_string(),
                format!("Interval {}min", self.interval_minutes()),
                rotate.to_string(),
                "Update Software".to_string(),
                "Nothing".to_string(),
            ],
            ">",
        );
        self.open(Menu::Functions(question))
    }

    fn open_interval_menu(&mut self) -> Result<(), DomainError> {
        let question = Question::new(
            "Update Interval?",
            INTERVAL_CHOICES.iter().map(u32::to_string).collect(),
            "Minutes >",
        );
        self.open(Menu::Interval(question))
    }

    async fn open_software_menu(&mut self) -> Result<(), DomainError> {
        let updates = self.collect.check_updates().await;
        let modules = updates.modules();

        let (prompt, selector) = if modules.is_empty() {
            ("No Updates".to_string(), "Check? >")
        } else {
            (format!("Update {}", modules.join("+")), ">")
        };

        let question = Question::new(prompt, vec!["No".into(), "Yes".into()], selector);
        self.open(Menu::Software { question, updates })
    }

    fn open(&mut self, menu: Menu) -> Result<(), DomainError> {
        render_question(&mut self.lcd, menu.question())?;
        self.menu = Some(menu);
        Ok(())
    }

    async fn install_updates(&mut self, updates: UpdateStatus) -> Result<(), DomainError> {
        info!(modules = ?updates.modules(), "Updating software");
        render_notice(&mut self.lcd, "Updating...", "Do not unplug!")?;

        match self.updater.install(updates).await {
            Ok(()) => info!("Updates complete"),
            Err(DomainError::UpdatesDisabled) => warn!("Software updates are disabled"),
            Err(e) => error!(error = %e, "Software update failed"),
        }
        Ok(())
    }

    fn toggle_backlight(&mut self) -> Result<(), DomainError> {
        self.backlight_on = !self.backlight_on;
        if self.backlight_on {
            self.lcd.backlight_on()
        } else {
            self.lcd.backlight_off()
        }
    }

    async fn show_current(&mut self) -> Result<(), DomainError> {
        self.show(self.rotation.current()).await
    }

    async fn show(&mut self, page: Page) -> Result<(), DomainError> {
        self.refresh().await?;
        self.rotation.select(page);
        self.render(page)
    }

    async fn refresh(&mut self) -> Result<(), DomainError> {
        self.snapshot = Some(self.collect.execute().await?);
        Ok(())
    }

    fn render(&mut self, page: Page) -> Result<(), DomainError> {
        match &self.snapshot {
            Some(snapshot) => render_page(&mut self.lcd, page, snapshot),
            None => Ok(()),
        }
    }
}

fn page_for(switch: Switch) -> Option<Page> {
    match switch {
        Switch::Button0 => Some(Page::StatusIp),
        Switch::Button1 => Some(Page::Blocked),
        Switch::Button2 => Some(Page::UptimeMemoryTemp),
        Switch::Button3 => Some(Page::Clients),
        _ => None,
    }
}
