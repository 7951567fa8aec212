#![allow(dead_code)]

use async_trait::async_trait;
use pistats::di::Services;
use pistats_application::ports::{
    Lcd, SoftwareUpdater, StatsSource, SwitchPort, SystemProbe, UpdateProbe,
};
use pistats_domain::{DomainError, Glyph, PiholeStats, UpdateStatus, Uptime};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Shared display
// ============================================================================

#[derive(Debug, Default)]
pub struct LcdState {
    pub display_on: bool,
    pub backlight_on: bool,
    pub clears: usize,
    pub cursor: (u8, u8),
    pub written: Vec<String>,
}

/// Display whose state stays observable after it was moved into the daemon.
#[derive(Clone, Default)]
pub struct SharedLcd {
    pub state: Arc<Mutex<LcdState>>,
}

impl SharedLcd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> std::sync::MutexGuard<'_, LcdState> {
        self.state.lock().unwrap()
    }
}

impl Lcd for SharedLcd {
    fn clear(&mut self) -> Result<(), DomainError> {
        let mut state = self.snapshot();
        state.clears += 1;
        state.cursor = (0, 0);
        Ok(())
    }

    fn home(&mut self) -> Result<(), DomainError> {
        self.snapshot().cursor = (0, 0);
        Ok(())
    }

    fn cursor(&self) -> (u8, u8) {
        self.snapshot().cursor
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DomainError> {
        self.snapshot().cursor = (col, row);
        Ok(())
    }

    fn backlight_on(&mut self) -> Result<(), DomainError> {
        self.snapshot().backlight_on = true;
        Ok(())
    }

    fn backlight_off(&mut self) -> Result<(), DomainError> {
        self.snapshot().backlight_on = false;
        Ok(())
    }

    fn display_on(&mut self) -> Result<(), DomainError> {
        self.snapshot().display_on = true;
        Ok(())
    }

    fn display_off(&mut self) -> Result<(), DomainError> {
        self.snapshot().display_on = false;
        Ok(())
    }

    fn blink_off(&mut self) -> Result<(), DomainError> {
        Ok(())
    }

    fn cursor_off(&mut self) -> Result<(), DomainError> {
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<(), DomainError> {
        self.snapshot().written.push(text.to_string());
        Ok(())
    }

    fn store_glyph(&mut self, _slot: u8, _glyph: &Glyph) -> Result<(), DomainError> {
        Ok(())
    }

    fn write_glyph(&mut self, _slot: u8) -> Result<(), DomainError> {
        Ok(())
    }
}

// ============================================================================
// Ports
// ============================================================================

pub struct MockStatsSource {
    should_fail: AtomicBool,
    calls: AtomicUsize,
}

impl MockStatsSource {
    pub fn new() -> Self {
        Self {
            should_fail: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        let source = Self::new();
        source.should_fail.store(true, Ordering::SeqCst);
        source
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatsSource for MockStatsSource {
    async fn fetch_stats(&self) -> Result<PiholeStats, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Http("connection refused".to_string()));
        }
        Ok(PiholeStats {
            status: "enabled".to_string(),
            ip_address: "192.168.1.2".to_string(),
            ads_blocked: 1184,
            percentage_blocked: 9.8,
            domains_blocked: "121,436".to_string(),
            dns_queries: 12_085,
            clients: 7,
        })
    }
}

pub struct MockSystemProbe;

#[async_trait]
impl SystemProbe for MockSystemProbe {
    async fn uptime(&self) -> Result<Uptime, DomainError> {
        Ok(Uptime::from_secs(90_061))
    }

    async fn memory_usage(&self) -> Result<String, DomainError> {
        Ok("34%".to_string())
    }

    async fn temperature(&self) -> Result<String, DomainError> {
        Ok("48.3C".to_string())
    }
}

pub struct MockUpdateProbe;

#[async_trait]
impl UpdateProbe for MockUpdateProbe {
    async fn check(&self) -> UpdateStatus {
        UpdateStatus::default()
    }
}

pub struct MockUpdater;

#[async_trait]
impl SoftwareUpdater for MockUpdater {
    async fn install(&self, _updates: UpdateStatus) -> Result<(), DomainError> {
        Ok(())
    }
}

/// Replays scripted readings; the last one repeats.
pub struct MockSwitchPort {
    readings: Mutex<VecDeque<u8>>,
    last: Mutex<u8>,
}

impl MockSwitchPort {
    pub fn new(readings: Vec<u8>) -> Self {
        Self {
            readings: Mutex::new(readings.into()),
            last: Mutex::new(0),
        }
    }

    pub fn idle() -> Self {
        Self::new(Vec::new())
    }
}

impl SwitchPort for MockSwitchPort {
    fn read_switches(&self) -> Result<u8, DomainError> {
        let mut last = self.last.lock().unwrap();
        if let Some(raw) = self.readings.lock().unwrap().pop_front() {
            *last = raw;
        }
        Ok(*last)
    }
}

pub fn services(stats: Arc<MockStatsSource>) -> Services {
    Services {
        stats,
        system: Arc::new(MockSystemProbe),
        updates: Arc::new(MockUpdateProbe),
        updater: Arc::new(MockUpdater),
    }
}
