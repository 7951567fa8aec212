#![allow(dead_code)]

use async_trait::async_trait;
use pistats_application::ports::{Lcd, SoftwareUpdater, StatsSource, SystemProbe, UpdateProbe};
use pistats_domain::{DomainError, Glyph, PiholeStats, UpdateStatus, Uptime};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Fake LCD
// ============================================================================

/// In-memory two-row display that tracks the cursor like the real panel.
#[derive(Debug, Default)]
pub struct FakeLcd {
    rows: [Vec<char>; 2],
    cursor: (u8, u8),
    pub backlight: bool,
    pub display: bool,
    pub blink: bool,
    pub cursor_visible: bool,
    pub glyphs: HashMap<u8, Glyph>,
    pub clears: u32,
}

impl FakeLcd {
    pub fn new() -> Self {
        Self {
            blink: true,
            cursor_visible: true,
            ..Self::default()
        }
    }

    /// Text on `row` with trailing blanks removed. Glyphs show as their slot
    /// number in the control range (`'\u{0}'` - `'\u{7}'`).
    pub fn line(&self, row: usize) -> String {
        self.rows[row].iter().collect::<String>().trim_end().to_string()
    }

    fn put(&mut self, c: char) {
        let (col, row) = self.cursor;
        let line = &mut self.rows[row as usize];
        while line.len() <= col as usize {
            line.push(' ');
        }
        line[col as usize] = c;
        self.cursor.0 += 1;
    }
}

impl Lcd for FakeLcd {
    fn clear(&mut self) -> Result<(), DomainError> {
        self.rows = [Vec::new(), Vec::new()];
        self.cursor = (0, 0);
        self.clears += 1;
        Ok(())
    }

    fn home(&mut self) -> Result<(), DomainError> {
        self.cursor = (0, 0);
        Ok(())
    }

    fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), DomainError> {
        self.cursor = (column, row.min(1));
        Ok(())
    }

    fn backlight_on(&mut self) -> Result<(), DomainError> {
        self.backlight = true;
        Ok(())
    }

    fn backlight_off(&mut self) -> Result<(), DomainError> {
        self.backlight = false;
        Ok(())
    }

    fn display_on(&mut self) -> Result<(), DomainError> {
        self.display = true;
        Ok(())
    }

    fn display_off(&mut self) -> Result<(), DomainError> {
        self.display = false;
        Ok(())
    }

    fn blink_off(&mut self) -> Result<(), DomainError> {
        self.blink = false;
        Ok(())
    }

    fn cursor_off(&mut self) -> Result<(), DomainError> {
        self.cursor_visible = false;
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<(), DomainError> {
        for c in text.chars() {
            self.put(c);
        }
        Ok(())
    }

    fn store_glyph(&mut self, slot: u8, glyph: &Glyph) -> Result<(), DomainError> {
        self.glyphs.insert(slot, *glyph);
        Ok(())
    }

    fn write_glyph(&mut self, slot: u8) -> Result<(), DomainError> {
        self.put(char::from(slot));
        Ok(())
    }
}

// ============================================================================
// Mock StatsSource
// ============================================================================

pub fn make_stats(status: &str) -> PiholeStats {
    PiholeStats {
        status: status.to_string(),
        ip_address: "192.168.1.2".to_string(),
        ads_blocked: 42,
        percentage_blocked: 12.345,
        domains_blocked: "120,000".to_string(),
        dns_queries: 336,
        clients: 7,
    }
}

pub struct MockStatsSource {
    stats: Mutex<PiholeStats>,
    call_count: AtomicU64,
    should_fail: Mutex<bool>,
}

impl MockStatsSource {
    pub fn new() -> Self {
        Self::with_stats(make_stats("enabled"))
    }

    pub fn with_stats(stats: PiholeStats) -> Self {
        Self {
            stats: Mutex::new(stats),
            call_count: AtomicU64::new(0),
            should_fail: Mutex::new(false),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock().unwrap() = fail;
    }

    pub fn set_ads_blocked(&self, ads: u64) {
        self.stats.lock().unwrap().ads_blocked = ads;
    }
}

#[async_trait]
impl StatsSource for MockStatsSource {
    async fn fetch_stats(&self) -> Result<PiholeStats, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::Http("connection refused".to_string()));
        }
        Ok(self.stats.lock().unwrap().clone())
    }
}

// ============================================================================
// Mock SystemProbe
// ============================================================================

pub struct MockSystemProbe {
    pub uptime_secs: u64,
    pub memory: Option<String>,
    pub temperature: Option<String>,
}

impl MockSystemProbe {
    pub fn new() -> Self {
        Self {
            uptime_secs: 90_061,
            memory: Some("34%".to_string()),
            temperature: Some("48.3C".to_string()),
        }
    }
}

#[async_trait]
impl SystemProbe for MockSystemProbe {
    async fn uptime(&self) -> Result<Uptime, DomainError> {
        Ok(Uptime::from_secs(self.uptime_secs))
    }

    async fn memory_usage(&self) -> Result<String, DomainError> {
        self.memory
            .clone()
            .ok_or_else(|| DomainError::IoError("no meminfo".to_string()))
    }

    async fn temperature(&self) -> Result<String, DomainError> {
        self.temperature
            .clone()
            .ok_or_else(|| DomainError::IoError("no thermal zone".to_string()))
    }
}

// ============================================================================
// Mock UpdateProbe / SoftwareUpdater
// ============================================================================

pub struct MockUpdateProbe {
    status: Mutex<UpdateStatus>,
}

impl MockUpdateProbe {
    pub fn new() -> Self {
        Self::with_status(UpdateStatus::default())
    }

    pub fn with_status(status: UpdateStatus) -> Self {
        Self {
            status: Mutex::new(status),
        }
    }

    pub fn set_status(&self, status: UpdateStatus) {
        *self.status.lock().unwrap() = status;
    }
}

#[async_trait]
impl UpdateProbe for MockUpdateProbe {
    async fn check(&self) -> UpdateStatus {
        *self.status.lock().unwrap()
    }
}

#[derive(Default)]
pub struct MockUpdater {
    installed: Mutex<Vec<UpdateStatus>>,
}

impl MockUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn installed(&self) -> Vec<UpdateStatus> {
        self.installed.lock().unwrap().clone()
    }
}

#[async_trait]
impl SoftwareUpdater for MockUpdater {
    async fn install(&self, updates: UpdateStatus) -> Result<(), DomainError> {
        self.installed.lock().unwrap().push(updates);
        Ok(())
    }
}

// ============================================================================
// Wiring
// ============================================================================

pub struct Harness {
    pub stats: Arc<MockStatsSource>,
    pub updates: Arc<MockUpdateProbe>,
    pub updater: Arc<MockUpdater>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(MockStatsSource::new()),
            updates: Arc::new(MockUpdateProbe::new()),
            updater: Arc::new(MockUpdater::new()),
        }
    }

    pub fn collect(&self) -> Arc<pistats_application::use_cases::CollectSnapshotUseCase> {
        Arc::new(pistats_application::use_cases::CollectSnapshotUseCase::new(
            self.stats.clone(),
            Arc::new(MockSystemProbe::new()),
            self.updates.clone(),
        ))
    }
}
