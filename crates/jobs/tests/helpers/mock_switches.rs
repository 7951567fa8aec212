#![allow(dead_code)]

use pistats_application::ports::SwitchPort;
use pistats_domain::DomainError;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Replays scripted switch port readings; the last one repeats forever.
pub struct MockSwitchPort {
    readings: Mutex<VecDeque<Result<u8, ()>>>,
    last: Mutex<u8>,
    reads: AtomicUsize,
}

impl MockSwitchPort {
    pub fn new(readings: Vec<u8>) -> Self {
        Self::scripted(readings.into_iter().map(Ok).collect())
    }

    /// `Err(())` entries make the read fail.
    pub fn scripted(readings: Vec<Result<u8, ()>>) -> Self {
        Self {
            readings: Mutex::new(readings.into()),
            last: Mutex::new(0),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl SwitchPort for MockSwitchPort {
    fn read_switches(&self) -> Result<u8, DomainError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let mut last = self.last.lock().unwrap();
        match self.readings.lock().unwrap().pop_front() {
            Some(Ok(raw)) => {
                *last = raw;
                Ok(raw)
            }
            Some(Err(())) => Err(DomainError::Hardware("SPI transfer failed".to_string())),
            None => Ok(*last),
        }
    }
}
