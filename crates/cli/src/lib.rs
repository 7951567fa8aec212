//! # pistats
//!
//! Pi-hole statistics on a PiFace Control and Display board, plus the small
//! `lcd-*` tools for driving the display by hand.

pub mod args;
pub mod bootstrap;
pub mod daemon;
pub mod di;
