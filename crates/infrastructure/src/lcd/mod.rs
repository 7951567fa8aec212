pub mod hd44780;
pub mod mcp23s17;
pub mod piface;

pub use hd44780::Hd44780;
pub use mcp23s17::{Mcp23s17, SpiBus};
pub use piface::{open_piface, PifaceLcd, PifaceSwitches};
