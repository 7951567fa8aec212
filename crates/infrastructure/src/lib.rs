//! pistats infrastructure: PiFace board driver, Pi-hole client and local
//! system readers.
pub mod lcd;
pub mod pihole;
pub mod system;
