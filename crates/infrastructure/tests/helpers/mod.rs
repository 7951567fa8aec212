pub mod pihole_mock;

#[allow(unused_imports)]
pub use pihole_mock::*;
