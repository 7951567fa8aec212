pub mod mock_switches;

#[allow(unused_imports)]
pub use mock_switches::*;
